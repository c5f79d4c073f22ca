use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub api: Api,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Api {
	/// Base URL of the remote notes API, without a trailing slash.
	pub base_url: String,
	pub timeout_ms: u64,
}
