mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Api, Config, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.api.base_url.trim().is_empty() {
		return Err(Error::Validation { message: "api.base_url must be non-empty.".to_string() });
	}
	if cfg.api.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "api.timeout_ms must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	while cfg.api.base_url.ends_with('/') {
		cfg.api.base_url.pop();
	}
}
