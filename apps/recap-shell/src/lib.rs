pub mod shell;

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use recap_api::HttpApi;
use recap_store::Store;

#[derive(Debug, Parser)]
#[command(
	version = recap_cli::VERSION,
	rename_all = "kebab",
	styles = recap_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = recap_config::load(&args.config)?;

	init_tracing(&config);

	let api = Arc::new(HttpApi::new(&config.api)?);
	let store = Arc::new(Store::new(api));

	store.bootstrap().await;
	tracing::info!(folders = store.folders().len(), "Session store ready.");

	shell::run(store).await
}

fn init_tracing(config: &recap_config::Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}
