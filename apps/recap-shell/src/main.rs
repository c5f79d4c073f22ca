use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = recap_shell::Args::parse();

	recap_shell::run(args).await
}
