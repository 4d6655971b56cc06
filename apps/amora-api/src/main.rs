use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = amora_api::Args::parse();
	amora_api::run(args).await
}
