use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use objscope_mock::{MockConfig, MockServer};

#[derive(Parser)]
#[command(
    name = "objscope-mock",
    about = "In-memory object store speaking the objscope wire contract",
    version
)]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on (overrides the config file)
    #[arg(short, long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => MockConfig::load(path)?,
        None => MockConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    MockServer::new(config).serve().await?;
    Ok(())
}
