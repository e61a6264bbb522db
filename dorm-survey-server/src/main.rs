use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dorm_survey_server::Server;
use dorm_survey_server::config::load_config;
use dorm_survey_server::logger::init_logging;
use tracing::info;

/// Serve the dormitory survey page.
#[derive(Debug, Parser)]
#[command(name = "dorm-survey-server", version, about)]
struct Args {
    /// Path to the configuration file.
    #[arg(short, long, env = "DORM_SURVEY_CONFIG", default_value = "dorm-survey.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let cfg = load_config(&args.config).context("Critical: Configuration is malformed")?;
    init_logging(&cfg.log)?;
    info!("Loaded config from {}", args.config.display());

    Server::builder().config(cfg).build()?.run().await
}
