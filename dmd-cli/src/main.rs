//! DMD CLI - Command line probe for the disaster monitoring backend.

use clap::Parser;
use dmd_cmd::report::OutputFormat;

#[derive(Parser)]
#[command(
    name = "dmd-cli",
    version,
    about = "Disaster monitoring dashboard toolkit"
)]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, default_value = "http://localhost:5000")]
    api_base: String,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: dmd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("using backend {}", cli.api_base);
    dmd_cmd::run(cli.command, &cli.api_base, cli.format).await
}
