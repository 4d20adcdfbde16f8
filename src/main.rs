use anyhow::Result;
use clap::Parser;
use pbrates::log::init_logging;

/// Get exchange rates of USD and EUR from the PrivatBank API.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Number of days for which to get exchange rates. Maximum value is 10.
    days: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long)]
    config_path: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = pbrates::run(cli.days, cli.config_path.as_deref()).await;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
