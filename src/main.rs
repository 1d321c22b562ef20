use clap::Parser;
use std::path::PathBuf;

/// Mouse gestures mapped to keyboard shortcuts
#[derive(Debug, Parser)]
#[command(name = "gesture-hook", version, about)]
struct Cli {
    /// JSON config file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    gesture_hook::init_tracing();
    gesture_hook::run(cli.config.as_deref()).await
}
