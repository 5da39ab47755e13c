use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use translatr_config::Config;

use crate::controller::AppController;
use crate::state::AppState;

mod controller;
mod events;
mod io;
mod state;
mod ui;

#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(author, version, about = "Translatr terminal client", long_about = None)]
struct Cli {
    /// Base URL of the word service (overrides TRANSLATR_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Set verbosity level (use -v or -vv for increasing verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Logs go to stderr so they do not interleave with rendered output.
fn setup_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut config = Config::from_env();
    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
    }

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(Arc::clone(&state));
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = tasks.join_next() => {
            if let Some(Ok(Err(e))) = result {
                tracing::error!("task exited: {e}");
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;
    Ok(())
}
