use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use translatr_config::Config;
use translatr_server::server;
use translatr_store::WordStore;

#[derive(Parser, Debug)]
#[command(author, version, about = "Translatr word service", long_about = None)]
struct Cli {
    /// Address to listen on (overrides TRANSLATR_BIND)
    #[arg(long)]
    bind: Option<String>,

    /// SQLite database path (overrides TRANSLATR_DB)
    #[arg(long)]
    db_path: Option<String>,

    /// Set verbosity level (use -v or -vv for increasing verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut config = Config::from_env();
    if let Some(bind) = cli.bind {
        config.server.bind_addr = bind;
    }
    if let Some(db_path) = cli.db_path {
        config.server.db_path = db_path;
    }

    let store = Arc::new(WordStore::open(Path::new(&config.server.db_path))?);
    let listener = TcpListener::bind(&config.server.bind_addr).await?;
    tracing::info!("word service listening on {}", listener.local_addr()?);

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    server::run(listener, store, shutdown).await;
    Ok(())
}
