//! folio entry point

use clap::Parser;
use folio::{
    config::Config,
    error::Result,
    rag::{AnswerBackend, RagBackend},
    server::{run_server, AppState},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Personal portfolio site with a retrieval-backed assistant", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides config and PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;

    // Missing provider configuration degrades /ask, it never stops boot.
    let backend: Option<Arc<dyn AnswerBackend>> = match RagBackend::from_config(&config) {
        Some(backend) => {
            info!(
                chat_model = %config.cohere.chat_model,
                collection = %config.collection_name,
                "retrieval backend configured"
            );
            Some(Arc::new(backend))
        }
        None => {
            warn!(
                "{} is not set; /ask will return a fixed advisory",
                config.cohere.api_key_env
            );
            None
        }
    };

    run_server(&config.bind_addr(), AppState { backend }).await
}
