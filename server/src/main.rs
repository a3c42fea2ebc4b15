use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todo_server::config::Config;
use todo_server::{app, cors_layer, AppState, MemoryStore, OpenAiSummarizer, PostgrestStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.log_summary();

    let summarizer = OpenAiSummarizer::new(config.completion());
    let state = match &config.database_url {
        Some(url) => {
            let key = config.database_key.as_deref().unwrap_or_default();
            AppState::new(PostgrestStore::new(url, key), summarizer)
        }
        None => AppState::new(MemoryStore::new(), summarizer),
    };

    let router = app(state).layer(cors_layer(&config.cors_origin)?);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    todo_server::run(listener, router).await?;
    Ok(())
}
