use axum::{
    routing::{get, post},
    Extension, Router,
};
use lsa_search::corpus::{self, CorpusConfig};
use lsa_search::index::{IndexConfig, SearchIndex};
use lsa_search::search::handlers::{handle_home, handle_search};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: Option<SocketAddr> = None;
    let mut corpus_source: Option<String> = None;
    let mut stopwords_source: Option<String> = None;
    let mut cache_dir = PathBuf::from("data");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--corpus" => {
                corpus_source = Some(args[i + 1].clone());
                i += 2;
            }
            "--stopwords" => {
                stopwords_source = Some(args[i + 1].clone());
                i += 2;
            }
            "--cache-dir" => {
                cache_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let (bind_addr, corpus_source, stopwords_source) =
        match (bind_addr, corpus_source, stopwords_source) {
            (Some(bind), Some(corpus), Some(stopwords)) => (bind, corpus, stopwords),
            _ => {
                eprintln!(
                    "Usage: {} --bind <addr:port> --corpus <url-or-path> --stopwords <url-or-path> [--cache-dir <dir>]",
                    args[0]
                );
                eprintln!(
                    "Example: {} --bind 127.0.0.1:5000 --corpus https://example.org/newsgroups.json --stopwords ./stopwords.txt",
                    args[0]
                );
                std::process::exit(1);
            }
        };

    // 1. Corpus (fetch + cache):
    let corpus_config = CorpusConfig {
        corpus_source,
        stopwords_source,
        cache_dir,
    };
    let corpus = corpus::load(&corpus_config).await?;

    // 2. Index (TF-IDF + LSA), built once before serving starts:
    let index = SearchIndex::build(corpus, &IndexConfig::default())?;
    let index = Arc::new(index);

    // 3. HTTP Router:
    let app = Router::new()
        .route("/", get(handle_home))
        .route("/search", post(handle_search))
        .layer(Extension(index));

    tracing::info!("Search service listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
