use super::types::{Corpus, CorpusConfig};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

const CORPUS_CACHE_FILE: &str = "corpus.json";
const STOPWORDS_CACHE_FILE: &str = "stopwords.txt";
const FETCH_ATTEMPTS: usize = 3;

/// Load the document collection and the stopword set.
///
/// Runs exactly once at startup. Both resources must be available and
/// non-degenerate; any failure aborts startup.
pub async fn load(config: &CorpusConfig) -> Result<Corpus> {
    let raw_corpus = fetch_source(
        &config.corpus_source,
        &config.cache_dir.join(CORPUS_CACHE_FILE),
    )
    .await
    .with_context(|| format!("failed to obtain corpus from {}", config.corpus_source))?;

    let raw_stopwords = fetch_source(
        &config.stopwords_source,
        &config.cache_dir.join(STOPWORDS_CACHE_FILE),
    )
    .await
    .with_context(|| {
        format!(
            "failed to obtain stopword list from {}",
            config.stopwords_source
        )
    })?;

    let documents = parse_documents(&raw_corpus)?;
    let stopwords = parse_stopwords(&raw_stopwords);

    tracing::info!(
        "Loaded corpus: {} documents, {} stopwords",
        documents.len(),
        stopwords.len()
    );

    Ok(Corpus {
        documents,
        stopwords,
    })
}

/// Resolve a source string into its text content.
///
/// URLs are fetched once and cached at `cache_path`; a warm cache wins over
/// the network. Plain paths are read directly and never cached.
async fn fetch_source(source: &str, cache_path: &Path) -> Result<String> {
    if !is_url(source) {
        let text = tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("failed to read {}", source))?;
        return Ok(text);
    }

    if cache_path.exists() {
        tracing::debug!("Using cached copy at {}", cache_path.display());
        let text = tokio::fs::read_to_string(cache_path)
            .await
            .with_context(|| format!("failed to read cache file {}", cache_path.display()))?;
        return Ok(text);
    }

    let text = fetch_with_retry(source, FETCH_ATTEMPTS).await?;

    if let Some(parent) = cache_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }
    if let Err(err) = tokio::fs::write(cache_path, &text).await {
        tracing::warn!("Failed to cache {}: {}", cache_path.display(), err);
    }

    Ok(text)
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

async fn fetch_with_retry(url: &str, attempts: usize) -> Result<String> {
    let client = reqwest::Client::new();
    let mut delay_ms = 500u64;

    for attempt in 0..attempts {
        let response = client
            .get(url)
            .timeout(std::time::Duration::from_secs(60))
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                return resp.text().await.context("failed to read response body");
            }
            Ok(resp) => {
                if attempt + 1 == attempts {
                    anyhow::bail!("{} returned status {}", url, resp.status());
                }
                tracing::error!("Fetch of {} returned {}, retrying", url, resp.status());
            }
            Err(err) => {
                if attempt + 1 == attempts {
                    return Err(anyhow::anyhow!(err));
                }
                tracing::error!("Fetch of {} failed: {}, retrying", url, err);
            }
        }

        let jitter = rand::random::<u64>() % 100;
        tokio::time::sleep(std::time::Duration::from_millis(delay_ms + jitter)).await;
        delay_ms = (delay_ms * 2).min(4000);
    }

    Err(anyhow::anyhow!("Retry attempts exhausted for {}", url))
}

/// Decode the corpus wire format: a JSON array of document strings.
pub(crate) fn parse_documents(raw: &str) -> Result<Vec<String>> {
    let documents: Vec<String> =
        serde_json::from_str(raw).context("corpus is not a JSON array of strings")?;
    if documents.is_empty() {
        anyhow::bail!("corpus is empty");
    }
    Ok(documents)
}

/// Decode the stopword list: plaintext, one term per line.
///
/// Blank lines and `#` comments are skipped; terms are lowercased and
/// deduplicated.
pub(crate) fn parse_stopwords(raw: &str) -> HashSet<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}
