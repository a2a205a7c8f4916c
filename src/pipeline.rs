//! # Aggregation Driver
//!
//! Orchestrates the full scrape: fetch every configured source page
//! concurrently, flatten the successful extractions in page order, enrich
//! all entries with clade data in fixed-size batches, and sort the result
//! by name.
//!
//! Concurrency is plain I/O interleaving: pages are joined positionally
//! with `join_all` (page order, then in-page document order - never
//! completion order), and each enrichment batch is a full-barrier join
//! before the fixed inter-batch delay and the next batch start.

use std::future::Future;
use std::time::{Duration, Instant};

use futures::future::join_all;
use tracing::{info, warn};

use crate::clade::{Clade, WikiClient};
use crate::error::Result;
use crate::scrape::{fetch_page, DinosaurEntry, ScrapeConfig};

/// Run the whole pipeline once and return the sorted, enriched entries.
///
/// A page that fails to load or parse is dropped with a warning; a failed
/// clade lookup leaves that single entry unclassified. Only setup failures
/// (building the HTTP clients) surface as errors here.
pub async fn run(config: &ScrapeConfig) -> Result<Vec<DinosaurEntry>> {
    // No total timeout: a hung fetch blocks its batch, as documented
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .build()
        .map_err(crate::Error::Http)?;

    info!(pages = config.source_urls.len(), "starting scrape");
    let t_scrape = Instant::now();

    let fetches = config.source_urls.iter().map(|url| {
        let client = &client;
        let schema = &config.schema;
        async move {
            match fetch_page(client, url, schema).await {
                Ok(entries) => {
                    info!(url, count = entries.len(), "scraped page");
                    Some(entries)
                }
                Err(e) => {
                    warn!(url, error = %e, "skipping page");
                    None
                }
            }
        }
    });

    // Positional join keeps page order regardless of completion order
    let entries: Vec<DinosaurEntry> = join_all(fetches).await.into_iter().flatten().flatten().collect();

    info!(
        total = entries.len(),
        elapsed_ms = t_scrape.elapsed().as_millis() as u64,
        "scrape phase done, fetching clade data"
    );

    let wiki = WikiClient::new(&config.wiki_api_base, &config.user_agent)?;
    let t_enrich = Instant::now();

    let mut entries = enrich_in_batches(
        entries,
        config.batch_size,
        Duration::from_millis(config.batch_delay_ms),
        |name| {
            let wiki = wiki.clone();
            async move {
                match wiki.fetch_clade(&name).await {
                    Ok(clade) => clade,
                    Err(e) => {
                        // Contained per name: one bad lookup must not drop
                        // the rest of the batch
                        warn!(name, error = %e, "clade lookup failed");
                        None
                    }
                }
            }
        },
    )
    .await;

    info!(
        elapsed_ms = t_enrich.elapsed().as_millis() as u64,
        "enrichment phase done"
    );

    entries.sort_by_key(|entry| entry.name.to_lowercase());
    Ok(entries)
}

/// Attach classifications to all entries, `batch_size` lookups at a time.
///
/// Every lookup inside a batch runs concurrently and the batch is joined as
/// a whole before the next starts; `delay` is slept between batches but not
/// after the last one. Entry order is preserved.
pub async fn enrich_in_batches<F, Fut>(
    entries: Vec<DinosaurEntry>,
    batch_size: usize,
    delay: Duration,
    lookup: F,
) -> Vec<DinosaurEntry>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Option<Clade>>,
{
    let batches = partition(entries, batch_size);
    let last = batches.len().saturating_sub(1);
    let mut enriched = Vec::new();

    for (i, batch) in batches.into_iter().enumerate() {
        let results = join_all(batch.into_iter().map(|entry| {
            let classification = lookup(entry.name.clone());
            async move { entry.with_classification(classification.await) }
        }))
        .await;
        enriched.extend(results);

        if i != last {
            tokio::time::sleep(delay).await;
        }
    }

    enriched
}

/// Split a sequence into consecutive batches of at most `batch_size`.
fn partition(entries: Vec<DinosaurEntry>, batch_size: usize) -> Vec<Vec<DinosaurEntry>> {
    let batch_size = batch_size.max(1);
    let mut batches = Vec::with_capacity(entries.len().div_ceil(batch_size));
    let mut entries = entries.into_iter();

    loop {
        let batch: Vec<DinosaurEntry> = entries.by_ref().take(batch_size).collect();
        if batch.is_empty() {
            break;
        }
        batches.push(batch);
    }

    batches
}
