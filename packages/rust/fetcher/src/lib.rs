//! Sequential keyed fetch over the drinks source.
//!
//! The source indexes drinks by first letter, so one run walks the fixed key
//! space `a..=z` with one `search.php?f=<key>` call per key. A failing key is
//! logged and contributes nothing; the run always attempts every key. A fixed
//! delay separates successive calls regardless of outcome, as rate-limiting
//! courtesy to the upstream source.

mod records;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use cocktaildex_shared::{CocktaildexError, FetchConfig, Result};

pub use records::{COMPONENT_SLOTS, RawRecord};

use records::SearchResponse;

/// User-Agent string for source requests.
const USER_AGENT: &str = concat!("cocktaildex/", env!("CARGO_PKG_VERSION"));

/// The fixed key space: every drink is reachable through its first letter.
const KEY_SPACE: std::ops::RangeInclusive<char> = 'a'..='z';

// ---------------------------------------------------------------------------
// FetchSummary
// ---------------------------------------------------------------------------

/// Summary of a completed fetch over the key space.
#[derive(Debug, Clone)]
pub struct FetchSummary {
    /// Number of keys attempted (always the full key space).
    pub keys_attempted: usize,
    /// Keys whose retrieval failed, with the failure message.
    pub failures: Vec<(char, String)>,
    /// Total records accumulated across all keys.
    pub records_fetched: usize,
    /// Total duration of the fetch.
    pub duration: Duration,
}

// ---------------------------------------------------------------------------
// SourceClient
// ---------------------------------------------------------------------------

/// HTTP client for the drinks source.
pub struct SourceClient {
    config: FetchConfig,
    client: Client,
}

impl SourceClient {
    /// Create a client with the given fetch configuration.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                CocktaildexError::Network(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self { config, client })
    }

    /// Fetch every key in the key space, one call per key, in order.
    ///
    /// Returns a summary and the accumulated records in key order (within a
    /// key, in source-returned order). Per-key failures are recorded in the
    /// summary and never abort the run.
    #[instrument(skip_all, fields(base_url = %self.config.base_url))]
    pub async fn fetch_all(&self) -> Result<(FetchSummary, Vec<RawRecord>)> {
        let start_time = std::time::Instant::now();

        let mut records: Vec<RawRecord> = Vec::new();
        let mut failures: Vec<(char, String)> = Vec::new();
        let mut keys_attempted: usize = 0;

        info!(
            rate_limit_ms = self.config.rate_limit_ms,
            "starting fetch over key space"
        );

        let mut keys = KEY_SPACE.peekable();
        while let Some(key) = keys.next() {
            keys_attempted += 1;

            match self.fetch_key(key).await {
                Ok(batch) => {
                    info!(%key, records = batch.len(), "key fetched");
                    records.extend(batch);
                }
                Err(e) => {
                    warn!(%key, error = %e, "key fetch failed, continuing");
                    failures.push((key, e.to_string()));
                }
            }

            // Fixed delay between successive calls, success or failure alike.
            // No delay trails the final key.
            if keys.peek().is_some() && self.config.rate_limit_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.config.rate_limit_ms)).await;
            }
        }

        let summary = FetchSummary {
            keys_attempted,
            failures,
            records_fetched: records.len(),
            duration: start_time.elapsed(),
        };

        info!(
            records = summary.records_fetched,
            failed_keys = summary.failures.len(),
            duration_ms = summary.duration.as_millis(),
            "fetch completed"
        );

        Ok((summary, records))
    }

    /// Perform one retrieval call for a single key.
    async fn fetch_key(&self, key: char) -> Result<Vec<RawRecord>> {
        let base = self.config.base_url.trim_end_matches('/');
        let url = format!("{base}/search.php?f={key}");
        debug!(%key, %url, "requesting key");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CocktaildexError::Network(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CocktaildexError::Network(format!("{url}: HTTP {status}")));
        }

        let payload: SearchResponse = response
            .json()
            .await
            .map_err(|e| CocktaildexError::payload(format!("{url}: {e}")))?;

        // `drinks` is null when the key matches nothing.
        Ok(payload.drinks.unwrap_or_default())
    }
}
