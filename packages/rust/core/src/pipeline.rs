//! End-to-end catalog pipeline: fetch → localize → write.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, instrument};

use cocktaildex_fetcher::{RawRecord, SourceClient};
use cocktaildex_lexicon::Lexicon;
use cocktaildex_shared::{CatalogEntry, FetchConfig, Result};

use crate::writer;

/// Configuration for one catalog run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Fetch settings (base URL, rate limit, timeout).
    pub fetch: FetchConfig,
    /// Path of the catalog artifact.
    pub output_path: PathBuf,
}

/// Result of a completed catalog run.
#[derive(Debug)]
pub struct RunSummary {
    /// Path of the written artifact.
    pub output_path: PathBuf,
    /// Number of catalog entries written.
    pub entry_count: usize,
    /// Entries that had a curated override applied.
    pub overridden: usize,
    /// Keys whose retrieval failed, with messages.
    pub failed_keys: Vec<(char, String)>,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when the pipeline completes.
    fn done(&self, summary: &RunSummary);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn done(&self, _summary: &RunSummary) {}
}

/// Run the full catalog pipeline.
///
/// 1. Fetch raw records over the key space
/// 2. Localize each record into a [`CatalogEntry`]
/// 3. Write the catalog artifact
///
/// Entry order follows fetch order: key order first, source order within a
/// key. Zero entries is a run failure; the artifact is left untouched.
#[instrument(skip_all, fields(output = %config.output_path.display()))]
pub async fn run(
    config: &PipelineConfig,
    lexicon: &Lexicon,
    progress: &dyn ProgressReporter,
) -> Result<RunSummary> {
    let start = Instant::now();

    info!(base_url = %config.fetch.base_url, "starting catalog run");

    // --- Phase 1: Fetch ---
    progress.phase("Fetching records");
    let client = SourceClient::new(config.fetch.clone())?;
    let (fetch_summary, records) = client.fetch_all().await?;

    // --- Phase 2: Localize ---
    progress.phase("Localizing entries");
    let entries: Vec<CatalogEntry> = records
        .iter()
        .map(|record| localize_record(record, lexicon))
        .collect();
    let overridden = records
        .iter()
        .filter(|record| lexicon.entry(&record.name).is_some())
        .count();

    // --- Phase 3: Write ---
    progress.phase("Writing catalog");
    writer::write_catalog(&config.output_path, &entries)?;

    let summary = RunSummary {
        output_path: config.output_path.clone(),
        entry_count: entries.len(),
        overridden,
        failed_keys: fetch_summary.failures,
        elapsed: start.elapsed(),
    };

    progress.done(&summary);

    info!(
        entries = summary.entry_count,
        overridden = summary.overridden,
        failed_keys = summary.failed_keys.len(),
        elapsed_ms = summary.elapsed.as_millis(),
        "catalog run complete"
    );

    Ok(summary)
}

/// Build one catalog entry from a raw record.
///
/// The two component lists stay index-aligned: slot order is preserved and
/// every raw string has its localized counterpart at the same position.
pub fn localize_record(record: &RawRecord, lexicon: &Lexicon) -> CatalogEntry {
    let components = record.component_strings();
    let localized_components: Vec<String> = components
        .iter()
        .map(|raw| lexicon.localize_component(&record.name, raw))
        .collect();

    CatalogEntry {
        name: record.name.clone(),
        localized_name: lexicon.localized_name(&record.name),
        description: record.description.clone(),
        localized_description: lexicon
            .localized_description(&record.name, &localized_components),
        components,
        localized_components,
    }
}
