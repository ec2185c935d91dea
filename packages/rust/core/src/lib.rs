//! Core pipeline orchestration and domain logic for cocktaildex.
//!
//! This crate ties together source retrieval, localization, and artifact
//! writing into the end-to-end catalog run.

pub mod pipeline;
pub mod writer;

pub use pipeline::{
    PipelineConfig, ProgressReporter, RunSummary, SilentProgress, localize_record, run,
};
pub use writer::write_catalog;
