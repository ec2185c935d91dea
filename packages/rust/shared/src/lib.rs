//! Shared types, error model, and configuration for cocktaildex.
//!
//! This crate is the foundation depended on by all other cocktaildex crates.
//! It provides:
//! - [`CocktaildexError`], the unified error type
//! - Domain types ([`CatalogEntry`])
//! - Configuration ([`AppConfig`], [`FetchConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, FetchConfig, LexiconConfig, OutputConfig, SourceConfig, config_file_path,
    init_config, load_config, load_config_from, validate_base_url,
};
pub use error::{CocktaildexError, Result};
pub use types::CatalogEntry;
