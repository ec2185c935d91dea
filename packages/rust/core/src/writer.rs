//! Catalog artifact writer.
//!
//! Each run replaces the catalog wholesale: serialize pretty-printed, write
//! to a sibling temp file, rename into place. A run that produced nothing
//! refuses to write at all, so the last good artifact survives an upstream
//! outage.

use std::path::Path;

use tracing::{debug, info, instrument};

use cocktaildex_shared::{CatalogEntry, CocktaildexError, Result};

/// Write the full entry list to `path`, or fail without touching the file.
///
/// An empty list is the failure case: the existing artifact (if any) is left
/// byte-for-byte intact and [`CocktaildexError::EmptyCatalog`] is returned.
#[instrument(skip_all, fields(path = %path.display(), entries = entries.len()))]
pub fn write_catalog(path: &Path, entries: &[CatalogEntry]) -> Result<()> {
    if entries.is_empty() {
        return Err(CocktaildexError::EmptyCatalog);
    }

    let file_name = match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => name,
        None => {
            return Err(CocktaildexError::config(format!(
                "invalid catalog path: {}",
                path.display()
            )));
        }
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CocktaildexError::io(parent, e))?;
        }
    }

    let mut json = serde_json::to_string_pretty(entries)
        .map_err(|e| CocktaildexError::Serialization(format!("catalog encoding failed: {e}")))?;
    json.push('\n');

    // Write to a temp file first, then rename into place.
    let temp = path.with_file_name(format!(".{file_name}.tmp"));
    std::fs::write(&temp, &json).map_err(|e| CocktaildexError::io(&temp, e))?;
    std::fs::rename(&temp, path).map_err(|e| CocktaildexError::io(path, e))?;

    debug!(bytes = json.len(), "catalog serialized");
    info!(entries = entries.len(), path = %path.display(), "catalog written");

    Ok(())
}
