//! Translation tables and localization for the drinks catalog.
//!
//! A [`Lexicon`] holds two curated tables: a global ingredient-name map and
//! per-drink override entries (localized name, localized instructions, and
//! optional per-drink ingredient substitutions). All lookups are exact-match
//! and never fail; unknown names pass through unchanged so untranslated
//! source data still reaches the catalog intact.

mod describe;
mod parser;

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use serde::Deserialize;
use tracing::info;

use cocktaildex_shared::{CocktaildexError, Result};

pub use parser::{Component, parse_component};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Curated override entry for a well-known drink.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryOverride {
    /// Localized drink name.
    pub name: String,
    /// Localized instructions, used verbatim instead of synthesis.
    pub description: String,
    /// Per-drink ingredient translations, consulted before the global map.
    #[serde(default)]
    pub components: HashMap<String, String>,
}

/// Immutable translation tables, loaded once at pipeline start.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Lexicon {
    /// Global ingredient-name map.
    #[serde(default)]
    components: HashMap<String, String>,
    /// Per-drink overrides keyed by primary name.
    #[serde(default)]
    entries: HashMap<String, EntryOverride>,
}

/// Tables compiled into the crate from `data/ja.toml`.
static BUILTIN: LazyLock<Lexicon> =
    LazyLock::new(|| toml::from_str(include_str!("../data/ja.toml")).expect("builtin lexicon"));

impl Lexicon {
    /// The curated tables shipped with the binary.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Parse tables from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CocktaildexError::config(format!("invalid lexicon table: {e}")))
    }

    /// Load tables from an external TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CocktaildexError::io(path, e))?;
        let lexicon = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            components = lexicon.components.len(),
            entries = lexicon.entries.len(),
            "loaded external lexicon"
        );
        Ok(lexicon)
    }

    /// Curated override for a drink, if one exists.
    pub fn entry(&self, primary: &str) -> Option<&EntryOverride> {
        self.entries.get(primary)
    }

    /// Translate a component name through the global map, passthrough on miss.
    pub fn translate(&self, name: &str) -> String {
        self.components
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }

    /// Localized drink name: curated when an override exists, else unchanged.
    pub fn localized_name(&self, primary: &str) -> String {
        match self.entries.get(primary) {
            Some(entry) => entry.name.clone(),
            None => primary.to_string(),
        }
    }

    /// Localize one combined component string in the context of a drink.
    ///
    /// The name portion resolves through the drink's own substitutions first,
    /// then the global map, then passes through unchanged. The quantity, when
    /// present, is re-attached as-is; quantity text is never translated.
    pub fn localize_component(&self, primary: &str, raw: &str) -> String {
        let component = parser::parse_component(raw);
        let translated = self
            .entries
            .get(primary)
            .and_then(|entry| entry.components.get(&component.name))
            .or_else(|| self.components.get(&component.name))
            .cloned()
            .unwrap_or(component.name);

        match component.quantity {
            Some(quantity) => format!("{translated} ({quantity})"),
            None => translated,
        }
    }

    /// Localized description: curated text wins verbatim, else synthesized
    /// deterministically from the localized component list.
    pub fn localized_description(
        &self,
        primary: &str,
        localized_components: &[String],
    ) -> String {
        match self.entries.get(primary) {
            Some(entry) => entry.description.clone(),
            None => describe::synthesize_description(localized_components),
        }
    }
}
