//! Wire model for the drinks source payloads.
//!
//! `search.php` returns `{"drinks": [...]}` with `drinks` null when a key
//! matches nothing. Each drink carries its components as positional field
//! pairs `strIngredient1..15` / `strMeasure1..15`; slots may be null, empty,
//! or whitespace-only anywhere in the range.

use std::collections::HashMap;

use serde::Deserialize;

/// Number of positional component slots per record.
pub const COMPONENT_SLOTS: usize = 15;

// ---------------------------------------------------------------------------
// SearchResponse
// ---------------------------------------------------------------------------

/// Top-level payload of one `search.php` call.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    /// Null (not an empty list) when the key has no records.
    pub drinks: Option<Vec<RawRecord>>,
}

// ---------------------------------------------------------------------------
// RawRecord
// ---------------------------------------------------------------------------

/// One drink as returned by the source, prior to localization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    /// Primary drink name.
    #[serde(rename = "strDrink")]
    pub name: String,
    /// Free-text preparation instructions.
    #[serde(rename = "strInstructions")]
    pub description: Option<String>,
    /// Remaining payload fields, including the positional component slots.
    #[serde(flatten)]
    fields: HashMap<String, Option<String>>,
}

impl RawRecord {
    /// Combined component strings in slot order, sparse slots skipped.
    ///
    /// A slot counts as present when its ingredient is non-blank. The
    /// ingredient text is kept as returned; the measure, when present, is
    /// trimmed and attached as `"<ingredient> (<measure>)"`.
    pub fn component_strings(&self) -> Vec<String> {
        (1..=COMPONENT_SLOTS)
            .filter_map(|i| {
                let ingredient = self.slot(&format!("strIngredient{i}"))?;
                let combined = match self.slot(&format!("strMeasure{i}")) {
                    Some(measure) => format!("{ingredient} ({})", measure.trim()),
                    None => ingredient.to_string(),
                };
                Some(combined)
            })
            .collect()
    }

    /// Raw field value, with null/empty/whitespace-only treated as absent.
    fn slot(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(|value| value.as_deref())
            .filter(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: serde_json::Value) -> RawRecord {
        serde_json::from_value(json).expect("deserialize record")
    }

    #[test]
    fn combines_ingredient_and_trimmed_measure() {
        let rec = record(serde_json::json!({
            "strDrink": "Martini",
            "strInstructions": "Stir and strain.",
            "strIngredient1": "Gin",
            "strMeasure1": "50 ml ",
            "strIngredient2": "Dry Vermouth",
            "strMeasure2": " 10 ml",
        }));

        assert_eq!(
            rec.component_strings(),
            vec!["Gin (50 ml)", "Dry Vermouth (10 ml)"]
        );
    }

    #[test]
    fn missing_measure_keeps_bare_ingredient() {
        let rec = record(serde_json::json!({
            "strDrink": "Salty Dog",
            "strIngredient1": "Salt",
            "strMeasure1": null,
            "strIngredient2": "Vodka",
            "strMeasure2": "4 cl",
        }));

        assert_eq!(rec.component_strings(), vec!["Salt", "Vodka (4 cl)"]);
    }

    #[test]
    fn sparse_and_blank_slots_are_skipped() {
        let rec = record(serde_json::json!({
            "strDrink": "Gappy",
            "strIngredient1": "Gin",
            "strMeasure1": "1 oz",
            "strIngredient2": null,
            "strIngredient3": "",
            "strIngredient4": "   ",
            "strMeasure4": "2 oz",
            "strIngredient5": "Tonic water",
        }));

        assert_eq!(rec.component_strings(), vec!["Gin (1 oz)", "Tonic water"]);
    }

    #[test]
    fn whitespace_only_measure_is_treated_as_absent() {
        let rec = record(serde_json::json!({
            "strDrink": "Padded",
            "strIngredient1": "Rum",
            "strMeasure1": "   ",
        }));

        assert_eq!(rec.component_strings(), vec!["Rum"]);
    }

    #[test]
    fn slot_order_is_preserved_without_dedup() {
        let rec = record(serde_json::json!({
            "strDrink": "Layered",
            "strIngredient1": "Rum",
            "strMeasure1": "1 part",
            "strIngredient2": "Rum",
            "strMeasure2": "1 part",
        }));

        assert_eq!(rec.component_strings(), vec!["Rum (1 part)", "Rum (1 part)"]);
    }

    #[test]
    fn missing_instructions_deserialize_as_none() {
        let rec = record(serde_json::json!({
            "strDrink": "Quiet",
            "strIngredient1": "Vodka",
        }));

        assert!(rec.description.is_none());
        assert_eq!(rec.name, "Quiet");
    }

    #[test]
    fn null_drinks_payload_parses() {
        let payload: SearchResponse =
            serde_json::from_str(r#"{"drinks": null}"#).expect("parse payload");
        assert!(payload.drinks.is_none());
    }
}
