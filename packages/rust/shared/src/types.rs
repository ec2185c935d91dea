//! Core domain types for the cocktaildex catalog.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CatalogEntry
// ---------------------------------------------------------------------------

/// One drink in the generated catalog (`data/cocktails.json`).
///
/// The downstream search UI loads the artifact once and substring-matches
/// over `name`/`localizedName` and the two component lists, so the JSON
/// member names and the index alignment between `components` and
/// `localized_components` are part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Primary (English) drink name as returned by the source.
    pub name: String,
    /// Japanese name: curated override when one exists, else `name` verbatim.
    pub localized_name: String,
    /// Combined component strings in source slot order, e.g. `"Gin (50 ml)"`.
    pub components: Vec<String>,
    /// Localized counterparts, index-aligned with `components`.
    pub localized_components: Vec<String>,
    /// Free-text preparation instructions from the source, if any.
    pub description: Option<String>,
    /// Japanese instructions: curated override verbatim, else synthesized
    /// from `localized_components`.
    pub localized_description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_with_camel_case_members() {
        let entry = CatalogEntry {
            name: "Martini".into(),
            localized_name: "マティーニ".into(),
            components: vec!["Gin (50 ml)".into(), "Dry Vermouth (10 ml)".into()],
            localized_components: vec!["ジン (50 ml)".into(), "ドライベルモット (10 ml)".into()],
            description: Some("Stir with ice and strain.".into()),
            localized_description: "氷とともにステアし、グラスに注ぎます。".into(),
        };

        let json = serde_json::to_value(&entry).expect("serialize");
        let obj = json.as_object().expect("object");
        for key in [
            "name",
            "localizedName",
            "components",
            "localizedComponents",
            "description",
            "localizedDescription",
        ] {
            assert!(obj.contains_key(key), "missing member {key}");
        }
        assert_eq!(obj.len(), 6);
        assert_eq!(obj["localizedComponents"][0], "ジン (50 ml)");
    }

    #[test]
    fn missing_description_is_null_not_absent() {
        let entry = CatalogEntry {
            name: "Mystery".into(),
            localized_name: "Mystery".into(),
            components: vec![],
            localized_components: vec![],
            description: None,
            localized_description: "を混ぜ合わせます。".into(),
        };

        let json = serde_json::to_value(&entry).expect("serialize");
        assert!(json["description"].is_null());
    }

    #[test]
    fn entry_roundtrip() {
        let entry = CatalogEntry {
            name: "Negroni".into(),
            localized_name: "ネグローニ".into(),
            components: vec!["Gin (30 ml)".into()],
            localized_components: vec!["ジン (30 ml)".into()],
            description: None,
            localized_description: "ジン (30 ml)を混ぜ合わせます。".into(),
        };

        let json = serde_json::to_string_pretty(&entry).expect("serialize");
        let parsed: CatalogEntry = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, entry);
    }

    #[test]
    fn catalog_fixture_validates() {
        let fixture = std::fs::read_to_string("../../../fixtures/json/catalog.fixture.json")
            .expect("read fixture");
        let parsed: Vec<CatalogEntry> =
            serde_json::from_str(&fixture).expect("deserialize fixture catalog");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].name, "Margarita");
        assert_eq!(parsed[0].components.len(), parsed[0].localized_components.len());
    }
}
