//! Component-string parser.
//!
//! Raw records carry each component as a single combined string, either
//! `"<name> (<quantity>)"` or a bare name. The parser splits off the
//! quantity when one is present; anything that does not match the shape is
//! treated as a name with no quantity, never an error.

use regex::Regex;
use std::sync::LazyLock;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One decomposed component slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Component name, trimmed when split from a quantity.
    pub name: String,
    /// Parenthesized quantity text, trimmed, if the slot carried one.
    pub quantity: Option<String>,
}

// ---------------------------------------------------------------------------
// Regex patterns (compiled once)
// ---------------------------------------------------------------------------

/// Matches `Name (quantity)`. Only the first parenthesized group counts as
/// the quantity; a name that itself contains parentheses is ambiguous and
/// splits at its first group.
static COMPONENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\((.*?)\)").expect("component regex"));

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Decompose one combined component string.
pub fn parse_component(raw: &str) -> Component {
    if let Some(caps) = COMPONENT_RE.captures(raw) {
        return Component {
            name: caps[1].trim().to_string(),
            quantity: Some(caps[2].trim().to_string()),
        };
    }

    Component {
        name: raw.to_string(),
        quantity: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_name_and_quantity() {
        let parsed = parse_component("Gin (50 ml)");
        assert_eq!(parsed.name, "Gin");
        assert_eq!(parsed.quantity.as_deref(), Some("50 ml"));
    }

    #[test]
    fn trims_both_captures() {
        let parsed = parse_component("Dry Vermouth   ( 10 ml )");
        assert_eq!(parsed.name, "Dry Vermouth");
        assert_eq!(parsed.quantity.as_deref(), Some("10 ml"));
    }

    #[test]
    fn bare_name_has_no_quantity() {
        let parsed = parse_component("Salt");
        assert_eq!(parsed.name, "Salt");
        assert!(parsed.quantity.is_none());
    }

    #[test]
    fn bare_name_is_kept_verbatim() {
        // No-match inputs pass through untrimmed.
        let parsed = parse_component("  Maraschino cherry");
        assert_eq!(parsed.name, "  Maraschino cherry");
        assert!(parsed.quantity.is_none());
    }

    #[test]
    fn first_group_wins_on_multiple_parens() {
        let parsed = parse_component("Juice of (fresh) lime (1)");
        assert_eq!(parsed.name, "Juice of");
        assert_eq!(parsed.quantity.as_deref(), Some("fresh"));
    }

    #[test]
    fn empty_quantity_group() {
        let parsed = parse_component("Gin ()");
        assert_eq!(parsed.name, "Gin");
        assert_eq!(parsed.quantity.as_deref(), Some(""));
    }

    #[test]
    fn multibyte_names_split_cleanly() {
        let parsed = parse_component("ジン (50 ml)");
        assert_eq!(parsed.name, "ジン");
        assert_eq!(parsed.quantity.as_deref(), Some("50 ml"));
    }
}
