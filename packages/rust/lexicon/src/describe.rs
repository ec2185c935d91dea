//! Fallback description synthesis.
//!
//! Drinks without a curated entry get a generated Japanese description:
//! the localized component strings joined with `、`, followed by a fixed
//! closing clause (combine, add ice, chill, pour into a cocktail glass).

/// Separator between component strings in a synthesized description.
const SEPARATOR: &str = "、";

/// Fixed closing clause appended after the joined component list.
const CLOSING_CLAUSE: &str =
    "を混ぜ合わせます。適量の氷を入れ、よく冷やしてからカクテルグラスに注ぎます。";

/// Build a description from the localized component list.
/// Same ordered list in, same text out, byte for byte.
pub(crate) fn synthesize_description(localized_components: &[String]) -> String {
    format!("{}{CLOSING_CLAUSE}", localized_components.join(SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_components_and_appends_clause() {
        let components = vec!["ジン (50 ml)".to_string(), "ドライベルモット (10 ml)".to_string()];
        assert_eq!(
            synthesize_description(&components),
            "ジン (50 ml)、ドライベルモット (10 ml)を混ぜ合わせます。適量の氷を入れ、よく冷やしてからカクテルグラスに注ぎます。"
        );
    }

    #[test]
    fn single_component_has_no_separator() {
        let components = vec!["ウォッカ".to_string()];
        assert_eq!(
            synthesize_description(&components),
            "ウォッカを混ぜ合わせます。適量の氷を入れ、よく冷やしてからカクテルグラスに注ぎます。"
        );
    }

    #[test]
    fn empty_list_is_clause_alone() {
        assert_eq!(
            synthesize_description(&[]),
            "を混ぜ合わせます。適量の氷を入れ、よく冷やしてからカクテルグラスに注ぎます。"
        );
    }

    #[test]
    fn output_depends_on_order() {
        let ab = vec!["A".to_string(), "B".to_string()];
        let ba = vec!["B".to_string(), "A".to_string()];
        assert_ne!(synthesize_description(&ab), synthesize_description(&ba));
        assert_eq!(synthesize_description(&ab), synthesize_description(&ab));
    }
}
