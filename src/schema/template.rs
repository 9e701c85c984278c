//! Catalog records — one template variant plus the keywords it matches on.

use serde::{Deserialize, Serialize};

use super::section::Props;

/// One catalog record: a component template variant with its default props
/// and the keywords the matcher scores it on.
///
/// Entries are immutable reference data; many entries share a
/// `component_type` with differing variant and keyword lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub component_type: String,
    pub variant: String,
    #[serde(default)]
    pub props: Props,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl TemplateEntry {
    /// Case-insensitive component type comparison.
    pub fn is_type(&self, component_type: &str) -> bool {
        self.component_type.eq_ignore_ascii_case(component_type)
    }

    /// Case-insensitive variant comparison.
    pub fn is_variant(&self, variant: &str) -> bool {
        self.variant.eq_ignore_ascii_case(variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry() -> TemplateEntry {
        TemplateEntry {
            component_type: "hero".to_string(),
            variant: "gradient".to_string(),
            props: Props::new(),
            keywords: vec!["tech".to_string(), "startup".to_string()],
        }
    }

    #[test]
    fn type_match_ignores_case() {
        let entry = make_entry();
        assert!(entry.is_type("hero"));
        assert!(entry.is_type("Hero"));
        assert!(entry.is_type("HERO"));
        assert!(!entry.is_type("header"));
    }

    #[test]
    fn variant_match_ignores_case() {
        let entry = make_entry();
        assert!(entry.is_variant("Gradient"));
        assert!(!entry.is_variant("split"));
    }

    #[test]
    fn keywords_default_to_empty_on_deserialize() {
        let entry: TemplateEntry =
            serde_json::from_str(r#"{"component_type": "cta", "variant": "banner"}"#).unwrap();
        assert!(entry.keywords.is_empty());
        assert!(entry.props.is_empty());
    }
}
