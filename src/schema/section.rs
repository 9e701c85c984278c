//! Section and site specifications — the engine's JSON-facing output model.

use serde::{Deserialize, Serialize};

/// Dynamic property bag handed to renderers.
///
/// Template props are heterogeneous by nature (menu item lists, image URLs,
/// nested feature cards), so this alias is the one place in the crate where
/// dynamic typing is allowed to exist. Everything upstream of the renderer
/// seam works on concrete typed records.
pub type Props = serde_json::Map<String, serde_json::Value>;

/// One resolved, customized section ready for rendering.
///
/// Order within `SiteSpec::sections` is significant and preserved end to end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    #[serde(rename = "type")]
    pub section_type: String,
    pub variant: Option<String>,
    #[serde(default)]
    pub props: Props,
}

/// The full ordered composition of sections plus page-level metadata for one
/// generated site. Never mutated after creation — a new request yields a new
/// `SiteSpec`. Round-trips losslessly through JSON; this is the externally
/// inspectable contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSpec {
    pub title: String,
    pub description: String,
    pub sections: Vec<SectionSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_spec() -> SiteSpec {
        let mut props = Props::new();
        props.insert("logo".to_string(), json!("Blue Sky"));
        props.insert(
            "menuItems".to_string(),
            json!([{"label": "Home", "link": "/"}, {"label": "About"}]),
        );
        SiteSpec {
            title: "Blue Sky".to_string(),
            description: "Blue Sky Consulting helps startups grow".to_string(),
            sections: vec![SectionSpec {
                section_type: "header".to_string(),
                variant: Some("modern".to_string()),
                props,
            }],
        }
    }

    #[test]
    fn json_round_trip_is_lossless() {
        let spec = make_spec();
        let serialized = serde_json::to_string(&spec).unwrap();
        let deserialized: SiteSpec = serde_json::from_str(&serialized).unwrap();
        assert_eq!(spec, deserialized);
    }

    #[test]
    fn section_type_serializes_as_type() {
        let spec = make_spec();
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["sections"][0]["type"], json!("header"));
        assert!(value["sections"][0].get("section_type").is_none());
    }

    #[test]
    fn missing_props_deserialize_to_empty_map() {
        let section: SectionSpec =
            serde_json::from_str(r#"{"type": "hero", "variant": null}"#).unwrap();
        assert_eq!(section.section_type, "hero");
        assert!(section.props.is_empty());
    }
}
