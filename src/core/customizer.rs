//! Customizer — per-component-type text rules applied to a matched template.

use chrono::{Datelike, Utc};
use serde_json::Value;

use crate::schema::industry::IndustryProfile;
use crate::schema::section::SectionSpec;
use crate::schema::template::TemplateEntry;

/// Descriptions longer than this are clipped to 147 chars plus an ellipsis.
const DESCRIPTION_LIMIT: usize = 150;
const DESCRIPTION_CLIP: usize = 147;

/// Deep-copy a matched entry's props and apply the text rules for its
/// component type, using industry context and the extracted company name.
///
/// The closed rule set covers header, hero, features, testimonials, cta and
/// footer; any other type passes through as an unmodified copy. The catalog
/// entry is never mutated.
pub fn customize(
    entry: &TemplateEntry,
    description: &str,
    industry: &IndustryProfile,
    company_name: &str,
) -> SectionSpec {
    // serde_json values clone deeply, so the catalog stays untouched.
    let mut props = entry.props.clone();

    match entry.component_type.to_ascii_lowercase().as_str() {
        "header" => {
            set_text(&mut props, "logo", company_name);
        }
        "hero" => {
            set_text(
                &mut props,
                "title",
                &industry.hero_title.replace("{company}", company_name),
            );
            set_text(&mut props, "subtitle", &industry.tagline);
            set_text(&mut props, "description", &clip_description(description));
        }
        "features" => {
            set_text(&mut props, "title", &format!("Why Choose {}", company_name));
            set_text(
                &mut props,
                "subtitle",
                "Everything you need, nothing you don't.",
            );
        }
        "testimonials" => {
            set_text(
                &mut props,
                "title",
                &format!("What Our Clients Say About {}", company_name),
            );
        }
        "cta" => {
            set_text(
                &mut props,
                "title",
                &industry.cta_template.replace("{company}", company_name),
            );
        }
        "footer" => {
            set_text(&mut props, "logo", company_name);
            set_text(
                &mut props,
                "copyright",
                &format!(
                    "© {} {}. All rights reserved.",
                    Utc::now().year(),
                    company_name
                ),
            );
        }
        _ => {}
    }

    SectionSpec {
        section_type: entry.component_type.clone(),
        variant: Some(entry.variant.clone()),
        props,
    }
}

/// Clip a description to the display limit, appending an ellipsis.
pub fn clip_description(description: &str) -> String {
    if description.chars().count() < DESCRIPTION_LIMIT {
        description.to_string()
    } else {
        let clipped: String = description.chars().take(DESCRIPTION_CLIP).collect();
        format!("{}...", clipped)
    }
}

fn set_text(props: &mut crate::schema::section::Props, key: &str, value: &str) {
    props.insert(key.to_string(), Value::String(value.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::industry::IndustrySet;
    use crate::schema::section::Props;
    use serde_json::json;

    fn entry_with_props(component_type: &str, props: Value) -> TemplateEntry {
        let props = match props {
            Value::Object(map) => map,
            _ => Props::new(),
        };
        TemplateEntry {
            component_type: component_type.to_string(),
            variant: "test".to_string(),
            props,
            keywords: Vec::new(),
        }
    }

    #[test]
    fn header_logo_becomes_company_name() {
        let industries = IndustrySet::builtin();
        let entry = entry_with_props("header", json!({"logo": "", "sticky": true}));
        let section = customize(&entry, "desc", industries.resolve("technology"), "Blue Sky");
        assert_eq!(section.props["logo"], json!("Blue Sky"));
        // Unrelated props survive the copy
        assert_eq!(section.props["sticky"], json!(true));
    }

    #[test]
    fn hero_takes_industry_phrases_and_description() {
        let industries = IndustrySet::builtin();
        let entry = entry_with_props("hero", json!({"title": "", "subtitle": ""}));
        let section = customize(
            &entry,
            "An online academy",
            industries.resolve("education"),
            "EduLearn",
        );
        assert_eq!(section.props["title"], json!("Learn Without Limits"));
        assert_eq!(
            section.props["subtitle"],
            json!("Education that meets you where you are.")
        );
        assert_eq!(section.props["description"], json!("An online academy"));
    }

    #[test]
    fn hero_description_is_clipped_at_150() {
        let industries = IndustrySet::builtin();
        let entry = entry_with_props("hero", json!({}));
        let long = "x".repeat(200);
        let section = customize(&entry, &long, industries.resolve("technology"), "Acme");
        let desc = section.props["description"].as_str().unwrap();
        assert_eq!(desc.chars().count(), 150);
        assert!(desc.ends_with("..."));
    }

    #[test]
    fn features_title_interpolates_company() {
        let industries = IndustrySet::builtin();
        let entry = entry_with_props("features", json!({}));
        let section = customize(&entry, "", industries.resolve("retail"), "ShopSphere");
        assert_eq!(section.props["title"], json!("Why Choose ShopSphere"));
        assert_eq!(
            section.props["subtitle"],
            json!("Everything you need, nothing you don't.")
        );
    }

    #[test]
    fn testimonials_title_interpolates_company() {
        let industries = IndustrySet::builtin();
        let entry = entry_with_props("testimonials", json!({}));
        let section = customize(&entry, "", industries.resolve("finance"), "CapitalWise");
        assert_eq!(
            section.props["title"],
            json!("What Our Clients Say About CapitalWise")
        );
    }

    #[test]
    fn cta_uses_industry_template() {
        let industries = IndustrySet::builtin();
        let entry = entry_with_props("cta", json!({}));
        let section = customize(&entry, "", industries.resolve("restaurant"), "Bella Cucina");
        assert_eq!(
            section.props["title"],
            json!("Reserve Your Table at Bella Cucina")
        );
    }

    #[test]
    fn footer_gets_logo_and_current_year_copyright() {
        let industries = IndustrySet::builtin();
        let entry = entry_with_props("footer", json!({"copyright": ""}));
        let section = customize(&entry, "", industries.resolve("technology"), "TechNova");
        assert_eq!(section.props["logo"], json!("TechNova"));
        let copyright = section.props["copyright"].as_str().unwrap();
        assert!(copyright.contains("TechNova"));
        assert!(copyright.contains(&Utc::now().year().to_string()));
    }

    #[test]
    fn unknown_type_passes_through_unmodified() {
        let industries = IndustrySet::builtin();
        let entry = entry_with_props("gallery", json!({"images": ["a.jpg"]}));
        let section = customize(&entry, "desc", industries.resolve("creative"), "StudioNorth");
        assert_eq!(section.props, entry.props);
        assert_eq!(section.section_type, "gallery");
        assert_eq!(section.variant.as_deref(), Some("test"));
    }

    #[test]
    fn customize_never_aliases_catalog_props() {
        let industries = IndustrySet::builtin();
        let entry = entry_with_props("header", json!({"logo": "", "menuItems": [{"label": "Home"}]}));
        let mut section = customize(&entry, "", industries.resolve("technology"), "Acme");

        section.props.insert("logo".to_string(), json!("Mutated"));
        if let Some(Value::Array(items)) = section.props.get_mut("menuItems") {
            items.push(json!({"label": "Injected"}));
        }

        assert_eq!(entry.props["logo"], json!(""));
        assert_eq!(entry.props["menuItems"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn clip_description_boundary() {
        let short = "x".repeat(149);
        assert_eq!(clip_description(&short), short);

        let exact = "x".repeat(150);
        let clipped = clip_description(&exact);
        assert_eq!(clipped.chars().count(), 150);
        assert!(clipped.ends_with("..."));
    }
}
