//! Template catalog — the static dataset of template variants the matcher
//! scores against. Insertion order is significant: score ties are broken by
//! catalog order.

use serde_json::{json, Value};
use std::path::Path;
use thiserror::Error;

use crate::schema::section::Props;
use crate::schema::template::TemplateEntry;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Read-only, insertion-ordered catalog of template entries.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    entries: Vec<TemplateEntry>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in template dataset covering the canonical section types
    /// plus a few extras (gallery, pricing) reachable through the matcher.
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries(),
        }
    }

    pub fn push(&mut self, entry: TemplateEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    /// Entries whose component type matches, case-insensitively,
    /// in catalog order. The returned entries borrow only from the catalog;
    /// the filter string is copied so its lifetime never constrains them.
    pub fn of_type(&self, component_type: &str) -> impl Iterator<Item = &TemplateEntry> {
        let component_type = component_type.to_string();
        self.entries
            .iter()
            .filter(move |e| e.is_type(&component_type))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append another catalog's entries after this one's, preserving both
    /// insertion orders. Earlier entries keep tie-break priority.
    pub fn merge(&mut self, other: TemplateCatalog) {
        self.entries.extend(other.entries);
    }

    /// Parse a catalog from a RON list of entries.
    pub fn parse_ron(input: &str) -> Result<Self, CatalogError> {
        let entries: Vec<TemplateEntry> = ron::from_str(input)?;
        Ok(Self { entries })
    }

    /// Load a catalog from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }
}

fn entry(
    component_type: &str,
    variant: &str,
    keywords: &[&str],
    props: Value,
) -> TemplateEntry {
    let props = match props {
        Value::Object(map) => map,
        _ => Props::new(),
    };
    TemplateEntry {
        component_type: component_type.to_string(),
        variant: variant.to_string(),
        props,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

fn builtin_entries() -> Vec<TemplateEntry> {
    vec![
        // Headers
        entry(
            "header",
            "modern",
            &["tech", "software", "startup", "digital", "app", "platform"],
            json!({
                "logo": "",
                "sticky": true,
                "menuItems": [
                    {"label": "Home", "link": "#home"},
                    {"label": "Features", "link": "#features"},
                    {"label": "Pricing", "link": "#pricing"},
                    {"label": "Contact", "link": "#contact"},
                ],
            }),
        ),
        entry(
            "header",
            "classic",
            &["finance", "consulting", "law", "accounting", "professional"],
            json!({
                "logo": "",
                "sticky": false,
                "menuItems": [
                    {"label": "Home", "link": "#home"},
                    {"label": "Services", "link": "#services"},
                    {"label": "About", "link": "#about"},
                    {"label": "Contact", "link": "#contact"},
                ],
            }),
        ),
        entry(
            "header",
            "minimal",
            &["design", "creative", "studio", "portfolio", "photography"],
            json!({
                "logo": "",
                "sticky": true,
                "menuItems": [
                    {"label": "Work", "link": "#work"},
                    {"label": "About", "link": "#about"},
                ],
            }),
        ),
        entry(
            "header",
            "rustic",
            &["restaurant", "food", "cafe", "bakery", "dining", "menu"],
            json!({
                "logo": "",
                "sticky": false,
                "menuItems": [
                    {"label": "Menu", "link": "#menu"},
                    {"label": "Reservations", "link": "#reservations"},
                    {"label": "Find Us", "link": "#location"},
                ],
            }),
        ),
        // Heroes
        entry(
            "hero",
            "gradient",
            &["tech", "software", "startup", "platform", "saas", "digital"],
            json!({
                "title": "",
                "subtitle": "",
                "description": "",
                "alignment": "center",
                "ctaLabel": "Get Started",
            }),
        ),
        entry(
            "hero",
            "campus",
            &["school", "education", "learning", "students", "course", "academy", "teaching"],
            json!({
                "title": "",
                "subtitle": "",
                "description": "",
                "alignment": "left",
                "image": "campus.jpg",
            }),
        ),
        entry(
            "hero",
            "showcase",
            &["design", "portfolio", "creative", "photography", "art"],
            json!({
                "title": "",
                "subtitle": "",
                "description": "",
                "alignment": "left",
                "image": "showcase.jpg",
            }),
        ),
        entry(
            "hero",
            "appetite",
            &["restaurant", "food", "menu", "chef", "cuisine", "dining"],
            json!({
                "title": "",
                "subtitle": "",
                "description": "",
                "alignment": "center",
                "image": "kitchen.jpg",
            }),
        ),
        entry(
            "hero",
            "trust",
            &["finance", "investment", "wealth", "advisory", "consulting"],
            json!({
                "title": "",
                "subtitle": "",
                "description": "",
                "alignment": "left",
                "ctaLabel": "Talk to an Advisor",
            }),
        ),
        entry(
            "hero",
            "care",
            &["health", "clinic", "medical", "wellness", "care"],
            json!({
                "title": "",
                "subtitle": "",
                "description": "",
                "alignment": "center",
                "image": "clinic.jpg",
            }),
        ),
        entry(
            "hero",
            "storefront",
            &["shop", "store", "retail", "products", "boutique", "fashion"],
            json!({
                "title": "",
                "subtitle": "",
                "description": "",
                "alignment": "center",
                "ctaLabel": "Browse the Collection",
            }),
        ),
        // Features
        entry(
            "features",
            "grid",
            &["tech", "software", "app", "platform", "saas"],
            json!({
                "title": "",
                "subtitle": "",
                "columns": 3,
                "items": [
                    {"title": "Fast", "description": "Built for speed.", "icon": "bolt"},
                    {"title": "Secure", "description": "Safe by default.", "icon": "shield"},
                    {"title": "Scalable", "description": "Grows with you.", "icon": "chart"},
                ],
            }),
        ),
        entry(
            "features",
            "cards",
            &["school", "education", "course", "students", "learning"],
            json!({
                "title": "",
                "subtitle": "",
                "columns": 3,
                "items": [
                    {"title": "Small Classes", "description": "Individual attention.", "icon": "users"},
                    {"title": "Expert Teachers", "description": "Learn from the best.", "icon": "award"},
                    {"title": "Flexible Schedules", "description": "Learn on your time.", "icon": "clock"},
                ],
            }),
        ),
        entry(
            "features",
            "icons",
            &["service", "services", "business", "quality"],
            json!({
                "title": "",
                "subtitle": "",
                "columns": 4,
                "items": [
                    {"title": "Reliable", "description": "On time, every time.", "icon": "check"},
                    {"title": "Experienced", "description": "Years in the field.", "icon": "star"},
                    {"title": "Affordable", "description": "Fair, honest pricing.", "icon": "tag"},
                    {"title": "Local", "description": "Part of your community.", "icon": "map"},
                ],
            }),
        ),
        // Testimonials
        entry(
            "testimonials",
            "carousel",
            &["clients", "consulting", "agency", "business"],
            json!({
                "title": "",
                "autoplay": true,
                "quotes": [
                    {"author": "J. Rivera", "text": "They delivered beyond expectations."},
                    {"author": "M. Chen", "text": "Professional from start to finish."},
                ],
            }),
        ),
        entry(
            "testimonials",
            "quotes",
            &["students", "parents", "school", "education"],
            json!({
                "title": "",
                "autoplay": false,
                "quotes": [
                    {"author": "A parent", "text": "My daughter looks forward to every class."},
                    {"author": "A graduate", "text": "It changed the way I learn."},
                ],
            }),
        ),
        entry(
            "testimonials",
            "stars",
            &["shop", "store", "products", "restaurant", "food"],
            json!({
                "title": "",
                "autoplay": false,
                "quotes": [
                    {"author": "Verified buyer", "text": "Five stars. Would order again.", "rating": 5},
                    {"author": "Regular", "text": "Our weekend tradition.", "rating": 5},
                ],
            }),
        ),
        // Calls to action
        entry(
            "cta",
            "banner",
            &["tech", "startup", "software", "platform"],
            json!({
                "title": "",
                "buttonLabel": "Get Started",
                "link": "#signup",
            }),
        ),
        entry(
            "cta",
            "enroll",
            &["school", "education", "course", "students"],
            json!({
                "title": "",
                "buttonLabel": "Enroll Now",
                "link": "#enroll",
            }),
        ),
        entry(
            "cta",
            "reserve",
            &["restaurant", "food", "dining", "menu"],
            json!({
                "title": "",
                "buttonLabel": "Book a Table",
                "link": "#reservations",
            }),
        ),
        // Footers
        entry(
            "footer",
            "mega",
            &["tech", "software", "platform", "saas"],
            json!({
                "logo": "",
                "copyright": "",
                "menuItems": [
                    {"label": "Docs", "link": "/docs"},
                    {"label": "Status", "link": "/status"},
                    {"label": "Careers"},
                ],
                "social": ["twitter", "github", "linkedin"],
            }),
        ),
        entry(
            "footer",
            "columns",
            &["finance", "consulting", "professional", "advisory"],
            json!({
                "logo": "",
                "copyright": "",
                "menuItems": [
                    {"label": "Services", "link": "#services"},
                    {"label": "Disclosures", "link": "/disclosures"},
                ],
                "social": ["linkedin"],
            }),
        ),
        entry(
            "footer",
            "simple",
            &[],
            json!({
                "logo": "",
                "copyright": "",
                "menuItems": [],
                "social": [],
            }),
        ),
        // Extras beyond the canonical list, reachable via find_best_match
        entry(
            "gallery",
            "masonry",
            &["photography", "portfolio", "art", "design"],
            json!({
                "title": "",
                "images": ["work-1.jpg", "work-2.jpg", "work-3.jpg"],
            }),
        ),
        entry(
            "gallery",
            "plates",
            &["restaurant", "food", "dishes", "menu"],
            json!({
                "title": "",
                "images": ["dish-1.jpg", "dish-2.jpg"],
            }),
        ),
        entry(
            "pricing",
            "tiers",
            &["saas", "software", "subscription", "plans"],
            json!({
                "title": "",
                "tiers": [
                    {"name": "Starter", "price": "$0"},
                    {"name": "Pro", "price": "$19"},
                    {"name": "Team", "price": "$49"},
                ],
            }),
        ),
    ]
}
