//! Render integration tests — site specs in, composed pages out.

use std::sync::Arc;

use siteforge::core::assembler::SiteEngine;
use siteforge::core::composer::{render_site, SectionStatus};
use siteforge::core::registry::{
    PlaceholderRenderer, RenderError, RendererRegistry, SectionRenderer, View,
};
use siteforge::schema::section::{Props, SectionSpec};

struct Failing;
impl SectionRenderer for Failing {
    fn render(&self, _props: &Props) -> Result<View, RenderError> {
        Err(RenderError::Failed("boom".to_string()))
    }
}

#[test]
fn generated_site_renders_end_to_end() {
    let engine = SiteEngine::with_defaults();
    let registry = RendererRegistry::with_default_renderers();

    let site = engine.generate_site("Blue Sky Consulting helps startups grow", "finance");
    let page = render_site(&registry, &site.sections);

    assert_eq!(page.len(), site.sections.len());
    for slot in &page {
        assert_eq!(slot.status, SectionStatus::Rendered);
    }
    // Order preserved end to end
    let rendered_types: Vec<&str> = page.iter().map(|s| s.section_type.as_str()).collect();
    let spec_types: Vec<&str> = site
        .sections
        .iter()
        .map(|s| s.section_type.as_str())
        .collect();
    assert_eq!(rendered_types, spec_types);
}

#[test]
fn empty_site_renders_single_placeholder() {
    let registry = RendererRegistry::with_default_renderers();
    let page = render_site(&registry, &[]);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].status, SectionStatus::Placeholder);
}

#[test]
fn unknown_widget_is_not_an_error() {
    let registry = RendererRegistry::with_default_renderers();
    let page = render_site(
        &registry,
        &[SectionSpec {
            section_type: "UnknownWidget".to_string(),
            variant: None,
            props: Props::new(),
        }],
    );

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].status, SectionStatus::Fallback);
    assert!(page[0].view.body.contains("component not found"));
}

#[test]
fn one_failing_renderer_never_aborts_the_page() {
    let registry = RendererRegistry::builder()
        .renderer("header", Arc::new(PlaceholderRenderer::new("header")))
        .renderer("hero", Arc::new(Failing))
        .renderer("features", Arc::new(PlaceholderRenderer::new("features")))
        .renderer("footer", Arc::new(PlaceholderRenderer::new("footer")))
        .build();

    let engine = SiteEngine::with_defaults();
    let site = engine.generate_site("Acme builds software platforms", "technology");
    let page = render_site(&registry, &site.sections);

    assert_eq!(page.len(), site.sections.len());

    let failed: Vec<_> = page
        .iter()
        .filter(|s| s.status == SectionStatus::Failed)
        .collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].section_type, "hero");
    assert!(failed[0].view.body.contains("boom"));

    // Everything after the failure still rendered.
    let last = page.last().unwrap();
    assert_eq!(last.section_type, "footer");
    assert_ne!(last.status, SectionStatus::Failed);
}

#[test]
fn rendered_page_serializes_for_export() {
    let registry = RendererRegistry::with_default_renderers();
    let engine = SiteEngine::with_defaults();
    let site = engine.generate_site("Bella Cucina serves seasonal Italian food", "restaurant");
    let page = render_site(&registry, &site.sections);

    let value = serde_json::to_value(&page).unwrap();
    let slots = value.as_array().unwrap();
    assert_eq!(slots.len(), page.len());
    assert_eq!(slots[0]["type"], serde_json::json!("header"));
    assert_eq!(slots[0]["status"], serde_json::json!("rendered"));
}

#[test]
fn synonym_keys_from_external_specs_resolve() {
    let registry = RendererRegistry::with_default_renderers();
    // External tooling often emits PascalCase template names.
    let sections: Vec<SectionSpec> = ["ModernHeader", "GradientHero", "MegaFooter"]
        .iter()
        .map(|ty| SectionSpec {
            section_type: ty.to_string(),
            variant: None,
            props: Props::new(),
        })
        .collect();

    let page = render_site(&registry, &sections);
    for slot in &page {
        assert_eq!(slot.status, SectionStatus::Rendered, "{} fell back", slot.section_type);
    }
}
