//! Composer — normalizes props, resolves each section's renderer, and folds
//! the sections into an ordered page. Every failure is isolated to its own
//! section; the page always renders something.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::core::registry::{RendererRegistry, View};
use crate::schema::section::{Props, SectionSpec};

/// The closed default table: fields blanked to an empty string when absent,
/// applied in one place before any renderer runs.
const TEXT_DEFAULTS: [&str; 4] = ["logo", "title", "subtitle", "description"];

/// How a page slot was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    /// Rendered by its exactly-resolved renderer.
    Rendered,
    /// Type key missed the registry; a generic fallback rendered it, with a
    /// visible not-found notice.
    Fallback,
    /// The renderer failed; the view is an inline error marker.
    Failed,
    /// The whole input was empty; a single placeholder stands in.
    Placeholder,
}

/// One composed page slot, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedSection {
    pub index: usize,
    #[serde(rename = "type")]
    pub section_type: String,
    pub status: SectionStatus,
    pub view: View,
}

/// Compose a page from an ordered sequence of sections.
///
/// Empty input yields exactly one "no components available" placeholder
/// rather than an error. Output order always matches input order; the
/// per-section work shares no mutable state, so this is a plain sequential
/// fold.
pub fn render_site(registry: &RendererRegistry, sections: &[SectionSpec]) -> Vec<RenderedSection> {
    if sections.is_empty() {
        return vec![RenderedSection {
            index: 0,
            section_type: "empty".to_string(),
            status: SectionStatus::Placeholder,
            view: View {
                component: "empty-page".to_string(),
                body: "No components available".to_string(),
            },
        }];
    }

    sections
        .iter()
        .enumerate()
        .map(|(index, section)| render_section(registry, index, section))
        .collect()
}

fn render_section(
    registry: &RendererRegistry,
    index: usize,
    section: &SectionSpec,
) -> RenderedSection {
    let props = normalize_props(&section.props);
    let resolution = registry.resolve(&section.section_type);

    match resolution.renderer.render(&props) {
        Ok(view) if resolution.exact => RenderedSection {
            index,
            section_type: section.section_type.clone(),
            status: SectionStatus::Rendered,
            view,
        },
        Ok(mut view) => {
            warn!(
                section_type = section.section_type.as_str(),
                index, "no renderer bound for type; generic fallback used"
            );
            view.body = format!(
                "[component not found: {}] {}",
                section.section_type, view.body
            );
            RenderedSection {
                index,
                section_type: section.section_type.clone(),
                status: SectionStatus::Fallback,
                view,
            }
        }
        Err(error) => {
            warn!(
                section_type = section.section_type.as_str(),
                index,
                %error,
                "renderer failed; section replaced by error marker"
            );
            RenderedSection {
                index,
                section_type: section.section_type.clone(),
                status: SectionStatus::Failed,
                view: View {
                    component: "render-error".to_string(),
                    body: format!(
                        "[section {} ({}) failed to render: {}]",
                        index, section.section_type, error
                    ),
                },
            }
        }
    }
}

/// Fill in the documented prop defaults: the text fields in `TEXT_DEFAULTS`
/// become empty strings when absent, and menu items missing a link target
/// point at "#". Renderers can then assume these fields exist.
pub fn normalize_props(props: &Props) -> Props {
    let mut normalized = props.clone();

    for key in TEXT_DEFAULTS {
        normalized
            .entry(key.to_string())
            .or_insert_with(|| Value::String(String::new()));
    }

    if let Some(Value::Array(items)) = normalized.get_mut("menuItems") {
        for item in items {
            if let Value::Object(map) = item {
                map.entry("link".to_string())
                    .or_insert_with(|| Value::String("#".to_string()));
            }
        }
    }

    normalized
}
