//! WASM bindings for siteforge — powers the interactive site-builder demo.

use wasm_bindgen::prelude::*;

use siteforge::core::assembler::{SiteEngine, SiteRequest, CANONICAL_SECTIONS};
use siteforge::core::composer::render_site;
use siteforge::core::registry::{RendererRegistry, DEFAULT_ALIASES};

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Deserialize)]
struct RequestInput {
    description: String,
    industry: String,
}

#[derive(serde::Serialize)]
struct IndustryInfo {
    id: String,
    company: String,
    tagline: String,
}

// ---------------------------------------------------------------------------
// SiteBuilderDemo — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct SiteBuilderDemo {
    engine: SiteEngine,
    registry: RendererRegistry,
}

impl Default for SiteBuilderDemo {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl SiteBuilderDemo {
    /// Create a demo instance backed by the built-in catalog, the built-in
    /// industry profiles, and placeholder renderers.
    #[wasm_bindgen(constructor)]
    pub fn new() -> SiteBuilderDemo {
        SiteBuilderDemo {
            engine: SiteEngine::with_defaults(),
            registry: RendererRegistry::with_default_renderers(),
        }
    }

    /// Generate a site spec from a request described by a JSON string.
    ///
    /// Expected JSON shape:
    /// ```json
    /// { "description": "Blue Sky Consulting helps startups grow", "industry": "finance" }
    /// ```
    ///
    /// Returns the site spec serialized as JSON.
    pub fn generate(&self, request_json: &str) -> Result<String, JsError> {
        let input: RequestInput = serde_json::from_str(request_json)
            .map_err(|e| JsError::new(&format!("Invalid request JSON: {e}")))?;
        let request = SiteRequest::new(input.description, input.industry);
        let site = self
            .engine
            .generate(&request)
            .map_err(|e| JsError::new(&format!("Invalid request: {e}")))?;
        serde_json::to_string(&site)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Generate a site spec and render it with the placeholder renderers.
    /// Returns a JSON array of rendered sections with per-section status.
    pub fn render(&self, request_json: &str) -> Result<String, JsError> {
        let input: RequestInput = serde_json::from_str(request_json)
            .map_err(|e| JsError::new(&format!("Invalid request JSON: {e}")))?;
        let request = SiteRequest::new(input.description, input.industry);
        let site = self
            .engine
            .generate(&request)
            .map_err(|e| JsError::new(&format!("Invalid request: {e}")))?;
        let page = render_site(&self.registry, &site.sections);
        serde_json::to_string(&page)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Return a JSON array describing the registered industry profiles.
    pub fn industries(&self) -> Result<String, JsError> {
        let mut infos: Vec<IndustryInfo> = self
            .engine
            .industries()
            .ids()
            .map(|id| {
                let profile = self.engine.industries().resolve(id);
                IndustryInfo {
                    id: id.to_string(),
                    company: profile.default_company_name.clone(),
                    tagline: profile.tagline.clone(),
                }
            })
            .collect();
        infos.sort_by(|a, b| a.id.cmp(&b.id));
        serde_json::to_string(&infos)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Return JSON array of the canonical section types, in page order.
    pub fn section_types() -> String {
        serde_json::to_string(&CANONICAL_SECTIONS).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of the template-name aliases the renderer registry
    /// accepts out of the box.
    pub fn known_aliases() -> String {
        let aliases: Vec<&str> = DEFAULT_ALIASES.iter().map(|(alias, _)| *alias).collect();
        serde_json::to_string(&aliases).unwrap_or_else(|_| "[]".to_string())
    }
}
