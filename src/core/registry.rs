//! Renderer resolution registry — many synonym type keys bound to a small
//! set of renderers, with build-time self-healing so lookup is total.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::schema::section::Props;

/// Failure reported by a renderer. The composer converts this into an
/// inline error marker; it never propagates past the composition boundary.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("renderer failure: {0}")]
    Failed(String),
}

/// An opaque rendered view: the component label of the renderer that
/// produced it and the rendered body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub component: String,
    pub body: String,
}

/// The renderer capability: props in, view out. Implementations are the
/// external leaf templates injected by the surrounding application;
/// invocation is idempotent and order-free.
pub trait SectionRenderer: Send + Sync {
    fn render(&self, props: &Props) -> Result<View, RenderError>;
}

/// Built-in generic renderer, used both as the designated build-time
/// fallback and as a stand-in until real templates are injected. Its output
/// is visibly marked as a placeholder.
pub struct PlaceholderRenderer {
    category: String,
}

impl PlaceholderRenderer {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
        }
    }
}

impl SectionRenderer for PlaceholderRenderer {
    fn render(&self, props: &Props) -> Result<View, RenderError> {
        let headline = ["title", "logo", "subtitle"]
            .iter()
            .filter_map(|key| props.get(*key).and_then(|v| v.as_str()))
            .find(|s| !s.is_empty())
            .unwrap_or_default();
        Ok(View {
            component: format!("generic-{}", self.category),
            body: format!("[{}] {}", self.category, headline),
        })
    }
}

/// The declarative synonym table: every alias the surrounding application's
/// templates are known under, bound to one canonical renderer key.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("Header", "header"),
    ("MinimalistHeader", "header"),
    ("ModernHeader", "header"),
    ("ClassicHeader", "header"),
    ("CreativeHeader", "header"),
    ("Hero", "hero"),
    ("SplitHero", "hero"),
    ("GradientHero", "hero"),
    ("VideoHero", "hero"),
    ("FullscreenHero", "hero"),
    ("Features", "features"),
    ("FeatureGrid", "features"),
    ("IconFeatures", "features"),
    ("ServiceCards", "features"),
    ("Testimonials", "testimonials"),
    ("TestimonialCarousel", "testimonials"),
    ("QuoteWall", "testimonials"),
    ("ReviewStars", "testimonials"),
    ("Cta", "cta"),
    ("CallToAction", "cta"),
    ("BannerCta", "cta"),
    ("Footer", "footer"),
    ("MinimalFooter", "footer"),
    ("MegaFooter", "footer"),
    ("ColumnFooter", "footer"),
    ("Gallery", "gallery"),
    ("MasonryGallery", "gallery"),
    ("Pricing", "pricing"),
    ("PricingTiers", "pricing"),
];

/// The outcome of a lookup. `exact` is false when the key missed the table
/// and a heuristic or global fallback was substituted; the composer uses
/// that flag to emit the visible "component not found" notice.
pub struct Resolution<'a> {
    pub renderer: &'a dyn SectionRenderer,
    pub exact: bool,
}

/// Immutable alias-to-renderer table. Built once at startup; by
/// construction no key ever resolves to nothing, so request-time lookup is
/// pure map access with a single fallback path.
pub struct RendererRegistry {
    bindings: FxHashMap<String, Arc<dyn SectionRenderer>>,
    canonical: Vec<String>,
    fallback: Arc<dyn SectionRenderer>,
}

/// Builder for a `RendererRegistry`: canonical renderers first, then the
/// alias table. Aliases whose canonical renderer is unavailable are healed
/// to the fallback at build time.
pub struct RendererRegistryBuilder {
    renderers: Vec<(String, Arc<dyn SectionRenderer>)>,
    aliases: Vec<(String, String)>,
    fallback: Option<Arc<dyn SectionRenderer>>,
}

impl RendererRegistry {
    pub fn builder() -> RendererRegistryBuilder {
        RendererRegistryBuilder {
            renderers: Vec::new(),
            aliases: Vec::new(),
            fallback: None,
        }
    }

    /// A registry with placeholder renderers for every canonical category
    /// and the full default alias table. Usable end to end before the
    /// surrounding application injects its real templates.
    pub fn with_default_renderers() -> Self {
        let mut builder = Self::builder();
        for category in [
            "header",
            "hero",
            "features",
            "testimonials",
            "cta",
            "footer",
            "gallery",
            "pricing",
        ] {
            builder = builder.renderer(category, Arc::new(PlaceholderRenderer::new(category)));
        }
        builder.aliases(DEFAULT_ALIASES).build()
    }

    /// Total lookup: exact case-sensitive match, then a best-effort category
    /// heuristic, then the global fallback. Never fails.
    pub fn resolve(&self, key: &str) -> Resolution<'_> {
        if let Some(renderer) = self.bindings.get(key) {
            return Resolution {
                renderer: renderer.as_ref(),
                exact: true,
            };
        }

        let renderer = self
            .guess_category(key)
            .and_then(|category| self.bindings.get(category))
            .map(|r| r.as_ref())
            .unwrap_or_else(|| self.fallback.as_ref());

        Resolution {
            renderer,
            exact: false,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.bindings.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(|s| s.as_str())
    }

    /// Pick the canonical category whose name occurs in the unknown key.
    fn guess_category(&self, key: &str) -> Option<&str> {
        let key_lower = key.to_lowercase();
        self.canonical
            .iter()
            .find(|category| key_lower.contains(category.as_str()))
            .map(|s| s.as_str())
    }
}

impl RendererRegistryBuilder {
    /// Register a canonical renderer under its category key.
    pub fn renderer(mut self, key: &str, renderer: Arc<dyn SectionRenderer>) -> Self {
        self.renderers.push((key.to_string(), renderer));
        self
    }

    /// Bind one alias to a canonical key.
    pub fn alias(mut self, alias: &str, canonical: &str) -> Self {
        self.aliases.push((alias.to_string(), canonical.to_string()));
        self
    }

    /// Bind a whole declarative alias table.
    pub fn aliases(mut self, table: &[(&str, &str)]) -> Self {
        for (alias, canonical) in table {
            self.aliases.push(((*alias).to_string(), (*canonical).to_string()));
        }
        self
    }

    /// Override the designated fallback renderer.
    pub fn fallback(mut self, renderer: Arc<dyn SectionRenderer>) -> Self {
        self.fallback = Some(renderer);
        self
    }

    pub fn build(self) -> RendererRegistry {
        let fallback = self
            .fallback
            .unwrap_or_else(|| Arc::new(PlaceholderRenderer::new("section")));

        let mut bindings: FxHashMap<String, Arc<dyn SectionRenderer>> = FxHashMap::default();
        let mut canonical = Vec::with_capacity(self.renderers.len());
        for (key, renderer) in self.renderers {
            canonical.push(key.clone());
            bindings.insert(key, renderer);
        }

        for (alias, target) in self.aliases {
            match bindings.get(&target).cloned() {
                Some(renderer) => {
                    bindings.insert(alias, renderer);
                }
                None => {
                    // Self-heal at build time: no binding is ever left null.
                    warn!(
                        alias = alias.as_str(),
                        canonical = target.as_str(),
                        "canonical renderer unavailable; alias bound to fallback"
                    );
                    bindings.insert(alias, fallback.clone());
                }
            }
        }

        RendererRegistry {
            bindings,
            canonical,
            fallback,
        }
    }
}
