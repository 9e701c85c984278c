//! Site assembly — orchestrates matching and customization across the
//! canonical ordered section list. Built via `SiteEngine::builder()`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::core::catalog::{CatalogError, TemplateCatalog};
use crate::core::customizer::{clip_description, customize};
use crate::core::matcher::find_best_match;
use crate::core::naming::extract_company_name;
use crate::schema::industry::{IndustryError, IndustrySet};
use crate::schema::section::SiteSpec;

/// The fixed, ordered list of section types a generated site is assembled
/// from. Closed: extend only by editing this list.
pub const CANONICAL_SECTIONS: [&str; 6] =
    ["header", "hero", "features", "testimonials", "cta", "footer"];

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("industry error: {0}")]
    Industry(#[from] IndustryError),
}

/// A descriptive validation error for the outer call boundary.
///
/// Generation itself is total (an empty description still produces a site
/// with the industry's default name); this is how callers that require a
/// meaningful description reject a request before generating.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("industry id must not be empty")]
    EmptyIndustry,
}

/// One generation request: a free-text business description and an industry
/// id. Unknown industry ids fall back to generic defaults rather than
/// failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteRequest {
    pub description: String,
    pub industry_id: String,
}

impl SiteRequest {
    pub fn new(description: impl Into<String>, industry_id: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            industry_id: industry_id.into(),
        }
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        if self.description.trim().is_empty() {
            return Err(RequestError::EmptyDescription);
        }
        if self.industry_id.trim().is_empty() {
            return Err(RequestError::EmptyIndustry);
        }
        Ok(())
    }
}

/// The generation engine: template catalog plus industry profiles, immutable
/// once built. Safe to share across concurrent requests.
pub struct SiteEngine {
    catalog: TemplateCatalog,
    industries: IndustrySet,
}

/// Builder for constructing a `SiteEngine`.
pub struct SiteEngineBuilder {
    catalog: Option<TemplateCatalog>,
    industries: Option<IndustrySet>,
    catalog_dir: Option<String>,
    industries_path: Option<String>,
}

impl SiteEngine {
    pub fn builder() -> SiteEngineBuilder {
        SiteEngineBuilder {
            catalog: None,
            industries: None,
            catalog_dir: None,
            industries_path: None,
        }
    }

    /// An engine over the built-in catalog and industry profiles.
    pub fn with_defaults() -> Self {
        Self {
            catalog: TemplateCatalog::builtin(),
            industries: IndustrySet::builtin(),
        }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn industries(&self) -> &IndustrySet {
        &self.industries
    }

    /// Validate a request at the call boundary, then generate.
    pub fn generate(&self, request: &SiteRequest) -> Result<SiteSpec, RequestError> {
        request.validate()?;
        Ok(self.generate_site(&request.description, &request.industry_id))
    }

    /// Generate a site specification. Total: never fails, for any
    /// description (including empty) and any industry id (unknown ids use
    /// generic defaults). Canonical types with no catalog match are omitted
    /// without a placeholder.
    pub fn generate_site(&self, description: &str, industry_id: &str) -> SiteSpec {
        let industry = self.industries.resolve(industry_id);
        let company_name = extract_company_name(description, industry);

        let mut sections = Vec::with_capacity(CANONICAL_SECTIONS.len());
        for section_type in CANONICAL_SECTIONS {
            match find_best_match(&self.catalog, section_type, None, description, industry) {
                Some(entry) => {
                    sections.push(customize(entry, description, industry, &company_name));
                }
                None => {
                    debug!(section_type, "no catalog match; section omitted");
                }
            }
        }

        debug!(
            industry = industry.id.as_str(),
            sections = sections.len(),
            "site assembled"
        );

        SiteSpec {
            title: company_name,
            description: clip_description(description),
            sections,
        }
    }
}

impl SiteEngineBuilder {
    /// Provide a catalog directly (for testing without files).
    pub fn with_catalog(mut self, catalog: TemplateCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Provide industry profiles directly (for testing without files).
    pub fn with_industries(mut self, industries: IndustrySet) -> Self {
        self.industries = Some(industries);
        self
    }

    /// Merge all `.ron` catalog files from a directory over the base catalog.
    pub fn catalog_dir(mut self, path: &str) -> Self {
        self.catalog_dir = Some(path.to_string());
        self
    }

    /// Merge industry profiles from a RON file over the built-ins.
    pub fn industries_path(mut self, path: &str) -> Self {
        self.industries_path = Some(path.to_string());
        self
    }

    pub fn build(self) -> Result<SiteEngine, EngineError> {
        let mut catalog = self.catalog.unwrap_or_else(TemplateCatalog::builtin);
        let mut industries = self.industries.unwrap_or_else(IndustrySet::builtin);

        if let Some(ref dir) = self.catalog_dir {
            if Path::new(dir).exists() {
                for entry in std::fs::read_dir(dir)? {
                    let path = entry?.path();
                    if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                        catalog.merge(TemplateCatalog::load_from_ron(&path)?);
                    }
                }
            }
        }

        if let Some(ref path) = self.industries_path {
            if Path::new(path).exists() {
                industries.load_from_ron(Path::new(path))?;
            }
        }

        Ok(SiteEngine {
            catalog,
            industries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::section::Props;
    use crate::schema::template::TemplateEntry;

    fn is_canonical_subsequence(types: &[&str]) -> bool {
        let mut cursor = CANONICAL_SECTIONS.iter();
        types
            .iter()
            .all(|ty| cursor.any(|canonical| canonical == ty))
    }

    #[test]
    fn full_catalog_yields_all_six_sections_in_order() {
        let engine = SiteEngine::with_defaults();
        let site = engine.generate_site(
            "Blue Sky Consulting helps startups grow",
            "finance",
        );
        let types: Vec<&str> = site.sections.iter().map(|s| s.section_type.as_str()).collect();
        assert_eq!(
            types,
            vec!["header", "hero", "features", "testimonials", "cta", "footer"]
        );
        assert_eq!(site.title, "Blue Sky");
    }

    #[test]
    fn missing_catalog_type_is_silently_omitted() {
        // A catalog with no cta entries at all.
        let mut catalog = TemplateCatalog::new();
        for ty in ["header", "hero", "features", "testimonials", "footer"] {
            catalog.push(TemplateEntry {
                component_type: ty.to_string(),
                variant: "only".to_string(),
                props: Props::new(),
                keywords: Vec::new(),
            });
        }

        let engine = SiteEngine::builder()
            .with_catalog(catalog)
            .build()
            .unwrap();
        let site = engine.generate_site("Acme widgets", "technology");

        let types: Vec<&str> = site.sections.iter().map(|s| s.section_type.as_str()).collect();
        assert_eq!(site.sections.len(), 5);
        assert!(!types.contains(&"cta"));
        assert!(is_canonical_subsequence(&types));
    }

    #[test]
    fn empty_description_still_generates() {
        let engine = SiteEngine::with_defaults();
        let site = engine.generate_site("", "education");
        assert_eq!(site.title, "EduLearn");
        assert_eq!(site.description, "");
        assert!(site.sections.len() <= CANONICAL_SECTIONS.len());
    }

    #[test]
    fn empty_catalog_generates_empty_section_list() {
        let engine = SiteEngine::builder()
            .with_catalog(TemplateCatalog::new())
            .build()
            .unwrap();
        let site = engine.generate_site("Acme", "technology");
        assert!(site.sections.is_empty());
        assert_eq!(site.title, "Acme");
    }

    #[test]
    fn site_description_is_clipped() {
        let engine = SiteEngine::with_defaults();
        let long = "word ".repeat(100);
        let site = engine.generate_site(&long, "technology");
        assert!(site.description.chars().count() <= 150);
        assert!(site.description.ends_with("..."));
    }

    #[test]
    fn request_validation_rejects_blank_description() {
        let engine = SiteEngine::with_defaults();
        let err = engine
            .generate(&SiteRequest::new("   ", "technology"))
            .unwrap_err();
        assert!(matches!(err, RequestError::EmptyDescription));

        let err = engine
            .generate(&SiteRequest::new("A real business", ""))
            .unwrap_err();
        assert!(matches!(err, RequestError::EmptyIndustry));
    }

    #[test]
    fn valid_request_generates_through_boundary() {
        let engine = SiteEngine::with_defaults();
        let site = engine
            .generate(&SiteRequest::new("Bright Smiles dental clinic", "healthcare"))
            .unwrap();
        assert_eq!(site.title, "Bright Smiles");
        assert!(!site.sections.is_empty());
    }

    #[test]
    fn unknown_industry_degrades_to_generic() {
        let engine = SiteEngine::with_defaults();
        let site = engine.generate_site("", "submarine-rentals");
        assert_eq!(site.title, "Your Company");
        assert!(!site.sections.is_empty());
    }
}
