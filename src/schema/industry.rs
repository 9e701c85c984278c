//! Industry profiles — keyword affinities and text templates per business
//! category, with a generic fallback for unknown ids.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndustryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Static configuration for one business category: the keyword set the
/// matcher scores against, the hero/CTA phrase table, and the company name
/// used when none can be extracted from the description.
///
/// `cta_template` interpolates `{company}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryProfile {
    pub id: String,
    #[serde(default)]
    pub keywords: FxHashSet<String>,
    pub hero_title: String,
    pub tagline: String,
    pub cta_template: String,
    pub default_company_name: String,
}

impl IndustryProfile {
    /// True if the profile's keyword set contains the keyword,
    /// case-insensitively. Profile keywords are stored lowercase.
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.contains(&keyword.to_lowercase())
    }

    /// The profile used for unknown industry ids.
    pub fn generic() -> Self {
        profile(
            "generic",
            "Your Company",
            "Welcome to {company}",
            "Quality you can count on.",
            "Get Started with {company} Today",
            &["business", "company", "service"],
        )
    }
}

/// Registry of industry profiles. Read-only after startup; `resolve` is
/// total — unknown ids degrade to the generic profile rather than failing.
#[derive(Debug, Clone)]
pub struct IndustrySet {
    profiles: FxHashMap<String, IndustryProfile>,
    generic: IndustryProfile,
}

impl Default for IndustrySet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl IndustrySet {
    /// An empty set holding only the generic fallback.
    pub fn empty() -> Self {
        Self {
            profiles: FxHashMap::default(),
            generic: IndustryProfile::generic(),
        }
    }

    /// The built-in industry catalog.
    pub fn builtin() -> Self {
        let mut set = Self::empty();
        for p in builtin_profiles() {
            set.register(p);
        }
        set
    }

    /// Register a profile, replacing any existing profile with the same id.
    pub fn register(&mut self, profile: IndustryProfile) {
        self.profiles.insert(profile.id.clone(), profile);
    }

    pub fn get(&self, id: &str) -> Option<&IndustryProfile> {
        self.profiles.get(id)
    }

    /// Total lookup: unknown ids resolve to the generic profile.
    pub fn resolve(&self, id: &str) -> &IndustryProfile {
        self.profiles.get(id).unwrap_or(&self.generic)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(|s| s.as_str())
    }

    /// Parse profiles from a RON list and merge them in. Loaded profiles
    /// override built-ins with the same id.
    pub fn parse_ron(&mut self, input: &str) -> Result<(), IndustryError> {
        let profiles: Vec<IndustryProfile> = ron::from_str(input)?;
        for p in profiles {
            self.register(p);
        }
        Ok(())
    }

    /// Load profiles from a RON file.
    pub fn load_from_ron(&mut self, path: &Path) -> Result<(), IndustryError> {
        let contents = std::fs::read_to_string(path)?;
        self.parse_ron(&contents)
    }
}

fn profile(
    id: &str,
    default_name: &str,
    hero_title: &str,
    tagline: &str,
    cta_template: &str,
    keywords: &[&str],
) -> IndustryProfile {
    IndustryProfile {
        id: id.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        hero_title: hero_title.to_string(),
        tagline: tagline.to_string(),
        cta_template: cta_template.to_string(),
        default_company_name: default_name.to_string(),
    }
}

fn builtin_profiles() -> Vec<IndustryProfile> {
    vec![
        profile(
            "technology",
            "TechNova",
            "Build the Future with Confidence",
            "Modern software, delivered.",
            "Start Building with {company} Today",
            &[
                "tech",
                "technology",
                "software",
                "app",
                "digital",
                "startup",
                "saas",
                "platform",
                "cloud",
                "innovation",
            ],
        ),
        profile(
            "education",
            "EduLearn",
            "Learn Without Limits",
            "Education that meets you where you are.",
            "Enroll with {company} Today",
            &[
                "school",
                "education",
                "learning",
                "course",
                "courses",
                "teaching",
                "students",
                "academy",
                "training",
                "tutoring",
            ],
        ),
        profile(
            "finance",
            "CapitalWise",
            "Your Money, Working Harder",
            "Clear advice. Measurable results.",
            "Plan Your Future with {company}",
            &[
                "finance",
                "financial",
                "investment",
                "consulting",
                "accounting",
                "advisory",
                "wealth",
                "banking",
                "startups",
            ],
        ),
        profile(
            "restaurant",
            "Bella Cucina",
            "A Table Worth Coming Back To",
            "Fresh ingredients, honest cooking.",
            "Reserve Your Table at {company}",
            &[
                "restaurant",
                "food",
                "menu",
                "dining",
                "chef",
                "cuisine",
                "cafe",
                "bakery",
                "catering",
            ],
        ),
        profile(
            "healthcare",
            "CareFirst",
            "Care That Puts You First",
            "Compassionate care, close to home.",
            "Book an Appointment with {company}",
            &[
                "health",
                "healthcare",
                "clinic",
                "medical",
                "wellness",
                "care",
                "doctor",
                "dental",
                "therapy",
            ],
        ),
        profile(
            "retail",
            "ShopSphere",
            "Find Something You'll Love",
            "Curated products, fair prices.",
            "Shop the Collection at {company}",
            &[
                "shop",
                "store",
                "retail",
                "products",
                "boutique",
                "fashion",
                "ecommerce",
                "handmade",
            ],
        ),
        profile(
            "creative",
            "StudioNorth",
            "Ideas, Made Visible",
            "Design with a point of view.",
            "Start a Project with {company}",
            &[
                "design",
                "creative",
                "studio",
                "art",
                "portfolio",
                "photography",
                "branding",
                "agency",
            ],
        ),
    ]
}
