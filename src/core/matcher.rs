//! Matcher — deterministic keyword scoring of catalog entries against a
//! description/industry pair.

use crate::core::catalog::TemplateCatalog;
use crate::schema::industry::IndustryProfile;
use crate::schema::template::TemplateEntry;

/// Find the best catalog entry for a component type.
///
/// Filters the catalog to entries of `component_type` (case-insensitive);
/// an empty filter yields `None`. An explicit `variant` hit short-circuits
/// scoring and returns the first such entry in catalog order. Otherwise each
/// entry is scored, skipping empty keyword strings: +2 per keyword appearing
/// as a case-insensitive substring of the description, +1 per keyword in the
/// industry keyword set, +1 affinity bonus for the same overlap independent
/// of the description. The
/// strictly greatest score wins, ties broken by catalog order; if nothing
/// scores above zero the first filtered entry is returned.
///
/// Pure and deterministic: identical inputs select the identical entry.
pub fn find_best_match<'a>(
    catalog: &'a TemplateCatalog,
    component_type: &str,
    variant: Option<&str>,
    description: &str,
    industry: &IndustryProfile,
) -> Option<&'a TemplateEntry> {
    let filtered: Vec<&TemplateEntry> = catalog.of_type(component_type).collect();
    if filtered.is_empty() {
        return None;
    }

    if let Some(variant) = variant {
        if let Some(hit) = filtered.iter().find(|e| e.is_variant(variant)) {
            // An explicit variant match bypasses scoring entirely.
            return Some(*hit);
        }
    }

    let description_lower = description.to_lowercase();
    let mut best: Option<&TemplateEntry> = None;
    let mut best_score = 0u32;

    for &entry in &filtered {
        let score = score_entry(entry, &description_lower, industry);
        if score > best_score {
            best_score = score;
            best = Some(entry);
        }
    }

    // Nothing beat the zero sentinel: fall back to the first filtered entry.
    best.or_else(|| filtered.first().copied())
}

fn score_entry(entry: &TemplateEntry, description_lower: &str, industry: &IndustryProfile) -> u32 {
    let mut score = 0;
    for keyword in &entry.keywords {
        // An empty keyword is a substring of everything; it must not score.
        if keyword.is_empty() {
            continue;
        }
        let kw = keyword.to_lowercase();
        if description_lower.contains(&kw) {
            score += 2;
        }
        if industry.has_keyword(&kw) {
            score += 1; // industry keyword membership
            score += 1; // entry/industry affinity bonus
        }
    }
    score
}
