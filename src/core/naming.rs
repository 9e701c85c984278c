//! Name extraction — capitalization heuristics with industry-keyed defaults.

use crate::schema::industry::IndustryProfile;

/// Leading tokens that look like names but never are.
const EXCLUDED_TOKENS: &[&str] = &["A", "The", "My", "Our", "Your", "We", "I"];

/// Derive a candidate company name from free text.
///
/// Scans whitespace tokens left to right for the first token longer than one
/// character whose first character is uppercase and which is not in the
/// exclusion set. If the following token also starts uppercase, both are
/// joined with a space. When nothing qualifies (including an empty
/// description) the industry's default name is returned. Deterministic; no
/// attempt is made to verify the result is actually a name.
pub fn extract_company_name(description: &str, industry: &IndustryProfile) -> String {
    let tokens: Vec<&str> = description.split_whitespace().collect();

    for (i, token) in tokens.iter().enumerate() {
        if !qualifies(token) {
            continue;
        }
        if let Some(next) = tokens.get(i + 1) {
            if starts_uppercase(next) {
                return format!("{} {}", token, next);
            }
        }
        return (*token).to_string();
    }

    industry.default_company_name.clone()
}

fn qualifies(token: &str) -> bool {
    token.chars().count() > 1 && starts_uppercase(token) && !EXCLUDED_TOKENS.contains(&token)
}

fn starts_uppercase(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_uppercase())
}
