//! Siteforge — two-stage page assembly for generated business sites.
//!
//! Stage one turns a free-text business description plus an industry id into
//! an ordered list of section specifications, by scoring a catalog of
//! template variants against keywords and customizing each section's text.
//! Stage two resolves every section to a concrete renderer through an
//! alias table with build-time fallback healing, and composes the page while
//! isolating failures to individual sections.

pub mod core;
pub mod schema;
