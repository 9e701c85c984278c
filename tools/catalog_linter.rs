//! Catalog Linter — validates catalog RON files before they are shipped.
//!
//! Usage: catalog_linter <catalog.ron> [<catalog.ron> ...]

use std::collections::HashSet;
use std::path::Path;
use std::process;

use siteforge::core::assembler::CANONICAL_SECTIONS;
use siteforge::core::catalog::TemplateCatalog;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: catalog_linter <catalog.ron> [<catalog.ron> ...]");
        process::exit(0);
    }

    let mut catalog = TemplateCatalog::new();
    for path in &args[1..] {
        match TemplateCatalog::load_from_ron(Path::new(path)) {
            Ok(loaded) => {
                println!("Loaded {} entries from {}", loaded.len(), path);
                catalog.merge(loaded);
            }
            Err(e) => {
                eprintln!("ERROR: failed to load {}: {}", path, e);
                process::exit(1);
            }
        }
    }

    let mut errors = 0u32;
    let mut warnings = 0u32;

    // Duplicate (type, variant) pairs shadow each other in matching.
    let mut seen: HashSet<(String, String)> = HashSet::new();
    for entry in catalog.entries() {
        let key = (
            entry.component_type.to_lowercase(),
            entry.variant.to_lowercase(),
        );
        if !seen.insert(key) {
            eprintln!(
                "ERROR: duplicate entry {}/{}",
                entry.component_type, entry.variant
            );
            errors += 1;
        }
    }

    for entry in catalog.entries() {
        if entry.keywords.is_empty() {
            println!(
                "WARN: {}/{} has no keywords and can only win as a fallback",
                entry.component_type, entry.variant
            );
            warnings += 1;
        }
        for kw in &entry.keywords {
            if kw.is_empty() {
                println!(
                    "WARN: {}/{} has an empty keyword string (ignored by scoring)",
                    entry.component_type, entry.variant
                );
                warnings += 1;
                continue;
            }
            if kw != &kw.to_lowercase() {
                println!(
                    "WARN: {}/{} keyword '{}' is not lowercase",
                    entry.component_type, entry.variant, kw
                );
                warnings += 1;
            }
        }
        if !CANONICAL_SECTIONS
            .iter()
            .any(|ty| entry.component_type.eq_ignore_ascii_case(ty))
        {
            println!(
                "NOTE: {}/{} is outside the canonical section list and will only \
                 be used via explicit matching",
                entry.component_type, entry.variant
            );
        }
    }

    // Canonical coverage: a catalog missing a canonical type silently drops
    // that section from every generated site.
    for ty in CANONICAL_SECTIONS {
        if catalog.of_type(ty).next().is_none() {
            println!("WARN: no entries for canonical type '{}'", ty);
            warnings += 1;
        }
    }

    println!(
        "\n{} entries checked: {} error(s), {} warning(s)",
        catalog.len(),
        errors,
        warnings
    );

    if errors > 0 {
        process::exit(1);
    }
}
