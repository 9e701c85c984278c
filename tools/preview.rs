//! Preview — generate and render a site from the command line.
//!
//! Usage: preview --description <text> --industry <id>
//!                [--catalog <dir>] [--industries <path>] [--json]

use siteforge::core::assembler::{SiteEngine, SiteRequest};
use siteforge::core::composer::render_site;
use siteforge::core::registry::RendererRegistry;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut description = None;
    let mut industry = None;
    let mut catalog_dir = None;
    let mut industries_path = None;
    let mut json_output = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--description" if i + 1 < args.len() => {
                i += 1;
                description = Some(args[i].clone());
            }
            "--industry" if i + 1 < args.len() => {
                i += 1;
                industry = Some(args[i].clone());
            }
            "--catalog" if i + 1 < args.len() => {
                i += 1;
                catalog_dir = Some(args[i].clone());
            }
            "--industries" if i + 1 < args.len() => {
                i += 1;
                industries_path = Some(args[i].clone());
            }
            "--json" => {
                json_output = true;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let description = description.unwrap_or_default();
    let industry = industry.unwrap_or_else(|| "generic".to_string());

    let mut builder = SiteEngine::builder();
    if let Some(ref dir) = catalog_dir {
        builder = builder.catalog_dir(dir);
    }
    if let Some(ref path) = industries_path {
        builder = builder.industries_path(path);
    }

    let engine = match builder.build() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("ERROR: failed to build engine: {}", e);
            std::process::exit(1);
        }
    };

    let request = SiteRequest::new(description, industry);
    let site = match engine.generate(&request) {
        Ok(site) => site,
        Err(e) => {
            eprintln!("ERROR: invalid request: {}", e);
            std::process::exit(1);
        }
    };

    let registry = RendererRegistry::with_default_renderers();
    let page = render_site(&registry, &site.sections);

    if json_output {
        let output = serde_json::json!({
            "site": site,
            "page": page,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("ERROR: serialization failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("=== {} ===", site.title);
    if !site.description.is_empty() {
        println!("{}\n", site.description);
    }
    for slot in &page {
        println!(
            "{:>2}. [{:?}] {} — {}",
            slot.index, slot.status, slot.view.component, slot.view.body
        );
    }
    println!("\n{} section(s) rendered.", page.len());
}

fn print_usage() {
    println!("Preview — generate and render a site from the command line.");
    println!();
    println!("Usage: preview --description <text> --industry <id>");
    println!("               [--catalog <dir>] [--industries <path>] [--json]");
    println!();
    println!("  --description <text>  Free-text business description");
    println!("  --industry <id>       Industry id (e.g. technology, education)");
    println!("  --catalog <dir>       Merge .ron catalog files from a directory");
    println!("  --industries <path>   Merge industry profiles from a RON file");
    println!("  --json                Print the site spec and page as JSON");
}
