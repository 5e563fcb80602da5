//! Check command - validate configuration and preview a run

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use sitemapper_core::{Config, Domain};
use sitemapper_generator::PageDiscoverer;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration, reports whether the domain resolves,
/// and counts the pages a generation run would pick up. Nothing is
/// written.
pub fn run(config_path: &Path, root: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, ?root, strict, "Checking configuration");

    let mut result = ValidationResult::default();

    // Validate configuration
    println!("Checking configuration...");
    let config = match Config::load_or_default(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            None
        }
    };

    // Check domain resolution
    println!();
    println!("Checking domain...");
    let domain = Domain::resolve(root);
    if domain.is_fallback() {
        result.add_warning(format!(
            "CNAME file missing or empty, would publish under \"{}\"",
            domain.name()
        ));
        println!("  ⚠ CNAME missing, placeholder domain \"{}\"", domain.name());
    } else {
        println!("  ✓ Domain: {}", domain.name());
    }

    // Count discoverable pages
    if let Some(cfg) = &config {
        println!();
        println!("Checking pages...");
        let discoverer = PageDiscoverer::new(root, &cfg.pages.extension);
        match discoverer.discover() {
            Ok(urls) => {
                let chunks = urls.len().div_ceil(cfg.sitemap.max_urls_per_chunk.max(1));
                println!("  ✓ {} page(s) found ({} sitemap chunk(s))", urls.len(), chunks);
                if urls.is_empty() {
                    result.add_warning("No pages found; the sitemap index will be empty");
                }
            }
            Err(e) => {
                result.add_error(format!("Page discovery failed: {e}"));
                println!("  ✗ Page discovery failed: {e}");
            }
        }
    }

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    // Determine exit status
    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}
