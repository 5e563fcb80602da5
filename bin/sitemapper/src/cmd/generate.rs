//! Generate command - runs the sitemap pipeline

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr, bail};
use sitemapper_core::{ChunkNaming, Config, Domain, domain::FALLBACK_DOMAIN};
use sitemapper_generator::Builder;

/// Run the generate command.
///
/// Runs the full pipeline against the site root and prints one progress
/// line per artifact produced.
pub fn run(
    config_path: &Path,
    root: &Path,
    domain: Option<&str>,
    max_urls: Option<usize>,
    chunk_names: Option<&str>,
    no_prune: bool,
) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?root, ?domain, "Starting generation");

    // Load configuration (optional file, defaults otherwise)
    let mut config =
        Config::load_or_default(config_path).wrap_err("Failed to load configuration")?;

    // Apply CLI overrides
    if let Some(n) = max_urls {
        tracing::info!(max_urls = n, "Overriding max URLs per chunk from CLI");
        config.sitemap.max_urls_per_chunk = n;
    }
    if let Some(policy) = chunk_names {
        config.sitemap.chunk_names = match policy {
            "sequential" => ChunkNaming::Sequential,
            "random" => ChunkNaming::Random,
            other => bail!("Unknown chunk naming policy: {other} (expected sequential or random)"),
        };
    }
    if no_prune {
        config.sitemap.prune = false;
    }

    // Re-validate after overrides
    config.validate().wrap_err("Invalid configuration")?;

    tracing::debug!(?config, "Loaded configuration");

    let mut builder = Builder::new(config, root);
    if let Some(host) = domain {
        tracing::info!(domain = host, "Overriding publishing domain from CLI");
        builder = builder.with_domain(Domain::new(host));
    }

    let stats = builder.build().wrap_err("Generation failed")?;

    println!();
    if stats.domain_fallback {
        println!("  ⚠ CNAME file not found or empty, publishing under \"{FALLBACK_DOMAIN}\"");
        println!();
    }

    for chunk in &stats.chunks {
        println!("  Generated: {} with {} links.", chunk.filename, chunk.urls);
    }
    println!("  Generated: sitemap.xml (Index)");
    println!("  Generated: robots.txt");
    println!();
    println!("  Pages:    {}", stats.pages);
    println!("  Chunks:   {}", stats.chunks.len());
    if stats.pruned > 0 {
        println!("  Pruned:   {}", stats.pruned);
    }
    println!("  Duration: {:.2}s", start.elapsed().as_secs_f64());
    println!();

    tracing::info!(?stats, "Generation completed successfully");

    Ok(())
}
