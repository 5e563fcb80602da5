//! Generation orchestration.
//!
//! Runs the pipeline in sequence: domain resolution, page discovery,
//! batching, chunk emission, stale-chunk pruning, index and robots
//! emission. Strictly sequential; writes are not transactional, so a
//! failure partway leaves previously written files in place.

use std::{fs, path::PathBuf, time::Instant};

use chrono::Local;
use sitemapper_core::{Config, Domain};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    batch::{self, BatchError},
    discover::{DiscoverError, PageDiscoverer},
    robots::{RobotsError, RobotsGenerator},
    sitemap::{INDEX_FILE, SitemapGenerator},
};

/// Generation errors.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Page discovery error.
    #[error("discovery error: {0}")]
    Discover(#[from] DiscoverError),

    /// Batching error.
    #[error("batch error: {0}")]
    Batch(#[from] BatchError),

    /// Robots generation error.
    #[error("robots error: {0}")]
    Robots(#[from] RobotsError),
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Statistics for one generation run.
#[derive(Debug, Clone, Default)]
pub struct GenerateStats {
    /// Number of pages discovered.
    pub pages: usize,

    /// One entry per chunk file written, in production order.
    pub chunks: Vec<ChunkStats>,

    /// Number of stale chunk files deleted.
    pub pruned: usize,

    /// Run duration in milliseconds.
    pub duration_ms: u64,

    /// True when the placeholder domain was substituted.
    pub domain_fallback: bool,
}

/// Statistics for a single chunk file.
#[derive(Debug, Clone)]
pub struct ChunkStats {
    /// Generated filename.
    pub filename: String,

    /// Number of URL entries in the chunk.
    pub urls: usize,
}

/// Builder that orchestrates the generation pipeline.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    root: PathBuf,
    domain: Option<Domain>,
}

impl Builder {
    /// Create a new builder rooted at the site directory.
    ///
    /// The root is both the tree that is scanned for pages and the
    /// directory the artifacts are written into.
    #[must_use]
    pub fn new(config: Config, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root: root.into(),
            domain: None,
        }
    }

    /// Use a fixed domain instead of resolving the CNAME file.
    #[must_use]
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Execute the full generation pipeline.
    pub fn build(&self) -> Result<GenerateStats> {
        let start = Instant::now();
        let mut stats = GenerateStats::default();

        let domain = match &self.domain {
            Some(d) => d.clone(),
            None => Domain::resolve(&self.root),
        };
        stats.domain_fallback = domain.is_fallback();

        info!(
            domain = domain.name(),
            root = %self.root.display(),
            "starting sitemap generation"
        );

        let discoverer = PageDiscoverer::new(&self.root, &self.config.pages.extension);
        let urls = discoverer.discover()?;
        stats.pages = urls.len();

        let batches = batch::batch(&urls, self.config.sitemap.max_urls_per_chunk)?;

        let generator = SitemapGenerator::new(self.config.sitemap.clone(), domain.clone());
        // One date per run, shared by every entry.
        let lastmod = Local::now().format("%Y-%m-%d").to_string();

        let mut chunk_files = Vec::with_capacity(batches.len());
        for (i, chunk) in batches.iter().enumerate() {
            let filename = generator.chunk_filename(i);
            let xml = generator.render_chunk(chunk, &lastmod);
            fs::write(self.root.join(&filename), xml)?;

            debug!(file = %filename, urls = chunk.len(), "wrote sitemap chunk");
            stats.chunks.push(ChunkStats {
                filename: filename.clone(),
                urls: chunk.len(),
            });
            chunk_files.push(filename);
        }

        if self.config.sitemap.prune {
            stats.pruned = self.prune_stale_chunks(&chunk_files)?;
        }

        let index = generator.render_index(&chunk_files);
        fs::write(self.root.join(INDEX_FILE), index)?;
        info!(chunks = chunk_files.len(), "wrote sitemap index");

        let robots = RobotsGenerator::new(self.config.robots.clone(), domain);
        robots.generate(&self.root)?;

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            pages = stats.pages,
            chunks = stats.chunks.len(),
            pruned = stats.pruned,
            duration_ms = stats.duration_ms,
            "generation complete"
        );

        Ok(stats)
    }

    /// Delete chunk files from earlier runs that this run did not produce.
    fn prune_stale_chunks(&self, produced: &[String]) -> Result<usize> {
        let mut pruned = 0;

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if SitemapGenerator::is_chunk_filename(&name) && !produced.contains(&name) {
                fs::remove_file(entry.path())?;
                debug!(file = %name, "pruned stale sitemap chunk");
                pruned += 1;
            }
        }

        Ok(pruned)
    }
}
