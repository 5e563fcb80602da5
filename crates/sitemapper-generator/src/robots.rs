//! Robots.txt generation.
//!
//! Generates the robots.txt file for search engine crawlers.

use std::{fs::File, io::Write, path::Path};

use sitemapper_core::{Domain, config::RobotsConfig};
use thiserror::Error;
use tracing::{debug, info};

use crate::sitemap::INDEX_FILE;

/// Fixed name of the robots policy file.
pub const ROBOTS_FILE: &str = "robots.txt";

/// Robots generation errors.
#[derive(Debug, Error)]
pub enum RobotsError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for robots generation.
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Robots.txt generator.
#[derive(Debug)]
pub struct RobotsGenerator {
    config: RobotsConfig,
    domain: Domain,
}

impl RobotsGenerator {
    /// Create a new robots generator.
    #[must_use]
    pub fn new(config: RobotsConfig, domain: Domain) -> Self {
        Self { config, domain }
    }

    /// Generate robots.txt at the site root, overwriting any existing file.
    pub fn generate(&self, output_dir: &Path) -> Result<()> {
        if !self.config.enabled {
            debug!("robots.txt generation disabled, skipping");
            return Ok(());
        }

        info!("generating robots.txt");

        let path = output_dir.join(ROBOTS_FILE);
        let mut file = File::create(path)?;

        writeln!(file, "User-agent: *")?;

        for path in &self.config.disallow {
            writeln!(file, "Disallow: {path}")?;
        }

        for path in &self.config.allow {
            writeln!(file, "Allow: {path}")?;
        }

        writeln!(file)?;
        writeln!(file, "Sitemap: {}", self.domain.url_for(INDEX_FILE))?;

        Ok(())
    }
}
