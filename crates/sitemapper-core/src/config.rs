//! Generator configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for sitemapper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Page discovery settings.
    #[serde(default)]
    pub pages: PagesConfig,

    /// Sitemap emission settings.
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// Robots.txt settings.
    #[serde(default)]
    pub robots: RobotsConfig,
}

/// Page discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesConfig {
    /// File extension that marks a page (without the leading dot).
    #[serde(default = "default_extension")]
    pub extension: String,
}

/// Sitemap emission configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapConfig {
    /// Maximum number of URLs per sitemap chunk file.
    #[serde(default = "default_max_urls")]
    pub max_urls_per_chunk: usize,

    /// Priority value written for every URL entry.
    #[serde(default = "default_priority")]
    pub priority: String,

    /// Naming policy for chunk files.
    #[serde(default)]
    pub chunk_names: ChunkNaming,

    /// Whether to delete chunk files left over from earlier runs.
    #[serde(default = "default_true")]
    pub prune: bool,
}

/// Naming policy for sitemap chunk files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkNaming {
    /// Deterministic zero-padded index: `sitemap_0001.xml`, `sitemap_0002.xml`, ...
    #[default]
    Sequential,

    /// Legacy behavior: an 8-character random token per chunk, fresh each run.
    Random,
}

/// Robots.txt configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotsConfig {
    /// Whether robots.txt generation is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Paths listed as `Disallow:` directives.
    #[serde(default)]
    pub disallow: Vec<String>,

    /// Paths listed as `Allow:` directives.
    #[serde(default = "default_allow")]
    pub allow: Vec<String>,
}

// Default value functions
fn default_extension() -> String {
    "html".to_string()
}

fn default_max_urls() -> usize {
    2000
}

fn default_priority() -> String {
    "0.8".to_string()
}

fn default_true() -> bool {
    true
}

fn default_allow() -> Vec<String> {
    vec!["/".to_string()]
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
        }
    }
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            max_urls_per_chunk: default_max_urls(),
            priority: default_priority(),
            chunk_names: ChunkNaming::default(),
            prune: true,
        }
    }
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            disallow: Vec::new(),
            allow: default_allow(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    ///
    /// The configuration file is optional; a missing file is not an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    ///
    /// Call again after mutating a loaded configuration (e.g. CLI overrides).
    pub fn validate(&self) -> Result<()> {
        if self.sitemap.max_urls_per_chunk == 0 {
            return Err(CoreError::config(
                "sitemap.max_urls_per_chunk must be at least 1",
            ));
        }

        match self.sitemap.priority.parse::<f32>() {
            Ok(p) if (0.0..=1.0).contains(&p) => {}
            _ => {
                return Err(CoreError::config(format!(
                    "sitemap.priority must be a number between 0.0 and 1.0, got \"{}\"",
                    self.sitemap.priority
                )));
            }
        }

        if self.pages.extension.is_empty() {
            return Err(CoreError::config("pages.extension cannot be empty"));
        }

        Ok(())
    }
}
