//! Page discovery.
//!
//! Walks the site root and normalizes every page file into a
//! site-relative URL path.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Version-control metadata directory pruned from traversal.
pub const VCS_DIR: &str = ".git";

/// Discovery errors.
#[derive(Debug, Error)]
pub enum DiscoverError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk error.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result type for discovery operations.
pub type Result<T> = std::result::Result<T, DiscoverError>;

/// Page discoverer that walks a directory tree for page files.
#[derive(Debug)]
pub struct PageDiscoverer {
    root: PathBuf,
    extension: String,
}

impl PageDiscoverer {
    /// Create a new discoverer rooted at `root` looking for files with
    /// the given extension (without the leading dot).
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// Collect every page under the root as a URL path.
    ///
    /// The `.git` directory is not descended into; this is the single
    /// special-cased exclusion, not a generic ignore list. Results are
    /// sorted lexicographically so output is deterministic across
    /// platforms and filesystems. Duplicates are not removed.
    pub fn discover(&self) -> Result<Vec<String>> {
        let suffix = format!(".{}", self.extension);
        let mut urls = Vec::new();

        let walker = WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|e| !(e.file_type().is_dir() && e.file_name() == VCS_DIR));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if !name.ends_with(&suffix) {
                continue;
            }

            let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
            let url = url_path(relative, &self.extension);
            debug!(path = %relative.display(), url = %url, "discovered page");
            urls.push(url);
        }

        urls.sort();
        info!(count = urls.len(), root = %self.root.display(), "page discovery complete");
        Ok(urls)
    }
}

/// Derive a URL path from a page's path relative to the site root.
///
/// A final component of exactly `index.{extension}` is stripped to its
/// directory form: `blog/index.html` becomes `blog/`, a root
/// `index.html` becomes the empty path (the site root). Every other
/// page keeps its relative path unchanged.
fn url_path(relative: &Path, extension: &str) -> String {
    let path = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    let index_name = format!("index.{extension}");
    if path == index_name {
        String::new()
    } else if let Some(dir) = path.strip_suffix(&format!("/{index_name}")) {
        format!("{dir}/")
    } else {
        path
    }
}
