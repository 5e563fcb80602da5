//! Publishing domain resolution.
//!
//! The domain name comes from a `CNAME` file at the site root, the
//! convention used by GitHub Pages custom domains.

use std::{fmt, fs, path::Path};

use tracing::{debug, warn};

/// Well-known file holding the publishing domain.
pub const CNAME_FILE: &str = "CNAME";

/// Placeholder used when no domain can be resolved.
pub const FALLBACK_DOMAIN: &str = "example.com";

/// The publishing host name, plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    name: String,
    fallback: bool,
}

impl Domain {
    /// Create a domain from a known host name (e.g. a CLI override).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fallback: false,
        }
    }

    /// Resolve the domain from the `CNAME` file under `root`.
    ///
    /// A missing, unreadable, or empty file is non-fatal: a warning is
    /// logged and the placeholder domain is substituted so the run can
    /// still complete.
    pub fn resolve(root: &Path) -> Self {
        let path = root.join(CNAME_FILE);
        match fs::read_to_string(&path) {
            Ok(content) => {
                let name = content.trim();
                if name.is_empty() {
                    warn!(path = %path.display(), "CNAME file is empty, using placeholder domain");
                    Self {
                        name: FALLBACK_DOMAIN.to_string(),
                        fallback: true,
                    }
                } else {
                    debug!(domain = name, "resolved domain from CNAME");
                    Self {
                        name: name.to_string(),
                        fallback: false,
                    }
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "CNAME file not readable, using placeholder domain");
                Self {
                    name: FALLBACK_DOMAIN.to_string(),
                    fallback: true,
                }
            }
        }
    }

    /// The host name, used verbatim in URL construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when the placeholder was substituted for a missing CNAME.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Absolute URL for a site-relative path.
    pub fn url_for(&self, path: &str) -> String {
        format!("https://{}/{}", self.name, path.trim_start_matches('/'))
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
