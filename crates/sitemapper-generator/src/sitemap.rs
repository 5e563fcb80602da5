//! Sitemap generation.
//!
//! Renders sitemap chunk documents (urlset) and the sitemap index.

use rand::Rng;
use sitemapper_core::{ChunkNaming, Domain, config::SitemapConfig};
use tracing::debug;

/// Fixed name of the sitemap index document.
pub const INDEX_FILE: &str = "sitemap.xml";

/// Prefix shared by every chunk filename.
pub const CHUNK_PREFIX: &str = "sitemap_";

/// Suffix shared by every chunk filename.
pub const CHUNK_SUFFIX: &str = ".xml";

const SCHEMA: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const TOKEN_LEN: usize = 8;
const TOKEN_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Sitemap document generator.
#[derive(Debug)]
pub struct SitemapGenerator {
    config: SitemapConfig,
    domain: Domain,
}

impl SitemapGenerator {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new(config: SitemapConfig, domain: Domain) -> Self {
        Self { config, domain }
    }

    /// Filename for the chunk at `index` (zero-based) under the
    /// configured naming policy.
    ///
    /// The random policy draws a fresh token per call with no collision
    /// check, matching the legacy accumulate-orphans behavior.
    pub fn chunk_filename(&self, index: usize) -> String {
        match self.config.chunk_names {
            ChunkNaming::Sequential => {
                format!("{CHUNK_PREFIX}{:04}{CHUNK_SUFFIX}", index + 1)
            }
            ChunkNaming::Random => format!("{CHUNK_PREFIX}{}{CHUNK_SUFFIX}", random_token()),
        }
    }

    /// Render one urlset document for a batch of URL paths.
    ///
    /// `lastmod` is the run date in `YYYY-MM-DD` form, identical across
    /// all entries of the run.
    pub fn render_chunk(&self, urls: &[String], lastmod: &str) -> String {
        debug!(count = urls.len(), "rendering sitemap chunk");

        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!("<urlset xmlns=\"{SCHEMA}\">\n"));

        for url in urls {
            let loc = self.domain.url_for(url);
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&loc)));
            xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            xml.push_str(&format!(
                "    <priority>{}</priority>\n",
                self.config.priority
            ));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Render the sitemap index referencing every chunk file, in
    /// production order. A zero-entry index is still a valid document.
    pub fn render_index(&self, chunk_files: &[String]) -> String {
        debug!(count = chunk_files.len(), "rendering sitemap index");

        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!("<sitemapindex xmlns=\"{SCHEMA}\">\n"));

        for file in chunk_files {
            xml.push_str("  <sitemap>\n");
            xml.push_str(&format!(
                "    <loc>{}</loc>\n",
                escape_xml(&self.domain.url_for(file))
            ));
            xml.push_str("  </sitemap>\n");
        }

        xml.push_str("</sitemapindex>\n");
        xml
    }

    /// True when `name` looks like a chunk file produced by this
    /// generator (under either naming policy).
    pub fn is_chunk_filename(name: &str) -> bool {
        name.starts_with(CHUNK_PREFIX) && name.ends_with(CHUNK_SUFFIX)
    }
}

/// Generate an 8-character token of lowercase letters and digits.
fn random_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LEN)
        .map(|_| TOKEN_CHARS[rng.gen_range(0..TOKEN_CHARS.len())] as char)
        .collect()
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(naming: ChunkNaming) -> SitemapGenerator {
        let config = SitemapConfig {
            chunk_names: naming,
            ..Default::default()
        };
        SitemapGenerator::new(config, Domain::new("example.com"))
    }

    #[test]
    fn test_render_chunk_single_url() {
        let generator = generator(ChunkNaming::Sequential);
        let urls = vec!["about.html".to_string()];

        let xml = generator.render_chunk(&urls, "2026-08-29");

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(xml.contains("<loc>https://example.com/about.html</loc>"));
        assert!(xml.contains("<lastmod>2026-08-29</lastmod>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn test_render_chunk_directory_url() {
        let generator = generator(ChunkNaming::Sequential);
        let urls = vec!["blog/sub/".to_string()];

        let xml = generator.render_chunk(&urls, "2026-08-29");

        assert!(xml.contains("<loc>https://example.com/blog/sub/</loc>"));
    }

    #[test]
    fn test_render_chunk_escapes_xml() {
        let generator = generator(ChunkNaming::Sequential);
        let urls = vec!["a&b.html".to_string()];

        let xml = generator.render_chunk(&urls, "2026-08-29");

        assert!(xml.contains("<loc>https://example.com/a&amp;b.html</loc>"));
        assert!(!xml.contains("a&b.html"));
    }

    #[test]
    fn test_render_index() {
        let generator = generator(ChunkNaming::Sequential);
        let files = vec![
            "sitemap_0001.xml".to_string(),
            "sitemap_0002.xml".to_string(),
        ];

        let xml = generator.render_index(&files);

        assert!(xml.contains("<sitemapindex"));
        assert!(xml.contains("<loc>https://example.com/sitemap_0001.xml</loc>"));
        assert!(xml.contains("<loc>https://example.com/sitemap_0002.xml</loc>"));
        // Order is production order.
        let first = xml.find("sitemap_0001.xml").unwrap();
        let second = xml.find("sitemap_0002.xml").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_index_empty_is_valid() {
        let generator = generator(ChunkNaming::Sequential);

        let xml = generator.render_index(&[]);

        assert!(xml.contains("<sitemapindex"));
        assert!(xml.ends_with("</sitemapindex>\n"));
        assert!(!xml.contains("<sitemap>"));
    }

    #[test]
    fn test_sequential_chunk_filenames() {
        let generator = generator(ChunkNaming::Sequential);

        assert_eq!(generator.chunk_filename(0), "sitemap_0001.xml");
        assert_eq!(generator.chunk_filename(1), "sitemap_0002.xml");
        assert_eq!(generator.chunk_filename(42), "sitemap_0043.xml");
    }

    #[test]
    fn test_random_chunk_filename_shape() {
        let generator = generator(ChunkNaming::Random);

        let name = generator.chunk_filename(0);
        assert!(name.starts_with(CHUNK_PREFIX));
        assert!(name.ends_with(CHUNK_SUFFIX));

        let token = &name[CHUNK_PREFIX.len()..name.len() - CHUNK_SUFFIX.len()];
        assert_eq!(token.len(), 8);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_is_chunk_filename() {
        assert!(SitemapGenerator::is_chunk_filename("sitemap_0001.xml"));
        assert!(SitemapGenerator::is_chunk_filename("sitemap_a1b2c3d4.xml"));
        assert!(!SitemapGenerator::is_chunk_filename("sitemap.xml"));
        assert!(!SitemapGenerator::is_chunk_filename("robots.txt"));
        assert!(!SitemapGenerator::is_chunk_filename("sitemap_0001.xml.bak"));
    }
}
