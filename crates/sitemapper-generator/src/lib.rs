//! Sitemapper Generator Library
//!
//! Static sitemap generation engine for sitemapper.
//!
//! # Modules
//!
//! - [`discover`] - page discovery and URL path derivation
//! - [`batch`] - URL list batching
//! - [`sitemap`] - sitemap chunk and index document rendering
//! - [`robots`] - robots.txt emission
//! - [`build`] - pipeline orchestration

pub mod batch;
pub mod build;
pub mod discover;
pub mod robots;
pub mod sitemap;

pub use build::{Builder, ChunkStats, GenerateStats};
pub use discover::PageDiscoverer;
pub use robots::RobotsGenerator;
pub use sitemap::SitemapGenerator;
