//! Sitemapper Core Library
//!
//! Core types, configuration, and error handling for the sitemapper
//! static sitemap generator.

pub mod config;
pub mod domain;
pub mod error;

pub use config::{ChunkNaming, Config};
pub use domain::Domain;
pub use error::{CoreError, Result};
