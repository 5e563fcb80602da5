//! Sitemapper CLI Library
//!
//! Command implementations for the sitemapper binary. The binary entry
//! point lives in `main.rs`; this library exposes the commands so they
//! can be documented and tested.
//!
//! # Modules
//!
//! - [`cmd`] - command implementations (generate, check)

pub mod cmd;

// Re-export core types for convenience
pub use sitemapper_core::{ChunkNaming, Config, Domain};
pub use sitemapper_generator::{Builder, GenerateStats};

/// Initialize tracing with the specified verbosity level.
///
/// `verbose` maps counts of `-v` to levels: 0 = WARN, 1 = INFO,
/// 2 = DEBUG, 3+ = TRACE.
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
