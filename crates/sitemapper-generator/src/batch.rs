//! URL list batching.
//!
//! Partitions the discovered URL list into fixed-size groups to bound
//! individual sitemap file size.

use thiserror::Error;

/// Batching errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    /// A batch size of zero can make no progress.
    #[error("invalid batch size: max_size must be at least 1")]
    InvalidMaxSize,
}

/// Result type for batching operations.
pub type Result<T> = std::result::Result<T, BatchError>;

/// Split `items` into contiguous, order-preserving groups of at most
/// `max_size` elements.
///
/// The last group may be smaller; empty input yields zero groups.
/// Concatenating the groups in order reproduces the input exactly.
pub fn batch<T>(items: &[T], max_size: usize) -> Result<Vec<&[T]>> {
    if max_size == 0 {
        return Err(BatchError::InvalidMaxSize);
    }
    Ok(items.chunks(max_size).collect())
}
