//! levelmerge-common: Shared edge types and errors used across all levelmerge crates.

pub mod error;
pub mod entities;

// Re-export commonly used types
pub use entities::{Edge, EdgeKey, InteractionCategory, NOT_AVAILABLE};
pub use error::{MergeError, Result};
