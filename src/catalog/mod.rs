//! App id catalog module.
//!
//! Provides:
//! - The on-disk id -> name cache
//! - The lazily loaded directory with refresh-on-miss

pub mod cache;
pub mod directory;

pub use cache::{read_cache, write_cache, IdTable};
pub use directory::IdentifierDirectory;
