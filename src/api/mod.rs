//! App catalog API module.
//!
//! This module provides:
//! - The `CatalogSource` seam used by the identifier directory
//! - HTTP client for the public app list endpoint
//! - API response types

pub mod client;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{CatalogSource, SteamCatalogClient};
pub use types::*;
