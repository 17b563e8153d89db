//! In-memory catalog source for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::api::{CatalogApp, CatalogSource};
use crate::error::{Error, Result};

/// Serves a fixed app list and counts how often it was fetched.
pub struct FakeCatalog {
    apps: Vec<CatalogApp>,
    fail: bool,
    calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn new(apps: Vec<CatalogApp>) -> Self {
        Self {
            apps,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// A source whose every fetch fails like an unreachable service.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(vec![])
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogApp>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Catalog("connection refused".to_string()));
        }
        Ok(self.apps.clone())
    }
}
