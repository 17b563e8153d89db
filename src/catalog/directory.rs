//! App id directory backed by the local cache and the remote catalog.

use std::path::{Path, PathBuf};

use crate::api::CatalogSource;
use crate::catalog::cache::{read_cache, write_cache, IdTable};
use crate::error::Result;

/// Lazily loaded id -> name directory.
///
/// Starts unloaded. The first lookup loads the cache file, or fetches the
/// catalog when there is none. Every miss refreshes from the remote catalog
/// once and retries.
pub struct IdentifierDirectory<S> {
    source: S,
    cache_path: PathBuf,
    /// `None` until loaded.
    table: Option<IdTable>,
    persist: bool,
    refresh_count: u32,
}

impl<S: CatalogSource> IdentifierDirectory<S> {
    /// Create an unloaded directory.
    pub fn new(source: S, cache_path: impl Into<PathBuf>) -> Self {
        Self {
            source,
            cache_path: cache_path.into(),
            table: None,
            persist: true,
            refresh_count: 0,
        }
    }

    /// Choose whether fetched catalogs are written to the cache file.
    ///
    /// Dry runs keep the fetched table in memory only.
    pub fn set_persist(&mut self, persist: bool) {
        self.persist = persist;
    }

    /// Location of the cache file.
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    /// Number of remote fetches made so far.
    pub fn refresh_count(&self) -> u32 {
        self.refresh_count
    }

    /// Load the directory, reading the cache or fetching the catalog.
    ///
    /// Does nothing if already loaded.
    pub async fn load(&mut self) -> Result<&IdTable> {
        let table = match self.table.take() {
            Some(table) => table,
            None => match read_cache(&self.cache_path)? {
                Some(table) => table,
                None => {
                    tracing::info!(
                        "No app id cache at {}, downloading catalog",
                        self.cache_path.display()
                    );
                    self.fetch().await?
                }
            },
        };

        Ok(self.table.insert(table))
    }

    /// Replace the directory with a fresh copy of the remote catalog.
    ///
    /// The cache file is overwritten. Failures propagate and leave the
    /// previous table in place.
    pub async fn refresh(&mut self) -> Result<&IdTable> {
        let table = self.fetch().await?;
        Ok(self.table.insert(table))
    }

    /// Resolve an app id to its canonical name.
    ///
    /// A miss triggers exactly one refresh and one retry. `Ok(None)` means
    /// the id is not in the catalog.
    pub async fn lookup(&mut self, id: &str) -> Result<Option<String>> {
        let hit = self.load().await?.get(id).cloned();
        if hit.is_some() {
            return Ok(hit);
        }

        tracing::info!("App id {} not in cache, refreshing catalog", id);
        let table = self.refresh().await?;
        Ok(table.get(id).cloned())
    }

    async fn fetch(&mut self) -> Result<IdTable> {
        self.refresh_count += 1;
        let apps = self.source.fetch_catalog().await?;

        // Later duplicates overwrite earlier ones.
        let table: IdTable = apps
            .into_iter()
            .map(|app| (app.appid.to_string(), app.name))
            .collect();

        if self.persist {
            write_cache(&self.cache_path, &table)?;
        }
        tracing::info!("Fetched {} app ids from remote catalog", table.len());

        Ok(table)
    }
}
