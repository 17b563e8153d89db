//! App catalog response type definitions.

use serde::Deserialize;
use std::fmt;

/// Top-level app list response.
#[derive(Debug, Deserialize)]
pub struct AppListResponse {
    pub applist: AppList,
}

/// Wrapper around the list of apps.
#[derive(Debug, Deserialize)]
pub struct AppList {
    #[serde(default)]
    pub apps: Vec<CatalogApp>,
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogApp {
    pub appid: AppId,
    pub name: String,
}

/// App id as sent by the service, which uses both numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AppId {
    Number(u64),
    Text(String),
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppId::Number(n) => write!(f, "{}", n),
            AppId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl CatalogApp {
    /// Build an entry with a numeric id.
    pub fn new(appid: u64, name: impl Into<String>) -> Self {
        Self {
            appid: AppId::Number(appid),
            name: name.into(),
        }
    }
}
