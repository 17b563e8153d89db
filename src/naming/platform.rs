//! Game name resolution for platform screenshot filenames.
//!
//! The platform client writes `<app id>_<timestamp>_<n>.<ext>`.

use crate::api::CatalogSource;
use crate::catalog::IdentifierDirectory;
use crate::error::{Error, Result};

/// Extract the leading app id (everything before the first underscore).
pub fn extract_platform_id(file_name: &str) -> Result<&str> {
    let (id, _) = file_name
        .split_once('_')
        .ok_or_else(|| Error::NoMatch(file_name.to_string()))?;

    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::NoMatch(file_name.to_string()));
    }

    Ok(id)
}

/// Resolve a platform filename to its canonical game name.
///
/// Returns `Error::UnknownAppId` when the id is still missing after the
/// directory's refresh-and-retry. Catalog failures propagate.
pub async fn resolve_platform_name<S: CatalogSource>(
    directory: &mut IdentifierDirectory<S>,
    file_name: &str,
) -> Result<String> {
    let id = extract_platform_id(file_name)?;

    directory
        .lookup(id)
        .await?
        .ok_or_else(|| Error::UnknownAppId(id.to_string()))
}
