//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use url::Url;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_sources(config)?;
    validate_extensions(&config.options.extensions)?;
    validate_catalog_url(&config.catalog.url)?;

    if config.catalog.timeout_seconds == 0 {
        return Err(Error::ConfigValidation {
            field: "catalog.timeout_seconds".to_string(),
            message: "Timeout must be greater than zero".to_string(),
        });
    }

    Ok(())
}

/// Validate source directories against the destination.
pub fn validate_sources(config: &Config) -> Result<()> {
    if config.sources.is_empty() {
        return Err(Error::MissingConfig(
            "sources (at least one screenshot directory required)".to_string(),
        ));
    }

    let destination = config.destination()?;

    for source in &config.sources {
        if source.path == destination {
            return Err(Error::ConfigValidation {
                field: "sources".to_string(),
                message: format!(
                    "Source '{}' is also the destination",
                    source.path.display()
                ),
            });
        }
    }

    Ok(())
}

/// Validate the extension allow-list.
pub fn validate_extensions<S: AsRef<str>>(extensions: &[S]) -> Result<()> {
    if extensions.is_empty() {
        return Err(Error::MissingConfig(
            "extensions (at least one file extension required)".to_string(),
        ));
    }

    for ext in extensions {
        let ext = ext.as_ref();
        let bare = normalize_extension(ext);
        if bare.is_empty() || bare.contains('.') || bare.contains(char::is_whitespace) {
            return Err(Error::ConfigValidation {
                field: "extensions".to_string(),
                message: format!("'{}' is not a file extension", ext),
            });
        }
    }

    Ok(())
}

/// Validate the catalog endpoint.
pub fn validate_catalog_url(input: &str) -> Result<()> {
    let url = Url::parse(input)?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(Error::ConfigValidation {
            field: "catalog.url".to_string(),
            message: format!("Unsupported scheme '{}', expected http or https", scheme),
        }),
    }
}

/// Strip a leading dot from a configured extension.
pub fn normalize_extension(ext: &str) -> &str {
    ext.trim().trim_start_matches('.')
}
