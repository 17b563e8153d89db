//! Screenshot Organizer - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use screenshot_organizer::{
    catalog::IdentifierDirectory,
    cli::Args,
    config::{default_config_path, validate_config, Config},
    error::{exit_codes, Error, Result},
    naming::NameMapping,
    organize::Organizer,
    output::{
        print_banner, print_config_summary, print_error, print_info, print_run_report,
        print_success, print_warning,
    },
    SteamCatalogClient,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_)
                | Error::UrlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Catalog(_) | Error::Http(_) => {
                    ExitCode::from(exit_codes::CATALOG_ERROR as u8)
                }
                Error::Cache { .. } | Error::Io(_) | Error::Relocation { .. } => {
                    ExitCode::from(exit_codes::FILESYSTEM_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let explicit_config = args.config.is_some();
    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else if explicit_config {
        return Err(Error::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    let strict = args.strict;

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;
    print_config_summary(&config);

    let mapping = NameMapping::load_optional(config.options.mapping_file.as_deref())?;
    if !mapping.is_empty() {
        print_info(&format!("Loaded {} name mapping(s)", mapping.len()));
    }

    let client = SteamCatalogClient::new(&config.catalog)?;
    let directory = IdentifierDirectory::new(client, config.cache_file());

    let report = Organizer::new(config, directory, mapping)?.run().await?;
    print_run_report(&report);

    if report.has_skips() {
        print_warning(&format!(
            "{} file(s) and {} source(s) were left in place",
            report.skipped.len(),
            report.skipped_sources.len()
        ));
        if strict {
            return Ok(exit_codes::SOME_FILES_SKIPPED);
        }
    } else {
        print_success("All screenshots organized");
    }

    Ok(exit_codes::SUCCESS)
}
