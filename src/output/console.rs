//! Console output utilities.

use console::style;

use crate::config::Config;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Screenshot Organizer                              ║
║     Sorts game screenshots into per-game folders      ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(config: &Config) {
    println!();
    println!("{}", style("Configuration:").bold());
    for source in &config.sources {
        println!("  Source ({}): {}", source.convention, source.path.display());
    }
    if let Some(destination) = &config.options.destination {
        println!("  Destination: {}", destination.display());
    }
    println!(
        "  Mode: {}{}",
        config.options.mode,
        if config.options.dry_run { " (dry run)" } else { "" }
    );
    if let Some(mapping) = &config.options.mapping_file {
        println!("  Name mapping: {}", mapping.display());
    }
    println!();
}
