//! Run report printing.

use console::style;

use crate::organize::RunReport;

/// Print the end-of-run report, listing every file left behind.
pub fn print_run_report(report: &RunReport) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Run Summary:").bold());
    println!("  Moved:    {}", report.moved);
    println!("  Copied:   {}", report.copied);
    if !report.planned.is_empty() {
        println!("  Planned:  {} (dry run)", report.planned.len());
    }
    println!(
        "  Skipped:  {}",
        if report.skipped.is_empty() {
            style(report.skipped.len()).green()
        } else {
            style(report.skipped.len()).yellow()
        }
    );
    if report.catalog_refreshes > 0 {
        println!("  Catalog downloads: {}", report.catalog_refreshes);
    }

    if !report.planned.is_empty() {
        println!();
        println!("{}", style("Planned:").bold());
        for planned in &report.planned {
            println!("  {} -> {}", planned.from.display(), planned.to.display());
        }
    }

    if !report.skipped.is_empty() {
        println!();
        println!("{}", style("Skipped files:").bold());
        for skipped in &report.skipped {
            println!(
                "  {} ({})",
                skipped.path.display(),
                style(&skipped.reason).yellow()
            );
        }
    }

    if !report.skipped_sources.is_empty() {
        println!();
        println!("{}", style("Skipped sources:").bold());
        for source in &report.skipped_sources {
            println!("  {} ({})", source.path.display(), style(&source.message).red());
        }
    }
    println!("{}", style("═".repeat(50)).dim());
}
