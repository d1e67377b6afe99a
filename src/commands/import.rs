//! Import command - read a sheet and report the outcome row by row

use super::Result;
use crate::ingest::{self, IngestOptions, RegionCentroidGeocoder};
use crate::output;
use crate::place::Category;
use colored::Colorize;
use std::path::Path;

/// Execute the import command
///
/// # Errors
/// Returns `PlaceError::Ingest` if the sheet as a whole cannot be used.
pub fn execute(
    path: &Path,
    category: Category,
    options: &IngestOptions,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let report = ingest::ingest_file(path, category, options, &RegionCentroidGeocoder)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report.places)?);
        return Ok(());
    }

    for place in &report.places {
        if quiet {
            println!("{}", place.id());
        } else {
            println!(
                "{} {}  {} [{}]  {}",
                "✓".green(),
                place.id().dimmed(),
                place.name(),
                output::category_badge(place.category()),
                place.address().dimmed()
            );
        }
    }
    if !quiet {
        for row in &report.skipped {
            println!("{} row {}: {}", "✗".red(), row.index + 1, row.reason);
        }
        println!(
            "\n{} {} imported, {} skipped",
            "Summary:".bold(),
            report.places.len().to_string().green(),
            report.skipped.len().to_string().yellow()
        );
        let prefix = options
            .id_prefix
            .as_deref()
            .map(|prefix| format!(":{prefix}"))
            .unwrap_or_default();
        println!(
            "Use '--import {}{prefix}={}' with search to include these places.",
            category.slug(),
            path.display()
        );
    }
    Ok(())
}
