//! Location command - inspect or set the point distances are measured from

use super::{Context, Result};
use crate::cli::LocationCommands;
use crate::geo::Coordinate;
use crate::location::{LocationTracker, TrackerOptions};
use crate::PlaceError;
use colored::Colorize;

/// Execute a location subcommand
///
/// # Errors
/// Returns `PlaceError::InvalidInput` if a coordinate is rejected.
pub fn execute(ctx: &Context<'_>, command: &LocationCommands) -> Result<()> {
    match command {
        LocationCommands::Show => show(ctx),
        LocationCommands::Set { coord } => set(ctx, *coord),
    }
}

fn show(ctx: &Context<'_>) -> Result<()> {
    let tracker = LocationTracker::new(ctx.store, ctx.config.tracker_options());
    let c = tracker.coordinates();
    if ctx.quiet {
        println!("{},{}", c.lat, c.lng);
    } else {
        let source = if c == ctx.config.default_center {
            "default center"
        } else {
            "last saved location"
        };
        println!("{:.6}, {:.6} ({source})", c.lat, c.lng);
    }
    Ok(())
}

fn set(ctx: &Context<'_>, coord: Coordinate) -> Result<()> {
    let options = TrackerOptions {
        persist_last_location: true,
        ..ctx.config.tracker_options()
    };
    let mut tracker = LocationTracker::new(ctx.store, options);
    if !tracker.set_custom(coord) {
        return Err(PlaceError::InvalidInput(format!(
            "Rejected coordinate {}, {}",
            coord.lat, coord.lng
        )));
    }
    if !ctx.quiet {
        println!("Location set to {:.6}, {:.6}", coord.lat, coord.lng);
        if !ctx.config.persist_last_location {
            println!(
                "{} searches use it once 'persist_last_location' is enabled:\n  placefinder config set persist_last_location=true",
                "note:".cyan().bold()
            );
        }
    }
    Ok(())
}
