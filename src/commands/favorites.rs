//! Favorite and favorites commands

use super::{Context, Result, load_repository};
use crate::PlaceError;
use crate::cli::DataArgs;
use crate::favorites::FavoritesStore;
use crate::geo;
use crate::location::LocationTracker;
use crate::output::{self, MatchJson};
use crate::query::PlaceMatch;
use colored::Colorize;

/// Toggle `id` as a favorite
///
/// Unknown ids can only be removed, never added.
///
/// # Errors
/// Returns `PlaceError::NotFound` when adding an id no loaded place has.
pub fn toggle(ctx: &Context<'_>, id: &str, data: &DataArgs) -> Result<()> {
    let repository = load_repository(data, ctx.quiet)?;
    let favorites = FavoritesStore::new(ctx.store);
    if !repository.contains(id) && !favorites.contains(id) {
        return Err(PlaceError::NotFound(id.to_string()));
    }

    let added = favorites.toggle(id);
    if favorites.is_degraded() && !ctx.quiet {
        eprintln!(
            "{} favorites could not be saved; the change lasts for this run only",
            "warning:".yellow().bold()
        );
    }
    if !ctx.quiet {
        let name = repository.get(id).map_or(id, |p| p.name());
        if added {
            println!("{} Added {name} to favorites", "★".yellow());
        } else {
            println!("Removed {name} from favorites");
        }
    }
    Ok(())
}

/// List favorites in repository order with distances from the current location
///
/// # Errors
/// Returns an error if the place list cannot be loaded or JSON output fails.
pub fn list(ctx: &Context<'_>, json: bool, data: &DataArgs) -> Result<()> {
    let repository = load_repository(data, ctx.quiet)?;
    let ids = FavoritesStore::new(ctx.store).snapshot();
    let here = LocationTracker::new(ctx.store, ctx.config.tracker_options()).coordinates();

    let matches: Vec<PlaceMatch<'_>> = repository
        .list()
        .iter()
        .filter(|p| ids.contains(p.id()))
        .map(|place| PlaceMatch {
            place,
            distance: geo::distance(here, place.coord()),
            favorite: true,
        })
        .collect();
    let stale = ids.len() - matches.len();

    if json {
        let view: Vec<MatchJson<'_>> = matches.iter().map(MatchJson::from).collect();
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if matches.is_empty() && !ctx.quiet {
        println!("No favorites yet. Use 'placefinder favorite <ID>' to add one.");
    }
    for m in &matches {
        println!("{}", output::match_line(m, ctx.quiet));
    }
    if stale > 0 && !ctx.quiet {
        println!("  ({stale} favorite(s) refer to places not currently loaded)");
    }
    Ok(())
}
