//! Show command - details and outbound links for one place

use super::{Context, Result, load_repository};
use crate::PlaceError;
use crate::cli::DataArgs;
use crate::favorites::FavoritesStore;
use crate::geo::{self, format_distance};
use crate::location::LocationTracker;
use crate::output;
use crate::place::links;
use crate::selection::Selection;

/// Execute the show command
///
/// # Errors
/// Returns `PlaceError::NotFound` for an unknown id, or an error if the
/// browser cannot be launched with `--open`.
pub fn execute(ctx: &Context<'_>, id: &str, open: bool, json: bool, data: &DataArgs) -> Result<()> {
    let repository = load_repository(data, ctx.quiet)?;
    let mut selection = Selection::new();
    selection.select(repository.get(id).cloned());
    let place = selection
        .current()
        .ok_or_else(|| PlaceError::NotFound(id.to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(place)?);
    } else {
        let favorite = FavoritesStore::new(ctx.store).contains(place.id());
        println!("{}", output::place_details(place, favorite));
        if !ctx.quiet {
            let here = LocationTracker::new(ctx.store, ctx.config.tracker_options()).coordinates();
            println!(
                "  Distance:       {}",
                format_distance(geo::distance(here, place.coord()))
            );
        }
    }

    if open {
        let url = links::web_directions_url(place);
        tracing::debug!(%url, "Opening directions");
        open::that(&url)?;
    }
    Ok(())
}
