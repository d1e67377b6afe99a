//! Search command - filter places and list them by distance

use super::{Context, Result, load_repository};
use crate::cli::SearchArgs;
use crate::favorites::FavoritesStore;
use crate::geo::format_distance;
use crate::location::LocationTracker;
use crate::output::{self, MatchJson};
use crate::query::{PlaceFilter, SearchMode, SpatialContext, evaluate};

/// Build the filter described by the arguments
///
/// Categories default to all; the radius defaults to `default_radius`.
#[must_use]
pub fn filter_from_args(args: &SearchArgs, default_radius: f64) -> PlaceFilter {
    let mut builder = PlaceFilter::builder()
        .region(args.region.unwrap_or_default())
        .favorites_only(args.favorites_only);
    if !args.categories.is_empty() {
        builder = builder.categories(args.categories.iter().copied());
    }
    if let Some(keyword) = &args.keyword {
        builder = builder.keyword(keyword.clone());
    }
    let builder = match args.viewport {
        Some(bounds) => builder.viewport(bounds),
        None => builder.radius(args.radius.unwrap_or(default_radius)),
    };
    builder.build()
}

/// Execute the search command
///
/// # Errors
/// Returns an error if the place list cannot be loaded, if `--strict` is set
/// and the filter is inconsistent, or if JSON output fails.
pub fn execute(ctx: &Context<'_>, args: &SearchArgs) -> Result<()> {
    let repository = load_repository(&args.data, ctx.quiet)?;
    let filter = filter_from_args(args, ctx.config.default_radius);
    if args.strict {
        filter.validate()?;
    }

    let tracker = LocationTracker::new(ctx.store, ctx.config.tracker_options());
    let origin = args.near.unwrap_or_else(|| tracker.coordinates());
    let context = SpatialContext::for_filter(&filter, origin);
    let favorites = FavoritesStore::new(ctx.store).snapshot();

    let mut matches = evaluate(repository.list(), &filter, &context, Some(&favorites));
    let total = matches.len();
    if let Some(limit) = args.limit {
        matches.truncate(limit);
    }

    if args.json {
        let view: Vec<MatchJson<'_>> = matches.iter().map(MatchJson::from).collect();
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if !ctx.quiet {
        let reference = context.reference();
        let scope = match filter.search_mode {
            SearchMode::Radius => format!("within {}", format_distance(filter.radius)),
            SearchMode::Viewport => "in viewport".to_string(),
        };
        println!(
            "Found {total} place(s) {scope} of ({:.4}, {:.4}) in {}:",
            reference.lat, reference.lng, filter.region
        );
    }
    for m in &matches {
        println!("{}", output::match_line(m, ctx.quiet));
    }
    if !ctx.quiet && matches.len() < total {
        println!("  ... and {} more", total - matches.len());
    }
    Ok(())
}
