//! Filtering, distance annotation and ordering of places

use super::context::SpatialContext;
use super::filter::{PlaceFilter, SearchMode};
use crate::geo::{self, Coordinate};
use crate::place::Place;
use std::collections::BTreeSet;

/// A place that passed the filter, with its distance from the reference point
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceMatch<'a> {
    pub place: &'a Place,
    /// Meters from the context's reference point
    pub distance: f64,
    pub favorite: bool,
}

impl PlaceMatch<'_> {
    /// Display label for the distance (see [`geo::format_distance`])
    #[must_use]
    pub fn distance_label(&self) -> String {
        geo::format_distance(self.distance)
    }
}

fn contains_keyword(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn matches_keyword(place: &Place, keyword_lower: &str) -> bool {
    contains_keyword(place.name(), keyword_lower)
        || contains_keyword(place.address(), keyword_lower)
        || place
            .representative()
            .is_some_and(|r| contains_keyword(r, keyword_lower))
}

/// Spatial predicate; returns the distance when the place is kept
fn spatial_distance(place: &Place, filter: &PlaceFilter, reference: Coordinate) -> Option<f64> {
    let d = geo::distance(reference, place.coord());
    match filter.search_mode {
        SearchMode::Radius => (d <= filter.radius).then_some(d),
        SearchMode::Viewport => match filter.map_bounds {
            Some(bounds) => bounds.contains(place.coord()).then_some(d),
            None => Some(d),
        },
    }
}

/// Evaluate `filter` over `places`
///
/// Keeps places passing every predicate (region, category, keyword,
/// spatial, favorites) and orders them by ascending distance from the
/// context's reference point; equal distances keep repository order.
///
/// Never fails: an empty category set, a non-positive radius in radius mode,
/// or `favorites_only` without a favorites set produce an empty result.
/// Viewport mode without bounds applies no spatial restriction.
#[must_use]
pub fn evaluate<'a>(
    places: &'a [Place],
    filter: &PlaceFilter,
    context: &SpatialContext,
    favorites: Option<&BTreeSet<String>>,
) -> Vec<PlaceMatch<'a>> {
    if filter.categories.is_empty() {
        return Vec::new();
    }
    if filter.search_mode == SearchMode::Radius
        && (filter.radius.is_nan() || filter.radius <= 0.0)
    {
        return Vec::new();
    }
    if filter.favorites_only && favorites.is_none() {
        return Vec::new();
    }

    let reference = context.reference();
    let keyword = filter.effective_keyword().map(str::to_lowercase);

    let mut matches: Vec<PlaceMatch<'a>> = places
        .iter()
        .filter(|p| filter.region.matches(p.region()))
        .filter(|p| filter.categories.contains(&p.category()))
        .filter(|p| keyword.as_deref().is_none_or(|k| matches_keyword(p, k)))
        .filter_map(|p| {
            let favorite = favorites.is_some_and(|f| f.contains(p.id()));
            if filter.favorites_only && !favorite {
                return None;
            }
            spatial_distance(p, filter, reference).map(|distance| PlaceMatch {
                place: p,
                distance,
                favorite,
            })
        })
        .collect();

    // sort_by is stable, so ties keep insertion order
    matches.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    tracing::debug!(
        total = places.len(),
        matched = matches.len(),
        mode = ?filter.search_mode,
        "Evaluated place filter"
    );
    matches
}
