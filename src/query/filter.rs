//! Filter criteria for the place engine
//!
//! [`PlaceFilter`] is a plain value: callers build a new one for every change
//! instead of mutating a shared instance.

use super::error::QueryError;
use crate::geo::Bounds;
use crate::place::Category;
use crate::region::RegionFilter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default search radius in meters
pub const DEFAULT_RADIUS_M: f64 = 5000.0;

/// Spatial restriction applied by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Within `radius` meters of the user's location
    #[default]
    Radius,
    /// Inside the current map bounds; radius is ignored
    Viewport,
}

/// Filter criteria for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceFilter {
    pub region: RegionFilter,
    pub categories: BTreeSet<Category>,
    #[serde(default)]
    pub keyword: Option<String>,
    /// Meters; only consulted in radius mode
    pub radius: f64,
    pub search_mode: SearchMode,
    /// Required in viewport mode, ignored in radius mode
    #[serde(default)]
    pub map_bounds: Option<Bounds>,
    /// Keep only favorited places
    #[serde(default)]
    pub favorites_only: bool,
}

impl Default for PlaceFilter {
    fn default() -> Self {
        Self {
            region: RegionFilter::All,
            categories: Category::ALL.into_iter().collect(),
            keyword: None,
            radius: DEFAULT_RADIUS_M,
            search_mode: SearchMode::Radius,
            map_bounds: None,
            favorites_only: false,
        }
    }
}

impl PlaceFilter {
    #[must_use]
    pub fn builder() -> PlaceFilterBuilder {
        PlaceFilterBuilder::default()
    }

    /// Keyword after trimming, or `None` when blank
    #[must_use]
    pub fn effective_keyword(&self) -> Option<&str> {
        self.keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Reject inconsistent combinations
    ///
    /// The engine tolerates all of these (see [`evaluate`](super::evaluate));
    /// this is for callers that prefer to surface them.
    ///
    /// # Errors
    ///
    /// Returns `QueryError` when viewport mode lacks bounds, when the bounds
    /// are inverted, or when radius mode has a non-positive radius.
    pub fn validate(&self) -> Result<(), QueryError> {
        match self.search_mode {
            SearchMode::Viewport => match self.map_bounds {
                None => Err(QueryError::MissingBounds),
                Some(b) if !b.is_well_formed() => Err(QueryError::MalformedBounds(b)),
                Some(_) => Ok(()),
            },
            SearchMode::Radius if self.radius > 0.0 => Ok(()),
            SearchMode::Radius => Err(QueryError::InvalidRadius(self.radius)),
        }
    }
}

/// Builder for `PlaceFilter`, starting from the defaults
#[derive(Debug, Clone, Default)]
pub struct PlaceFilterBuilder {
    filter: PlaceFilter,
}

impl PlaceFilterBuilder {
    #[must_use]
    pub fn region(mut self, region: impl Into<RegionFilter>) -> Self {
        self.filter.region = region.into();
        self
    }

    /// Replace the category set
    #[must_use]
    pub fn categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.filter.categories = categories.into_iter().collect();
        self
    }

    #[must_use]
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.filter.keyword = Some(keyword.into());
        self
    }

    /// Radius mode with the given radius in meters
    #[must_use]
    pub const fn radius(mut self, meters: f64) -> Self {
        self.filter.radius = meters;
        self.filter.search_mode = SearchMode::Radius;
        self
    }

    /// Viewport mode over the given bounds
    #[must_use]
    pub const fn viewport(mut self, bounds: Bounds) -> Self {
        self.filter.map_bounds = Some(bounds);
        self.filter.search_mode = SearchMode::Viewport;
        self
    }

    #[must_use]
    pub const fn search_mode(mut self, mode: SearchMode) -> Self {
        self.filter.search_mode = mode;
        self
    }

    #[must_use]
    pub const fn favorites_only(mut self, enabled: bool) -> Self {
        self.filter.favorites_only = enabled;
        self
    }

    #[must_use]
    pub fn build(self) -> PlaceFilter {
        self.filter
    }
}
