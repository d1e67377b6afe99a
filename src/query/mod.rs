//! Place query engine
//!
//! The engine is a pure function of `(places, filter, spatial context,
//! favorites)`. It keeps no state and no cache; hosts call [`evaluate`]
//! whenever any input changes.
//!
//! # Examples
//!
//! ```
//! use placefinder::geo::DEFAULT_CENTER;
//! use placefinder::place::seed::seed_places;
//! use placefinder::query::{PlaceFilter, SpatialContext, evaluate};
//!
//! let places = seed_places().unwrap();
//! let filter = PlaceFilter::builder().radius(10_000.0).build();
//! let context = SpatialContext::for_filter(&filter, DEFAULT_CENTER);
//! let result = evaluate(&places, &filter, &context, None);
//! assert_eq!(result.len(), 3);
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod filter;

pub use context::SpatialContext;
pub use engine::{PlaceMatch, evaluate};
pub use error::QueryError;
pub use filter::{DEFAULT_RADIUS_M, PlaceFilter, PlaceFilterBuilder, SearchMode};
