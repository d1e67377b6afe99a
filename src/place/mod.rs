//! Place data model
//!
//! - [`Place`]: validated, immutable business entry
//! - [`PlaceRecord`]: raw input that validates into a `Place`
//! - [`Category`]: the three business categories
//! - [`seed`]: built-in sample directory
//! - [`links`]: directions and dial links

pub mod error;
pub mod links;
pub mod seed;
pub mod types;

pub use error::PlaceValidationError;
pub use types::{Category, Place, PlaceRecord};
