//! Placefinder - a directory of construction-resource businesses
//!
//! This library filters places (resource associations, ready-mix concrete
//! plants and aggregate producers) by region, category, keyword and
//! distance, keeps a persistent favorites list, and imports places from
//! spreadsheet exports.

use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod favorites;
pub mod geo;
pub mod ingest;
pub mod location;
pub mod output;
pub mod place;
pub mod query;
pub mod region;
pub mod repository;
pub mod selection;
pub mod store;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PlaceError {
    /// Persistence error
    #[error("Storage error: {0}")]
    Store(#[from] store::StoreError),
    /// Spreadsheet import error
    #[error("Import error: {0}")]
    Ingest(#[from] ingest::IngestError),
    /// Filter rejected by strict validation
    #[error("Invalid filter: {0}")]
    Query(#[from] query::QueryError),
    /// Place record failed validation
    #[error("Invalid place: {0}")]
    Place(#[from] place::PlaceValidationError),
    /// Coordinate failed validation
    #[error("Invalid coordinate: {0}")]
    Geo(#[from] geo::GeoError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// No place with the given id
    #[error("Place not found: {0}")]
    NotFound(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
