//! Spreadsheet ingestion
//!
//! Turns an exported sheet (CSV, first row as header) into validated
//! [`Place`]s of one category. Rows that cannot be used are skipped and
//! reported; only problems with the sheet as a whole fail the batch, so a
//! failed ingest never leaves partial data behind.
//!
//! # Examples
//!
//! ```
//! use placefinder::ingest::{ingest_csv, IngestOptions, RegionCentroidGeocoder};
//! use placefinder::place::Category;
//!
//! let sheet = "업체명,주소,전화번호\n군포 레미콘,경기도 군포시 번영로,0311234567\n";
//! let report = ingest_csv(
//!     sheet.as_bytes(),
//!     Category::ReadyMixPlant,
//!     &IngestOptions::default(),
//!     &RegionCentroidGeocoder,
//! )
//! .unwrap();
//!
//! assert_eq!(report.places[0].id(), "remicon-0");
//! assert_eq!(report.places[0].tel(), Some("031-123-4567"));
//! ```

pub mod error;
mod fields;
pub mod geocode;
pub mod phone;

pub use error::IngestError;
pub use geocode::{GeocodeError, Geocoder, RegionCentroidGeocoder};
pub use phone::format_phone;

use crate::place::{Category, Place, PlaceRecord, PlaceValidationError};
use crate::region;
use fields::ColumnMap;
use geocode::BatchGeocoder;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

/// Upper bound on distinct addresses remembered within one batch
const GEOCODE_CACHE_CAPACITY: u64 = 10_000;

/// Per-batch ingestion settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOptions {
    /// Id prefix; defaults to the category slug
    pub id_prefix: Option<String>,
    /// Header holding the aggregate type, replacing the built-in synonyms
    pub aggregate_type_field: Option<String>,
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            id_prefix: None,
            aggregate_type_field: None,
            delimiter: b',',
        }
    }
}

/// Why a single row was left out
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// A required cell is blank
    MissingField(&'static str),
    /// The address could not be located
    Geocode(GeocodeError),
    /// The assembled record failed validation
    Invalid(PlaceValidationError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing {field}"),
            Self::Geocode(e) => write!(f, "{e}"),
            Self::Invalid(e) => write!(f, "{e}"),
        }
    }
}

/// A skipped data row, indexed from zero after the header
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub index: usize,
    pub reason: SkipReason,
}

/// Outcome of one batch
#[derive(Debug, Default)]
pub struct IngestReport {
    pub places: Vec<Place>,
    pub skipped: Vec<SkippedRow>,
    /// Set when the batch stopped early on request
    pub cancelled: bool,
}

impl IngestReport {
    /// Number of data rows examined
    #[must_use]
    pub fn rows_seen(&self) -> usize {
        self.places.len() + self.skipped.len()
    }
}

/// Ingest a CSV sheet
///
/// # Errors
///
/// Returns `IngestError` if the sheet is unreadable, has no header or data
/// rows, or lacks a name or address column.
pub fn ingest_csv<R, G>(
    reader: R,
    category: Category,
    options: &IngestOptions,
    geocoder: &G,
) -> Result<IngestReport, IngestError>
where
    R: Read,
    G: Geocoder + ?Sized,
{
    ingest_csv_cancellable(reader, category, options, geocoder, &AtomicBool::new(false))
}

/// Ingest a CSV file from disk
///
/// # Errors
///
/// Returns `IngestError::Io` if the file cannot be opened, otherwise as
/// [`ingest_csv`].
pub fn ingest_file<G>(
    path: &Path,
    category: Category,
    options: &IngestOptions,
    geocoder: &G,
) -> Result<IngestReport, IngestError>
where
    G: Geocoder + ?Sized,
{
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), category = %category, "Ingesting sheet");
    ingest_csv(file, category, options, geocoder)
}

/// Ingest a CSV sheet, checking `cancel` before each row
///
/// Rows processed before cancellation are kept in the report.
///
/// # Errors
///
/// As [`ingest_csv`].
pub fn ingest_csv_cancellable<R, G>(
    reader: R,
    category: Category,
    options: &IngestOptions,
    geocoder: &G,
    cancel: &AtomicBool,
) -> Result<IngestReport, IngestError>
where
    R: Read,
    G: Geocoder + ?Sized,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(IngestError::MissingHeader);
    }
    let columns = ColumnMap::from_headers(&headers, options.aggregate_type_field.as_deref())?;

    let prefix = options
        .id_prefix
        .as_deref()
        .unwrap_or(category.slug());
    let geocoder = BatchGeocoder::new(geocoder, GEOCODE_CACHE_CAPACITY);
    let mut report = IngestReport::default();
    let mut index = 0;

    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        if cancel.load(Ordering::Relaxed) {
            report.cancelled = true;
            break;
        }

        match build_row(&record, &columns, category, &format!("{prefix}-{index}"), &geocoder) {
            Ok(place) => report.places.push(place),
            Err(reason) => {
                tracing::warn!(row = index, %reason, "Skipping row");
                report.skipped.push(SkippedRow { index, reason });
            }
        }
        index += 1;
    }

    if index == 0 && !report.cancelled {
        return Err(IngestError::NoRows);
    }

    tracing::info!(
        category = %category,
        imported = report.places.len(),
        skipped = report.skipped.len(),
        cancelled = report.cancelled,
        "Ingestion finished"
    );
    Ok(report)
}

fn build_row<G: Geocoder + ?Sized>(
    record: &csv::StringRecord,
    columns: &ColumnMap,
    category: Category,
    id: &str,
    geocoder: &BatchGeocoder<'_, G>,
) -> Result<Place, SkipReason> {
    let cell = |col: Option<usize>| {
        col.and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    };

    let name = cell(Some(columns.name)).ok_or(SkipReason::MissingField("name"))?;
    let address = cell(Some(columns.address)).ok_or(SkipReason::MissingField("address"))?;
    let coord = geocoder.geocode(address).map_err(SkipReason::Geocode)?;

    let mut place = PlaceRecord::new(id, name, address, category, coord)
        .region(region::resolve(address));
    place.representative = cell(columns.representative).map(String::from);
    place.tel = cell(columns.tel).map(format_phone);
    if category == Category::AggregateProducer {
        place.aggregate_type = cell(columns.aggregate_type).map(String::from);
    }
    place.build().map_err(SkipReason::Invalid)
}
