//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for placefinder using the `clap`
//! crate, plus the value parsers for coordinates, viewports and import specs.
//!
//! # Commands
//!
//! - **search**: Filter places by region, category, keyword and distance
//! - **show**: Display one place with directions and dial links
//! - **favorite** / **favorites**: Toggle and list bookmarked places
//! - **import**: Check a spreadsheet export before using it
//! - **location**: Show or set the current location
//! - **config**: Read and change settings
//! - **completions**: Generate shell completion scripts

use crate::geo::{Bounds, Coordinate};
use crate::ingest::IngestOptions;
use crate::place::Category;
use crate::region::RegionFilter;
use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};

/// A sheet to load before running a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub category: Category,
    /// Id prefix; defaults to [`default_prefix`]
    pub prefix: Option<String>,
    pub path: PathBuf,
}

impl ImportSpec {
    #[must_use]
    pub fn id_prefix(&self) -> String {
        self.prefix
            .clone()
            .unwrap_or_else(|| default_prefix(self.category, &self.path))
    }

    #[must_use]
    pub fn options(&self) -> IngestOptions {
        IngestOptions {
            id_prefix: Some(self.id_prefix()),
            ..IngestOptions::default()
        }
    }
}

/// Id prefix for a sheet loaded without one: `{category-slug}-{file-stem}`
///
/// Sheets of one category get distinct ids as long as their file names differ.
#[must_use]
pub fn default_prefix(category: Category, path: &Path) -> String {
    match path.file_stem().map(|stem| stem.to_string_lossy()) {
        Some(stem) if !stem.trim().is_empty() => format!("{}-{}", category.slug(), stem.trim()),
        _ => category.slug().to_string(),
    }
}

/// Parse `LAT,LNG`
///
/// # Errors
/// Returns a message if either part is missing, not a number, or out of range.
pub fn parse_coordinate(s: &str) -> Result<Coordinate, String> {
    let (lat, lng) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LNG, got '{s}'"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| format!("invalid latitude '{}': {e}", lat.trim()))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|e| format!("invalid longitude '{}': {e}", lng.trim()))?;
    Coordinate::checked(lat, lng).map_err(|e| e.to_string())
}

/// Parse `SW_LAT,SW_LNG,NE_LAT,NE_LNG`
///
/// Inverted boxes are accepted here; they match nothing unless `--strict`.
///
/// # Errors
/// Returns a message if there are not four numbers.
pub fn parse_bounds(s: &str) -> Result<Bounds, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid viewport '{s}': {e}"))?;
    match parts.as_slice() {
        &[sw_lat, sw_lng, ne_lat, ne_lng] => Ok(Bounds::new(
            Coordinate::new(sw_lat, sw_lng),
            Coordinate::new(ne_lat, ne_lng),
        )),
        _ => Err(format!(
            "expected SW_LAT,SW_LNG,NE_LAT,NE_LNG, got {} value(s)",
            parts.len()
        )),
    }
}

/// Parse `CATEGORY[:PREFIX]=PATH`
///
/// # Errors
/// Returns a message if the separator is missing, the category is unknown, or
/// the prefix or path is empty.
pub fn parse_import(s: &str) -> Result<ImportSpec, String> {
    let (head, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY[:PREFIX]=PATH, got '{s}'"))?;
    let (category, prefix) = match head.split_once(':') {
        Some((category, prefix)) if prefix.trim().is_empty() => {
            return Err(format!("empty id prefix for '{category}'"));
        }
        Some((category, prefix)) => (category, Some(prefix.trim().to_string())),
        None => (head, None),
    };
    let category = category.parse::<Category>().map_err(|e| e.to_string())?;
    if path.trim().is_empty() {
        return Err("import path is empty".into());
    }
    Ok(ImportSpec {
        category,
        prefix,
        path: PathBuf::from(path.trim()),
    })
}

/// Parse a single-byte field delimiter; `tab` and `\t` mean a tab
///
/// # Errors
/// Returns a message unless the value is exactly one ASCII character.
pub fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" => Ok(b'\t'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
    }
}

/// Where the place list comes from
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Load places from a CSV export first (repeatable), e.g. remicon=plants.csv
    /// or remicon:north=plants.csv to choose the id prefix
    #[arg(short = 'i', long = "import", value_name = "CATEGORY[:PREFIX]=PATH", value_parser = parse_import)]
    pub imports: Vec<ImportSpec>,

    /// Leave out the built-in sample places
    #[arg(long = "no-seed")]
    pub no_seed: bool,
}

/// Arguments for the search command
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Match against name, address and representative (case-insensitive)
    #[arg(value_name = "KEYWORD")]
    pub keyword: Option<String>,

    /// Restrict to one region (e.g. 서울, 경기, Busan); 전체 for all
    #[arg(short = 'r', long = "region", value_name = "REGION")]
    pub region: Option<RegionFilter>,

    /// Restrict to categories (repeatable: assoc, remicon, aggregate)
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    pub categories: Vec<Category>,

    /// Search radius in meters (overrides config)
    #[arg(long = "radius", value_name = "METERS", conflicts_with = "viewport")]
    pub radius: Option<f64>,

    /// Search inside a map viewport instead of a radius
    #[arg(
        long = "viewport",
        value_name = "SW_LAT,SW_LNG,NE_LAT,NE_LNG",
        value_parser = parse_bounds,
        allow_hyphen_values = true
    )]
    pub viewport: Option<Bounds>,

    /// Measure from this point instead of the current location
    #[arg(long = "near", value_name = "LAT,LNG", value_parser = parse_coordinate, allow_hyphen_values = true)]
    pub near: Option<Coordinate>,

    /// Only show favorites
    #[arg(short = 'f', long = "favorites")]
    pub favorites_only: bool,

    /// Show at most this many results
    #[arg(short = 'n', long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Fail on inconsistent filters instead of returning no results
    #[arg(long = "strict")]
    pub strict: bool,

    /// Print results as JSON
    #[arg(long = "json")]
    pub json: bool,

    #[command(flatten)]
    pub data: DataArgs,
}

/// Location subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum LocationCommands {
    /// Print the current location
    Show,

    /// Save a location to measure distances from
    Set {
        #[arg(value_name = "LAT,LNG", value_parser = parse_coordinate, allow_hyphen_values = true)]
        coord: Coordinate,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the whole configuration
    Show,

    /// Print the config file location
    Path,

    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., default_radius=10000)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., default_radius)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "placefinder")]
#[command(about = "Find construction-resource businesses nearby", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Database directory (overrides config)
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Search places by region, category, keyword and distance
    #[command(visible_alias = "s")]
    Search(SearchArgs),

    /// Show details and links for one place
    Show {
        #[arg(value_name = "ID")]
        id: String,

        /// Open web directions in the browser
        #[arg(short = 'o', long = "open")]
        open: bool,

        /// Print the place as JSON
        #[arg(long = "json")]
        json: bool,

        #[command(flatten)]
        data: DataArgs,
    },

    /// Toggle a place as favorite
    #[command(visible_alias = "fav")]
    Favorite {
        #[arg(value_name = "ID")]
        id: String,

        #[command(flatten)]
        data: DataArgs,
    },

    /// List favorite places
    Favorites {
        /// Print favorites as JSON
        #[arg(long = "json")]
        json: bool,

        #[command(flatten)]
        data: DataArgs,
    },

    /// Read a CSV export and report which rows would be imported
    Import {
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Category of every row in the sheet
        #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
        category: Category,

        /// Id prefix (defaults to CATEGORY-FILESTEM)
        #[arg(long = "prefix", value_name = "PREFIX")]
        prefix: Option<String>,

        /// Column holding the aggregate type
        #[arg(long = "aggregate-field", value_name = "HEADER")]
        aggregate_field: Option<String>,

        /// Field delimiter
        #[arg(short = 'd', long = "delimiter", default_value = ",", value_parser = parse_delimiter)]
        delimiter: u8,

        /// Print imported places as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Show or set the current location
    #[command(visible_alias = "loc")]
    Location {
        #[command(subcommand)]
        command: LocationCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(
            parse_coordinate("37.5665, 126.978").unwrap(),
            Coordinate::new(37.5665, 126.978)
        );
        assert!(parse_coordinate("37.5").is_err());
        assert!(parse_coordinate("abc,127").is_err());
        assert!(parse_coordinate("91,127").is_err());
    }

    #[test]
    fn test_parse_bounds() {
        let b = parse_bounds("37.4,126.9,37.6,127.1").unwrap();
        assert_eq!(b.sw, Coordinate::new(37.4, 126.9));
        assert_eq!(b.ne, Coordinate::new(37.6, 127.1));
        assert!(parse_bounds("37.4,126.9,37.6").is_err());
        // inverted boxes parse; the engine decides what they mean
        assert!(parse_bounds("37.6,127.1,37.4,126.9").is_ok());
    }

    #[test]
    fn test_parse_import() {
        let spec = parse_import("remicon=data/plants.csv").unwrap();
        assert_eq!(spec.category, Category::ReadyMixPlant);
        assert_eq!(spec.prefix, None);
        assert_eq!(spec.path, PathBuf::from("data/plants.csv"));
        assert_eq!(spec.id_prefix(), "remicon-plants");
        assert!(parse_import("plants.csv").is_err());
        assert!(parse_import("cement=plants.csv").is_err());
        assert!(parse_import("aggregate=").is_err());
    }

    #[test]
    fn test_parse_import_with_prefix() {
        let spec = parse_import("aggregate:quarry=sheets/q.csv").unwrap();
        assert_eq!(spec.category, Category::AggregateProducer);
        assert_eq!(spec.prefix.as_deref(), Some("quarry"));
        assert_eq!(spec.options().id_prefix.as_deref(), Some("quarry"));
        assert!(parse_import("aggregate:=q.csv").is_err());
        assert!(parse_import("gravel:quarry=q.csv").is_err());
    }

    #[test]
    fn test_default_prefix() {
        assert_eq!(
            default_prefix(Category::ReadyMixPlant, Path::new("a/north.csv")),
            "remicon-north"
        );
        assert_eq!(
            default_prefix(Category::ResourceAssociation, Path::new("/")),
            "assoc"
        );
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(";").unwrap(), b';');
        assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
        assert!(parse_delimiter(";;").is_err());
    }

    #[test]
    fn test_search_args() {
        let cli = Cli::try_parse_from([
            "placefinder",
            "search",
            "레미콘",
            "-r",
            "경기",
            "-c",
            "remicon",
            "-c",
            "aggregate",
            "--radius",
            "10000",
        ])
        .unwrap();
        let Commands::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.keyword.as_deref(), Some("레미콘"));
        assert_eq!(
            args.region,
            Some(RegionFilter::Only(crate::region::Region::Gyeonggi))
        );
        assert_eq!(
            args.categories,
            vec![Category::ReadyMixPlant, Category::AggregateProducer]
        );
        assert_eq!(args.radius, Some(10000.0));
    }

    #[test]
    fn test_radius_conflicts_with_viewport() {
        let result = Cli::try_parse_from([
            "placefinder",
            "search",
            "--radius",
            "100",
            "--viewport",
            "37.4,126.9,37.6,127.1",
        ]);
        assert!(result.is_err());
    }
}
