//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs against the shared [`Context`].

pub mod completions;
pub mod config;
pub mod favorites;
pub mod import;
pub mod location;
pub mod search;
pub mod show;

pub use completions::execute as completions;
pub use config::execute as config;
pub use import::execute as import;
pub use location::execute as location;
pub use search::execute as search;
pub use show::execute as show;

use crate::cli::DataArgs;
use crate::config::AppConfig;
use crate::ingest::{self, RegionCentroidGeocoder};
use crate::place::seed::seed_places;
use crate::repository::PlaceRepository;
use crate::store::KeyValueStore;
use crate::PlaceError;
use colored::Colorize;

type Result<T> = std::result::Result<T, PlaceError>;

/// Everything a command needs besides its own arguments
pub struct Context<'a> {
    pub config: &'a AppConfig,
    pub store: &'a dyn KeyValueStore,
    pub quiet: bool,
}

/// Build the place list for one invocation: seeds, then each import in order
///
/// Later sources never replace ids already loaded; rows whose id is taken are
/// counted as duplicates in the warning.
///
/// # Errors
/// Returns `PlaceError` if the seed data is invalid or an import fails as a
/// whole.
pub fn load_repository(data: &DataArgs, quiet: bool) -> Result<PlaceRepository> {
    let mut repository = if data.no_seed {
        PlaceRepository::new()
    } else {
        PlaceRepository::with_places(seed_places()?)
    };

    for spec in &data.imports {
        let report = ingest::ingest_file(
            &spec.path,
            spec.category,
            &spec.options(),
            &RegionCentroidGeocoder,
        )?;
        let skipped = report.skipped.len();
        let built = report.places.len();
        let added = repository.add_places(report.places);
        let duplicates = built - added;
        if duplicates > 0 {
            tracing::warn!(
                path = %spec.path.display(),
                duplicates,
                "Imported ids already loaded"
            );
        }
        if !quiet && (skipped > 0 || duplicates > 0) {
            eprintln!(
                "{} {}: {added} place(s) loaded, {skipped} row(s) skipped, {duplicates} duplicate id(s) dropped",
                "warning:".yellow().bold(),
                spec.path.display()
            );
        }
    }

    Ok(repository)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ImportSpec;
    use crate::place::Category;
    use crate::testing::write_fixture;

    #[test]
    fn test_seed_only() {
        let repo = load_repository(&DataArgs::default(), true).unwrap();
        assert_eq!(repo.len(), 7);
    }

    #[test]
    fn test_imports_appended_after_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            dir.path(),
            "plants.csv",
            "업체명,주소\n군포 레미콘,경기도 군포시\n,빈 이름\n",
        );
        let data = DataArgs {
            imports: vec![ImportSpec {
                category: Category::ReadyMixPlant,
                prefix: None,
                path,
            }],
            no_seed: false,
        };
        let repo = load_repository(&data, true).unwrap();
        assert_eq!(repo.len(), 8);
        assert_eq!(repo.list()[7].id(), "remicon-plants-0");
    }

    #[test]
    fn test_same_category_sheets_keep_distinct_ids() {
        let dir = tempfile::tempdir().unwrap();
        let north = write_fixture(dir.path(), "north.csv", "업체명,주소
A1,경기 파주시
A2,경기 연천군
");
        let south = write_fixture(dir.path(), "south.csv", "업체명,주소
B1,전남 목포시
B2,전남 여수시
");
        let spec = |path| ImportSpec {
            category: Category::ReadyMixPlant,
            prefix: None,
            path,
        };
        let data = DataArgs {
            imports: vec![spec(north), spec(south)],
            no_seed: true,
        };

        let repo = load_repository(&data, true).unwrap();
        let names: Vec<_> = repo.list().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["A1", "A2", "B1", "B2"]);
        assert_eq!(repo.list()[2].id(), "remicon-south-0");
    }

    #[test]
    fn test_explicit_prefix_collision_keeps_first_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_fixture(dir.path(), "a.csv", "업체명,주소
A1,경기 파주시
");
        let second = write_fixture(dir.path(), "b.csv", "업체명,주소
B1,전남 목포시
");
        let spec = |path| ImportSpec {
            category: Category::ReadyMixPlant,
            prefix: Some("plant".into()),
            path,
        };
        let data = DataArgs {
            imports: vec![spec(first), spec(second)],
            no_seed: true,
        };

        let repo = load_repository(&data, true).unwrap();
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get("plant-0").unwrap().name(), "A1");
    }

    #[test]
    fn test_no_seed() {
        let data = DataArgs {
            imports: Vec::new(),
            no_seed: true,
        };
        assert!(load_repository(&data, true).unwrap().is_empty());
    }

    #[test]
    fn test_failed_import_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let data = DataArgs {
            imports: vec![ImportSpec {
                category: Category::ReadyMixPlant,
                prefix: None,
                path: dir.path().join("missing.csv"),
            }],
            no_seed: false,
        };
        assert!(matches!(
            load_repository(&data, true),
            Err(PlaceError::Ingest(_))
        ));
    }
}
