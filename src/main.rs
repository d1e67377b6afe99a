//! Placefinder CLI application entry point
//!
//! Finds construction-resource businesses (resource associations,
//! ready-mix concrete plants and aggregate producers) near a location.
//!
//! # Usage
//!
//! ```bash
//! # Places within 10 km of the current location
//! placefinder search --radius 10000
//!
//! # Ready-mix plants in Gyeonggi matching a keyword
//! placefinder search 레미콘 -r 경기 -c remicon
//!
//! # Include an exported sheet, then bookmark a place
//! placefinder search -i aggregate=producers.csv
//! placefinder favorite aggregate-producers-3
//!
//! # Details with directions, opened in the browser
//! placefinder show 2 --open
//! ```
//!
//! # Configuration
//!
//! Settings are stored in the user's config directory
//! (`~/.config/placefinder/config.toml` on Linux) and created on first run.

use placefinder::{
    PlaceError,
    cli::{Cli, Commands, default_prefix},
    commands::{self, Context},
    config::AppConfig,
    ingest::IngestOptions,
    store::{KeyValueStore, MemoryStore, SledStore},
};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, PlaceError>;

/// Install the log subscriber; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("placefinder={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Open the sled store, falling back to memory for this run
fn open_store(config: &AppConfig) -> Box<dyn KeyValueStore> {
    let opened = config
        .data_dir()
        .map_err(PlaceError::from)
        .and_then(|dir| SledStore::open(&dir).map_err(PlaceError::from));
    match opened {
        Ok(store) => Box::new(store),
        Err(error) => {
            tracing::warn!(%error, "Persistent storage unavailable, using memory");
            Box::new(MemoryStore::new())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    if let Commands::Completions { shell } = &cli.command {
        commands::completions(*shell, &mut std::io::stdout());
        return Ok(());
    }

    let mut config = AppConfig::load()?;
    let quiet = cli.quiet || config.quiet;

    match &cli.command {
        Commands::Config { command } => return commands::config(config, command, quiet),
        Commands::Import {
            path,
            category,
            prefix,
            aggregate_field,
            delimiter,
            json,
        } => {
            let options = IngestOptions {
                id_prefix: Some(
                    prefix
                        .clone()
                        .unwrap_or_else(|| default_prefix(*category, path)),
                ),
                aggregate_type_field: aggregate_field.clone(),
                delimiter: *delimiter,
            };
            return commands::import(path, *category, &options, *json, quiet);
        }
        _ => {}
    }

    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    let store = open_store(&config);
    let ctx = Context {
        config: &config,
        store: store.as_ref(),
        quiet,
    };

    match &cli.command {
        Commands::Search(args) => commands::search(&ctx, args),
        Commands::Show {
            id,
            open,
            json,
            data,
        } => commands::show(&ctx, id, *open, *json, data),
        Commands::Favorite { id, data } => commands::favorites::toggle(&ctx, id, data),
        Commands::Favorites { json, data } => commands::favorites::list(&ctx, *json, data),
        Commands::Location { command } => commands::location(&ctx, command),
        Commands::Completions { .. } | Commands::Config { .. } | Commands::Import { .. } => {
            unreachable!()
        }
    }
}
