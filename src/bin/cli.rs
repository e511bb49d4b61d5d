//! DexKV CLI
//!
//! Command-line catalog explorer: loads a CSV catalog into the chosen
//! backend and runs one query against it. The driver owns the store;
//! nothing in the process is global.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dexkv::store::{InsertionStore, OrderedStore};
use dexkv::{
    create_store, load_csv_file, BackendKind, Config, DexError, Pokemon, PokemonStore, Result,
    TimedStore,
};
use tracing_subscriber::{fmt, EnvFilter};

/// DexKV catalog explorer
#[derive(Parser, Debug)]
#[command(name = "dexkv")]
#[command(about = "In-memory Pokémon catalog with pluggable map backends")]
#[command(version)]
struct Args {
    /// Backend kind: hash, ordered, insertion (or 1/2/3)
    #[arg(short, long, default_value = "hash")]
    backend: BackendKind,

    /// CSV catalog file
    #[arg(short, long, default_value = "data/pokemon.csv")]
    data: PathBuf,

    /// Time every store operation and report counters
    #[arg(long)]
    timed: bool,

    /// Render results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up one entry by exact name
    Get {
        /// The name to look up (case-sensitive)
        name: String,
    },

    /// Check whether a name is in the catalog
    Exists {
        /// The name to check
        name: String,
    },

    /// List every entry in the backend's iteration order
    List,

    /// List every entry sorted by primary type, then name
    Sorted,

    /// Find entries whose ability text contains a substring
    Search {
        /// Case-insensitive substring to match anywhere in the text
        ability: String,
    },

    /// List entries with names in a closed range (ordered backend only)
    Range {
        /// Inclusive lower name bound
        from: String,

        /// Inclusive upper name bound
        to: String,
    },

    /// Re-sort the catalog by dex number (insertion backend only)
    Reorder,

    /// Show backend and catalog information
    Info,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,dexkv=debug"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::builder()
        .backend(args.backend)
        .data_file(&args.data)
        .timed(args.timed)
        .build();

    match &args.command {
        // Backend-specific extensions need the concrete store types
        Commands::Range { from, to } => run_range(&config, from, to, args.json),
        Commands::Reorder => run_reorder(&config, args.json),

        // Everything else goes through the shared contract
        command => {
            if config.timed {
                let mut store = TimedStore::new(create_store(config.backend));
                load_csv_file(&config.data_file, &mut store)?;
                run_query(&store, config.backend, command, args.json)?;

                tracing::info!(
                    ops = store.op_count(),
                    last_op_nanos = store.last_op_nanos(),
                    "timing"
                );
                Ok(())
            } else {
                let mut store = create_store(config.backend);
                load_csv_file(&config.data_file, store.as_mut())?;
                run_query(store.as_ref(), config.backend, command, args.json)
            }
        }
    }
}

/// Run one shared-contract query and print the result.
fn run_query(
    store: &dyn PokemonStore,
    kind: BackendKind,
    command: &Commands,
    json: bool,
) -> Result<()> {
    match command {
        Commands::Get { name } => match store.get(name) {
            Some(pokemon) => print_record(pokemon, json)?,
            None => println!("no entry for {name:?}"),
        },

        Commands::Exists { name } => println!("{}", store.exists(name)),

        Commands::List => print_records(&store.all(), json)?,

        Commands::Sorted => print_records(&store.sorted_by_type(), json)?,

        Commands::Search { ability } => {
            let matches = store.search_by_ability(ability);
            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else {
                // Name order for readable output; the map itself is unordered
                let mut found: Vec<&Pokemon> = matches.values().copied().collect();
                found.sort_by(|a, b| a.name.cmp(&b.name));
                print_records(&found, false)?;
                println!("{} match(es)", found.len());
            }
        }

        Commands::Info => {
            println!("dexkv {}", dexkv::VERSION);
            println!("backend: {} ({})", store.backend_name(), kind.description());
            println!("entries: {}", store.len());
        }

        // Handled before dispatch
        Commands::Range { .. } | Commands::Reorder => unreachable!(),
    }

    Ok(())
}

/// Range query against the ordered backend.
fn run_range(config: &Config, from: &str, to: &str, json: bool) -> Result<()> {
    if config.backend != BackendKind::Ordered {
        return Err(DexError::Unsupported(format!(
            "name range queries require the ordered backend, not {}",
            config.backend
        )));
    }

    let mut store = OrderedStore::new();
    load_csv_file(&config.data_file, &mut store)?;

    print_records(&store.range_by_name(from, to), json)
}

/// Dex-number reorder on the insertion backend, then list.
fn run_reorder(config: &Config, json: bool) -> Result<()> {
    if config.backend != BackendKind::Insertion {
        return Err(DexError::Unsupported(format!(
            "reordering requires the insertion backend, not {}",
            config.backend
        )));
    }

    let mut store = InsertionStore::new();
    load_csv_file(&config.data_file, &mut store)?;
    store.reorder_by_dex_number();

    print_records(&store.all(), json)
}

fn print_record(pokemon: &Pokemon, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(pokemon)?);
    } else {
        println!("{pokemon}");
    }
    Ok(())
}

fn print_records(records: &[&Pokemon], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
    } else {
        for pokemon in records {
            println!("{pokemon}");
        }
    }
    Ok(())
}
