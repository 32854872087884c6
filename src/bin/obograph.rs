//! obograph CLI: relatives of ontology terms as JSON.
//!
//! Usage:
//!   obograph --obo go.obo [--db go.db] [--children | --parents] [--expand] TERM...
//!   obograph --remote-obo URL [--predicate part_of] TERM...
//!   obograph --db go.db [--children] TERM...
//!   obograph --obo go.obo --relationships

use clap::{ArgGroup, Parser};
use indexmap::IndexMap;
use obograph::{Direction, GraphStore, OpenStore, Ontology, ParserOptions, SqliteStore, IS_A};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::warn;

#[derive(Parser)]
#[command(
    name = "obograph",
    version,
    about = "Returns relatives of a term from an ontology"
)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .multiple(true)
        .args(["obo", "remote_obo", "db"])
))]
struct Cli {
    /// A local .obo (v1.2) file to use
    #[arg(long, conflicts_with = "remote_obo")]
    obo: Option<PathBuf>,

    /// A remote .obo (v1.2) file to use
    #[arg(long)]
    remote_obo: Option<String>,

    /// Store the graph in this SQLite file instead of in memory
    #[arg(long)]
    db: Option<PathBuf>,

    /// Return the children of the specified term(s)
    #[arg(long, conflicts_with = "parents")]
    children: bool,

    /// Return the parents of the specified term(s) (default)
    #[arg(long)]
    parents: bool,

    /// Expand search up/down the graph
    #[arg(long)]
    expand: bool,

    /// Predicate to follow; `*` matches any
    #[arg(long, default_value = IS_A)]
    predicate: String,

    /// Print the predicates present in the graph instead of querying
    #[arg(long)]
    relationships: bool,

    /// Also keep stanzas that have no id
    #[arg(long)]
    lenient: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Term or terms to process
    #[arg(required_unless_present = "relationships")]
    terms: Vec<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Open the ingestion source, if one was given
fn open_source(cli: &Cli) -> Result<Option<Box<dyn BufRead>>, String> {
    if let Some(path) = &cli.obo {
        let file = File::open(path).map_err(|e| format!("cannot open '{}': {}", path.display(), e))?;
        return Ok(Some(Box::new(BufReader::new(file))));
    }

    if let Some(url) = &cli.remote_obo {
        let response = reqwest::blocking::get(url)
            .and_then(|r| r.error_for_status())
            .map_err(|e| format!("cannot fetch '{}': {}", url, e))?;
        return Ok(Some(Box::new(BufReader::new(response))));
    }

    Ok(None)
}

fn run<S: GraphStore>(
    cli: &Cli,
    mut ontology: Ontology<S>,
    source: Option<Box<dyn BufRead>>,
) -> Result<String, String> {
    match source {
        Some(reader) => {
            let options = ParserOptions { lenient: cli.lenient };
            ontology
                .load_with(reader, options)
                .map_err(|e| format!("Failed to load ontology: {}", e))?;
        }
        None => {
            if ontology.store().triple_count().map_err(|e| e.to_string())? == 0 {
                warn!("database holds no triples; was an ontology ever loaded into it?");
            }
        }
    }

    if cli.relationships {
        let predicates = ontology.relationships().map_err(|e| e.to_string())?;
        return serde_json::to_string(&predicates).map_err(|e| e.to_string());
    }

    let direction = if cli.children {
        Direction::Descend
    } else {
        Direction::Ascend
    };

    let mut results: IndexMap<String, Vec<String>> = IndexMap::new();
    for term in &cli.terms {
        let related = ontology
            .query(term, cli.predicate.as_str(), direction, cli.expand)
            .map_err(|e| e.to_string())?;
        results.insert(term.clone(), related);
    }
    serde_json::to_string(&results).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = match open_source(&cli) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let output = match &cli.db {
        Some(path) => SqliteStore::open(path)
            .map_err(|e| format!("Failed to open database: {}", e))
            .and_then(|store| run(&cli, Ontology::with_store(store), source)),
        None => run(&cli, Ontology::new(), source),
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
