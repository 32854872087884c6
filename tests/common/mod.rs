//! Shared helpers for integration tests
//!
//! Fixtures live under `tests/fixtures/` and are loaded from disk so the
//! tests exercise the same streaming path as the CLI.

#![allow(dead_code)]

use obograph::{GraphStore, Ontology};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Fragment of the generic GO slim
pub const GOSLIM: &str = "goslim_generic_fragment.obo";

/// Root directory of the checked-in fixtures
pub fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixture_root().join(name)
}

/// Open a fixture as a buffered line source
pub fn open_fixture(name: &str) -> BufReader<File> {
    let path = fixture_path(name);
    let file = File::open(&path).unwrap_or_else(|e| panic!("cannot open {}: {}", path.display(), e));
    BufReader::new(file)
}

/// Ingest a fixture into a fresh in-memory ontology
pub fn load_fixture(name: &str) -> Ontology {
    Ontology::from_reader(open_fixture(name)).expect("fixture should ingest")
}

/// Ingest a fixture into an ontology over the given store
pub fn load_fixture_into<S: GraphStore>(name: &str, store: S) -> Ontology<S> {
    let mut ontology = Ontology::with_store(store);
    ontology.load(open_fixture(name)).expect("fixture should ingest");
    ontology
}
