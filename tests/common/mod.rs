//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use safecode::{CharacterPool, Generator, Validator};
use tempfile::TempDir;

// Re-export canonical test utilities from safecode::testing
pub use safecode::testing::{ban_entire_pool, ScriptedSource};

// ============================================================================
// WORD LIST FIXTURES
// ============================================================================

/// Name of the list written by [`word_list_dir`].
pub const LIST_NAME: &str = "blacklist.txt";

/// Temporary directory holding one word list named [`LIST_NAME`].
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn word_list_dir(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(LIST_NAME);
    fs::write(&path, contents).expect("write word list");
    (dir, path)
}

/// Word-list text banning every character of `pool`, one per line.
pub fn ban_everything(pool: &CharacterPool) -> String {
    pool.chars().iter().map(|c| format!("{}\n", c)).collect()
}

// ============================================================================
// GENERATORS
// ============================================================================

/// Deterministic generator over the default pool.
pub fn seeded_generator(validator: Validator, seed: u64) -> Generator<StdRng> {
    Generator::with_rng(validator, StdRng::seed_from_u64(seed))
}
