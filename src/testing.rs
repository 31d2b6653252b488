//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::collections::VecDeque;

use crate::generator::RandomSource;
use crate::types::CharacterPool;
use crate::validator::Validator;

/// Deterministic [`RandomSource`] that replays a fixed script of indices.
///
/// Each value is reduced modulo the requested bound. Once the script is spent
/// every draw returns 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, upper: usize) -> usize {
        self.script.pop_front().unwrap_or(0) % upper
    }
}

/// Validator banning every single character of `pool`, so no code drawn from it can pass.
pub fn ban_entire_pool(pool: &CharacterPool) -> Validator {
    Validator::from_words(pool.chars().iter().map(char::to_string))
}
