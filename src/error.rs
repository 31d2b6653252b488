// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only two things can go wrong while producing codes: a word list cannot be
//! read, or the validator rejects every draw for one code. The first is
//! recovered inside [`Validator`](crate::Validator) (fail-open); the second
//! aborts the whole batch. [`PoolError`] is a configuration-time error raised
//! before any generation starts.

use thiserror::Error;

/// A word list could not be produced by its provider.
///
/// Distinct from an empty list: an empty list loads fine and bans nothing.
#[derive(Debug, Error)]
pub enum WordListError {
    /// No list exists under this name.
    #[error("word list `{name}` not found")]
    NotFound { name: String },

    /// The list exists but reading it failed.
    #[error("failed to read word list `{name}`: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl WordListError {
    /// Name of the list that could not be produced.
    pub fn name(&self) -> &str {
        match self {
            Self::NotFound { name } | Self::Io { name, .. } => name,
        }
    }
}

/// Generation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Every draw for a single code was rejected.
    #[error(
        "no valid code could be produced after {attempts} attempts; \
         the forbidden word list is most likely too restrictive"
    )]
    AttemptsExhausted { attempts: u32 },
}

/// Invalid character pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("character pool must contain at least one character")]
    Empty,
}
