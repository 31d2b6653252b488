// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow between the generator and the validator.
//!
//! # Invariants
//!
//! - **CharacterPool**: at least one character, no duplicates, insertion order kept.
//!   Enforced at construction, so an empty pool never reaches the generator.
//!
//! - **Code**: exactly [`CODE_LENGTH`] characters, each drawn from the pool that was
//!   active when the code was produced. Only the generator constructs codes.
//!
//! - **GenerationRequest**: `count >= 1`. Anything smaller is clamped up.

use serde::Serialize;
use std::fmt;

use crate::error::PoolError;

/// Number of characters in every generated code.
pub const CODE_LENGTH: usize = 6;

/// Default pool: uppercase letters and digits minus the look-alikes `I`, `L`, `O`, `1`, `0`.
pub const DEFAULT_CHARACTERS: &str = "ABCDEFGHJKMNPQRSTUVWXYZ23456789";

/// Number of codes produced when the caller doesn't ask for a specific amount.
pub const DEFAULT_COUNT: usize = 4;

// =============================================================================
// CHARACTER POOL
// =============================================================================

/// Ordered set of characters a code may be drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    /// Build a pool from every distinct character of `chars`, first occurrence wins.
    pub fn new(chars: &str) -> Result<Self, PoolError> {
        let mut pool: Vec<char> = Vec::with_capacity(chars.len());
        for c in chars.chars() {
            if !pool.contains(&c) {
                pool.push(c);
            }
        }

        if pool.is_empty() {
            return Err(PoolError::Empty);
        }
        Ok(Self { chars: pool })
    }

    #[inline]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of distinct characters. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; present for API symmetry with collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl Default for CharacterPool {
    fn default() -> Self {
        Self {
            chars: DEFAULT_CHARACTERS.chars().collect(),
        }
    }
}

impl fmt::Display for CharacterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

// =============================================================================
// CODE
// =============================================================================

/// A generated code. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Code(String);

impl Code {
    pub(crate) fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Code(chars.into_iter().collect())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Code {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Code {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// GENERATION REQUEST
// =============================================================================

/// How many codes to produce. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    count: usize,
}

impl GenerationRequest {
    /// Clamp a caller-supplied count (possibly zero or negative) to `>= 1`.
    pub fn from_requested(requested: i64) -> Self {
        Self {
            count: usize::try_from(requested).unwrap_or(0).max(1),
        }
    }

    #[inline]
    pub fn count(self) -> usize {
        self.count
    }
}

impl From<usize> for GenerationRequest {
    fn from(count: usize) -> Self {
        Self {
            count: count.max(1),
        }
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
        }
    }
}
