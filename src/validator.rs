// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Accept or reject candidate codes against a list of banned words.
//!
//! Loading is fail-open: if the word source cannot produce the list, the
//! validator logs a warning and bans nothing. A missing blacklist should not
//! stop codes from being issued.

use tracing::{debug, warn};

use crate::matcher::SubsequenceMatcher;
use crate::wordlist::{EmbeddedWordSource, WordSource, DEFAULT_LIST};

/// Compiled blacklist.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    matchers: Vec<SubsequenceMatcher>,
}

impl Validator {
    /// Load `name` from `source` and compile one matcher per word.
    ///
    /// Never fails. An unavailable list yields an empty validator.
    pub fn load<S: WordSource>(source: &S, name: &str) -> Self {
        match source.load(name) {
            Ok(words) => {
                let validator = Self::from_words(words);
                debug!(list = name, words = validator.len(), "Loaded banned words");
                validator
            }
            Err(e) => {
                warn!(list = name, error = %e, "Word list unavailable, no words will be banned");
                Self::default()
            }
        }
    }

    /// Validator over the built-in list.
    pub fn with_default_list() -> Self {
        Self::load(&EmbeddedWordSource, DEFAULT_LIST)
    }

    /// Compile words directly. Empty words are skipped.
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let matchers = words
            .into_iter()
            .filter(|w| !w.as_ref().is_empty())
            .map(|w| SubsequenceMatcher::new(w.as_ref()))
            .collect();
        Self { matchers }
    }

    /// True iff no banned word is a subsequence of `code` (case-insensitive).
    pub fn validate(&self, code: &str) -> bool {
        let candidate = code.to_uppercase();
        !self.matchers.iter().any(|m| m.matches(&candidate))
    }

    /// Banned words present in `code`, in list order.
    pub fn offending_words(&self, code: &str) -> Vec<&str> {
        let candidate = code.to_uppercase();
        self.matchers
            .iter()
            .filter(|m| m.matches(&candidate))
            .map(SubsequenceMatcher::word)
            .collect()
    }

    /// Number of compiled banned words.
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    pub fn matchers(&self) -> &[SubsequenceMatcher] {
        &self.matchers
    }
}
