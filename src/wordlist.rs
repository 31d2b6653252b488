// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word-list providers.
//!
//! The validator never touches the filesystem. It asks a [`WordSource`] for a
//! list by name and gets back words or [`WordListError`]. "Not found" and
//! "empty" are different answers: an empty list is a valid list that bans nothing.
//!
//! List files are parsed as whitespace-separated tokens, so blank lines and
//! trailing spaces never produce an empty banned word (which would match every code).

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::WordListError;

/// Name of the built-in list.
pub const DEFAULT_LIST: &str = "blacklist.txt";

const EMBEDDED_BLACKLIST: &str = include_str!("../data/blacklist.txt");

/// Anything that can produce a word list by name.
pub trait WordSource {
    fn load(&self, name: &str) -> Result<Vec<String>, WordListError>;
}

impl<S: WordSource + ?Sized> WordSource for &S {
    fn load(&self, name: &str) -> Result<Vec<String>, WordListError> {
        (**self).load(name)
    }
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn load(&self, name: &str) -> Result<Vec<String>, WordListError> {
        (**self).load(name)
    }
}

/// Split list text into words.
pub fn parse_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

// =============================================================================
// PROVIDERS
// =============================================================================

/// Lists stored as files under a root directory: `name` resolves to `root/name`.
#[derive(Debug, Clone)]
pub struct DirWordSource {
    root: PathBuf,
}

impl DirWordSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl WordSource for DirWordSource {
    fn load(&self, name: &str) -> Result<Vec<String>, WordListError> {
        let path = self.root.join(name);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(parse_words(&text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(WordListError::NotFound {
                name: name.to_string(),
            }),
            Err(source) => Err(WordListError::Io {
                name: name.to_string(),
                source,
            }),
        }
    }
}

/// The default list compiled into the binary. Only [`DEFAULT_LIST`] exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWordSource;

impl WordSource for EmbeddedWordSource {
    fn load(&self, name: &str) -> Result<Vec<String>, WordListError> {
        if name == DEFAULT_LIST {
            Ok(parse_words(EMBEDDED_BLACKLIST))
        } else {
            Err(WordListError::NotFound {
                name: name.to_string(),
            })
        }
    }
}

/// Named lists held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryWordSource {
    lists: HashMap<String, Vec<String>>,
}

impl MemoryWordSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a list.
    pub fn with_list<I, W>(mut self, name: &str, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        self.lists
            .insert(name.to_string(), words.into_iter().map(Into::into).collect());
        self
    }
}

impl WordSource for MemoryWordSource {
    fn load(&self, name: &str) -> Result<Vec<String>, WordListError> {
        self.lists
            .get(name)
            .cloned()
            .ok_or_else(|| WordListError::NotFound {
                name: name.to_string(),
            })
    }
}
