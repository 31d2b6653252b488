// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration.
//!
//! The only knobs are the character pool and where the banned words come from.
//! The binary fills this in from command-line flags and environment variables.

use std::path::{Path, PathBuf};

use crate::error::PoolError;
use crate::generator::Generator;
use crate::types::CharacterPool;
use crate::validator::Validator;
use crate::wordlist::{DirWordSource, EmbeddedWordSource, WordSource, DEFAULT_LIST};

/// Where the banned-word list is read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordListLocation {
    /// The list compiled into the binary.
    #[default]
    Embedded,
    /// A file on disk.
    File(PathBuf),
}

impl WordListLocation {
    /// Provider and list name for this location.
    ///
    /// A file path is split into its parent directory (the provider root) and its
    /// file name (the list name).
    pub fn source(&self) -> (Box<dyn WordSource>, String) {
        match self {
            Self::Embedded => (Box::new(EmbeddedWordSource), DEFAULT_LIST.to_string()),
            Self::File(path) => {
                let root = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or_else(|| Path::new("."));
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.to_string_lossy().into_owned());
                (Box::new(DirWordSource::new(root)), name)
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub pool: CharacterPool,
    pub word_list: WordListLocation,
}

impl Config {
    /// Build from optional overrides. `chars` replaces the default pool wholesale.
    pub fn new(chars: Option<&str>, word_list: Option<PathBuf>) -> Result<Self, PoolError> {
        let pool = match chars {
            Some(chars) => CharacterPool::new(chars)?,
            None => CharacterPool::default(),
        };
        let word_list = word_list.map_or(WordListLocation::Embedded, WordListLocation::File);
        Ok(Self { pool, word_list })
    }

    /// Load the configured list. Fails open, see [`Validator::load`].
    pub fn validator(&self) -> Validator {
        let (source, name) = self.word_list.source();
        Validator::load(&source, &name)
    }

    /// Generator over the configured pool and list.
    pub fn generator(&self) -> Generator {
        Generator::new(self.validator()).with_pool(self.pool.clone())
    }
}
