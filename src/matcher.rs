// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subsequence containment for banned words.
//!
//! A banned word is present in a code when its letters appear in the code in
//! order, not necessarily next to each other: `CAT` is in `XCYAZT`. This is
//! stricter than substring matching on purpose. Codes are read by people, and
//! people read `C4A7T` as a word with noise in it.
//!
//! The check is a single greedy left-to-right scan. Greedy is exact here: taking
//! the earliest occurrence of each needed letter never rules out a later match.

/// Is `needle` a subsequence of `haystack`?
///
/// The empty needle is a subsequence of everything.
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut wanted = needle.chars().peekable();
    for c in haystack.chars() {
        match wanted.peek() {
            Some(&w) if w == c => {
                wanted.next();
            }
            Some(_) => {}
            None => return true,
        }
    }
    wanted.peek().is_none()
}

/// Compiled matcher for one banned word.
///
/// Built once when the validator loads its list. The word is stored uppercased;
/// candidates passed to [`SubsequenceMatcher::matches`] must be uppercased too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsequenceMatcher {
    word: String,
    len: usize,
}

impl SubsequenceMatcher {
    pub fn new(word: &str) -> Self {
        let word = word.to_uppercase();
        let len = word.chars().count();
        Self { word, len }
    }

    /// The banned word, uppercased.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Does the word occur as a subsequence of `candidate`?
    ///
    /// Words longer than the candidate can never match, so they exit before the scan.
    #[inline]
    pub fn matches(&self, candidate: &str) -> bool {
        if self.len > candidate.chars().count() {
            return false;
        }
        is_subsequence(&self.word, candidate)
    }
}
