// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for banned-word matching.
//!
//! Compares the validator against a plain two-pointer subsequence check on
//! arbitrary words and codes. A disagreement means either a banned word slips
//! through or a clean code gets thrown away.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use safecode::{SubsequenceMatcher, Validator};

/// Fuzz input for subsequence matching
#[derive(Debug, Arbitrary)]
struct MatchInput {
    /// Banned words (capped to keep runs fast)
    words: Vec<String>,
    /// Candidate code
    code: String,
}

/// Reference check over uppercased chars.
fn reference_contains(word: &str, code: &str) -> bool {
    let word: Vec<char> = word.to_uppercase().chars().collect();
    let mut i = 0;
    for c in code.to_uppercase().chars() {
        if i < word.len() && word[i] == c {
            i += 1;
        }
    }
    i == word.len()
}

fuzz_target!(|input: MatchInput| {
    let words: Vec<&str> = input
        .words
        .iter()
        .map(String::as_str)
        .filter(|w| !w.is_empty())
        .take(16)
        .collect();
    let code: String = input.code.chars().take(32).collect();

    let validator = Validator::from_words(&words);
    let expected = !words.iter().any(|w| reference_contains(w, &code));
    assert_eq!(validator.validate(&code), expected, "words={:?} code={:?}", words, code);

    for word in &words {
        let matcher = SubsequenceMatcher::new(word);
        assert_eq!(
            matcher.matches(&code.to_uppercase()),
            reference_contains(word, &code),
            "word={:?} code={:?}",
            word,
            code
        );
    }
});
