//! Short random codes that never spell a banned word.
//!
//! Codes are six characters drawn from a pool of unambiguous letters and digits.
//! A code is rejected if any banned word appears in it as a subsequence, i.e. its
//! letters show up in order with anything in between. Rejected codes are redrawn,
//! up to a fixed number of attempts per code.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ wordlist.rs  │────▶│ validator.rs │────▶│ generator.rs │
//! │ (WordSource, │     │ (Validator,  │     │ (Generator,  │
//! │  providers)  │     │  fail-open)  │     │ RandomSource)│
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │                    │
//!                             ▼                    ▼
//!                      ┌──────────────┐     ┌──────────────┐
//!                      │  matcher.rs  │     │   types.rs   │
//!                      │ (subsequence)│     │ (Code, pool) │
//!                      └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use safecode::{Generator, Validator};
//!
//! let mut generator = Generator::new(Validator::from_words(["rats", "cheese"]));
//! let codes = generator.generate(4).unwrap();
//! assert_eq!(codes.len(), 4);
//! assert!(codes.iter().all(|c| generator.validator().validate(c.as_str())));
//! ```

pub mod config;
pub mod error;
mod generator;
mod matcher;
pub mod testing;
mod types;
mod validator;
pub mod wordlist;

// Re-exports for public API
pub use config::{Config, WordListLocation};
pub use error::{GenerateError, PoolError, WordListError};
pub use generator::{Generator, RandomSource, MAX_ATTEMPTS};
pub use matcher::{is_subsequence, SubsequenceMatcher};
pub use types::{
    CharacterPool, Code, GenerationRequest, CODE_LENGTH, DEFAULT_CHARACTERS, DEFAULT_COUNT,
};
pub use validator::Validator;
pub use wordlist::{DirWordSource, EmbeddedWordSource, MemoryWordSource, WordSource};
