// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Random code generation with rejection.
//!
//! Each code is drawn uniformly (with replacement) from the character pool and
//! handed to the [`Validator`]. Rejected codes are redrawn until one passes or
//! [`MAX_ATTEMPTS`] draws have been spent on it.
//!
//! ```text
//!            ┌──────────┐  code   ┌────────────┐  valid   ┌──────────┐
//!   start ──▶│ Drawing  │────────▶│ Validating │─────────▶│ Accepted │
//!            └──────────┘         └────────────┘          └──────────┘
//!                 ▲    rejected,        │ rejected,
//!                 └── attempts < max ───┤ attempts == max
//!                                       ▼
//!                                 ┌───────────┐
//!                                 │ Exhausted │
//!                                 └───────────┘
//! ```
//!
//! A batch is all-or-nothing. The first exhausted code aborts the batch and the
//! codes already accepted are dropped.

use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, trace};

use crate::error::{GenerateError, PoolError};
use crate::types::{CharacterPool, Code, GenerationRequest, CODE_LENGTH};
use crate::validator::Validator;

/// Draws allowed per code before giving up.
pub const MAX_ATTEMPTS: u32 = 1000;

/// Upper bound on the up-front reservation for a batch. Larger batches grow as codes arrive.
const MAX_RESERVE: usize = 1024;

/// Source of uniform indices.
///
/// Every [`rand::Rng`] is one. Tests substitute a scripted sequence.
pub trait RandomSource {
    /// Uniform index in `0..upper`. `upper` is never zero.
    fn pick(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn pick(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

/// Per-code draw state.
enum Draw {
    Drawing,
    Validating(Code),
    Accepted(Code),
    Exhausted,
}

/// Produces batches of validated codes.
#[derive(Debug)]
pub struct Generator<R = ThreadRng> {
    pool: CharacterPool,
    validator: Validator,
    rng: R,
}

impl Generator<ThreadRng> {
    /// Generator over the default pool using the thread-local RNG.
    pub fn new(validator: Validator) -> Self {
        Self::with_rng(validator, rand::thread_rng())
    }
}

impl<R: RandomSource> Generator<R> {
    pub fn with_rng(validator: Validator, rng: R) -> Self {
        Self {
            pool: CharacterPool::default(),
            validator,
            rng,
        }
    }

    /// Replace the pool wholesale.
    pub fn with_pool(mut self, pool: CharacterPool) -> Self {
        self.pool = pool;
        self
    }

    /// Replace the pool with the characters of `chars`.
    ///
    /// On error the current pool is left untouched.
    pub fn set_allowed_characters(&mut self, chars: &str) -> Result<(), PoolError> {
        self.pool = CharacterPool::new(chars)?;
        Ok(())
    }

    pub fn pool(&self) -> &CharacterPool {
        &self.pool
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Draw one unvalidated code.
    pub fn generate_one(&mut self) -> Code {
        let len = self.pool.len();
        let mut drawn = Vec::with_capacity(CODE_LENGTH);
        for _ in 0..CODE_LENGTH {
            drawn.push(self.pool.chars()[self.rng.pick(len)]);
        }
        Code::from_chars(drawn)
    }

    /// Draw until a code passes validation or the attempt budget runs out.
    pub fn generate_validated(&mut self) -> Result<Code, GenerateError> {
        let mut attempts = 0u32;
        let mut state = Draw::Drawing;
        loop {
            state = match state {
                Draw::Drawing => Draw::Validating(self.generate_one()),
                Draw::Validating(code) => {
                    attempts += 1;
                    if self.validator.validate(code.as_str()) {
                        Draw::Accepted(code)
                    } else if attempts >= MAX_ATTEMPTS {
                        Draw::Exhausted
                    } else {
                        trace!(code = %code, attempts, "Rejected code");
                        Draw::Drawing
                    }
                }
                Draw::Accepted(code) => return Ok(code),
                Draw::Exhausted => return Err(GenerateError::AttemptsExhausted { attempts }),
            };
        }
    }

    /// Generate `count` codes (at least one), in order.
    ///
    /// Fails as a whole if any single code exhausts its attempts.
    pub fn generate(&mut self, count: usize) -> Result<Vec<Code>, GenerateError> {
        self.generate_request(GenerationRequest::from(count))
    }

    pub fn generate_request(
        &mut self,
        request: GenerationRequest,
    ) -> Result<Vec<Code>, GenerateError> {
        let count = request.count();
        let mut codes = Vec::with_capacity(count.min(MAX_RESERVE));
        for index in 0..count {
            match self.generate_validated() {
                Ok(code) => codes.push(code),
                Err(e) => {
                    debug!(
                        index,
                        requested = count,
                        banned_words = self.validator.len(),
                        "{}",
                        e
                    );
                    return Err(e);
                }
            }
        }
        Ok(codes)
    }
}
