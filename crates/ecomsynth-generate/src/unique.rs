use std::collections::HashSet;

use crate::errors::GenerationError;

/// Attempts allowed per value before a uniqueness constraint gives up.
pub const MAX_UNIQUE_ATTEMPTS: u32 = 1000;

/// Tracks values already issued for one uniqueness constraint.
///
/// Owned by a single generation step and dropped with it.
#[derive(Debug)]
pub struct UniqueValues {
    constraint: &'static str,
    max_attempts: u32,
    seen: HashSet<String>,
}

impl UniqueValues {
    pub fn new(constraint: &'static str, max_attempts: u32) -> Self {
        Self {
            constraint,
            max_attempts,
            seen: HashSet::new(),
        }
    }

    /// Draw candidates from `next` until one has not been issued before.
    pub fn draw<F>(&mut self, mut next: F) -> Result<String, GenerationError>
    where
        F: FnMut() -> String,
    {
        for _ in 0..self.max_attempts {
            let candidate = next();
            if !self.seen.contains(&candidate) {
                self.seen.insert(candidate.clone());
                return Ok(candidate);
            }
        }
        Err(GenerationError::UniqueExhausted {
            constraint: self.constraint.to_string(),
            attempts: self.max_attempts,
        })
    }
}
