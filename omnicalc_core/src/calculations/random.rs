//! # Random Number Generation
//!
//! Draws `count` integers uniformly from `[min, max]` inclusive. With
//! duplicates disallowed the draw is without replacement via rejection
//! sampling, which requires `count <= max - min + 1`.
//!
//! The randomness source is injected so callers can pass a seeded rng in
//! tests and `thread_rng()` in production; no determinism is promised across
//! runs.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::{CalcError, CalcResult};

/// Number of generation batches retained in history.
const HISTORY_CAPACITY: usize = 10;

/// Input parameters for a random number batch.
///
/// ## JSON Example
///
/// ```json
/// { "min": 1, "max": 100, "count": 5, "allow_duplicates": false }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomNumbersInput {
    /// Smallest value that may be drawn (inclusive)
    pub min: i64,

    /// Largest value that may be drawn (inclusive)
    pub max: i64,

    /// How many numbers to draw
    pub count: usize,

    /// Whether the same value may appear more than once
    pub allow_duplicates: bool,
}

impl RandomNumbersInput {
    /// Size of the inclusive range. Widened to u128 so extreme bounds
    /// (e.g. the full i64 span) cannot overflow the subtraction.
    pub fn range_size(&self) -> u128 {
        (self.max as i128 - self.min as i128 + 1) as u128
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.min >= self.max {
            return Err(CalcError::invalid_input(
                "min",
                self.min.to_string(),
                "Minimum must be less than maximum",
            ));
        }
        if self.count == 0 {
            return Err(CalcError::invalid_input(
                "count",
                "0",
                "Count must be positive",
            ));
        }
        if !self.allow_duplicates && self.count as u128 > self.range_size() {
            return Err(CalcError::invalid_input(
                "count",
                self.count.to_string(),
                "Cannot draw more distinct values than the range holds",
            ));
        }
        Ok(())
    }
}

/// Generate a batch of random integers.
pub fn generate(input: &RandomNumbersInput, rng: &mut impl Rng) -> CalcResult<Vec<i64>> {
    input.validate()?;

    let mut numbers = Vec::with_capacity(input.count);

    if input.allow_duplicates {
        for _ in 0..input.count {
            numbers.push(rng.gen_range(input.min..=input.max));
        }
    } else {
        // Rejection sampling: redraw on collision. Validation guarantees the
        // range holds enough distinct values for this to terminate.
        let mut used = HashSet::with_capacity(input.count);
        while numbers.len() < input.count {
            let drawn = rng.gen_range(input.min..=input.max);
            if used.insert(drawn) {
                numbers.push(drawn);
            }
        }
    }

    Ok(numbers)
}

/// Bounded history of recent generation batches, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationHistory {
    batches: Vec<Vec<i64>>,
}

impl GenerationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a batch, evicting the oldest once capacity is reached.
    pub fn record(&mut self, batch: Vec<i64>) {
        self.batches.insert(0, batch);
        self.batches.truncate(HISTORY_CAPACITY);
    }

    /// Batches from newest to oldest
    pub fn batches(&self) -> &[Vec<i64>] {
        &self.batches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_values_within_range() {
        let input = RandomNumbersInput {
            min: 10,
            max: 20,
            count: 200,
            allow_duplicates: true,
        };
        let numbers = generate(&input, &mut rng()).unwrap();
        assert_eq!(numbers.len(), 200);
        assert!(numbers.iter().all(|n| (10..=20).contains(n)));
    }

    #[test]
    fn test_no_duplicates_are_distinct() {
        let input = RandomNumbersInput {
            min: 1,
            max: 50,
            count: 50,
            allow_duplicates: false,
        };
        let numbers = generate(&input, &mut rng()).unwrap();
        let distinct: HashSet<_> = numbers.iter().collect();
        assert_eq!(distinct.len(), numbers.len());
    }

    #[test]
    fn test_count_exceeding_range_refused() {
        let input = RandomNumbersInput {
            min: 1,
            max: 5,
            count: 6,
            allow_duplicates: false,
        };
        assert!(generate(&input, &mut rng()).is_err());

        // Same count is fine when duplicates are allowed
        let relaxed = RandomNumbersInput {
            allow_duplicates: true,
            ..input
        };
        assert!(generate(&relaxed, &mut rng()).is_ok());
    }

    #[test]
    fn test_min_not_below_max_refused() {
        let input = RandomNumbersInput {
            min: 7,
            max: 7,
            count: 1,
            allow_duplicates: true,
        };
        assert!(generate(&input, &mut rng()).is_err());
    }

    #[test]
    fn test_zero_count_refused() {
        let input = RandomNumbersInput {
            min: 1,
            max: 10,
            count: 0,
            allow_duplicates: true,
        };
        assert!(generate(&input, &mut rng()).is_err());
    }

    #[test]
    fn test_negative_range() {
        let input = RandomNumbersInput {
            min: -10,
            max: -1,
            count: 10,
            allow_duplicates: false,
        };
        let numbers = generate(&input, &mut rng()).unwrap();
        assert!(numbers.iter().all(|n| (-10..=-1).contains(n)));
    }

    #[test]
    fn test_extreme_bounds_do_not_overflow() {
        let input = RandomNumbersInput {
            min: i64::MIN,
            max: i64::MAX,
            count: 4,
            allow_duplicates: false,
        };
        assert_eq!(input.range_size(), 1u128 << 64);
        let numbers = generate(&input, &mut rng()).unwrap();
        assert_eq!(numbers.len(), 4);
    }

    #[test]
    fn test_history_keeps_newest_ten() {
        let mut history = GenerationHistory::new();
        for i in 0..12_i64 {
            history.record(vec![i]);
        }
        assert_eq!(history.batches().len(), 10);
        // Newest first; batches 0 and 1 were evicted
        assert_eq!(history.batches()[0], vec![11]);
        assert_eq!(history.batches()[9], vec![2]);
    }
}
