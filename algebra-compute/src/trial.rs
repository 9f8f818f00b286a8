//! Generation of random variable bindings used to compare expressions numerically.
//!
//! Every expression in a single comparison is evaluated under the same bindings, so that the
//! results can be compared trial by trial.

use crate::numerical::ctxt::Ctxt;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Values closer to zero than this are resampled, since many expressions are singular at zero.
pub const EXCLUSION_RADIUS: f64 = 0.1;

/// The number of times a value is drawn while trying to stay out of the exclusion zone around zero.
pub const MAX_ATTEMPTS: usize = 32;

/// The closed interval a variable's values are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleRange {
    min: f64,
    max: f64,
}

impl SampleRange {
    /// The range used for variables that do not declare one: `[-5, 5]`.
    pub const DEFAULT: Self = Self { min: -5.0, max: 5.0 };

    /// Creates a new range. Returns [`None`] if either bound is not finite, or if `min > max`.
    pub fn new(min: f64, max: f64) -> Option<Self> {
        if min.is_finite() && max.is_finite() && min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// The lower bound of the range.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// The upper bound of the range.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Draws a value from the range, avoiding values near zero when possible.
    ///
    /// If the whole range lies inside the exclusion zone, the last value drawn is kept.
    fn sample(&self, rng: &mut StdRng) -> f64 {
        if self.min == self.max {
            return self.min;
        }

        let mut value = rng.gen_range(self.min..=self.max);
        for _ in 1..MAX_ATTEMPTS {
            if value.abs() >= EXCLUSION_RADIUS {
                break;
            }
            value = rng.gen_range(self.min..=self.max);
        }
        value
    }
}

impl Default for SampleRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Generates `count` sets of bindings for the given variables, one set per trial.
///
/// The output depends only on the arguments: the same variables, in the same order, with the same
/// seed, always produce the same bindings.
pub fn generate_trials<'a, I>(variables: I, count: usize, seed: u64) -> Vec<Ctxt>
where
    I: IntoIterator<Item = (&'a str, SampleRange)>,
{
    let variables = variables.into_iter().collect::<Vec<_>>();
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            variables.iter()
                .map(|(name, range)| (*name, range.sample(&mut rng)))
                .collect()
        })
        .collect()
}
