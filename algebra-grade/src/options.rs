use algebra_compute::trial::SampleRange;
use algebra_error::Error;
use crate::error::{InvalidRange, InvalidTolerance, InvalidTrialCount};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of trials used when none is given.
pub const DEFAULT_TRIALS: usize = 10;

/// The tolerance used when none is given.
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// How a response is compared against the reference answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CompareBy {
    /// Evaluate the response and the answers under random values of their variables, and compare
    /// the results.
    #[default]
    Numeric,

    /// Compare the text of the response and the answers, ignoring whitespace (and letter case,
    /// unless the comparison is case sensitive).
    Textual,
}

/// A variable declared by a question, and the range its values are drawn from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariableSpec {
    /// The name of the variable.
    pub name: String,

    /// The range values of the variable are drawn from.
    pub range: SampleRange,
}

impl VariableSpec {
    /// Declares a variable sampled from the default range, `[-5, 5]`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            range: SampleRange::DEFAULT,
        }
    }

    /// Declares a variable sampled from `[min, max]`.
    ///
    /// Returns an [`InvalidRange`] error if the bounds are not finite, or if `min > max`.
    pub fn with_range(name: impl Into<String>, min: f64, max: f64) -> Result<Self, Error> {
        let name = name.into();
        match SampleRange::new(min, max) {
            Some(range) => Ok(Self { name, range }),
            None => Err(Error::new(Vec::new(), InvalidRange { name, min, max })),
        }
    }
}

/// Options that control how responses are graded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GradingOptions {
    /// How responses are compared against the answers.
    pub compare_by: CompareBy,

    /// The number of random trials a response must agree with an answer on.
    ///
    /// The default value is [`DEFAULT_TRIALS`].
    pub trials: usize,

    /// The tolerance for each trial; see [`algebra_compute::approx::approx_eq`].
    ///
    /// The default value is [`DEFAULT_TOLERANCE`].
    pub tolerance: f64,

    /// Whether letter case matters when comparing by text.
    ///
    /// The default value is `false`.
    pub case_sensitive: bool,

    /// The variables of the question. If empty, the variables are the ones that appear in the
    /// response and the answers, sampled from the default range.
    pub variables: Vec<VariableSpec>,
}

impl Default for GradingOptions {
    fn default() -> Self {
        Self {
            compare_by: CompareBy::default(),
            trials: DEFAULT_TRIALS,
            tolerance: DEFAULT_TOLERANCE,
            case_sensitive: false,
            variables: Vec::new(),
        }
    }
}

impl GradingOptions {
    /// Returns the names of the declared variables.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(|var| var.name.as_str())
    }

    /// Checks the options that cannot be enforced by their types: the trial count must be at
    /// least one and the tolerance must be a non-negative number.
    pub fn check(&self) -> Result<(), Error> {
        if self.trials == 0 {
            return Err(Error::new(Vec::new(), InvalidTrialCount));
        }

        if !(self.tolerance >= 0.0 && self.tolerance.is_finite()) {
            return Err(Error::new(Vec::new(), InvalidTolerance { tolerance: self.tolerance }));
        }

        Ok(())
    }
}

/// A builder for [`GradingOptions`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradingOptionsBuilder(GradingOptions);

impl GradingOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how responses are compared. See [`CompareBy`] for more information.
    pub fn compare_by(mut self, compare_by: CompareBy) -> Self {
        self.0.compare_by = compare_by;
        self
    }

    /// Sets the number of trials. See [`GradingOptions::trials`] for more information.
    pub fn trials(mut self, trials: usize) -> Self {
        self.0.trials = trials;
        self
    }

    /// Sets the tolerance. See [`GradingOptions::tolerance`] for more information.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.0.tolerance = tolerance;
        self
    }

    /// Sets whether textual comparison is case sensitive.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.0.case_sensitive = case_sensitive;
        self
    }

    /// Declares a variable. See [`VariableSpec`] for more information.
    pub fn variable(mut self, variable: VariableSpec) -> Self {
        self.0.variables.push(variable);
        self
    }

    /// Builds the [`GradingOptions`] struct, checking that the trial count and tolerance are
    /// valid.
    pub fn build(self) -> Result<GradingOptions, Error> {
        self.0.check()?;
        Ok(self.0)
    }
}
