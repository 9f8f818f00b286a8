//! The kinds of errors found while validating a question.

use algebra_attrs::ErrorKind;
use algebra_error::EXPR;
use ariadne::Fmt;

/// A reference answer uses a variable that the question does not declare.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a declared variable", name),
    labels = ["this variable"],
    help = if declared.is_empty() {
        format!("declare {} as a variable of the question", name.fg(EXPR))
    } else {
        format!(
            "the declared variables are: {}",
            declared
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UndeclaredVariable {
    /// The name of the variable.
    pub name: String,

    /// The variables the question declares.
    pub declared: Vec<String>,
}

/// The fraction of credit of an answer is outside `[0, 1]`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the fraction of an answer must be between 0 and 1, but it is {}", fraction),
    help = "use 1 for a fully correct answer and a value below 1 for partial credit",
)]
pub struct InvalidFraction {
    pub fraction: f64,
}

/// The grading tolerance is negative or not a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the tolerance must be a non-negative number, but it is {}", tolerance),
)]
pub struct InvalidTolerance {
    pub tolerance: f64,
}

/// The question asks for no trials.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "at least one trial is needed to compare answers",
    help = format!("the default is {} trials", crate::options::DEFAULT_TRIALS),
)]
pub struct InvalidTrialCount;

/// The sampling range of a declared variable is empty or unbounded.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` has an invalid sampling range [{}, {}]", name, min, max),
    help = "both bounds must be finite, and the lower bound must not exceed the upper bound",
)]
pub struct InvalidRange {
    /// The name of the variable.
    pub name: String,

    /// The lower bound given for the range.
    pub min: f64,

    /// The upper bound given for the range.
    pub max: f64,
}

/// No answer awards full credit, so no response can ever be graded as correct.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "none of the answers gives full credit",
    help = "set the fraction of the correct answer to 1",
)]
pub struct NoCorrectAnswer;
