//! The kinds of errors that can occur while evaluating an expression.

use algebra_attrs::ErrorKind;
use algebra_error::EXPR;
use ariadne::Fmt;

/// The variable has no value in the context and is not a constant.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` has no value", name),
    labels = ["this variable"],
    help = if suggestions.is_empty() {
        format!("give {} a value before evaluating the expression", name.fg(EXPR))
    } else {
        format!(
            "did you mean {}?",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UnboundVariable {
    /// The name of the variable.
    pub name: String,

    /// Variables in the context with similar names.
    pub suggestions: Vec<String>,
}

/// An operation was applied to a value outside its domain over the real numbers, or the result
/// of an operation cannot be represented.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("Math Error: {}", reason),
    labels = ["this expression"],
)]
pub struct DomainError {
    /// Why the operation failed.
    pub reason: String,
}

/// Attempted to divide by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Math Error: Division by zero",
    labels = ["this operation", "this evaluates to zero"],
)]
pub struct DivisionByZero;
