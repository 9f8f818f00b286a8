use algebra_error::Error;
use crate::error::InvalidFraction;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A stable identifier of an [`Answer`], assigned by whoever stores the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnswerId(pub u64);

impl fmt::Display for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A reference answer to a question, and the credit awarded to responses equivalent to it.
///
/// The answers of a question are kept in the order they were authored. When a response is
/// equivalent to more than one answer, the first one wins.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Answer {
    id: AnswerId,
    expression: String,
    fraction: f64,
    feedback: String,
}

impl Answer {
    /// Creates an answer with no feedback.
    ///
    /// Returns an [`InvalidFraction`] error if `fraction` is not within `[0, 1]`.
    pub fn new(id: AnswerId, expression: impl Into<String>, fraction: f64) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(Error::new(Vec::new(), InvalidFraction { fraction }));
        }

        Ok(Self {
            id,
            expression: expression.into(),
            fraction,
            feedback: String::new(),
        })
    }

    /// Sets the feedback shown to learners whose response matches this answer.
    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = feedback.into();
        self
    }

    pub fn id(&self) -> AnswerId {
        self.id
    }

    /// The text of the reference expression.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The fraction of credit awarded, between 0 and 1.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn fraction_bounds() {
        assert!(Answer::new(AnswerId(1), "x", 0.0).is_ok());
        assert!(Answer::new(AnswerId(1), "x", 1.0).is_ok());

        let err = Answer::new(AnswerId(1), "x", 1.5).unwrap_err();
        assert_eq!(err.downcast_ref::<InvalidFraction>(), Some(&InvalidFraction { fraction: 1.5 }));
        assert!(Answer::new(AnswerId(1), "x", -0.1).is_err());
        assert!(Answer::new(AnswerId(1), "x", f64::NAN).is_err());
    }

    #[test]
    fn feedback() {
        let answer = Answer::new(AnswerId(3), "2*x", 1.0).unwrap().with_feedback("Well done");
        assert_eq!(answer.feedback(), "Well done");
        assert_eq!(answer.id().to_string(), "#3");
    }
}
