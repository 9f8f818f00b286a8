//! Translation of attempt records stored by older versions of the question type.
//!
//! Old records store the response under a single optional `answer` field. Nothing here parses or
//! grades the response; it only maps the old record onto the current response shape.

use crate::{answer::Answer, question::CORRECT_FRACTION};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The state of an attempt, as stored by older versions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LegacyState {
    /// The response, if one was stored.
    pub answer: Option<String>,
}

/// A response in its current shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Response {
    pub answer: String,
}

impl LegacyState {
    /// Returns true if the attempt stored a response that is not blank.
    pub fn was_answered(&self) -> bool {
        self.answer.as_deref().map_or(false, |answer| !answer.trim().is_empty())
    }

    /// Returns the stored response with surrounding whitespace removed, if the attempt was
    /// answered.
    pub fn response_summary(&self) -> Option<String> {
        self.answer.as_deref()
            .map(str::trim)
            .filter(|answer| !answer.is_empty())
            .map(str::to_string)
    }

    /// Converts the stored response to the current shape. The response text is kept as is.
    pub fn to_response(&self) -> Option<Response> {
        self.answer.as_ref().map(|answer| Response { answer: answer.clone() })
    }
}

/// Returns the answer older versions displayed as the right answer: the first one whose fraction
/// exceeds [`CORRECT_FRACTION`].
pub fn right_answer(answers: &[Answer]) -> Option<&Answer> {
    answers.iter().find(|answer| answer.fraction() > CORRECT_FRACTION)
}
