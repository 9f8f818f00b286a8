use crate::{
    answer::{Answer, AnswerId},
    compare::{compare, GradingResult, Outcome},
    options::GradingOptions,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The fraction an answer needs to count as the correct answer of a question.
pub const CORRECT_FRACTION: f64 = 0.999;

/// How a response was classified against the answers of a question.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClassifiedResponse {
    /// The response was empty.
    NoResponse,

    /// The response was graded.
    Response {
        /// The answer the response matched, if any.
        answer: Option<AnswerId>,

        /// The response, as summarized by [`GradableQuestion::summarize`].
        summary: String,

        /// The fraction of credit the response earned.
        fraction: f64,
    },
}

/// A question that grades a free-form text response.
pub trait GradableQuestion {
    /// Grades the response, returning the fraction of credit earned and the corresponding
    /// outcome. A malformed response earns no credit; it is never an error.
    fn grade(&self, response: &str) -> (f64, Outcome);

    /// The text of the answer that earns full credit, if there is one.
    fn correct_reference(&self) -> Option<&str>;

    /// Classifies the response by the answer it matched.
    fn classify(&self, response: &str) -> ClassifiedResponse;

    /// Returns true if the response can be graded at all, which is when it is not blank. The
    /// response is not parsed.
    fn is_answerable(&self, response: &str) -> bool {
        !response.trim().is_empty()
    }

    /// Summarizes the response for display: surrounding whitespace is removed, and runs of
    /// whitespace are collapsed to a single space.
    fn summarize(&self, response: &str) -> String {
        response.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// A question whose responses are algebraic expressions, graded against an ordered list of
/// reference answers.
///
/// The question owns the seed of its random trials, so grading the same response twice always
/// gives the same result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlgebraQuestion {
    answers: Vec<Answer>,
    options: GradingOptions,
    seed: u64,
}

impl AlgebraQuestion {
    /// Creates a question with a random seed.
    pub fn new(answers: Vec<Answer>, options: GradingOptions) -> Self {
        Self {
            answers,
            options,
            seed: rand::random(),
        }
    }

    /// Sets the seed used to generate the random trials.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn options(&self) -> &GradingOptions {
        &self.options
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the answer that earns full credit, if there is one. If there are several, the
    /// first one is returned.
    pub fn correct_answer(&self) -> Option<&Answer> {
        self.answers.iter().find(|answer| answer.fraction() >= CORRECT_FRACTION)
    }

    /// Grades the response, returning the full result, including the matched answer and its
    /// feedback.
    pub fn grade_result(&self, response: &str) -> GradingResult {
        compare(response, &self.answers, &self.options, self.seed)
    }
}

impl GradableQuestion for AlgebraQuestion {
    fn grade(&self, response: &str) -> (f64, Outcome) {
        let result = self.grade_result(response);
        (result.fraction, result.outcome)
    }

    fn correct_reference(&self) -> Option<&str> {
        self.correct_answer().map(Answer::expression)
    }

    fn classify(&self, response: &str) -> ClassifiedResponse {
        if !self.is_answerable(response) {
            return ClassifiedResponse::NoResponse;
        }

        let result = self.grade_result(response);
        ClassifiedResponse::Response {
            answer: result.answer,
            summary: self.summarize(response),
            fraction: result.fraction,
        }
    }
}
