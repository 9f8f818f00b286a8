//! Grading of free-form algebraic answers.
//!
//! A learner's answer is compared against the reference answers of a question by evaluating both
//! under the same random values of their variables. If the values agree within a tolerance on
//! every trial, the answers are considered equivalent, so `x+x` is accepted for a reference of
//! `2*x` without requiring the learner to type the exact same text.
//!
//! ```
//! use algebra_grade::{
//!     answer::{Answer, AnswerId},
//!     compare::Outcome,
//!     options::GradingOptions,
//!     question::{AlgebraQuestion, GradableQuestion},
//! };
//!
//! let answers = vec![
//!     Answer::new(AnswerId(1), "2*x", 1.0).unwrap(),
//!     Answer::new(AnswerId(2), "x", 0.2).unwrap(),
//! ];
//! let question = AlgebraQuestion::new(answers, GradingOptions::default());
//!
//! assert_eq!(question.grade("x + x"), (1.0, Outcome::Correct));
//! assert_eq!(question.grade("x"), (0.2, Outcome::Partial));
//! assert_eq!(question.grade("x^2"), (0.0, Outcome::Incorrect));
//! ```

pub mod answer;
pub mod compare;
pub mod error;
pub mod legacy;
pub mod options;
pub mod question;
pub mod validate;
