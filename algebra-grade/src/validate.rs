//! Validation of a question at authoring time.
//!
//! Responses that fail to parse or evaluate are graded as wrong without complaint, but a
//! reference answer that does the same can never be matched. [`validate_question`] reports these
//! problems to the author, with a report pointing at the offending part of each answer.

use algebra_compute::{
    numerical::eval::Eval,
    trial::{generate_trials, SampleRange},
};
use algebra_error::Error;
use algebra_parser::parser::{ast::Expr, builtins, Parser};
use crate::{
    answer::{Answer, AnswerId},
    compare::trial_variables,
    error::{InvalidFraction, InvalidRange, NoCorrectAnswer, UndeclaredVariable},
    options::GradingOptions,
    question::CORRECT_FRACTION,
};
use std::fmt;

/// The seed of the trials used to evaluate the answers during validation.
pub const VALIDATION_SEED: u64 = 0;

/// A problem found while validating a question.
#[derive(Debug)]
pub struct ValidationError {
    /// The answer with the problem, or [`None`] if the problem is with the options or with the
    /// answers as a whole.
    pub answer: Option<AnswerId>,

    /// The text the spans of the error point into: the expression of the answer, if any.
    pub source: String,

    /// The error itself.
    pub error: Error,
}

impl ValidationError {
    fn for_answer(answer: &Answer, error: Error) -> Self {
        Self {
            answer: Some(answer.id()),
            source: answer.expression().to_string(),
            error,
        }
    }

    fn for_question(error: Error) -> Self {
        Self {
            answer: None,
            source: String::new(),
            error,
        }
    }

    /// Returns true if the problem does not prevent the question from being used.
    pub fn is_warning(&self) -> bool {
        self.error.is::<NoCorrectAnswer>()
    }

    /// The name of the source the error points into, used to label its report.
    pub fn src_id(&self) -> String {
        match self.answer {
            Some(id) => format!("answer {}", id),
            None => "question".to_string(),
        }
    }

    /// Renders the report of this error into a string, with colors.
    pub fn render(&self) -> String {
        self.error.render(&self.src_id(), &self.source)
    }

    /// Report this error to stderr.
    pub fn report_to_stderr(&self) {
        self.error.report_to_stderr(&self.src_id(), &self.source);
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.answer {
            Some(id) => write!(f, "answer {}: {}", id, self.error),
            None => write!(f, "{}", self.error),
        }
    }
}

/// Returns the first variable in the expression that is neither declared nor a constant.
fn undeclared_variable(expr: &Expr, options: &GradingOptions) -> Option<Error> {
    expr.post_order_iter().find_map(|expr| match expr {
        Expr::Variable(sym)
            if !builtins::is_constant(&sym.name)
                && !options.variable_names().any(|name| name == sym.name) => Some(Error::new(
            vec![sym.span.clone()],
            UndeclaredVariable {
                name: sym.name.clone(),
                declared: options.variable_names().map(str::to_string).collect(),
            },
        )),
        _ => None,
    })
}

/// Checks a single answer, returning the first problem found with it.
///
/// The answer is only evaluated if `evaluate` is true, which requires valid options.
fn validate_answer(answer: &Answer, options: &GradingOptions, evaluate: bool) -> Result<(), Error> {
    if !(0.0..=1.0).contains(&answer.fraction()) {
        return Err(Error::new(Vec::new(), InvalidFraction { fraction: answer.fraction() }));
    }

    let expr = Parser::new(answer.expression())
        .with_variables(options.variable_names())
        .try_parse_full::<Expr>()?;

    if !options.variables.is_empty() {
        if let Some(err) = undeclared_variable(&expr, options) {
            return Err(err);
        }
    }

    if !evaluate {
        return Ok(());
    }

    let trials = generate_trials(trial_variables(options, [&expr]), options.trials, VALIDATION_SEED);
    for ctxt in &trials {
        expr.eval(ctxt)?;
    }

    Ok(())
}

/// Validates the answers and options of a question, returning every problem found.
///
/// The options are checked first, then each answer in order. An answer that cannot be parsed, uses
/// an undeclared variable, or fails to evaluate on any trial is an error. A question where no
/// answer gives full credit is reported with a warning (see [`ValidationError::is_warning`]).
pub fn validate_question(answers: &[Answer], options: &GradingOptions) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let options_valid = match options.check() {
        Ok(()) => true,
        Err(err) => {
            errors.push(ValidationError::for_question(err));
            false
        },
    };

    for var in &options.variables {
        if SampleRange::new(var.range.min(), var.range.max()).is_none() {
            errors.push(ValidationError::for_question(Error::new(Vec::new(), InvalidRange {
                name: var.name.clone(),
                min: var.range.min(),
                max: var.range.max(),
            })));
        }
    }

    for answer in answers {
        if let Err(err) = validate_answer(answer, options, options_valid) {
            errors.push(ValidationError::for_answer(answer, err));
        }
    }

    if !answers.iter().any(|answer| answer.fraction() >= CORRECT_FRACTION) {
        errors.push(ValidationError::for_question(Error::new(Vec::new(), NoCorrectAnswer)));
    }

    errors
}
