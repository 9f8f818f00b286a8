//! Comparison of a response against the reference answers of a question.

use algebra_compute::{
    approx::approx_eq,
    numerical::{ctxt::Ctxt, eval::Eval},
    trial::{generate_trials, SampleRange},
};
use algebra_parser::parser::{ast::Expr, Parser};
use crate::{
    answer::{Answer, AnswerId},
    options::{CompareBy, GradingOptions},
};
use std::{collections::BTreeSet, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fractions within this distance of 0 or 1 are treated as exactly 0 or 1.
pub const FRACTION_EPSILON: f64 = 1e-7;

/// The grade given to a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// The response earned full credit.
    Correct,

    /// The response earned some, but not full, credit.
    Partial,

    /// The response earned no credit.
    Incorrect,
}

impl Outcome {
    /// Returns the outcome for the given fraction of credit.
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction >= 1.0 - FRACTION_EPSILON {
            Self::Correct
        } else if fraction > FRACTION_EPSILON {
            Self::Partial
        } else {
            Self::Incorrect
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => write!(f, "correct"),
            Self::Partial => write!(f, "partially correct"),
            Self::Incorrect => write!(f, "incorrect"),
        }
    }
}

/// The result of comparing a response against the answers of a question.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GradingResult {
    /// The fraction of credit earned.
    pub fraction: f64,

    /// The answer the response matched, if any.
    pub answer: Option<AnswerId>,

    /// The feedback of the matched answer, if any.
    pub feedback: Option<String>,

    /// The grade corresponding to [`GradingResult::fraction`].
    pub outcome: Outcome,
}

impl GradingResult {
    /// The result for a response that matches no answer.
    pub fn no_match() -> Self {
        Self {
            fraction: 0.0,
            answer: None,
            feedback: None,
            outcome: Outcome::Incorrect,
        }
    }

    /// The result for a response that matches the given answer.
    pub fn matched(answer: &Answer) -> Self {
        Self {
            fraction: answer.fraction(),
            answer: Some(answer.id()),
            feedback: Some(answer.feedback().to_string()).filter(|feedback| !feedback.is_empty()),
            outcome: Outcome::from_fraction(answer.fraction()),
        }
    }
}

/// Normalizes text for textual comparison: whitespace is removed, and letters are lowercased
/// unless the comparison is case sensitive.
pub fn normalize_text(text: &str, case_sensitive: bool) -> String {
    let text = text.chars().filter(|c| !c.is_whitespace());
    if case_sensitive {
        text.collect()
    } else {
        text.flat_map(char::to_lowercase).collect()
    }
}

/// Parses an expression, treating the declared variables of the question as variables.
pub fn parse_expression(source: &str, options: &GradingOptions) -> Option<Expr> {
    Parser::new(source)
        .with_variables(options.variable_names())
        .try_parse_full::<Expr>()
        .ok()
}

/// Returns the variables to sample in each trial, with their ranges.
///
/// If the question declares variables, exactly those are sampled. Otherwise, every variable that
/// appears in any of the given expressions is sampled from the default range.
pub fn trial_variables<'a>(
    options: &'a GradingOptions,
    exprs: impl IntoIterator<Item = &'a Expr>,
) -> Vec<(&'a str, SampleRange)> {
    if !options.variables.is_empty() {
        return options.variables.iter()
            .map(|var| (var.name.as_str(), var.range))
            .collect();
    }

    exprs.into_iter()
        .flat_map(Expr::free_variables)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|name| (name, SampleRange::DEFAULT))
        .collect()
}

/// Returns true if `reference` evaluates to the same value as the candidate on every trial.
///
/// `candidate` holds the value of the candidate on each trial, or [`None`] where it could not be
/// evaluated. A trial where either expression cannot be evaluated does not match.
fn matches_on_all_trials(candidate: &[Option<f64>], reference: &Expr, trials: &[Ctxt], tolerance: f64) -> bool {
    candidate.iter()
        .zip(trials)
        .all(|(candidate, ctxt)| match (candidate, reference.eval(ctxt)) {
            (Some(candidate), Ok(reference)) => approx_eq(*candidate, reference, tolerance),
            _ => false,
        })
}

/// Compares the response by evaluating it and each answer under the same random trials.
///
/// Invalid options (no trials, or a bad tolerance) match nothing.
fn compare_numeric(candidate: &str, answers: &[Answer], options: &GradingOptions, seed: u64) -> GradingResult {
    if options.check().is_err() {
        return GradingResult::no_match();
    }

    let Some(candidate) = parse_expression(candidate, options) else {
        return GradingResult::no_match();
    };

    // references that fail to parse are skipped; validation reports them to the author
    let references = answers.iter()
        .filter_map(|answer| Some((answer, parse_expression(answer.expression(), options)?)))
        .collect::<Vec<_>>();

    let variables = trial_variables(
        options,
        std::iter::once(&candidate).chain(references.iter().map(|(_, expr)| expr)),
    );
    let trials = generate_trials(variables, options.trials, seed);
    let candidate_values = trials.iter()
        .map(|ctxt| candidate.eval(ctxt).ok())
        .collect::<Vec<_>>();

    references.iter()
        .find(|(_, reference)| matches_on_all_trials(&candidate_values, reference, &trials, options.tolerance))
        .map_or_else(GradingResult::no_match, |(answer, _)| GradingResult::matched(answer))
}

/// Compares the normalized text of the response against each answer.
fn compare_textual(candidate: &str, answers: &[Answer], options: &GradingOptions) -> GradingResult {
    let candidate = normalize_text(candidate, options.case_sensitive);
    if candidate.is_empty() {
        return GradingResult::no_match();
    }

    answers.iter()
        .find(|answer| normalize_text(answer.expression(), options.case_sensitive) == candidate)
        .map_or_else(GradingResult::no_match, GradingResult::matched)
}

/// Compares a response against the answers of a question, in the order the answers are given.
/// The first answer the response is equivalent to determines the result.
///
/// A response that cannot be parsed or evaluated is never an error: it simply matches nothing.
/// The same inputs and `seed` always produce the same result.
pub fn compare(candidate: &str, answers: &[Answer], options: &GradingOptions, seed: u64) -> GradingResult {
    match options.compare_by {
        CompareBy::Numeric => compare_numeric(candidate, answers, options, seed),
        CompareBy::Textual => compare_textual(candidate, answers, options),
    }
}

#[cfg(test)]
mod tests {
    use crate::options::{GradingOptionsBuilder, VariableSpec};
    use pretty_assertions::assert_eq;
    use super::*;

    fn answers(list: &[(&str, f64)]) -> Vec<Answer> {
        list.iter()
            .enumerate()
            .map(|(i, (expression, fraction))| Answer::new(AnswerId(i as u64 + 1), *expression, *fraction).unwrap())
            .collect()
    }

    fn fraction(candidate: &str, answers: &[Answer], options: &GradingOptions) -> f64 {
        compare(candidate, answers, options, 12345).fraction
    }

    #[test]
    fn outcome_thresholds() {
        assert_eq!(Outcome::from_fraction(1.0), Outcome::Correct);
        assert_eq!(Outcome::from_fraction(0.99999999), Outcome::Correct);
        assert_eq!(Outcome::from_fraction(0.2), Outcome::Partial);
        assert_eq!(Outcome::from_fraction(1e-8), Outcome::Incorrect);
        assert_eq!(Outcome::from_fraction(0.0), Outcome::Incorrect);
    }

    #[test]
    fn simple_product() {
        let answers = answers(&[("7*x", 1.0)]);
        let options = GradingOptions::default();
        assert_eq!(fraction("7*x", &answers, &options), 1.0);
        assert_eq!(fraction("7x", &answers, &options), 1.0);
        assert_eq!(fraction("x*7", &answers, &options), 1.0);
        assert_eq!(fraction("5*x", &answers, &options), 0.0);
        assert_eq!(fraction("x", &answers, &options), 0.0);
        assert_eq!(fraction("0", &answers, &options), 0.0);
    }

    #[test]
    fn algebraic_identities() {
        let answers = answers(&[("(x + 1)^2", 1.0)]);
        let options = GradingOptions::default();
        assert_eq!(fraction("x^2 + 2x + 1", &answers, &options), 1.0);
        assert_eq!(fraction("(x+1)(1+x)", &answers, &options), 1.0);
        assert_eq!(fraction("x^2 + 1", &answers, &options), 0.0);

        let answers = self::answers(&[("sin(2x)", 1.0)]);
        assert_eq!(fraction("2 sin(x) cos(x)", &answers, &options), 1.0);
    }

    #[test]
    fn first_matching_answer_wins() {
        let answers = answers(&[("2*x", 1.0), ("x+x", 0.5), ("x", 0.2)]);
        let result = compare("x + x", &answers, &GradingOptions::default(), 1);
        assert_eq!(result.answer, Some(AnswerId(1)));
        assert_eq!(result.fraction, 1.0);

        let result = compare("x", &answers, &GradingOptions::default(), 1);
        assert_eq!(result.answer, Some(AnswerId(3)));
        assert_eq!(result.outcome, Outcome::Partial);
    }

    #[test]
    fn malformed_candidate_scores_zero() {
        let answers = answers(&[("2*x", 1.0)]);
        let options = GradingOptions::default();
        for candidate in ["", "2*x)", "x^", "(-)", "sinx(2)", "2 $ x"] {
            assert_eq!(compare(candidate, &answers, &options, 0), GradingResult::no_match());
        }
    }

    #[test]
    fn malformed_reference_is_skipped() {
        let answers = answers(&[("2*(x", 1.0), ("x+x", 0.5)]);
        let result = compare("2x", &answers, &GradingOptions::default(), 0);
        assert_eq!(result.answer, Some(AnswerId(2)));
    }

    #[test]
    fn undefined_on_some_trials() {
        // sqrt(x^2) and x differ for negative x, and ln(x) is undefined there
        let options = GradingOptions::default();
        assert_eq!(fraction("sqrt(x^2)", &answers(&[("x", 1.0)]), &options), 0.0);
        assert_eq!(fraction("ln(x)", &answers(&[("ln(x)", 1.0)]), &options), 0.0);

        let options = GradingOptionsBuilder::new()
            .variable(VariableSpec::with_range("x", 0.5, 5.0).unwrap())
            .build()
            .unwrap();
        assert_eq!(fraction("sqrt(x^2)", &answers(&[("x", 1.0)]), &options), 1.0);
        assert_eq!(fraction("2 ln(x)", &answers(&[("ln(x^2)", 1.0)]), &options), 1.0);
    }

    #[test]
    fn declared_variables_only() {
        let options = GradingOptionsBuilder::new()
            .variable(VariableSpec::new("x"))
            .build()
            .unwrap();
        let answers = answers(&[("2*x", 1.0)]);
        assert_eq!(fraction("2x", &answers, &options), 1.0);
        assert_eq!(fraction("2x + y - y", &answers, &options), 0.0);
    }

    #[test]
    fn constants_are_not_sampled() {
        let answers = answers(&[("2*pi*r", 1.0)]);
        let options = GradingOptions::default();
        assert_eq!(fraction("2 pi r", &answers, &options), 1.0);
        assert_eq!(fraction("6.2832 r", &answers, &options), 1.0);
        assert_eq!(fraction("6.3 r", &answers, &options), 0.0);
    }

    #[test]
    fn tolerance() {
        let answers = answers(&[("1/3", 1.0)]);
        let options = GradingOptions::default();
        assert_eq!(fraction("0.333", &answers, &options), 1.0);
        assert_eq!(fraction("0.33", &answers, &options), 0.0);

        let strict = GradingOptionsBuilder::new().tolerance(1e-9).build().unwrap();
        assert_eq!(fraction("0.333", &answers, &strict), 0.0);
    }

    #[test]
    fn reproducible() {
        let answers = answers(&[("x^2", 1.0)]);
        let options = GradingOptions::default();
        let first = compare("x*x", &answers, &options, 99);
        assert_eq!(compare("x*x", &answers, &options, 99), first);
    }

    #[test]
    fn textual() {
        let answers = answers(&[("2*X + 1", 1.0)]);
        let options = GradingOptionsBuilder::new().compare_by(CompareBy::Textual).build().unwrap();
        assert_eq!(fraction("2*x+1", &answers, &options), 1.0);
        assert_eq!(fraction(" 2 * x + 1 ", &answers, &options), 1.0);
        assert_eq!(fraction("1+2*x", &answers, &options), 0.0);
        assert_eq!(fraction("", &answers, &options), 0.0);

        let case_sensitive = GradingOptionsBuilder::new()
            .compare_by(CompareBy::Textual)
            .case_sensitive(true)
            .build()
            .unwrap();
        assert_eq!(fraction("2*x+1", &answers, &case_sensitive), 0.0);
        assert_eq!(fraction("2*X+1", &answers, &case_sensitive), 1.0);
    }

    #[test]
    fn feedback_of_matched_answer() {
        let answers = vec![
            Answer::new(AnswerId(1), "2x", 1.0).unwrap().with_feedback("Correct!"),
            Answer::new(AnswerId(2), "x", 0.0).unwrap(),
        ];
        let result = compare("x+x", &answers, &GradingOptions::default(), 0);
        assert_eq!(result.feedback.as_deref(), Some("Correct!"));

        let result = compare("x", &answers, &GradingOptions::default(), 0);
        assert_eq!(result.answer, Some(AnswerId(2)));
        assert_eq!(result.feedback, None);
        assert_eq!(result.outcome, Outcome::Incorrect);
    }

    #[test]
    fn invalid_options_match_nothing() {
        let answers = answers(&[("7*x", 1.0)]);
        let no_trials = GradingOptions {
            trials: 0,
            ..Default::default()
        };
        assert_eq!(compare("5*x", &answers, &no_trials, 0), GradingResult::no_match());
        assert_eq!(compare("7*x", &answers, &no_trials, 0), GradingResult::no_match());
        assert_eq!(compare("banana", &answers, &no_trials, 0), GradingResult::no_match());

        let negative_tolerance = GradingOptions {
            tolerance: -1.0,
            ..Default::default()
        };
        assert_eq!(compare("7*x", &answers, &negative_tolerance, 0), GradingResult::no_match());
    }

    #[test]
    fn normalization() {
        assert_eq!(normalize_text(" Sin( X )\t", false), "sin(x)");
        assert_eq!(normalize_text(" Sin( X )\t", true), "Sin(X)");
    }
}
