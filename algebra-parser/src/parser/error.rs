//! The kinds of errors that can occur while parsing an expression.

use algebra_attrs::ErrorKind;
use algebra_error::EXPR;
use ariadne::Fmt;
use crate::tokenizer::TokenKind;
use super::token::op::BinOpKind;

/// A bracket was opened and never closed, or closed without being opened.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = if *opening {
        "Mismatched brackets: Open bracket without a close bracket found"
    } else {
        "Mismatched brackets: Close bracket without an open bracket found"
    },
    labels = ["this bracket"],
    help = if *opening {
        format!("add a closing bracket {} somewhere after this", ")".fg(EXPR))
    } else {
        format!("add an opening bracket {} somewhere before this", "(".fg(EXPR))
    },
)]
pub struct MismatchedBrackets {
    /// Whether the unmatched bracket was an opening bracket `(`. Otherwise, it was a closing
    /// bracket `)`.
    pub opening: bool,
}

/// A binary operator is missing one or both of its operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("Syntax Error: Operator '{}' requires two arguments", op),
    labels = ["this operator"],
    help = format!("add an {} on both sides of the operator", "expression".fg(EXPR)),
)]
pub struct WrongArgumentCount {
    /// The operator that is missing an operand.
    pub op: BinOpKind,
}

/// A `+` or `-` sign was found where no operand can follow it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Syntax Error: Found a + or - in an invalid location",
    labels = ["this sign"],
    help = format!("a sign must be followed by an {}", "expression".fg(EXPR)),
)]
pub struct InvalidSign;

/// A character that does not belong to any token was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("Syntax Error: Unknown token `{}`", lexeme),
    labels = ["I don't know what this is"],
    help = "expressions may only contain numbers, letters, `+ - * / ^` and brackets",
)]
pub struct UnknownToken {
    /// The text that could not be tokenized.
    pub lexeme: String,
}

/// A name was used as a function, but it is not a known function, or a known function was not
/// given a parenthesized argument.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = if *missing_argument {
        format!("Syntax Error: Function `{}` must be followed by a bracketed argument", name)
    } else {
        format!("Syntax Error: Unknown function `{}`", name)
    },
    labels = ["this function"],
    help = if *missing_argument {
        format!("write it as {}", format!("{}(...)", name).fg(EXPR))
    } else if suggestions.is_empty() {
        "to multiply a variable by a bracketed expression, add an explicit `*`".to_string()
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
pub struct UnknownFunction {
    /// The name of the function.
    pub name: String,

    /// Whether the name is a known function that is missing its bracketed argument.
    pub missing_argument: bool,

    /// Known functions with similar names, if any.
    pub suggestions: Vec<String>,
}

/// There was no expression to parse, either because the input was empty or because a pair of
/// brackets was empty.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Syntax Error: Expected an expression",
    labels = [format!("add an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyExpression;

/// The expression is nested too deeply to be parsed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Syntax Error: Expression is nested too deeply",
    labels = ["nesting limit reached here"],
    help = format!("expressions may be nested at most {} levels deep", max_depth),
)]
pub struct NestingTooDeep {
    /// The maximum nesting depth.
    pub max_depth: usize,
}

/// The expression contains more tokens than the parser accepts.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "Syntax Error: Expression is too long",
    labels = ["the expression is cut off here"],
    help = format!("expressions may contain at most {} numbers, names, operators and brackets", max_tokens),
)]
pub struct ExpressionTooLong {
    /// The maximum number of tokens.
    pub max_tokens: usize,
}

/// A token other than the one the parser asked for was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("Syntax Error: Unexpected token `{:?}`", found),
    labels = ["this token"],
    help = format!(
        "expected one of: {}",
        expected.iter().map(|kind| format!("{:?}", kind)).collect::<Vec<_>>().join(", ")
    ),
)]
pub struct UnexpectedToken {
    /// The token kinds that were expected.
    pub expected: &'static [TokenKind],

    /// The token kind that was found.
    pub found: TokenKind,
}
