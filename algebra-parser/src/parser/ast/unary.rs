use algebra_error::Error;
use crate::{
    parser::{
        ast::{binary::Binary, expr::{Expr, Primary}},
        error::{EmptyExpression, InvalidSign, WrongArgumentCount},
        token::op::{BinOpKind, UnaryOp},
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary expression, such as `-x`. Unary expressions can include nested expressions.
///
/// Unary expressions do not directly implement [`Parse`]. Use [`Unary::parse_or_lower`] to parse
/// an operand that may or may not start with a sign.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parse a sign and the operand it applies to.
    ///
    /// The sign binds more loosely than exponentiation, so `-x^2` is parsed as `-(x^2)`, but more
    /// tightly than multiplication, so `-x y` is parsed as `(-x) * y`.
    pub fn parse_signed(input: &mut Parser) -> Result<Self, Error> {
        let op = input.try_parse::<UnaryOp>()?;

        // a sign must be followed by something it can apply to
        if !input.current_token().map_or(false, |token| token.kind.starts_operand()) {
            return Err(Error::new(vec![op.span.clone()], InvalidSign));
        }

        let op_precedence = op.precedence();
        let start_span = op.span.start;
        let operand = input.nested(|input| {
            let lhs = Unary::parse_or_lower(input)?;
            Binary::parse_expr(input, lhs, op_precedence)
        })?;
        let end_span = operand.span().end;

        Ok(Self {
            operand: Box::new(operand),
            op,
            span: start_span..end_span,
        })
    }

    /// Parses a unary expression, or lower precedence expressions.
    ///
    /// This is the entry point for parsing the first operand of an expression, so it also reports
    /// what is wrong when no operand is present at all.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        let Some(kind) = input.current_token().map(|token| token.kind) else {
            return Err(input.error(EmptyExpression));
        };

        match kind {
            kind if kind.is_sign() => Self::parse_signed(input).map(Expr::Unary),
            kind if kind.is_binary_only() => {
                // `* / ^` with nothing on their left-hand side
                let op = match kind {
                    TokenKind::Mul => BinOpKind::Mul,
                    TokenKind::Div => BinOpKind::Div,
                    _ => BinOpKind::Exp,
                };
                Err(input.error(WrongArgumentCount { op }))
            },
            TokenKind::CloseParen => Err(input.error(EmptyExpression)),
            _ => input.try_parse::<Primary>().map(Into::into),
        }
    }
}

impl std::fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.op.kind)?;
        if self.operand.precedence() < self.op.precedence() {
            write!(f, "({})", self.operand)
        } else {
            write!(f, "{}", self.operand)
        }
    }
}
