use algebra_error::Error;
use crate::parser::{
    ast::{expr::{Expr, Primary}, unary::Unary},
    error::{InvalidSign, WrongArgumentCount},
    token::op::{BinOp, BinOpKind},
    Associativity,
    Parser,
    Precedence,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two operands joined by an operator, such as `x + 1`, `2^x` or the implicit product `2x`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left operand.
    pub lhs: Box<Expr>,

    pub op: BinOp,

    /// The right operand.
    pub rhs: Box<Expr>,

    /// From the start of `lhs` to the end of `rhs`.
    pub span: Range<usize>,
}

impl Binary {
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the operator that follows the current position without consuming it.
    ///
    /// When the next token begins a primary expression instead of an operator, such as in `2x` or
    /// `(x + 1)(x - 1)`, an implicit multiplication operator is returned.
    fn peek_op(input: &Parser) -> Option<BinOp> {
        let token = input.current_token()?;
        if let Some(kind) = BinOpKind::from_token(token.kind) {
            return Some(BinOp {
                kind,
                implicit: false,
                span: token.span.clone(),
            });
        }

        if token.kind.starts_primary() {
            let start = input.prev_token().map_or(token.span.start, |prev| prev.span.end);
            return Some(BinOp {
                kind: BinOpKind::Mul,
                implicit: true,
                span: start..token.span.start,
            });
        }

        None
    }

    /// Consumes the given operator, then parses the operand on its right-hand side.
    ///
    /// A sign directly followed by a binary-only operator, as in `x + * y`, is an [`InvalidSign`]
    /// error pointing at the sign. Any other missing operand is reported as a
    /// [`WrongArgumentCount`] error pointing at the operator.
    fn parse_rhs_operand(input: &mut Parser, op: &BinOp) -> Result<Expr, Error> {
        if op.implicit {
            return input.try_parse::<Primary>().map(Into::into);
        }

        input.try_parse::<BinOp>()?;
        match input.current_token().map(|token| token.kind) {
            Some(kind) if kind.starts_operand() => {},
            Some(kind) if kind.is_binary_only() && matches!(op.kind, BinOpKind::Add | BinOpKind::Sub) => {
                return Err(Error::new(vec![op.span.clone()], InvalidSign));
            },
            _ => return Err(Error::new(vec![op.span.clone()], WrongArgumentCount { op: op.kind })),
        }

        Unary::parse_or_lower(input)
    }

    /// Extends `rhs`, the operand just parsed after `op`, with any operators that bind more
    /// tightly than `op`.
    ///
    /// In `1 + 2 * 3`, the operand after `+` is `2`, but `*` binds more tightly, so `2` becomes
    /// the left operand of a nested [`Self::parse_expr`] call and `1 +` receives `2 * 3`. An
    /// operator of equal precedence also nests when it is right-associative, as in `2^3^2`.
    ///
    /// Implicit multiplication takes part in this like any other operator with the precedence of
    /// `*`: in `1 + 2x`, the right-hand-side `2` is completed to `2x`.
    fn complete_rhs(input: &mut Parser, op: &BinOp, mut rhs: Expr) -> Result<Expr, Error> {
        let precedence = op.precedence();

        while let Some(next_op) = Self::peek_op(input) {
            let binds_tighter = next_op.precedence() > precedence
                || (next_op.precedence() == precedence && next_op.associativity() == Associativity::Right);
            if !binds_tighter {
                // this operator has lower precedence, or equal precedence and left-associativity,
                // such as in `1 * 2 + 3` or `1 * 2 * 3`; it will be picked up by the caller
                break;
            }

            rhs = input.nested(|input| Self::parse_expr(input, rhs, next_op.precedence()))?;
        }

        Ok(rhs)
    }

    /// Parses a binary expression with the given left-hand-side, consuming every operator whose
    /// precedence is at least `precedence`.
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
        while let Some(op) = Self::peek_op(input) {
            if op.precedence() < precedence {
                break;
            }

            let rhs = Self::parse_rhs_operand(input, &op)?;
            let rhs = Self::complete_rhs(input, &op, rhs)?;

            let span = lhs.span().start..rhs.span().end;
            lhs = Expr::Binary(Self {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
                span,
            });
        }

        Ok(lhs)
    }
}

impl std::fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let precedence = self.op.precedence();
        let associativity = self.op.associativity();

        let lhs_needs_parens = self.lhs.precedence() < precedence
            || (self.lhs.precedence() == precedence && associativity == Associativity::Right);
        if lhs_needs_parens {
            write!(f, "({})", self.lhs)?;
        } else {
            write!(f, "{}", self.lhs)?;
        }

        write!(f, "{}", self.op.kind)?;

        // a sign on the right-hand side always applies to everything after it
        let rhs_needs_parens = !matches!(*self.rhs, Expr::Unary(_))
            && (self.rhs.precedence() < precedence
                || (self.rhs.precedence() == precedence && associativity == Associativity::Left));
        if rhs_needs_parens {
            write!(f, "({})", self.rhs)
        } else {
            write!(f, "{}", self.rhs)
        }
    }
}
