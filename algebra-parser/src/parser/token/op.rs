//! Operator tokens: the signs `+`/`-` in prefix position, and the five binary operators.

use algebra_error::Error;
use crate::{
    parser::{
        error::UnexpectedToken,
        Associativity,
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which sign a [`UnaryOp`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    /// Negation, `-x`.
    Neg,

    /// A leading plus sign, `+x`, which leaves its operand unchanged.
    Pos,
}

impl UnaryOpKind {
    /// Signs bind tighter than `*` and looser than `^`, so `-x^2` is `-(x^2)`.
    pub fn precedence(&self) -> Precedence {
        Precedence::Neg
    }
}

impl fmt::Display for UnaryOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neg => write!(f, "-"),
            Self::Pos => write!(f, "+"),
        }
    }
}

/// A sign in prefix position, with its location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnaryOp {
    /// `-` or `+`.
    pub kind: UnaryOpKind,

    /// Where the sign appears in the source.
    pub span: Range<usize>,
}

impl UnaryOp {
    /// See [`UnaryOpKind::precedence`].
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }
}

impl Parse for UnaryOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        let kind = match token.kind {
            TokenKind::Sub => Ok(UnaryOpKind::Neg),
            TokenKind::Add => Ok(UnaryOpKind::Pos),
            _ => Err(Error::new(vec![token.span.clone()], UnexpectedToken {
                expected: &[TokenKind::Add, TokenKind::Sub],
                found: token.kind,
            })),
        }?;

        Ok(Self {
            kind,
            span: token.span,
        })
    }
}

/// Which of the five binary operators a [`BinOp`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Exp,
    Mul,
    Div,
    Add,
    Sub,
}

impl BinOpKind {
    /// `^` binds tightest, then `*` and `/`, then `+` and `-`.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Exp => Precedence::Exp,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
        }
    }

    /// Only `^` groups to the right: `2^3^2` is `2^(3^2)`.
    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            Self::Mul | Self::Div | Self::Add | Self::Sub => Associativity::Left,
        }
    }

    /// Maps an operator token to its operator. Other tokens give [`None`].
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Exp => Some(Self::Exp),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            _ => None,
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exp => write!(f, "^"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
        }
    }
}

/// A binary operator with its location. Implicit multiplications are recorded here too.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinOp {
    /// The operator.
    pub kind: BinOpKind,

    /// True for the `*` the parser inserts between adjacent operands, as in `2x`.
    pub implicit: bool,

    /// Where the operator appears in the source. An implicit operator has an empty span
    /// between its operands.
    pub span: Range<usize>,
}

impl BinOp {
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }

    pub fn associativity(&self) -> Associativity {
        self.kind.associativity()
    }
}

impl Parse for BinOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        let kind = BinOpKind::from_token(token.kind).ok_or_else(|| {
            Error::new(vec![token.span.clone()], UnexpectedToken {
                expected: &[
                    TokenKind::Exp,
                    TokenKind::Mul,
                    TokenKind::Div,
                    TokenKind::Add,
                    TokenKind::Sub,
                ],
                found: token.kind,
            })
        })?;

        Ok(Self {
            kind,
            implicit: false,
            span: token.span,
        })
    }
}
