use algebra_error::Error;
use crate::{
    parser::{
        ast::{
            binary::Binary,
            call::Call,
            literal::{LitNum, LitSym},
            paren::Paren,
            unary::Unary,
        },
        builtins,
        error::{EmptyExpression, UnknownFunction},
        iter::ExprIter,
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{collections::BTreeSet, fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of algebraic expression.
///
/// An expression is any valid piece of text that can be evaluated to produce a number once its
/// variables are given values. Parenthesized groups are not represented in the tree; the shape of
/// the tree alone determines the order of operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A number literal, such as `2.5`.
    Number(LitNum),

    /// A variable or constant, such as `x` or `pi`.
    Variable(LitSym),

    /// A unary operation, such as `-x`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),

    /// A function call, such as `sin(x)`.
    Call(Call),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Number(num) => num.span.clone(),
            Expr::Variable(sym) => sym.span.clone(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
            Expr::Call(call) => call.span(),
        }
    }

    /// Returns the precedence of the expression's outermost operation. This determines whether
    /// the expression needs to be parenthesized when it is displayed as an operand.
    pub fn precedence(&self) -> Precedence {
        match self {
            Expr::Number(_) | Expr::Variable(_) | Expr::Call(_) => Precedence::Primary,
            Expr::Unary(unary) => unary.op.precedence(),
            Expr::Binary(binary) => binary.op.precedence(),
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the names of the variables used in the expression, excluding builtin constants.
    pub fn free_variables(&self) -> BTreeSet<&str> {
        self.post_order_iter()
            .filter_map(|expr| match expr {
                Expr::Variable(sym) if !builtins::is_constant(&sym.name) => Some(sym.name.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = Unary::parse_or_lower(input)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Number(num) => write!(f, "{}", num),
            Expr::Variable(sym) => write!(f, "{}", sym),
            Expr::Unary(unary) => write!(f, "{}", unary),
            Expr::Binary(binary) => write!(f, "{}", binary),
            Expr::Call(call) => write!(f, "{}", call),
        }
    }
}

/// Represents a primary expression in the tree. A primary expression is an expression that is
/// not made up of operators applied to other expressions, or is a group that should be parsed as
/// a single unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    /// A number literal.
    Number(LitNum),

    /// A variable or constant.
    Variable(LitSym),

    /// A function call.
    Call(Call),

    /// A parenthesized group.
    Paren(Paren),
}

impl Primary {
    /// Returns the span of the primary expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Primary::Number(num) => num.span.clone(),
            Primary::Variable(sym) => sym.span.clone(),
            Primary::Call(call) => call.span(),
            Primary::Paren(paren) => paren.span(),
        }
    }

    /// Parses a name, which is a function call if the name is a builtin function, or a variable
    /// otherwise.
    ///
    /// A name directly followed by a group is a variable multiplied by the group only if it looks
    /// like a variable (see [`Parser::is_variable_like`]). Otherwise, it is treated as a call to a
    /// function that does not exist.
    fn parse_name(input: &mut Parser) -> Result<Self, Error> {
        let Some(token) = input.current_token() else {
            return Err(input.error(EmptyExpression));
        };

        if builtins::is_function(token.lexeme) {
            return input.try_parse::<Call>().map(Primary::Call);
        }

        let followed_by_group = input.peek_token()
            .map_or(false, |next| next.kind == TokenKind::OpenParen);
        if followed_by_group && !input.is_variable_like(token.lexeme) {
            return Err(input.error(UnknownFunction {
                name: token.lexeme.to_owned(),
                missing_argument: false,
                suggestions: builtins::suggestions(token.lexeme),
            }));
        }

        input.try_parse::<LitSym>().map(Primary::Variable)
    }
}

impl Parse for Primary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let Some(kind) = input.current_token().map(|token| token.kind) else {
            return Err(input.error(EmptyExpression));
        };

        match kind {
            TokenKind::Number => input.try_parse::<LitNum>().map(Primary::Number),
            TokenKind::Name => Self::parse_name(input),
            TokenKind::OpenParen => input.try_parse::<Paren>().map(Primary::Paren),
            _ => Err(input.error(EmptyExpression)),
        }
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Number(num) => Self::Number(num),
            Primary::Variable(sym) => Self::Variable(sym),
            Primary::Call(call) => Self::Call(call),
            Primary::Paren(paren) => paren.into_innermost(),
        }
    }
}
