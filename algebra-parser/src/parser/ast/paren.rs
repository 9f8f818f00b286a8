use algebra_error::Error;
use crate::parser::{
    ast::expr::Expr,
    error::MismatchedBrackets,
    token::{CloseParen, OpenParen},
    Parse,
    Parser,
};
use std::ops::Range;

/// A parenthesized expression, such as `(1 + 2)`.
///
/// Groups only steer how an expression is parsed; they are not kept in the tree. Use
/// [`Paren::into_innermost`] to get the grouped expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Paren {
    /// The inner expression.
    pub expr: Box<Expr>,

    /// The region of the source code that this parenthesized expression was parsed from,
    /// including the brackets.
    pub span: Range<usize>,
}

impl Paren {
    /// Returns the span of the parenthesized expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the innermost expression in the parenthesized expression.
    pub fn into_innermost(self) -> Expr {
        *self.expr
    }
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open_paren = input.try_parse::<OpenParen>()?;
        let expr = input.nested(Expr::parse)?;
        let close_paren = input.try_parse::<CloseParen>()
            .map_err(|_| Error::new(vec![open_paren.span.clone()], MismatchedBrackets { opening: true }))?;

        Ok(Self {
            expr: Box::new(expr),
            span: open_paren.span.start..close_paren.span.end,
        })
    }
}
