use algebra_error::Error;
use crate::parser::{
    ast::{expr::Expr, literal::LitSym, paren::Paren},
    builtins,
    error::UnknownFunction,
    token::OpenParen,
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A call to a builtin function, such as `sin(2x)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The name of the function to call.
    pub name: LitSym,

    /// The argument to the function.
    pub arg: Box<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,

    /// The span of the parentheses that surround the argument.
    pub paren_span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<LitSym>()?;
        let unknown = |missing_argument| Error::new(vec![name.span.clone()], UnknownFunction {
            name: name.name.clone(),
            missing_argument,
            suggestions: if missing_argument {
                Vec::new()
            } else {
                builtins::suggestions(&name.name)
            },
        });

        if !builtins::is_function(&name.name) {
            return Err(unknown(false));
        }

        // a call must be immediately followed by its bracketed argument
        if input.current_token().map_or(true, |token| token.kind != OpenParen::KIND) {
            return Err(unknown(true));
        }

        let paren = input.nested(Paren::parse)?;
        let span = name.span.start..paren.span.end;
        let paren_span = paren.span();

        Ok(Self {
            name,
            arg: Box::new(paren.into_innermost()),
            span,
            paren_span,
        })
    }
}

impl std::fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.name, self.arg)
    }
}
