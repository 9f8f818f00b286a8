use algebra_error::Error;
use crate::parser::{
    error::UnknownToken,
    token::{Name, Number},
    Parse,
    Parser,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number literal, such as `3`, `2.5` or `1e-3`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the number literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let num = input.try_parse::<Number>()?;
        let value = num.lexeme.parse::<f64>()
            .map_err(|_| Error::new(vec![num.span.clone()], UnknownToken {
                lexeme: num.lexeme.clone(),
            }))?;

        Ok(Self { value, span: num.span })
    }
}

impl std::fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A symbol / identifier literal, such as `x`, `x1` or `sin`. Symbols are used to represent
/// variables and function names.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        input
            .try_parse::<Name>()
            .map(|name| Self {
                name: name.lexeme,
                span: name.span,
            })
    }
}

impl std::fmt::Display for LitSym {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
