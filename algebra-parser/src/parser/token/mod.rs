pub mod op;

use algebra_error::Error;
use crate::{
    parser::{error::UnexpectedToken, Parser, Parse},
    tokenizer::TokenKind,
};
use std::ops::Range;

/// Generates a unit struct for each token kind, as well as a simple [`Parse`] implementation for
/// each token kind. This enables the parser to use and request token kinds as a type, which is
/// much more ergonomic than using a string.
macro_rules! token_kinds {
    ($($name:ident)*) => {
        $(
            #[derive(Clone, Debug, PartialEq)]
            pub(crate) struct $name {
                pub(crate) lexeme: String,
                pub(crate) span: Range<usize>,
            }

            impl $name {
                /// The token kind this type represents.
                pub(crate) const KIND: TokenKind = TokenKind::$name;
            }

            impl Parse for $name {
                fn parse(input: &mut Parser) -> Result<Self, Error> {
                    let token = input.next_token()?;

                    if token.kind == TokenKind::$name {
                        Ok(Self {
                            lexeme: token.lexeme.to_owned(),
                            span: token.span,
                        })
                    } else {
                        Err(Error::new(vec![token.span], UnexpectedToken {
                            expected: &[TokenKind::$name],
                            found: token.kind,
                        }))
                    }
                }
            }
        )*
    };
}

token_kinds!(
    OpenParen
    CloseParen
    Name
    Number
);
