pub mod token;

use algebra_error::Error;
use crate::parser::error::UnknownToken;
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
///
/// Returns an [`UnknownToken`] error pointing at the first character that does not belong to any
/// kind of token.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push(Token {
                span: lexer.span(),
                kind,
                lexeme: lexer.slice(),
            }),
            Err(()) => return Err(Error::new(vec![lexer.span()], UnknownToken {
                lexeme: lexer.slice().to_owned(),
            })),
        }
    }

    Ok(tokens.into_boxed_slice())
}
