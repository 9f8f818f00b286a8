use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// Whitespace is skipped by the tokenizer and never produces a token.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// A variable or function name: letters, optionally followed by digits, such as `x` or `x1`.
    #[regex(r"[a-zA-Z]+[0-9]*")]
    Name,

    /// A decimal number with an optional exponent, such as `3`, `2.5`, `.5` or `1e-3`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    Number,
}

impl TokenKind {
    /// Returns true if the token is a `+` or `-` sign, which can be used as either a unary or
    /// binary operator.
    pub fn is_sign(self) -> bool {
        matches!(self, TokenKind::Add | TokenKind::Sub)
    }

    /// Returns true if the token is an operator that can only be used as a binary operator.
    pub fn is_binary_only(self) -> bool {
        matches!(self, TokenKind::Mul | TokenKind::Div | TokenKind::Exp)
    }

    /// Returns true if the token can begin a primary expression (a number, a name, or a
    /// parenthesized expression).
    pub fn starts_primary(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Name | TokenKind::OpenParen)
    }

    /// Returns true if the token can begin an operand, which is a primary expression optionally
    /// preceded by a sign.
    pub fn starts_operand(self) -> bool {
        self.starts_primary() || self.is_sign()
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}
