pub mod ast;
pub mod builtins;
pub mod error;
pub mod iter;
pub mod token;

use algebra_error::{Error, ErrorKind};
use error::{EmptyExpression, ExpressionTooLong, MismatchedBrackets, NestingTooDeep, UnexpectedToken};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// The maximum number of nested groups, signs and function calls the parser will descend into.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The maximum number of tokens in an expression. This also bounds the depth of the tree built
/// from long chains of operators, such as `x + x + ... + x`.
pub const MAX_TOKENS: usize = 1024;

/// A high-level parser for algebraic expressions. This is the type to use to parse an arbitrary
/// piece of text into an abstract syntax tree.
#[derive(Debug)]
pub struct Parser<'source> {
    /// The tokens of the source, in order.
    tokens: Box<[Token<'source>]>,

    /// The error produced while tokenizing the source, if any. It is reported by
    /// [`Parser::try_parse_full`] before any parsing is attempted.
    tokenize_error: Option<Error>,

    /// Index of the token the parser will consume next.
    cursor: usize,

    /// The number of groups, signs and function calls currently being parsed.
    depth: usize,

    /// Multi-letter names that should be treated as variables, even when followed by a
    /// parenthesized group.
    variables: Vec<String>,
}

impl<'source> Parser<'source> {
    /// Tokenizes the source and prepares to parse it.
    ///
    /// A tokenization error is held back until [`Parser::try_parse_full`] is called.
    pub fn new(source: &'source str) -> Self {
        let (tokens, tokenize_error) = match tokenize_complete(source) {
            Ok(tokens) if tokens.len() > MAX_TOKENS => {
                let span = tokens[MAX_TOKENS].span.clone();
                (Box::default(), Some(Error::new(vec![span], ExpressionTooLong { max_tokens: MAX_TOKENS })))
            },
            Ok(tokens) => (tokens, None),
            Err(err) => (Box::default(), Some(err)),
        };

        Self {
            tokens,
            tokenize_error,
            cursor: 0,
            depth: 0,
            variables: Vec::new(),
        }
    }

    /// Declares names that are variables. A declared name followed by a parenthesized group is
    /// parsed as the variable multiplied by the group instead of as a function call.
    pub fn with_variables<I, S>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables.extend(variables.into_iter().map(Into::into));
        self
    }

    /// Returns true if the given name can be used as a variable directly before a parenthesized
    /// group: a single letter (optionally followed by digits), or a declared variable.
    pub fn is_variable_like(&self, name: &str) -> bool {
        let mut chars = name.chars();
        let single_letter = chars.next().map_or(false, |c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_digit());
        single_letter || self.variables.iter().any(|var| var == name)
    }

    /// Wraps the error kind in an [`Error`] spanning the current token (or the end of input).
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// An empty span just past the last token.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// The span of the current token. Past the last token, this is [`Parser::eof_span`].
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// The token just consumed, if any.
    pub fn prev_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor.checked_sub(1)?)
    }

    /// The token that will be consumed next, without consuming it.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the token after the current token. The cursor is not moved.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor + 1)
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an [`EmptyExpression`] error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                Ok(token.clone())
            },
            None => Err(self.error(EmptyExpression)),
        }
    }

    /// Runs the given parsing function one nesting level deeper. Returns a [`NestingTooDeep`]
    /// error instead if the maximum nesting depth has been reached.
    pub fn nested<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(NestingTooDeep { max_depth: MAX_NESTING_DEPTH }));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Parses a `T` starting at the cursor. On failure the cursor is restored to where it was,
    /// so callers can try another rule.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        match T::parse(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Parses the whole source as a single `T`. Leftover tokens are an error.
    ///
    /// Tokenization errors and unbalanced brackets are reported before any parsing happens.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        if let Some(err) = self.tokenize_error.take() {
            return Err(err);
        }
        check_brackets(&self.tokens)?;

        let value = T::parse(self)?;
        match self.current_token() {
            None => Ok(value),
            Some(token) if token.kind == TokenKind::CloseParen => {
                Err(self.error(MismatchedBrackets { opening: false }))
            },
            Some(token) => {
                let found = token.kind;
                Err(self.error(UnexpectedToken { expected: &[], found }))
            },
        }
    }
}

/// Checks that every bracket in the token stream is matched.
///
/// A close bracket with no matching open bracket is reported at that close bracket. Otherwise,
/// the outermost open bracket left unclosed is reported.
fn check_brackets(tokens: &[Token]) -> Result<(), Error> {
    let mut open = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::OpenParen => open.push(token.span.clone()),
            TokenKind::CloseParen => {
                if open.pop().is_none() {
                    return Err(Error::new(vec![token.span.clone()], MismatchedBrackets { opening: false }));
                }
            },
            _ => {},
        }
    }

    match open.into_iter().next() {
        Some(span) => Err(Error::new(vec![span], MismatchedBrackets { opening: true })),
        None => Ok(()),
    }
}

/// A syntax node that can be read from a [`Parser`].
pub trait Parse: Sized {
    /// Reads the node at the cursor of `input`, moving the cursor past it.
    ///
    /// Implementations call [`Parser::try_parse`] for alternatives that may fail, so that a
    /// failed alternative does not consume tokens.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}

/// How tightly an operation binds its operands. Variants are declared loosest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// `+` and `-` between terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors. Implicit
    /// multiplication shares this precedence.
    Factor,

    /// Precedence of a unary sign (`-` or `+`).
    Neg,

    /// `^`.
    Exp,

    /// Precedence of numbers, variables, function calls and parenthesized groups.
    Primary,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::{binary::Binary, call::Call, expr::Expr, literal::{LitNum, LitSym}, unary::Unary};
    use error::{InvalidSign, UnknownFunction, UnknownToken, WrongArgumentCount};
    use token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};

    fn parse(source: &str) -> Result<Expr, Error> {
        Parser::new(source).try_parse_full::<Expr>()
    }

    fn display(source: &str) -> String {
        parse(source).unwrap().to_string()
    }

    #[test]
    fn literal_int() {
        assert_eq!(parse("16").unwrap(), Expr::Number(LitNum {
            value: 16.0,
            span: 0..2,
        }));
    }

    #[test]
    fn literal_float() {
        assert_eq!(parse("3.14").unwrap(), Expr::Number(LitNum {
            value: 3.14,
            span: 0..4,
        }));
    }

    #[test]
    fn literal_exponent() {
        assert_eq!(parse("2.5e-3").unwrap(), Expr::Number(LitNum {
            value: 0.0025,
            span: 0..6,
        }));
    }

    #[test]
    fn literal_symbol() {
        assert_eq!(parse("x1").unwrap(), Expr::Variable(LitSym {
            name: "x1".to_string(),
            span: 0..2,
        }));
    }

    #[test]
    fn unary_left_of_exp() {
        let expr = parse("-x^2").unwrap();
        assert_eq!(expr, Expr::Unary(Unary {
            operand: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Variable(LitSym { name: "x".to_string(), span: 1..2 })),
                op: BinOp { kind: BinOpKind::Exp, implicit: false, span: 2..3 },
                rhs: Box::new(Expr::Number(LitNum { value: 2.0, span: 3..4 })),
                span: 1..4,
            })),
            op: UnaryOp { kind: UnaryOpKind::Neg, span: 0..1 },
            span: 0..4,
        }));
    }

    #[test]
    fn implicit_multiplication() {
        let expr = parse("2x").unwrap();
        assert_eq!(expr, Expr::Binary(Binary {
            lhs: Box::new(Expr::Number(LitNum { value: 2.0, span: 0..1 })),
            op: BinOp { kind: BinOpKind::Mul, implicit: true, span: 1..1 },
            rhs: Box::new(Expr::Variable(LitSym { name: "x".to_string(), span: 1..2 })),
            span: 0..2,
        }));
    }

    #[test]
    fn function_call() {
        let expr = parse("sin(x)").unwrap();
        assert_eq!(expr, Expr::Call(Call {
            name: LitSym { name: "sin".to_string(), span: 0..3 },
            arg: Box::new(Expr::Variable(LitSym { name: "x".to_string(), span: 4..5 })),
            span: 0..6,
            paren_span: 3..6,
        }));
    }

    #[test]
    fn precedence() {
        assert_eq!(display("1 + 2 * 3"), "1+2*3");
        assert_eq!(display("(1 + 2) * 3"), "(1+2)*3");
        assert_eq!(display("1 - (2 - 3)"), "1-(2-3)");
        assert_eq!(display("1 - 2 - 3"), "1-2-3");
        assert_eq!(display("8 / 4 / 2"), "8/4/2");
        assert_eq!(display("8 / (4 * 2)"), "8/(4*2)");
    }

    #[test]
    fn exponent_right_associative() {
        assert_eq!(display("2^3^2"), "2^3^2");
        assert_eq!(display("(2^3)^2"), "(2^3)^2");
        assert_eq!(display("x^(3(x + 6))^9"), "x^(3*(x+6))^9");
    }

    #[test]
    fn signed_exponent() {
        assert_eq!(display("2^-x"), "2^-x");
        assert_eq!(display("(-x)^2"), "(-x)^2");
        assert_eq!(display("-x^2"), "-x^2");
    }

    #[test]
    fn signs_after_operators() {
        assert_eq!(display("x - -y"), "x--y");
        assert_eq!(display("x * -y"), "x*-y");
        assert_eq!(display("+x"), "+x");
        assert_eq!(display("-(x + 1)"), "-(x+1)");
    }

    #[test]
    fn implicit_multiplication_forms() {
        assert_eq!(display("2x y"), "2*x*y");
        assert_eq!(display("2(x + 1)"), "2*(x+1)");
        assert_eq!(display("(x + 1)(x - 1)"), "(x+1)*(x-1)");
        assert_eq!(display("x(x + 1)"), "x*(x+1)");
        assert_eq!(display("1/2x"), "1/2*x");
        assert_eq!(display("3x^2"), "3*x^2");
        assert_eq!(display("2sin(x)cos(x)"), "2*sin(x)*cos(x)");
    }

    #[test]
    fn declared_variable_before_group() {
        let expr = Parser::new("ab(c + 1)")
            .with_variables(["ab"])
            .try_parse_full::<Expr>()
            .unwrap();
        assert_eq!(expr.to_string(), "ab*(c+1)");
    }

    #[test]
    fn nested_calls() {
        assert_eq!(display("sqrt(abs(-x))"), "sqrt(abs(-x))");
        assert_eq!(display("log(10)^2"), "log(10)^2");
    }

    #[test]
    fn unclosed_bracket() {
        let err = parse("sin(2x) + cos(").unwrap_err();
        assert_eq!(err.downcast_ref::<MismatchedBrackets>(), Some(&MismatchedBrackets { opening: true }));
        assert_eq!(err.spans, vec![13..14]);
        assert_eq!(
            err.kind.message(),
            "Mismatched brackets: Open bracket without a close bracket found",
        );
    }

    #[test]
    fn unopened_bracket() {
        let err = parse("x + 1)").unwrap_err();
        assert_eq!(err.downcast_ref::<MismatchedBrackets>(), Some(&MismatchedBrackets { opening: false }));
        assert_eq!(err.offset(), 5);
    }

    #[test]
    fn missing_exponent() {
        let err = parse("x^").unwrap_err();
        assert_eq!(err.downcast_ref::<WrongArgumentCount>(), Some(&WrongArgumentCount { op: BinOpKind::Exp }));
        assert_eq!(err.kind.message(), "Syntax Error: Operator '^' requires two arguments");
    }

    #[test]
    fn missing_subtrahend() {
        let err = parse("x-").unwrap_err();
        assert_eq!(err.downcast_ref::<WrongArgumentCount>(), Some(&WrongArgumentCount { op: BinOpKind::Sub }));
        assert_eq!(err.offset(), 1);
    }

    #[test]
    fn missing_left_operand() {
        let err = parse("*x").unwrap_err();
        assert_eq!(err.downcast_ref::<WrongArgumentCount>(), Some(&WrongArgumentCount { op: BinOpKind::Mul }));

        let err = parse("(/2)").unwrap_err();
        assert_eq!(err.downcast_ref::<WrongArgumentCount>(), Some(&WrongArgumentCount { op: BinOpKind::Div }));
    }

    #[test]
    fn sign_followed_by_operator() {
        let err = parse("x + * y").unwrap_err();
        assert!(err.is::<InvalidSign>());
        assert_eq!(err.spans, vec![2..3]);

        let err = parse("x - ^ 2").unwrap_err();
        assert!(err.is::<InvalidSign>());
        assert_eq!(err.offset(), 2);

        assert!(parse("(x -/ y)").unwrap_err().is::<InvalidSign>());
    }

    #[test]
    fn operator_followed_by_operator() {
        let err = parse("x * / y").unwrap_err();
        assert_eq!(err.downcast_ref::<WrongArgumentCount>(), Some(&WrongArgumentCount { op: BinOpKind::Mul }));
        assert_eq!(err.offset(), 2);
    }

    #[test]
    fn lonely_sign() {
        let err = parse("(-)").unwrap_err();
        assert!(err.is::<InvalidSign>());
        assert_eq!(err.offset(), 1);
        assert_eq!(err.kind.message(), "Syntax Error: Found a + or - in an invalid location");
    }

    #[test]
    fn sign_before_operator() {
        assert!(parse("x*-").unwrap_err().is::<InvalidSign>());
        assert!(parse("-*x").unwrap_err().is::<InvalidSign>());
    }

    #[test]
    fn unknown_function() {
        let err = parse("sine(x)").unwrap_err();
        assert_eq!(err.downcast_ref::<UnknownFunction>(), Some(&UnknownFunction {
            name: "sine".to_string(),
            missing_argument: false,
            suggestions: vec!["sin".to_string(), "sinh".to_string()],
        }));
        assert_eq!(err.spans, vec![0..4]);
    }

    #[test]
    fn function_without_argument() {
        let err = parse("2 sin x").unwrap_err();
        assert_eq!(err.downcast_ref::<UnknownFunction>(), Some(&UnknownFunction {
            name: "sin".to_string(),
            missing_argument: true,
            suggestions: Vec::new(),
        }));
        assert!(parse("cos").unwrap_err().is::<UnknownFunction>());
    }

    #[test]
    fn unknown_token() {
        let err = parse("2 # 3").unwrap_err();
        assert!(err.is::<UnknownToken>());
        assert_eq!(err.offset(), 2);
    }

    #[test]
    fn empty_expression() {
        assert!(parse("").unwrap_err().is::<EmptyExpression>());
        assert!(parse("   ").unwrap_err().is::<EmptyExpression>());

        let err = parse("2()").unwrap_err();
        assert!(err.is::<EmptyExpression>());
        assert_eq!(err.offset(), 2);
    }

    #[test]
    fn nesting_cap() {
        let ok = format!("{}x{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(parse(&ok).unwrap().to_string(), "x");

        let deep = format!("{}x{}", "(".repeat(MAX_NESTING_DEPTH + 1), ")".repeat(MAX_NESTING_DEPTH + 1));
        let err = parse(&deep).unwrap_err();
        assert_eq!(err.downcast_ref::<NestingTooDeep>(), Some(&NestingTooDeep { max_depth: MAX_NESTING_DEPTH }));

        let signs = format!("{}x", "-".repeat(MAX_NESTING_DEPTH + 1));
        assert!(parse(&signs).unwrap_err().is::<NestingTooDeep>());
    }

    #[test]
    fn token_cap() {
        let long = vec!["x"; MAX_TOKENS].join("+");
        let err = parse(&long).unwrap_err();
        assert_eq!(err.downcast_ref::<ExpressionTooLong>(), Some(&ExpressionTooLong { max_tokens: MAX_TOKENS }));

        let short = vec!["x"; 100].join("+");
        assert!(parse(&short).is_ok());
    }

    #[test]
    fn nested_exponents() {
        let tower = vec!["x"; MAX_NESTING_DEPTH * 2].join("^");
        assert!(parse(&tower).unwrap_err().is::<NestingTooDeep>());
    }
}
