//! Lexer and parser for the algebraic expressions typed by learners and question authors.
//!
//! ```
//! use algebra_parser::parser::{ast::Expr, Parser};
//!
//! let expr = Parser::new("2x + 1").try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.to_string(), "2*x+1");
//! ```

pub mod parser;
pub mod tokenizer;
