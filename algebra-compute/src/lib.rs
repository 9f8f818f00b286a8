//! Evaluation of parsed algebraic expressions to real numbers, along with the pieces needed to
//! compare expressions numerically: random variable bindings and a tolerance check.
//!
//! ```
//! use algebra_compute::numerical::{ctxt::Ctxt, eval::Eval};
//! use algebra_parser::parser::{ast::Expr, Parser};
//!
//! let expr = Parser::new("3x^2 + 1").try_parse_full::<Expr>().unwrap();
//! let ctxt = Ctxt::from_iter([("x", 2.0)]);
//! assert_eq!(expr.eval(&ctxt).unwrap(), 13.0);
//! ```

pub mod approx;
pub mod consts;
pub mod funcs;
pub mod numerical;
pub mod trial;
