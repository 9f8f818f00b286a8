//! All built-in functions that can be called in an expression.
//!
//! Each function is implemented as a unit `struct` with an associated `eval_static` method. This
//! method can be used to evaluate the function in Rust code directly. The [`Builtin`] trait is
//! also implemented for each function, enabling the function to be looked up by name and
//! evaluated at runtime.
//!
//! # Example
//!
//! ```
//! use algebra_compute::consts::PI;
//! use algebra_compute::funcs::{self, trigonometry::Sin};
//! use algebra_compute::numerical::builtin::Builtin;
//!
//! // evaluate sin(pi / 2) using `eval_static`
//! assert_eq!(Sin::eval_static(PI / 2.0), Ok(1.0));
//!
//! // evaluate sin(pi / 2) by name
//! let sin = funcs::get("sin").unwrap();
//! assert_eq!(sin.eval(PI / 2.0), Ok(1.0));
//! ```

/// Build functions of one real argument. Each function is given as its name, the name of the
/// struct to generate, and a closure `f64 -> Result<f64, BuiltinError>`.
macro_rules! build_unary {
    ($($(#[$meta:meta])* $name:literal $upname:ident; $func:expr),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub struct $upname;

            impl $upname {
                pub fn eval_static(n: f64) -> Result<f64, crate::numerical::builtin::BuiltinError> {
                    #[allow(clippy::redundant_closure_call)]
                    ($func)(n)
                }
            }

            impl crate::numerical::builtin::Builtin for $upname {
                fn name(&self) -> &'static str {
                    $name
                }

                fn eval(&self, arg: f64) -> Result<f64, crate::numerical::builtin::BuiltinError> {
                    Self::eval_static(arg)
                }
            }
        )*
    };
}

pub mod miscellaneous;
pub mod power;
pub mod trigonometry;

use crate::numerical::builtin::Builtin;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Every builtin function, keyed by the name used in expressions.
static BUILTINS: Lazy<HashMap<&'static str, Box<dyn Builtin>>> = Lazy::new(all);

/// Builds the table of builtin functions, aliases included.
pub fn all() -> HashMap<&'static str, Box<dyn Builtin>> {
    use miscellaneous::*;
    use power::*;
    use trigonometry::*;

    macro_rules! build {
        ($($name:literal $upname:ident),* $(,)?) => {
            [
                $(
                    ($name, Box::new($upname) as Box<dyn Builtin>),
                )*
            ]
                .into_iter()
                .collect()
        };
    }

    build! {
        "abs" Abs,
        "sqrt" Sqrt,
        "exp" Exp,
        "ln" Ln,
        "log" Log,
        "sin" Sin,
        "cos" Cos,
        "tan" Tan,
        "sec" Sec,
        "csc" Csc,
        "cosec" Csc, // intentional alias for csc
        "cot" Cot,
        "asin" Asin,
        "acos" Acos,
        "atan" Atan,
        "arcsin" Asin, // intentional alias for asin
        "arccos" Acos, // intentional alias for acos
        "arctan" Atan, // intentional alias for atan
        "sinh" Sinh,
        "cosh" Cosh,
        "tanh" Tanh,
        "asinh" Asinh,
        "acosh" Acosh,
        "atanh" Atanh,
    }
}

/// Returns the builtin function with the given name, if there is one.
pub fn get(name: &str) -> Option<&'static dyn Builtin> {
    BUILTINS.get(name).map(|builtin| &**builtin)
}

#[cfg(test)]
mod tests {
    use algebra_parser::parser::builtins::FUNCTIONS;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn every_parsed_function_can_be_evaluated() {
        for sig in FUNCTIONS {
            assert!(get(sig.name).is_some(), "no implementation for `{}`", sig.name);
        }
        assert_eq!(all().len(), FUNCTIONS.len());
    }

    #[test]
    fn aliases_share_an_implementation() {
        assert_eq!(get("cosec").map(|f| f.name()), Some("csc"));
        assert_eq!(get("arctan").map(|f| f.name()), Some("atan"));
    }
}
