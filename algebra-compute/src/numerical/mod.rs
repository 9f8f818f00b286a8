//! Numerical evaluation of expressions over the real numbers.

pub mod builtin;
pub mod ctxt;
pub mod error;
pub mod eval;
