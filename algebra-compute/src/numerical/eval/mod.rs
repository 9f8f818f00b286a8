mod binary;
mod call;
mod literal;
mod unary;

use algebra_error::Error;
use algebra_parser::parser::ast::expr::Expr;
use std::ops::Range;
use super::{ctxt::Ctxt, error::DomainError};

/// Any type that can be evaluated to produce a real number.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    ///
    /// A successful evaluation always produces a finite number.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a value, using the default context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Default::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Expr::Number(num) => num.eval(ctxt),
            Expr::Variable(sym) => sym.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Binary(binary) => binary.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
        }
    }
}

/// Returns the value if it is finite, or a [`DomainError`] pointing at the given span otherwise.
fn finite(value: f64, span: Range<usize>) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::new(vec![span], DomainError {
            reason: "the result is too large to represent".to_string(),
        }))
    }
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use algebra_parser::parser::Parser;
    use assert_float_eq::assert_float_absolute_eq;
    use crate::consts;
    use crate::numerical::error::{DivisionByZero, UnboundVariable};
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(source: &str) -> Expr {
        Parser::new(source).try_parse_full::<Expr>().unwrap()
    }

    fn eval_with(source: &str, vars: &[(&str, f64)]) -> Result<f64, Error> {
        parse(source).eval(&vars.iter().copied().collect())
    }

    #[test]
    fn binary_expr() {
        assert_eq!(parse("1 + 2").eval_default().unwrap(), 3.0);
    }

    #[test]
    fn binary_expr_2() {
        assert_eq!(parse("1 + 2 * 3").eval_default().unwrap(), 7.0);
    }

    #[test]
    fn binary_and_unary() {
        assert_eq!(parse("3 * -5 / 4 + 6").eval_default().unwrap(), 2.25);
    }

    #[test]
    fn parenthesized() {
        assert_eq!(parse("((1 + 9) / 5) * 3").eval_default().unwrap(), 6.0);
    }

    #[test]
    fn left_associative() {
        assert_eq!(parse("10 - 4 - 3").eval_default().unwrap(), 3.0);
        assert_eq!(parse("16 / 4 / 2").eval_default().unwrap(), 2.0);
    }

    #[test]
    fn exponent_binds_tighter_than_sign() {
        assert_eq!(parse("-2^2").eval_default().unwrap(), -4.0);
        assert_eq!(parse("(-2)^2").eval_default().unwrap(), 4.0);
        assert_eq!(parse("2^3^2").eval_default().unwrap(), 512.0);
        assert_eq!(parse("2^-1").eval_default().unwrap(), 0.5);
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(eval_with("2x(x + 1)", &[("x", 3.0)]).unwrap(), 24.0);
        assert_eq!(eval_with("1/2x", &[("x", 4.0)]).unwrap(), 2.0);
    }

    #[test]
    fn variables_shadow_constants() {
        assert_float_absolute_eq!(parse("2pi").eval_default().unwrap(), 2.0 * consts::PI, 1e-12);
        assert_eq!(eval_with("2e", &[("e", 5.0)]).unwrap(), 10.0);
    }

    #[test]
    fn degree_to_radian() {
        let value = parse("90 * 2 * pi / 360").eval_default().unwrap();
        assert_float_absolute_eq!(value, consts::PI / 2.0, 1e-12);
    }

    #[test]
    fn functions() {
        assert_float_absolute_eq!(eval_with("sin(x)^2 + cos(x)^2", &[("x", 1.3)]).unwrap(), 1.0, 1e-12);
        assert_float_absolute_eq!(parse("ln(e^3)").eval_default().unwrap(), 3.0, 1e-12);
        assert_float_absolute_eq!(parse("log(1000)").eval_default().unwrap(), 3.0, 1e-12);
        assert_eq!(parse("sqrt(16)").eval_default().unwrap(), 4.0);
        assert_eq!(parse("abs(-2.5)").eval_default().unwrap(), 2.5);
    }

    #[test]
    fn unbound_variable() {
        let err = eval_with("x + yy", &[("x", 1.0), ("y", 2.0)]).unwrap_err();
        assert_eq!(err.downcast_ref::<UnboundVariable>(), Some(&UnboundVariable {
            name: "yy".to_string(),
            suggestions: vec!["y".to_string()],
        }));
        assert_eq!(err.spans, vec![4..6]);
    }

    #[test]
    fn division_by_zero() {
        let err = eval_with("1 / (x - 2)", &[("x", 2.0)]).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.spans, vec![2..3, 5..10]);

        assert!(parse("0^-1").eval_default().unwrap_err().is::<DivisionByZero>());
        assert!(parse("csc(0)").eval_default().unwrap_err().is::<DivisionByZero>());
        assert!(parse("cot(0)").eval_default().unwrap_err().is::<DivisionByZero>());
    }

    #[test]
    fn domain_errors() {
        for source in ["sqrt(-1)", "ln(0)", "log(-3)", "asin(2)", "acos(-1.5)", "acosh(0.5)", "atanh(1)", "(-8)^(1/3)"] {
            let err = parse(source).eval_default().unwrap_err();
            assert!(err.is::<DomainError>(), "`{}` should be a domain error, got {}", source, err);
        }
    }

    #[test]
    fn negative_base_integer_exponent() {
        assert_eq!(parse("(-2)^3").eval_default().unwrap(), -8.0);
        assert_eq!(parse("(-2)^-2").eval_default().unwrap(), 0.25);
    }

    #[test]
    fn overflow_is_domain_error() {
        assert!(parse("10^400").eval_default().unwrap_err().is::<DomainError>());
        assert!(parse("exp(1000)").eval_default().unwrap_err().is::<DomainError>());
        assert!(parse("1e999").eval_default().unwrap_err().is::<DomainError>());
    }

    #[test]
    fn zero_to_zero() {
        assert_eq!(parse("0^0").eval_default().unwrap(), 1.0);
    }
}
