use algebra_error::Error;
use algebra_parser::parser::{ast::binary::Binary, token::op::BinOpKind};
use crate::numerical::{
    ctxt::Ctxt,
    error::{DivisionByZero, DomainError},
    eval::{finite, Eval},
};

/// Returns an error pointing at the operator and the right-hand side.
fn division_by_zero(binary: &Binary) -> Error {
    Error::new(vec![binary.op.span.clone(), binary.rhs.span()], DivisionByZero)
}

/// Raises `base` to the power of `exp` over the real numbers.
///
/// A negative base is only allowed with an integer exponent, and zero cannot be raised to a
/// negative power.
fn pow(binary: &Binary, base: f64, exp: f64) -> Result<f64, Error> {
    if base == 0.0 && exp < 0.0 {
        return Err(division_by_zero(binary));
    }

    if base < 0.0 && exp.fract() != 0.0 {
        return Err(Error::new(vec![binary.span()], DomainError {
            reason: "a negative number cannot be raised to a fractional power".to_string(),
        }));
    }

    Ok(base.powf(exp))
}

impl Eval for Binary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let left = self.lhs.eval(ctxt)?;
        let right = self.rhs.eval(ctxt)?;

        let value = match self.op.kind {
            BinOpKind::Add => left + right,
            BinOpKind::Sub => left - right,
            BinOpKind::Mul => left * right,
            BinOpKind::Div => {
                if right == 0.0 {
                    return Err(division_by_zero(self));
                }
                left / right
            },
            BinOpKind::Exp => pow(self, left, right)?,
        };

        finite(value, self.span())
    }
}
