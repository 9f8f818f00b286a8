//! General trigonometric and hyperbolic trigonometric functions. Angles are in radians.

use crate::numerical::builtin::BuiltinError;

/// Returns the reciprocal of `n`, or [`BuiltinError::DivisionByZero`] if `n` is zero.
fn recip(n: f64) -> Result<f64, BuiltinError> {
    if n == 0.0 {
        Err(BuiltinError::DivisionByZero)
    } else {
        Ok(n.recip())
    }
}

/// Returns an error if `n` is outside `[-1, 1]`, the domain of `asin` and `acos`.
fn unit_interval(n: f64) -> Result<f64, BuiltinError> {
    if (-1.0..=1.0).contains(&n) {
        Ok(n)
    } else {
        Err(BuiltinError::Domain { reason: "the inverse sine and cosine are only defined between -1 and 1" })
    }
}

build_unary! {
    "sin" Sin; |n: f64| Ok(n.sin()),
    "cos" Cos; |n: f64| Ok(n.cos()),
    "tan" Tan; |n: f64| Ok(n.tan()),
    "csc" Csc; |n: f64| recip(n.sin()),
    "sec" Sec; |n: f64| recip(n.cos()),
    "cot" Cot; |n: f64| recip(n.tan()),
}

build_unary! {
    "asin" Asin; |n: f64| unit_interval(n).map(f64::asin),
    "acos" Acos; |n: f64| unit_interval(n).map(f64::acos),
    "atan" Atan; |n: f64| Ok(n.atan()),
}

build_unary! {
    "sinh" Sinh; |n: f64| Ok(n.sinh()),
    "cosh" Cosh; |n: f64| Ok(n.cosh()),
    "tanh" Tanh; |n: f64| Ok(n.tanh()),
    "asinh" Asinh; |n: f64| Ok(n.asinh()),
    "acosh" Acosh; |n: f64| {
        if n < 1.0 {
            Err(BuiltinError::Domain { reason: "the inverse hyperbolic cosine is only defined from 1 upwards" })
        } else {
            Ok(n.acosh())
        }
    },
    "atanh" Atanh; |n: f64| {
        if n <= -1.0 || n >= 1.0 {
            Err(BuiltinError::Domain { reason: "the inverse hyperbolic tangent is only defined strictly between -1 and 1" })
        } else {
            Ok(n.atanh())
        }
    },
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use crate::consts::PI;
    use super::*;

    #[test]
    fn reciprocal_functions() {
        assert_float_absolute_eq!(Sec::eval_static(PI).unwrap(), -1.0, 1e-12);
        assert_float_absolute_eq!(Csc::eval_static(PI / 2.0).unwrap(), 1.0, 1e-12);
        assert_float_absolute_eq!(Cot::eval_static(PI / 4.0).unwrap(), 1.0, 1e-12);
        assert_eq!(Csc::eval_static(0.0), Err(BuiltinError::DivisionByZero));
    }

    #[test]
    fn inverse_functions() {
        assert_float_absolute_eq!(Asin::eval_static(1.0).unwrap(), PI / 2.0, 1e-12);
        assert_float_absolute_eq!(Acos::eval_static(-1.0).unwrap(), PI, 1e-12);
        assert!(Asin::eval_static(1.0 + 1e-9).is_err());
    }

    #[test]
    fn hyperbolic_functions() {
        assert_float_absolute_eq!(Cosh::eval_static(0.0).unwrap(), 1.0, 1e-15);
        assert_float_absolute_eq!(Atanh::eval_static(Tanh::eval_static(0.5).unwrap()).unwrap(), 0.5, 1e-12);
        assert_eq!(Acosh::eval_static(1.0), Ok(0.0));
        assert!(Acosh::eval_static(0.99).is_err());
        assert!(Atanh::eval_static(-1.0).is_err());
    }
}
