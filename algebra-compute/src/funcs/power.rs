//! Roots, exponentials and logarithms.

use crate::numerical::builtin::BuiltinError;

/// Returns an error if the argument to a logarithm is not positive.
fn log_domain(n: f64) -> Result<f64, BuiltinError> {
    if n <= 0.0 {
        Err(BuiltinError::Domain { reason: "the logarithm of a number that is not positive is undefined" })
    } else {
        Ok(n)
    }
}

build_unary! {
    /// The principal square root.
    "sqrt" Sqrt; |n: f64| {
        if n < 0.0 {
            Err(BuiltinError::Domain { reason: "the square root of a negative number is undefined" })
        } else {
            Ok(n.sqrt())
        }
    },

    /// Euler's number raised to the given power.
    "exp" Exp; |n: f64| Ok(n.exp()),

    /// The natural logarithm.
    "ln" Ln; |n: f64| log_domain(n).map(f64::ln),

    /// The base-10 logarithm.
    "log" Log; |n: f64| log_domain(n).map(f64::log10),
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use super::*;

    #[test]
    fn roots_and_logs() {
        assert_eq!(Sqrt::eval_static(2.25), Ok(1.5));
        assert_eq!(Sqrt::eval_static(0.0), Ok(0.0));
        assert_float_absolute_eq!(Ln::eval_static(1.0).unwrap(), 0.0, 1e-15);
        assert_float_absolute_eq!(Log::eval_static(0.01).unwrap(), -2.0, 1e-12);
    }

    #[test]
    fn outside_domain() {
        assert!(matches!(Sqrt::eval_static(-0.5), Err(BuiltinError::Domain { .. })));
        assert!(matches!(Ln::eval_static(0.0), Err(BuiltinError::Domain { .. })));
        assert!(matches!(Log::eval_static(-1.0), Err(BuiltinError::Domain { .. })));
    }
}
