//! Approximate comparison of evaluated expressions.

/// Returns true if `candidate` is within `tolerance` of `reference`.
///
/// The tolerance is absolute when `|reference| <= 1` and relative to `|reference|` beyond that,
/// so that both tiny and huge values are compared sensibly:
///
/// ```
/// use algebra_compute::approx::approx_eq;
///
/// assert!(approx_eq(0.1005, 0.1, 0.001));
/// assert!(approx_eq(1000.5, 1000.0, 0.001));
/// assert!(!approx_eq(1002.0, 1000.0, 0.001));
/// ```
pub fn approx_eq(candidate: f64, reference: f64, tolerance: f64) -> bool {
    (candidate - reference).abs() <= tolerance * reference.abs().max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_near_zero() {
        assert!(approx_eq(0.0009, 0.0, 0.001));
        assert!(!approx_eq(0.0011, 0.0, 0.001));
        assert!(approx_eq(-0.5, -0.5, 0.0));
    }

    #[test]
    fn relative_for_large_values() {
        assert!(approx_eq(1e6 + 999.0, 1e6, 0.001));
        assert!(!approx_eq(1e6 + 1001.0, 1e6, 0.001));
    }

    #[test]
    fn sign_matters() {
        assert!(!approx_eq(-3.0, 3.0, 0.001));
    }

    #[test]
    fn zero_tolerance_is_exact() {
        assert!(approx_eq(0.1 + 0.2, 0.1 + 0.2, 0.0));
        assert!(!approx_eq(0.1 + 0.2, 0.3, 0.0));
    }
}
