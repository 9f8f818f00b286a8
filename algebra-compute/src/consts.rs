//! Constants that can be used by name in an expression.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const PI: f64 = std::f64::consts::PI;

/// Euler's number.
pub const E: f64 = std::f64::consts::E;

/// Every named constant, keyed by the name used in expressions.
pub static CONSTANTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [("pi", PI), ("e", E)].into_iter().collect()
});

/// Returns the value of the constant with the given name, if there is one.
pub fn get(name: &str) -> Option<f64> {
    CONSTANTS.get(name).copied()
}

#[cfg(test)]
mod tests {
    use algebra_parser::parser::builtins;
    use super::*;

    #[test]
    fn every_constant_has_a_value() {
        for name in builtins::CONSTANTS {
            assert!(get(name).is_some(), "missing value for `{}`", name);
        }
        assert_eq!(CONSTANTS.len(), builtins::CONSTANTS.len());
    }
}
