/// Represents an error that can occur while evaluating a builtin function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinError {
    /// The argument is outside the domain of the function over the real numbers.
    Domain {
        /// Why the argument is not allowed.
        reason: &'static str,
    },

    /// Evaluating the function would divide by zero.
    DivisionByZero,
}

/// A trait implemented by all builtin functions.
///
/// Every builtin function takes exactly one real argument.
pub trait Builtin: std::fmt::Debug + Send + Sync {
    /// Returns the name of the function.
    // NOTE: this is a `&self` method and not an associated constant to make the trait object-safe
    fn name(&self) -> &'static str;

    /// Evaluates the function.
    fn eval(&self, arg: f64) -> Result<f64, BuiltinError>;
}
