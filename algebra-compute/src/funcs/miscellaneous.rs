//! Uncategorized functions.

build_unary! {
    /// Returns the absolute value.
    "abs" Abs; |n: f64| Ok(n.abs()),
}
