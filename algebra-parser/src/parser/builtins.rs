//! Names that have a fixed meaning in an expression: the registry of builtin functions, and the
//! builtin constants.

use levenshtein::levenshtein;

/// The signature of a builtin function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuncSig {
    /// The name of the function, as it is written in an expression.
    pub name: &'static str,

    /// The number of arguments the function accepts.
    pub arity: usize,
}

const fn unary(name: &'static str) -> FuncSig {
    FuncSig { name, arity: 1 }
}

/// Every function that can be called in an expression.
pub const FUNCTIONS: &[FuncSig] = &[
    unary("abs"),
    unary("sqrt"),
    unary("exp"),
    unary("ln"),
    unary("log"),
    unary("sin"),
    unary("cos"),
    unary("tan"),
    unary("sec"),
    unary("csc"),
    unary("cosec"),
    unary("cot"),
    unary("asin"),
    unary("acos"),
    unary("atan"),
    unary("arcsin"),
    unary("arccos"),
    unary("arctan"),
    unary("sinh"),
    unary("cosh"),
    unary("tanh"),
    unary("asinh"),
    unary("acosh"),
    unary("atanh"),
];

/// Names that refer to a constant value unless they are bound as a variable.
pub const CONSTANTS: &[&str] = &["pi", "e"];

/// Returns the signature of the builtin function with the given name, if there is one.
pub fn lookup(name: &str) -> Option<&'static FuncSig> {
    FUNCTIONS.iter().find(|sig| sig.name == name)
}

/// Returns true if the given name is a builtin function.
pub fn is_function(name: &str) -> bool {
    lookup(name).is_some()
}

/// Returns true if the given name is a builtin constant.
pub fn is_constant(name: &str) -> bool {
    CONSTANTS.contains(&name)
}

/// Returns the builtin functions whose names are similar to the given name.
pub fn suggestions(name: &str) -> Vec<String> {
    let lower = name.to_lowercase();
    FUNCTIONS.iter()
        .filter(|sig| levenshtein(sig.name, &lower) < 2)
        .map(|sig| sig.name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn registry_is_unary() {
        assert!(FUNCTIONS.iter().all(|sig| sig.arity == 1));
        assert_eq!(lookup("cosec"), Some(&FuncSig { name: "cosec", arity: 1 }));
        assert_eq!(lookup("max"), None);
    }

    #[test]
    fn similar_names() {
        assert_eq!(suggestions("sine"), vec!["sin", "sinh"]);
        assert_eq!(suggestions("Sqrt"), vec!["sqrt"]);
        assert!(suggestions("foo").is_empty());
    }
}
