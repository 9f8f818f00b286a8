use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A context to use when evaluating an expression, containing the values of the variables that
/// can be used within the expression.
///
/// Builtin constants such as `pi` do not need to be added to the context, but a variable with the
/// same name as a constant takes precedence over it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,
}

impl Ctxt {
    /// Creates a new, empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the context, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_owned(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns an iterator over the names of the variables in the context.
    pub fn var_names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Returns an iterator over the variables in the context, sorted by name.
    pub fn sorted_vars(&self) -> impl Iterator<Item = (&str, f64)> {
        let mut vars = self.vars.iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect::<Vec<_>>();
        vars.sort_by(|(a, _), (b, _)| a.cmp(b));
        vars.into_iter()
    }

    /// Returns true if the context has no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for Ctxt {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut ctxt = Self::new();
        for (name, value) in iter {
            ctxt.add_var(name.as_ref(), value);
        }
        ctxt
    }
}
