use algebra_error::Error;
use algebra_parser::parser::ast::literal::{LitNum, LitSym};
use crate::consts;
use crate::numerical::{ctxt::Ctxt, error::UnboundVariable, eval::{finite, Eval}};
use levenshtein::levenshtein;

impl Eval for LitNum {
    fn eval(&self, _: &Ctxt) -> Result<f64, Error> {
        finite(self.value, self.span.clone())
    }
}

impl Eval for LitSym {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        ctxt.get_var(&self.name)
            .or_else(|| consts::get(&self.name))
            .ok_or_else(|| {
                let mut suggestions = ctxt.var_names()
                    .filter(|name| levenshtein(name, &self.name) < 2)
                    .map(str::to_owned)
                    .collect::<Vec<_>>();
                suggestions.sort();

                Error::new(vec![self.span.clone()], UnboundVariable {
                    name: self.name.clone(),
                    suggestions,
                })
            })
    }
}
