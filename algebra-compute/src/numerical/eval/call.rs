use algebra_error::Error;
use algebra_parser::parser::ast::call::Call;
use crate::funcs;
use crate::numerical::{
    builtin::BuiltinError,
    ctxt::Ctxt,
    error::{DivisionByZero, DomainError},
    eval::{finite, Eval},
};

impl Eval for Call {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        // the parser only produces calls to registered functions
        let Some(builtin) = funcs::get(&self.name.name) else {
            return Err(Error::new(vec![self.name.span.clone()], DomainError {
                reason: format!("`{}` cannot be evaluated", self.name.name),
            }));
        };

        let arg = self.arg.eval(ctxt)?;
        let value = builtin.eval(arg).map_err(|err| match err {
            BuiltinError::Domain { reason } => Error::new(vec![self.span()], DomainError {
                reason: reason.to_string(),
            }),
            BuiltinError::DivisionByZero => Error::new(
                vec![self.name.span.clone(), self.arg.span()],
                DivisionByZero,
            ),
        })?;

        finite(value, self.span())
    }
}
