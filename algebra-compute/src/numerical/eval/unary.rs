use algebra_error::Error;
use algebra_parser::parser::{ast::unary::Unary, token::op::UnaryOpKind};
use crate::numerical::{ctxt::Ctxt, eval::Eval};

impl Eval for Unary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let operand = self.operand.eval(ctxt)?;
        Ok(match self.op.kind {
            UnaryOpKind::Neg => -operand,
            UnaryOpKind::Pos => operand,
        })
    }
}
