use super::ast::expr::Expr;

/// Walks an expression tree children-first, left to right, without recursion.
///
/// Returned by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Starts a walk at `expr`. The root itself is yielded last.
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Yields the top of the stack.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Whether `expr` is the node yielded most recently, compared by address.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, expr),
            None => false,
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = self.stack.last()?;
            match expr {
                Expr::Number(_) | Expr::Variable(_) => return self.visit(),
                Expr::Call(call) => {
                    if self.is_last_visited(&call.arg) {
                        return self.visit();
                    }
                    self.stack.push(&call.arg);
                },
                Expr::Unary(unary) => {
                    if self.is_last_visited(&unary.operand) {
                        return self.visit();
                    }
                    self.stack.push(&unary.operand);
                },
                Expr::Binary(binary) => {
                    if self.is_last_visited(&binary.rhs) {
                        return self.visit();
                    }
                    self.stack.push(&binary.rhs);
                    self.stack.push(&binary.lhs);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::parser::Parser;
    use super::*;

    #[test]
    fn post_order() {
        let expr = Parser::new("1 + sin(x) * -y").try_parse_full::<Expr>().unwrap();
        let visited = expr.post_order_iter()
            .map(|expr| expr.to_string())
            .collect::<Vec<_>>();
        assert_eq!(visited, vec!["1", "x", "sin(x)", "y", "-y", "sin(x)*-y", "1+sin(x)*-y"]);
    }
}
