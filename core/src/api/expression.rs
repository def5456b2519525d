//! Compiled dexpr expressions.

use std::fmt;
use std::sync::Arc;

use super::{Bindings, FunctionRegistry};
use crate::errors::{ErrorKind, ExprError};
use crate::evaluator;
use crate::parser::Expr;
use crate::values::Literal;

/// A compiled expression ready for evaluation.
///
/// Owns the source text verbatim and the parsed tree. Neither changes after
/// compilation, so a compiled expression can be evaluated any number of
/// times, concurrently, with different bindings.
///
/// # Example
///
/// ```
/// use dexpr_core::{Bindings, Literal};
///
/// let expr = dexpr_core::compile("a > 3 && b == \"x\"").unwrap();
///
/// let mut vars = Bindings::new();
/// vars.insert("a".to_string(), Literal::Int(4));
/// vars.insert("b".to_string(), Literal::from("x"));
/// assert_eq!(expr.evaluate_bool(&vars), Ok(true));
///
/// vars.insert("a".to_string(), Literal::from("2"));
/// assert_eq!(expr.evaluate_bool(&vars), Ok(false));
///
/// assert_eq!(expr.to_string(), "a > 3 && b == \"x\"");
/// ```
#[derive(Debug, Clone)]
pub struct CompiledExpression {
    source: String,
    expr: Expr,
    functions: Arc<FunctionRegistry>,
}

impl CompiledExpression {
    /// This is called internally by `Engine::compile()`.
    pub(crate) fn new(source: String, expr: Expr, functions: Arc<FunctionRegistry>) -> Self {
        Self {
            source,
            expr,
            functions,
        }
    }

    /// Evaluate the expression against `vars`.
    ///
    /// A failure is returned as data. Use `Literal::from` on the error to
    /// fold it into an error-carrying literal.
    pub fn evaluate(&self, vars: &Bindings) -> Result<Literal, ExprError> {
        evaluator::eval(&self.source, &self.expr, vars, &self.functions)
    }

    /// Evaluate the expression, requiring a boolean result.
    pub fn evaluate_bool(&self, vars: &Bindings) -> Result<bool, ExprError> {
        match self.evaluate(vars)? {
            Literal::Bool(b) => Ok(b),
            _ => Err(ExprError::new(&self.source, ErrorKind::IncompatibleTypes)
                .with_span(self.expr.span().clone())),
        }
    }

    /// The original source text, unmodified.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed expression tree.
    pub fn ast(&self) -> &Expr {
        &self.expr
    }
}

impl fmt::Display for CompiledExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
