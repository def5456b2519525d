//! Core evaluation logic.

use tracing::trace;

use crate::{
    api::{Bindings, FunctionRegistry},
    errors::{ErrorKind, ExprError},
    evaluator::operators,
    parser::{BoolOp, Expr, ExprInner, UnaryOp},
    values::Literal,
};

/// The result of evaluating something that may be indexed.
///
/// Composite literals only exist as the base of an index operation; every
/// other position requires a plain literal.
enum Indexable {
    Literal(Literal),
    Composite(Vec<Literal>),
}

/// Tree-walking evaluator over a parsed expression.
///
/// The evaluator borrows everything it needs and holds no state between
/// calls, so one parsed expression can be evaluated concurrently with
/// different bindings.
pub struct Evaluator<'a> {
    source: &'a str,
    vars: &'a Bindings,
    functions: &'a FunctionRegistry,
}

impl<'a> Evaluator<'a> {
    pub fn new(source: &'a str, vars: &'a Bindings, functions: &'a FunctionRegistry) -> Self {
        Self {
            source,
            vars,
            functions,
        }
    }

    fn add_error_context(&self, expr: &Expr, kind: ErrorKind) -> ExprError {
        ExprError::new(self.source, kind).with_span(expr.span().clone())
    }

    fn error<T>(&self, expr: &Expr, kind: ErrorKind) -> Result<T, ExprError> {
        Err(self.add_error_context(expr, kind))
    }

    /// Evaluate an expression node to a literal.
    pub fn eval(&self, expr: &Expr) -> Result<Literal, ExprError> {
        match expr.inner() {
            ExprInner::Constant(value) => Ok(value.clone()),

            ExprInner::Ident(name) => self.lookup(expr, name),

            ExprInner::Grouped(inner) => self.eval(inner),

            ExprInner::Unary { op, expr: operand } => {
                let value = self.eval(operand)?;
                let result = match op {
                    UnaryOp::Neg => operators::negate(&value),
                    UnaryOp::Not => operators::not(&value),
                };
                result.map_err(|kind| self.add_error_context(expr, kind))
            }

            ExprInner::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                operators::eval_binary(*op, &left, &right)
                    .map_err(|kind| self.add_error_context(expr, kind))
            }

            ExprInner::Comparison { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                operators::compare(*op, &left, &right)
                    .map(Literal::Bool)
                    .map_err(|kind| self.add_error_context(expr, kind))
            }

            ExprInner::Boolean { op, left, right } => {
                let left = self.eval_bool_operand(left)?;

                // Short-circuit: the right operand is never evaluated when the
                // left one decides the result.
                match op {
                    BoolOp::And if !left => return Ok(Literal::Bool(false)),
                    BoolOp::Or if left => return Ok(Literal::Bool(true)),
                    _ => {}
                }

                self.eval_bool_operand(right).map(Literal::Bool)
            }

            ExprInner::Index { value, index } => self.eval_index(expr, value, index),

            ExprInner::Call { name, args } => self.eval_call(expr, name, args),

            ExprInner::Composite(_) => self.error(expr, ErrorKind::IncompatibleTypes),
        }
    }

    fn lookup(&self, expr: &Expr, name: &str) -> Result<Literal, ExprError> {
        match self.vars.get(name) {
            None => self.error(expr, ErrorKind::VarNotExist(name.to_string())),
            Some(Literal::Err(e)) => self.error(expr, ErrorKind::Propagated(e.clone())),
            Some(value) => Ok(value.clone()),
        }
    }

    fn eval_bool_operand(&self, expr: &Expr) -> Result<bool, ExprError> {
        let value = self.eval(expr)?;
        if let Some(e) = value.error_state() {
            return self.error(expr, ErrorKind::Propagated(e.clone()));
        }
        match value.as_bool() {
            Some(b) => Ok(b),
            None => self.error(expr, ErrorKind::IncompatibleTypes),
        }
    }

    fn eval_indexable(&self, expr: &Expr) -> Result<Indexable, ExprError> {
        match expr.inner() {
            ExprInner::Composite(elements) => elements
                .iter()
                .map(|element| self.eval(element))
                .collect::<Result<Vec<_>, _>>()
                .map(Indexable::Composite),
            ExprInner::Grouped(inner) => self.eval_indexable(inner),
            _ => self.eval(expr).map(Indexable::Literal),
        }
    }

    fn eval_index(&self, expr: &Expr, value: &Expr, index: &Expr) -> Result<Literal, ExprError> {
        let base = self.eval_indexable(value)?;
        if let Indexable::Literal(lit) = &base {
            if !matches!(lit, Literal::Str(_)) {
                return self.error(expr, ErrorKind::TypeNotIndexable);
            }
        }

        let position = self.eval(index)?;
        let len = match &base {
            Indexable::Literal(Literal::Str(s)) => s.len(),
            Indexable::Composite(items) => items.len(),
            Indexable::Literal(_) => 0,
        };
        let Some(i) = position
            .as_int()
            .and_then(|i| usize::try_from(i).ok())
            .filter(|&i| i < len)
        else {
            return self.error(index, ErrorKind::InvalidIndex);
        };

        match base {
            // Strings index by byte, yielding a one-character string.
            Indexable::Literal(Literal::Str(s)) => {
                Ok(Literal::Str(char::from(s.as_bytes()[i]).to_string()))
            }
            Indexable::Composite(mut items) => Ok(items.swap_remove(i)),
            Indexable::Literal(_) => self.error(expr, ErrorKind::TypeNotIndexable),
        }
    }

    fn eval_call(&self, expr: &Expr, name: &str, args: &[Expr]) -> Result<Literal, ExprError> {
        let Some(function) = self.functions.get(name) else {
            return self.error(expr, ErrorKind::FunctionNotExist(name.to_string()));
        };

        let args = args
            .iter()
            .map(|arg| self.eval(arg))
            .collect::<Result<Vec<_>, _>>()?;

        trace!(function = name, args = args.len(), "calling function");

        match function.call(&args) {
            Ok(Literal::Err(cause)) | Err(cause) => self.error(
                expr,
                ErrorKind::Function {
                    name: name.to_string(),
                    cause,
                },
            ),
            Ok(value) => Ok(value),
        }
    }
}
