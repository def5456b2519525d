//! Tree-walking evaluator for parsed expressions.
//!
//! The evaluator interprets an [`Expr`] tree against a set of variable
//! bindings and a function registry, producing a [`Literal`].
//!
//! ## Semantics
//!
//! - Operands are dynamically typed. Strings holding numbers take part in
//!   arithmetic and comparisons as numbers.
//! - Integer arithmetic that overflows is redone in floating point.
//! - `&&` and `||` short-circuit and require boolean operands.
//! - Errors carry the span of the sub-expression that failed.
//!
//! ## Example
//!
//! ```
//! use dexpr_core::api::{Bindings, FunctionRegistry};
//! use dexpr_core::{Literal, evaluator, parser};
//!
//! let source = "a + 1 > 2";
//! let ast = parser::parse(source).unwrap();
//! let vars = Bindings::from([("a".to_string(), Literal::Int(4))]);
//! let result = evaluator::eval(source, &ast, &vars, &FunctionRegistry::default()).unwrap();
//! assert_eq!(result, Literal::Bool(true));
//! ```

mod eval;
mod operators;


pub use eval::Evaluator;

use tracing::trace;

use crate::{
    api::{Bindings, FunctionRegistry},
    errors::ExprError,
    parser::Expr,
    values::Literal,
};

/// Evaluate a parsed expression.
///
/// `source` is the text `expr` was parsed from and is attached to any error.
/// The tree is only read, so the same expression may be evaluated from many
/// threads at once.
pub fn eval(
    source: &str,
    expr: &Expr,
    vars: &Bindings,
    functions: &FunctionRegistry,
) -> Result<Literal, ExprError> {
    let result = Evaluator::new(source, vars, functions).eval(expr);
    trace!(source, ?result, "evaluated");
    result
}
