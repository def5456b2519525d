//! The dexpr compilation engine.

use std::sync::Arc;

use tracing::debug;

use super::{Bindings, CompiledExpression, EngineOptions, EnvironmentBuilder, FunctionRegistry};
use crate::errors::ExprError;
use crate::parser;
use crate::values::Literal;

/// The dexpr compilation and execution engine.
///
/// The engine manages:
/// - Registered functions (`FunctionRegistry`)
/// - Compile-time configuration (`EngineOptions`)
///
/// Engines are cheap to clone and can be shared between threads. Every
/// expression an engine compiles keeps its own handle on the registry.
///
/// # Example
///
/// ```
/// use dexpr_core::{Bindings, Engine, EngineOptions, Literal, LiteralError};
///
/// fn add(args: &[Literal]) -> Result<Literal, LiteralError> {
///     let mut total = 0;
///     for arg in args {
///         total += arg.as_int().ok_or_else(|| LiteralError::msg("can't convert to int"))?;
///     }
///     Ok(Literal::Int(total))
/// }
///
/// let engine = Engine::new(EngineOptions::default(), |env| {
///     env.register("add", add as dexpr_core::NativeFn);
/// });
///
/// let expr = engine.compile("add(40, 2)").unwrap();
/// assert_eq!(expr.evaluate(&Bindings::new()), Ok(Literal::Int(42)));
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    options: EngineOptions,
    functions: Arc<FunctionRegistry>,
}

impl Engine {
    /// Create a new engine with a custom environment.
    ///
    /// The initialization closure receives the environment builder used to
    /// register functions.
    pub fn new(options: EngineOptions, init: impl FnOnce(&mut EnvironmentBuilder)) -> Self {
        let mut env_builder = EnvironmentBuilder::new();
        init(&mut env_builder);
        let functions = Arc::new(env_builder.build());
        debug!(functions = functions.len(), "engine created");

        Self { options, functions }
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Access the registered functions.
    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    /// Compile an expression.
    ///
    /// Fails with a syntax-kind error on any grammar violation. Unknown
    /// variables and functions are only reported when the expression is
    /// evaluated.
    pub fn compile(&self, source: &str) -> Result<CompiledExpression, ExprError> {
        match parser::parse_with_max_depth(source, self.options.max_depth) {
            Ok(expr) => {
                debug!(source, "compiled expression");
                Ok(CompiledExpression::new(
                    source.to_string(),
                    expr,
                    Arc::clone(&self.functions),
                ))
            }
            Err(err) => {
                debug!(source, kind = %err.kind(), "compilation failed");
                Err(err)
            }
        }
    }

    /// Compile an expression that is known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `source` does not compile. Use this for expressions that are
    /// part of the program rather than user input.
    pub fn must_compile(&self, source: &str) -> CompiledExpression {
        match self.compile(source) {
            Ok(expr) => expr,
            Err(err) => panic!("{}", err),
        }
    }

    /// Compile and evaluate an expression in one step.
    pub fn eval(&self, source: &str, vars: &Bindings) -> Result<Literal, ExprError> {
        self.compile(source)?.evaluate(vars)
    }

    /// Compile and evaluate an expression that must produce a boolean.
    pub fn eval_bool(&self, source: &str, vars: &Bindings) -> Result<bool, ExprError> {
        self.compile(source)?.evaluate_bool(vars)
    }
}

impl Default for Engine {
    /// An engine with default options and no registered functions.
    fn default() -> Self {
        Self::new(EngineOptions::default(), |_| {})
    }
}
