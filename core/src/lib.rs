//! Core of the dexpr expression interpreter.
//!
//! Expressions are parsed once into an [`parser::Expr`] tree and then
//! evaluated any number of times against fresh variable bindings.

pub mod api;
pub mod errors;
pub mod evaluator;
pub mod parser;
pub mod stdlib;
pub mod syntax;
pub mod values;

pub use api::{Bindings, CompiledExpression, Engine, EngineOptions, EnvironmentBuilder};
pub use errors::{ErrorKind, ExprError};
pub use values::{Function, Literal, LiteralError, NativeFn};

/// Compile `source` with a default engine that has no registered functions.
pub fn compile(source: &str) -> Result<CompiledExpression, ExprError> {
    Engine::default().compile(source)
}

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
