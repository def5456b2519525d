//! Public API for the dexpr expression language.
//!
//! An [`Engine`] owns the function registry. Expressions compiled by it are
//! immutable and can be evaluated any number of times, from any thread,
//! against fresh [`Bindings`].
//!
//! # Example
//!
//! ```
//! use dexpr_core::{Bindings, Engine, EngineOptions, Literal, LiteralError};
//!
//! let engine = Engine::new(EngineOptions::default(), |env| {
//!     env.register("double", |args: &[Literal]| -> Result<Literal, LiteralError> {
//!         match args {
//!             [x] => x
//!                 .as_float()
//!                 .map(|f| Literal::Float(f * 2.0))
//!                 .ok_or_else(|| LiteralError::msg("can't convert to float")),
//!             _ => Err(LiteralError::msg("wrong number of arguments")),
//!         }
//!     });
//! });
//!
//! let expr = engine.compile("double(x) > 5").unwrap();
//! let vars = Bindings::from([("x".to_string(), Literal::Float(2.6))]);
//! assert_eq!(expr.evaluate_bool(&vars), Ok(true));
//! ```

use std::collections::HashMap;

use crate::values::Literal;

pub mod engine;
pub mod environment;
pub mod expression;
pub mod options;

pub use engine::Engine;
pub use environment::{EnvironmentBuilder, FunctionRegistry};
pub use expression::CompiledExpression;
pub use options::EngineOptions;

/// Variable bindings supplied for one evaluation.
pub type Bindings = HashMap<String, Literal>;
