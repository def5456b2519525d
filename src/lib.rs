//! dexpr - An embeddable dynamic expression evaluator
//!
//! # Overview
//!
//! dexpr evaluates small, Go-flavoured expressions against a set of named
//! variables and host-registered functions. Expressions are compiled once and
//! evaluated many times. Common use cases include:
//!
//! - Rule engines and data filters
//! - Thresholds and alerts over named measurements
//! - User-supplied conditions in configuration files
//!
//! # Quick Start
//!
//! ```
//! use dexpr::{Bindings, Engine, EngineOptions, Literal, stdlib};
//!
//! let engine = Engine::new(EngineOptions::default(), stdlib::register);
//! let expr = engine.compile("roundto(flowIn, 1) > 1.5 && name == \"Fred\"").unwrap();
//!
//! let vars = Bindings::from([
//!     ("flowIn".to_string(), Literal::Float(1.723)),
//!     ("name".to_string(), Literal::from("Fred")),
//! ]);
//! assert_eq!(expr.evaluate_bool(&vars), Ok(true));
//! ```
//!
//! # Dynamic literals
//!
//! Every value is a [`Literal`]: an integer, float, string, boolean or error.
//! Strings that hold numbers take part in arithmetic and ordering as numbers,
//! and integer arithmetic that would overflow is carried out in floating
//! point instead.
//!
//! # Native functions
//!
//! Any `Fn(&[Literal]) -> Result<Literal, LiteralError>` can be registered:
//!
//! ```
//! use dexpr::{Bindings, Engine, EngineOptions, Literal, LiteralError};
//!
//! fn len(args: &[Literal]) -> Result<Literal, LiteralError> {
//!     match args {
//!         [Literal::Str(s)] => Ok(Literal::Int(s.len() as i64)),
//!         _ => Err(LiteralError::msg("expected one string")),
//!     }
//! }
//!
//! let engine = Engine::new(EngineOptions::default(), |env| {
//!     env.register("len", len as dexpr::NativeFn);
//! });
//! assert_eq!(engine.eval("len(\"hello\") * 2", &Bindings::new()), Ok(Literal::Int(10)));
//! ```

pub mod error_renderer;

// Re-export public API from dexpr_core
pub use dexpr_core::api::{
    Bindings, CompiledExpression, Engine, EngineOptions, EnvironmentBuilder, FunctionRegistry,
};
pub use dexpr_core::{compile, evaluator, parser, stdlib};

// Re-export commonly used types and values
pub use dexpr_core::values::{self, Function, Literal, LiteralError, NativeFn};

// Re-export errors
pub use dexpr_core::errors::{ErrorKind, ExprError};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
