//! dexpr standard functions
//!
//! Functions an embedder can register with an engine instead of writing
//! their own. Every function validates its own arguments and reports a
//! mismatch as an error, so they are safe to expose to untrusted
//! expressions.

use crate::api::EnvironmentBuilder;

pub mod math;

pub use math::{abs, max, min, roundto};

/// Register all standard functions in the environment.
///
/// # Example
///
/// ```
/// use dexpr_core::{Bindings, Engine, EngineOptions, Literal, stdlib};
///
/// let engine = Engine::new(EngineOptions::default(), stdlib::register);
/// let vars = Bindings::from([("bob".to_string(), Literal::Float(19.1234))]);
/// assert_eq!(engine.eval_bool("roundto(bob, 2) + 7 == 26.12", &vars), Ok(true));
/// ```
pub fn register(env: &mut EnvironmentBuilder) {
    math::register(env);
}
