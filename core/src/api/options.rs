//! Configuration options for the dexpr engine.

use crate::parser::DEFAULT_MAX_DEPTH;

/// Configuration options for the dexpr engine.
///
/// # Example
///
/// ```
/// use dexpr_core::EngineOptions;
///
/// let options = EngineOptions { max_depth: 100 };
/// assert_eq!(EngineOptions::default().max_depth, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Maximum nesting depth of a compiled expression.
    ///
    /// Deeper expressions are rejected at compile time, which bounds the
    /// recursion of the evaluator.
    ///
    /// Default: 500
    pub max_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
