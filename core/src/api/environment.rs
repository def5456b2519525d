//! Environment builder for registering functions.

use std::fmt;
use std::sync::Arc;

use crate::values::Function;

/// Builder for constructing the function registry of an [`Engine`].
///
/// # Example
///
/// ```
/// use dexpr_core::{Engine, EngineOptions, Literal, LiteralError};
///
/// let engine = Engine::new(EngineOptions::default(), |env| {
///     env.register("answer", |_: &[Literal]| -> Result<Literal, LiteralError> {
///         Ok(Literal::Int(42))
///     });
/// });
/// assert!(engine.functions().get("answer").is_some());
/// ```
///
/// [`Engine`]: super::Engine
#[derive(Default)]
pub struct EnvironmentBuilder {
    entries: Vec<(String, Arc<dyn Function>)>,
}

impl EnvironmentBuilder {
    /// Create a new environment builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function under `name`.
    ///
    /// Registering the same name twice keeps the later function.
    pub fn register(&mut self, name: &str, function: impl Function + 'static) {
        self.entries.push((name.to_string(), Arc::new(function)));
    }

    /// Build the final sorted registry.
    ///
    /// This is called internally by `Engine::new()`.
    pub(crate) fn build(mut self) -> FunctionRegistry {
        // Stable sort, so the last registration of a name comes last.
        self.entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        let mut entries: Vec<(String, Arc<dyn Function>)> = Vec::with_capacity(self.entries.len());
        for (name, function) in self.entries {
            match entries.last_mut() {
                Some((last, slot)) if *last == name => *slot = function,
                _ => entries.push((name, function)),
            }
        }
        FunctionRegistry { entries }
    }
}

/// Immutable table of named functions, sorted by name.
#[derive(Default, Clone)]
pub struct FunctionRegistry {
    entries: Vec<(String, Arc<dyn Function>)>,
}

impl FunctionRegistry {
    /// Look up a function by name.
    pub fn get(&self, name: &str) -> Option<&dyn Function> {
        self.entries
            .binary_search_by(|(entry, _)| entry.as_str().cmp(name))
            .ok()
            .map(|i| self.entries[i].1.as_ref())
    }

    /// Registered function names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
