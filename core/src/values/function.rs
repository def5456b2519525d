//! Callable values registered with an engine.

use super::{Literal, LiteralError};

/// Trait for functions callable from expressions.
///
/// A function receives its evaluated arguments in call order. Arity and
/// argument kinds are the function's own business: report a mismatch by
/// returning an error, never by panicking.
///
/// Any `Fn(&[Literal]) -> Result<Literal, LiteralError>` closure or function
/// pointer that is `Send + Sync` implements this trait.
pub trait Function: Send + Sync {
    /// Call the function with the given arguments.
    ///
    /// Returning `Ok(Literal::Err(_))` is treated the same as returning `Err(_)`.
    fn call(&self, args: &[Literal]) -> Result<Literal, LiteralError>;
}

/// Type alias for native function pointers.
///
/// # Example
///
/// ```
/// use dexpr_core::{Literal, LiteralError, NativeFn};
///
/// fn first(args: &[Literal]) -> Result<Literal, LiteralError> {
///     args.first().cloned().ok_or_else(|| LiteralError::msg("missing argument"))
/// }
///
/// let f: NativeFn = first;
/// ```
pub type NativeFn = fn(args: &[Literal]) -> Result<Literal, LiteralError>;

impl<F> Function for F
where
    F: Fn(&[Literal]) -> Result<Literal, LiteralError> + Send + Sync,
{
    fn call(&self, args: &[Literal]) -> Result<Literal, LiteralError> {
        self(args)
    }
}
