//! Dynamic literal values.
//!
//! A [`Literal`] holds exactly one of an integer, a float, a string, a
//! boolean, or a captured error. Conversions between kinds are fallible and
//! never lossy: a float only narrows to an integer when it is whole, and a
//! string only becomes a number when it parses as one.

use core::fmt;
use std::error::Error;
use std::sync::Arc;

use crate::errors::ExprError;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    Err(LiteralError),
}

// i64::MIN and i64::MAX + 1 are both exact powers of two, so these bounds are
// represented exactly as f64.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

fn whole_float_to_int(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && (I64_LOWER..I64_UPPER).contains(&f) {
        Some(f as i64)
    } else {
        None
    }
}

fn parse_finite_float(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}

impl Literal {
    /// The integer this literal represents exactly, if any.
    ///
    /// Whole floats and strings holding integers (or whole floats) narrow to
    /// `i64` when in range. Booleans and errors never do.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Literal::Int(i) => Some(*i),
            Literal::Float(f) => whole_float_to_int(*f),
            Literal::Str(s) => s
                .parse::<i64>()
                .ok()
                .or_else(|| parse_finite_float(s).and_then(whole_float_to_int)),
            Literal::Bool(_) | Literal::Err(_) => None,
        }
    }

    /// The integer an arithmetic operand stands for.
    ///
    /// Like [`Literal::as_int`], except that a float stays a float even when
    /// it is whole, so `2.0 + 3.0` is `5.0` rather than `5`.
    pub fn as_int_operand(&self) -> Option<i64> {
        match self {
            Literal::Float(_) => None,
            other => other.as_int(),
        }
    }

    /// The float this literal represents, if it is numeric.
    ///
    /// Strings must hold a finite number; `"inf"` and `"NaN"` are text.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Literal::Int(i) => Some(*i as f64),
            Literal::Float(f) => Some(*f),
            Literal::Str(s) => parse_finite_float(s),
            Literal::Bool(_) | Literal::Err(_) => None,
        }
    }

    /// The display form of any literal not in an error state.
    pub fn as_string(&self) -> Option<String> {
        match self {
            Literal::Err(_) => None,
            Literal::Str(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// The truth value of a boolean literal. No other kind converts.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Literal::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The error carried by this literal, if it is in an error state.
    pub fn error_state(&self) -> Option<&LiteralError> {
        match self {
            Literal::Err(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Literal::Err(_))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(i) => write!(f, "{}", i),
            // Shortest representation that round-trips, never in exponent form.
            Literal::Float(x) => write!(f, "{}", x),
            Literal::Str(s) => f.write_str(s),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Err(e) => write!(f, "{}", e),
        }
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(value.into())
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Str(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Str(value)
    }
}

impl From<char> for Literal {
    fn from(value: char) -> Self {
        Literal::Str(value.to_string())
    }
}

impl From<LiteralError> for Literal {
    fn from(value: LiteralError) -> Self {
        Literal::Err(value)
    }
}

impl From<ExprError> for Literal {
    fn from(value: ExprError) -> Self {
        Literal::Err(LiteralError::new(value))
    }
}

/// An error held by a literal or returned by a registered function.
///
/// Cloning is cheap: the underlying error is shared. Two `LiteralError`s are
/// equal when they share the same underlying error or render the same
/// message.
#[derive(Clone)]
pub struct LiteralError(Arc<dyn Error + Send + Sync>);

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct Message(String);

impl LiteralError {
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// An error carrying only a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Message(message.into()))
    }

    /// The wrapped error.
    pub fn inner(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.0.as_ref()
    }

    /// Attempt to view the wrapped error as a concrete type.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl Error for LiteralError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl PartialEq for LiteralError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.to_string() == other.to_string()
    }
}
