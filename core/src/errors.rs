//! Error types shared by the parser, the evaluator and the public API.

use crate::parser::Span;
use crate::values::LiteralError;

/// The closed set of ways compiling or evaluating an expression can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    #[error("syntax error")]
    Syntax,

    #[error("invalid operator: {0}")]
    InvalidOperator(String),

    #[error("invalid composite type")]
    InvalidCompositeType,

    #[error("invalid index")]
    InvalidIndex,

    #[error("type not indexable")]
    TypeNotIndexable,

    #[error("variable doesn't exist: {0}")]
    VarNotExist(String),

    #[error("function doesn't exist: {0}")]
    FunctionNotExist(String),

    /// A registered function returned an error.
    #[error("function: {name}, returned error: {cause}")]
    Function {
        name: String,
        #[source]
        cause: LiteralError,
    },

    #[error("divide by zero")]
    DivByZero,

    #[error("incompatible types in expression")]
    IncompatibleTypes,

    #[error("underflow/overflow")]
    UnderflowOverflow,

    /// A variable was bound to a literal already in an error state.
    #[error("{0}")]
    Propagated(LiteralError),
}

/// An error tied to the expression text that produced it.
///
/// Displays as `invalid expression: <text> (<kind>)`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid expression: {text} ({kind})")]
pub struct ExprError {
    text: String,
    #[source]
    kind: ErrorKind,
    span: Option<Span>,
    detail: Option<String>,
}

impl ExprError {
    pub fn new(text: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            text: text.into(),
            kind,
            span: None,
            detail: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// The kind of failure.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The full expression text, verbatim.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte range of the offending part of the text, when known.
    pub fn span(&self) -> Option<&Span> {
        self.span.as_ref()
    }

    /// Extra human-readable context, e.g. what the parser expected.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }
}
