use crate::parser::syntax::{BinaryOp, BoolOp, ComparisonOp, Span, UnaryOp};
use crate::values::Literal;

/// A parsed expression node together with its location in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr(pub Span, pub ExprInner);

#[derive(Debug, Clone, PartialEq)]
pub enum ExprInner {
    /// A literal written in the source. Character literals are stored as
    /// one-character strings.
    Constant(Literal),
    Ident(String),
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Comparison {
        op: ComparisonOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Boolean {
        op: BoolOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Index {
        value: Box<Expr>,
        index: Box<Expr>,
    },
    Call {
        name: String,
        args: Vec<Expr>,
    },
    /// `[]lit{...}` or `[N]lit{...}`.
    Composite(Vec<Expr>),
    Grouped(Box<Expr>),
}

impl Expr {
    pub fn span(&self) -> &Span {
        &self.0
    }

    pub fn inner(&self) -> &ExprInner {
        &self.1
    }

    /// Strip any number of enclosing parentheses.
    pub fn ungrouped(&self) -> &Expr {
        match &self.1 {
            ExprInner::Grouped(inner) => inner.ungrouped(),
            _ => self,
        }
    }
}
