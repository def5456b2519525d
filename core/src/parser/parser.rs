use crate::errors::{ErrorKind, ExprError};
use crate::parser::error::convert_pest_error;
use crate::parser::parsed_expr::{Expr, ExprInner};
use crate::parser::syntax::{BinaryOp, BoolOp, ComparisonOp, Span, UnaryOp};
use crate::syntax::{raw_string, unescape_rune, unescape_string};
use crate::values::Literal;
use lazy_static::lazy_static;
use pest::Parser;
use pest::iterators::Pair;
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest_derive::Parser;

/// Default maximum nesting depth of a parsed expression.
pub const DEFAULT_MAX_DEPTH: usize = 500;

lazy_static! {
    // Note: precedence is defined lowest to highest.
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        // (lowest precedence)
        .op(Op::infix(Rule::lor, Assoc::Left))           // `||`
        .op(Op::infix(Rule::land, Assoc::Left))          // `&&`
        .op(
            Op::infix(Rule::eq, Assoc::Left) |
            Op::infix(Rule::ne, Assoc::Left) |
            Op::infix(Rule::lt, Assoc::Left) |
            Op::infix(Rule::le, Assoc::Left) |
            Op::infix(Rule::gt, Assoc::Left) |
            Op::infix(Rule::ge, Assoc::Left) |
            Op::infix(Rule::arrow, Assoc::Left)
        )                                                // `==`, `!=`, `<`, `<=`, `>`, `>=`, `<-`
        .op(
            Op::infix(Rule::add, Assoc::Left) |
            Op::infix(Rule::sub, Assoc::Left) |
            Op::infix(Rule::bor, Assoc::Left) |
            Op::infix(Rule::bxor, Assoc::Left) |
            Op::infix(Rule::inc, Assoc::Left) |
            Op::infix(Rule::dec, Assoc::Left)
        )                                                // `+`, `-`, `|`, `^`, `++`, `--`
        .op(
            Op::infix(Rule::mul, Assoc::Left) |
            Op::infix(Rule::div, Assoc::Left) |
            Op::infix(Rule::rem, Assoc::Left) |
            Op::infix(Rule::shl, Assoc::Left) |
            Op::infix(Rule::shr, Assoc::Left) |
            Op::infix(Rule::band, Assoc::Left) |
            Op::infix(Rule::and_not, Assoc::Left)
        )                                                // `*`, `/`, `%`, `<<`, `>>`, `&`, `&^`
        .op(
            Op::prefix(Rule::neg) |
            Op::prefix(Rule::not) |
            Op::prefix(Rule::pos) |
            Op::prefix(Rule::bit_not) |
            Op::prefix(Rule::deref) |
            Op::prefix(Rule::addr_of) |
            Op::prefix(Rule::recv) |
            Op::prefix(Rule::pre_inc) |
            Op::prefix(Rule::pre_dec)
        )                                                // `-`, `!`, and the unsupported rest
        .op(Op::postfix(Rule::index_op))                 // `[]`
        // (highest precedence)
        ;
}

#[derive(Parser)]
#[grammar = "parser/expression.pest"]
pub struct ExpressionParser;

/// Parse an expression with the default nesting limit.
pub fn parse(source: &str) -> Result<Expr, ExprError> {
    parse_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

/// Parse an expression, rejecting trees nested deeper than `max_depth`.
///
/// Every failure is reported as an [`ExprError`] carrying the full source
/// text; no partial tree is ever returned. The limit is enforced while the
/// tree is built, so an over-deep input fails before it can exhaust the stack.
pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<Expr, ExprError> {
    let builder = Builder { source, max_depth };
    if let Some(offset) = overdeep_bracket(source, max_depth) {
        return Err(builder.depth_error(Span::new(offset, offset + 1)));
    }
    let mut pairs =
        ExpressionParser::parse(Rule::main, source).map_err(|e| convert_pest_error(e, source))?;
    let main = pairs
        .next()
        .ok_or_else(|| builder.error(Span::new(0, source.len()), ErrorKind::Syntax))?;
    builder.build(main).map(|node| node.expr)
}

/// Offset of the first bracket nested deeper than `max_depth`, ignoring
/// brackets inside comments and string or character literals.
fn overdeep_bracket(source: &str, max_depth: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'(' | b'[' | b'{' => {
                depth += 1;
                if depth > max_depth {
                    return Some(i);
                }
            }
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            quote @ (b'"' | b'\'' | b'`') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' && quote != b'`' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                while i < bytes.len() && !bytes[i..].starts_with(b"*/") {
                    i += 1;
                }
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    None
}

fn is_prefix(rule: Rule) -> bool {
    matches!(
        rule,
        Rule::neg
            | Rule::not
            | Rule::pos
            | Rule::bit_not
            | Rule::deref
            | Rule::addr_of
            | Rule::recv
            | Rule::pre_inc
            | Rule::pre_dec
    )
}

/// A built subtree and the number of levels it spans.
struct Node {
    expr: Expr,
    height: usize,
}

struct Builder<'s> {
    source: &'s str,
    max_depth: usize,
}

impl<'s> Builder<'s> {
    fn error(&self, span: Span, kind: ErrorKind) -> ExprError {
        ExprError::new(self.source, kind).with_span(span)
    }

    fn syntax_error(&self, span: Span, detail: impl Into<String>) -> ExprError {
        self.error(span, ErrorKind::Syntax).with_detail(detail)
    }

    fn depth_error(&self, span: Span) -> ExprError {
        self.syntax_error(
            span,
            format!(
                "expression nesting depth exceeds maximum of {} levels",
                self.max_depth
            ),
        )
    }

    /// Wrap `inner` one level above its deepest child.
    fn node(&self, span: Span, inner: ExprInner, below: usize) -> Result<Node, ExprError> {
        let height = below + 1;
        if height > self.max_depth {
            return Err(self.depth_error(span));
        }
        Ok(Node {
            expr: Expr(span, inner),
            height,
        })
    }

    fn leaf(&self, span: Span, inner: ExprInner) -> Result<Node, ExprError> {
        self.node(span, inner, 0)
    }

    fn first_inner(&self, pair: Pair<'s, Rule>) -> Result<Pair<'s, Rule>, ExprError> {
        let span = Span::from(pair.as_span());
        pair.into_inner()
            .next()
            .ok_or_else(|| self.syntax_error(span, "missing expected pair in rule"))
    }

    /// Prefix operators nest one level each, and the Pratt parser recurses
    /// once per operator, so a long run is rejected before it is parsed.
    fn check_prefix_runs(&self, pair: &Pair<'s, Rule>) -> Result<(), ExprError> {
        let mut run = 0;
        let mut run_start = 0;
        for inner in pair.clone().into_inner() {
            if !is_prefix(inner.as_rule()) {
                run = 0;
                continue;
            }
            if run == 0 {
                run_start = inner.as_span().start();
            }
            run += 1;
            if run + 1 > self.max_depth {
                return Err(self.depth_error(Span::new(run_start, pair.as_span().end())));
            }
        }
        Ok(())
    }

    fn build(&self, pair: Pair<'s, Rule>) -> Result<Node, ExprError> {
        let span = Span::from(pair.as_span());
        match pair.as_rule() {
            Rule::main => {
                let inner = self.first_inner(pair)?;
                self.build(inner)
            }

            Rule::expression => {
                self.check_prefix_runs(&pair)?;
                PRATT_PARSER
                    .map_primary(|primary| self.build(primary))
                    .map_prefix(|op, rhs| self.build_prefix(op, rhs?))
                    .map_infix(|lhs, op, rhs| self.build_infix(lhs?, op, rhs?))
                    .map_postfix(|lhs, op| self.build_postfix(lhs?, op))
                    .parse(pair.into_inner())
            }

            Rule::grouped => {
                let inner = self.build(self.first_inner(pair)?)?;
                self.node(span, ExprInner::Grouped(Box::new(inner.expr)), inner.height)
            }

            Rule::ident => self.leaf(span, ExprInner::Ident(pair.as_str().to_string())),

            Rule::int => {
                let value = self.int_literal(span.clone(), pair.as_str())?;
                self.leaf(span, ExprInner::Constant(value))
            }

            Rule::float => {
                let text: String = pair.as_str().chars().filter(|c| *c != '_').collect();
                let value = text
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .ok_or_else(|| self.syntax_error(span.clone(), "float literal out of range"))?;
                self.leaf(span, ExprInner::Constant(Literal::Float(value)))
            }

            Rule::string => {
                let text = pair.as_str();
                let value = unescape_string(&text[1..text.len() - 1])
                    .map_err(|e| self.syntax_error(span.clone(), e.to_string()))?;
                self.leaf(span, ExprInner::Constant(Literal::Str(value)))
            }

            Rule::raw_string => {
                let text = pair.as_str();
                let value = raw_string(&text[1..text.len() - 1]);
                self.leaf(span, ExprInner::Constant(Literal::Str(value)))
            }

            Rule::rune => {
                let text = pair.as_str();
                let value = unescape_rune(&text[1..text.len() - 1])
                    .map_err(|e| self.syntax_error(span.clone(), e.to_string()))?;
                self.leaf(span, ExprInner::Constant(Literal::from(value)))
            }

            Rule::call => {
                let mut inner = pair.into_inner();
                let name = inner
                    .next()
                    .ok_or_else(|| self.syntax_error(span.clone(), "missing function name"))?
                    .as_str()
                    .to_string();
                let mut args = Vec::new();
                let mut below = 0;
                for arg in inner {
                    let arg = self.build(arg)?;
                    below = below.max(arg.height);
                    args.push(arg.expr);
                }
                self.node(span, ExprInner::Call { name, args }, below)
            }

            Rule::composite => self.build_composite(span, pair),

            rule => Err(self.syntax_error(span, format!("unhandled rule: {:?}", rule))),
        }
    }

    fn build_prefix(&self, op: Pair<'s, Rule>, rhs: Node) -> Result<Node, ExprError> {
        let op_span = Span::from(op.as_span());
        let span = Span::combine(&op_span, &rhs.expr.0);
        let op = match op.as_rule() {
            Rule::neg => UnaryOp::Neg,
            Rule::not => UnaryOp::Not,
            _ => {
                let text = op.as_str().trim().to_string();
                return Err(self.error(op_span, ErrorKind::InvalidOperator(text)));
            }
        };
        if op == UnaryOp::Neg {
            if let Some(value) = self.negative_int_literal(&rhs.expr) {
                return self.leaf(span, ExprInner::Constant(Literal::Int(value)));
            }
        }
        self.node(
            span,
            ExprInner::Unary {
                op,
                expr: Box::new(rhs.expr),
            },
            rhs.height,
        )
    }

    /// `-9223372036854775808` is the one decimal literal that only fits
    /// `i64` once negated.
    fn negative_int_literal(&self, operand: &Expr) -> Option<i64> {
        if !matches!(operand.inner(), ExprInner::Constant(Literal::Float(_))) {
            return None;
        }
        let text = operand.0.str_of(self.source);
        if !text.bytes().all(|b| b.is_ascii_digit() || b == b'_') {
            return None;
        }
        let digits: String = text.chars().filter(|c| *c != '_').collect();
        format!("-{}", digits).parse::<i64>().ok()
    }

    fn build_infix(&self, lhs: Node, op: Pair<'s, Rule>, rhs: Node) -> Result<Node, ExprError> {
        let span = Span::combine(&lhs.expr.0, &rhs.expr.0);
        let below = lhs.height.max(rhs.height);
        let left = Box::new(lhs.expr);
        let right = Box::new(rhs.expr);
        let inner = match op.as_rule() {
            Rule::add => ExprInner::Binary { op: BinaryOp::Add, left, right },
            Rule::sub => ExprInner::Binary { op: BinaryOp::Sub, left, right },
            Rule::mul => ExprInner::Binary { op: BinaryOp::Mul, left, right },
            Rule::div => ExprInner::Binary { op: BinaryOp::Div, left, right },
            Rule::eq => ExprInner::Comparison { op: ComparisonOp::Eq, left, right },
            Rule::ne => ExprInner::Comparison { op: ComparisonOp::Neq, left, right },
            Rule::lt => ExprInner::Comparison { op: ComparisonOp::Lt, left, right },
            Rule::le => ExprInner::Comparison { op: ComparisonOp::Le, left, right },
            Rule::gt => ExprInner::Comparison { op: ComparisonOp::Gt, left, right },
            Rule::ge => ExprInner::Comparison { op: ComparisonOp::Ge, left, right },
            Rule::land => ExprInner::Boolean { op: BoolOp::And, left, right },
            Rule::lor => ExprInner::Boolean { op: BoolOp::Or, left, right },
            _ => {
                let text = op.as_str().trim().to_string();
                return Err(self.error(Span::from(op.as_span()), ErrorKind::InvalidOperator(text)));
            }
        };
        self.node(span, inner, below)
    }

    fn build_postfix(&self, lhs: Node, op: Pair<'s, Rule>) -> Result<Node, ExprError> {
        match op.as_rule() {
            Rule::index_op => {
                let span = Span::new(lhs.expr.0.0.start, op.as_span().end());
                let index = self.build(self.first_inner(op)?)?;
                self.check_constant_index(&lhs.expr, &index.expr, &span)?;
                self.node(
                    span,
                    ExprInner::Index {
                        value: Box::new(lhs.expr),
                        index: Box::new(index.expr),
                    },
                    lhs.height.max(index.height),
                )
            }
            rule => Err(self.syntax_error(
                Span::from(op.as_span()),
                format!("unknown postfix operator: {:?}", rule),
            )),
        }
    }

    /// Reject indexing that can never succeed, whatever the bindings.
    fn check_constant_index(&self, value: &Expr, index: &Expr, span: &Span) -> Result<(), ExprError> {
        let len = match value.ungrouped().inner() {
            ExprInner::Constant(Literal::Str(s)) => s.len(),
            ExprInner::Constant(_) => {
                return Err(self.error(span.clone(), ErrorKind::TypeNotIndexable));
            }
            ExprInner::Composite(elements) => elements.len(),
            _ => return Ok(()),
        };
        if let ExprInner::Constant(lit) = index.ungrouped().inner() {
            let in_range = lit
                .as_int()
                .and_then(|i| usize::try_from(i).ok())
                .is_some_and(|i| i < len);
            if !in_range {
                return Err(self.error(index.0.clone(), ErrorKind::InvalidIndex));
            }
        }
        Ok(())
    }

    fn build_composite(&self, span: Span, pair: Pair<'s, Rule>) -> Result<Node, ExprError> {
        let mut inner = pair.into_inner();
        let ty = inner
            .next()
            .ok_or_else(|| self.syntax_error(span.clone(), "missing composite type"))?;
        let ty_span = Span::from(ty.as_span());

        if ty.as_rule() == Rule::map_type {
            return Err(self.syntax_error(ty_span, "map literals are not supported"));
        }

        // The element type is the last component of `[]T` and `[N]T`; the
        // declared length of `[N]T` is not checked against the elements.
        let elem_ty = ty
            .into_inner()
            .last()
            .ok_or_else(|| self.syntax_error(ty_span.clone(), "missing element type"))?;
        if elem_ty.as_str() != "lit" {
            return Err(self.error(Span::from(elem_ty.as_span()), ErrorKind::InvalidCompositeType));
        }

        let mut elements = Vec::new();
        let mut below = 0;
        for element in inner {
            let element_span = Span::from(element.as_span());
            let mut parts = element.into_inner();
            let value = parts
                .next()
                .ok_or_else(|| self.syntax_error(element_span.clone(), "missing element"))?;
            if parts.next().is_some() {
                return Err(self.syntax_error(element_span, "keyed elements are not supported"));
            }
            let value = self.build(value)?;
            below = below.max(value.height);
            elements.push(value.expr);
        }

        self.node(span, ExprInner::Composite(elements), below)
    }

    /// Integer literal in any of the decimal, hex, octal or binary forms.
    ///
    /// Decimal literals beyond the `i64` range become floats, so that
    /// `-9223372036854775808` still parses. Hex, octal and binary literals
    /// must fit an `i64`.
    fn int_literal(&self, span: Span, text: &str) -> Result<Literal, ExprError> {
        let digits: String = text
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let (radix, body) = if let Some(rest) = digits.strip_prefix("0x") {
            (16, rest)
        } else if let Some(rest) = digits.strip_prefix("0b") {
            (2, rest)
        } else if let Some(rest) = digits.strip_prefix("0o") {
            (8, rest)
        } else if digits.len() > 1 && digits.starts_with('0') {
            (8, &digits[1..])
        } else {
            (10, digits.as_str())
        };

        if let Ok(i) = i64::from_str_radix(body, radix) {
            return Ok(Literal::Int(i));
        }
        let wide = if radix == 10 {
            body.parse::<f64>().ok().filter(|f| f.is_finite())
        } else {
            None
        };
        wide.map(Literal::Float)
            .ok_or_else(|| self.syntax_error(span, "integer literal out of range"))
    }
}
