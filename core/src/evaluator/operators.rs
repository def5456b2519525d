//! Binary and unary operator implementations.
//!
//! Operands are dynamic literals. Arithmetic stays in the integer domain
//! while both operands are integers (or strings holding one) and the exact
//! result fits in an `i64`; otherwise it is carried out in floating point.
//! A float operand keeps the result a float. A float result that
//! overflows to infinity is an error, one that underflows to zero is not.

use core::cmp::Ordering;

use crate::errors::ErrorKind;
use crate::parser::{BinaryOp, ComparisonOp};
use crate::values::Literal;

/// Evaluate a binary operation on two integers.
///
/// Returns `None` when the exact result is not representable as an `i64`:
/// on overflow, and for divisions that are not exact.
pub(super) fn eval_binary_int(op: BinaryOp, left: i64, right: i64) -> Option<i64> {
    match op {
        BinaryOp::Add => left.checked_add(right),
        BinaryOp::Sub => left.checked_sub(right),
        BinaryOp::Mul => left.checked_mul(right),
        // checked_rem is None for a zero divisor and for i64::MIN % -1.
        BinaryOp::Div => match left.checked_rem(right) {
            Some(0) => left.checked_div(right),
            _ => None,
        },
    }
}

/// Evaluate a binary operation on two floats.
///
/// Follows IEEE 754 semantics (produces inf/nan rather than panicking).
pub(super) fn eval_binary_float(op: BinaryOp, left: f64, right: f64) -> f64 {
    match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
        BinaryOp::Mul => left * right,
        BinaryOp::Div => left / right,
    }
}

fn propagated(left: &Literal, right: &Literal) -> Option<ErrorKind> {
    left.error_state()
        .or_else(|| right.error_state())
        .map(|e| ErrorKind::Propagated(e.clone()))
}

fn checked_float(value: f64) -> Result<Literal, ErrorKind> {
    if value.is_finite() {
        Ok(Literal::Float(value))
    } else {
        Err(ErrorKind::UnderflowOverflow)
    }
}

/// `+ - * /` on two literals, coercing numeric strings.
pub(super) fn eval_binary(op: BinaryOp, left: &Literal, right: &Literal) -> Result<Literal, ErrorKind> {
    if let Some(kind) = propagated(left, right) {
        return Err(kind);
    }

    if let (Some(l), Some(r)) = (left.as_int_operand(), right.as_int_operand()) {
        if op == BinaryOp::Div && r == 0 {
            return Err(ErrorKind::DivByZero);
        }
        if let Some(result) = eval_binary_int(op, l, r) {
            return Ok(Literal::Int(result));
        }
    }

    let (Some(l), Some(r)) = (left.as_float(), right.as_float()) else {
        return Err(ErrorKind::IncompatibleTypes);
    };
    if op == BinaryOp::Div && r == 0.0 {
        return Err(ErrorKind::DivByZero);
    }
    checked_float(eval_binary_float(op, l, r))
}

/// Unary minus. Integers that cannot be negated in range become floats.
pub(super) fn negate(value: &Literal) -> Result<Literal, ErrorKind> {
    if let Some(e) = value.error_state() {
        return Err(ErrorKind::Propagated(e.clone()));
    }
    if let Some(i) = value.as_int_operand() {
        return Ok(match i.checked_neg() {
            Some(n) => Literal::Int(n),
            None => Literal::Float(-(i as f64)),
        });
    }
    match value.as_float() {
        Some(f) => checked_float(-f),
        None => Err(ErrorKind::IncompatibleTypes),
    }
}

/// Logical not. Only boolean literals can be negated.
pub(super) fn not(value: &Literal) -> Result<Literal, ErrorKind> {
    if let Some(e) = value.error_state() {
        return Err(ErrorKind::Propagated(e.clone()));
    }
    value
        .as_bool()
        .map(|b| Literal::Bool(!b))
        .ok_or(ErrorKind::IncompatibleTypes)
}

/// Equality across kinds.
///
/// Booleans only ever equal booleans. Otherwise operands are compared as
/// integers, then as floats, then by their text.
pub(super) fn equal(left: &Literal, right: &Literal) -> Result<bool, ErrorKind> {
    if let Some(kind) = propagated(left, right) {
        return Err(kind);
    }
    match (left, right) {
        (Literal::Bool(l), Literal::Bool(r)) => return Ok(l == r),
        (Literal::Bool(_), _) | (_, Literal::Bool(_)) => return Ok(false),
        _ => {}
    }
    if let (Some(l), Some(r)) = (left.as_int(), right.as_int()) {
        return Ok(l == r);
    }
    if let (Some(l), Some(r)) = (left.as_float(), right.as_float()) {
        return Ok(l == r);
    }
    Ok(left.as_string() == right.as_string())
}

/// Numeric ordering. Anything that is not a number, or a string holding
/// one, cannot be ordered.
pub(super) fn order(left: &Literal, right: &Literal) -> Result<Ordering, ErrorKind> {
    if let Some(kind) = propagated(left, right) {
        return Err(kind);
    }
    if let (Some(l), Some(r)) = (left.as_int(), right.as_int()) {
        return Ok(l.cmp(&r));
    }
    match (left.as_float(), right.as_float()) {
        (Some(l), Some(r)) => l.partial_cmp(&r).ok_or(ErrorKind::IncompatibleTypes),
        _ => Err(ErrorKind::IncompatibleTypes),
    }
}

/// Apply a comparison operator.
pub(super) fn compare(op: ComparisonOp, left: &Literal, right: &Literal) -> Result<bool, ErrorKind> {
    Ok(match op {
        ComparisonOp::Eq => equal(left, right)?,
        ComparisonOp::Neq => !equal(left, right)?,
        ComparisonOp::Lt => order(left, right)? == Ordering::Less,
        ComparisonOp::Le => order(left, right)? != Ordering::Greater,
        ComparisonOp::Gt => order(left, right)? == Ordering::Greater,
        ComparisonOp::Ge => order(left, right)? != Ordering::Less,
    })
}
