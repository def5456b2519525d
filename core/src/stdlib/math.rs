//! Math functions
//!
//! Functions: roundto, abs, min, max

use crate::{
    api::EnvironmentBuilder,
    values::{Literal, LiteralError, NativeFn},
};

pub fn register(env: &mut EnvironmentBuilder) {
    env.register("roundto", roundto as NativeFn);
    env.register("abs", abs as NativeFn);
    env.register("min", min as NativeFn);
    env.register("max", max as NativeFn);
}

fn arity(args: &[Literal], min: usize, max: usize) -> Result<(), LiteralError> {
    if args.len() > max {
        Err(LiteralError::msg("too many arguments"))
    } else if args.len() < min {
        Err(LiteralError::msg("too few arguments"))
    } else {
        Ok(())
    }
}

fn float_arg(arg: &Literal) -> Result<f64, LiteralError> {
    arg.as_float()
        .ok_or_else(|| LiteralError::msg("can't convert to float"))
}

// ============================================================================
// Rounding
// ============================================================================

/// `roundto(x, places)`: round `x` to `places` decimal places, with ties
/// rounded up.
pub fn roundto(args: &[Literal]) -> Result<Literal, LiteralError> {
    arity(args, 2, 2)?;
    let x = float_arg(&args[0])?;
    let places = args[1]
        .as_int()
        .ok_or_else(|| LiteralError::msg("can't convert to int"))?;
    let places = i32::try_from(places).map_err(|_| LiteralError::msg("can't convert to int"))?;

    let shift = 10f64.powi(places);
    let rounded = (0.5 + x * shift).floor() / shift;
    if rounded.is_finite() {
        Ok(Literal::Float(rounded))
    } else {
        Err(LiteralError::msg("result out of range"))
    }
}

// ============================================================================
// Basic Operations
// ============================================================================

/// `abs(x)`: absolute value. Integers stay integers.
pub fn abs(args: &[Literal]) -> Result<Literal, LiteralError> {
    arity(args, 1, 1)?;
    if let Some(i) = args[0].as_int_operand() {
        if let Some(a) = i.checked_abs() {
            return Ok(Literal::Int(a));
        }
    }
    Ok(Literal::Float(float_arg(&args[0])?.abs()))
}

/// Shared body of `min` and `max`. The pick functions return true when a
/// candidate should replace the current best.
fn extreme(
    args: &[Literal],
    pick_int: fn(i64, i64) -> bool,
    pick_float: fn(f64, f64) -> bool,
) -> Result<Literal, LiteralError> {
    arity(args, 1, usize::MAX)?;

    let ints: Option<Vec<i64>> = args.iter().map(Literal::as_int_operand).collect();
    if let Some(ints) = ints {
        let mut best = ints[0];
        for &i in &ints[1..] {
            if pick_int(i, best) {
                best = i;
            }
        }
        return Ok(Literal::Int(best));
    }

    let mut best = float_arg(&args[0])?;
    for arg in &args[1..] {
        let f = float_arg(arg)?;
        if pick_float(f, best) {
            best = f;
        }
    }
    Ok(Literal::Float(best))
}

/// `min(a, b, ...)`: smallest argument.
pub fn min(args: &[Literal]) -> Result<Literal, LiteralError> {
    extreme(args, |a, b| a < b, |a, b| a < b)
}

/// `max(a, b, ...)`: largest argument.
pub fn max(args: &[Literal]) -> Result<Literal, LiteralError> {
    extreme(args, |a, b| a > b, |a, b| a > b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn call(f: NativeFn, args: &[Literal]) -> Result<Literal, String> {
        f(args).map_err(|e| e.to_string())
    }

    #[test]
    fn test_roundto() {
        assert_eq!(
            call(roundto, &[Literal::Float(5.567), Literal::Int(2)]),
            Ok(Literal::Float(5.57))
        );
        assert_eq!(
            call(roundto, &[Literal::Float(-17.5), Literal::Int(0)]),
            Ok(Literal::Float(-17.0))
        );
        assert_eq!(
            call(roundto, &[Literal::Float(10.25), Literal::Int(1)]),
            Ok(Literal::Float(10.3))
        );
        assert_eq!(
            call(roundto, &[Literal::from("19.1234"), Literal::from("2")]),
            Ok(Literal::Float(19.12))
        );
    }

    #[test]
    fn test_roundto_errors() {
        let x = Literal::Float(5.567);
        assert_eq!(
            call(roundto, &[x.clone(), Literal::Int(2), Literal::Int(9), Literal::Int(23)]),
            Err("too many arguments".to_string())
        );
        assert_eq!(call(roundto, &[x.clone()]), Err("too few arguments".to_string()));
        assert_eq!(
            call(roundto, &[Literal::from("fred"), Literal::Int(2)]),
            Err("can't convert to float".to_string())
        );
        assert_eq!(
            call(roundto, &[x, Literal::Float(2.5)]),
            Err("can't convert to int".to_string())
        );
    }

    #[test]
    fn test_abs() {
        assert_eq!(call(abs, &[Literal::Int(-3)]), Ok(Literal::Int(3)));
        assert_eq!(call(abs, &[Literal::Float(-2.5)]), Ok(Literal::Float(2.5)));
        assert_eq!(call(abs, &[Literal::from("-4")]), Ok(Literal::Int(4)));
        assert_eq!(call(abs, &[Literal::Float(-2.0)]), Ok(Literal::Float(2.0)));
        assert_eq!(
            call(abs, &[Literal::Int(i64::MIN)]),
            Ok(Literal::Float(9_223_372_036_854_775_808.0))
        );
        assert_eq!(call(abs, &[Literal::Bool(true)]), Err("can't convert to float".to_string()));
        assert_eq!(call(abs, &[]), Err("too few arguments".to_string()));
    }

    #[test]
    fn test_min_max() {
        let ints = [Literal::Int(3), Literal::Int(-1), Literal::from("7")];
        assert_eq!(call(min, &ints), Ok(Literal::Int(-1)));
        assert_eq!(call(max, &ints), Ok(Literal::Int(7)));

        let mixed = [Literal::Int(3), Literal::Float(2.5)];
        assert_eq!(call(min, &mixed), Ok(Literal::Float(2.5)));
        assert_eq!(call(max, &mixed), Ok(Literal::Float(3.0)));
        let whole = [Literal::Int(1), Literal::Float(2.0)];
        assert_eq!(call(max, &whole), Ok(Literal::Float(2.0)));

        assert_eq!(call(max, &[Literal::Int(1)]), Ok(Literal::Int(1)));
        assert_eq!(call(min, &[]), Err("too few arguments".to_string()));
        assert_eq!(
            call(max, &[Literal::Int(1), Literal::from("x")]),
            Err("can't convert to float".to_string())
        );
    }
}
