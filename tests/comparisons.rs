mod cases;

use cases::assert_bools;
use dexpr::ErrorKind;

#[test]
fn test_equality() {
    assert_bools(&[
        ("1 == 1", true),
        ("1 == 2", false),
        ("2.5 == 2.5", true),
        ("2.5 == 3.5", false),
        ("1 == 1.5", false),
        // Mixed int and float
        ("1.0 == 1", true),
        ("1 == 1.0", true),
        ("numStrB == 3", true),
        ("numStrB == 3.0", true),
        ("3 == numStrB", true),
        ("3.0 == numStrB", true),
        ("a == 4", true),
        ("a == 5", false),
        ("a == a", true),
        ("a == b", false),
        ("\"hello\" == \"hello\"", true),
        ("\"hllo\" == \"hello\"", false),
        ("\"hllo\" == 7", false),
        ("str == \"hello\"", true),
        ("str == \"helo\"", false),
        ("numStrA == 3", false),
        ("numStrA == 4", true),
        ("numStrA == numStrA", true),
        ("numStrA == numStrB", false),
        ("numStrC == numStrD", false),
        ("numStrC == numStrE", true),
        ("c == numStrC", true),
    ]);
}

#[test]
fn test_inequality() {
    assert_bools(&[
        ("a != 4", false),
        ("a != 5", true),
        ("a != a", false),
        ("a != b", true),
        ("\"hello\" != \"hello\"", false),
        ("\"hllo\" != \"hello\"", true),
        ("\"hllo\" != 7", true),
        ("str != \"hello\"", false),
        ("str != \"helo\"", true),
        ("numStrA != 3", true),
        ("numStrA != 4", false),
        ("numStrA != numStrA", false),
        ("numStrA != numStrB", true),
        ("numStrC != numStrD", true),
    ]);
}

#[test]
fn test_bool_words_are_just_strings() {
    assert_bools(&[
        ("\"true\" == 1", false),
        ("\"true\" == 1.0", false),
        ("\"true\" == \"TRUE\"", false),
        ("\"TRUE\" == \"TRUE\"", true),
        ("\"false\" == \"FALSE\"", false),
        ("\"FALSE\" == \"FALSE\"", true),
        ("\"false\" ==  0", false),
        ("\"false\" ==  0.0", false),
        ("\"true\" != 0", true),
        ("\"true\" != 1.0", true),
        ("\"true\" != \"TRUE\"", true),
        ("\"TRUE\" != \"TRUE\"", false),
        ("\"false\" != \"FALSE\"", true),
        ("\"FALSE\" != \"FALSE\"", false),
        ("\"false\" !=  0", true),
        ("\"false\" !=  0.0", true),
    ]);
}

#[test]
fn test_bools_never_equal_other_kinds() {
    assert_bools(&[
        ("trueStr == trueStr", true),
        ("trueStr == (1 == 1)", true),
        ("trueStr != (1 == 2)", true),
        ("trueStr == 1", false),
        ("trueStr == \"true\"", false),
        ("\"true\" == trueStr", false),
        ("trueStr != 1", true),
    ]);
}

#[test]
fn test_less_than() {
    assert_bools(&[
        ("6 < 7", true),
        ("7 < 7", false),
        ("8 < 7", false),
        ("6.7 < 7", true),
        ("6.7 < 7.7", true),
        ("7 < 7.2", true),
        ("7 < 6.7", false),
        ("3 < a", true),
        ("4 < a", false),
        ("a < 5", true),
        ("a < 4", false),
        ("b < a", true),
        ("b < b", false),
        ("a < b", false),
        ("3 < numStrA", true),
        ("4 < numStrA", false),
        ("numStrA < 5", true),
        ("numStrA < 4", false),
        ("numStrB < numStrA", true),
        ("numStrB < numStrB", false),
        ("numStrA < numStrB", false),
        ("numStrA < numStrC", true),
        ("numStrD < numStrC", true),
    ]);
}

#[test]
fn test_less_or_equal() {
    assert_bools(&[
        ("6 <= 7", true),
        ("7 <= 7", true),
        ("8 <= 7", false),
        ("6.7 <= 7", true),
        ("6.7 <= 7.7", true),
        ("7 <= 7.2", true),
        ("7 <= 6.7", false),
        ("b <= a", true),
        ("a <= a", true),
        ("a <= b", false),
        ("3 <= numStrA", true),
        ("4 <= numStrA", true),
        ("5 <= numStrA", false),
        ("5.5 <= numStrA", false),
        ("numStrA <= 5", true),
        ("numStrA <= 4", true),
        ("numStrA <= 3", false),
        ("numStrB <= numStrA", true),
        ("numStrB <= numStrB", true),
        ("numStrA <= numStrB", false),
        ("numStrA <= numStrC", true),
        ("numStrD <= numStrC", true),
    ]);
}

#[test]
fn test_greater_than() {
    assert_bools(&[
        ("6 > 7", false),
        ("7 > 7", false),
        ("8 > 7", true),
        ("6.7 > 7", false),
        ("6.7 > 7.7", false),
        ("7 > 7.2", false),
        ("b > a", false),
        ("a > b", true),
        ("3 > numStrA", false),
        ("4 > numStrA", false),
        ("5 > numStrA", true),
        ("5.5 > numStrA", true),
        ("numStrA > 5", false),
        ("numStrA > 4", false),
        ("numStrA > 3", true),
        ("numStrB > numStrA", false),
        ("numStrB > numStrB", false),
        ("numStrA > numStrB", true),
        ("numStrA > numStrC", false),
        ("numStrD > numStrC", false),
    ]);
}

#[test]
fn test_greater_or_equal() {
    assert_bools(&[
        ("6 >= 7", false),
        ("7 >= 7", true),
        ("8 >= 7", true),
        ("6.7 >= 7", false),
        ("6.7 >= 7.7", false),
        ("7.2 >= 7", true),
        ("7.2 >= 7.2", true),
        ("b >= a", false),
        ("a >= b", true),
        ("3 >= numStrA", false),
        ("4 >= numStrA", true),
        ("5 >= numStrA", true),
        ("5.5 >= numStrA", true),
        ("numStrA >= 5", false),
        ("numStrA >= 4", true),
        ("numStrA >= 3", true),
        ("numStrB >= numStrA", false),
        ("numStrB >= numStrB", true),
        ("numStrA >= numStrB", true),
        ("numStrA >= numStrC", false),
        ("numStrD >= numStrC", false),
    ]);
}

#[test]
fn test_arithmetic_in_comparisons() {
    assert_bools(&[
        ("5 + 1.5 > 6", true),
        ("5 + 1 > 6", false),
        ("a + b > 6", true),
        ("a + b > 7", false),
        ("a + b > 8", false),
        ("numStrA + numStrB > 6", true),
        ("numStrA + numStrB > 7", false),
        ("numStrA + numStrB > 8", false),
        ("numStrC + numStrD > 7", true),
        ("numStrC + numStrD == 8.0", true),
        ("numStrC + numStrD == 8", true),
        ("numStrC + numStrD > 8", false),
        ("9 + (8 + 2) > 18", true),
        ("9 + (8 + 2) > 19", false),
        ("roundto(8+2.25, 1) == 10.3", true),
        ("roundto(8+2.25, 1) == 10.25", false),
    ]);
}

#[test]
fn test_logic() {
    assert_bools(&[
        ("trueStr", true),
        ("!trueStr", false),
        ("!!trueStr", true),
        ("9 > 8 && 2 < 3", true),
        ("9 > 9 && 2 < 3", false),
        ("9 > 8 && 3 < 3", false),
        ("9 > 9 && 3 < 3", false),
        ("9 > 8 && 2 < 3 && 7 > 2", true),
        ("9 > 8 && 2 < 3 && 7 > 7", false),
        ("9 > 8 || 2 < 3", true),
        ("9 > 9 || 2 < 3", true),
        ("9 > 8 || 3 < 3", true),
        ("9 > 9 || 3 < 3", false),
        ("9 > 8 || 2 < 3 || 7 > 2", true),
        ("8 > 8 || 3 < 3 || 7 > 7", false),
    ]);
}

#[test]
fn test_short_circuit_skips_failing_operand() {
    assert_bools(&[
        ("1 == 2 && 8 / 0 > 1", false),
        ("1 == 1 || 8 / 0 > 1", true),
        ("!trueStr && missing", false),
        ("trueStr || missing(1)", true),
    ]);
}

test_case!(
    and_still_evaluates_right_side,
    input: "trueStr && 8 / 0 > 1",
    error: ErrorKind::DivByZero,
);
test_case!(
    or_still_evaluates_right_side,
    input: "!trueStr || missing",
    error: ErrorKind::VarNotExist("missing".to_string()),
);
test_case!(int_is_not_bool, input: "7 && 9", error: ErrorKind::IncompatibleTypes);
test_case!(
    right_operand_must_be_bool,
    input: "trueStr && 9",
    error: ErrorKind::IncompatibleTypes,
);
test_case!(order_int_and_word, input: "7 < \"hello\"", error: ErrorKind::IncompatibleTypes);
test_case!(order_word_and_float, input: "\"world\" > 2.1", error: ErrorKind::IncompatibleTypes);
test_case!(order_bools, input: "trueStr > trueStr", error: ErrorKind::IncompatibleTypes);
