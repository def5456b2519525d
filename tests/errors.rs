mod cases;

use cases::any_error;
use dexpr::{ErrorKind, LiteralError};

fn function_error(name: &str, cause: &str) -> ErrorKind {
    ErrorKind::Function {
        name: name.to_string(),
        cause: LiteralError::msg(cause),
    }
}

// Evaluation failures
test_case!(sum_is_not_bool, input: "7 + 8", bool_error: ErrorKind::IncompatibleTypes);
test_case!(word_is_not_bool, input: "str", bool_error: ErrorKind::IncompatibleTypes);
test_case!(order_int_and_word, input: "7 < \"hello\"", bool_error: ErrorKind::IncompatibleTypes);
test_case!(order_word_and_float, input: "\"world\" > 2.1", bool_error: ErrorKind::IncompatibleTypes);
test_case!(and_on_ints, input: "7 && 9", bool_error: ErrorKind::IncompatibleTypes);
test_case!(
    missing_variable_on_left,
    input: "total > 20",
    bool_error: ErrorKind::VarNotExist("total".to_string()),
);
test_case!(
    missing_variable_on_right,
    input: "20 < total",
    bool_error: ErrorKind::VarNotExist("total".to_string()),
);
test_case!(
    not_of_missing_variable,
    input: "!bob",
    bool_error: ErrorKind::VarNotExist("bob".to_string()),
);
test_case!(
    negation_of_missing_variable,
    input: "7 + -bob > 2",
    bool_error: ErrorKind::VarNotExist("bob".to_string()),
);
test_case!(
    missing_function,
    input: "bob(8+2.257) == 7",
    bool_error: ErrorKind::FunctionNotExist("bob".to_string()),
);
test_case!(negate_word, input: "-\"something\"", bool_error: ErrorKind::IncompatibleTypes);
test_case!(not_of_float, input: "!5.2", bool_error: ErrorKind::IncompatibleTypes);
test_case!(
    error_variable_in_equality,
    input: "anError == anError",
    bool_error: ErrorKind::Propagated(any_error()),
);
test_case!(
    error_variable_in_inequality,
    input: "anError != anError",
    bool_error: ErrorKind::Propagated(any_error()),
);
test_case!(
    error_variable_in_arithmetic,
    input: "1 + anError",
    error: ErrorKind::Propagated(any_error()),
);
test_case!(
    error_variable_alone,
    input: "anError",
    error: ErrorKind::Propagated(any_error()),
);

// Function failures
test_case!(
    roundto_too_many_arguments,
    input: "roundto(5.567, 2, 9, 23)",
    error: function_error("roundto", "too many arguments"),
);
test_case!(
    roundto_too_few_arguments,
    input: "roundto(5.567)",
    error: function_error("roundto", "too few arguments"),
);
test_case!(
    roundto_word_value,
    input: "roundto(str, 2)",
    error: function_error("roundto", "can't convert to float"),
);
test_case!(
    roundto_word_places,
    input: "roundto(5.567, str)",
    error: function_error("roundto", "can't convert to int"),
);
test_case!(
    roundto_argument_fails_first,
    input: "roundto(5.567, bob)",
    error: ErrorKind::VarNotExist("bob".to_string()),
);

// Rejected at compile time
test_case!(braces_between_operands, input: "7 {} 3", rejects: ErrorKind::Syntax);
test_case!(unknown_character, input: "8/cot££t", rejects: ErrorKind::Syntax);
test_case!(unclosed_array_type, input: "[lit{fred", rejects: ErrorKind::Syntax);
test_case!(unclosed_array_type_with_body, input: "[lit{fred}", rejects: ErrorKind::Syntax);
test_case!(unclosed_composite, input: "[]lit{fred", rejects: ErrorKind::Syntax);
test_case!(function_literal, input: "func() bool {return 1==1}", rejects: ErrorKind::Syntax);
test_case!(leading_operator, input: "/bob harry", rejects: ErrorKind::Syntax);
test_case!(empty_input, input: "", rejects: ErrorKind::Syntax);
test_case!(unclosed_string, input: "\"hello", rejects: ErrorKind::Syntax);
test_case!(
    bitwise_and,
    input: "10 & 101",
    rejects: ErrorKind::InvalidOperator("&".to_string()),
);
test_case!(
    remainder,
    input: "10 % 3",
    rejects: ErrorKind::InvalidOperator("%".to_string()),
);
test_case!(
    shift,
    input: "1 << 3",
    rejects: ErrorKind::InvalidOperator("<<".to_string()),
);
test_case!(
    address_of,
    input: "&a == 1",
    rejects: ErrorKind::InvalidOperator("&".to_string()),
);
test_case!(
    unary_plus,
    input: "+a",
    rejects: ErrorKind::InvalidOperator("+".to_string()),
);
test_case!(
    send_arrow,
    input: "1 <- 2",
    rejects: ErrorKind::InvalidOperator("<-".to_string()),
);
test_case!(
    prefix_decrement,
    input: "--5",
    rejects: ErrorKind::InvalidOperator("--".to_string()),
);
test_case!(
    increment_between_operands,
    input: "1 ++ 2",
    rejects: ErrorKind::InvalidOperator("++".to_string()),
);
test_case!(
    decrement_between_operands,
    input: "a--b",
    rejects: ErrorKind::InvalidOperator("--".to_string()),
);

#[test]
fn test_error_message() {
    let err = cases::eval("8/bob").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid expression: 8/bob (variable doesn't exist: bob)"
    );

    let err = cases::eval("roundto(5.567, 2, 9, 23)").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid expression: roundto(5.567, 2, 9, 23) (function: roundto, returned error: too many arguments)"
    );
}

#[test]
fn test_error_span() {
    let input = "1 + 8 / bob";
    let err = cases::eval(input).unwrap_err();
    let span = err.span().expect("evaluation errors carry a span");
    assert_eq!(span.str_of(input), "bob");
}
