//! Shared fixtures for the integration tests.
//!
//! Every test builds its own engine and bindings; nothing here is global.
#![allow(dead_code)]

use dexpr::{Bindings, Engine, EngineOptions, ErrorKind, ExprError, Literal, LiteralError, stdlib};

/// The variables most expression tests run against.
pub fn vars() -> Bindings {
    let mut vars = Bindings::from([
        ("a".to_string(), Literal::Int(4)),
        ("b".to_string(), Literal::Int(3)),
        ("c".to_string(), Literal::Float(4.5)),
        ("d".to_string(), Literal::Float(3.5)),
        ("str".to_string(), Literal::from("hello")),
        ("numStrA".to_string(), Literal::from("4")),
        ("numStrB".to_string(), Literal::from("3")),
        ("numStrC".to_string(), Literal::from("4.5")),
        ("numStrD".to_string(), Literal::from("3.5")),
        ("numStrE".to_string(), Literal::from("4.5")),
        ("trueStr".to_string(), Literal::Bool(true)),
        ("anError".to_string(), Literal::from(any_error())),
    ]);
    for (value, word) in KEYWORDS.iter().enumerate() {
        vars.insert(word.to_string(), Literal::Int(value as i64 + 1));
    }
    vars
}

/// Reserved words of the host grammar, bound to 1, 2, 3, ... in order.
pub const KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// The error stored in `anError`.
pub fn any_error() -> LiteralError {
    LiteralError::msg("this is an error")
}

/// An engine with the standard functions registered.
pub fn engine() -> Engine {
    Engine::new(EngineOptions::default(), stdlib::register)
}

pub fn eval(input: &str) -> Result<Literal, ExprError> {
    engine().eval(input, &vars())
}

pub fn eval_bool(input: &str) -> Result<bool, ExprError> {
    engine().eval_bool(input, &vars())
}

/// Evaluate `input`, expecting it to fail, and return the error kind.
pub fn eval_kind(input: &str) -> ErrorKind {
    match eval(input) {
        Ok(value) => panic!("Expected '{}' to fail, got {:?}", input, value),
        Err(e) => {
            assert_eq!(e.text(), input, "error must carry the source text");
            e.into_kind()
        }
    }
}

/// Like `eval_kind`, but through `evaluate_bool`.
pub fn eval_bool_kind(input: &str) -> ErrorKind {
    match eval_bool(input) {
        Ok(value) => panic!("Expected '{}' to fail, got {:?}", input, value),
        Err(e) => {
            assert_eq!(e.text(), input, "error must carry the source text");
            e.into_kind()
        }
    }
}

/// Check a table of boolean expressions.
pub fn assert_bools(cases: &[(&str, bool)]) {
    let engine = engine();
    let vars = vars();
    for (input, want) in cases {
        let got = engine.eval_bool(input, &vars);
        assert_eq!(got, Ok(*want), "input: {}", input);
    }
}

/// Compile `input`, expecting it to be rejected, and return the error kind.
pub fn compile_kind(input: &str) -> ErrorKind {
    match engine().compile(input) {
        Ok(expr) => panic!("Expected '{}' not to compile, got {:?}", input, expr.ast()),
        Err(e) => {
            assert_eq!(e.text(), input, "error must carry the source text");
            e.into_kind()
        }
    }
}

/// Declare a test evaluating one expression against the shared fixtures.
///
/// - `want:` compares the result literal exactly.
/// - `shows:` compares the displayed result.
/// - `bool:` evaluates with `evaluate_bool`.
/// - `error:` expects evaluation to fail with the given kind.
/// - `bool_error:` expects `evaluate_bool` to fail with the given kind.
/// - `rejects:` expects compilation to fail with the given kind.
#[macro_export]
macro_rules! test_case {
    ($name:ident, input: $input:expr, want: $want:expr $(,)?) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!(
                cases::eval(&$input),
                Ok(dexpr::Literal::from($want)),
                "input: {}",
                $input
            );
        }
    };
    ($name:ident, input: $input:expr, shows: $shows:expr $(,)?) => {
        #[test]
        fn $name() {
            let value = cases::eval(&$input)
                .unwrap_or_else(|e| panic!("Expected '{}' to evaluate: {}", $input, e));
            pretty_assertions::assert_eq!(value.to_string(), $shows, "input: {}", $input);
        }
    };
    ($name:ident, input: $input:expr, bool: $want:expr $(,)?) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!(cases::eval_bool(&$input), Ok($want), "input: {}", $input);
        }
    };
    ($name:ident, input: $input:expr, error: $kind:expr $(,)?) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!(cases::eval_kind(&$input), $kind, "input: {}", $input);
        }
    };
    ($name:ident, input: $input:expr, bool_error: $kind:expr $(,)?) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!(cases::eval_bool_kind(&$input), $kind, "input: {}", $input);
        }
    };
    ($name:ident, input: $input:expr, rejects: $kind:expr $(,)?) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!(cases::compile_kind(&$input), $kind, "input: {}", $input);
        }
    };
}
