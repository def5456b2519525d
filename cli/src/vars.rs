//! Parsing of `--var NAME=VALUE` arguments.

use dexpr::Literal;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum VarError {
    #[error("invalid variable `{0}`: expected NAME=VALUE")]
    #[diagnostic(help("pass variables as --var name=value"))]
    MissingEquals(String),

    #[error("invalid variable name `{0}`")]
    #[diagnostic(help("names start with a letter or `_` and contain only letters, digits and `_`"))]
    InvalidName(String),
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Parse a `NAME=VALUE` binding.
///
/// `true` and `false` become booleans. Anything else is kept as a string,
/// which behaves as a number wherever it parses as one.
pub fn parse_var(arg: &str) -> Result<(String, Literal), VarError> {
    let Some((name, value)) = arg.split_once('=') else {
        return Err(VarError::MissingEquals(arg.to_string()));
    };
    let name = name.trim();
    if !is_valid_name(name) {
        return Err(VarError::InvalidName(name.to_string()));
    }

    let value = match value {
        "true" => Literal::Bool(true),
        "false" => Literal::Bool(false),
        other => Literal::from(other),
    };
    Ok((name.to_string(), value))
}
