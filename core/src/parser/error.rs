use crate::errors::{ErrorKind, ExprError};
use crate::parser::{Rule, Span};

/// Convert a Pest error into a syntax error carrying the failure position
/// and a human-readable description of what was expected.
pub fn convert_pest_error(err: pest::error::Error<Rule>, source: &str) -> ExprError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span(pos..pos),
        pest::error::InputLocation::Span((start, end)) => Span(start..end),
    };

    let detail = match err.variant {
        ErrorVariant::ParsingError { positives, .. } => {
            let expected = format_expected_rules(&positives);
            let found = describe_found(source, span.0.start);
            format!("expected {}, found {}", expected, found)
        }
        ErrorVariant::CustomError { message } => message,
    };

    ExprError::new(source, ErrorKind::Syntax)
        .with_span(span)
        .with_detail(detail)
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    let mut concepts: Vec<&str> = Vec::new();

    for rule in rules {
        let concept = match rule {
            Rule::int | Rule::float | Rule::string | Rule::raw_string | Rule::rune => "literal",
            Rule::ident => "identifier",
            Rule::lor
            | Rule::land
            | Rule::and_not
            | Rule::eq
            | Rule::ne
            | Rule::shl
            | Rule::le
            | Rule::lt
            | Rule::shr
            | Rule::ge
            | Rule::gt
            | Rule::add
            | Rule::sub
            | Rule::bor
            | Rule::bxor
            | Rule::mul
            | Rule::div
            | Rule::rem
            | Rule::band
            | Rule::arrow
            | Rule::inc
            | Rule::dec => "operator",
            Rule::index_op => "index",
            Rule::type_expr
            | Rule::map_type
            | Rule::slice_type
            | Rule::array_type
            | Rule::pointer_type
            | Rule::qualified_ident => "type",
            Rule::EOI => "end of input",
            _ => "expression",
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    match concepts.split_last() {
        None => "something else".to_string(),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

/// Describe the text at the failure position.
fn describe_found(source: &str, pos: usize) -> String {
    match source.get(pos..).and_then(|rest| rest.chars().next()) {
        None => "end of input".to_string(),
        Some(c) => format!("'{}'", c),
    }
}
