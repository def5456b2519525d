pub mod string_literal;

pub use string_literal::{UnescapeError, raw_string, unescape_rune, unescape_string};
