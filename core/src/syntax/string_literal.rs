//! Decoding of quoted string and character literals.
//!
//! The escape sequences are those of Go: `\a \b \f \n \r \t \v \\`, the
//! quote of the literal, `\xHH` and `\ooo` byte escapes, and `\uHHHH` and
//! `\UHHHHHHHH` code point escapes. In a string, byte escapes contribute raw
//! bytes, and the decoded bytes must form valid UTF-8. In a character
//! literal, a byte escape denotes the code point with that value.

use core::fmt;
use core::iter::Peekable;
use core::str::CharIndices;

/// Errors that can occur when unescaping literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnescapeError {
    /// Invalid escape sequence (e.g., `\q`)
    InvalidEscape { pos: usize, seq: String },
    /// Too few digits after `\x`, `\u`, `\U` or in an octal escape
    IncompleteEscape {
        pos: usize,
        expected: usize,
        got: usize,
    },
    /// Octal escape above `\377`
    OctalOutOfRange { pos: usize, value: u32 },
    /// Invalid Unicode scalar value
    InvalidUnicodeScalar { pos: usize, value: u32 },
    /// Byte escapes produced a string that is not valid UTF-8
    InvalidUtf8,
    /// A character literal must hold exactly one character
    NotSingleChar { count: usize },
}

impl fmt::Display for UnescapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnescapeError::InvalidEscape { pos, seq } => {
                write!(f, "invalid escape sequence '{}' at position {}", seq, pos)
            }
            UnescapeError::IncompleteEscape { pos, expected, got } => {
                write!(
                    f,
                    "incomplete escape at position {}: expected {} digits, got {}",
                    pos, expected, got
                )
            }
            UnescapeError::OctalOutOfRange { pos, value } => {
                write!(f, "octal escape value {} > 255 at position {}", value, pos)
            }
            UnescapeError::InvalidUnicodeScalar { pos, value } => {
                write!(
                    f,
                    "invalid Unicode scalar value U+{:X} at position {}",
                    value, pos
                )
            }
            UnescapeError::InvalidUtf8 => write!(f, "escaped bytes are not valid UTF-8"),
            UnescapeError::NotSingleChar { count } => {
                write!(f, "character literal holds {} characters, expected 1", count)
            }
        }
    }
}

enum Unit {
    Char(char),
    Byte(u8),
}

fn read_digits(
    chars: &mut Peekable<CharIndices<'_>>,
    pos: usize,
    count: usize,
    radix: u32,
) -> Result<u32, UnescapeError> {
    let mut value = 0u32;
    for got in 0..count {
        match chars.peek().and_then(|(_, c)| c.to_digit(radix)) {
            Some(d) => {
                value = value * radix + d;
                chars.next();
            }
            None => {
                return Err(UnescapeError::IncompleteEscape {
                    pos,
                    expected: count,
                    got,
                });
            }
        }
    }
    Ok(value)
}

/// Decode one escape sequence. The leading backslash at `pos` has already
/// been consumed.
fn read_escape(
    chars: &mut Peekable<CharIndices<'_>>,
    pos: usize,
    quote: char,
) -> Result<Unit, UnescapeError> {
    let Some((_, c)) = chars.next() else {
        return Err(UnescapeError::InvalidEscape {
            pos,
            seq: "\\".to_string(),
        });
    };
    let unit = match c {
        'a' => Unit::Char('\x07'),
        'b' => Unit::Char('\x08'),
        'f' => Unit::Char('\x0C'),
        'n' => Unit::Char('\n'),
        'r' => Unit::Char('\r'),
        't' => Unit::Char('\t'),
        'v' => Unit::Char('\x0B'),
        '\\' => Unit::Char('\\'),
        c if c == quote => Unit::Char(c),
        'x' => Unit::Byte(read_digits(chars, pos, 2, 16)? as u8),
        '0'..='7' => {
            let first = c.to_digit(8).unwrap_or(0);
            let rest = read_digits(chars, pos, 2, 8)?;
            let value = first * 64 + rest;
            if value > 255 {
                return Err(UnescapeError::OctalOutOfRange { pos, value });
            }
            Unit::Byte(value as u8)
        }
        'u' | 'U' => {
            let width = if c == 'u' { 4 } else { 8 };
            let value = read_digits(chars, pos, width, 16)?;
            let ch = char::from_u32(value)
                .ok_or(UnescapeError::InvalidUnicodeScalar { pos, value })?;
            Unit::Char(ch)
        }
        other => {
            return Err(UnescapeError::InvalidEscape {
                pos,
                seq: format!("\\{}", other),
            });
        }
    };
    Ok(unit)
}

/// Unescape the contents of a double-quoted string literal (without quotes).
///
/// # Example
///
/// ```
/// use dexpr_core::syntax::string_literal::unescape_string;
///
/// assert_eq!(unescape_string(r"tab\there").unwrap(), "tab\there");
/// assert_eq!(unescape_string(r"é\xc3\xa9").unwrap(), "éé");
/// ```
pub fn unescape_string(s: &str) -> Result<String, UnescapeError> {
    let mut bytes = Vec::with_capacity(s.len());
    let mut chars = s.char_indices().peekable();
    let mut buf = [0u8; 4];

    while let Some((pos, c)) = chars.next() {
        let unit = if c == '\\' {
            read_escape(&mut chars, pos, '"')?
        } else {
            Unit::Char(c)
        };
        match unit {
            Unit::Char(ch) => bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes()),
            Unit::Byte(b) => bytes.push(b),
        }
    }

    String::from_utf8(bytes).map_err(|_| UnescapeError::InvalidUtf8)
}

/// Unescape the contents of a single-quoted character literal (without
/// quotes).
pub fn unescape_rune(s: &str) -> Result<char, UnescapeError> {
    let mut decoded = Vec::new();
    let mut chars = s.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        let ch = if c == '\\' {
            match read_escape(&mut chars, pos, '\'')? {
                Unit::Char(ch) => ch,
                Unit::Byte(b) => char::from(b),
            }
        } else {
            c
        };
        decoded.push(ch);
    }

    match decoded.as_slice() {
        [ch] => Ok(*ch),
        _ => Err(UnescapeError::NotSingleChar {
            count: decoded.len(),
        }),
    }
}

/// Contents of a back-quoted raw string. Carriage returns are discarded.
pub fn raw_string(s: &str) -> String {
    s.chars().filter(|c| *c != '\r').collect()
}
