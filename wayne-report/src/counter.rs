use serde::{Serialize, Serializer};
use std::fmt;

/// A single report counter as read from a DOM attribute.
/// - `Value(i64)`: the attribute held a base-10 integer
/// - `NotANumber`: the attribute was missing or held no leading digits
///
/// `NotANumber` serializes as JSON `null`, which the charting library draws
/// as an absent bar.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Counter {
    Value(i64),
    NotANumber,
}

impl Counter {
    /// Parse an optional attribute value with base-10 `parseInt` rules.
    pub fn from_attribute(raw: Option<&str>) -> Counter {
        raw.map_or(Counter::NotANumber, parse_int)
    }

    pub fn value(&self) -> Option<i64> {
        match self {
            Counter::Value(v) => Some(*v),
            Counter::NotANumber => None,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Counter::NotANumber)
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Counter::Value(v) => write!(f, "{}", v),
            Counter::NotANumber => write!(f, "NaN"),
        }
    }
}

impl Serialize for Counter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Counter::Value(v) => serializer.serialize_i64(*v),
            Counter::NotANumber => serializer.serialize_none(),
        }
    }
}

/// JS `StrWhiteSpaceChar`: WhiteSpace (including U+FEFF and the `Zs` space
/// separators) plus LineTerminator. Unlike `char::is_whitespace`, U+0085 is
/// not included.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Base-10 integer parse that mirrors `parseInt(s, 10)`:
/// leading JS whitespace is skipped, one optional sign is accepted, and the
/// longest digit run that follows is the value. Anything after it is ignored.
///
/// One deliberate difference: a digit run that does not fit in `i64` yields
/// `NotANumber` (no bar) where `parseInt` would return a large float.
pub fn parse_int(s: &str) -> Counter {
    let trimmed = s.trim_start_matches(is_js_whitespace);
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Counter::NotANumber;
    }

    let mut acc: i64 = 0;
    for b in rest[..digits_len].bytes() {
        let digit = i64::from(b - b'0');
        let next = acc
            .checked_mul(10)
            .and_then(|v| {
                if negative {
                    v.checked_sub(digit)
                } else {
                    v.checked_add(digit)
                }
            });
        match next {
            Some(v) => acc = v,
            None => return Counter::NotANumber,
        }
    }
    Counter::Value(acc)
}
