//! The tagged node tree produced by the [`Parser`](crate::Parser), and the
//! scalar value-extraction coercions over it.

use std::fmt;

use thiserror::Error;

use crate::token::{Token, TokenKind, TokenSubKind};

/// A parsed JSON(-family) value.
///
/// Every scalar variant retains the [`Token`] it was built from, for
/// positional recovery and for on-demand decoding; `Array` and `Object`
/// own their children directly rather than through any indirection. This
/// is a plain tagged sum type: traversal is a `match`, not a downcast.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    Null(Token<'a>),
    Boolean(Token<'a>),
    String(Token<'a>),
    Number(Token<'a>),
    Array(Vec<Node<'a>>),
    /// Ordered `(key, value)` pairs in source order. Keys are the
    /// undecoded literal bytes with surrounding quotes already stripped
    /// for quoted sub-kinds; duplicate keys are permitted structurally.
    Object(Vec<(&'a [u8], Node<'a>)>),
}

/// A decoded number: either an exact integer (from `Integer`/`Hex`
/// literals) or a double (from `Float`/`SciNot`/`Inf`/`NaN` literals,
/// the latter two via the corresponding IEEE-754 special values).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    Integer(i64),
    Float(f64),
}

/// A scalar-extraction miss: the node was not of the kind the caller
/// asked for. Local to the caller; never produced by [`Parser::parse`](crate::Parser::parse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("node is not a string")]
    NotString,
    #[error("node is not a number, or its literal could not be decoded")]
    NotNumber,
    #[error("node is not a boolean")]
    NotBoolean,
    #[error("node is not null")]
    NotNull,
}

impl<'a> Node<'a> {
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Node::Boolean(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Node::String(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Node::Number(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    pub fn as_null(&self) -> Result<(), ValueError> {
        match self {
            Node::Null(_) => Ok(()),
            _ => Err(ValueError::NotNull),
        }
    }

    pub fn as_boolean(&self) -> Result<bool, ValueError> {
        match self {
            Node::Boolean(token) => Ok(token.kind() == TokenKind::True),
            _ => Err(ValueError::NotBoolean),
        }
    }

    /// The decoded string value. For quoted sub-kinds this strips one
    /// leading and one trailing quote byte and returns the raw enclosed
    /// bytes; no escape decoding is performed. For `Ident` this is the
    /// literal unchanged.
    pub fn as_str(&self) -> Result<&'a [u8], ValueError> {
        match self {
            Node::String(token) => Ok(unquote(token)),
            _ => Err(ValueError::NotString),
        }
    }

    pub fn as_number(&self) -> Result<NumberValue, ValueError> {
        match self {
            Node::Number(token) => decode_number(token),
            _ => Err(ValueError::NotNumber),
        }
    }

}

/// Strips the surrounding quote bytes off a quoted string token's
/// literal; returns the literal unchanged for `Ident`.
pub(crate) fn unquote<'a>(token: &Token<'a>) -> &'a [u8] {
    match token.sub_kind() {
        TokenSubKind::SingleQuoted | TokenSubKind::DoubleQuoted => {
            let literal = token.literal();
            &literal[1..literal.len() - 1]
        }
        _ => token.literal(),
    }
}

fn decode_number(token: &Token) -> Result<NumberValue, ValueError> {
    let literal = std::str::from_utf8(token.literal()).map_err(|_| ValueError::NotNumber)?;
    match token.sub_kind() {
        TokenSubKind::Integer => literal
            .parse::<i64>()
            .map(NumberValue::Integer)
            .map_err(|_| ValueError::NotNumber),
        TokenSubKind::Hex => decode_hex(literal),
        TokenSubKind::Float | TokenSubKind::SciNot => literal
            .parse::<f64>()
            .map(NumberValue::Float)
            .map_err(|_| ValueError::NotNumber),
        TokenSubKind::Inf => Ok(NumberValue::Float(if literal.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        })),
        TokenSubKind::NaN => Ok(NumberValue::Float(f64::NAN)),
        _ => Err(ValueError::NotNumber),
    }
}

fn decode_hex(literal: &str) -> Result<NumberValue, ValueError> {
    let (negative, rest) = match literal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, literal.strip_prefix('+').unwrap_or(literal)),
    };
    let digits = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))
        .ok_or(ValueError::NotNumber)?;
    let magnitude = i64::from_str_radix(digits, 16).map_err(|_| ValueError::NotNumber)?;
    Ok(NumberValue::Integer(if negative {
        -magnitude
    } else {
        magnitude
    }))
}

impl<'a> fmt::Display for Node<'a> {
    /// A best-effort textual rendering: scalars render their original
    /// literal bytes verbatim; `Array` renders `[child0,child1,…]`;
    /// `Object` renders `{k0: v0, k1: v1, …}` with each stored key
    /// double-quoted so the rendered form always reparses under a strict
    /// `Config`, regardless of whether the key was originally quoted,
    /// single-quoted, or a bare identifier. This is not guaranteed to
    /// round-trip source formatting, only structure.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null(token) | Node::Boolean(token) | Node::String(token) | Node::Number(token) => {
                f.write_str(&String::from_utf8_lossy(token.literal()))
            }
            Node::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Node::Object(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "\"{}\": {value}", String::from_utf8_lossy(key))?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, Parser};

    fn parse<'a>(input: &'a str, config: Config) -> Node<'a> {
        Parser::new(input.as_bytes(), config).parse().unwrap()
    }

    #[test]
    fn string_extraction_strips_quotes_without_decoding_escapes() {
        let node = parse(r#""a\nb""#, Config::new());
        assert_eq!(node.as_str().unwrap(), br"a\nb");
    }

    #[test]
    fn ident_extraction_is_identity() {
        let node = parse("foo", Config::new().with_unquoted(true));
        assert_eq!(node.as_str().unwrap(), b"foo");
    }

    #[test]
    fn integer_and_hex_decode_as_integers() {
        let node = parse("42", Config::new());
        assert_eq!(node.as_number().unwrap(), NumberValue::Integer(42));

        let node = parse("0x1F", Config::new().with_hex_numbers(true));
        assert_eq!(node.as_number().unwrap(), NumberValue::Integer(31));

        let node = parse("-0x1F", Config::new().with_hex_numbers(true));
        assert_eq!(node.as_number().unwrap(), NumberValue::Integer(-31));
    }

    #[test]
    fn float_and_scinot_decode_as_floats() {
        let node = parse("3.5", Config::new());
        assert_eq!(node.as_number().unwrap(), NumberValue::Float(3.5));

        let node = parse("1e2", Config::new());
        assert_eq!(node.as_number().unwrap(), NumberValue::Float(100.0));
    }

    #[test]
    fn infinity_and_nan_decode_to_special_floats() {
        let node = parse("Infinity", Config::new().with_infinity(true));
        assert_eq!(node.as_number().unwrap(), NumberValue::Float(f64::INFINITY));

        let node = parse("-Infinity", Config::new().with_infinity(true));
        assert_eq!(
            node.as_number().unwrap(),
            NumberValue::Float(f64::NEG_INFINITY)
        );

        let node = parse("NaN", Config::new().with_nan(true));
        assert!(matches!(node.as_number().unwrap(), NumberValue::Float(f) if f.is_nan()));
    }

    #[test]
    fn wrong_variant_extraction_is_a_local_error() {
        let node = parse("true", Config::new());
        assert_eq!(node.as_number().unwrap_err(), ValueError::NotNumber);
        assert_eq!(node.as_boolean().unwrap(), true);
    }

    #[test]
    fn render_matches_spec_grammar() {
        let node = parse(r#"{"a":1,"b":[2,3]}"#, Config::new());
        assert_eq!(node.to_string(), r#"{"a": 1, "b": [2,3]}"#);
    }

    #[test]
    fn rendered_object_reparses_under_strict_config() {
        let node = parse(r#"{unquoted:1}"#, Config::new().with_unquoted(true));
        let rendered = node.to_string();
        let reparsed = Parser::new(rendered.as_bytes(), Config::new()).parse().unwrap();
        assert_eq!(reparsed, node);
    }
}
