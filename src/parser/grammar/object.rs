use super::value;
use crate::error::ParseError;
use crate::node::{unquote, Node};
use crate::parser::Parser;
use crate::token::{Token, TokenKind};

/// `'{' (key ':' value (',' key ':' value)* ','? )? '}'`, the trailing
/// comma gated by `AllowTrailingCommaObject`. A key is any `String`
/// token, including `Ident` (only emitted when `AllowUnquoted` is set).
pub(crate) fn object<'a>(parser: &mut Parser<'a>) -> Result<Node<'a>, ParseError> {
    parser.bump(); // consume '{'

    if parser.cur().kind() == TokenKind::RightCurly {
        parser.bump();
        return Ok(Node::Object(Vec::new()));
    }

    let mut pairs = Vec::new();
    loop {
        if parser.cur().kind() != TokenKind::String {
            return Err(ParseError::syntax(&parser.cur()));
        }
        let key = key_bytes(&parser.cur());
        parser.bump();

        if parser.cur().kind() != TokenKind::Colon {
            return Err(ParseError::syntax(&parser.cur()));
        }
        parser.bump();

        let val = value::value(parser)?;
        pairs.push((key, val));

        match parser.cur().kind() {
            TokenKind::Comma => {
                parser.bump();
                if parser.cur().kind() == TokenKind::RightCurly {
                    if !parser.config().allow_trailing_comma_object() {
                        return Err(ParseError::syntax(&parser.cur()));
                    }
                    parser.bump();
                    return Ok(Node::Object(pairs));
                }
            }
            TokenKind::RightCurly => {
                parser.bump();
                return Ok(Node::Object(pairs));
            }
            _ => return Err(ParseError::syntax(&parser.cur())),
        }
    }
}

fn key_bytes<'a>(token: &Token<'a>) -> &'a [u8] {
    unquote(token)
}
