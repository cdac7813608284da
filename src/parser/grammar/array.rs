use super::value;
use crate::error::ParseError;
use crate::node::Node;
use crate::parser::Parser;
use crate::token::TokenKind;

/// `'[' (value (',' value)* ','? )? ']'`, the trailing comma gated by
/// `AllowTrailingCommaArray`.
pub(crate) fn array<'a>(parser: &mut Parser<'a>) -> Result<Node<'a>, ParseError> {
    parser.bump(); // consume '['

    if parser.cur().kind() == TokenKind::RightSquare {
        parser.bump();
        return Ok(Node::Array(Vec::new()));
    }

    let mut items = Vec::new();
    loop {
        items.push(value::value(parser)?);

        match parser.cur().kind() {
            TokenKind::Comma => {
                parser.bump();
                if parser.cur().kind() == TokenKind::RightSquare {
                    if !parser.config().allow_trailing_comma_array() {
                        return Err(ParseError::syntax(&parser.cur()));
                    }
                    parser.bump();
                    return Ok(Node::Array(items));
                }
            }
            TokenKind::RightSquare => {
                parser.bump();
                return Ok(Node::Array(items));
            }
            _ => return Err(ParseError::syntax(&parser.cur())),
        }
    }
}
