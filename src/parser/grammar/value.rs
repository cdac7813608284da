use super::array;
use super::object;
use crate::error::ParseError;
use crate::node::Node;
use crate::parser::Parser;
use crate::token::TokenKind;

/// Dispatches on `cur` to build one value: a scalar, or an aggregate via
/// [`array::array`]/[`object::object`].
pub(crate) fn value<'a>(parser: &mut Parser<'a>) -> Result<Node<'a>, ParseError> {
    match parser.cur().kind() {
        TokenKind::Null => Ok(Node::Null(parser.bump())),
        TokenKind::True | TokenKind::False => Ok(Node::Boolean(parser.bump())),
        TokenKind::Number => Ok(Node::Number(parser.bump())),
        // Any String sub-kind, including `Ident`, is accepted in value
        // position when it was emitted at all (`Ident` only exists when
        // `AllowUnquoted` is set).
        TokenKind::String => Ok(Node::String(parser.bump())),
        TokenKind::LeftSquare => array::array(parser),
        TokenKind::LeftCurly => object::object(parser),
        TokenKind::Illegal => Err(ParseError::illegal(&parser.cur())),
        _ => Err(ParseError::unexpected_char(&parser.cur())),
    }
}
