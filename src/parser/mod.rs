//! The recursive-descent parser: byte slice + [`Config`] in, a [`Node`]
//! tree or a [`ParseError`] out.

mod grammar;

use crate::config::Config;
use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::node::Node;
use crate::token::{Token, TokenKind};

/// Turns a byte slice into a [`Node`] tree, honoring the same [`Config`]
/// the underlying [`Lexer`] does.
///
/// Internally constructs a [`Lexer`] and projects its token stream down
/// to the significant tokens (`Whitespace` and `Comment` are skipped),
/// keeping one token of lookahead beyond `cur` so the grammar stays
/// LL(1). Each `Parser` is single-use: call [`Parser::parse`] once.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    config: Config,
    cur: Token<'a>,
    peek: Token<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a [u8], config: Config) -> Self {
        let mut lexer = Lexer::new(input, config);
        let cur = next_significant(&mut lexer);
        let peek = next_significant(&mut lexer);
        Self {
            lexer,
            config,
            cur,
            peek,
        }
    }

    /// Parses the first (and only) top-level value in the input.
    pub fn parse(mut self) -> Result<Node<'a>, ParseError> {
        if self.cur.is_eof() {
            return Err(ParseError::no_content(&self.cur));
        }

        let value = grammar::value(&mut self)?;
        self.expect_end()?;
        Ok(value)
    }

    pub(crate) fn config(&self) -> Config {
        self.config
    }

    pub(crate) fn cur(&self) -> Token<'a> {
        self.cur
    }

    pub(crate) fn peek(&self) -> Token<'a> {
        self.peek
    }

    pub(crate) fn bump(&mut self) -> Token<'a> {
        let consumed = self.cur;
        self.cur = self.peek;
        self.peek = next_significant(&mut self.lexer);
        consumed
    }

    fn expect_end(&mut self) -> Result<(), ParseError> {
        match self.cur.kind() {
            TokenKind::Eof => Ok(()),
            TokenKind::Illegal => Err(ParseError::illegal(&self.cur)),
            TokenKind::Null
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Number
            | TokenKind::String
            | TokenKind::LeftSquare
            | TokenKind::LeftCurly => Err(ParseError::multiple_content(&self.cur)),
            _ => Err(ParseError::unexpected_char(&self.cur)),
        }
    }
}

fn next_significant<'a>(lexer: &mut Lexer<'a>) -> Token<'a> {
    loop {
        let token = lexer.next_token();
        if !token.is_insignificant() {
            return token;
        }
    }
}
