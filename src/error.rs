//! The syntactic/semantic error taxonomy returned by [`Parser::parse`](crate::Parser::parse).

use thiserror::Error;

use crate::token::{Token, TokenSubKind};

/// Everything that can go wrong while turning a token stream into a
/// [`Node`](crate::Node) tree.
///
/// Lexical failures are not a variant here: they surface as an `Illegal`
/// token with a [`TokenSubKind`] reason, and the parser wraps the first
/// one it encounters in [`ParseError::Illegal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained only whitespace and/or comments.
    #[error("no content to parse at line {line}, column {column}")]
    NoContent { line: u32, column: u32 },

    /// A second value followed the first top-level value.
    #[error("unexpected additional content at line {line}, column {column}")]
    MultipleContent { line: u32, column: u32 },

    /// A non-value, non-whitespace, non-comment token appeared where a
    /// value or the end of input was expected.
    #[error("unexpected character at line {line}, column {column}")]
    UnexpectedChar { line: u32, column: u32 },

    /// A structural error while parsing an array or object (bad comma,
    /// missing colon, unmatched bracket/brace, disallowed trailing comma).
    #[error("syntax error at line {line}, column {column}")]
    Syntax { line: u32, column: u32 },

    /// The first blocking token was `Illegal`; `reason` is that token's
    /// sub-kind.
    #[error("illegal token ({reason:?}) at line {line}, column {column}")]
    Illegal {
        reason: TokenSubKind,
        line: u32,
        column: u32,
    },
}

impl ParseError {
    pub(crate) fn no_content(token: &Token) -> Self {
        Self::NoContent {
            line: token.line(),
            column: token.column(),
        }
    }

    pub(crate) fn multiple_content(token: &Token) -> Self {
        Self::MultipleContent {
            line: token.line(),
            column: token.column(),
        }
    }

    pub(crate) fn unexpected_char(token: &Token) -> Self {
        Self::UnexpectedChar {
            line: token.line(),
            column: token.column(),
        }
    }

    pub(crate) fn syntax(token: &Token) -> Self {
        Self::Syntax {
            line: token.line(),
            column: token.column(),
        }
    }

    pub(crate) fn illegal(token: &Token) -> Self {
        Self::Illegal {
            reason: token.sub_kind(),
            line: token.line(),
            column: token.column(),
        }
    }

    /// 1-based line of the token that triggered this error.
    pub fn line(&self) -> u32 {
        match self {
            Self::NoContent { line, .. }
            | Self::MultipleContent { line, .. }
            | Self::UnexpectedChar { line, .. }
            | Self::Syntax { line, .. }
            | Self::Illegal { line, .. } => *line,
        }
    }

    /// 1-based column of the token that triggered this error.
    pub fn column(&self) -> u32 {
        match self {
            Self::NoContent { column, .. }
            | Self::MultipleContent { column, .. }
            | Self::UnexpectedChar { column, .. }
            | Self::Syntax { column, .. }
            | Self::Illegal { column, .. } => *column,
        }
    }
}
