//! The table-free, single-pass, byte-oriented lexer.

mod cursor;

use crate::config::Config;
use crate::token::{Token, TokenKind, TokenSubKind};
use cursor::Cursor;

const ALWAYS_WS: [u8; 4] = [b' ', b'\n', b'\r', b'\t'];
const EXTRA_WS: [u8; 4] = [0x0B, 0x0C, 0x85, 0xA0];

/// Consumes a byte slice under a [`Config`] and produces a dense token
/// stream, including whitespace and comments; callers filter those out
/// themselves (the [`Parser`](crate::Parser) does this internally).
///
/// Once [`Lexer::next_token`] returns an `Illegal` token, every subsequent
/// call returns `Eof`. Once it returns `Eof`, every subsequent call
/// returns an equivalent `Eof` token; `next_token` is otherwise a pure
/// function of the remaining input and never panics or re-reads bytes.
pub struct Lexer<'a> {
    input: &'a [u8],
    cursor: Cursor<'a>,
    config: Config,
    terminal: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8], config: Config) -> Self {
        Self {
            input,
            cursor: Cursor::new(input),
            config,
            terminal: false,
        }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Returns the next token. See the type-level docs for the terminal
    /// `Illegal`/`Eof` behavior.
    pub fn next_token(&mut self) -> Token<'a> {
        if self.terminal {
            return self.eof_token();
        }

        let token = self.scan();
        if matches!(token.kind(), TokenKind::Illegal | TokenKind::Eof) {
            self.terminal = true;
        }
        token
    }

    /// The full token sequence up to and including the first `Illegal` or
    /// the terminating `Eof`.
    pub fn tokens(mut self) -> Vec<Token<'a>> {
        let mut out = Vec::new();
        loop {
            let token = self.next_token();
            let done = matches!(token.kind(), TokenKind::Illegal | TokenKind::Eof);
            out.push(token);
            if done {
                return out;
            }
        }
    }

    fn eof_token(&self) -> Token<'a> {
        Token::new(
            TokenKind::Eof,
            TokenSubKind::None,
            &self.input[self.input.len()..],
            self.cursor.pos(),
            self.cursor.line(),
            self.cursor.column(),
        )
    }

    fn scan(&mut self) -> Token<'a> {
        if self.cursor.at_eof() {
            return self.eof_token();
        }

        let start = self.cursor.pos();
        let line = self.cursor.line();
        let column = self.cursor.column();
        let b = self.cursor.first();

        let (kind, sub_kind) = match b {
            b' ' | b'\n' | b'\r' | b'\t' => {
                self.cursor.bump();
                (TokenKind::Whitespace, TokenSubKind::None)
            }
            0x0B | 0x0C | 0x85 | 0xA0 => {
                self.cursor.bump();
                if self.config.allow_extra_ws() {
                    (TokenKind::Whitespace, TokenSubKind::None)
                } else {
                    (TokenKind::Illegal, TokenSubKind::InvalidWhitespace)
                }
            }
            b'[' => {
                self.cursor.bump();
                (TokenKind::LeftSquare, TokenSubKind::None)
            }
            b']' => {
                self.cursor.bump();
                (TokenKind::RightSquare, TokenSubKind::None)
            }
            b'{' => {
                self.cursor.bump();
                (TokenKind::LeftCurly, TokenSubKind::None)
            }
            b'}' => {
                self.cursor.bump();
                (TokenKind::RightCurly, TokenSubKind::None)
            }
            b',' => {
                self.cursor.bump();
                (TokenKind::Comma, TokenSubKind::None)
            }
            b':' => {
                self.cursor.bump();
                (TokenKind::Colon, TokenSubKind::None)
            }
            b'/' => self.scan_comment(),
            b'"' => self.scan_string(b'"'),
            b'\'' => self.scan_string(b'\''),
            b'N' if self.cursor.starts_with(b"NaN") => self.scan_number(),
            b'I' if self.cursor.starts_with(b"Infinity") => self.scan_number(),
            b'+' | b'-' | b'.' => self.scan_number(),
            b if b.is_ascii_digit() => self.scan_number(),
            b if is_ident_start(b) => self.scan_identifier_or_keyword(),
            _ => {
                self.cursor.bump();
                (TokenKind::Illegal, TokenSubKind::InvalidCharacter)
            }
        };

        Token::new(
            kind,
            sub_kind,
            self.cursor.slice_from(start),
            start,
            line,
            column,
        )
    }

    fn scan_comment(&mut self) -> (TokenKind, TokenSubKind) {
        self.cursor.bump(); // leading '/'
        match self.cursor.first() {
            b'/' => {
                self.cursor.bump();
                while !self.cursor.at_eof() && self.cursor.first() != b'\n' {
                    self.cursor.bump();
                }
                if !self.cursor.at_eof() {
                    self.cursor.bump(); // trailing LF
                }
                if self.config.allow_line_comments() {
                    (TokenKind::Comment, TokenSubKind::Line)
                } else {
                    (TokenKind::Illegal, TokenSubKind::InvalidLineComment)
                }
            }
            b'*' => {
                self.cursor.bump();
                let mut terminated = false;
                while !self.cursor.at_eof() {
                    if self.cursor.first() == b'*' && self.cursor.second() == b'/' {
                        self.cursor.bump();
                        self.cursor.bump();
                        terminated = true;
                        break;
                    }
                    self.cursor.bump();
                }
                if !terminated {
                    (TokenKind::Illegal, TokenSubKind::InvalidBlockComment)
                } else if self.config.allow_block_comments() {
                    (TokenKind::Comment, TokenSubKind::Block)
                } else {
                    (TokenKind::Illegal, TokenSubKind::InvalidBlockComment)
                }
            }
            _ => (TokenKind::Illegal, TokenSubKind::InvalidComment),
        }
    }

    fn scan_string(&mut self, quote: u8) -> (TokenKind, TokenSubKind) {
        let allowed = quote == b'"' || self.config.allow_single_quotes();
        self.cursor.bump(); // opening quote

        loop {
            if self.cursor.at_eof() {
                return (TokenKind::Illegal, TokenSubKind::InvalidString);
            }
            let b = self.cursor.first();
            if b == quote {
                self.cursor.bump();
                break;
            }
            if b == b'\n' {
                self.cursor.bump();
                return (TokenKind::Illegal, TokenSubKind::InvalidNewlineString);
            }
            if b == b'\\' {
                self.cursor.bump();
                if self.cursor.at_eof() {
                    return (TokenKind::Illegal, TokenSubKind::InvalidString);
                }
                let esc = self.cursor.first();
                if esc == quote
                    || matches!(esc, b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't')
                {
                    self.cursor.bump();
                } else if esc == b'u' {
                    self.cursor.bump();
                    for _ in 0..4 {
                        if self.cursor.at_eof() || !self.cursor.first().is_ascii_hexdigit() {
                            return (TokenKind::Illegal, TokenSubKind::InvalidHexString);
                        }
                        self.cursor.bump();
                    }
                } else if esc == b'\n' {
                    if self.config.allow_newline_in_strings() {
                        self.cursor.bump();
                    } else {
                        self.cursor.bump();
                        return (TokenKind::Illegal, TokenSubKind::InvalidNewlineString);
                    }
                } else if self.config.allow_other_escape_chars() {
                    self.cursor.bump();
                } else {
                    self.cursor.bump();
                    return (TokenKind::Illegal, TokenSubKind::InvalidEscapedString);
                }
                continue;
            }
            self.cursor.bump();
        }

        if !allowed {
            return (TokenKind::Illegal, TokenSubKind::InvalidString);
        }
        if quote == b'"' {
            (TokenKind::String, TokenSubKind::DoubleQuoted)
        } else {
            (TokenKind::String, TokenSubKind::SingleQuoted)
        }
    }

    fn scan_identifier_or_keyword(&mut self) -> (TokenKind, TokenSubKind) {
        let start = self.cursor.pos();
        while !self.cursor.at_eof() && is_ident_continue(self.cursor.first()) {
            self.cursor.bump();
        }
        let run = self.cursor.slice_from(start);
        match run {
            b"null" => (TokenKind::Null, TokenSubKind::None),
            b"true" => (TokenKind::True, TokenSubKind::None),
            b"false" => (TokenKind::False, TokenSubKind::None),
            _ => {
                if self.config.allow_unquoted() {
                    (TokenKind::String, TokenSubKind::Ident)
                } else {
                    (TokenKind::Illegal, TokenSubKind::InvalidCharacter)
                }
            }
        }
    }

    fn scan_number(&mut self) -> (TokenKind, TokenSubKind) {
        let start = self.cursor.pos();
        while !self.cursor.at_eof() && is_number_continue(self.cursor.first()) {
            self.cursor.bump();
        }
        let candidate = self.cursor.slice_from(start);
        // Greedy capture is always ASCII by construction of `is_number_continue`.
        let candidate = std::str::from_utf8(candidate).unwrap();
        classify_number(&self.config, candidate)
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

fn is_number_continue(b: u8) -> bool {
    b.is_ascii_digit()
        || b.is_ascii_hexdigit()
        || matches!(
            b,
            b'+' | b'-'
                | b'.'
                | b'e'
                | b'E'
                | b'x'
                | b'X'
                | b'I'
                | b'n'
                | b'i'
                | b't'
                | b'y'
                | b'N'
        )
}

fn strip_sign(raw: &str) -> (Option<u8>, &str) {
    let bytes = raw.as_bytes();
    match bytes.first() {
        Some(b'+') => (Some(b'+'), &raw[1..]),
        Some(b'-') => (Some(b'-'), &raw[1..]),
        _ => (None, raw),
    }
}

fn is_hex_form(body: &str) -> bool {
    let rest = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X"));
    match rest {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

fn find_exponent(body: &str) -> Option<usize> {
    body.bytes().position(|b| b == b'e' || b == b'E')
}

fn is_valid_scinot(body: &str, e_pos: usize) -> bool {
    let mantissa = &body[..e_pos];
    let exponent = &body[e_pos + 1..];
    (is_valid_integer_digits(mantissa) || is_valid_float_digits(mantissa))
        && is_valid_exponent_digits(exponent)
}

fn is_valid_exponent_digits(exponent: &str) -> bool {
    let (_, digits) = strip_sign(exponent);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_valid_integer_digits(body: &str) -> bool {
    !body.is_empty() && body.bytes().all(|b| b.is_ascii_digit())
}

fn is_valid_float_digits(body: &str) -> bool {
    let dot_count = body.bytes().filter(|&b| b == b'.').count();
    if dot_count != 1 {
        return false;
    }
    let digit_count = body.bytes().filter(|b| b.is_ascii_digit()).count();
    let non_digit_non_dot = body
        .bytes()
        .filter(|&b| b != b'.' && !b.is_ascii_digit())
        .count();
    digit_count > 0 && non_digit_non_dot == 0
}

fn has_bad_leading_zero(body: &str) -> bool {
    let bytes = body.as_bytes();
    bytes.first() == Some(&b'0') && bytes.get(1).is_some_and(|b| b.is_ascii_digit())
}

fn classify_number(config: &Config, raw: &str) -> (TokenKind, TokenSubKind) {
    use TokenKind::{Illegal, Number};
    use TokenSubKind::*;

    let (sign, body) = strip_sign(raw);

    if sign == Some(b'+') && !config.allow_leading_plus() {
        return (Illegal, InvalidLeadingPlus);
    }

    if body == "NaN" {
        return if config.allow_nan() {
            (Number, NaN)
        } else {
            (Illegal, InvalidNaN)
        };
    }

    if body == "Infinity" {
        return if config.allow_infinity() {
            (Number, Inf)
        } else {
            (Illegal, InvalidInf)
        };
    }

    if is_hex_form(body) {
        return if config.allow_hex_numbers() {
            (Number, Hex)
        } else {
            (Illegal, InvalidHexNumber)
        };
    }

    if let Some(e_pos) = find_exponent(body) {
        return if is_valid_scinot(body, e_pos) {
            (Number, SciNot)
        } else {
            (Illegal, InvalidCharacter)
        };
    }

    if body.contains('.') {
        let edge = body.starts_with('.') || body.ends_with('.');
        if !is_valid_float_digits(body) {
            return (Illegal, InvalidCharacter);
        }
        if edge && !config.allow_point_edge_numbers() {
            return (Illegal, InvalidPointEdgeDot);
        }
        if has_bad_leading_zero(body) {
            return (Illegal, InvalidLeadingZero);
        }
        return (Number, Float);
    }

    if is_valid_integer_digits(body) {
        if has_bad_leading_zero(body) {
            return (Illegal, InvalidLeadingZero);
        }
        return (Number, Integer);
    }

    (Illegal, InvalidCharacter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn all_tokens(input: &str, config: Config) -> Vec<Token> {
        Lexer::new(input.as_bytes(), config).tokens()
    }

    #[test]
    fn concatenated_literals_equal_consumed_prefix() {
        let input = " {\"a\":1,\"b\":[2,3]} ";
        let tokens = all_tokens(input, Config::json5_preset());
        let mut rebuilt = Vec::new();
        for token in &tokens {
            if token.is_eof() {
                continue;
            }
            rebuilt.extend_from_slice(token.literal());
        }
        assert_eq!(rebuilt, input.as_bytes());
    }

    #[test]
    fn every_token_literal_is_a_subslice_at_its_offset() {
        let input = "null true false 42 \"hi\"";
        let bytes = input.as_bytes();
        for token in all_tokens(input, Config::json5_preset()) {
            if token.is_eof() {
                continue;
            }
            let start = token.offset();
            let end = start + token.literal().len();
            assert_eq!(&bytes[start..end], token.literal());
        }
    }

    #[test]
    fn illegal_halts_emission() {
        let tokens = all_tokens("1 @ 2", Config::new());
        assert!(matches!(tokens.last().unwrap().kind(), TokenKind::Illegal));
    }

    #[test]
    fn strict_hex_number_is_illegal() {
        let tokens = all_tokens("0x1F", Config::new());
        assert_eq!(tokens[0].kind(), TokenKind::Illegal);
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::InvalidHexNumber);
    }

    #[test]
    fn hex_number_accepted_with_flag() {
        let tokens = all_tokens("0x1F", Config::new().with_hex_numbers(true));
        assert_eq!(tokens[0].kind(), TokenKind::Number);
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::Hex);
        assert_eq!(tokens[0].literal(), b"0x1F");
    }

    #[test]
    fn leading_zero_is_illegal() {
        let tokens = all_tokens("007", Config::json5_preset());
        assert_eq!(tokens[0].kind(), TokenKind::Illegal);
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::InvalidLeadingZero);
    }

    #[test]
    fn naked_zero_is_a_valid_integer() {
        let tokens = all_tokens("0", Config::new());
        assert_eq!(tokens[0].kind(), TokenKind::Number);
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::Integer);
    }

    #[test]
    fn point_edge_forms_need_flag() {
        let tokens = all_tokens(".5", Config::new());
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::InvalidPointEdgeDot);

        let tokens = all_tokens(".5", Config::new().with_point_edge_numbers(true));
        assert_eq!(tokens[0].kind(), TokenKind::Number);
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::Float);
    }

    #[test]
    fn identifier_that_merely_starts_like_nan_is_not_a_number() {
        let tokens = all_tokens("Name", Config::json5_preset());
        assert_eq!(tokens[0].kind(), TokenKind::String);
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::Ident);
    }

    #[test]
    fn nan_and_infinity_need_flags() {
        let tokens = all_tokens("NaN", Config::new());
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::InvalidNaN);
        let tokens = all_tokens("NaN", Config::new().with_nan(true));
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::NaN);

        let tokens = all_tokens("Infinity", Config::new());
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::InvalidInf);
        let tokens = all_tokens("-Infinity", Config::new().with_infinity(true));
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::Inf);
    }

    #[test]
    fn line_comment_requires_flag() {
        let tokens = all_tokens("// c\n42", Config::new().with_line_comments(true));
        assert_eq!(tokens[0].kind(), TokenKind::Comment);
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::Line);
        assert_eq!(tokens[1].sub_kind(), TokenSubKind::Integer);

        let tokens = all_tokens("// c\n42", Config::new());
        assert_eq!(tokens[0].kind(), TokenKind::Illegal);
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::InvalidLineComment);
    }

    #[test]
    fn unterminated_block_comment_is_illegal() {
        let tokens = all_tokens("/* oops", Config::new().with_block_comments(true));
        assert_eq!(tokens[0].kind(), TokenKind::Illegal);
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::InvalidBlockComment);
    }

    #[test]
    fn single_quotes_require_flag() {
        let tokens = all_tokens("'hi'", Config::new());
        assert_eq!(tokens[0].kind(), TokenKind::Illegal);
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::InvalidString);

        let tokens = all_tokens("'hi'", Config::new().with_single_quotes(true));
        assert_eq!(tokens[0].kind(), TokenKind::String);
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::SingleQuoted);
    }

    #[test]
    fn bad_unicode_escape_is_illegal() {
        let tokens = all_tokens("\"a\\u00G1\"", Config::new());
        assert_eq!(tokens[0].kind(), TokenKind::Illegal);
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::InvalidHexString);
    }

    #[test]
    fn valid_unicode_escape_is_accepted() {
        let tokens = all_tokens("\"\\u4F60\"", Config::new());
        assert_eq!(tokens[0].kind(), TokenKind::String);
    }

    #[test]
    fn raw_newline_in_string_is_always_illegal() {
        let tokens = all_tokens("\"a\nb\"", Config::json5_preset());
        assert_eq!(tokens[0].kind(), TokenKind::Illegal);
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::InvalidNewlineString);
    }

    #[test]
    fn escaped_newline_needs_flag() {
        let tokens = all_tokens("\"a\\\nb\"", Config::new());
        assert_eq!(tokens[0].sub_kind(), TokenSubKind::InvalidNewlineString);

        let tokens = all_tokens("\"a\\\nb\"", Config::new().with_newline_in_strings(true));
        assert_eq!(tokens[0].kind(), TokenKind::String);
    }

    #[test]
    fn line_and_column_reset_after_newline() {
        let tokens = all_tokens("1\n2", Config::new());
        assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
        // tokens[1] is the newline whitespace token
        assert_eq!((tokens[2].line(), tokens[2].column()), (2, 1));
    }
}
