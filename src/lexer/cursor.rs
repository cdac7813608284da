//! A peekable cursor over the input byte slice.

/// Sentinel returned by [`Cursor::first`]/[`Cursor::second`] once the
/// cursor runs past the end of the input.
pub(crate) const EOF: u8 = 0;

/// Byte-oriented peekable cursor, the lexer's only view onto the input.
///
/// Unlike a `char`-based cursor, `Cursor` never decodes UTF-8: positions
/// and comparisons all operate on raw bytes, matching the lexer's
/// byte-oriented recognition rules. `line`/`column` bookkeeping lives here
/// so every recognizer shares one accounting of position.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    pub(crate) fn column(&self) -> u32 {
        self.column
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The byte at the cursor, or [`EOF`] past the end of input.
    pub(crate) fn first(&self) -> u8 {
        self.input.get(self.pos).copied().unwrap_or(EOF)
    }

    /// The byte one past the cursor, or [`EOF`] past the end of input.
    pub(crate) fn second(&self) -> u8 {
        self.input.get(self.pos + 1).copied().unwrap_or(EOF)
    }

    /// Consumes and returns the current byte, advancing position and
    /// line/column bookkeeping. Returns `None` at end of input.
    pub(crate) fn bump(&mut self) -> Option<u8> {
        let b = *self.input.get(self.pos)?;
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(b)
    }

    /// The sub-slice of the input from `start` up to (not including) the
    /// current position.
    pub(crate) fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.input[start..self.pos]
    }

    /// Whether the remaining, unconsumed input starts with `needle`.
    pub(crate) fn starts_with(&self, needle: &[u8]) -> bool {
        self.input[self.pos..].starts_with(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_line_and_column_across_newlines() {
        let mut cursor = Cursor::new(b"ab\ncd");
        assert_eq!((cursor.line(), cursor.column()), (1, 1));
        cursor.bump(); // a
        assert_eq!((cursor.line(), cursor.column()), (1, 2));
        cursor.bump(); // b
        assert_eq!((cursor.line(), cursor.column()), (1, 3));
        cursor.bump(); // \n
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        cursor.bump(); // c
        assert_eq!((cursor.line(), cursor.column()), (2, 2));
    }

    #[test]
    fn first_and_second_return_eof_sentinel_past_input() {
        let cursor = Cursor::new(b"a");
        assert_eq!(cursor.first(), b'a');
        assert_eq!(cursor.second(), EOF);
    }
}
