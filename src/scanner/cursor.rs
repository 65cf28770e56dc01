use crate::error::LexError;

/// Forward-only reader over a code point buffer.
///
/// The position only moves through [`Cursor::advance`]; lookahead never
/// consumes anything.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    code: &'a [char],
    current: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(code: &'a [char]) -> Self {
        Self { code, current: 0 }
    }

    pub fn position(&self) -> usize {
        self.current
    }

    pub fn source(&self) -> &'a [char] {
        self.code
    }

    pub fn is_at_end(&self) -> bool {
        self.current >= self.code.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.offset(0)
    }

    /// Code point `n` places ahead of the current one, if there is one.
    pub fn offset(&self, n: usize) -> Option<char> {
        self.code.get(self.current + n).copied()
    }

    /// Like [`Cursor::offset`], for places where running out of input is an
    /// error. The error points at the empty range just past the last code point.
    pub fn offset_or_fail(&self, n: usize) -> Result<char, LexError> {
        self.offset(n).ok_or_else(|| {
            LexError::unexpected_eof(
                format!("expected a character at offset {}", self.current + n),
                self.byte_offset(self.code.len()),
                0,
            )
        })
    }

    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.current += 1;
        Some(ch)
    }

    /// UTF-8 byte offset of code point offset `at`, for diagnostics rendered
    /// against the original `&str`.
    pub fn byte_offset(&self, at: usize) -> usize {
        self.code[..at.min(self.code.len())]
            .iter()
            .map(|c| c.len_utf8())
            .sum()
    }
}
