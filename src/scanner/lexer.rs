use miette::SourceSpan;
use tracing::{debug, trace};

use crate::error::LexError;
use crate::scanner::cursor::Cursor;
use crate::scanner::token::{Span, SpannedToken, Token, keyword};

/// Base selected by a `0x` / `0b` / `0o` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Radix {
    Binary,
    Octal,
    Hexadecimal,
}

impl Radix {
    fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'b' => Some(Self::Binary),
            'o' => Some(Self::Octal),
            'x' => Some(Self::Hexadecimal),
            _ => None,
        }
    }

    fn base(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Hexadecimal => 16,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Octal => "octal",
            Self::Hexadecimal => "hexadecimal",
        }
    }

    fn accepts(self, ch: char) -> bool {
        ch.is_digit(self.base())
    }
}

/// Turns a code point buffer into a flat list of [`SpannedToken`]s.
///
/// Scanning is fail-fast: the first error aborts the call and no partial
/// token list is returned. After every call the lexer is rewound to the start
/// of its buffer, so `tokenize` can be called again, or pointed at a new
/// buffer with [`Lexer::reset`].
pub struct Lexer<'a> {
    line: usize,
    column: usize,
    /// Line and column where the token being scanned starts.
    token_line: usize,
    token_column: usize,
    cursor: Cursor<'a>,
    tokens: Vec<SpannedToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(code: &'a [char]) -> Self {
        Self {
            line: 1,
            column: 1,
            token_line: 1,
            token_column: 1,
            cursor: Cursor::new(code),
            tokens: Vec::new(),
        }
    }

    /// Point the lexer at a different buffer.
    pub fn reset(&mut self, code: &'a [char]) {
        self.cursor = Cursor::new(code);
        self.rewind();
    }

    #[tracing::instrument(level = "debug", skip_all, fields(chars = self.cursor.source().len()))]
    pub fn tokenize(&mut self) -> Result<Vec<SpannedToken>, LexError> {
        let result = self.scan_tokens();
        let lines = self.line;
        let tokens = std::mem::take(&mut self.tokens);
        self.rewind();
        match result {
            Ok(()) => {
                debug!(tokens = tokens.len(), lines, "tokenized");
                Ok(tokens)
            }
            Err(err) => {
                debug!(error = %err, "tokenize failed");
                Err(err)
            }
        }
    }

    fn rewind(&mut self) {
        self.cursor = Cursor::new(self.cursor.source());
        self.line = 1;
        self.column = 1;
        self.token_line = 1;
        self.token_column = 1;
        self.tokens.clear();
    }

    fn scan_tokens(&mut self) -> Result<(), LexError> {
        loop {
            self.token_line = self.line;
            self.token_column = self.column;
            let start = self.cursor.position();
            let Some(ch) = self.advance() else {
                return Ok(());
            };
            match ch {
                ':' => self.push_single(Token::Colon, start),
                ';' => self.push_single(Token::Semicolon, start),
                ',' => self.push_single(Token::Comma, start),
                '.' => self.push_single(Token::Dot, start),
                '[' => self.push_single(Token::LeftSquareBracket, start),
                ']' => self.push_single(Token::RightSquareBracket, start),
                '(' => self.push_single(Token::LeftParen, start),
                ')' => self.push_single(Token::RightParen, start),
                '{' => self.push_single(Token::LeftBrace, start),
                '}' => self.push_single(Token::RightBrace, start),
                '^' => self.push_single(Token::Xor, start),

                '+' => self.one_or_two(Token::Plus, Token::CompoundPlus, start),
                '-' => self.one_or_two(Token::Minus, Token::CompoundMinus, start),
                '*' => self.one_or_two(Token::Star, Token::CompoundStar, start),
                '%' => self.one_or_two(Token::Mod, Token::CompoundMod, start),
                '/' => {
                    if self.cursor.peek() == Some('/') {
                        self.skip_line_comment();
                    } else {
                        self.one_or_two(Token::Slash, Token::CompoundSlash, start);
                    }
                }

                '&' => self.doubled('&', Token::And, start)?,
                '|' => self.doubled('|', Token::Or, start)?,

                '!' => self.one_or_two(Token::Not, Token::NotEquals, start),
                '=' => self.one_or_two(Token::Assign, Token::Equals, start),
                '>' => self.one_or_two(Token::Greater, Token::GreaterEquals, start),
                '<' => self.one_or_two(Token::Less, Token::LessEquals, start),

                // Line accounting for '\n' happens in `advance`.
                ' ' | '\t' | '\r' | '\n' | '\0' => {}

                '"' => self.string(start)?,
                '0'..='9' => self.number(ch, start)?,
                c if c.is_ascii_alphabetic() || c == '_' => self.identifier(c, start),

                other => {
                    return Err(self.unsupported(
                        other,
                        start,
                        "not part of the language".to_string(),
                    ));
                }
            }
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.cursor.advance()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn emit(&mut self, spanned: SpannedToken) {
        trace!(token = %spanned.token, span = %spanned.span, "token");
        self.tokens.push(spanned);
    }

    fn push(&mut self, token: Token, span: Span) {
        self.emit(SpannedToken::new(token, span));
    }

    fn push_single(&mut self, token: Token, start: usize) {
        self.emit(SpannedToken::single_char(token, start));
    }

    /// Emits `double` if the next character is `=`, consuming it.
    fn one_or_two(&mut self, single: Token, double: Token, start: usize) {
        if self.cursor.peek() == Some('=') {
            self.advance();
            self.push(double, Span::new(start, start + 2));
        } else {
            self.push_single(single, start);
        }
    }

    /// `&&` and `||` have no single-character form.
    fn doubled(&mut self, ch: char, token: Token, start: usize) -> Result<(), LexError> {
        if self.cursor.peek() != Some(ch) {
            return Err(self.unsupported(ch, start, format!("expected '{ch}{ch}'")));
        }
        self.advance();
        self.push(token, Span::new(start, start + 2));
        Ok(())
    }

    // Stops before the newline so it is still counted.
    fn skip_line_comment(&mut self) {
        while self.cursor.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    fn string(&mut self, start: usize) -> Result<(), LexError> {
        let mut text = String::new();
        loop {
            let ch = self
                .cursor
                .offset_or_fail(0)
                .map_err(|_| self.unterminated_string(start))?;
            self.advance();
            if ch == '"' {
                break;
            }
            text.push(ch);
        }
        self.push(Token::String(text), Span::new(start, self.cursor.position()));
        Ok(())
    }

    fn number(&mut self, first: char, start: usize) -> Result<(), LexError> {
        let token = match self.base_prefix(first) {
            Some(radix) => self.radix_integer(radix, start)?,
            None => self.decimal(first, start)?,
        };
        self.push(token, Span::new(start, self.cursor.position()));
        Ok(())
    }

    fn base_prefix(&self, first: char) -> Option<Radix> {
        if first != '0' {
            return None;
        }
        self.cursor.peek().and_then(Radix::from_marker)
    }

    fn radix_integer(&mut self, radix: Radix, start: usize) -> Result<Token, LexError> {
        self.advance(); // base marker
        let mut digits = String::new();
        while let Some(ch) = self.cursor.peek().filter(|&c| radix.accepts(c)) {
            digits.push(ch);
            self.advance();
        }
        if digits.is_empty() {
            return Err(self.malformed(start, format!("{} literal has no digits", radix.name())));
        }
        i64::from_str_radix(&digits, radix.base())
            .map(Token::Integer)
            .map_err(|e| self.malformed(start, format!("{} literal: {e}", radix.name())))
    }

    /// Digits with at most one decimal point. The point selects a float.
    fn decimal(&mut self, first: char, start: usize) -> Result<Token, LexError> {
        let mut text = String::from(first);
        let mut is_float = false;
        while let Some(ch) = self.cursor.peek() {
            match ch {
                '0'..='9' => {}
                '.' if is_float => {
                    self.advance();
                    return Err(self.malformed(start, "second decimal point".to_string()));
                }
                '.' => is_float = true,
                _ => break,
            }
            text.push(ch);
            self.advance();
        }
        if is_float {
            text.parse::<f64>()
                .map(Token::Float)
                .map_err(|e| self.malformed(start, format!("float literal '{text}': {e}")))
        } else {
            text.parse::<i64>()
                .map(Token::Integer)
                .map_err(|e| self.malformed(start, format!("integer literal '{text}': {e}")))
        }
    }

    // Digits are not identifier characters: `a1` is `a` followed by `1`.
    fn identifier(&mut self, first: char, start: usize) {
        let mut text = String::from(first);
        while let Some(ch) = self
            .cursor
            .peek()
            .filter(|&c| c.is_ascii_alphabetic() || c == '_')
        {
            text.push(ch);
            self.advance();
        }
        let token = keyword(&text).unwrap_or_else(|| Token::Identifier(text));
        self.push(token, Span::new(start, self.cursor.position()));
    }

    fn location(&self) -> String {
        format!("line {}, column {}", self.token_line, self.token_column)
    }

    fn source_span(&self, start: usize, end: usize) -> SourceSpan {
        Span::new(start, end).to_source_span(self.cursor.source())
    }

    fn unsupported(&self, found: char, start: usize, message: String) -> LexError {
        let span = self.source_span(start, start + 1);
        let message = format!("{message} at {}", self.location());
        LexError::unsupported(found, message, span.offset())
    }

    fn malformed(&self, start: usize, message: String) -> LexError {
        let span = self.source_span(start, self.cursor.position());
        LexError::malformed_number(
            format!("{message} at {}", self.location()),
            span.offset(),
            span.len(),
        )
    }

    fn unterminated_string(&self, start: usize) -> LexError {
        let span = self.source_span(start, self.cursor.source().len());
        LexError::unexpected_eof(
            format!("unterminated string literal starting at {}", self.location()),
            span.offset(),
            span.len(),
        )
    }
}
