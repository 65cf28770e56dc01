use std::fmt;

use miette::SourceSpan;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Token {
    // Keywords
    Fun,
    For,
    Match,
    Use,
    Struct,
    Enum,
    Let,
    Pub,
    Priv,
    Module,

    // Punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftSquareBracket,
    RightSquareBracket,
    Colon,
    Semicolon,
    Comma,
    Dot,

    // Operators
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
    Mod,
    CompoundPlus,
    CompoundMinus,
    CompoundStar,
    CompoundSlash,
    CompoundMod,
    And,
    Or,
    Xor,
    Not,
    Equals,
    NotEquals,
    Greater,
    GreaterEquals,
    Less,
    LessEquals,

    // Literals
    Integer(i64),
    Float(f64),
    String(String),
    Identifier(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fun => write!(f, "fun"),
            Self::For => write!(f, "for"),
            Self::Match => write!(f, "match"),
            Self::Use => write!(f, "use"),
            Self::Struct => write!(f, "struct"),
            Self::Enum => write!(f, "enum"),
            Self::Let => write!(f, "let"),
            Self::Pub => write!(f, "pub"),
            Self::Priv => write!(f, "priv"),
            Self::Module => write!(f, "module"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::LeftBrace => write!(f, "{{"),
            Self::RightBrace => write!(f, "}}"),
            Self::LeftSquareBracket => write!(f, "["),
            Self::RightSquareBracket => write!(f, "]"),
            Self::Colon => write!(f, ":"),
            Self::Semicolon => write!(f, ";"),
            Self::Comma => write!(f, ","),
            Self::Dot => write!(f, "."),
            Self::Assign => write!(f, "="),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Mod => write!(f, "%"),
            Self::CompoundPlus => write!(f, "+="),
            Self::CompoundMinus => write!(f, "-="),
            Self::CompoundStar => write!(f, "*="),
            Self::CompoundSlash => write!(f, "/="),
            Self::CompoundMod => write!(f, "%="),
            Self::And => write!(f, "&&"),
            Self::Or => write!(f, "||"),
            Self::Xor => write!(f, "^"),
            Self::Not => write!(f, "!"),
            Self::Equals => write!(f, "=="),
            Self::NotEquals => write!(f, "!="),
            Self::Greater => write!(f, ">"),
            Self::GreaterEquals => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::LessEquals => write!(f, "<="),
            Self::Integer(_) => write!(f, "INTEGER"),
            Self::Float(_) => write!(f, "FLOAT"),
            Self::String(_) => write!(f, "STRING"),
            Self::Identifier(_) => write!(f, "IDENTIFIER"),
        }
    }
}

/// Look up a reserved word. Matching is exact and case-sensitive.
pub fn keyword(ident: &str) -> Option<Token> {
    match ident {
        "fun" => Some(Token::Fun),
        "for" => Some(Token::For),
        "match" => Some(Token::Match),
        "use" => Some(Token::Use),
        "struct" => Some(Token::Struct),
        "enum" => Some(Token::Enum),
        "let" => Some(Token::Let),
        "pub" => Some(Token::Pub),
        "priv" => Some(Token::Priv),
        "module" => Some(Token::Module),
        _ => None,
    }
}

/// Half-open range `[start, end)` of code point offsets into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} past end {end}");
        Self { start, end }
    }

    pub fn single(start: usize) -> Self {
        Self::new(start, start + 1)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Byte range of this span in the UTF-8 text `code` was decoded from.
    /// Offsets past the end of `code` are clamped to it.
    pub fn to_source_span(self, code: &[char]) -> SourceSpan {
        let utf8_len = |chars: &[char]| chars.iter().map(|c| c.len_utf8()).sum::<usize>();
        let start = self.start.min(code.len());
        let end = self.end.min(code.len());
        SourceSpan::new(utf8_len(&code[..start]).into(), utf8_len(&code[start..end]))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

impl SpannedToken {
    pub fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }

    pub fn single_char(token: Token, start: usize) -> Self {
        Self::new(token, Span::single(start))
    }
}

impl fmt::Display for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            Token::Integer(value) => write!(f, "{} {value} @{}", self.token, self.span),
            Token::Float(value) => write!(f, "{} {value:?} @{}", self.token, self.span),
            Token::String(text) => write!(f, "{} {text:?} @{}", self.token, self.span),
            Token::Identifier(name) => write!(f, "{} '{name}' @{}", self.token, self.span),
            other => write!(f, "'{other}' @{}", self.span),
        }
    }
}
