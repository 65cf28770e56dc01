use std::path::PathBuf;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Which stage of lexing failed, without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum LexErrorKind {
    Io,
    InvalidEncoding,
    UnexpectedEndOfInput,
    UnsupportedCharacter,
    MalformedNumericLiteral,
}

#[derive(Error, Debug, Diagnostic)]
pub enum LexError {
    #[error("cannot read '{}'", path.display())]
    #[diagnostic(code(waffle::lex::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("source is not valid UTF-8 after byte {valid_up_to}")]
    #[diagnostic(code(waffle::lex::invalid_encoding))]
    InvalidEncoding {
        valid_up_to: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("unexpected end of input: {message}")]
    #[diagnostic(code(waffle::lex::unexpected_eof))]
    UnexpectedEndOfInput {
        message: String,
        #[label("input ends here")]
        span: SourceSpan,
    },

    #[error("unsupported character '{found}': {message}")]
    #[diagnostic(code(waffle::lex::unsupported_character))]
    UnsupportedCharacter {
        found: char,
        message: String,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("malformed numeric literal: {message}")]
    #[diagnostic(code(waffle::lex::malformed_number))]
    MalformedNumericLiteral {
        message: String,
        #[label("this literal")]
        span: SourceSpan,
    },
}

impl LexError {
    pub fn unexpected_eof(message: impl Into<String>, offset: usize, len: usize) -> Self {
        Self::UnexpectedEndOfInput {
            message: message.into(),
            span: SourceSpan::new(offset.into(), len),
        }
    }

    pub fn unsupported(found: char, message: impl Into<String>, offset: usize) -> Self {
        Self::UnsupportedCharacter {
            found,
            message: message.into(),
            span: SourceSpan::new(offset.into(), found.len_utf8()),
        }
    }

    pub fn malformed_number(message: impl Into<String>, offset: usize, len: usize) -> Self {
        Self::MalformedNumericLiteral {
            message: message.into(),
            span: SourceSpan::new(offset.into(), len),
        }
    }

    pub fn kind(&self) -> LexErrorKind {
        match self {
            Self::Io { .. } => LexErrorKind::Io,
            Self::InvalidEncoding { .. } => LexErrorKind::InvalidEncoding,
            Self::UnexpectedEndOfInput { .. } => LexErrorKind::UnexpectedEndOfInput,
            Self::UnsupportedCharacter { .. } => LexErrorKind::UnsupportedCharacter,
            Self::MalformedNumericLiteral { .. } => LexErrorKind::MalformedNumericLiteral,
        }
    }

    /// Byte range in the source the error points at, if it has one.
    pub fn span(&self) -> Option<SourceSpan> {
        match self {
            Self::UnexpectedEndOfInput { span, .. }
            | Self::UnsupportedCharacter { span, .. }
            | Self::MalformedNumericLiteral { span, .. } => Some(*span),
            Self::Io { .. } | Self::InvalidEncoding { .. } => None,
        }
    }
}
