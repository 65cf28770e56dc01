//! Getting source text into the code point buffer the lexer reads.

use std::path::Path;

use crate::error::LexError;

/// Decode UTF-8 bytes into code points.
pub fn decode(bytes: &[u8]) -> Result<Vec<char>, LexError> {
    let text = std::str::from_utf8(bytes).map_err(|source| LexError::InvalidEncoding {
        valid_up_to: source.valid_up_to(),
        source,
    })?;
    Ok(text.chars().collect())
}

/// Read a source file and decode it.
pub fn read_file(path: &Path) -> Result<Vec<char>, LexError> {
    let bytes = std::fs::read(path).map_err(|source| LexError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&bytes)
}
