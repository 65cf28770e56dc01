pub mod error;
pub mod printer;
pub mod repl;
pub mod scanner;
pub mod source;

pub use error::{LexError, LexErrorKind};
