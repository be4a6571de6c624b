//! Error types for the crate's fallible entry points.
//!
//! Individual parsers fail with a bare `None`; these errors only appear where
//! a caller needs a `Result`: compiling a pattern and parsing a whole document.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A pattern source did not compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The input is not a well-formed document. No position is reported.
    #[error("input is not a well-formed document")]
    Rejected,
}

/// A convenience `Result` type alias using the crate's `Error` type.
pub type Result<T> = std::result::Result<T, Error>;
