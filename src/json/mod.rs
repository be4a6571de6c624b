//! Grammar for a JSON-like data format built from the crate's combinators.
//!
//! Recognises strings, numbers, booleans, `null`, arrays and objects and
//! produces a [`Value`] tree. Failure is all-or-nothing: a malformed document
//! yields [`Error::Rejected`] with no partial value and no position.

pub mod grammar;
pub mod value;

pub use grammar::{
    array_parser, boolean_parser, document_parser, null_parser, number_parser, object_parser,
    string_parser, value_parser,
};
pub use value::{Map, Value};

use crate::error::{Error, Result};
use crate::parser::Parser;
use log::{debug, trace};

/// Parse a complete document
///
/// Surrounding whitespace is allowed; anything else after the value is an
/// error.
pub fn parse(input: &str) -> Result<Value> {
    trace!("parsing document of {} bytes", input.len());

    match document_parser().parse_str(input) {
        Some((value, _)) => {
            trace!("parsed document as {}", value.kind());
            Ok(value)
        }
        None => {
            debug!("rejected document of {} bytes", input.len());
            Err(Error::Rejected)
        }
    }
}
