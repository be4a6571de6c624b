//! # strcomb - String Parser Combinators
//!
//! A small parser combinator library over string slices, plus a grammar for a
//! JSON-like data format built entirely from it.
//!
//! A [`Parser`] is a value with one method: given a [`StrCursor`] it returns
//! the parsed output and the remaining input, or `None`. Combinators build new
//! parsers out of existing ones:
//!
//! - **Leaves**: [`literal`], [`pattern`], [`eof`], [`whitespace`]
//! - **Sequencing**: [`sequence_of`], [`pair`], [`between`], [`list`]
//! - **Choice and repetition**: [`first_of`], [`many_of`], [`maybe`], [`not`]
//! - **Transformation**: [`map`], [`map_into`], [`filter_map`]
//! - **Recursion**: [`lazy`], together with [`BoxedParser`]
//!
//! Failure never consumes input and carries no payload, so alternatives and
//! repetition backtrack by simply retrying from the cursor they were given.
//!
//! ```
//! use strcomb::json::{self, Value};
//!
//! let value = json::parse(r#"{"x": [1, 2, true], "y": null}"#).unwrap();
//! assert_eq!(value.get("y"), Some(&Value::Null));
//! ```

pub mod between;
pub mod cursor;
pub mod eof;
pub mod error;
pub mod filter_map;
pub mod first_of;
pub mod json;
pub mod lazy;
pub mod list;
pub mod literal;
pub mod many;
pub mod map;
pub mod maybe;
pub mod not;
pub mod pair;
pub mod parser;
pub mod pattern;
pub mod sequence;
pub mod whitespace;

pub use between::between;
pub use cursor::StrCursor;
pub use eof::{EofExt, eof};
pub use error::{Error, Result};
pub use filter_map::{FilterMapExt, filter_map};
pub use first_of::{OrExt, first_of};
pub use lazy::lazy;
pub use list::list;
pub use literal::literal;
pub use many::many_of;
pub use map::{MapExt, map, map_into};
pub use maybe::maybe;
pub use not::{NotExt, not};
pub use pair::pair;
pub use parser::{BoxedExt, BoxedParser, ParseOutcome, Parser};
pub use pattern::pattern;
pub use sequence::sequence_of;
pub use whitespace::{TrimExt, trim, trim_end, whitespace};
