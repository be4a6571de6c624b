//! Parser definitions for each kind of document value.
//!
//! Arrays and objects contain values, and values include arrays and objects,
//! so the containers reach back to [`value_parser`] through [`lazy`]. Building
//! `value_parser` eagerly from inside them would recurse before any input is
//! read.

use super::value::{Map, Value};
use crate::between::between;
use crate::eof::EofExt;
use crate::filter_map::FilterMapExt;
use crate::first_of::first_of;
use crate::lazy::lazy;
use crate::list::list;
use crate::literal::literal;
use crate::map::MapExt;
use crate::not::not;
use crate::pair::pair;
use crate::parser::{BoxedExt, BoxedParser, Parser};
use crate::pattern::Pattern;
use crate::sequence::sequence_of;
use crate::whitespace::{TrimExt, whitespace};
use once_cell::sync::Lazy;

/// A double-quoted body where a backslash always takes the next character
/// with it, so `\"` does not end the string
static STRING_PATTERN: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new(r#""(?P<content>(?:\\.|[^"\\])*)""#).expect("string pattern is valid")
});

/// Optional sign, integer part without leading zeros, optional fraction and exponent
static NUMBER_PATTERN: Lazy<Pattern> = Lazy::new(|| {
    Pattern::new(r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?")
        .expect("number pattern is valid")
});

static DIGIT_PATTERN: Lazy<Pattern> =
    Lazy::new(|| Pattern::new("[0-9]").expect("digit pattern is valid"));

/// Quoted text with `\"` unescaped; other escapes are kept as written
pub fn string_parser<'code>() -> impl Parser<'code, Output = String> {
    Pattern::clone(&STRING_PATTERN).map(|caps| {
        caps.name("content")
            .map_or("", |m| m.as_str())
            .replace(r#"\""#, "\"")
    })
}

/// A number in decimal or exponent notation, as `f64`
///
/// A digit directly after the match fails the parse, so `01` is rejected
/// rather than read as `0` followed by `1`.
pub fn number_parser<'code>() -> impl Parser<'code, Output = f64> {
    sequence_of((Pattern::clone(&NUMBER_PATTERN), not(Pattern::clone(&DIGIT_PATTERN))))
        .filter_map(|(caps, ())| caps[0].parse::<f64>().ok())
}

pub fn boolean_parser<'code>() -> impl Parser<'code, Output = bool> {
    first_of((
        literal("true").map_into(true),
        literal("false").map_into(false),
    ))
}

pub fn null_parser<'code>() -> impl Parser<'code, Output = Value> {
    literal("null").map_into(Value::Null)
}

/// `[` value, value, ... `]`, or brackets holding only whitespace
pub fn array_parser<'code>() -> impl Parser<'code, Output = Value> {
    let filled = lazy(|| list(value_parser(), ","));
    let empty = whitespace().map(|_| Vec::new());

    between("[", first_of((filled, empty)), "]").map(Value::Array)
}

/// `{` "key": value, ... `}`, or braces holding only whitespace
///
/// When a key repeats, the last value wins and the key keeps the position of
/// its first occurrence.
pub fn object_parser<'code>() -> impl Parser<'code, Output = Value> {
    let member = pair(string_parser().trim(), ":", lazy(value_parser));
    let filled = list(member, ",").map(|members| members.into_iter().collect::<Map>());
    let empty = whitespace().map(|_| Map::new());

    between("{", first_of((filled, empty)), "}").map(Value::Object)
}

/// Any value, with surrounding whitespace
///
/// Boxed so the recursive references from arrays and objects have a concrete
/// type to name.
pub fn value_parser<'code>() -> BoxedParser<'code, Value> {
    first_of((
        string_parser().map(Value::String),
        number_parser().map(Value::Number),
        object_parser(),
        array_parser(),
        boolean_parser().map(Value::Bool),
        null_parser(),
    ))
    .trim()
    .boxed()
}

/// A complete document: one value and nothing but whitespace after it
pub fn document_parser<'code>() -> impl Parser<'code, Output = Value> {
    value_parser().eof()
}
