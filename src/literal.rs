use crate::cursor::StrCursor;
use crate::parser::{ParseOutcome, Parser};
use std::borrow::Cow;

/// Parser that matches an exact string at the cursor
///
/// The output is the matched slice of the input rather than the expected
/// text, so no allocation happens on success.
#[derive(Debug, Clone)]
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

fn match_prefix<'code>(expected: &str, cursor: StrCursor<'code>) -> ParseOutcome<'code, &'code str> {
    let rest = cursor.remainder();
    if rest.starts_with(expected) {
        Some((&rest[..expected.len()], cursor.advance(expected.len())))
    } else {
        None
    }
}

impl<'code> Parser<'code> for Literal {
    type Output = &'code str;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        match_prefix(&self.expected, cursor)
    }
}

/// Plain text acts as a literal parser, so `between("[", items, "]")` reads
/// the way the grammar is written
impl<'code, 'lit> Parser<'code> for &'lit str {
    type Output = &'code str;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        match_prefix(self, cursor)
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let (result, rest) = literal("hello").parse_str("hello").unwrap();
        assert_eq!(result, "hello");
        assert!(rest.eos());
    }

    #[test]
    fn test_partial_match_with_remaining() {
        let (result, rest) = literal("hello").parse_str("hello world").unwrap();
        assert_eq!(result, "hello");
        assert_eq!(rest.remainder(), " world");
    }

    #[test]
    fn test_mismatch_fails() {
        assert!(literal("hello").parse_str("help").is_none());
    }

    #[test]
    fn test_does_not_skip_ahead() {
        assert!(literal("null").parse_str(" null").is_none());
    }

    #[test]
    fn test_input_shorter_than_literal() {
        assert!(literal("true").parse_str("tr").is_none());
    }

    #[test]
    fn test_empty_literal_is_zero_width() {
        let (result, rest) = literal("").parse_str("abc").unwrap();
        assert_eq!(result, "");
        assert_eq!(rest.position(), 0);
    }

    #[test]
    fn test_str_is_a_parser() {
        let (result, rest) = "{".parse_str("{}").unwrap();
        assert_eq!(result, "{");
        assert_eq!(rest.remainder(), "}");
    }

    #[test]
    fn test_owned_literal() {
        let parser = literal(String::from("ünï"));
        let (result, rest) = parser.parse_str("ünïcode").unwrap();
        assert_eq!(result, "ünï");
        assert_eq!(rest.remainder(), "code");
    }
}
