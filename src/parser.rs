use crate::cursor::StrCursor;

/// Result of running a parser: the output and the remaining input on success,
/// `None` on failure
///
/// Failure is ordinary control flow for alternation and repetition, so it
/// carries no payload.
pub type ParseOutcome<'code, T> = Option<(T, StrCursor<'code>)>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the advanced cursor on success. A failed
    /// parse returns `None` and the caller keeps using its own cursor, so
    /// failures never consume input.
    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output>;

    /// Parse from the start of `input`
    fn parse_str(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        self.parse(StrCursor::new(input))
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        (**self).parse(cursor)
    }
}

/// Type-erased parser
///
/// Needed wherever a grammar refers to itself: a recursive definition has no
/// finite concrete type until it goes through a box.
pub type BoxedParser<'code, T> = Box<dyn Parser<'code, Output = T> + 'code>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code, Self::Output> {
        Box::new(self)
    }
}

impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> + 'code {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;

    #[test]
    fn test_parse_str_starts_at_offset_zero() {
        let (output, rest) = literal("ab").parse_str("abc").unwrap();
        assert_eq!(output, "ab");
        assert_eq!(rest.position(), 2);
        assert_eq!(rest.remainder(), "c");
    }

    #[test]
    fn test_boxed_parser_delegates() {
        let parser: BoxedParser<'_, &str> = literal("x").boxed();

        assert!(parser.parse_str("xyz").is_some());
        assert!(parser.parse_str("yz").is_none());
    }

    #[test]
    fn test_parser_is_referentially_transparent() {
        let parser = literal("ab");
        let cursor = StrCursor::new("abab");

        assert_eq!(parser.parse(cursor), parser.parse(cursor));
    }
}
