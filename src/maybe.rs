use crate::cursor::StrCursor;
use crate::parser::{ParseOutcome, Parser};

/// Parser combinator that makes a parser optional
///
/// Returns `Some` with the parser's output when it succeeds, or `None` with
/// the input untouched when it fails. Never fails itself.
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<'code, P> Parser<'code> for Maybe<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Some((value, cursor)) => Some((Some(value), cursor)),
            None => Some((None, cursor)),
        }
    }
}

/// Convenience function to create a Maybe parser
pub fn maybe<'code, P>(parser: P) -> Maybe<P>
where
    P: Parser<'code>,
{
    Maybe::new(parser)
}
