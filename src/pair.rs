use crate::cursor::StrCursor;
use crate::parser::{ParseOutcome, Parser};

/// Parser combinator that parses two values around a separator
///
/// The separator's output is discarded; the result is `(first, second)`.
pub struct Pair<P1, PS, P2> {
    first: P1,
    separator: PS,
    second: P2,
}

impl<P1, PS, P2> Pair<P1, PS, P2> {
    pub fn new(first: P1, separator: PS, second: P2) -> Self {
        Pair {
            first,
            separator,
            second,
        }
    }
}

impl<'code, P1, PS, P2> Parser<'code> for Pair<P1, PS, P2>
where
    P1: Parser<'code>,
    PS: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        let (first, cursor) = self.first.parse(cursor)?;
        let (_, cursor) = self.separator.parse(cursor)?;
        let (second, cursor) = self.second.parse(cursor)?;
        Some(((first, second), cursor))
    }
}

/// Creates a parser for `first separator second`
pub fn pair<'code, P1, PS, P2>(first: P1, separator: PS, second: P2) -> Pair<P1, PS, P2>
where
    P1: Parser<'code>,
    PS: Parser<'code>,
    P2: Parser<'code>,
{
    Pair::new(first, separator, second)
}
