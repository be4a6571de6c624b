use crate::cursor::StrCursor;
use crate::parser::{ParseOutcome, Parser};

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Parser that consumes zero or more whitespace characters
///
/// Whitespace is space, tab, line feed, carriage return, vertical tab and form
/// feed. Always succeeds; the output is the consumed slice, possibly empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Whitespace;

impl<'code> Parser<'code> for Whitespace {
    type Output = &'code str;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        let rest = cursor.remainder();
        let len = rest.find(|c| !is_space(c)).unwrap_or(rest.len());
        Some((&rest[..len], cursor.advance(len)))
    }
}

pub fn whitespace() -> Whitespace {
    Whitespace
}

/// Parser that allows `space` on both sides of `parser`
pub struct Trim<P, S> {
    parser: P,
    space: S,
}

impl<P, S> Trim<P, S> {
    pub fn new(parser: P, space: S) -> Self {
        Trim { parser, space }
    }
}

impl<'code, P, S> Parser<'code> for Trim<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        let (_, cursor) = self.space.parse(cursor)?;
        let (value, cursor) = self.parser.parse(cursor)?;
        let (_, cursor) = self.space.parse(cursor)?;
        Some((value, cursor))
    }
}

/// Parser that allows `space` after `parser`
pub struct TrimEnd<P, S> {
    parser: P,
    space: S,
}

impl<P, S> TrimEnd<P, S> {
    pub fn new(parser: P, space: S) -> Self {
        TrimEnd { parser, space }
    }
}

impl<'code, P, S> Parser<'code> for TrimEnd<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let (_, cursor) = self.space.parse(cursor)?;
        Some((value, cursor))
    }
}

pub fn trim<'code, P, S>(parser: P, space: S) -> Trim<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    Trim::new(parser, space)
}

pub fn trim_end<'code, P, S>(parser: P, space: S) -> TrimEnd<P, S>
where
    P: Parser<'code>,
    S: Parser<'code>,
{
    TrimEnd::new(parser, space)
}

/// Extension trait to add whitespace trimming methods to parsers
///
/// `.trim()` and `.trim_end()` use [`whitespace`]; the `_with` forms take a
/// custom space parser.
pub trait TrimExt<'code>: Parser<'code> + Sized {
    fn trim(self) -> Trim<Self, Whitespace> {
        Trim::new(self, Whitespace)
    }

    fn trim_with<S>(self, space: S) -> Trim<Self, S>
    where
        S: Parser<'code>,
    {
        Trim::new(self, space)
    }

    fn trim_end(self) -> TrimEnd<Self, Whitespace> {
        TrimEnd::new(self, Whitespace)
    }

    fn trim_end_with<S>(self, space: S) -> TrimEnd<Self, S>
    where
        S: Parser<'code>,
    {
        TrimEnd::new(self, space)
    }
}

impl<'code, P> TrimExt<'code> for P where P: Parser<'code> {}
