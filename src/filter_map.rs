use crate::cursor::StrCursor;
use crate::parser::{ParseOutcome, Parser};

/// Parser combinator that maps the output with a fallible function
///
/// When the function returns `None` the whole parse fails, as if the inner
/// parser had not matched.
pub struct FilterMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> FilterMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        FilterMap { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for FilterMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Option<U>,
{
    type Output = U;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let mapped = (self.mapper)(value)?;
        Some((mapped, cursor))
    }
}

/// Convenience function to create a FilterMap parser
pub fn filter_map<'code, P, F, U>(parser: P, mapper: F) -> FilterMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Option<U>,
{
    FilterMap::new(parser, mapper)
}

/// Extension trait to add .filter_map() method support for parsers
pub trait FilterMapExt<'code>: Parser<'code> + Sized {
    fn filter_map<F, U>(self, mapper: F) -> FilterMap<Self, F>
    where
        F: Fn(Self::Output) -> Option<U>,
    {
        FilterMap::new(self, mapper)
    }
}

impl<'code, P> FilterMapExt<'code> for P where P: Parser<'code> {}
