use crate::cursor::StrCursor;
use crate::parser::{ParseOutcome, Parser};

/// A group of alternative parsers sharing one output type
///
/// Implemented for tuples of up to eight parsers and for `Vec<P>`.
pub trait Alternatives<'code> {
    type Output;

    fn parse_first(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output>;
}

macro_rules! impl_alternatives_for_tuple {
    ($first:ident $(, $parser:ident)* ; $($index:tt),+) => {
        impl<'code, $first $(, $parser)*> Alternatives<'code> for ($first, $($parser,)*)
        where
            $first: Parser<'code>,
            $($parser: Parser<'code, Output = $first::Output>,)*
        {
            type Output = $first::Output;

            fn parse_first(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
                $(
                    if let Some(result) = self.$index.parse(cursor) {
                        return Some(result);
                    }
                )+
                None
            }
        }
    };
}

impl_alternatives_for_tuple!(A; 0);
impl_alternatives_for_tuple!(A, B; 0, 1);
impl_alternatives_for_tuple!(A, B, C; 0, 1, 2);
impl_alternatives_for_tuple!(A, B, C, D; 0, 1, 2, 3);
impl_alternatives_for_tuple!(A, B, C, D, E; 0, 1, 2, 3, 4);
impl_alternatives_for_tuple!(A, B, C, D, E, F; 0, 1, 2, 3, 4, 5);
impl_alternatives_for_tuple!(A, B, C, D, E, F, G; 0, 1, 2, 3, 4, 5, 6);
impl_alternatives_for_tuple!(A, B, C, D, E, F, G, H; 0, 1, 2, 3, 4, 5, 6, 7);

impl<'code, P> Alternatives<'code> for Vec<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse_first(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        self.iter().find_map(|parser| parser.parse(cursor))
    }
}

/// Parser combinator that tries each alternative in order on the same input
///
/// The first success wins. There is no longest-match preference and no
/// retry of earlier alternatives once one has succeeded.
pub struct FirstOf<A> {
    alternatives: A,
}

impl<A> FirstOf<A> {
    pub fn new(alternatives: A) -> Self {
        FirstOf { alternatives }
    }
}

impl<'code, A> Parser<'code> for FirstOf<A>
where
    A: Alternatives<'code>,
{
    type Output = A::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        self.alternatives.parse_first(cursor)
    }
}

/// Convenience function to create a FirstOf parser
pub fn first_of<'code, A>(alternatives: A) -> FirstOf<A>
where
    A: Alternatives<'code>,
{
    FirstOf::new(alternatives)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> FirstOf<(Self, P)>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        FirstOf::new((self, other))
    }
}

impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}
