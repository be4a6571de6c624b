use crate::cursor::StrCursor;
use crate::parser::{ParseOutcome, Parser};

/// A group of parsers that can run one after another
///
/// Implemented for tuples of parsers, whose output is the tuple of their
/// outputs, and for `Vec<P>`, whose output is a `Vec` of outputs. Rust has no
/// variadic generics, so tuples are covered up to eight members.
pub trait Sequence<'code> {
    type Output;

    fn parse_sequence(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output>;
}

macro_rules! impl_sequence_for_tuple {
    ($(($parser:ident, $value:ident, $index:tt)),+) => {
        impl<'code, $($parser),+> Sequence<'code> for ($($parser,)+)
        where
            $($parser: Parser<'code>,)+
        {
            type Output = ($($parser::Output,)+);

            fn parse_sequence(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
                $(let ($value, cursor) = self.$index.parse(cursor)?;)+
                Some((($($value,)+), cursor))
            }
        }
    };
}

impl_sequence_for_tuple!((A, a, 0));
impl_sequence_for_tuple!((A, a, 0), (B, b, 1));
impl_sequence_for_tuple!((A, a, 0), (B, b, 1), (C, c, 2));
impl_sequence_for_tuple!((A, a, 0), (B, b, 1), (C, c, 2), (D, d, 3));
impl_sequence_for_tuple!((A, a, 0), (B, b, 1), (C, c, 2), (D, d, 3), (E, e, 4));
impl_sequence_for_tuple!((A, a, 0), (B, b, 1), (C, c, 2), (D, d, 3), (E, e, 4), (F, f, 5));
impl_sequence_for_tuple!(
    (A, a, 0),
    (B, b, 1),
    (C, c, 2),
    (D, d, 3),
    (E, e, 4),
    (F, f, 5),
    (G, g, 6)
);
impl_sequence_for_tuple!(
    (A, a, 0),
    (B, b, 1),
    (C, c, 2),
    (D, d, 3),
    (E, e, 4),
    (F, f, 5),
    (G, g, 6),
    (H, h, 7)
);

impl<'code, P> Sequence<'code> for Vec<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse_sequence(&self, mut cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        let mut results = Vec::with_capacity(self.len());
        for parser in self {
            let (value, next_cursor) = parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;
        }
        Some((results, cursor))
    }
}

/// Parser combinator that runs its parsers in order over the shrinking input
///
/// Succeeds with every output only if all of them succeed. If any member
/// fails the whole sequence fails and the caller's cursor is left where it
/// was.
pub struct SequenceOf<S> {
    parsers: S,
}

impl<S> SequenceOf<S> {
    pub fn new(parsers: S) -> Self {
        SequenceOf { parsers }
    }
}

impl<'code, S> Parser<'code> for SequenceOf<S>
where
    S: Sequence<'code>,
{
    type Output = S::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        self.parsers.parse_sequence(cursor)
    }
}

/// Convenience function to create a SequenceOf parser
pub fn sequence_of<'code, S>(parsers: S) -> SequenceOf<S>
where
    S: Sequence<'code>,
{
    SequenceOf::new(parsers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::pattern::pattern;

    #[test]
    fn test_sequence_all_succeed() {
        let parser = sequence_of((literal("a"), literal("b"), literal("c")));

        let ((a, b, c), rest) = parser.parse_str("abcd").unwrap();
        assert_eq!((a, b, c), ("a", "b", "c"));
        assert_eq!(rest.remainder(), "d");
    }

    #[test]
    fn test_sequence_mixed_outputs() {
        let parser = sequence_of(("x=", pattern("[0-9]+").unwrap()));

        let ((prefix, caps), rest) = parser.parse_str("x=42").unwrap();
        assert_eq!(prefix, "x=");
        assert_eq!(&caps[0], "42");
        assert!(rest.eos());
    }

    #[test]
    fn test_sequence_fails_if_any_fails() {
        let parser = sequence_of(("a", "b", "c"));
        assert!(parser.parse_str("abx").is_none());
    }

    #[test]
    fn test_sequence_failure_leaves_cursor() {
        let parser = sequence_of(("a", "b"));
        let cursor = StrCursor::new("ax");

        assert!(parser.parse(cursor).is_none());
        // A different parser still sees the original input
        let (out, _) = literal("ax").parse(cursor).unwrap();
        assert_eq!(out, "ax");
    }

    #[test]
    fn test_single_member_sequence() {
        let ((a,), _) = sequence_of(("a",)).parse_str("a").unwrap();
        assert_eq!(a, "a");
    }

    #[test]
    fn test_eight_member_sequence() {
        let parser = sequence_of(("1", "2", "3", "4", "5", "6", "7", "8"));
        let (out, rest) = parser.parse_str("12345678").unwrap();
        assert_eq!(out.7, "8");
        assert!(rest.eos());
    }

    #[test]
    fn test_vec_sequence() {
        let parser = sequence_of(vec![literal("ab"), literal("cd")]);

        let (out, rest) = parser.parse_str("abcdef").unwrap();
        assert_eq!(out, vec!["ab", "cd"]);
        assert_eq!(rest.remainder(), "ef");
    }

    #[test]
    fn test_empty_vec_sequence_is_zero_width() {
        let parser = sequence_of(Vec::<crate::literal::Literal>::new());

        let (out, rest) = parser.parse_str("abc").unwrap();
        assert!(out.is_empty());
        assert_eq!(rest.position(), 0);
    }
}
