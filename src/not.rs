use crate::cursor::StrCursor;
use crate::parser::{ParseOutcome, Parser};

/// Negative lookahead: succeeds without consuming input iff the inner parser fails
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'code, P> Parser<'code> for Not<P>
where
    P: Parser<'code>,
{
    type Output = ();

    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        match self.parser.parse(cursor) {
            Some(_) => None,
            None => Some(((), cursor)),
        }
    }
}

pub fn not<'code, P>(parser: P) -> Not<P>
where
    P: Parser<'code>,
{
    Not::new(parser)
}

pub trait NotExt<'code>: Parser<'code> + Sized {
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<'code, P> NotExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::many::many_of;
    use crate::map::MapExt;
    use crate::pattern::pattern;
    use crate::sequence::sequence_of;

    #[test]
    fn test_not_fails_on_match() {
        assert!(not(literal("hello")).parse_str("hello").is_none());
    }

    #[test]
    fn test_not_succeeds_on_no_match() {
        let ((), rest) = not(literal("hello")).parse_str("world").unwrap();
        assert_eq!(rest.position(), 0);
    }

    #[test]
    fn test_not_as_terminator() {
        // Digits not followed by another digit
        let parser = sequence_of((literal("0"), pattern("[0-9]").unwrap().not()));

        assert!(parser.parse_str("0.5").is_some());
        assert!(parser.parse_str("01").is_none());
    }

    #[test]
    fn test_not_for_parsing_until_delimiter() {
        let any_char = pattern("(?s).").unwrap().map(|caps| caps[0].to_string());
        let parser = many_of(sequence_of((not(literal("]]")), any_char)).map(|(_, c)| c));

        let (chars, rest) = parser.parse_str("hello]]world").unwrap();
        assert_eq!(chars.concat(), "hello");
        assert_eq!(rest.remainder(), "]]world");
    }
}
