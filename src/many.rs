use crate::cursor::StrCursor;
use crate::parser::{ParseOutcome, Parser};

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. Repetition stops at the first failure, and also at the first
/// success that consumed nothing, since repeating a zero-width match would
/// never end. That zero-width output is not recorded.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        let mut results = Vec::new();

        while let Some((value, next_cursor)) = self.parser.parse(cursor) {
            if next_cursor.position() == cursor.position() {
                break;
            }
            results.push(value);
            cursor = next_cursor;
        }

        Some((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many_of<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::pattern::pattern;

    #[test]
    fn test_many_zero_matches() {
        let (results, rest) = many_of(literal("a")).parse_str("xyz").unwrap();

        assert!(results.is_empty());
        assert_eq!(rest.position(), 0);
    }

    #[test]
    fn test_many_multiple_matches() {
        let (results, rest) = many_of(literal("a")).parse_str("aaabcd").unwrap();

        assert_eq!(results, vec!["a", "a", "a"]);
        assert_eq!(rest.remainder(), "bcd");
    }

    #[test]
    fn test_many_all_matches() {
        let (results, rest) = many_of(literal("ab")).parse_str("ababab").unwrap();

        assert_eq!(results.len(), 3);
        assert!(rest.eos());
    }

    #[test]
    fn test_many_empty_input() {
        let (results, rest) = many_of(literal("a")).parse_str("").unwrap();

        assert!(results.is_empty());
        assert!(rest.eos());
    }

    #[test]
    fn test_many_zero_width_parser_terminates() {
        let parser = many_of(pattern(r"\s*").unwrap());

        let (results, rest) = parser.parse_str("abc").unwrap();
        assert!(results.is_empty());
        assert_eq!(rest.position(), 0);
    }

    #[test]
    fn test_many_stops_when_match_becomes_zero_width() {
        // Matches "  " once, then only the empty string
        let parser = many_of(pattern(r" *").unwrap());

        let (results, rest) = parser.parse_str("  x").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(rest.remainder(), "x");
    }
}
