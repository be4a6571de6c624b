use crate::cursor::StrCursor;
use crate::parser::{ParseOutcome, Parser};
use crate::whitespace::Whitespace;

/// Parser combinator that matches a list of items separated by a parser
///
/// This combinator parses at least one item, followed by zero or more
/// occurrences of (separator + item). Whitespace after each separator is
/// skipped. It returns a vector of all items.
///
/// # Examples
/// - `"a,b,c"` with separator `","` → `vec!["a", "b", "c"]`
/// - `"1, 2, 3"` with separator `","` → `vec![1, 2, 3]`
///
/// # Note
/// - Requires at least one element; an empty list is a failure
/// - A separator must be followed by another item, so a trailing separator
///   fails the whole list
pub struct List<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> List<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        List { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for List<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        let mut results = Vec::new();

        loop {
            let (value, next_cursor) = self.parser.parse(cursor)?;
            results.push(value);
            cursor = next_cursor;

            // No separator means the item just parsed was the last one
            let Some((_, after_separator)) = self.separator.parse(cursor) else {
                break;
            };
            let (_, after_space) = Whitespace.parse(after_separator)?;
            cursor = after_space;
        }

        Some((results, cursor))
    }
}

/// Creates a parser that matches one or more items separated by `separator`
pub fn list<'code, P, PS>(parser: P, separator: PS) -> List<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    List::new(parser, separator)
}
