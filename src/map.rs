use crate::cursor::StrCursor;
use crate::parser::{ParseOutcome, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Some(((self.mapper)(value), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Parser combinator that replaces every successful output with a fixed value
pub struct MapInto<P, U> {
    parser: P,
    value: U,
}

impl<P, U> MapInto<P, U> {
    pub fn new(parser: P, value: U) -> Self {
        MapInto { parser, value }
    }
}

impl<'code, P, U> Parser<'code> for MapInto<P, U>
where
    P: Parser<'code>,
    U: Clone,
{
    type Output = U;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        let (_, cursor) = self.parser.parse(cursor)?;
        Some((self.value.clone(), cursor))
    }
}

/// Convenience function to create a MapInto parser
pub fn map_into<'code, P, U>(parser: P, value: U) -> MapInto<P, U>
where
    P: Parser<'code>,
    U: Clone,
{
    MapInto::new(parser, value)
}

/// Extension trait to add .map() and .map_into() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }

    fn map_into<U>(self, value: U) -> MapInto<Self, U>
    where
        U: Clone,
    {
        MapInto::new(self, value)
    }
}

impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::first_of::first_of;
    use crate::literal::literal;
    use crate::pattern::pattern;

    #[derive(Debug, PartialEq, Clone)]
    enum Token {
        Word(String),
        Number(u32),
        Flag(bool),
    }

    #[test]
    fn test_map_transforms_output() {
        let parser = literal("abc").map(|s| s.len());

        let (len, rest) = parser.parse_str("abcdef").unwrap();
        assert_eq!(len, 3);
        assert_eq!(rest.remainder(), "def");
    }

    #[test]
    fn test_map_chaining() {
        let parser = pattern("[0-9]").unwrap()
            .map(|caps| caps[0].to_string())
            .map(|s| format!("Digit: {}", s));

        let (result, _) = parser.parse_str("5").unwrap();
        assert_eq!(result, "Digit: 5");
    }

    #[test]
    fn test_map_to_common_enum() {
        let word = pattern("[a-z]+").unwrap().map(|caps| Token::Word(caps[0].to_string()));
        let number = pattern("[0-9]+").unwrap().map(|caps| Token::Number(caps[0].parse().unwrap_or(0)));
        let parser = first_of((word, number));

        let (token, _) = parser.parse_str("42").unwrap();
        assert_eq!(token, Token::Number(42));
    }

    #[test]
    fn test_map_preserves_failure() {
        let parser = literal("A").map(|s| s.to_lowercase());
        assert!(parser.parse_str("xyz").is_none());
    }

    #[test]
    fn test_map_into_fixed_value() {
        let parser = first_of((
            literal("on").map_into(Token::Flag(true)),
            literal("off").map_into(Token::Flag(false)),
        ));

        assert_eq!(parser.parse_str("off").unwrap().0, Token::Flag(false));
        assert_eq!(parser.parse_str("on").unwrap().0, Token::Flag(true));
    }

    #[test]
    fn test_function_syntax() {
        let parser = map(literal("9"), |s: &str| s.len());
        assert_eq!(parser.parse_str("9").unwrap().0, 1);

        let parser = map_into(literal("x"), 7);
        assert_eq!(parser.parse_str("x").unwrap().0, 7);
    }
}
