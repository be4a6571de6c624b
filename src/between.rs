use crate::cursor::StrCursor;
use crate::parser::{ParseOutcome, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// This parses `open + content + close` and returns just the `content` value
/// with the delimiters discarded. Whitespace is not handled here; wrap the
/// pieces with `trim` where it is allowed.
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (content, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Some((content, cursor))
    }
}

/// Creates a parser that matches content between delimiters
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Between::new(open, content, close)
}
