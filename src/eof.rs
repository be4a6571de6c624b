use crate::cursor::StrCursor;
use crate::parser::{ParseOutcome, Parser};

/// Parser that succeeds only when no input is left
#[derive(Debug, Clone, Copy, Default)]
pub struct Eof;

impl<'code> Parser<'code> for Eof {
    type Output = ();

    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        cursor.eos().then_some(((), cursor))
    }
}

pub fn eof() -> Eof {
    Eof
}

/// Parser that runs `parser` and then requires the end of input
///
/// Returns the output of `parser`.
pub struct ThenEof<P> {
    parser: P,
}

impl<P> ThenEof<P> {
    pub fn new(parser: P) -> Self {
        ThenEof { parser }
    }
}

impl<'code, P> Parser<'code> for ThenEof<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let ((), cursor) = Eof.parse(cursor)?;
        Some((value, cursor))
    }
}

/// Extension trait to add .eof() method support for parsers
pub trait EofExt<'code>: Parser<'code> + Sized {
    fn eof(self) -> ThenEof<Self> {
        ThenEof::new(self)
    }
}

impl<'code, P> EofExt<'code> for P where P: Parser<'code> {}
