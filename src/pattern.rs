use crate::cursor::StrCursor;
use crate::error::Result;
use crate::parser::{ParseOutcome, Parser};
use regex::{Captures, Regex};

/// Parser that matches a regular expression at the cursor
///
/// The compiled expression is always anchored with `\A`, so a match further
/// into the input is never found. The output is the full set of captures;
/// group 0 is the matched text.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile `source` anchored at the start of the input
    pub fn new(source: &str) -> Result<Self> {
        let regex = Regex::new(&format!(r"\A(?:{source})"))?;
        Ok(Pattern { regex })
    }

    /// The anchored expression actually used for matching
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl<'code> Parser<'code> for Pattern {
    type Output = Captures<'code>;

    fn parse(&self, cursor: StrCursor<'code>) -> ParseOutcome<'code, Self::Output> {
        let captures = self.regex.captures(cursor.remainder())?;
        let len = captures.get(0)?.end();
        Some((captures, cursor.advance(len)))
    }
}

/// Convenience function to create a Pattern parser
pub fn pattern(source: &str) -> Result<Pattern> {
    Pattern::new(source)
}
