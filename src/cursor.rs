/// Immutable view over the unconsumed part of a text input
///
/// A cursor keeps the whole source and a byte offset into it. Parsers never
/// mutate a cursor; advancing returns a new one, so the caller's cursor is
/// still valid after any failed attempt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StrCursor<'code> {
    source: &'code str,
    position: usize,
}

impl<'code> StrCursor<'code> {
    pub fn new(source: &'code str) -> Self {
        StrCursor {
            source,
            position: 0,
        }
    }

    /// The input that has not been consumed yet
    pub fn remainder(&self) -> &'code str {
        &self.source[self.position..]
    }

    /// Byte offset of this cursor within the source
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn source(&self) -> &'code str {
        self.source
    }

    /// Check if the cursor is at the end of the input
    pub fn eos(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Move the cursor forward by `len` bytes
    ///
    /// `len` must land on a char boundary of the remainder; callers get it
    /// from the length of a prefix they matched.
    pub fn advance(self, len: usize) -> Self {
        let position = (self.position + len).min(self.source.len());
        debug_assert!(self.source.is_char_boundary(position));
        StrCursor {
            source: self.source,
            position,
        }
    }
}
