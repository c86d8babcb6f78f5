use crate::position::{Point, Range};

/// Contiguous region of source text as half-open byte offsets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Smallest span covering both
    #[must_use]
    pub fn cover(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Line/column view over a document's text
pub trait SourceText {
    /// Convert a byte offset into a zero-based point
    fn point_from_offset(&self, offset: usize) -> Point;

    /// Convert a span into a range of points
    fn range_from_span(&self, span: TextSpan) -> Range {
        Range::new(
            self.point_from_offset(span.start),
            self.point_from_offset(span.end),
        )
    }
}

/// Owned document text with precomputed line starts.
///
/// Lines break on `\n`, `\r\n` and a lone `\r`. Columns are counted in UTF-16
/// code units so positions line up with editor protocols.
#[derive(Debug, Clone)]
pub struct LineIndex {
    text: String,
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let bytes = text.as_bytes();
        let mut line_starts = vec![0];

        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => line_starts.push(i + 1),
                b'\r' => {
                    if bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    line_starts.push(i + 1);
                }
                _ => {}
            }
            i += 1;
        }

        Self { text, line_starts }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

impl SourceText for LineIndex {
    fn point_from_offset(&self, offset: usize) -> Point {
        let offset = offset.min(self.text.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];

        // Offsets inside a multi-byte char count the whole char
        let mut end = offset;
        while !self.text.is_char_boundary(end) {
            end += 1;
        }
        let column = self.text[line_start..end].encode_utf16().count();

        Point::new(line, column)
    }
}
