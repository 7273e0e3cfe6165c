use std::fmt;

/// A zero-based line/column position. The column counts bytes from the
/// start of the line, not characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub line: usize,
    pub column: usize,
}

impl Point {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Compute the point of `byte` inside `source`.
    ///
    /// Offsets past the end of `source` are clamped to its end.
    pub fn at_byte(source: &str, byte: usize) -> Self {
        let bytes = source.as_bytes();
        let byte = byte.min(bytes.len());
        let prefix = &bytes[..byte];
        let line = prefix.iter().filter(|&&b| b == b'\n').count();
        let column = match prefix.iter().rposition(|&b| b == b'\n') {
            Some(newline) => byte - newline - 1,
            None => byte,
        };
        Self { line, column }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.column)
    }
}

/// Byte range plus the matching point range of a node.
///
/// Byte ranges are half-open: `[start_byte, end_byte)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start_byte: usize,
    pub end_byte: usize,
    pub start_point: Point,
    pub end_point: Point,
}

impl Span {
    pub const fn new(start_byte: usize, end_byte: usize, start_point: Point, end_point: Point) -> Self {
        Self {
            start_byte,
            end_byte,
            start_point,
            end_point,
        }
    }

    /// Build a span for `range` inside `source`, deriving both points.
    pub fn from_source(source: &str, range: std::ops::Range<usize>) -> Self {
        Self {
            start_byte: range.start,
            end_byte: range.end,
            start_point: Point::at_byte(source, range.start),
            end_point: Point::at_byte(source, range.end),
        }
    }

    pub fn byte_range(&self) -> std::ops::Range<usize> {
        self.start_byte..self.end_byte
    }

    pub fn is_empty(&self) -> bool {
        self.start_byte == self.end_byte
    }

    /// True if `start <= end` holds for both bytes and points.
    pub fn is_ordered(&self) -> bool {
        self.start_byte <= self.end_byte && self.start_point <= self.end_point
    }

    /// True if `other` lies entirely inside this span, by bytes and by points.
    pub fn contains(&self, other: &Span) -> bool {
        self.start_byte <= other.start_byte
            && other.end_byte <= self.end_byte
            && self.start_point <= other.start_point
            && other.end_point <= self.end_point
    }

    /// Smallest span covering both.
    pub fn cover(&self, other: &Span) -> Span {
        let (start_byte, start_point) = if other.start_byte < self.start_byte {
            (other.start_byte, other.start_point)
        } else {
            (self.start_byte, self.start_point)
        };
        let (end_byte, end_point) = if other.end_byte > self.end_byte {
            (other.end_byte, other.end_point)
        } else {
            (self.end_byte, self.end_point)
        };
        Span {
            start_byte,
            end_byte,
            start_point,
            end_point,
        }
    }
}
