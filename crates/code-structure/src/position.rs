use serde::{Deserialize, Serialize};

/// Zero-based line/column location in a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub line: usize,
    pub column: usize,
}

impl Point {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Region between two points.
///
/// `start` is expected not to come after `end`; nothing enforces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Point,
    pub end: Point,
}

impl Range {
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Check whether a location falls inside this range (both ends inclusive)
    #[must_use]
    pub const fn contains(&self, line: usize, column: usize) -> bool {
        if line < self.start.line || line > self.end.line {
            return false;
        }

        if line == self.start.line && column < self.start.column {
            return false;
        }

        if line == self.end.line && column > self.end.column {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: (usize, usize), end: (usize, usize)) -> Range {
        Range::new(Point::new(start.0, start.1), Point::new(end.0, end.1))
    }

    #[test]
    fn test_contains_single_point_range() {
        let r = range((3, 4), (3, 4));
        assert!(r.contains(3, 4));
        assert!(!r.contains(3, 3));
        assert!(!r.contains(3, 5));
        assert!(!r.contains(2, 4));
        assert!(!r.contains(4, 4));
    }

    #[test]
    fn test_contains_boundaries_are_inclusive() {
        let r = range((1, 5), (4, 2));
        assert!(r.contains(1, 5));
        assert!(r.contains(4, 2));
    }

    #[test]
    fn test_contains_rejects_outside_each_side() {
        let r = range((1, 5), (4, 2));
        assert!(!r.contains(0, 10));
        assert!(!r.contains(1, 4));
        assert!(!r.contains(4, 3));
        assert!(!r.contains(5, 0));
    }

    #[test]
    fn test_contains_middle_lines_ignore_columns() {
        let r = range((1, 5), (4, 2));
        assert!(r.contains(2, 0));
        assert!(r.contains(3, 500));
        assert!(r.contains(1, 80));
        assert!(r.contains(4, 0));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(range((0, 1), (2, 3)), range((0, 1), (2, 3)));
        assert_ne!(range((0, 1), (2, 3)), range((0, 1), (2, 4)));
        assert!(Point::new(1, 9) < Point::new(2, 0));
    }
}
