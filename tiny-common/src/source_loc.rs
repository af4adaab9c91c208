//! Source location tracking for error reporting
//!
//! Diagnostics in TINY-extended are line based, but tokens keep the
//! column too so the scanner dump and syntax errors can point precisely.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in a source file (line and column are 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Create a dummy location for testing
    pub fn dummy() -> Self {
        Self::new(0, 0)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span in a source file (from start to end location)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl SourceSpan {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    /// Create a span from a single location
    pub fn from_location(location: SourceLocation) -> Self {
        Self {
            start: location,
            end: location,
        }
    }

    /// Line the span starts on
    pub fn line(&self) -> u32 {
        self.start.line
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            if self.start.column == self.end.column {
                write!(f, "{}", self.start)
            } else {
                write!(f, "{}:{}-{}", self.start.line, self.start.column, self.end.column)
            }
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_location() {
        let loc = SourceLocation::new(42, 10);
        assert_eq!(loc.line, 42);
        assert_eq!(loc.column, 10);
        assert_eq!(format!("{}", loc), "42:10");
    }

    #[test]
    fn test_source_span_same_line() {
        let span = SourceSpan::new(SourceLocation::new(1, 5), SourceLocation::new(1, 10));
        assert_eq!(format!("{}", span), "1:5-10");
        assert_eq!(span.line(), 1);
    }

    #[test]
    fn test_source_span_different_lines() {
        let span = SourceSpan::new(SourceLocation::new(1, 5), SourceLocation::new(3, 10));
        assert_eq!(format!("{}", span), "1:5-3:10");
    }

    #[test]
    fn test_source_span_single_point() {
        let span = SourceSpan::from_location(SourceLocation::new(7, 2));
        assert_eq!(format!("{}", span), "7:2");
    }
}
