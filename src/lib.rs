//! isodur: ISO 8601 duration parsing
//!
//! This crate parses ISO 8601 textual durations (including the ISO 8601-2
//! extensions: week units combined with other date units, and an optional
//! leading sign) into a normalized, all-integer [`Duration`] value.
//!
//! Parsing is grammar-driven: an ordered sequence of token specifications is
//! walked over the input exactly once, left to right. The same designator
//! letter can mean different units depending on where it appears (`M` is
//! months before the `T` time separator and minutes after it); the grammar
//! position alone decides which, never lookahead.
//!
//! Only the least-significant time unit present may carry a decimal
//! fraction. That fraction is cascaded down through the finer units with
//! exact decimal arithmetic, so `PT2.5H` becomes 2 hours and 30 minutes, and
//! `PT0.0021S` becomes 2 milliseconds and 100 microseconds.
//!
//! # Example
//!
//! ```
//! use isodur::parse_duration;
//!
//! let duration = parse_duration("P1Y2MT3H30M").unwrap();
//! assert_eq!(duration.years, 1);
//! assert_eq!(duration.months, 2);
//! assert_eq!(duration.hours, 3);
//! assert_eq!(duration.minutes, 30);
//!
//! let duration = parse_duration("PT2.5H").unwrap();
//! assert_eq!(duration.hours, 2);
//! assert_eq!(duration.minutes, 30);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod duration;
pub mod lexer;
pub mod parser;
pub mod timestamp;

pub use duration::Duration;
pub use parser::{ParseError, ParseResult};
pub use timestamp::{Timestamp, TimestampError};

/// Parse an ISO 8601 duration string
///
/// The input must be fully consumed: trailing characters after the duration
/// are an error. A duration must specify at least one unit, so `"P"` and
/// `"PT"` on their own are rejected.
///
/// # Errors
///
/// Returns an error if the input is not a valid duration.
pub fn parse_duration(input: &str) -> ParseResult<Duration> {
    parser::Parser::new(input).parse()
}

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a span covering both spans
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        let start = if self.start < other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end > other.end {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.end.saturating_sub(span.start)).into()
    }
}
