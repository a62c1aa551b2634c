//! Parser error types

use crate::Span;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for duration parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// An invalid-duration failure
///
/// Every failure mode collapses into "this is not a valid duration"; the
/// variants only record the reason and position for diagnostics.
#[derive(Debug, Clone, Error, Diagnostic)]
pub enum ParseError {
    /// Input left over after the grammar was exhausted
    #[error("trailing characters after the duration")]
    TrailingInput {
        /// Location of the unconsumed input
        #[label("not part of the duration")]
        span: Span,
    },

    /// No unit value anywhere in the input
    #[error("duration specifies no units")]
    NoUnits {
        /// The whole input
        #[label("expected at least one unit")]
        span: Span,
    },

    /// A time separator with no time unit after it
    #[error("time separator must be followed by at least one time unit")]
    EmptyTime {
        /// Location of the separator
        #[label("nothing follows this `T`")]
        span: Span,
    },

    /// The single-fraction rule violated: a fractional unit with non-zero
    /// finer units after it
    #[error("only the least significant time unit may be fractional")]
    MisplacedFraction {
        /// Location of the fractional value
        #[label("fractional, but finer units follow")]
        span: Span,
    },

    /// A unit value too large for the duration data model
    #[error("unit value out of range")]
    ValueOutOfRange {
        /// Location of the value
        #[label("does not fit")]
        span: Span,
    },
}

impl ParseError {
    /// Get the span of the error
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            ParseError::TrailingInput { span }
            | ParseError::NoUnits { span }
            | ParseError::EmptyTime { span }
            | ParseError::MisplacedFraction { span }
            | ParseError::ValueOutOfRange { span } => *span,
        }
    }
}
