//! Token definitions for the duration grammar

use crate::lexer::Designator;
use crate::Span;
use rust_decimal::Decimal;

/// Sign of a duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// A positive duration (the default)
    Positive,
    /// A negative duration
    Negative,
}

/// A token produced by walking the duration grammar
///
/// Calendar units are integers; clock units carry the decimal value as
/// parsed, fraction included. Normalization decides later whether that
/// fraction is legal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Leading sign
    Sign(Sign),
    /// A bare structural designator (`P` or `T`); carries no value
    Designator(Designator),
    /// Year count
    Years(u64),
    /// Month count
    Months(u64),
    /// Week count
    Weeks(u64),
    /// Day count
    Days(u64),
    /// Hour value, possibly fractional
    Hours(Decimal),
    /// Minute value, possibly fractional
    Minutes(Decimal),
    /// Second value, possibly fractional
    Seconds(Decimal),
}

impl Token {
    /// Whether this token carries a unit value, as opposed to a sign or a
    /// bare structural designator
    #[must_use]
    pub const fn is_unit_value(&self) -> bool {
        !matches!(self, Token::Sign(_) | Token::Designator(_))
    }

    /// Whether this token is an hour, minute, or second value
    #[must_use]
    pub const fn is_time_unit(&self) -> bool {
        matches!(
            self,
            Token::Hours(_) | Token::Minutes(_) | Token::Seconds(_)
        )
    }
}

/// A token with its source location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpannedToken {
    /// The token
    pub token: Token,
    /// Source location; empty for defaulted tokens
    pub span: Span,
}

impl SpannedToken {
    /// Create a new spanned token
    #[must_use]
    pub const fn new(token: Token, span: Span) -> Self {
        Self { token, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_value_classification() {
        assert!(Token::Years(1).is_unit_value());
        assert!(Token::Seconds(Decimal::ONE).is_unit_value());
        assert!(!Token::Sign(Sign::Negative).is_unit_value());
        assert!(!Token::Designator(Designator::TimeSeparator).is_unit_value());
    }

    #[test]
    fn test_time_unit_classification() {
        assert!(Token::Hours(Decimal::ONE).is_time_unit());
        assert!(Token::Minutes(Decimal::ONE).is_time_unit());
        assert!(Token::Seconds(Decimal::ONE).is_time_unit());
        assert!(!Token::Days(1).is_time_unit());
        assert!(!Token::Designator(Designator::TimeSeparator).is_time_unit());
    }
}
