//! Duration values and their assembly from the token stream
//!
//! [`RawDuration`] is the pre-normalization intermediate form: integer
//! calendar units and decimal clock units, exactly as parsed. It never
//! leaves this crate. [`Duration`] is the public, all-integer result.

mod normalize;

use crate::parser::{Sign, SpannedToken, Token};
use crate::Span;
use rust_decimal::Decimal;
use serde::Serialize;

/// A parsed, normalized ISO 8601 duration
///
/// All fields are non-negative; the sign applies to the duration as a
/// whole. Values are immutable once produced: parsing is a pure function
/// from text to `Duration`, and no partially-built value is observable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Duration {
    /// Whether the duration as a whole is negative
    pub is_negative: bool,
    /// Calendar years
    pub years: u64,
    /// Calendar months
    pub months: u64,
    /// Weeks
    pub weeks: u64,
    /// Days
    pub days: u64,
    /// Hours
    pub hours: u64,
    /// Minutes
    pub minutes: u64,
    /// Seconds
    pub seconds: u64,
    /// Milliseconds
    pub milliseconds: u64,
    /// Microseconds
    pub microseconds: u64,
    /// Nanoseconds
    pub nanoseconds: u64,
}

impl Duration {
    /// Whether every unit field is zero, ignoring the sign flag
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.milliseconds == 0
            && self.microseconds == 0
            && self.nanoseconds == 0
    }
}

/// A decimal clock-unit value together with the source span it came from
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ClockValue {
    pub(crate) value: Decimal,
    pub(crate) span: Span,
}

/// Pre-normalization duration: integer calendar units, decimal clock units
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RawDuration {
    pub(crate) is_negative: bool,
    pub(crate) years: u64,
    pub(crate) months: u64,
    pub(crate) weeks: u64,
    pub(crate) days: u64,
    pub(crate) hours: ClockValue,
    pub(crate) minutes: ClockValue,
    pub(crate) seconds: ClockValue,
}

impl RawDuration {
    /// Fold a token stream, in order, into the accumulator
    ///
    /// `Designator` tokens and a positive sign are no-ops; only a negative
    /// sign sets the flag. The grammar yields at most one token per field,
    /// so each write is final.
    pub(crate) fn from_tokens(tokens: &[SpannedToken]) -> Self {
        let mut raw = RawDuration::default();
        for spanned in tokens {
            match spanned.token {
                Token::Sign(Sign::Negative) => raw.is_negative = true,
                Token::Sign(Sign::Positive) | Token::Designator(_) => {}
                Token::Years(count) => raw.years = count,
                Token::Months(count) => raw.months = count,
                Token::Weeks(count) => raw.weeks = count,
                Token::Days(count) => raw.days = count,
                Token::Hours(value) => {
                    raw.hours = ClockValue {
                        value,
                        span: spanned.span,
                    };
                }
                Token::Minutes(value) => {
                    raw.minutes = ClockValue {
                        value,
                        span: spanned.span,
                    };
                }
                Token::Seconds(value) => {
                    raw.seconds = ClockValue {
                        value,
                        span: spanned.span,
                    };
                }
            }
        }
        raw
    }
}
