//! Fractional-carry normalization
//!
//! Enforces the single-fraction rule (only the least significant specified
//! time unit may be fractional) and cascades a fractional remainder down
//! through the finer units: ×60 from hours to minutes and minutes to
//! seconds, ×1000 from seconds through milliseconds and microseconds to
//! nanoseconds. Arithmetic is exact decimal throughout; any remainder finer
//! than a nanosecond is discarded, not rounded.

use super::{ClockValue, Duration, RawDuration};
use crate::parser::{ParseError, ParseResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

impl RawDuration {
    /// Validate the fraction layout and produce the final duration
    ///
    /// Hours, minutes, and seconds are processed in that order. A
    /// fractional unit requires every finer unit, as parsed, to be exactly
    /// zero; at most one unit can therefore trigger a cascade. An
    /// all-integer raw duration normalizes to itself.
    ///
    /// # Errors
    ///
    /// Fails if the single-fraction rule is violated or a value does not
    /// fit the integer data model.
    pub(crate) fn normalize(self) -> ParseResult<Duration> {
        let mut duration = Duration {
            is_negative: self.is_negative,
            years: self.years,
            months: self.months,
            weeks: self.weeks,
            days: self.days,
            ..Duration::default()
        };

        if !is_regular(self.hours.value) {
            if !self.minutes.value.is_zero() || !self.seconds.value.is_zero() {
                return Err(ParseError::MisplacedFraction {
                    span: self.hours.span,
                });
            }
            duration.hours = whole(self.hours)?;
            let [minutes, seconds, millis, micros, nanos] =
                carry_down(self.hours.value.fract(), [60, 60, 1000, 1000, 1000]);
            duration.minutes = minutes;
            duration.seconds = seconds;
            duration.milliseconds = millis;
            duration.microseconds = micros;
            duration.nanoseconds = nanos;
            return Ok(duration);
        }
        duration.hours = whole(self.hours)?;

        if !is_regular(self.minutes.value) {
            if !self.seconds.value.is_zero() {
                return Err(ParseError::MisplacedFraction {
                    span: self.minutes.span,
                });
            }
            duration.minutes = whole(self.minutes)?;
            let [seconds, millis, micros, nanos] =
                carry_down(self.minutes.value.fract(), [60, 1000, 1000, 1000]);
            duration.seconds = seconds;
            duration.milliseconds = millis;
            duration.microseconds = micros;
            duration.nanoseconds = nanos;
            return Ok(duration);
        }
        duration.minutes = whole(self.minutes)?;

        if !is_regular(self.seconds.value) {
            duration.seconds = whole(self.seconds)?;
            let [millis, micros, nanos] =
                carry_down(self.seconds.value.fract(), [1000, 1000, 1000]);
            duration.milliseconds = millis;
            duration.microseconds = micros;
            duration.nanoseconds = nanos;
            return Ok(duration);
        }
        duration.seconds = whole(self.seconds)?;

        Ok(duration)
    }
}

/// Whether the value has no fractional part
fn is_regular(value: Decimal) -> bool {
    value.fract().is_zero()
}

/// The integer part of a clock value, as a `u64`
fn whole(clock: ClockValue) -> ParseResult<u64> {
    clock
        .value
        .trunc()
        .to_u64()
        .ok_or(ParseError::ValueOutOfRange { span: clock.span })
}

/// Distribute a fractional remainder across the subunit chain
///
/// Each step scales the remainder by its factor, takes the floor as that
/// subunit's value, and carries the new remainder forward. Flooring (not
/// rounding) keeps each subunit from overshooting into the next: 2.5 hours
/// is 2 h 30 min, never 3 h or 2 h 29 min. Whatever remains after the last
/// step is dropped.
fn carry_down<const N: usize>(mut fraction: Decimal, factors: [u32; N]) -> [u64; N] {
    let mut parts = [0u64; N];
    for (part, factor) in parts.iter_mut().zip(factors) {
        let scaled = fraction * Decimal::from(factor);
        // fraction < 1, so scaled < factor and always fits
        *part = scaled.trunc().to_u64().unwrap_or(0);
        fraction = scaled.fract();
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Span;

    fn clock(value: Decimal) -> ClockValue {
        ClockValue {
            value,
            span: Span::default(),
        }
    }

    fn raw() -> RawDuration {
        RawDuration::default()
    }

    #[test]
    fn test_integer_raw_duration_is_unchanged() {
        let duration = RawDuration {
            years: 1,
            days: 2,
            hours: clock(Decimal::from(3)),
            minutes: clock(Decimal::from(4)),
            seconds: clock(Decimal::from(5)),
            ..raw()
        }
        .normalize()
        .unwrap();

        assert_eq!(duration.years, 1);
        assert_eq!(duration.days, 2);
        assert_eq!(duration.hours, 3);
        assert_eq!(duration.minutes, 4);
        assert_eq!(duration.seconds, 5);
        assert_eq!(duration.milliseconds, 0);
        assert_eq!(duration.microseconds, 0);
        assert_eq!(duration.nanoseconds, 0);
    }

    #[test]
    fn test_fractional_hours_cascade() {
        let duration = RawDuration {
            hours: clock(Decimal::new(25, 1)),
            ..raw()
        }
        .normalize()
        .unwrap();

        assert_eq!(duration.hours, 2);
        assert_eq!(duration.minutes, 30);
        assert_eq!(duration.seconds, 0);
    }

    #[test]
    fn test_fractional_hours_reach_nanoseconds() {
        // 0.0000000001 h = 360 ns exactly.
        let duration = RawDuration {
            hours: clock(Decimal::new(1, 10)),
            ..raw()
        }
        .normalize()
        .unwrap();

        assert_eq!(duration.hours, 0);
        assert_eq!(duration.minutes, 0);
        assert_eq!(duration.seconds, 0);
        assert_eq!(duration.milliseconds, 0);
        assert_eq!(duration.microseconds, 0);
        assert_eq!(duration.nanoseconds, 360);
    }

    #[test]
    fn test_fractional_minutes_cascade() {
        let duration = RawDuration {
            minutes: clock(Decimal::new(15, 1)),
            ..raw()
        }
        .normalize()
        .unwrap();

        assert_eq!(duration.minutes, 1);
        assert_eq!(duration.seconds, 30);
        assert_eq!(duration.milliseconds, 0);
    }

    #[test]
    fn test_fractional_seconds_cascade_exactly() {
        // 0.0021 s = 2 ms + 100 µs; binary floating point would get this
        // wrong (0.0021 × 1000 = 2.0999…), decimal arithmetic must not.
        let duration = RawDuration {
            seconds: clock(Decimal::new(21, 4)),
            ..raw()
        }
        .normalize()
        .unwrap();

        assert_eq!(duration.seconds, 0);
        assert_eq!(duration.milliseconds, 2);
        assert_eq!(duration.microseconds, 100);
        assert_eq!(duration.nanoseconds, 0);
    }

    #[test]
    fn test_sub_nanosecond_remainder_is_discarded() {
        // 0.0000000005 s = 0.5 ns, which floors to zero.
        let duration = RawDuration {
            seconds: clock(Decimal::new(5, 10)),
            ..raw()
        }
        .normalize()
        .unwrap();

        assert!(duration.is_zero());
    }

    #[test]
    fn test_fractional_hours_with_minutes_set_fails() {
        let result = RawDuration {
            hours: clock(Decimal::new(15, 1)),
            minutes: clock(Decimal::from(30)),
            ..raw()
        }
        .normalize();

        assert!(matches!(
            result,
            Err(ParseError::MisplacedFraction { .. })
        ));
    }

    #[test]
    fn test_fractional_hours_with_seconds_set_fails() {
        let result = RawDuration {
            hours: clock(Decimal::new(15, 1)),
            seconds: clock(Decimal::from(1)),
            ..raw()
        }
        .normalize();

        assert!(matches!(
            result,
            Err(ParseError::MisplacedFraction { .. })
        ));
    }

    #[test]
    fn test_fractional_minutes_with_seconds_set_fails() {
        let result = RawDuration {
            minutes: clock(Decimal::new(15, 1)),
            seconds: clock(Decimal::from(1)),
            ..raw()
        }
        .normalize();

        assert!(matches!(
            result,
            Err(ParseError::MisplacedFraction { .. })
        ));
    }

    #[test]
    fn test_two_irregular_units_fail_on_the_coarser_one() {
        // Hours are checked first, so the failure points at them.
        let result = RawDuration {
            hours: clock(Decimal::new(15, 1)),
            minutes: clock(Decimal::new(15, 1)),
            ..raw()
        }
        .normalize();

        assert!(matches!(
            result,
            Err(ParseError::MisplacedFraction { .. })
        ));
    }

    #[test]
    fn test_sign_flag_survives_normalization() {
        let duration = RawDuration {
            is_negative: true,
            seconds: clock(Decimal::from(1)),
            ..raw()
        }
        .normalize()
        .unwrap();

        assert!(duration.is_negative);
        assert_eq!(duration.seconds, 1);
    }

    #[test]
    fn test_value_too_large_for_u64_fails() {
        // 2 × 10^19 seconds does not fit the integer field.
        let result = RawDuration {
            seconds: clock(Decimal::from_i128_with_scale(
                20_000_000_000_000_000_000,
                0,
            )),
            ..raw()
        }
        .normalize();

        assert!(matches!(
            result,
            Err(ParseError::ValueOutOfRange { .. })
        ));
    }
}
