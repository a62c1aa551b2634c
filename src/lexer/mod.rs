//! Character-level scanning for duration strings
//!
//! This module provides the [`Scanner`], a byte cursor over the input with
//! greedy numeric readers. Each reader either succeeds and consumes what it
//! matched (terminating designator included), or fails and leaves the cursor
//! exactly where it was.

mod designator;

pub use designator::Designator;

use rust_decimal::Decimal;

/// A cursor over the raw input bytes of a duration string
#[derive(Debug)]
pub struct Scanner<'src> {
    input: &'src [u8],
    pos: usize,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner over the given source
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self {
            input: source.as_bytes(),
            pos: 0,
        }
    }

    /// Current byte offset into the input
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Whether the whole input has been consumed
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consume `designator`'s marker if it is the next character
    pub fn match_designator(&mut self, designator: Designator) -> bool {
        match self.peek() {
            Some(byte) if designator.matches(byte) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Consume a leading `+` or `-`, returning the raw sign byte
    pub fn read_sign(&mut self) -> Option<u8> {
        match self.peek() {
            Some(byte) if Designator::Sign.matches(byte) => {
                self.pos += 1;
                Some(byte)
            }
            _ => None,
        }
    }

    /// Read the longest run of ASCII digits followed by `terminator`
    ///
    /// The terminating designator must come immediately after the digits and
    /// is consumed along with them. An empty digit run, a missing
    /// terminator, or a value too large for `u64` all fail without consuming
    /// anything.
    pub fn read_integer(&mut self, terminator: Designator) -> Option<u64> {
        let mut idx = self.pos;
        let mut value: u64 = 0;
        let mut digits = 0usize;

        while let Some(&byte) = self.input.get(idx) {
            if !byte.is_ascii_digit() {
                break;
            }
            value = value
                .checked_mul(10)?
                .checked_add(u64::from(byte - b'0'))?;
            digits += 1;
            idx += 1;
        }

        if digits == 0 {
            return None;
        }
        let &terminator_byte = self.input.get(idx)?;
        if !terminator.matches(terminator_byte) {
            return None;
        }

        self.pos = idx + 1;
        Some(value)
    }

    /// Read a decimal value followed by `terminator`
    ///
    /// The scan is greedy over ASCII digits and at most one decimal
    /// separator (`.` and `,` are interchangeable). The separator is only
    /// accepted after at least one digit, so `.5H` fails. Scanning stops at
    /// the first character that fits neither, and the terminator must come
    /// immediately after; anything else fails without consuming input.
    pub fn read_decimal(&mut self, terminator: Designator) -> Option<Decimal> {
        let mut idx = self.pos;
        let mut mantissa: i128 = 0;
        let mut scale: u32 = 0;
        let mut digits = 0usize;
        let mut seen_separator = false;

        while let Some(&byte) = self.input.get(idx) {
            if byte.is_ascii_digit() {
                mantissa = mantissa
                    .checked_mul(10)?
                    .checked_add(i128::from(byte - b'0'))?;
                if seen_separator {
                    scale += 1;
                }
                digits += 1;
                idx += 1;
            } else if matches!(byte, b'.' | b',') && !seen_separator && digits > 0 {
                seen_separator = true;
                idx += 1;
            } else {
                break;
            }
        }

        if digits == 0 {
            return None;
        }
        let &terminator_byte = self.input.get(idx)?;
        if !terminator.matches(terminator_byte) {
            return None;
        }

        let value = Decimal::try_from_i128_with_scale(mantissa, scale).ok()?;
        self.pos = idx + 1;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_designator_consumes_on_success() {
        let mut scanner = Scanner::new("PT");
        assert!(scanner.match_designator(Designator::DurationStart));
        assert_eq!(scanner.pos(), 1);
        assert!(scanner.match_designator(Designator::TimeSeparator));
        assert!(scanner.is_at_end());
    }

    #[test]
    fn test_match_designator_leaves_cursor_on_failure() {
        let mut scanner = Scanner::new("X");
        assert!(!scanner.match_designator(Designator::DurationStart));
        assert_eq!(scanner.pos(), 0);
    }

    #[test]
    fn test_read_sign() {
        let mut scanner = Scanner::new("-P");
        assert_eq!(scanner.read_sign(), Some(b'-'));
        assert_eq!(scanner.pos(), 1);

        let mut scanner = Scanner::new("P");
        assert_eq!(scanner.read_sign(), None);
        assert_eq!(scanner.pos(), 0);
    }

    #[test]
    fn test_read_integer() {
        let mut scanner = Scanner::new("365D");
        assert_eq!(scanner.read_integer(Designator::Day), Some(365));
        assert!(scanner.is_at_end());
    }

    #[test]
    fn test_read_integer_requires_terminator() {
        let mut scanner = Scanner::new("3W");
        assert_eq!(scanner.read_integer(Designator::Year), None);
        assert_eq!(scanner.pos(), 0);
        assert_eq!(scanner.read_integer(Designator::Week), Some(3));
    }

    #[test]
    fn test_read_integer_requires_digits() {
        let mut scanner = Scanner::new("D");
        assert_eq!(scanner.read_integer(Designator::Day), None);
        assert_eq!(scanner.pos(), 0);
    }

    #[test]
    fn test_read_integer_overflow_fails_without_consuming() {
        let mut scanner = Scanner::new("99999999999999999999999D");
        assert_eq!(scanner.read_integer(Designator::Day), None);
        assert_eq!(scanner.pos(), 0);
    }

    #[test]
    fn test_read_decimal_plain_integer() {
        let mut scanner = Scanner::new("5H");
        assert_eq!(
            scanner.read_decimal(Designator::Hour),
            Some(Decimal::from(5))
        );
        assert!(scanner.is_at_end());
    }

    #[test]
    fn test_read_decimal_with_dot() {
        let mut scanner = Scanner::new("2.5H");
        assert_eq!(
            scanner.read_decimal(Designator::Hour),
            Some(Decimal::new(25, 1))
        );
        assert!(scanner.is_at_end());
    }

    #[test]
    fn test_read_decimal_with_comma() {
        let mut scanner = Scanner::new("2,5H");
        assert_eq!(
            scanner.read_decimal(Designator::Hour),
            Some(Decimal::new(25, 1))
        );
    }

    #[test]
    fn test_read_decimal_rejects_leading_separator() {
        let mut scanner = Scanner::new(".5H");
        assert_eq!(scanner.read_decimal(Designator::Hour), None);
        assert_eq!(scanner.pos(), 0);
    }

    #[test]
    fn test_read_decimal_rejects_two_separators() {
        // Scanning stops at the second separator; `H` is then not the next
        // character, so nothing is consumed.
        let mut scanner = Scanner::new("1.2.3H");
        assert_eq!(scanner.read_decimal(Designator::Hour), None);
        assert_eq!(scanner.pos(), 0);
    }

    #[test]
    fn test_read_decimal_requires_terminator() {
        let mut scanner = Scanner::new("2.5M");
        assert_eq!(scanner.read_decimal(Designator::Hour), None);
        assert_eq!(scanner.pos(), 0);
    }

    #[test]
    fn test_read_decimal_trailing_separator() {
        // The digit run is non-empty, so a dangling separator before the
        // terminator still yields the integer value.
        let mut scanner = Scanner::new("5.S");
        assert_eq!(
            scanner.read_decimal(Designator::Second),
            Some(Decimal::from(5))
        );
        assert!(scanner.is_at_end());
    }
}
