//! Epoch-relative instants
//!
//! A [`Timestamp`] is a point in time: a signed count of nanoseconds since
//! the Unix epoch, valid within ±10⁸ days of it. It shares this crate's API
//! surface with the duration parser but neither depends on the other.

use thiserror::Error;

const NANOS_PER_MILLI: i128 = 1_000_000;
const NANOS_PER_DAY: i128 = 86_400_000_000_000;

/// The validity window is ±10⁸ days around the epoch
const MAX_NANOS: i128 = 100_000_000 * NANOS_PER_DAY;

/// Error constructing a [`Timestamp`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// The instant is outside the representable window
    #[error("timestamp out of range: {nanos} ns is outside ±10^8 days from the epoch")]
    OutOfRange {
        /// The rejected nanosecond count
        nanos: i128,
    },
}

/// A point in time with nanosecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    nanos: i128,
}

impl Timestamp {
    /// The Unix epoch
    pub const UNIX_EPOCH: Timestamp = Timestamp { nanos: 0 };

    /// Earliest representable instant
    pub const MIN: Timestamp = Timestamp { nanos: -MAX_NANOS };

    /// Latest representable instant
    pub const MAX: Timestamp = Timestamp { nanos: MAX_NANOS };

    /// Create a timestamp from a nanosecond count since the epoch
    ///
    /// # Errors
    ///
    /// Returns an error if the count is outside ±10⁸ days.
    pub const fn from_nanos(nanos: i128) -> Result<Self, TimestampError> {
        if nanos < -MAX_NANOS || nanos > MAX_NANOS {
            return Err(TimestampError::OutOfRange { nanos });
        }
        Ok(Self { nanos })
    }

    /// Create a timestamp from a millisecond count since the epoch
    ///
    /// # Errors
    ///
    /// Returns an error if the count is outside ±10⁸ days.
    pub const fn from_millis(millis: i64) -> Result<Self, TimestampError> {
        Self::from_nanos(millis as i128 * NANOS_PER_MILLI)
    }

    /// Nanoseconds since the epoch
    #[must_use]
    pub const fn as_nanos(self) -> i128 {
        self.nanos
    }

    /// Milliseconds since the epoch, truncated toward zero
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn as_millis(self) -> i64 {
        // The range check at construction keeps this within i64.
        (self.nanos / NANOS_PER_MILLI) as i64
    }
}
