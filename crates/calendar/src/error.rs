//! Error types for the ncdiag-calendar crate.

/// Error type for all fallible operations in the ncdiag-calendar crate.
///
/// This enum covers malformed cycle tokens, calendar-invalid dates and
/// hours, and invalid arguments to cycle sequence generation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a cycle token is not a 10-digit `yyyymmddhh` string.
    #[error("invalid cycle token '{token}' (expected 10-digit yyyymmddhh)")]
    InvalidToken {
        /// The token that could not be parsed.
        token: String,
    },

    /// Returned when the date portion of a cycle does not exist in the
    /// Gregorian calendar.
    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },

    /// Returned when an hour-of-day is outside 0..=23.
    #[error("invalid hour: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The invalid hour value.
        hour: u32,
    },

    /// Returned when a sequence increment is zero.
    #[error("hour increment must be >= 1, got {hr_inc}")]
    InvalidIncrement {
        /// The invalid increment value.
        hr_inc: u32,
    },

    /// Returned when an interval's start cycle is after its end cycle.
    #[error("interval start {start} is after end {end}")]
    ReversedInterval {
        /// Start cycle token.
        start: u64,
        /// End cycle token.
        end: u64,
    },

    /// Returned when cycle arithmetic leaves the representable date range.
    #[error("cycle arithmetic overflow past {cycle}")]
    Overflow {
        /// Last representable cycle token.
        cycle: u64,
    },
}
