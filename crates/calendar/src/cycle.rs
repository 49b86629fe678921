//! Synoptic cycle timestamps with token parsing.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

use crate::error::CalendarError;

/// A synoptic analysis cycle: a Gregorian date plus an hour-of-day.
///
/// Cycles are exchanged as 10-digit tokens of the form `yyyymmddhh`
/// (e.g. `2018022012` for 2018-02-20 12z). Minutes and seconds are
/// always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CycleTime {
    stamp: NaiveDateTime,
}

impl CycleTime {
    /// Creates a new `CycleTime` from calendar components.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the date does not exist in the
    /// Gregorian calendar or the hour is outside 0..=23.
    pub fn new(year: i32, month: u32, day: u32, hour: u32) -> Result<Self, CalendarError> {
        if hour > 23 {
            return Err(CalendarError::InvalidHour { hour });
        }
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CalendarError::InvalidDate { year, month, day })?;
        let stamp = date.and_hms_opt(hour, 0, 0).expect("hour validated above");
        Ok(Self { stamp })
    }

    /// Parses a numeric `yyyymmddhh` token.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidToken`] if the token does not have
    /// exactly 10 digits, and the component errors from [`CycleTime::new`]
    /// if the digits do not name a valid date and hour.
    pub fn from_token(token: u64) -> Result<Self, CalendarError> {
        if !(1_000_000_000..=9_999_999_999).contains(&token) {
            return Err(CalendarError::InvalidToken {
                token: token.to_string(),
            });
        }
        let hour = (token % 100) as u32;
        let day = ((token / 100) % 100) as u32;
        let month = ((token / 10_000) % 100) as u32;
        let year = (token / 1_000_000) as i32;
        Self::new(year, month, day, hour)
    }

    /// Returns the cycle as a numeric `yyyymmddhh` token.
    pub fn token(self) -> u64 {
        self.year() as u64 * 1_000_000
            + self.month() as u64 * 10_000
            + self.day() as u64 * 100
            + self.hour() as u64
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.stamp.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.stamp.month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.stamp.day()
    }

    /// Returns the hour-of-day (0..=23).
    pub fn hour(self) -> u32 {
        self.stamp.hour()
    }

    /// Returns the cycle `hours` hours later.
    ///
    /// Day, month, and year boundaries are handled by Gregorian calendar
    /// arithmetic (Feb 28 18z + 6h is Mar 1 00z in a non-leap year).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Overflow`] if the result leaves the
    /// representable date range.
    pub fn plus_hours(self, hours: u32) -> Result<Self, CalendarError> {
        let stamp = self
            .stamp
            .checked_add_signed(TimeDelta::hours(i64::from(hours)))
            .ok_or(CalendarError::Overflow {
                cycle: self.token(),
            })?;
        Ok(Self { stamp })
    }
}

impl fmt::Display for CycleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}{:02}",
            self.year(),
            self.month(),
            self.day(),
            self.hour()
        )
    }
}

impl FromStr for CycleTime {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 10 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CalendarError::InvalidToken {
                token: s.to_string(),
            });
        }
        let token: u64 = s.parse().map_err(|_| CalendarError::InvalidToken {
            token: s.to_string(),
        })?;
        Self::from_token(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_token_valid() {
        let cycle = CycleTime::from_token(2018022012).unwrap();
        assert_eq!(cycle.year(), 2018);
        assert_eq!(cycle.month(), 2);
        assert_eq!(cycle.day(), 20);
        assert_eq!(cycle.hour(), 12);
    }

    #[test]
    fn token_round_trip() {
        let cycle = CycleTime::from_token(2018022012).unwrap();
        assert_eq!(cycle.token(), 2018022012);
    }

    #[test]
    fn from_token_too_short() {
        assert_eq!(
            CycleTime::from_token(201802201).unwrap_err(),
            CalendarError::InvalidToken {
                token: "201802201".to_string(),
            }
        );
    }

    #[test]
    fn from_token_invalid_date() {
        assert_eq!(
            CycleTime::from_token(2018023012).unwrap_err(),
            CalendarError::InvalidDate {
                year: 2018,
                month: 2,
                day: 30,
            }
        );
    }

    #[test]
    fn from_token_invalid_hour() {
        assert_eq!(
            CycleTime::from_token(2018022024).unwrap_err(),
            CalendarError::InvalidHour { hour: 24 }
        );
    }

    #[test]
    fn from_token_leap_day() {
        // 2020 is a Gregorian leap year, 2018 is not.
        assert!(CycleTime::from_token(2020022900).is_ok());
        assert!(CycleTime::from_token(2018022900).is_err());
    }

    #[test]
    fn from_str_valid() {
        let cycle: CycleTime = "2018022012".parse().unwrap();
        assert_eq!(cycle.token(), 2018022012);
    }

    #[test]
    fn from_str_rejects_non_digits() {
        let err = "2018-02-20".parse::<CycleTime>().unwrap_err();
        assert!(matches!(err, CalendarError::InvalidToken { .. }));
    }

    #[test]
    fn from_str_rejects_wrong_length() {
        let err = "20180220".parse::<CycleTime>().unwrap_err();
        assert!(matches!(err, CalendarError::InvalidToken { .. }));
    }

    #[test]
    fn display_zero_pads() {
        let cycle = CycleTime::new(2018, 2, 1, 0).unwrap();
        assert_eq!(cycle.to_string(), "2018020100");
    }

    #[test]
    fn plus_hours_within_day() {
        let cycle = CycleTime::from_token(2018022006).unwrap();
        let next = cycle.plus_hours(6).unwrap();
        assert_eq!(next.token(), 2018022012);
    }

    #[test]
    fn plus_hours_day_boundary() {
        let cycle = CycleTime::from_token(2018022018).unwrap();
        let next = cycle.plus_hours(6).unwrap();
        assert_eq!(next.token(), 2018022100);
    }

    #[test]
    fn plus_hours_month_and_year_boundary() {
        let feb28 = CycleTime::from_token(2018022818).unwrap();
        assert_eq!(feb28.plus_hours(6).unwrap().token(), 2018030100);

        let dec31 = CycleTime::from_token(2018123118).unwrap();
        assert_eq!(dec31.plus_hours(6).unwrap().token(), 2019010100);
    }

    #[test]
    fn ordering_is_chronological() {
        let a = CycleTime::from_token(2018022012).unwrap();
        let b = CycleTime::from_token(2018022018).unwrap();
        let c = CycleTime::from_token(2018022100).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<CycleTime>();
    }
}
