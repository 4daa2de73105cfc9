//! Validated Gregorian calendar dates.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, FixedOffset, Utc};

use crate::error::DateError;
use crate::jdn::{gregorian_from_jdn, jdn_from_gregorian};

/// Number of days in each month of a common year (index 0 unused).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Civil time offset of the Vietnamese almanac (UTC+7), in seconds.
const INDOCHINA_OFFSET_SECS: i32 = 7 * 3600;

/// A validated date in the proleptic Gregorian calendar.
///
/// Ordering follows calendar order; navigation (`next`, `previous`) operates
/// on calendar-day granularity through the Julian Day Number, so it is immune
/// to time-zone and daylight-saving anomalies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolarDate {
    year: i32,
    month: u8,
    day: u8,
}

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && year % 100 != 0 || year % 400 == 0
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`DateError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, DateError> {
    if !(1..=12).contains(&month) {
        return Err(DateError::InvalidMonth { month });
    }
    let mut days = DAYS_PER_MONTH[month as usize];
    if month == 2 && is_leap_year(year) {
        days += 1;
    }
    Ok(days)
}

impl SolarDate {
    /// Creates a new `SolarDate` from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidMonth`] or [`DateError::InvalidDay`] if
    /// the month or day is out of range for the Gregorian calendar.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(DateError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a `SolarDate` from a Julian Day Number.
    ///
    /// Infallible: every JDN names exactly one proleptic Gregorian day.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = gregorian_from_jdn(jdn);
        Self { year, month, day }
    }

    /// Returns today's date as observed in the almanac's civil time (UTC+7).
    pub fn today() -> Self {
        let offset =
            FixedOffset::east_opt(INDOCHINA_OFFSET_SECS).expect("UTC+7 is a valid fixed offset");
        let now = Utc::now().with_timezone(&offset).date_naive();
        Self {
            year: now.year(),
            month: now.month() as u8,
            day: now.day() as u8,
        }
    }

    /// Returns the year (astronomical numbering, 1 BC is 0).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the Julian Day Number of this date.
    pub fn jdn(self) -> i64 {
        jdn_from_gregorian(self.year, self.month, self.day)
    }

    /// Returns the day of week, 0 = Sunday through 6 = Saturday.
    pub fn weekday(self) -> u8 {
        (self.jdn() + 1).rem_euclid(7) as u8
    }

    /// Returns the next calendar day.
    pub fn next(self) -> Self {
        Self::from_jdn(self.jdn() + 1)
    }

    /// Returns the previous calendar day.
    pub fn previous(self) -> Self {
        Self::from_jdn(self.jdn() - 1)
    }

    /// Returns the date `offset` calendar days away (negative moves back).
    pub fn offset(self, days: i64) -> Self {
        Self::from_jdn(self.jdn() + days)
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for SolarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DateError::InvalidFormat {
            input: s.to_string(),
        };
        let mut parts = s.splitn(3, '-');
        let year: i32 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let month: u8 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        let day: u8 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;
        Self::new(year, month, day)
    }
}
