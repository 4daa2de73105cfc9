//! Lunar calendar dates as supplied by a conversion capability.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::AlmanacError;

/// Lunar years the documented conversion capabilities cover.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1900..=2100;

/// A date in the Vietnamese lunar calendar.
///
/// The engine never derives these itself: month lengths and leap months come
/// from an external conversion capability (see
/// [`LunarConverter`](crate::LunarConverter)). The constructor validates the
/// field ranges only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    year: i32,
    month: u8,
    day: u8,
    leap: bool,
}

impl LunarDate {
    /// Creates a new `LunarDate` from year, month, day and leap-month flag.
    ///
    /// # Errors
    ///
    /// Returns [`AlmanacError::InvalidLunarMonth`] or
    /// [`AlmanacError::InvalidLunarDay`] if a field is out of range.
    pub fn new(year: i32, month: u8, day: u8, leap: bool) -> Result<Self, AlmanacError> {
        if !(1..=12).contains(&month) {
            return Err(AlmanacError::InvalidLunarMonth { month });
        }
        if !(1..=30).contains(&day) {
            return Err(AlmanacError::InvalidLunarDay { day });
        }
        Ok(Self {
            year,
            month,
            day,
            leap,
        })
    }

    /// Returns the safe default for a year a converter cannot handle: the
    /// first day of the first month, not a leap month.
    ///
    /// Month-grid consumers substitute this instead of propagating
    /// [`AlmanacError::UnsupportedYear`], so one out-of-range cell never
    /// aborts a whole grid.
    pub fn fallback(year: i32) -> Self {
        Self {
            year,
            month: 1,
            day: 1,
            leap: false,
        }
    }

    /// Returns `true` if the year lies in [`SUPPORTED_YEARS`].
    pub fn is_supported(self) -> bool {
        SUPPORTED_YEARS.contains(&self.year)
    }

    /// Returns the lunar year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the lunar month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the lunar day (1..=30).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `true` if the month is a leap month.
    pub fn is_leap(self) -> bool {
        self.leap
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)?;
        if self.leap {
            f.write_str(" (nhuận)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let lunar = LunarDate::new(2024, 1, 1, false).unwrap();
        assert_eq!(lunar.year(), 2024);
        assert_eq!(lunar.month(), 1);
        assert_eq!(lunar.day(), 1);
        assert!(!lunar.is_leap());
    }

    #[test]
    fn new_leap_month() {
        let lunar = LunarDate::new(2023, 2, 15, true).unwrap();
        assert!(lunar.is_leap());
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            LunarDate::new(2024, 0, 1, false).unwrap_err(),
            AlmanacError::InvalidLunarMonth { month: 0 }
        );
        assert_eq!(
            LunarDate::new(2024, 13, 1, false).unwrap_err(),
            AlmanacError::InvalidLunarMonth { month: 13 }
        );
    }

    #[test]
    fn new_invalid_day() {
        assert_eq!(
            LunarDate::new(2024, 1, 0, false).unwrap_err(),
            AlmanacError::InvalidLunarDay { day: 0 }
        );
        assert_eq!(
            LunarDate::new(2024, 1, 31, false).unwrap_err(),
            AlmanacError::InvalidLunarDay { day: 31 }
        );
    }

    #[test]
    fn day_30_valid() {
        assert!(LunarDate::new(2024, 12, 30, false).is_ok());
    }

    #[test]
    fn fallback_is_first_day() {
        let fallback = LunarDate::fallback(1899);
        assert_eq!(fallback.day(), 1);
        assert_eq!(fallback.month(), 1);
        assert_eq!(fallback.year(), 1899);
        assert!(!fallback.is_leap());
    }

    #[test]
    fn supported_range() {
        assert!(LunarDate::new(1900, 1, 1, false).unwrap().is_supported());
        assert!(LunarDate::new(2100, 12, 30, false).unwrap().is_supported());
        assert!(!LunarDate::new(1899, 1, 1, false).unwrap().is_supported());
        assert!(!LunarDate::new(2101, 1, 1, false).unwrap().is_supported());
    }

    #[test]
    fn display() {
        let lunar = LunarDate::new(2024, 1, 1, false).unwrap();
        assert_eq!(lunar.to_string(), "1/1/2024");
        let leap = LunarDate::new(2023, 2, 15, true).unwrap();
        assert_eq!(leap.to_string(), "15/2/2023 (nhuận)");
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<LunarDate>();
    }
}
