//! Error types for the lichviet-almanac crate.

use lichviet_canchi::CanChiError;

/// Error type for all fallible operations in the lichviet-almanac crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlmanacError {
    /// Returned when a lunar day is outside the valid range 1..=30.
    #[error("invalid lunar day: {day} (must be 1..=30)")]
    InvalidLunarDay {
        /// The invalid day number that was provided.
        day: u8,
    },

    /// Returned when a lunar month is outside the valid range 1..=12.
    #[error("invalid lunar month: {month} (must be 1..=12)")]
    InvalidLunarMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Reported by conversion capabilities for years outside their supported
    /// range (1900..=2100 for the documented converters).
    ///
    /// Callers that query many dates in a loop should substitute
    /// [`LunarDate::fallback`](crate::LunarDate::fallback) instead of
    /// propagating this (see
    /// [`compute_or_fallback`](crate::compute_or_fallback)).
    #[error("lunar year {year} outside the supported range")]
    UnsupportedYear {
        /// The unsupported lunar year.
        year: i32,
    },

    /// A pillar computation rejected its input.
    #[error(transparent)]
    CanChi(#[from] CanChiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_lunar_day() {
        let err = AlmanacError::InvalidLunarDay { day: 31 };
        assert_eq!(err.to_string(), "invalid lunar day: 31 (must be 1..=30)");
    }

    #[test]
    fn error_invalid_lunar_month() {
        let err = AlmanacError::InvalidLunarMonth { month: 0 };
        assert_eq!(err.to_string(), "invalid lunar month: 0 (must be 1..=12)");
    }

    #[test]
    fn error_unsupported_year() {
        let err = AlmanacError::UnsupportedYear { year: 1899 };
        assert_eq!(
            err.to_string(),
            "lunar year 1899 outside the supported range"
        );
    }

    #[test]
    fn error_canchi_transparent() {
        let err = AlmanacError::from(CanChiError::InvalidMonth { month: 13 });
        assert_eq!(err.to_string(), "invalid lunar month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<AlmanacError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<AlmanacError>();
    }
}
