//! The injected solar-to-lunar conversion seam.

use lichviet_date::SolarDate;

use crate::error::AlmanacError;
use crate::lunar::LunarDate;

/// A solar-to-lunar conversion capability.
///
/// The engine consumes lunar dates, it never computes them: month lengths
/// and leap-month placement belong to the converter. Implementations report
/// [`AlmanacError::UnsupportedYear`] outside their documented range
/// ([`SUPPORTED_YEARS`](crate::SUPPORTED_YEARS) for the standard ones) so
/// callers can substitute [`LunarDate::fallback`].
///
/// Any `Fn(SolarDate) -> Result<LunarDate, AlmanacError>` is a converter,
/// which keeps the pillar and table logic unit-testable with synthetic lunar
/// dates:
///
/// ```
/// use lichviet_almanac::{LunarConverter, LunarDate};
/// use lichviet_date::SolarDate;
///
/// let fixed = |_: SolarDate| LunarDate::new(2024, 1, 1, false);
/// let solar = SolarDate::new(2024, 2, 10).unwrap();
/// assert_eq!(fixed.to_lunar(solar).unwrap().month(), 1);
/// ```
pub trait LunarConverter {
    /// Converts a solar date to its lunar date.
    ///
    /// # Errors
    ///
    /// Returns [`AlmanacError::UnsupportedYear`] for dates outside the
    /// converter's range.
    fn to_lunar(&self, solar: SolarDate) -> Result<LunarDate, AlmanacError>;
}

impl<F> LunarConverter for F
where
    F: Fn(SolarDate) -> Result<LunarDate, AlmanacError>,
{
    fn to_lunar(&self, solar: SolarDate) -> Result<LunarDate, AlmanacError> {
        self(solar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_a_converter() {
        let converter = |solar: SolarDate| {
            if solar.year() < 1900 {
                return Err(AlmanacError::UnsupportedYear { year: solar.year() });
            }
            LunarDate::new(solar.year(), 1, 1, false)
        };

        let ok = converter
            .to_lunar(SolarDate::new(2024, 2, 10).unwrap())
            .unwrap();
        assert_eq!(ok.year(), 2024);

        let err = converter
            .to_lunar(SolarDate::new(1850, 1, 1).unwrap())
            .unwrap_err();
        assert_eq!(err, AlmanacError::UnsupportedYear { year: 1850 });
    }

    #[test]
    fn trait_object_usable() {
        let converter = |_: SolarDate| LunarDate::new(2024, 1, 1, false);
        let boxed: Box<dyn LunarConverter> = Box::new(converter);
        assert!(boxed.to_lunar(SolarDate::new(2024, 2, 10).unwrap()).is_ok());
    }
}
