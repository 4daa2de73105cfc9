//! The assembled almanac record.

use lichviet_canchi::{
    Chi, StemBranch, conflict_group, day_pillar, is_auspicious_day, lucky_hours, month_pillar,
    nap_am, year_pillar,
};
use lichviet_date::SolarDate;

use crate::convert::LunarConverter;
use crate::error::AlmanacError;
use crate::lunar::LunarDate;

/// Everything the almanac derives for one day, assembled once and immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlmanacDetails {
    solar: SolarDate,
    lunar: LunarDate,
    year_pillar: StemBranch,
    month_pillar: StemBranch,
    day_pillar: StemBranch,
    nap_am: &'static str,
    auspicious: bool,
    lucky_hours: [Chi; 6],
    conflict: [Chi; 3],
}

impl AlmanacDetails {
    /// Returns the solar date.
    pub fn solar(&self) -> SolarDate {
        self.solar
    }

    /// Returns the lunar date the record was computed for.
    pub fn lunar(&self) -> LunarDate {
        self.lunar
    }

    /// Returns the year pillar.
    pub fn year_pillar(&self) -> StemBranch {
        self.year_pillar
    }

    /// Returns the month pillar.
    pub fn month_pillar(&self) -> StemBranch {
        self.month_pillar
    }

    /// Returns the day pillar.
    pub fn day_pillar(&self) -> StemBranch {
        self.day_pillar
    }

    /// Returns the Nạp Âm (Five-Element) label of the day.
    pub fn nap_am(&self) -> &'static str {
        self.nap_am
    }

    /// Returns `true` if the day is auspicious (hoàng đạo) in its lunar
    /// month.
    pub fn is_auspicious(&self) -> bool {
        self.auspicious
    }

    /// Returns the six lucky two-hour periods, in canonical listing order.
    pub fn lucky_hours(&self) -> [Chi; 6] {
        self.lucky_hours
    }

    /// Returns the three conflicting branches, opposition first.
    pub fn conflict_group(&self) -> [Chi; 3] {
        self.conflict
    }

    /// Returns the conflict group as a comma-joined label string.
    pub fn conflict_label(&self) -> String {
        self.conflict
            .iter()
            .map(|chi| chi.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Computes the full almanac record for a solar date and its lunar date.
///
/// Pure: same inputs always produce the same record, so results are safely
/// memoizable by date.
///
/// # Errors
///
/// Returns [`AlmanacError::CanChi`] if the lunar month is out of range; a
/// [`LunarDate`] built through its validating constructor cannot trigger
/// this.
pub fn compute_details(
    solar: SolarDate,
    lunar: LunarDate,
) -> Result<AlmanacDetails, AlmanacError> {
    let jdn = solar.jdn();
    let day = day_pillar(jdn);
    Ok(AlmanacDetails {
        solar,
        lunar,
        year_pillar: year_pillar(lunar.year()),
        month_pillar: month_pillar(lunar.year(), lunar.month())?,
        day_pillar: day,
        nap_am: nap_am(day),
        auspicious: is_auspicious_day(lunar.month(), day.chi),
        lucky_hours: lucky_hours(day.chi),
        conflict: conflict_group(day.chi),
    })
}

/// Converts the solar date through `converter` and computes its record.
///
/// # Errors
///
/// Propagates converter errors, including
/// [`AlmanacError::UnsupportedYear`].
pub fn compute_with(
    converter: &impl LunarConverter,
    solar: SolarDate,
) -> Result<AlmanacDetails, AlmanacError> {
    let lunar = converter.to_lunar(solar)?;
    compute_details(solar, lunar)
}

/// Like [`compute_with`], but substitutes [`LunarDate::fallback`] when the
/// converter reports an unsupported year.
///
/// This is the contract month-grid consumers rely on: hundreds of cells are
/// queried in a loop, and a cell outside the conversion range must degrade to
/// the safe default rather than abort the grid.
///
/// # Errors
///
/// Propagates every converter error except
/// [`AlmanacError::UnsupportedYear`].
pub fn compute_or_fallback(
    converter: &impl LunarConverter,
    solar: SolarDate,
) -> Result<AlmanacDetails, AlmanacError> {
    let lunar = match converter.to_lunar(solar) {
        Ok(lunar) => lunar,
        Err(AlmanacError::UnsupportedYear { .. }) => LunarDate::fallback(solar.year()),
        Err(e) => return Err(e),
    };
    compute_details(solar, lunar)
}
