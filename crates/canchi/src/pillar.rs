//! Year, month and day pillars.

use std::fmt;

use crate::branch::Chi;
use crate::cycle::normalized_mod;
use crate::error::CanChiError;
use crate::stem::Can;

/// A stem-branch (Can-Chi) pair naming one pillar of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemBranch {
    /// Heavenly Stem of the pillar.
    pub can: Can,
    /// Earthly Branch of the pillar.
    pub chi: Chi,
}

impl StemBranch {
    /// Returns the canonical label pair, e.g. `"Giáp Tý"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.can.label(), self.chi.label())
    }
}

impl fmt::Display for StemBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.can, self.chi)
    }
}

/// Derives the year pillar of a lunar year.
///
/// Both cycles are anchored four years after year 0: lunar year 4 is the
/// cycle origin Giáp Tý.
///
/// # Example
///
/// ```
/// use lichviet_canchi::year_pillar;
///
/// assert_eq!("Giáp Thìn", year_pillar(2024).label());
/// ```
pub fn year_pillar(lunar_year: i32) -> StemBranch {
    let anchored = i64::from(lunar_year) - 4;
    StemBranch {
        can: Can::from_cycle(anchored),
        chi: Chi::from_cycle(anchored),
    }
}

/// Derives the month pillar of a lunar month.
///
/// The branch is fixed by the month alone (month 1 is always a Dần month);
/// the stem follows the "five tigers" rule: the year stem selects the stem of
/// month 1, and subsequent months advance by one stem each.
///
/// # Errors
///
/// Returns [`CanChiError::InvalidMonth`] if `lunar_month` is not in 1..=12.
pub fn month_pillar(lunar_year: i32, lunar_month: u8) -> Result<StemBranch, CanChiError> {
    if !(1..=12).contains(&lunar_month) {
        return Err(CanChiError::InvalidMonth { month: lunar_month });
    }
    let year_stem = year_pillar(lunar_year).can.as_index() as i64;
    let base = normalized_mod(year_stem % 5 * 2 + 2, 10) as i64;
    Ok(StemBranch {
        can: Can::from_cycle(base + i64::from(lunar_month) - 1),
        chi: Chi::from_cycle(i64::from(lunar_month) + 1),
    })
}

/// Derives the day pillar from a Julian Day Number.
///
/// The `+9` and `+1` offsets calibrate the JDN epoch against the historical
/// stem-branch day count; they reproduce the published reference pillars
/// (2000-01-01 is a Mậu Ngọ day, 2024-02-10 a Giáp Thìn day).
pub fn day_pillar(jdn: i64) -> StemBranch {
    StemBranch {
        can: Can::from_cycle(jdn + 9),
        chi: Chi::from_cycle(jdn + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_pillar_2024() {
        // (2024 - 4) mod 10 = 0, (2024 - 4) mod 12 = 4.
        let pillar = year_pillar(2024);
        assert_eq!(pillar.can, Can::Giap);
        assert_eq!(pillar.chi, Chi::Dragon);
        assert_eq!(pillar.label(), "Giáp Thìn");
    }

    #[test]
    fn year_pillar_references() {
        assert_eq!(year_pillar(1999).label(), "Kỷ Mão");
        assert_eq!(year_pillar(2000).label(), "Canh Thìn");
        assert_eq!(year_pillar(2025).label(), "Ất Tỵ");
    }

    #[test]
    fn year_pillar_periodicity() {
        for year in [-100, 0, 1900, 2024] {
            assert_eq!(year_pillar(year).can, year_pillar(year + 10).can);
            assert_eq!(year_pillar(year).chi, year_pillar(year + 12).chi);
            assert_eq!(year_pillar(year), year_pillar(year + 60));
        }
    }

    #[test]
    fn year_pillar_negative_year() {
        // Indices stay normalized for years before the anchor.
        let pillar = year_pillar(0);
        assert_eq!(pillar.can, Can::from_cycle(-4));
        assert_eq!(pillar.chi, Chi::from_cycle(-4));
        assert_eq!(pillar.label(), "Canh Thân");
    }

    #[test]
    fn month_pillar_month_one_is_dan() {
        for year in 1900..1960 {
            assert_eq!(month_pillar(year, 1).unwrap().chi, Chi::Tiger);
        }
    }

    #[test]
    fn month_pillar_references() {
        // Year Giáp Thìn 2024: month 1 is Bính Dần.
        assert_eq!(month_pillar(2024, 1).unwrap().label(), "Bính Dần");
        // Year Kỷ Mão 1999: month 11 is Bính Tý.
        assert_eq!(month_pillar(1999, 11).unwrap().label(), "Bính Tý");
    }

    #[test]
    fn month_pillar_five_tigers_rule() {
        // Years sharing a stem modulo 5 share the stem of month 1.
        assert_eq!(
            month_pillar(2024, 1).unwrap().can,
            month_pillar(2029, 1).unwrap().can
        );
        // Stems of consecutive months advance by one.
        for m in 1..12u8 {
            let a = month_pillar(2024, m).unwrap().can.as_index();
            let b = month_pillar(2024, m + 1).unwrap().can.as_index();
            assert_eq!((a + 1) % 10, b);
        }
    }

    #[test]
    fn month_pillar_invalid_month() {
        assert_eq!(
            month_pillar(2024, 0).unwrap_err(),
            CanChiError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            month_pillar(2024, 13).unwrap_err(),
            CanChiError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn day_pillar_references() {
        // Published day pillars.
        assert_eq!(day_pillar(2_451_545).label(), "Mậu Ngọ"); // 2000-01-01
        assert_eq!(day_pillar(2_440_588).label(), "Tân Tỵ"); // 1970-01-01
        assert_eq!(day_pillar(2_460_351).label(), "Giáp Thìn"); // 2024-02-10
    }

    #[test]
    fn day_pillar_advances_by_one() {
        let jdn = 2_451_545;
        for offset in 0..70 {
            let today = day_pillar(jdn + offset);
            let tomorrow = day_pillar(jdn + offset + 1);
            assert_eq!((today.can.as_index() + 1) % 10, tomorrow.can.as_index());
            assert_eq!((today.chi.as_index() + 1) % 12, tomorrow.chi.as_index());
        }
    }

    #[test]
    fn day_pillar_sexagenary_period() {
        let jdn = 2_451_545;
        assert_eq!(day_pillar(jdn), day_pillar(jdn + 60));
        assert_ne!(day_pillar(jdn), day_pillar(jdn + 30));
    }

    #[test]
    fn day_pillar_parity_invariant() {
        // Stem and branch of a computed pillar always share parity.
        for jdn in 2_451_545..2_451_545 + 60 {
            let p = day_pillar(jdn);
            assert_eq!(p.can.as_index() % 2, p.chi.as_index() % 2);
        }
    }

    #[test]
    fn display_matches_label() {
        let p = day_pillar(2_451_545);
        assert_eq!(p.to_string(), p.label());
    }
}
