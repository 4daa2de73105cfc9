//! Auspicious (hoàng đạo) days and hours.
//!
//! Both tables encode the traditional rotation of the twelve day/hour
//! officers, of which six are auspicious. They are carried as data from the
//! almanac source, not derived: the rows repeat in pairs of six because the
//! officer bases advance two branches per step.

use crate::branch::Chi;

/// Lucky two-hour periods for each day branch (row index = branch index), in
/// canonical listing order. Period indices are branch indices of the hour.
#[rustfmt::skip]
const LUCKY_HOURS: [[u8; 6]; 12] = [
    [0, 1, 3, 6, 8, 9],   // Tý
    [2, 3, 5, 8, 10, 11], // Sửu
    [0, 1, 4, 5, 7, 10],  // Dần
    [0, 2, 3, 6, 7, 9],   // Mão
    [2, 4, 5, 8, 9, 11],  // Thìn
    [1, 4, 6, 7, 10, 11], // Tỵ
    [0, 1, 3, 6, 8, 9],   // Ngọ
    [2, 3, 5, 8, 10, 11], // Mùi
    [0, 1, 4, 5, 7, 10],  // Thân
    [0, 2, 3, 6, 7, 9],   // Dậu
    [2, 4, 5, 8, 9, 11],  // Tuất
    [1, 4, 6, 7, 10, 11], // Hợi
];

/// Auspicious day branches for each lunar month (row index = month - 1).
#[rustfmt::skip]
const AUSPICIOUS_DAYS: [[u8; 6]; 12] = [
    [0, 1, 4, 5, 7, 10],  // month 1
    [0, 2, 3, 6, 7, 9],   // month 2
    [2, 4, 5, 8, 9, 11],  // month 3
    [1, 4, 6, 7, 10, 11], // month 4
    [0, 1, 3, 6, 8, 9],   // month 5
    [2, 3, 5, 8, 10, 11], // month 6
    [0, 1, 4, 5, 7, 10],  // month 7
    [0, 2, 3, 6, 7, 9],   // month 8
    [2, 4, 5, 8, 9, 11],  // month 9
    [1, 4, 6, 7, 10, 11], // month 10
    [0, 1, 3, 6, 8, 9],   // month 11
    [2, 3, 5, 8, 10, 11], // month 12
];

/// Returns the six lucky two-hour periods of a day, in canonical listing
/// order.
///
/// # Example
///
/// ```
/// use lichviet_canchi::{Chi, lucky_hours};
///
/// let hours = lucky_hours(Chi::Rat);
/// assert_eq!(hours[0], Chi::Rat);
/// assert_eq!(hours[0].hour_range(), "23h-1h");
/// ```
pub fn lucky_hours(day_chi: Chi) -> [Chi; 6] {
    LUCKY_HOURS[day_chi.as_index()].map(|i| Chi::ALL[i as usize])
}

/// Returns `true` if a day branch is auspicious (hoàng đạo) in the given
/// lunar month.
///
/// A month outside 1..=12 has no table row and yields `false`.
pub fn is_auspicious_day(lunar_month: u8, day_chi: Chi) -> bool {
    if !(1..=12).contains(&lunar_month) {
        return false;
    }
    AUSPICIOUS_DAYS[usize::from(lunar_month) - 1].contains(&(day_chi.as_index() as u8))
}
