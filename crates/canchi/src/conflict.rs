//! Age-conflict branch groups.

use crate::branch::Chi;

/// Returns the three branches in age conflict with a day branch.
///
/// The direct opposition (`+6`) comes first, followed by the two remaining
/// members of the clash trio (`+3`, `+9`), in that fixed order.
///
/// # Example
///
/// ```
/// use lichviet_canchi::{Chi, conflict_group};
///
/// assert_eq!(
///     [Chi::Horse, Chi::Cat, Chi::Rooster],
///     conflict_group(Chi::Rat)
/// );
/// ```
pub fn conflict_group(day_chi: Chi) -> [Chi; 3] {
    let d = day_chi.as_index() as i64;
    [
        Chi::from_cycle(d + 6),
        Chi::from_cycle(d + 3),
        Chi::from_cycle(d + 9),
    ]
}
