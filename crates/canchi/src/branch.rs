//! The twelve Earthly Branches (Địa Chi).

use std::fmt;

use crate::cycle::normalized_mod;

/// One of the twelve Earthly Branches of the sexagenary cycle.
///
/// Variants are named after the Vietnamese zodiac animals; [`Chi::label`]
/// returns the canonical branch name. Each branch also names one of the
/// twelve traditional two-hour periods of the day ([`Chi::hour_range`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Chi {
    Rat = 0,
    Buffalo = 1,
    Tiger = 2,
    Cat = 3,
    Dragon = 4,
    Snake = 5,
    Horse = 6,
    Goat = 7,
    Monkey = 8,
    Rooster = 9,
    Dog = 10,
    Pig = 11,
}

/// Canonical Vietnamese branch labels, in cycle order.
const LABELS: [&str; 12] = [
    "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
];

/// Clock ranges of the twelve two-hour periods, in branch order. The Tý
/// period straddles midnight.
const HOUR_RANGES: [&str; 12] = [
    "23h-1h", "1h-3h", "3h-5h", "5h-7h", "7h-9h", "9h-11h", "11h-13h", "13h-15h", "15h-17h",
    "17h-19h", "19h-21h", "21h-23h",
];

impl Chi {
    /// All twelve branches in cycle order.
    pub const ALL: [Chi; 12] = [
        Self::Rat,
        Self::Buffalo,
        Self::Tiger,
        Self::Cat,
        Self::Dragon,
        Self::Snake,
        Self::Horse,
        Self::Goat,
        Self::Monkey,
        Self::Rooster,
        Self::Dog,
        Self::Pig,
    ];

    /// Returns the branch at cycle position `value` (any integer, normalized
    /// modulo 12).
    pub fn from_cycle(value: i64) -> Self {
        Self::ALL[normalized_mod(value, 12)]
    }

    /// Returns the zero-based cycle index (matches the `#[repr(u8)]`
    /// discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }

    /// Returns the canonical Vietnamese label.
    pub fn label(self) -> &'static str {
        LABELS[self.as_index()]
    }

    /// Returns the clock range of this branch's two-hour period.
    pub fn hour_range(self) -> &'static str {
        HOUR_RANGES[self.as_index()]
    }
}

impl fmt::Display for Chi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
