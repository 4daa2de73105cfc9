//! The ten Heavenly Stems (Thiên Can).

use std::fmt;

use crate::cycle::normalized_mod;

/// One of the ten Heavenly Stems of the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Can {
    Giap = 0,
    At = 1,
    Binh = 2,
    Dinh = 3,
    Mau = 4,
    Ky = 5,
    Canh = 6,
    Tan = 7,
    Nham = 8,
    Quy = 9,
}

/// Canonical Vietnamese stem labels, in cycle order.
const LABELS: [&str; 10] = [
    "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý",
];

impl Can {
    /// All ten stems in cycle order.
    pub const ALL: [Can; 10] = [
        Self::Giap,
        Self::At,
        Self::Binh,
        Self::Dinh,
        Self::Mau,
        Self::Ky,
        Self::Canh,
        Self::Tan,
        Self::Nham,
        Self::Quy,
    ];

    /// Returns the stem at cycle position `value` (any integer, normalized
    /// modulo 10).
    pub fn from_cycle(value: i64) -> Self {
        Self::ALL[normalized_mod(value, 10)]
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
}

impl fmt::Display for Can {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
