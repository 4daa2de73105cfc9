//! Serializable output structures for almanac records.

use serde::Serialize;

use crate::details::AlmanacDetails;

/// JSON-ready view of an [`AlmanacDetails`] record.
#[derive(Debug, Clone, Serialize)]
pub struct DetailsOutput {
    /// Solar date fields.
    pub solar: SolarOutput,
    /// Lunar date fields.
    pub lunar: LunarOutput,
    /// Canonical labels of the three pillars.
    pub can_chi: CanChiOutput,
    /// Nạp Âm (Five-Element) label of the day.
    pub nap_am: String,
    /// Whether the day is auspicious in its lunar month.
    pub auspicious: bool,
    /// Lucky two-hour periods, in canonical listing order.
    pub lucky_hours: Vec<HourOutput>,
    /// Comma-joined conflict branch labels, opposition first.
    pub conflict: String,
}

/// Solar date fields of the output record.
#[derive(Debug, Clone, Serialize)]
pub struct SolarOutput {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    /// Day of week, 0 = Sunday through 6 = Saturday.
    pub weekday: u8,
}

/// Lunar date fields of the output record.
#[derive(Debug, Clone, Serialize)]
pub struct LunarOutput {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub leap: bool,
}

/// Pillar labels of the output record.
#[derive(Debug, Clone, Serialize)]
pub struct CanChiOutput {
    pub year: String,
    pub month: String,
    pub day: String,
}

/// One lucky two-hour period.
#[derive(Debug, Clone, Serialize)]
pub struct HourOutput {
    /// Branch name of the period.
    pub name: String,
    /// Clock range of the period, e.g. `"23h-1h"`.
    pub range: String,
}

impl From<&AlmanacDetails> for DetailsOutput {
    fn from(details: &AlmanacDetails) -> Self {
        Self {
            solar: SolarOutput {
                year: details.solar().year(),
                month: details.solar().month(),
                day: details.solar().day(),
                weekday: details.solar().weekday(),
            },
            lunar: LunarOutput {
                year: details.lunar().year(),
                month: details.lunar().month(),
                day: details.lunar().day(),
                leap: details.lunar().is_leap(),
            },
            can_chi: CanChiOutput {
                year: details.year_pillar().label(),
                month: details.month_pillar().label(),
                day: details.day_pillar().label(),
            },
            nap_am: details.nap_am().to_string(),
            auspicious: details.is_auspicious(),
            lucky_hours: details
                .lucky_hours()
                .iter()
                .map(|chi| HourOutput {
                    name: chi.label().to_string(),
                    range: chi.hour_range().to_string(),
                })
                .collect(),
            conflict: details.conflict_label(),
        }
    }
}
