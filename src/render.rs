//! Text rendering of almanac records.
//!
//! Presentation only: the engine returns canonical Vietnamese labels, and
//! the language switch reorders the surrounding strings the way the original
//! cards do ("Ngày X - Tháng Y" in Vietnamese, "X - Y" in English).

use lichviet_almanac::AlmanacDetails;
use lichviet_canchi::Chi;

/// Output format of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Card language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Vi,
    En,
}

const WEEKDAYS_VI: [&str; 7] = [
    "Chủ Nhật",
    "Thứ Hai",
    "Thứ Ba",
    "Thứ Tư",
    "Thứ Năm",
    "Thứ Sáu",
    "Thứ Bảy",
];

const WEEKDAYS_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Returns the weekday name, 0 = Sunday through 6 = Saturday.
pub fn weekday_name(weekday: u8, language: Language) -> &'static str {
    let names = match language {
        Language::Vi => &WEEKDAYS_VI,
        Language::En => &WEEKDAYS_EN,
    };
    names[usize::from(weekday) % 7]
}

/// Formats the six lucky hours as `"Tý (23h-1h), ..."`.
pub fn hours_line(hours: &[Chi]) -> String {
    hours
        .iter()
        .map(|chi| format!("{} ({})", chi.label(), chi.hour_range()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the full almanac card.
pub fn card(details: &AlmanacDetails, language: Language) -> String {
    let solar = details.solar();
    let lunar = details.lunar();
    let weekday = weekday_name(solar.weekday(), language);
    let verdict = verdict(details.is_auspicious(), language);
    let hours = hours_line(&details.lucky_hours());

    match language {
        Language::Vi => format!(
            "{weekday}, ngày {:02}/{:02}/{} (dương lịch)\n\
             Ngày {} tháng {}{} năm {} (âm lịch)\n\
             Ngày {} - Tháng {}\n\
             Mệnh ngày:     {} - {verdict}\n\
             Giờ hoàng đạo: {hours}\n\
             Tuổi xung:     {}",
            solar.day(),
            solar.month(),
            solar.year(),
            lunar.day(),
            lunar.month(),
            if lunar.is_leap() { " (nhuận)" } else { "" },
            details.year_pillar().label(),
            details.day_pillar().label(),
            details.month_pillar().label(),
            details.nap_am(),
            details.conflict_label(),
        ),
        Language::En => format!(
            "{weekday}, {} (solar)\n\
             Lunar day {}/{}{} year {}\n\
             {} - {}\n\
             Day element: {} - {verdict}\n\
             Lucky hours: {hours}\n\
             Conflicting ages: {}",
            solar,
            lunar.day(),
            lunar.month(),
            if lunar.is_leap() { " (leap)" } else { "" },
            details.year_pillar().label(),
            details.day_pillar().label(),
            details.month_pillar().label(),
            details.nap_am(),
            details.conflict_label(),
        ),
    }
}

fn verdict(auspicious: bool, language: Language) -> &'static str {
    match (auspicious, language) {
        (true, Language::Vi) => "Hoàng đạo",
        (false, Language::Vi) => "Hắc đạo",
        (true, Language::En) => "Auspicious day",
        (false, Language::En) => "Inauspicious day",
    }
}
