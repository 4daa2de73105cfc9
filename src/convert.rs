//! Pure parsing helpers: CLI/config strings -> engine types.

use anyhow::{Result, bail};

use lichviet_almanac::LunarDate;
use lichviet_date::SolarDate;

use crate::render::{Language, OutputFormat};

/// Parses an output format name into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Parses a language name into the corresponding enum variant.
pub fn parse_language(s: &str) -> Result<Language> {
    match s.to_lowercase().as_str() {
        "vi" => Ok(Language::Vi),
        "en" => Ok(Language::En),
        other => bail!("unknown language: {other:?}"),
    }
}

/// Parses a `YYYY-MM-DD` string into a [`SolarDate`].
pub fn parse_solar_date(s: &str) -> Result<SolarDate> {
    Ok(s.parse()?)
}

/// Parses a `D/M/YYYY` string (converter output) into a [`LunarDate`].
pub fn parse_lunar_date(s: &str, leap: bool) -> Result<LunarDate> {
    let invalid = || anyhow::anyhow!("invalid lunar date: {s:?} (expected D/M/YYYY)");
    let mut parts = s.splitn(3, '/');
    let day: u8 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;
    let month: u8 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;
    let year: i32 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;
    Ok(LunarDate::new(year, month, day, leap)?)
}
