use anyhow::Result;
use serde::Serialize;
use tracing::info;

use lichviet_canchi::{conflict_group, day_pillar, is_auspicious_day, lucky_hours, nap_am};
use lichviet_date::SolarDate;

use crate::cli::DayArgs;
use crate::config::LichConfig;
use crate::convert::{parse_format, parse_language, parse_solar_date};
use crate::render::{self, Language, OutputFormat};

/// JSON view of the solar-only day details.
#[derive(Debug, Serialize)]
struct DayOutput {
    date: String,
    weekday: u8,
    jdn: i64,
    can_chi: String,
    nap_am: String,
    lucky_hours: Vec<String>,
    conflict: String,
    /// Present only when a lunar month was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    auspicious: Option<bool>,
}

/// Run the `day` subcommand.
pub fn run(args: &DayArgs, config: &LichConfig) -> Result<()> {
    let base = match &args.date {
        Some(s) => parse_solar_date(s)?,
        None => SolarDate::today(),
    };
    let solar = base.offset(args.offset);
    info!(%solar, offset = args.offset, "computing day details");

    let jdn = solar.jdn();
    let pillar = day_pillar(jdn);
    let hours = lucky_hours(pillar.chi);
    let conflict = conflict_group(pillar.chi);
    let auspicious = args
        .lunar_month
        .map(|month| is_auspicious_day(month, pillar.chi));

    let format = if args.json {
        OutputFormat::Json
    } else {
        parse_format(&config.display.format)?
    };
    match format {
        OutputFormat::Json => {
            let output = DayOutput {
                date: solar.to_string(),
                weekday: solar.weekday(),
                jdn,
                can_chi: pillar.label(),
                nap_am: nap_am(pillar).to_string(),
                lucky_hours: hours.iter().map(|chi| chi.label().to_string()).collect(),
                conflict: conflict
                    .iter()
                    .map(|chi| chi.label())
                    .collect::<Vec<_>>()
                    .join(", "),
                auspicious,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            let language = parse_language(&config.display.language)?;
            let weekday = render::weekday_name(solar.weekday(), language);
            let conflict_line = conflict
                .iter()
                .map(|chi| chi.label())
                .collect::<Vec<_>>()
                .join(", ");
            match language {
                Language::Vi => {
                    println!(
                        "{weekday}, ngày {:02}/{:02}/{}",
                        solar.day(),
                        solar.month(),
                        solar.year()
                    );
                    println!("Ngày {} ({})", pillar.label(), nap_am(pillar));
                    println!("Giờ hoàng đạo: {}", render::hours_line(&hours));
                    println!("Tuổi xung:     {conflict_line}");
                    if let (Some(month), Some(good)) = (args.lunar_month, auspicious) {
                        let verdict = if good { "hoàng đạo" } else { "hắc đạo" };
                        println!("Tháng {month} (âm lịch): ngày {verdict}");
                    }
                }
                Language::En => {
                    println!("{weekday}, {solar}");
                    println!("Day {} ({})", pillar.label(), nap_am(pillar));
                    println!("Lucky hours: {}", render::hours_line(&hours));
                    println!("Conflicting ages: {conflict_line}");
                    if let (Some(month), Some(good)) = (args.lunar_month, auspicious) {
                        let verdict = if good { "auspicious" } else { "inauspicious" };
                        println!("Lunar month {month}: {verdict} day");
                    }
                }
            }
        }
    }
    Ok(())
}
