use anyhow::Result;
use tracing::info;

use lichviet_almanac::{DetailsOutput, compute_details};
use lichviet_date::SolarDate;

use crate::cli::ShowArgs;
use crate::config::LichConfig;
use crate::convert::{parse_format, parse_language, parse_lunar_date, parse_solar_date};
use crate::render::{self, OutputFormat};

/// Run the `show` subcommand.
pub fn run(args: &ShowArgs, config: &LichConfig) -> Result<()> {
    let solar = match &args.date {
        Some(s) => parse_solar_date(s)?,
        None => SolarDate::today(),
    };
    let lunar = parse_lunar_date(&args.lunar, args.leap)?;
    info!(%solar, %lunar, "computing almanac card");

    let details = compute_details(solar, lunar)?;

    let format = if args.json {
        OutputFormat::Json
    } else {
        parse_format(&config.display.format)?
    };
    match format {
        OutputFormat::Json => {
            let output = DetailsOutput::from(&details);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            let language = parse_language(&config.display.language)?;
            println!("{}", render::card(&details, language));
        }
    }
    Ok(())
}
