use anyhow::Result;

use lichviet_canchi::{month_pillar, year_pillar};

use crate::cli::YearArgs;

/// Run the `year` subcommand.
pub fn run(args: &YearArgs) -> Result<()> {
    let pillar = year_pillar(args.year);
    println!("Năm {}: {}", args.year, pillar.label());
    if let Some(month) = args.month {
        let pillar = month_pillar(args.year, month)?;
        println!("Tháng {month}: {}", pillar.label());
    }
    Ok(())
}
