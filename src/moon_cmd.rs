//! Moon command: print phase dates.

use anyhow::Result;
use tracing::info_span;

use almanac_moon::{month_moon_phases, phase_events};

use crate::cli::MoonArgs;

/// Print the phase events of a year, or the month-scoped map of one month.
pub fn run(args: MoonArgs) -> Result<()> {
    let _cmd = info_span!("moon", year = args.year).entered();
    for line in render(&args) {
        println!("{line}");
    }
    Ok(())
}

fn render(args: &MoonArgs) -> Vec<String> {
    match args.month {
        Some(month) => month_moon_phases(1, month, args.year)
            .into_iter()
            .map(|(day, phase)| format!("{:04}-{month:02}-{day:02} {phase}", args.year))
            .collect(),
        None => {
            let prefix = format!("{:04}-", args.year);
            phase_events(args.year)
                .into_iter()
                .filter(|(key, _)| key.starts_with(&prefix))
                .map(|(key, phase)| format!("{key} {phase}"))
                .collect()
        }
    }
}
