//! Names command: print localized name tables.

use anyhow::{Context, Result};

use almanac_locale::{month_names, weekday_names};

use crate::cli::NamesArgs;

/// Print the month names (1-12) and weekday names (1-7, Monday first).
pub fn run(args: NamesArgs) -> Result<()> {
    let months = month_names(&args.locale)
        .with_context(|| format!("failed to load month names for {}", args.locale))?;
    let weekdays = weekday_names(&args.locale, args.cutoff)
        .with_context(|| format!("failed to load weekday names for {}", args.locale))?;

    println!("months:");
    for (i, name) in months.as_slice().iter().enumerate().skip(1) {
        println!("{i:>3} {name}");
    }
    println!("weekdays:");
    for (i, name) in weekdays.as_slice().iter().enumerate().skip(1) {
        println!("{i:>3} {name}");
    }
    Ok(())
}
