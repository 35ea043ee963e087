//! Build command: merge every source for one year and export it as JSON.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use almanac_events::{
    DayAnnotation, DayEvent, YearAnnotations, expand_configured_events, import_events,
};
use almanac_locale::{EncodedText, month_names, weekday_names};

use crate::cli::BuildArgs;
use crate::config;
use crate::convert::{self, BuildSettings};
use crate::scratch::Scratch;

/// The exported annotation set.
#[derive(Serialize)]
struct AlmanacExport<'a> {
    year: i32,
    locale: &'a str,
    months: &'a [EncodedText],
    weekdays: &'a [EncodedText],
    days: &'a [DayAnnotation],
}

/// Run the build pipeline.
pub fn run(args: BuildArgs) -> Result<()> {
    let _cmd = info_span!("build").entered();

    // 1. Configuration and overrides
    let config = config::load(args.config.as_deref())?;
    let settings = convert::build_settings(config, &args)?;
    info!(year = settings.year, locale = %settings.locale, "building almanac");

    // 2. Name tables
    let months = month_names(&settings.locale)
        .with_context(|| format!("failed to load month names for {}", settings.locale))?;
    let weekdays = weekday_names(&settings.locale, settings.weekday_cutoff)
        .with_context(|| format!("failed to load weekday names for {}", settings.locale))?;

    // 3. Events, configured first
    let events = collect_events(&settings)?;
    info!(count = events.len(), "collected events");

    // 4. Merge with weekday names and moon phases
    let year = YearAnnotations::build(settings.year, &events, &weekdays);

    // 5. Export
    let export = AlmanacExport {
        year: year.year(),
        locale: &settings.locale,
        months: &months.as_slice()[1..],
        weekdays: &weekdays.as_slice()[1..],
        days: year.days(),
    };
    let json = serde_json::to_string_pretty(&export).context("failed to serialize annotations")?;

    match &settings.output {
        Some(output) => write_output(&json, output, settings.keep_scratch),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

/// Gathers configured and imported events for the target year.
fn collect_events(settings: &BuildSettings) -> Result<Vec<DayEvent>> {
    let mut events = Vec::new();
    if let Some(path) = &settings.events {
        let configured = expand_configured_events(path)
            .with_context(|| format!("failed to load event configuration: {}", path.display()))?;
        events.extend(configured);
    }
    if let Some(path) = &settings.ics {
        let imported = import_events(path, settings.year)
            .with_context(|| format!("failed to import calendar: {}", path.display()))?;
        events.extend(imported);
    }
    Ok(events)
}

/// Stages `json` in a scratch directory beside `output`, then renames it
/// into place so readers never see a partial file.
fn write_output(json: &str, output: &Path, keep_scratch: bool) -> Result<()> {
    let parent = output
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let scratch = Scratch::new_in(parent, keep_scratch)?;
    let mut staged = scratch.stage()?;
    staged
        .write_all(json.as_bytes())
        .and_then(|()| staged.as_file().sync_all())
        .with_context(|| format!("failed to stage output: {}", staged.path().display()))?;
    staged
        .persist(output)
        .with_context(|| format!("failed to write output: {}", output.display()))?;
    info!(path = %output.display(), "annotations written");
    Ok(())
}
