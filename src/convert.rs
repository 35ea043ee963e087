//! Pure conversion functions: TOML config plus CLI overrides -> run settings.

use std::path::PathBuf;

use anyhow::{Result, bail};

use crate::cli::BuildArgs;
use crate::config::AlmanacConfig;

/// Everything the `build` command needs, after overrides are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    pub year: i32,
    pub locale: String,
    pub weekday_cutoff: usize,
    pub events: Option<PathBuf>,
    pub ics: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub keep_scratch: bool,
}

/// Merges the configuration with command-line overrides.
///
/// A flag always wins over the file. `--keep-scratch` can only switch
/// keeping on.
pub fn build_settings(config: AlmanacConfig, args: &BuildArgs) -> Result<BuildSettings> {
    let Some(year) = args.year.or(config.calendar.year) else {
        bail!("no target year: set [calendar].year in config or use --year");
    };
    Ok(BuildSettings {
        year,
        locale: args.locale.clone().unwrap_or(config.calendar.locale),
        weekday_cutoff: args.cutoff.unwrap_or(config.calendar.weekday_cutoff),
        events: args.events.clone().or(config.sources.events),
        ics: args.ics.clone().or(config.sources.ics),
        output: args.output.clone().or(config.output.path),
        keep_scratch: args.keep_scratch || config.output.keep_scratch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    fn no_flags() -> BuildArgs {
        BuildArgs {
            config: None,
            year: None,
            locale: None,
            cutoff: None,
            events: None,
            ics: None,
            output: None,
            keep_scratch: false,
        }
    }

    #[test]
    fn year_is_required() {
        let err = build_settings(AlmanacConfig::default(), &no_flags()).unwrap_err();
        assert!(err.to_string().contains("no target year"));
    }

    #[test]
    fn file_values_are_used() {
        let config = config::parse(
            "[calendar]\nyear = 2024\nlocale = \"fr_FR\"\n[sources]\nics = \"a.ics\"\n",
        )
        .unwrap();
        let settings = build_settings(config, &no_flags()).unwrap();
        assert_eq!(settings.year, 2024);
        assert_eq!(settings.locale, "fr_FR");
        assert_eq!(settings.ics, Some(PathBuf::from("a.ics")));
        assert!(settings.events.is_none());
        assert!(!settings.keep_scratch);
    }

    #[test]
    fn flags_override_file() {
        let config = config::parse(
            "[calendar]\nyear = 2024\nweekday_cutoff = 3\n[output]\npath = \"file.json\"\n",
        )
        .unwrap();
        let args = BuildArgs {
            year: Some(2031),
            cutoff: Some(0),
            output: Some(PathBuf::from("flag.json")),
            keep_scratch: true,
            ..no_flags()
        };
        let settings = build_settings(config, &args).unwrap();
        assert_eq!(settings.year, 2031);
        assert_eq!(settings.weekday_cutoff, 0);
        assert_eq!(settings.output, Some(PathBuf::from("flag.json")));
        assert!(settings.keep_scratch);
    }
}
