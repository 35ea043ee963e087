//! The four principal moon phases.

use std::fmt;

use serde::Serialize;

use crate::meeus;

/// One of the four principal phases of the Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MoonPhase {
    /// New Moon.
    New,
    /// First Quarter.
    First,
    /// Full Moon.
    Full,
    /// Last Quarter.
    Last,
}

impl MoonPhase {
    /// Order in which phases are evaluated when building maps. When two
    /// phases land on the same key, the later one in this list wins.
    pub const EVALUATION_ORDER: [MoonPhase; 4] = [
        MoonPhase::New,
        MoonPhase::Full,
        MoonPhase::First,
        MoonPhase::Last,
    ];

    /// Returns the short label used in maps and output (`"New"`, `"First"`,
    /// `"Full"`, `"Last"`).
    pub fn label(self) -> &'static str {
        match self {
            MoonPhase::New => "New",
            MoonPhase::First => "First",
            MoonPhase::Full => "Full",
            MoonPhase::Last => "Last",
        }
    }

    /// Returns the JDE of this phase for the lunation selected by
    /// `decimal_year`.
    pub fn estimate(self, decimal_year: f64) -> f64 {
        match self {
            MoonPhase::New => meeus::new_moon(decimal_year),
            MoonPhase::First => meeus::first_quarter(decimal_year),
            MoonPhase::Full => meeus::full_moon(decimal_year),
            MoonPhase::Last => meeus::last_quarter(decimal_year),
        }
    }

    /// Position of this phase in [`MoonPhase::EVALUATION_ORDER`].
    pub(crate) fn rank(self) -> usize {
        match self {
            MoonPhase::New => 0,
            MoonPhase::Full => 1,
            MoonPhase::First => 2,
            MoonPhase::Last => 3,
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(MoonPhase::New.label(), "New");
        assert_eq!(MoonPhase::First.label(), "First");
        assert_eq!(MoonPhase::Full.label(), "Full");
        assert_eq!(MoonPhase::Last.to_string(), "Last");
    }

    #[test]
    fn rank_matches_evaluation_order() {
        for (i, phase) in MoonPhase::EVALUATION_ORDER.iter().enumerate() {
            assert_eq!(phase.rank(), i);
        }
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&MoonPhase::Full).unwrap();
        assert_eq!(json, "\"Full\"");
    }
}
