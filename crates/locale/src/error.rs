//! Error types for almanac-locale.

/// Error type for all fallible operations in the almanac-locale crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocaleError {
    /// Returned when a locale code is not known to the formatter.
    #[error("unknown locale: {code:?}")]
    UnknownLocale {
        /// The code that was requested.
        code: String,
    },
}
