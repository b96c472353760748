use thiserror::Error;

/// Errors surfaced while formatting an elapsed duration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElapsedError {
    /// Negative duration, `to` earlier than `from`, or an inconsistent configuration.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The active string table has no template for `key` in `locale`.
    #[error("missing translation `{key}` for locale `{locale}`")]
    MissingTranslation { locale: String, key: String },

    /// The division ladder failed to account for a duration. Never a user error.
    #[error("internal error: {0}")]
    Unreachable(String),
}

impl ElapsedError {
    pub(crate) fn missing(locale: &str, key: &str) -> Self {
        Self::MissingTranslation {
            locale: locale.to_string(),
            key: key.to_string(),
        }
    }
}
