use thiserror::Error;

/// Failures surfaced to the presentation layer.
///
/// Upstream outages are not represented here: they degrade to empty or
/// fallback data and are only logged.
#[derive(Error, Debug)]
pub enum AtlasError {
    /// The code does not resolve to a record with a name and a flag.
    #[error("country not found: {code}")]
    NotFound { code: String },

    #[error("invalid country code: {0:?} (expected 2-3 letters or digits)")]
    InvalidCode(String),
}
