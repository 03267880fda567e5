use crate::api::DEFAULT_BASE_URL;
use crate::religion::DEFAULT_RELIGION_CSV_URL;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runtime settings. The CLI fills these from flags and `ATLAS_*`
/// environment variables; library users can start from `Default`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// REST Countries base URL, e.g. `https://restcountries.com/v3.1`.
    pub api_url: String,
    /// Religion-by-country CSV snapshot.
    pub religion_url: String,
    /// Total timeout for each outbound request.
    pub timeout: Duration,
    /// Number formatting locale tag (`en`, `de`, ...).
    pub locale: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.into(),
            religion_url: DEFAULT_RELIGION_CSV_URL.into(),
            timeout: Duration::from_secs(30),
            locale: "en".into(),
        }
    }
}
