//! Synchronous client for the **REST Countries API (v3.1)**.
//!
//! Two endpoints are used: `/all` for the listing and `/alpha/{code}` for a
//! single country. Both accept a `fields=` projection to keep payloads small.
//!
//! ### Notes
//! - `/all` rejects requests without `fields` and caps them at 10 fields.
//! - `/alpha/{code}` answers with an array for most codes but a bare object
//!   for some; both shapes are accepted.
//! - Network timeouts use a sane default (30s) and can be adjusted through
//!   [`Client::new`].
//!
//! Typical usage:
//! ```no_run
//! # use country_atlas::Client;
//! # use country_atlas::api::LIST_FIELDS;
//! let client = Client::default();
//! let all = client.fetch_all(LIST_FIELDS)?;
//! let deu = client.fetch_by_code("DEU", &[])?;
//! # Ok::<(), anyhow::Error>(())
//! ```
use crate::models::Country;
use anyhow::{Context, Result, anyhow, bail};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Projection used by the country listing.
pub const LIST_FIELDS: &[&str] = &[
    "name",
    "cca3",
    "region",
    "subregion",
    "population",
    "area",
    "capital",
    "currencies",
    "flags",
];

/// Projection used by the details page: every field it formats.
pub const DETAIL_FIELDS: &[&str] = &[
    "name",
    "flag",
    "cca3",
    "region",
    "subregion",
    "continents",
    "capital",
    "capitalInfo",
    "population",
    "area",
    "latlng",
    "languages",
    "currencies",
    "religions",
    "demonyms",
    "idd",
    "timezones",
    "borders",
    "tld",
    "altSpellings",
    "gini",
    "independent",
    "unMember",
    "landlocked",
    "startOfWeek",
    "car",
    "fifa",
    "postalCode",
    "maps",
    "coatOfArms",
    "flags",
];

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, Duration::from_secs(30)).expect("reqwest client build")
    }
}

// Allow -, _, . unescaped in codes and field names
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(s: &str) -> String {
    percent_encoding::utf8_percent_encode(s.trim(), SAFE).to_string()
}

/// `?fields=a,b,c`, or nothing for an empty projection.
pub fn fields_query(fields: &[&str]) -> String {
    let parts: Vec<String> = fields
        .iter()
        .map(|f| enc(f))
        .filter(|f| !f.is_empty())
        .collect();
    if parts.is_empty() {
        String::new()
    } else {
        format!("?fields={}", parts.join(","))
    }
}

/// Decode a response body that is either an array of records or a single one.
///
/// Array elements that are not objects are skipped.
pub fn records_from_value(v: Value) -> Result<Vec<Country>> {
    match v {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<Country>(item) {
                Ok(c) => Some(c),
                Err(e) => {
                    log::warn!("skipping undecodable country record: {}", e);
                    None
                }
            })
            .collect()),
        Value::Object(_) => Ok(vec![
            serde_json::from_value(v).context("parse country record")?,
        ]),
        other => bail!("unexpected response shape: {}", other),
    }
}

impl Client {
    /// Client for `base_url` with the given total request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("country_atlas/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .context("build http client")?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// GET a JSON document. `Ok(None)` on 404.
    ///
    /// Small retry for transient failures (5xx / network errors).
    fn get_json(&self, url: &str) -> Result<Option<Value>> {
        let mut last_err: Option<anyhow::Error> = None;
        for backoff_ms in [100u64, 300, 700] {
            log::debug!("GET {}", url);
            match self.http.get(url).send() {
                Ok(r) if r.status().is_success() => {
                    return r.json().map(Some).context("decode json");
                }
                Ok(r) if r.status() == StatusCode::NOT_FOUND => return Ok(None),
                Ok(r) if r.status().is_server_error() => {
                    last_err = Some(anyhow!("HTTP {}", r.status()));
                }
                Ok(r) => bail!("request failed with HTTP {}", r.status()),
                Err(e) => last_err = Some(e.into()),
            }
            std::thread::sleep(Duration::from_millis(backoff_ms));
        }
        bail!("network error: {:?}", last_err);
    }

    /// Fetch every country, restricted to `fields` (at most 10).
    ///
    /// ### Example
    /// ```no_run
    /// # use country_atlas::Client;
    /// let cli = Client::default();
    /// let countries = cli.fetch_all(&["name", "cca3", "flags"])?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn fetch_all(&self, fields: &[&str]) -> Result<Vec<Country>> {
        let url = format!("{}/all{}", self.base_url, fields_query(fields));
        match self.get_json(&url).with_context(|| format!("GET {}", url))? {
            Some(v) => records_from_value(v),
            None => Ok(Vec::new()),
        }
    }

    /// Fetch one country by ISO 3166-1 alpha-2/alpha-3 (or numeric/CIOC) code.
    ///
    /// An empty `fields` slice requests the full record. `Ok(None)` when the
    /// API does not know the code.
    pub fn fetch_by_code(&self, code: &str, fields: &[&str]) -> Result<Option<Country>> {
        let code = code.trim();
        if code.is_empty() {
            bail!("country code required");
        }
        let url = format!(
            "{}/alpha/{}{}",
            self.base_url,
            enc(code),
            fields_query(fields)
        );
        let Some(v) = self.get_json(&url).with_context(|| format!("GET {}", url))? else {
            return Ok(None);
        };
        Ok(records_from_value(v)?.into_iter().next())
    }
}
