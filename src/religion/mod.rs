//! Religion demographics per country.
//!
//! [`Resolver::resolve`] looks a country up in a remote CSV snapshot first,
//! then in a static per-country table, then in a static per-region table.
//! The remote snapshot is fetched at most once per resolver: the first lookup
//! triggers the download, concurrent lookups wait for it, and every later
//! lookup reuses the parsed result. A failed download or an unparsable body
//! leaves the remote dataset empty; lookups then fall through to the tables.
//!
//! ```no_run
//! use country_atlas::religion::{HttpReligionSource, Resolver};
//!
//! let resolver = Resolver::new(HttpReligionSource::default());
//! if let Some(breakdown) = resolver.resolve(Some("FRA"), Some("Europe")) {
//!     println!("{:?}", breakdown);
//! }
//! ```

pub mod fallback;
pub mod parse;

use ahash::AHashMap;
use anyhow::{Context, Result, bail};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use std::time::Duration;

pub use parse::{CATEGORY_NAMES, parse_religion_csv};

/// Religion category name -> share of the population in percent.
pub type ReligionBreakdown = BTreeMap<String, f64>;

/// Parsed remote snapshot, keyed by upper-case ISO3 code.
pub type RemoteReligionData = AHashMap<String, ReligionBreakdown>;

/// Religion by country, 2020 snapshot.
pub const DEFAULT_RELIGION_CSV_URL: &str = "https://gist.githubusercontent.com/edoardottt/24cad484796d2cf6167e45595bcf2f50/raw/b5885db4011ecfbf72f4fdb37f6ea9fe39ecf9a2/ReligionByCountry2020.csv";

/// Where the religion CSV comes from.
pub trait ReligionSource: Send + Sync {
    /// Fetch the raw CSV document.
    fn fetch_csv(&self) -> Result<String>;
}

/// Downloads the CSV over HTTP.
#[derive(Debug, Clone)]
pub struct HttpReligionSource {
    pub url: String,
    http: HttpClient,
}

impl HttpReligionSource {
    /// Source for `url` with the given total request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("country_atlas/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build religion http client")?;
        Ok(Self {
            url: url.into(),
            http,
        })
    }
}

impl Default for HttpReligionSource {
    fn default() -> Self {
        Self::new(DEFAULT_RELIGION_CSV_URL, Duration::from_secs(30))
            .expect("reqwest client build")
    }
}

impl ReligionSource for HttpReligionSource {
    fn fetch_csv(&self) -> Result<String> {
        log::debug!("GET {}", self.url);
        let resp = self
            .http
            .get(&self.url)
            .send()
            .with_context(|| format!("GET {}", self.url))?;
        if !resp.status().is_success() {
            bail!("failed to load religion data: HTTP {}", resp.status());
        }
        resp.text().context("read religion csv body")
    }
}

/// Religion lookup with a lazily loaded, single-flight remote snapshot.
///
/// Construct one per process and share it by reference (it is `Sync`).
pub struct Resolver<S = HttpReligionSource> {
    source: S,
    remote: OnceLock<RemoteReligionData>,
}

impl<S: ReligionSource> Resolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            remote: OnceLock::new(),
        }
    }

    /// Breakdown for `cca3`, falling back to `region`.
    ///
    /// Lookup order: remote snapshot, static country table, static region
    /// table. `None` means no religion data is available, which is not an
    /// error.
    pub fn resolve(&self, cca3: Option<&str>, region: Option<&str>) -> Option<&ReligionBreakdown> {
        let remote = self.remote();

        let code = cca3
            .map(|c| c.trim().to_ascii_uppercase())
            .filter(|c| !c.is_empty());
        if let Some(code) = code {
            if let Some(found) = remote.get(&code).or_else(|| fallback::by_country(&code)) {
                return Some(found);
            }
        }

        region.and_then(fallback::by_region)
    }

    /// Number of countries the remote snapshot provided (loads it if needed).
    pub fn remote_len(&self) -> usize {
        self.remote().len()
    }

    /// Whether the remote snapshot has been loaded (or given up on).
    pub fn is_loaded(&self) -> bool {
        self.remote.get().is_some()
    }

    fn remote(&self) -> &RemoteReligionData {
        self.remote.get_or_init(|| match self.source.fetch_csv() {
            Ok(body) => {
                let data = parse_religion_csv(&body);
                log::info!("loaded religion data for {} countries", data.len());
                data
            }
            Err(e) => {
                log::warn!("religion data unavailable, using fallback tables: {:#}", e);
                RemoteReligionData::default()
            }
        })
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for Resolver<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("source", &self.source)
            .field("loaded", &self.remote.get().map(|d| d.len()))
            .finish()
    }
}
