//! Read-through facade used by the presentation layer.

use crate::api::{Client, DETAIL_FIELDS, LIST_FIELDS};
use crate::config::Settings;
use crate::error::AtlasError;
use crate::format::{NOT_AVAILABLE, format_religions, map_locale};
use crate::models::Country;
use crate::religion::{HttpReligionSource, ReligionBreakdown, ReligionSource, Resolver};
use crate::view::CountryDetails;
use anyhow::Result;
use num_format::Locale;
use regex::Regex;
use std::sync::LazyLock;

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{2,3}$").expect("valid code regex"));

/// Country API client, religion resolver, and number locale bundled together.
///
/// Build one at startup and share it; the resolver inside caches the religion
/// snapshot for the lifetime of this value.
#[derive(Debug)]
pub struct Atlas<S = HttpReligionSource> {
    client: Client,
    resolver: Resolver<S>,
    locale: &'static Locale,
}

impl Atlas<HttpReligionSource> {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = Client::new(&settings.api_url, settings.timeout)?;
        let source = HttpReligionSource::new(&settings.religion_url, settings.timeout)?;
        Ok(Self::new(client, Resolver::new(source), map_locale(&settings.locale)))
    }
}

impl<S: ReligionSource> Atlas<S> {
    pub fn new(client: Client, resolver: Resolver<S>, locale: &'static Locale) -> Self {
        Self {
            client,
            resolver,
            locale,
        }
    }

    pub fn resolver(&self) -> &Resolver<S> {
        &self.resolver
    }

    pub fn locale(&self) -> &'static Locale {
        self.locale
    }

    /// All countries with the listing projection. An unreachable API yields
    /// an empty list.
    pub fn countries(&self) -> Vec<Country> {
        match self.client.fetch_all(LIST_FIELDS) {
            Ok(countries) => {
                log::info!("fetched {} countries", countries.len());
                countries
            }
            Err(e) => {
                log::warn!("country list unavailable: {:#}", e);
                Vec::new()
            }
        }
    }

    /// Details page for `code`, enriched with religion data.
    ///
    /// Unknown codes, unrenderable records, and failed fetches all end as
    /// [`AtlasError::NotFound`].
    pub fn details(&self, code: &str) -> Result<CountryDetails, AtlasError> {
        let code = code.trim();
        if !CODE_RE.is_match(code) {
            return Err(AtlasError::InvalidCode(code.to_string()));
        }
        let not_found = || AtlasError::NotFound {
            code: code.to_ascii_uppercase(),
        };

        let country = match self.client.fetch_by_code(code, DETAIL_FIELDS) {
            Ok(Some(c)) => c,
            Ok(None) => return Err(not_found()),
            Err(e) => {
                log::warn!("country {} unavailable: {:#}", code, e);
                return Err(not_found());
            }
        };
        if !country.is_renderable() {
            return Err(not_found());
        }

        let religion = self.religion_fallback(&country, code);
        CountryDetails::build(&country, religion, self.locale)
    }

    /// Resolver data for a record whose own religion field is absent or
    /// empty. `code` stands in for a missing `cca3`.
    pub fn religion_fallback(&self, country: &Country, code: &str) -> Option<&ReligionBreakdown> {
        if format_religions(country.religions.as_ref()) != NOT_AVAILABLE {
            return None;
        }
        let cca3 = Some(country.cca3.as_str())
            .filter(|c| !c.is_empty())
            .unwrap_or(code);
        self.religion(cca3, Some(country.region.as_str()))
    }

    /// Religion breakdown for a code, falling back to its region.
    pub fn religion(&self, cca3: &str, region: Option<&str>) -> Option<&ReligionBreakdown> {
        self.resolver
            .resolve(Some(cca3), region.filter(|r| !r.trim().is_empty()))
    }
}
