//! Display models for the list cards and the details page.

use crate::error::AtlasError;
use crate::format::{self, BoundingBox, NOT_AVAILABLE};
use crate::models::Country;
use crate::religion::ReligionBreakdown;
use num_format::Locale;
use serde::{Deserialize, Serialize};

/// One card of the country listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryCard {
    pub code: String,
    pub name: String,
    /// Subregion when known, else region.
    pub region: String,
    pub capital: String,
    pub population: String,
    pub currency: String,
    pub flag_png: String,
    pub flag_alt: String,
}

impl CountryCard {
    pub fn from_country(c: &Country, locale: &Locale) -> Self {
        Self {
            code: c.cca3.clone(),
            name: c.name.common.clone(),
            region: c.region_label().to_string(),
            capital: format::format_text(
                c.capital.as_ref().and_then(|v| v.first()).map(String::as_str),
            ),
            population: format::format_population(c.population, locale),
            currency: format::primary_currency(c.currencies.as_ref()),
            flag_png: c.flags.png.clone(),
            flag_alt: c
                .flags
                .alt
                .clone()
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| format!("{} flag", c.name.common)),
        }
    }
}

/// Everything the details page shows, already formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryDetails {
    pub code: String,
    pub name: String,
    pub official_name: String,
    pub native_names: String,
    pub flag_emoji: Option<String>,
    pub flag_svg: String,
    pub flag_alt: String,
    pub coat_of_arms: Option<String>,
    pub region: String,
    pub subregion: String,
    pub continents: String,
    pub capital: String,
    pub population: String,
    pub area: String,
    pub density: String,
    pub languages: String,
    pub currencies: String,
    pub religions: String,
    pub demonym: String,
    pub calling_code: String,
    pub timezones: String,
    pub borders: String,
    pub tld: String,
    pub alt_spellings: String,
    pub gini: String,
    pub coordinates: String,
    pub capital_coordinates: String,
    pub independent: String,
    pub un_member: String,
    pub landlocked: String,
    pub start_of_week: String,
    pub driving_side: String,
    pub fifa: String,
    pub postal_code: String,
    pub google_maps: Option<String>,
    pub open_street_maps: Option<String>,
    pub map_box: Option<BoundingBox>,
    pub map_embed_url: Option<String>,
}

impl CountryDetails {
    /// Format a record for the details page.
    ///
    /// `religion_fallback` is used only when the record carries no religion
    /// data of its own. Fails with [`AtlasError::NotFound`] when the record
    /// lacks a common name or an SVG flag.
    pub fn build(
        c: &Country,
        religion_fallback: Option<&ReligionBreakdown>,
        locale: &Locale,
    ) -> Result<Self, AtlasError> {
        if !c.is_renderable() {
            return Err(AtlasError::NotFound {
                code: c.cca3.clone(),
            });
        }

        let religions = match format::format_religions(c.religions.as_ref()) {
            s if s == NOT_AVAILABLE => format::format_breakdown(religion_fallback),
            s => s,
        };

        // Map centres on the capital when known.
        let centre = c
            .capital_info
            .as_ref()
            .and_then(|ci| ci.latlng.as_deref())
            .filter(|ll| ll.len() >= 2)
            .or(c.latlng.as_deref());

        Ok(Self {
            code: c.cca3.clone(),
            name: c.name.common.clone(),
            official_name: format::format_text(Some(c.name.official.as_str())),
            native_names: format::format_native_names(c.name.native_name.as_ref()),
            flag_emoji: c.flag.clone(),
            flag_svg: c.flags.svg.clone(),
            flag_alt: c
                .flags
                .alt
                .clone()
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| c.name.common.clone()),
            coat_of_arms: c.coat_of_arms.as_ref().and_then(|a| a.svg.clone().or(a.png.clone())),
            region: format::format_text(Some(c.region.as_str())),
            subregion: format::format_text(c.subregion.as_deref()),
            continents: format::format_list(c.continents.as_deref()),
            capital: format::format_list(c.capital.as_deref()),
            population: format::format_population(c.population, locale),
            area: format::format_area(c.area),
            density: format::format_population_density(c.population, c.area),
            languages: format::format_languages(c.languages.as_ref()),
            currencies: format::format_currencies(c.currencies.as_ref()),
            religions,
            demonym: format::format_demonym(c.demonyms.as_ref().and_then(|d| d.eng.as_ref())),
            calling_code: format::format_calling_code(c.idd.as_ref()),
            timezones: format::format_list(c.timezones.as_deref()),
            borders: format::format_list(c.borders.as_deref()),
            tld: format::format_list(c.tld.as_deref()),
            alt_spellings: format::format_list(c.alt_spellings.as_deref()),
            gini: format::format_gini(c.gini.as_ref()),
            coordinates: format::format_coordinates(c.latlng.as_deref()),
            capital_coordinates: format::format_coordinates(
                c.capital_info.as_ref().and_then(|ci| ci.latlng.as_deref()),
            ),
            independent: format::format_flag(c.independent),
            un_member: format::format_flag(c.un_member),
            landlocked: format::format_flag(c.landlocked),
            start_of_week: format::format_text(c.start_of_week.as_deref()),
            driving_side: format::format_text(c.car.as_ref().and_then(|car| car.side.as_deref())),
            fifa: format::format_text(c.fifa.as_deref()),
            postal_code: format::format_text(
                c.postal_code.as_ref().and_then(|p| p.format.as_deref()),
            ),
            google_maps: c.maps.as_ref().and_then(|m| m.google_maps.clone()),
            open_street_maps: c.maps.as_ref().and_then(|m| m.open_street_maps.clone()),
            map_box: format::embed_bounding_box(centre),
            map_embed_url: format::osm_embed_url(centre),
        })
    }

    /// Label/value pairs in page order, for plain-text rendering.
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Official name", self.official_name.as_str()),
            ("Native names", self.native_names.as_str()),
            ("Code", self.code.as_str()),
            ("Region", self.region.as_str()),
            ("Subregion", self.subregion.as_str()),
            ("Continents", self.continents.as_str()),
            ("Capital", self.capital.as_str()),
            ("Population", self.population.as_str()),
            ("Area", self.area.as_str()),
            ("Density", self.density.as_str()),
            ("Languages", self.languages.as_str()),
            ("Currencies", self.currencies.as_str()),
            ("Religions", self.religions.as_str()),
            ("Demonym", self.demonym.as_str()),
            ("Calling code", self.calling_code.as_str()),
            ("Timezones", self.timezones.as_str()),
            ("Borders", self.borders.as_str()),
            ("Top-level domains", self.tld.as_str()),
            ("Alt spellings", self.alt_spellings.as_str()),
            ("Gini", self.gini.as_str()),
            ("Coordinates", self.coordinates.as_str()),
            ("Capital coordinates", self.capital_coordinates.as_str()),
            ("Independent", self.independent.as_str()),
            ("UN member", self.un_member.as_str()),
            ("Landlocked", self.landlocked.as_str()),
            ("Start of week", self.start_of_week.as_str()),
            ("Driving side", self.driving_side.as_str()),
            ("FIFA code", self.fifa.as_str()),
            ("Postal code", self.postal_code.as_str()),
            ("Map", self.map_embed_url.as_deref().unwrap_or(NOT_AVAILABLE)),
        ]
    }
}
