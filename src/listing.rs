//! Client-side filtering and sorting of the country list.

use crate::models::Country;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Region selector: everything, or one exact region name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionFilter {
    #[default]
    All,
    Named(String),
}

impl RegionFilter {
    pub fn matches(&self, region: &str) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Named(r) => r.trim() == region.trim(),
        }
    }
}

impl FromStr for RegionFilter {
    type Err = Infallible;

    /// `all` (any case) or an empty string selects every region.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(RegionFilter::All)
        } else {
            Ok(RegionFilter::Named(s.to_string()))
        }
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionFilter::All => write!(f, "all"),
            RegionFilter::Named(r) => write!(f, "{}", r),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    None,
    PopulationDesc,
    PopulationAsc,
    AreaDesc,
    AreaAsc,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort key {0:?} (expected none, pop-desc, pop-asc, area-desc, area-asc)")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(SortKey::None),
            "pop-desc" => Ok(SortKey::PopulationDesc),
            "pop-asc" => Ok(SortKey::PopulationAsc),
            "area-desc" => Ok(SortKey::AreaDesc),
            "area-asc" => Ok(SortKey::AreaAsc),
            _ => Err(ParseSortKeyError(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::None => "none",
            SortKey::PopulationDesc => "pop-desc",
            SortKey::PopulationAsc => "pop-asc",
            SortKey::AreaDesc => "area-desc",
            SortKey::AreaAsc => "area-asc",
        };
        f.write_str(s)
    }
}

fn area_of(c: &Country) -> f64 {
    c.area.filter(|a| a.is_finite()).unwrap_or(0.0)
}

impl SortKey {
    fn compare(self, a: &Country, b: &Country) -> Ordering {
        match self {
            SortKey::None => Ordering::Equal,
            SortKey::PopulationDesc => b.population.cmp(&a.population),
            SortKey::PopulationAsc => a.population.cmp(&b.population),
            SortKey::AreaDesc => area_of(b).total_cmp(&area_of(a)),
            SortKey::AreaAsc => area_of(a).total_cmp(&area_of(b)),
        }
    }
}

/// Search, region, and sort selection of the listing view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub region: RegionFilter,
    pub sort: SortKey,
}

impl FilterState {
    /// Back to "everything, unsorted".
    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    /// Name contains the search text (any case) and the region is selected.
    pub fn matches(&self, country: &Country) -> bool {
        country
            .name
            .common
            .to_lowercase()
            .contains(&self.search.to_lowercase())
            && self.region.matches(&country.region)
    }

    /// Filter then sort. Pure: the input is untouched and equal inputs give
    /// equal outputs. The sort is stable, so ties keep API order.
    pub fn apply<'a>(&self, countries: &'a [Country]) -> Vec<&'a Country> {
        let mut out: Vec<&Country> = countries.iter().filter(|c| self.matches(c)).collect();
        if self.sort != SortKey::None {
            out.sort_by(|a, b| self.sort.compare(a, b));
        }
        out
    }
}

/// Distinct non-empty regions, alphabetically.
pub fn regions(countries: &[Country]) -> Vec<String> {
    countries
        .iter()
        .map(|c| c.region.trim())
        .filter(|r| !r.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
