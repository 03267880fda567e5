//! Display formatting for country records.
//!
//! Every function here is pure and total: absent, empty, or malformed input
//! yields [`NOT_AVAILABLE`] instead of an error, so one bad field never stops
//! the rest of a record from rendering.

use crate::models::{Currency, Demonym, Entries, Idd, NativeName, Religions, Share};
use crate::religion::ReligionBreakdown;
use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sentinel shown for any value that is absent or unusable.
pub const NOT_AVAILABLE: &str = "N/A";

/// Half-width of the map embed box, in degrees.
const EMBED_SPAN_DEG: f64 = 6.0;

fn na() -> String {
    NOT_AVAILABLE.to_string()
}

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en,
    }
}

/// Population with grouped digits, e.g. `83,240,525`.
pub fn format_population(population: u64, locale: &Locale) -> String {
    population.to_formatted_string(locale)
}

/// Area with its unit, e.g. `357114 km^2`.
pub fn format_area(area: Option<f64>) -> String {
    match area {
        Some(a) if a.is_finite() => format!("{} km^2", a),
        _ => na(),
    }
}

/// `lat, lon` rounded to two decimals. Needs at least two components.
pub fn format_coordinates(latlng: Option<&[f64]>) -> String {
    match latlng {
        Some([lat, lon, ..]) if lat.is_finite() && lon.is_finite() => {
            format!("{:.2}, {:.2}", lat, lon)
        }
        _ => na(),
    }
}

/// Timezones, borders, continents, alt spellings, top-level domains.
pub fn format_list(items: Option<&[String]>) -> String {
    match items {
        Some(items) if !items.is_empty() => items.join(", "),
        _ => na(),
    }
}

pub fn format_languages(languages: Option<&Entries<String>>) -> String {
    match languages {
        Some(langs) if !langs.is_empty() => langs
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        _ => na(),
    }
}

/// How a numeric religion share should be read.
///
/// The thresholds are heuristic: exactly `1` is a fraction (100%) and exactly
/// `100` is a percentage, never a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareScale {
    /// `v <= 1`: fraction of the population.
    Fraction,
    /// `1 < v <= 100`: already a percentage.
    Percent,
    /// `v > 100`: a raw head count.
    Count,
}

impl ShareScale {
    pub fn classify(value: f64) -> Self {
        if value <= 1.0 {
            ShareScale::Fraction
        } else if value <= 100.0 {
            ShareScale::Percent
        } else {
            ShareScale::Count
        }
    }
}

/// Format one numeric share according to its inferred scale:
/// `0.6` -> `60.0%`, `45` -> `45.0%`, `1500` -> `1,500`.
pub fn format_share(value: f64) -> String {
    match ShareScale::classify(value) {
        ShareScale::Fraction => format!("{:.1}%", value * 100.0),
        ShareScale::Percent => format!("{:.1}%", value),
        ShareScale::Count => (value.round() as i64).to_formatted_string(&Locale::en),
    }
}

/// Religions of a record: the breakdown sorted by share (largest first),
/// else the free-text label, else the sentinel.
pub fn format_religions(religions: Option<&Religions>) -> String {
    match religions {
        Some(Religions::Breakdown(entries)) if !entries.is_empty() => join_ranked(
            entries
                .iter()
                .map(|(name, share)| (name, rank_value(share)))
                .collect(),
        ),
        Some(Religions::Label(label)) if !label.trim().is_empty() => label.trim().to_string(),
        _ => na(),
    }
}

/// Same ordering and formatting as [`format_religions`], for resolver output.
pub fn format_breakdown(breakdown: Option<&ReligionBreakdown>) -> String {
    match breakdown {
        Some(b) if !b.is_empty() => join_ranked(
            b.iter()
                .map(|(name, v)| (name.as_str(), Ok(*v)))
                .collect(),
        ),
        _ => na(),
    }
}

fn rank_value(share: &Share) -> Result<f64, &str> {
    match share.as_number() {
        Some(v) => Ok(v),
        None => match share {
            Share::Text(raw) => Err(raw.trim()),
            Share::Number(_) => Err(""),
        },
    }
}

// Numeric entries first (descending), non-numeric after; ties by name.
fn join_ranked(mut entries: Vec<(&str, Result<f64, &str>)>) -> String {
    entries.sort_by(|(an, av), (bn, bv)| match (av, bv) {
        (Ok(a), Ok(b)) => b.total_cmp(a).then_with(|| an.cmp(bn)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => an.cmp(bn),
    });
    entries
        .into_iter()
        .map(|(name, value)| match value {
            Ok(v) => format!("{} ({})", name, format_share(v)),
            Err(raw) if !raw.is_empty() => format!("{} ({})", name, raw),
            Err(_) => name.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn currency_label(currency: &Currency) -> String {
    match currency.symbol.as_deref().map(str::trim) {
        Some(sym) if !sym.is_empty() => format!("{} ({})", currency.name, sym),
        _ => currency.name.clone(),
    }
}

/// All currencies, e.g. `Euro (€), Swiss franc (Fr.)`.
pub fn format_currencies(currencies: Option<&Entries<Currency>>) -> String {
    match currencies {
        Some(c) if !c.is_empty() => c.values().map(currency_label).collect::<Vec<_>>().join(", "),
        _ => na(),
    }
}

/// First currency in document order, for list cards.
pub fn primary_currency(currencies: Option<&Entries<Currency>>) -> String {
    currencies
        .and_then(|c| c.first())
        .map(|(_, cur)| currency_label(cur))
        .unwrap_or_else(na)
}

/// Distinct native common names in first-seen order.
pub fn format_native_names(names: Option<&Entries<NativeName>>) -> String {
    let Some(names) = names else {
        return na();
    };
    let mut seen: Vec<&str> = Vec::new();
    for n in names.values() {
        let common = n.common.trim();
        if !common.is_empty() && !seen.contains(&common) {
            seen.push(common);
        }
    }
    if seen.is_empty() { na() } else { seen.join(", ") }
}

/// Root plus the first suffix (`+4` + `9` -> `+49`), or the root alone.
pub fn format_calling_code(idd: Option<&Idd>) -> String {
    let Some(root) = idd
        .and_then(|i| i.root.as_deref())
        .map(str::trim)
        .filter(|r| !r.is_empty())
    else {
        return na();
    };
    match idd.and_then(|i| i.suffixes.as_ref()).and_then(|s| s.first()) {
        Some(suffix) => format!("{}{}", root, suffix.trim()),
        None => root.to_string(),
    }
}

/// Latest Gini value as `value (year)`.
pub fn format_gini(gini: Option<&Entries<Option<f64>>>) -> String {
    let Some(gini) = gini else {
        return na();
    };
    let latest = gini
        .iter()
        .filter_map(|(year, value)| year.trim().parse::<i32>().ok().map(|y| (y, value)))
        .max_by_key(|(y, _)| *y);
    match latest {
        Some((year, Some(value))) if value.is_finite() => format!("{} ({})", value, year),
        _ => na(),
    }
}

/// Inhabitants per km², one decimal.
pub fn format_population_density(population: u64, area: Option<f64>) -> String {
    match area {
        Some(a) if a.is_finite() && a > 0.0 => {
            format!("{:.1} per km^2", population as f64 / a)
        }
        _ => na(),
    }
}

/// `Yes`/`No` for boolean attributes.
pub fn format_flag(value: Option<bool>) -> String {
    match value {
        Some(true) => "Yes".into(),
        Some(false) => "No".into(),
        None => na(),
    }
}

/// Trimmed free text.
pub fn format_text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => na(),
    }
}

/// English demonym as `female / male`, collapsed when both forms match.
pub fn format_demonym(demonym: Option<&Demonym>) -> String {
    let Some(d) = demonym else {
        return na();
    };
    let (f, m) = (d.f.trim(), d.m.trim());
    match (f.is_empty(), m.is_empty()) {
        (true, true) => na(),
        (false, true) => f.to_string(),
        (true, false) => m.to_string(),
        (false, false) if f == m => f.to_string(),
        (false, false) => format!("{} / {}", f, m),
    }
}

/// Geographic box used by the map embed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// `minLon,minLat,maxLon,maxLat`, the order OpenStreetMap's `bbox` expects.
    pub fn to_query_param(&self) -> String {
        format!(
            "{},{},{},{}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }

    /// OpenStreetMap embed URL for this box with a marker at `lat, lon`.
    pub fn embed_url(&self, lat: f64, lon: f64) -> String {
        format!(
            "https://www.openstreetmap.org/export/embed.html?bbox={}&layer=mapnik&marker={},{}",
            self.to_query_param(),
            lat,
            lon
        )
    }
}

/// ±6° box around `[lat, lon]`, clamped to valid coordinates.
pub fn embed_bounding_box(latlng: Option<&[f64]>) -> Option<BoundingBox> {
    match latlng {
        Some([lat, lon, ..]) if lat.is_finite() && lon.is_finite() => Some(BoundingBox {
            min_lon: (lon - EMBED_SPAN_DEG).clamp(-180.0, 180.0),
            min_lat: (lat - EMBED_SPAN_DEG).clamp(-90.0, 90.0),
            max_lon: (lon + EMBED_SPAN_DEG).clamp(-180.0, 180.0),
            max_lat: (lat + EMBED_SPAN_DEG).clamp(-90.0, 90.0),
        }),
        _ => None,
    }
}

/// OpenStreetMap embed URL centred on `[lat, lon]` with a marker.
pub fn osm_embed_url(latlng: Option<&[f64]>) -> Option<String> {
    let bbox = embed_bounding_box(latlng)?;
    let (lat, lon) = (latlng?[0], latlng?[1]);
    Some(bbox.embed_url(lat, lon))
}
