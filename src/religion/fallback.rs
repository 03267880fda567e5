//! Static religion tables used when the remote snapshot has no row for a
//! country. Shares are percentages of the population.

use super::ReligionBreakdown;
use ahash::AHashMap;
use std::sync::LazyLock;

type Table = &'static [(&'static str, &'static [(&'static str, f64)])];

const BY_COUNTRY: Table = &[
    ("ARG", &[("Christianity", 88.0), ("Unaffiliated", 10.0), ("Other religions", 2.0)]),
    ("AUS", &[("Christianity", 44.0), ("Unaffiliated", 39.0), ("Islam", 3.0), ("Hinduism", 2.0), ("Buddhism", 2.0), ("Other religions", 10.0)]),
    ("BGD", &[("Islam", 91.0), ("Hinduism", 8.0), ("Buddhism", 0.6), ("Christianity", 0.3), ("Other religions", 0.1)]),
    ("BRA", &[("Christianity", 89.0), ("Unaffiliated", 8.0), ("Other religions", 3.0)]),
    ("CAN", &[("Christianity", 53.0), ("Unaffiliated", 35.0), ("Islam", 5.0), ("Hinduism", 3.0), ("Buddhism", 1.0), ("Other religions", 3.0)]),
    ("CHN", &[("Unaffiliated", 52.0), ("Folk religions", 21.0), ("Buddhism", 18.0), ("Christianity", 5.0), ("Islam", 2.0), ("Other religions", 2.0)]),
    ("DEU", &[("Christianity", 51.0), ("Unaffiliated", 40.0), ("Islam", 6.0), ("Other religions", 3.0)]),
    ("EGY", &[("Islam", 90.0), ("Christianity", 10.0)]),
    ("ESP", &[("Christianity", 69.0), ("Unaffiliated", 28.0), ("Islam", 2.0), ("Other religions", 1.0)]),
    ("ETH", &[("Christianity", 62.0), ("Islam", 35.0), ("Folk religions", 2.0), ("Other religions", 1.0)]),
    ("FRA", &[("Christianity", 47.0), ("Unaffiliated", 40.0), ("Islam", 8.0), ("Buddhism", 2.0), ("Judaism", 1.0), ("Other religions", 2.0)]),
    ("GBR", &[("Christianity", 46.0), ("Unaffiliated", 37.0), ("Islam", 6.0), ("Hinduism", 2.0), ("Sikhism", 1.0), ("Buddhism", 1.0), ("Other religions", 7.0)]),
    ("IDN", &[("Islam", 87.0), ("Christianity", 10.0), ("Hinduism", 2.0), ("Buddhism", 1.0)]),
    ("IND", &[("Hinduism", 79.8), ("Islam", 14.2), ("Christianity", 2.3), ("Buddhism", 0.7), ("Other religions", 3.0)]),
    ("IRN", &[("Islam", 99.0), ("Other religions", 1.0)]),
    ("IRQ", &[("Islam", 97.0), ("Christianity", 1.0), ("Other religions", 2.0)]),
    ("ITA", &[("Christianity", 79.0), ("Unaffiliated", 15.0), ("Islam", 4.0), ("Other religions", 2.0)]),
    ("JPN", &[("Folk religions", 48.0), ("Buddhism", 46.0), ("Christianity", 1.0), ("Other religions", 5.0)]),
    ("MEX", &[("Christianity", 89.0), ("Unaffiliated", 8.0), ("Other religions", 3.0)]),
    ("NGA", &[("Islam", 53.0), ("Christianity", 46.0), ("Folk religions", 1.0)]),
    ("PAK", &[("Islam", 96.5), ("Hinduism", 2.1), ("Christianity", 1.3), ("Other religions", 0.1)]),
    ("RUS", &[("Christianity", 71.0), ("Unaffiliated", 15.0), ("Islam", 10.0), ("Other religions", 4.0)]),
    ("SAU", &[("Islam", 93.0), ("Christianity", 4.0), ("Hinduism", 2.0), ("Other religions", 1.0)]),
    ("TUR", &[("Islam", 99.0), ("Other religions", 1.0)]),
    ("USA", &[("Christianity", 63.0), ("Unaffiliated", 29.0), ("Judaism", 2.0), ("Islam", 1.0), ("Buddhism", 1.0), ("Hinduism", 1.0), ("Other religions", 3.0)]),
    ("ZAF", &[("Christianity", 79.0), ("Unaffiliated", 15.0), ("Islam", 2.0), ("Hinduism", 1.0), ("Folk religions", 1.0), ("Other religions", 2.0)]),
];

// Keys match the API's `region` values exactly.
const BY_REGION: Table = &[
    ("Africa", &[("Christianity", 49.0), ("Islam", 42.0), ("Folk religions", 6.0), ("Unaffiliated", 2.0), ("Other religions", 1.0)]),
    ("Americas", &[("Christianity", 76.0), ("Unaffiliated", 19.0), ("Islam", 1.0), ("Judaism", 1.0), ("Other religions", 3.0)]),
    ("Asia", &[("Islam", 27.0), ("Hinduism", 25.0), ("Unaffiliated", 21.0), ("Buddhism", 12.0), ("Christianity", 7.0), ("Folk religions", 6.0), ("Other religions", 2.0)]),
    ("Europe", &[("Christianity", 74.0), ("Unaffiliated", 19.0), ("Islam", 4.0), ("Other religions", 3.0)]),
    ("Oceania", &[("Christianity", 67.0), ("Unaffiliated", 24.0), ("Hinduism", 2.0), ("Buddhism", 2.0), ("Islam", 1.0), ("Other religions", 4.0)]),
];

fn build(table: Table) -> AHashMap<&'static str, ReligionBreakdown> {
    table
        .iter()
        .map(|(key, rows)| {
            let breakdown = rows.iter().map(|(name, v)| (name.to_string(), *v)).collect();
            (*key, breakdown)
        })
        .collect()
}

static COUNTRIES: LazyLock<AHashMap<&'static str, ReligionBreakdown>> =
    LazyLock::new(|| build(BY_COUNTRY));
static REGIONS: LazyLock<AHashMap<&'static str, ReligionBreakdown>> =
    LazyLock::new(|| build(BY_REGION));

/// Static breakdown for an upper-case ISO3 code.
pub fn by_country(cca3: &str) -> Option<&'static ReligionBreakdown> {
    COUNTRIES.get(cca3)
}

/// Static breakdown for an API region name (`Europe`, `Asia`, ...).
pub fn by_region(region: &str) -> Option<&'static ReligionBreakdown> {
    REGIONS.get(region)
}

/// Codes covered by the per-country table.
pub fn country_codes() -> impl Iterator<Item = &'static str> {
    BY_COUNTRY.iter().map(|(code, _)| *code)
}
