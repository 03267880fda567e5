//! Parser for the religion-by-country CSV snapshot.
//!
//! The feed has one row per country with absolute head counts per religion
//! category and an "All Religions" total. Columns are located by header name
//! so reordered files still parse; when a category header is missing the
//! historical positional layout is assumed instead.

use super::{ReligionBreakdown, RemoteReligionData};
use csv::{ReaderBuilder, StringRecord, Trim};
use regex::Regex;
use std::sync::LazyLock;

/// Religion categories carried by the feed, in positional-layout order.
pub const CATEGORY_NAMES: [&str; 8] = [
    "Christianity",
    "Islam",
    "Unaffiliated",
    "Hinduism",
    "Buddhism",
    "Folk religions",
    "Other religions",
    "Judaism",
];

/// Rows shorter than this cannot hold the positional layout.
const MIN_CELLS: usize = 12;

static ISO3_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("valid ISO3 regex"));

/// Column positions resolved from the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub code: Option<usize>,
    pub total: Option<usize>,
    /// `Some` only when every category header was found.
    pub categories: Option<[usize; 8]>,
}

impl Columns {
    /// Resolve columns from lower-cased header names.
    pub fn locate(header: &[String]) -> Self {
        let code = position(header, |h| h.contains("iso3"))
            .or_else(|| position(header, |h| h.contains("code")));
        let total = position(header, |h| h.contains("all religions"));

        let mut categories = [0usize; 8];
        let mut all_found = true;
        for (slot, name) in categories.iter_mut().zip(CATEGORY_NAMES) {
            let name = name.to_lowercase();
            match position(header, |h| h == name) {
                Some(i) => *slot = i,
                None => all_found = false,
            }
        }

        Self {
            code,
            total,
            categories: all_found.then_some(categories),
        }
    }
}

fn position(header: &[String], pred: impl Fn(&str) -> bool) -> Option<usize> {
    header.iter().position(|h| pred(h.as_str()))
}

/// Parse a count cell: thousands separators and stray quotes are ignored,
/// anything unparsable counts as zero.
pub fn parse_count(cell: &str) -> f64 {
    cell.replace([',', '"'], "")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// One decimal, rounded on the exact binary value (`0.15` is `0.1499..` and
/// rounds down). Exact halves such as `0.25` round up.
fn round1(v: f64) -> f64 {
    let quarters = v * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        return (v * 10.0).round() / 10.0;
    }
    format!("{:.1}", v).parse().unwrap_or(0.0)
}

/// Parse the whole CSV document into per-country percentage breakdowns.
///
/// Never fails: unusable rows are skipped and a document without data rows
/// yields an empty map. Each physical line is read on its own, so an
/// unbalanced quote only costs the line it appears on.
pub fn parse_religion_csv(raw: &str) -> RemoteReligionData {
    let builder = line_reader();
    let mut records = raw
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| read_line(&builder, line));

    let mut out = RemoteReligionData::default();
    let Some(header) = records.next() else {
        return out;
    };
    let header: Vec<String> = header.iter().map(str::to_lowercase).collect();
    let columns = Columns::locate(&header);

    let mut skipped = 0usize;
    for record in records {
        if record.iter().all(str::is_empty) {
            continue;
        }
        match parse_row(&record, &columns) {
            Some((code, breakdown)) => {
                out.insert(code, breakdown);
            }
            None => skipped += 1,
        }
    }
    log::debug!(
        "religion csv: {} countries parsed, {} rows skipped",
        out.len(),
        skipped
    );
    out
}

fn line_reader() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true).trim(Trim::All);
    builder
}

fn read_line(builder: &ReaderBuilder, line: &str) -> Option<StringRecord> {
    match builder.from_reader(line.as_bytes()).records().next()? {
        Ok(rec) => Some(rec),
        Err(e) => {
            log::debug!("skipping unreadable religion csv line: {}", e);
            None
        }
    }
}

/// One data row -> `(ISO3, breakdown)`, or `None` if the row is unusable.
pub fn parse_row(cells: &StringRecord, columns: &Columns) -> Option<(String, ReligionBreakdown)> {
    let len = cells.len();
    if len < MIN_CELLS {
        return None;
    }
    let cell = |i: usize| cells.get(i).unwrap_or("");

    let code = columns
        .code
        .map(cell)
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| cell(len - 1))
        .to_uppercase();
    if !ISO3_RE.is_match(&code) {
        return None;
    }

    let total = parse_count(cell(columns.total.unwrap_or(len - 3)));
    if total <= 0.0 {
        return None;
    }

    let counts: Vec<f64> = match &columns.categories {
        Some(idx) => idx.iter().map(|&i| parse_count(cell(i))).collect(),
        None => (len - 11..len - 3).map(|i| parse_count(cell(i))).collect(),
    };

    let breakdown: ReligionBreakdown = CATEGORY_NAMES
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0.0)
        .map(|(name, count)| (name.to_string(), round1(count / total * 100.0)))
        .filter(|(_, share)| *share > 0.0)
        .collect();

    if breakdown.is_empty() {
        None
    } else {
        Some((code, breakdown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_count_strips_separators_and_quotes() {
        assert_eq!(parse_count("1,234,567"), 1_234_567.0);
        assert_eq!(parse_count("\"42\""), 42.0);
        assert_eq!(parse_count(" 7.5 "), 7.5);
        assert_eq!(parse_count("n/a"), 0.0);
        assert_eq!(parse_count(""), 0.0);
    }

    #[test]
    fn locate_prefers_iso3_over_code() {
        let header: Vec<String> = ["country code", "name", "iso3", "all religions"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let cols = Columns::locate(&header);
        assert_eq!(cols.code, Some(2));
        assert_eq!(cols.total, Some(3));
        assert_eq!(cols.categories, None);
    }

    #[test]
    fn round1_uses_the_exact_value() {
        assert_eq!(round1(15.0 / 10000.0 * 100.0), 0.1);
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(0.75), 0.8);
        assert_eq!(round1(52.2875), 52.3);
        assert_eq!(round1(40.0), 40.0);
    }
}
