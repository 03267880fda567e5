use country_atlas::AtlasError;
use country_atlas::models::{Country, Religions};
use country_atlas::religion::ReligionBreakdown;
use country_atlas::view::{CountryCard, CountryDetails};
use num_format::Locale;

const SWITZERLAND: &str = r#"
{
  "name": {
    "common": "Switzerland",
    "official": "Swiss Confederation",
    "nativeName": {
      "fra": {"official": "Confédération suisse", "common": "Suisse"},
      "gsw": {"official": "Schweizerische Eidgenossenschaft", "common": "Schweiz"},
      "ita": {"official": "Confederazione Svizzera", "common": "Svizzera"},
      "roh": {"official": "Confederaziun svizra", "common": "Svizra"}
    }
  },
  "cca3": "CHE",
  "region": "Europe",
  "subregion": "Western Europe",
  "population": 8654622,
  "area": 41284.0,
  "capital": ["Bern"],
  "currencies": {"CHF": {"name": "Swiss franc", "symbol": "Fr."}},
  "languages": {"fra": "French", "gsw": "Swiss German", "ita": "Italian", "roh": "Romansh"},
  "idd": {"root": "+4", "suffixes": ["1"]},
  "latlng": [47.0, 8.0],
  "capitalInfo": {"latlng": [46.92, 7.47]},
  "landlocked": true,
  "gini": {"2018": 33.1},
  "flag": "🇨🇭",
  "flags": {"png": "https://flagcdn.com/w320/ch.png", "svg": "https://flagcdn.com/ch.svg"}
}"#;

fn switzerland() -> Country {
    serde_json::from_str(SWITZERLAND).unwrap()
}

fn fallback() -> ReligionBreakdown {
    [("Christianity".to_string(), 62.0), ("Unaffiliated".to_string(), 31.0)]
        .into_iter()
        .collect()
}

#[test]
fn details_format_every_field() {
    let d = CountryDetails::build(&switzerland(), Some(&fallback()), &Locale::en).unwrap();
    assert_eq!(d.name, "Switzerland");
    assert_eq!(d.native_names, "Suisse, Schweiz, Svizzera, Svizra");
    assert_eq!(d.population, "8,654,622");
    assert_eq!(d.area, "41284 km^2");
    assert_eq!(d.density, "209.6 per km^2");
    assert_eq!(d.languages, "French, Swiss German, Italian, Romansh");
    assert_eq!(d.currencies, "Swiss franc (Fr.)");
    assert_eq!(d.calling_code, "+41");
    assert_eq!(d.gini, "33.1 (2018)");
    assert_eq!(d.coordinates, "47.00, 8.00");
    assert_eq!(d.capital_coordinates, "46.92, 7.47");
    assert_eq!(d.landlocked, "Yes");
    assert_eq!(d.independent, "N/A");
    assert_eq!(d.borders, "N/A");
    assert_eq!(d.flag_alt, "Switzerland");
    assert_eq!(d.religions, "Christianity (62.0%), Unaffiliated (31.0%)");
}

#[test]
fn map_centres_on_capital_then_country() {
    let d = CountryDetails::build(&switzerland(), None, &Locale::en).unwrap();
    let b = d.map_box.unwrap();
    assert!((b.min_lat - 40.92).abs() < 1e-9);
    assert!((b.max_lon - 13.47).abs() < 1e-9);
    assert!(d.map_embed_url.unwrap().ends_with("marker=46.92,7.47"));

    let mut c = switzerland();
    c.capital_info = None;
    let d = CountryDetails::build(&c, None, &Locale::en).unwrap();
    assert!(d.map_embed_url.unwrap().ends_with("marker=47,8"));

    c.latlng = None;
    let d = CountryDetails::build(&c, None, &Locale::en).unwrap();
    assert!(d.map_box.is_none());
    assert!(d.map_embed_url.is_none());
}

#[test]
fn record_religions_win_over_fallback() {
    let mut c = switzerland();
    c.religions = Some(Religions::Label("Mostly Christian".into()));
    let d = CountryDetails::build(&c, Some(&fallback()), &Locale::en).unwrap();
    assert_eq!(d.religions, "Mostly Christian");
}

#[test]
fn no_religion_data_is_sentinel() {
    let d = CountryDetails::build(&switzerland(), None, &Locale::en).unwrap();
    assert_eq!(d.religions, "N/A");
}

#[test]
fn unrenderable_record_is_not_found() {
    let mut c = switzerland();
    c.flags.svg.clear();
    match CountryDetails::build(&c, None, &Locale::en) {
        Err(AtlasError::NotFound { code }) => assert_eq!(code, "CHE"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn rows_cover_the_page() {
    let d = CountryDetails::build(&switzerland(), None, &Locale::de).unwrap();
    let rows = d.rows();
    assert!(rows.contains(&("Population", "8.654.622")));
    assert!(rows.contains(&("Calling code", "+41")));
    assert!(rows.iter().all(|(_, v)| !v.is_empty()));
}

#[test]
fn card_uses_subregion_first_capital_and_primary_currency() {
    let card = CountryCard::from_country(&switzerland(), &Locale::en);
    assert_eq!(card.region, "Western Europe");
    assert_eq!(card.capital, "Bern");
    assert_eq!(card.currency, "Swiss franc (Fr.)");
    assert_eq!(card.population, "8,654,622");
    assert_eq!(card.flag_alt, "Switzerland flag");

    let mut bare = Country::default();
    bare.cca3 = "XXX".into();
    bare.name.common = "Bare".into();
    let card = CountryCard::from_country(&bare, &Locale::en);
    assert_eq!(card.capital, "N/A");
    assert_eq!(card.currency, "N/A");
    assert_eq!(card.region, "");
}

#[test]
fn details_serialize_for_json_output() {
    let d = CountryDetails::build(&switzerland(), None, &Locale::en).unwrap();
    let v = serde_json::to_value(&d).unwrap();
    assert_eq!(v["code"], "CHE");
    assert_eq!(v["calling_code"], "+41");
}
