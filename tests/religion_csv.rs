use country_atlas::religion::{CATEGORY_NAMES, parse_religion_csv};

const NAMED: &str = "\
Year,Region,Country,iso3,Judaism,Islam,Christianity,Unaffiliated,Hinduism,Buddhism,Folk religions,Other religions,All Religions
2020,Europe,\"Germany, Federal Republic\",DEU,\"200,000\",5000000,40000000,30000000,100000,200000,0,\"1,000,000\",76500000
2020,Africa,\"C\u{f4}te d\"\"Ivoire\",civ,10,4000,4000,1000,0,0,1000,0,10010
2020,Asia,Nowhere,XX1,0,1,1,1,1,1,1,1,8
2020,Asia,Emptyland,EMP,0,0,0,0,0,0,0,0,100
2020,Asia,Zeroland,ZER,0,1,1,1,1,1,1,1,0
2020,Asia,Shortland,SHO,1,1
";

// No category headers: counts are read positionally, the code column is
// found through "code" and the total through "all religions".
const POSITIONAL: &str = "\
Name,iso3,Christians,Muslims,Unaffil,Hindus,Buddhists,Folk,Other,Jews,All Religions,Year,alpha3
Japan,JPN,1000,0,0,0,45000,48000,6000,0,100000,2020,JPN
France,,470,80,400,0,20,0,20,10,1000,2020,fra
";

#[test]
fn named_columns_reordered() {
    let data = parse_religion_csv(NAMED);
    let deu = data.get("DEU").expect("DEU parsed");
    assert_eq!(deu.get("Christianity"), Some(&52.3));
    assert_eq!(deu.get("Unaffiliated"), Some(&39.2));
    assert_eq!(deu.get("Islam"), Some(&6.5));
    assert_eq!(deu.get("Other religions"), Some(&1.3));
    assert_eq!(deu.get("Judaism"), Some(&0.3));
    assert_eq!(deu.get("Hinduism"), Some(&0.1));
    // zero count never appears
    assert_eq!(deu.get("Folk religions"), None);
}

#[test]
fn quoted_fields_and_lowercase_codes() {
    let data = parse_religion_csv(NAMED);
    let civ = data.get("CIV").expect("lower-case code upper-cased");
    assert_eq!(civ.get("Islam"), Some(&40.0));
    assert_eq!(civ.get("Christianity"), Some(&40.0));
    assert_eq!(civ.get("Folk religions"), Some(&10.0));
    assert_eq!(civ.get("Judaism"), Some(&0.1));
}

#[test]
fn unusable_rows_are_discarded() {
    let data = parse_religion_csv(NAMED);
    assert!(!data.contains_key("XX1"), "non-alphabetic code");
    assert!(!data.contains_key("EMP"), "no positive category");
    assert!(!data.contains_key("ZER"), "zero total");
    assert!(!data.contains_key("SHO"), "short row");
    assert_eq!(data.len(), 2);
}

#[test]
fn shares_never_exceed_one_hundred() {
    for (code, breakdown) in parse_religion_csv(NAMED)
        .iter()
        .chain(parse_religion_csv(POSITIONAL).iter())
    {
        let sum: f64 = breakdown.values().sum();
        assert!(sum <= 100.0 + 0.05 * CATEGORY_NAMES.len() as f64, "{code}: {sum}");
        assert!(breakdown.values().all(|v| *v > 0.0), "{code}");
        assert!(breakdown.keys().all(|k| CATEGORY_NAMES.contains(&k.as_str())));
    }
}

#[test]
fn positional_fallback_when_category_headers_missing() {
    let data = parse_religion_csv(POSITIONAL);
    let jpn = data.get("JPN").unwrap();
    assert_eq!(jpn.get("Christianity"), Some(&1.0));
    assert_eq!(jpn.get("Buddhism"), Some(&45.0));
    assert_eq!(jpn.get("Folk religions"), Some(&48.0));
    assert_eq!(jpn.get("Other religions"), Some(&6.0));
    assert_eq!(jpn.len(), 4);
}

#[test]
fn empty_code_cell_falls_back_to_last_cell() {
    let data = parse_religion_csv(POSITIONAL);
    let fra = data.get("FRA").expect("code from last cell");
    assert_eq!(fra.get("Christianity"), Some(&47.0));
    assert_eq!(fra.get("Islam"), Some(&8.0));
    assert_eq!(fra.get("Unaffiliated"), Some(&40.0));
    assert_eq!(fra.get("Judaism"), Some(&1.0));
}

#[test]
fn documents_without_rows_are_empty() {
    assert!(parse_religion_csv("").is_empty());
    assert!(parse_religion_csv("iso3,All Religions\n").is_empty());
    assert!(parse_religion_csv("\n\n\n").is_empty());
    assert!(parse_religion_csv("<html>503 Service Unavailable</html>").is_empty());
}

#[test]
fn crlf_line_endings() {
    let data = parse_religion_csv(&POSITIONAL.replace('\n', "\r\n"));
    assert!(data.contains_key("JPN"));
    assert!(data.contains_key("FRA"));
}

#[test]
fn unbalanced_quote_only_costs_its_own_line() {
    let csv = "\
Country,iso3,Christianity,Islam,Unaffiliated,Hinduism,Buddhism,Folk religions,Other religions,Judaism,All Religions,Year
\"Korea, North,PRK,10,0,80,0,0,10,0,0,100,2020
Germany,DEU,500,100,400,0,0,0,0,0,1000,2020
Iceland,ISL,900,0,100,0,0,0,0,0,1000,2020
";
    let data = parse_religion_csv(csv);
    assert!(!data.contains_key("PRK"));
    assert_eq!(data.get("DEU").and_then(|b| b.get("Christianity")), Some(&50.0));
    assert_eq!(data.get("ISL").and_then(|b| b.get("Christianity")), Some(&90.0));
    assert_eq!(data.len(), 2);
}

#[test]
fn shares_round_on_the_exact_value() {
    let csv = "\
Country,iso3,Christianity,Islam,Unaffiliated,Hinduism,Buddhism,Folk religions,Other religions,Judaism,All Religions,Year
Smallland,SML,9000,15,0,0,0,0,0,0,10000,2020
";
    let sml = parse_religion_csv(csv).remove("SML").unwrap();
    assert_eq!(sml.get("Islam"), Some(&0.1));
    assert_eq!(sml.get("Christianity"), Some(&90.0));
}
