use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

// Nothing listens on the discard port, so remote loads fail fast and the
// static tables answer.
const DEAD_URL: &str = "http://127.0.0.1:9/religion.csv";

fn atlas() -> Command {
    let mut cmd = Command::cargo_bin("atlas").unwrap();
    cmd.env_remove("ATLAS_API_URL")
        .env_remove("ATLAS_RELIGION_URL")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn cli_shows_help() {
    atlas()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("atlas"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("religion"));
}

#[test]
fn list_help_names_sort_keys() {
    atlas()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pop-desc"));
}

#[test]
fn unknown_sort_key_is_rejected() {
    atlas()
        .args(["list", "--sort", "biggest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sort key"));
}

#[test]
fn malformed_code_fails_before_any_request() {
    atlas()
        .args(["--api-url", "http://127.0.0.1:9", "show", "not-a-code"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid country code"));
}

#[test]
fn religion_falls_back_to_country_table() {
    atlas()
        .args(["--religion-url", DEAD_URL, "--timeout-secs", "2", "religion", "jpn"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Folk religions (48.0%), Buddhism (46.0%)",
        ));
}

#[test]
fn religion_falls_back_to_region_table() {
    atlas()
        .args(["--religion-url", DEAD_URL, "--timeout-secs", "2"])
        .args(["religion", "MLT", "--region", "Europe", "--stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Christianity (74.0%)"))
        .stderr(predicate::str::contains("remote snapshot: 0 countries"));
}

#[test]
fn religion_without_any_data() {
    atlas()
        .env("ATLAS_RELIGION_URL", DEAD_URL)
        .args(["religion", "ZZZ", "--region", "Atlantis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No religion data available"));
}

#[test]
fn list_degrades_to_empty_when_api_unreachable() {
    atlas()
        .args(["--api-url", "http://127.0.0.1:9", "--timeout-secs", "2", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 0 of 0 countries"))
        .stdout(predicate::str::contains("No countries match your filters."));
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn show_online_country() {
    atlas()
        .args(["--locale", "de", "show", "DEU"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Germany"))
        .stdout(predicate::str::contains("Calling code"));
}
