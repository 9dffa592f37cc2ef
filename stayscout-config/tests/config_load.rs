use serial_test::serial;
use stayscout_config::StayscoutConfigLoader;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// Helper to write a YAML file in a temp dir and return its path.
fn write_yaml(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let p = tmp.path().join(name);
    fs::write(&p, yaml).expect("write yaml");
    p
}

#[test]
#[serial]
fn loads_full_file_with_env_expansion() {
    let tmp = TempDir::new().unwrap();

    let file_yaml = r#"
search:
  results_url: "https://www.booking.com/searchresults.en-us.html?ss=Tokyo&checkin=2026-07-01&checkout=2026-07-07&group_adults=2"
places:
  api_key: "${STAY_PLACES_KEY}"
  nearby_radius_m: 750
storage:
  listings_path: "out/hotels_data.json"
browser:
  headless: false
logging:
  stderr: true
  filter: "debug"
"#;
    let p = write_yaml(&tmp, "stayscout.yaml", file_yaml);

    temp_env::with_var("STAY_PLACES_KEY", Some("k-123"), || {
        let config = StayscoutConfigLoader::new()
            .with_file(&p)
            .load()
            .expect("load stayscout config");

        assert!(config.search.results_url.contains("ss=Tokyo"));
        assert_eq!(config.places.api_key, "k-123");
        assert_eq!(config.places.nearby_radius_m, 750);
        assert_eq!(config.places.nearby_category, "restaurant");
        assert_eq!(
            config.storage.listings_path,
            PathBuf::from("out/hotels_data.json")
        );
        assert_eq!(
            config.storage.review_path,
            PathBuf::from("google_review_data.json")
        );
        assert!(!config.browser.headless);
        assert!(config.logging.stderr);
        assert_eq!(config.logging.filter, "debug");
    });
}

#[test]
#[serial]
fn defaults_fill_optional_sections() {
    let config = StayscoutConfigLoader::new()
        .with_yaml_str(
            r#"
search:
  results_url: "https://example.com/search"
places:
  api_key: "demo"
"#,
        )
        .load()
        .expect("minimal config loads");

    assert_eq!(config.browser.webdriver_url, "http://localhost:9515");
    assert!(config.browser.headless);
    assert_eq!(
        config.places.endpoint,
        "https://maps.googleapis.com/maps/api/place"
    );
    assert_eq!(config.storage.listings_path, PathBuf::from("hotels_data.json"));
    assert!(!config.logging.json);
}
