use super::settings::Settings;
use super::{load_config_from, validate};
use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.target.url, "http://0.0.0.0:3000/water");
    assert_eq!(settings.target.timeout(), Duration::from_secs(5));
    assert_eq!(settings.sensor.interval(), Duration::from_millis(1400));
    assert_eq!(settings.sensor.ph_center, 7.0);
    assert_eq!(settings.sensor.ph_spread, 0.6);
    assert_eq!(settings.sensor.tds_center, 500.0);
    assert_eq!(settings.sensor.tds_spread, 60.0);
    assert_eq!(settings.log.level, "info");
    assert!(validate(&settings).is_ok());
}

#[test]
#[serial]
fn test_missing_file_falls_back_to_defaults() {
    let tmp = TempDir::new().expect("create tempdir");
    let path = tmp.path().join("absent.toml");

    let cfg = load_config_from(path.to_str().unwrap()).expect("load_config failed");
    assert_eq!(cfg, Settings::default());
}

#[test]
#[serial]
fn load_config_from_file_overrides_defaults() {
    let tmp = TempDir::new().expect("create tempdir");
    let path = tmp.path().join("default.toml");
    let toml = r#"
        [target]
        url = "http://127.0.0.1:3000/water"

        [sensor]
        interval_seconds = 0.5
        ph_spread = 0.2
    "#;
    fs::write(&path, toml).expect("write config file");

    let cfg = load_config_from(path.to_str().unwrap()).expect("load_config failed");
    assert_eq!(cfg.target.url, "http://127.0.0.1:3000/water");
    assert_eq!(cfg.sensor.interval(), Duration::from_millis(500));
    assert_eq!(cfg.sensor.ph_spread, 0.2);

    // untouched keys keep their defaults
    assert_eq!(cfg.target.timeout_secs, 5.0);
    assert_eq!(cfg.sensor.ph_center, 7.0);
    assert_eq!(cfg.sensor.tds_spread, 60.0);
    assert_eq!(cfg.log.level, "info");
}

#[test]
#[serial]
fn load_config_env_overrides_file() {
    let tmp = TempDir::new().expect("create tempdir");
    let path = tmp.path().join("default.toml");
    fs::write(&path, "[sensor]\ntds_center = 450.0\n").expect("write config file");

    temp_env::with_vars(
        [
            ("MOCK_SENSORS_TARGET__URL", Some("http://10.0.0.7:8080/water")),
            ("MOCK_SENSORS_SENSOR__TDS_CENTER", Some("520.5")),
            ("MOCK_SENSORS_LOG__LEVEL", Some("debug")),
        ],
        || {
            let cfg = load_config_from(path.to_str().unwrap()).expect("load_config failed");
            assert_eq!(cfg.target.url, "http://10.0.0.7:8080/water");
            assert_eq!(cfg.sensor.tds_center, 520.5);
            assert_eq!(cfg.log.level, "debug");
        },
    );
}

#[test]
#[serial]
fn load_config_rejects_negative_interval() {
    let tmp = TempDir::new().expect("create tempdir");
    let path = tmp.path().join("default.toml");
    fs::write(&path, "[sensor]\ninterval_seconds = -1.0\n").expect("write config file");

    let err = load_config_from(path.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("sensor.interval_seconds"));
}

#[test]
fn test_validate_rejects_bad_url() {
    let mut settings = Settings::default();
    settings.target.url = "not a url".to_string();
    assert!(validate(&settings).is_err());

    settings.target.url = "ftp://example.com/water".to_string();
    let err = validate(&settings).unwrap_err();
    assert!(err.to_string().contains("http or https"));
}

#[test]
fn test_validate_rejects_bad_ranges() {
    let mut settings = Settings::default();
    settings.sensor.tds_spread = -5.0;
    assert!(validate(&settings).is_err());

    let mut settings = Settings::default();
    settings.sensor.ph_center = f64::NAN;
    assert!(validate(&settings).is_err());

    let mut settings = Settings::default();
    settings.target.timeout_secs = 0.0;
    assert!(validate(&settings).is_err());
}

#[test]
fn test_validate_rejects_durations_too_large_to_sleep() {
    let mut settings = Settings::default();
    settings.sensor.interval_seconds = 1e20;
    let err = validate(&settings).unwrap_err();
    assert!(err.to_string().contains("sensor.interval_seconds"));

    let mut settings = Settings::default();
    settings.target.timeout_secs = 1e20;
    let err = validate(&settings).unwrap_err();
    assert!(err.to_string().contains("target.timeout_secs"));
}

#[test]
#[serial]
fn load_config_rejects_huge_interval_from_env() {
    let tmp = TempDir::new().expect("create tempdir");
    let path = tmp.path().join("absent.toml");

    temp_env::with_vars(
        [
            ("MOCK_SENSORS_SENSOR__INTERVAL_SECONDS", Some("1e20")),
            ("MOCK_SENSORS_TARGET__TIMEOUT_SECS", None),
        ],
        || {
            let err = load_config_from(path.to_str().unwrap()).unwrap_err();
            assert!(err.to_string().contains("sensor.interval_seconds"));
        },
    );

    temp_env::with_var("MOCK_SENSORS_TARGET__TIMEOUT_SECS", Some("1e20"), || {
        let err = load_config_from(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("target.timeout_secs"));
    });
}
