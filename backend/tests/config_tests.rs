mod support;

use std::io::Write;

use dfw_flights::config::{
    ConfigError, DashboardConfig, CONFIG_PATH_ENV, HOST_ENV, PORT_ENV, SEED_ENV, WINDOW_DAYS_ENV,
};
use dfw_flights::models::Airline;
use dfw_flights::services::GeneratorError;
use support::with_scoped_env;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

/// Clears every override variable, then applies `extra`.
fn env_changes<'a>(extra: &[(&'a str, Option<&'a str>)]) -> Vec<(&'a str, Option<&'a str>)> {
    let mut changes = vec![
        (SEED_ENV, None),
        (WINDOW_DAYS_ENV, None),
        (HOST_ENV, None),
        (PORT_ENV, None),
    ];
    changes.extend_from_slice(extra);
    changes
}

#[test]
fn test_from_file_full() {
    let file = write_config(
        r#"
        [generator]
        seed = 99
        window_days = 14
        airlines = ["Southwest", "Spirit"]
        hub_airline = "Southwest"
        hub_range = [80, 90]
        other_range = [5, 10]

        [server]
        host = "127.0.0.1"
        port = 9000
        "#,
    );

    let config = DashboardConfig::from_file(file.path()).unwrap();
    assert_eq!(config.generator.seed, 99);
    assert_eq!(config.generator.window_days, 14);
    assert_eq!(config.generator.hub_airline, Airline::from("Southwest"));
    assert_eq!(config.server.bind_address(), "127.0.0.1:9000");
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_file_missing() {
    let result = DashboardConfig::from_file("/definitely/not/here/dashboard.toml");
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_from_file_malformed() {
    let file = write_config("[generator\nseed = ");
    assert!(matches!(
        DashboardConfig::from_file(file.path()),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn test_load_from_explicit_path() {
    let file = write_config("[generator]\nseed = 7\n");
    let path = file.path().to_str().unwrap().to_string();

    let changes = env_changes(&[(CONFIG_PATH_ENV, Some(path.as_str()))]);

    let config = with_scoped_env(&changes, DashboardConfig::load).unwrap();
    assert_eq!(config.generator.seed, 7);
    assert_eq!(config.generator.window_days, 30);
}

#[test]
fn test_env_overrides_file_values() {
    let file = write_config("[generator]\nseed = 7\n[server]\nport = 1234\n");
    let path = file.path().to_str().unwrap().to_string();

    let config = with_scoped_env(
        &[
            (CONFIG_PATH_ENV, Some(path.as_str())),
            (SEED_ENV, Some("11")),
            (WINDOW_DAYS_ENV, Some("60")),
            (HOST_ENV, Some("localhost")),
            (PORT_ENV, Some("3000")),
        ],
        DashboardConfig::load,
    )
    .unwrap();

    assert_eq!(config.generator.seed, 11);
    assert_eq!(config.generator.window_days, 60);
    assert_eq!(config.server.bind_address(), "localhost:3000");
}

#[test]
fn test_invalid_env_value() {
    let file = write_config("");
    let path = file.path().to_str().unwrap().to_string();

    let changes = env_changes(&[
        (CONFIG_PATH_ENV, Some(path.as_str())),
        (SEED_ENV, Some("forty-two")),
    ]);

    let result = with_scoped_env(&changes, DashboardConfig::load);
    assert!(matches!(
        result,
        Err(ConfigError::InvalidEnv { key: SEED_ENV, .. })
    ));
}

#[test]
fn test_non_positive_window_aborts_load() {
    let file = write_config("");
    let path = file.path().to_str().unwrap().to_string();

    let changes = env_changes(&[
        (CONFIG_PATH_ENV, Some(path.as_str())),
        (WINDOW_DAYS_ENV, Some("0")),
    ]);

    let result = with_scoped_env(&changes, DashboardConfig::load);
    assert!(matches!(
        result,
        Err(ConfigError::Generator(GeneratorError::InvalidWindow { window_days: 0 }))
    ));
}

#[test]
fn test_oversized_window_aborts_load() {
    let file = write_config("");
    let path = file.path().to_str().unwrap().to_string();

    let changes = env_changes(&[
        (CONFIG_PATH_ENV, Some(path.as_str())),
        (WINDOW_DAYS_ENV, Some("9223372036854775807")),
    ]);

    let result = with_scoped_env(&changes, DashboardConfig::load);
    assert!(matches!(
        result,
        Err(ConfigError::Generator(GeneratorError::InvalidWindow {
            window_days: i64::MAX
        }))
    ));
}
