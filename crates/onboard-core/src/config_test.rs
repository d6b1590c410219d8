use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "ONBOARD_ENV"));
}

#[test]
fn build_app_config_uses_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.data_path, PathBuf::from("data/clients.json"));
    assert_eq!(cfg.export_dir, PathBuf::from("exports"));
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("ONBOARD_ENV", "production");
    map.insert("ONBOARD_LOG_LEVEL", "debug");
    map.insert("ONBOARD_DATA_PATH", "/var/lib/onboard/clients.json");
    map.insert("ONBOARD_EXPORT_DIR", "/tmp/out");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(
        cfg.data_path,
        PathBuf::from("/var/lib/onboard/clients.json")
    );
    assert_eq!(cfg.export_dir, PathBuf::from("/tmp/out"));
}

#[test]
fn build_app_config_rejects_blank_data_path() {
    let mut map = HashMap::new();
    map.insert("ONBOARD_DATA_PATH", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ONBOARD_DATA_PATH"),
        "expected InvalidEnvVar(ONBOARD_DATA_PATH), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_unknown_env() {
    let mut map = HashMap::new();
    map.insert("ONBOARD_ENV", "qa");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ONBOARD_ENV"),
        "expected InvalidEnvVar(ONBOARD_ENV), got: {result:?}"
    );
}

#[test]
fn with_overrides_replaces_only_given_paths() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map))
        .unwrap()
        .with_overrides(Some(PathBuf::from("alt.json")), None);
    assert_eq!(cfg.data_path, PathBuf::from("alt.json"));
    assert_eq!(cfg.export_dir, PathBuf::from("exports"));
}
