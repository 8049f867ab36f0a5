//! Integration tests for layered configuration loading

use crate::integration::with_config_env;
use docli::config::{global_config_path, ConfigLoader, DocliConfig, DEFAULT_BASE_URL};
use docli::error::ApiError;
use std::fs;
use tempfile::TempDir;

fn write_global(test_dir: &TempDir, config: &DocliConfig) {
    let dir = test_dir.path().join("docli");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), toml::to_string(config).unwrap()).unwrap();
}

#[test]
fn test_defaults_without_any_source() {
    let test_dir = TempDir::new().unwrap();
    let config = with_config_env(&test_dir, || ConfigLoader::load(None).unwrap());
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert!(config.api.token.is_none());
    assert!(config.output.color);
}

#[test]
fn test_global_path_follows_xdg_config_home() {
    let test_dir = TempDir::new().unwrap();
    let path = with_config_env(&test_dir, global_config_path).unwrap();
    assert_eq!(path, test_dir.path().join("docli").join("config.toml"));
}

#[test]
fn test_global_file_is_loaded() {
    let test_dir = TempDir::new().unwrap();
    let mut global = DocliConfig::default();
    global.api.token = Some("global-token".to_string());
    global.output.json = true;
    write_global(&test_dir, &global);

    let config = with_config_env(&test_dir, || ConfigLoader::load(None).unwrap());
    assert_eq!(config.api.token.as_deref(), Some("global-token"));
    assert!(config.output.json);
}

#[test]
fn test_explicit_file_replaces_global_file() {
    let test_dir = TempDir::new().unwrap();
    let mut global = DocliConfig::default();
    global.api.token = Some("global-token".to_string());
    global.output.json = true;
    write_global(&test_dir, &global);

    let explicit = test_dir.path().join("work.toml");
    fs::write(&explicit, "[api]\ntoken = \"work-token\"\n").unwrap();

    let config = with_config_env(&test_dir, || ConfigLoader::load(Some(&explicit)).unwrap());
    assert_eq!(config.api.token.as_deref(), Some("work-token"));
    assert!(!config.output.json, "global file must not be merged");
}

#[test]
fn test_environment_overrides_files() {
    let test_dir = TempDir::new().unwrap();
    let mut global = DocliConfig::default();
    global.api.token = Some("global-token".to_string());
    write_global(&test_dir, &global);

    let config = with_config_env(&test_dir, || {
        std::env::set_var("DOCLI__API__BASE_URL", "http://localhost:4010/v2");
        std::env::set_var("DIGITALOCEAN_TOKEN", "env-token");
        std::env::set_var("NO_COLOR", "1");
        ConfigLoader::load(None).unwrap()
    });
    assert_eq!(config.api.base_url, "http://localhost:4010/v2");
    assert_eq!(config.api.token.as_deref(), Some("env-token"));
    assert!(!config.output.color);
}

#[test]
fn test_missing_explicit_file() {
    let test_dir = TempDir::new().unwrap();
    let missing = test_dir.path().join("nope.toml");
    let result = with_config_env(&test_dir, || ConfigLoader::load(Some(&missing)));
    assert!(matches!(result, Err(ApiError::ConfigError(_))));
}
