//! Integration tests for layered Settings loading

use std::fs;
use std::path::PathBuf;

use config::Map;
use tempfile::TempDir;

use jiractx::config::Settings;
use jiractx::infrastructure::ServiceContainer;

fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

#[test]
fn given_explicit_file_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "jiractx.toml",
        "comment_limit = 10\njira_command = \"jira-cli\"\n",
    );

    let settings = Settings::load_from(None, Some(&path), env(&[])).expect("load settings");

    assert_eq!(settings.comment_limit, 10);
    assert_eq!(settings.jira_command, "jira-cli");
    assert_eq!(settings.search_limit, 20, "unspecified keys keep defaults");
}

#[test]
fn given_global_and_explicit_file_when_load_then_explicit_wins() {
    let dir = TempDir::new().unwrap();
    let global = write_config(&dir, "global.toml", "comment_limit = 3\nlist_limit = 7\n");
    let local = write_config(&dir, "local.toml", "comment_limit = 8\n");

    let settings = Settings::load_from(Some(&global), Some(&local), env(&[])).unwrap();

    assert_eq!(settings.comment_limit, 8);
    assert_eq!(settings.list_limit, 7);
}

#[test]
fn given_env_override_when_load_then_env_wins_over_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "jiractx.toml", "comment_limit = 10\n");

    let settings = Settings::load_from(
        None,
        Some(&path),
        env(&[("JIRACTX_COMMENT_LIMIT", "2"), ("OTHER_VAR", "ignored")]),
    )
    .unwrap();

    assert_eq!(settings.comment_limit, 2);
}

#[test]
fn given_invalid_value_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "jiractx.toml", "comment_limit = \"many\"\n");

    let result = Settings::load_from(None, Some(&path), env(&[]));

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().starts_with("config error"));
}

#[test]
fn given_loaded_settings_when_building_container_then_services_use_them() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "jiractx.toml", "search_limit = 1\n");
    let settings = Settings::load_from(None, Some(&path), env(&[])).unwrap();

    let container = ServiceContainer::new(settings);
    let fields = container
        .field_service()
        .parse(r#"[{"id":"a1","name":"A"},{"id":"a2","name":"A"}]"#)
        .unwrap();

    assert_eq!(container.field_service().search(&fields, "a", None).len(), 1);
}
