//! Configuration loading from files and environment variables.

mod support;

use std::io::Write;

use subway_rust::config::AppConfig;
use subway_rust::db::RepositoryType;
use support::with_scoped_env;

const ENV_KEYS: [&str; 4] = ["SUBWAY_CONFIG", "HOST", "PORT", "REPOSITORY_TYPE"];

fn cleared<'a>() -> Vec<(&'a str, Option<&'a str>)> {
    ENV_KEYS.iter().map(|k| (*k, None)).collect()
}

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_explicit_file() {
    let file = write_config(
        r#"
[server]
host = "127.0.0.1"
port = 9000
"#,
    );

    let config = with_scoped_env(&cleared(), || AppConfig::load(Some(file.path()))).unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.body_limit_bytes, 1024 * 1024);
    assert_eq!(config.repository.repository_type().unwrap(), RepositoryType::Local);
}

#[test]
fn test_load_from_subway_config_variable() {
    let file = write_config("[server]\nport = 7070\n");
    let path = file.path().to_string_lossy().to_string();

    let mut env = cleared();
    env[0] = ("SUBWAY_CONFIG", Some(path.as_str()));
    let config = with_scoped_env(&env, || AppConfig::load(None)).unwrap();
    assert_eq!(config.server.port, 7070);
}

#[test]
fn test_env_overrides_file_values() {
    let file = write_config("[server]\nhost = \"10.0.0.1\"\nport = 7070\n");

    let env = [
        ("SUBWAY_CONFIG", None),
        ("HOST", Some("127.0.0.2")),
        ("PORT", Some("9191")),
        ("REPOSITORY_TYPE", Some("memory")),
    ];
    let config = with_scoped_env(&env, || AppConfig::load(Some(file.path()))).unwrap();
    assert_eq!(config.server.bind_address(), "127.0.0.2:9191");
    assert_eq!(config.repository.repo_type, "memory");
    assert_eq!(config.repository.repository_type().unwrap(), RepositoryType::Local);
}

#[test]
fn test_invalid_port_override_is_rejected() {
    let file = write_config("");
    let env = [
        ("SUBWAY_CONFIG", None),
        ("HOST", None),
        ("PORT", Some("not-a-port")),
        ("REPOSITORY_TYPE", None),
    ];

    let err = with_scoped_env(&env, || AppConfig::load(Some(file.path()))).unwrap_err();
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn test_missing_file_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let err = with_scoped_env(&cleared(), || AppConfig::load(Some(missing.as_path()))).unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}

#[test]
fn test_malformed_file_is_a_configuration_error() {
    let file = write_config("[server\nport = ");
    let err = with_scoped_env(&cleared(), || AppConfig::load(Some(file.path()))).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
}

#[test]
fn test_unknown_repository_type_is_reported() {
    let file = write_config("[repository]\ntype = \"postgres\"\n");
    let config = with_scoped_env(&cleared(), || AppConfig::load(Some(file.path()))).unwrap();
    assert!(config.repository.repository_type().is_err());
}
