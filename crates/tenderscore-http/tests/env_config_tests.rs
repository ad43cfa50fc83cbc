//! Integration tests for environment-based configuration

use serial_test::serial;
use std::env;
use std::net::{IpAddr, Ipv4Addr};
use tenderscore_http::runtime::{ConfigError, HttpRuntimeConfigBuilder};

const ALL_VARS: [&str; 5] = [
    "TENDERSCORE_HOST",
    "TENDERSCORE_PORT",
    "TENDERSCORE_MAX_BODY_SIZE",
    "TENDERSCORE_ENABLE_CORS",
    "TENDERSCORE_ENABLE_OPENAPI",
];

/// Helper to set environment variable for test
fn set_env(key: &str, value: &str) {
    unsafe {
        env::set_var(key, value);
    }
}

fn clear_all_tenderscore_env_vars() {
    for key in ALL_VARS {
        unsafe {
            env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn test_env_config_default_when_no_vars_set() {
    clear_all_tenderscore_env_vars();

    let config = HttpRuntimeConfigBuilder::from_env()
        .expect("should load defaults when no env vars set")
        .build()
        .expect("should build valid config");

    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.port, 5001);
    assert_eq!(config.max_body_size, 2 * 1024 * 1024);
    assert!(config.enable_cors);
    assert!(config.enable_openapi);
}

#[test]
#[serial]
fn test_env_config_reads_every_variable() {
    clear_all_tenderscore_env_vars();
    set_env("TENDERSCORE_HOST", "127.0.0.1");
    set_env("TENDERSCORE_PORT", "8088");
    set_env("TENDERSCORE_MAX_BODY_SIZE", "65536");
    set_env("TENDERSCORE_ENABLE_CORS", "off");
    set_env("TENDERSCORE_ENABLE_OPENAPI", "0");

    let config = HttpRuntimeConfigBuilder::from_env()
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8088");
    assert_eq!(config.max_body_size, 65536);
    assert!(!config.enable_cors);
    assert!(!config.enable_openapi);

    clear_all_tenderscore_env_vars();
}

#[test]
#[serial]
fn test_env_config_rejects_unparseable_values() {
    clear_all_tenderscore_env_vars();

    set_env("TENDERSCORE_PORT", "not-a-port");
    match HttpRuntimeConfigBuilder::from_env() {
        Err(ConfigError::InvalidEnvVar { key, .. }) => assert_eq!(key, "TENDERSCORE_PORT"),
        other => panic!("expected InvalidEnvVar, got {other:?}"),
    }
    clear_all_tenderscore_env_vars();

    set_env("TENDERSCORE_ENABLE_CORS", "maybe");
    let err = HttpRuntimeConfigBuilder::from_env().unwrap_err();
    assert!(err.to_string().contains("invalid boolean value 'maybe'"));
    clear_all_tenderscore_env_vars();

    set_env("TENDERSCORE_HOST", "localhost");
    assert!(matches!(
        HttpRuntimeConfigBuilder::from_env(),
        Err(ConfigError::InvalidEnvVar { .. })
    ));
    clear_all_tenderscore_env_vars();
}

#[test]
#[serial]
fn test_env_config_validation_runs_on_build() {
    clear_all_tenderscore_env_vars();
    set_env("TENDERSCORE_MAX_BODY_SIZE", "0");

    let result = HttpRuntimeConfigBuilder::from_env().unwrap().build();
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));

    clear_all_tenderscore_env_vars();
}
