//! Config tests.

use serial_test::serial;
use std::env;

use super::*;

const VARS: [&str; 7] = [
    "SEED_ACCOUNTS_URL",
    "SEED_ACCOUNTS_COUNT",
    "SEED_ACCOUNTS_PASSWORD",
    "SEED_BIO_MODE",
    "SEED_REQUEST_TIMEOUT_SECS",
    "SEED_FAIL_FAST",
    "LOG_FILE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();

    let config = SeedConfig::load(ConfigOverrides::default()).unwrap();

    assert_eq!(config.endpoint, "https://pickme-back.ga:8083/api/accounts");
    assert_eq!(config.count, 50);
    assert_eq!(config.password, "password");
    assert_eq!(config.bio_mode, BioMode::Random);
    assert_eq!(config.request_timeout_secs, 30);
    assert!(!config.fail_fast);
    assert!(!config.dry_run);
    assert!(config.log_file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("SEED_ACCOUNTS_URL", "http://localhost:8083/api/accounts");
    env::set_var("SEED_ACCOUNTS_COUNT", "3");
    env::set_var("SEED_ACCOUNTS_PASSWORD", "password123");
    env::set_var("SEED_BIO_MODE", "fixed");
    env::set_var("SEED_REQUEST_TIMEOUT_SECS", "5");
    env::set_var("SEED_FAIL_FAST", "1");
    env::set_var("LOG_FILE", "logs/seed.log");

    let config = SeedConfig::load(ConfigOverrides::default()).unwrap();

    assert_eq!(config.endpoint, "http://localhost:8083/api/accounts");
    assert_eq!(config.count, 3);
    assert_eq!(config.password, "password123");
    assert_eq!(config.bio_mode, BioMode::Fixed);
    assert_eq!(config.request_timeout(), Duration::from_secs(5));
    assert!(config.fail_fast);
    assert_eq!(config.log_file.as_deref(), Some("logs/seed.log"));

    clear_env();
}

#[test]
#[serial]
fn test_overrides_take_precedence_over_env() {
    clear_env();
    env::set_var("SEED_ACCOUNTS_URL", "http://env-host/api/accounts");
    env::set_var("SEED_ACCOUNTS_COUNT", "10");
    env::set_var("SEED_BIO_MODE", "random");

    env::set_var("SEED_ACCOUNTS_PASSWORD", "env-password");

    let config = SeedConfig::load(ConfigOverrides {
        url: Some("http://cli-host/api/accounts".to_string()),
        count: Some(2),
        password: Some("cli-password".to_string()),
        bio_mode: Some(BioMode::Fixed),
        fail_fast: Some(true),
        dry_run: true,
    })
    .unwrap();

    assert_eq!(config.endpoint, "http://cli-host/api/accounts");
    assert_eq!(config.count, 2);
    assert_eq!(config.password, "cli-password");
    assert_eq!(config.bio_mode, BioMode::Fixed);
    assert!(config.fail_fast);
    assert!(config.dry_run);

    clear_env();
}

#[test]
#[serial]
fn test_fail_fast_override_can_switch_env_flag_off() {
    clear_env();
    env::set_var("SEED_FAIL_FAST", "1");

    let from_env = SeedConfig::load(ConfigOverrides::default()).unwrap();
    assert!(from_env.fail_fast);

    let switched_off = SeedConfig::load(ConfigOverrides {
        fail_fast: Some(false),
        ..ConfigOverrides::default()
    })
    .unwrap();
    assert!(!switched_off.fail_fast);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_count_is_config_error() {
    clear_env();
    env::set_var("SEED_ACCOUNTS_COUNT", "many");

    let result = SeedConfig::load(ConfigOverrides::default());
    assert!(matches!(result, Err(SeedError::Config(_))));

    clear_env();
}

#[test]
#[serial]
fn test_unknown_bio_mode_is_config_error() {
    clear_env();
    env::set_var("SEED_BIO_MODE", "sometimes");

    let result = SeedConfig::load(ConfigOverrides::default());
    assert!(matches!(result, Err(SeedError::Config(_))));

    clear_env();
}

#[test]
fn test_validate_rejects_invalid_url() {
    let config = SeedConfig {
        endpoint: "not-a-valid-url".to_string(),
        ..SeedConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_count_beyond_names() {
    let config = SeedConfig {
        count: 51,
        ..SeedConfig::default()
    };
    assert!(config.validate().is_err());

    let config = SeedConfig {
        count: 0,
        ..SeedConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_password_length() {
    let short = SeedConfig {
        password: "pass".to_string(),
        ..SeedConfig::default()
    };
    assert!(short.validate().is_err());

    let long = SeedConfig {
        password: "p".repeat(21),
        ..SeedConfig::default()
    };
    assert!(long.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let config = SeedConfig {
        request_timeout_secs: 0,
        ..SeedConfig::default()
    };
    assert!(config.validate().is_err());
}
