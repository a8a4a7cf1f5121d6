//! Tests for the orgtree configuration system.

use std::sync::Mutex;

use orgtree_core::config::{CliOverrides, OrgtreeConfig};
use orgtree_core::constants::DEFAULT_CANONICAL_PREFIX;
use orgtree_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all ORGTREE_ env vars to prevent cross-test contamination.
fn clear_orgtree_env_vars() {
    for key in [
        "ORGTREE_BUILD_PARALLEL",
        "ORGTREE_BUILD_THREADS",
        "ORGTREE_BUILD_PARALLEL_THRESHOLD",
        "ORGTREE_BUILD_TRACK_KNOWN_IDS",
        "ORGTREE_LOOKUP_CANONICAL_PREFIX",
        "ORGTREE_OUTPUT_DIR",
        "ORGTREE_OUTPUT_PRETTY",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_orgtree_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("orgtree.toml"),
        r#"
[build]
threads = 2
parallel_threshold = 50

[output]
dir = "project-out"
"#,
    )
    .unwrap();

    std::env::set_var("ORGTREE_BUILD_THREADS", "6");
    std::env::set_var("ORGTREE_OUTPUT_DIR", "env-out");

    let cli = CliOverrides {
        output_dir: Some("cli-out".to_string()),
        ..Default::default()
    };

    let config = OrgtreeConfig::load(dir.path(), Some(&cli)).unwrap();

    // CLI beats env
    assert_eq!(config.output.dir.as_deref(), Some("cli-out"));
    // Env beats project
    assert_eq!(config.build.threads, Some(6));
    // Project beats defaults
    assert_eq!(config.build.parallel_threshold, Some(50));

    clear_orgtree_env_vars();
}

#[test]
fn test_load_missing_files_fallback() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_orgtree_env_vars();

    let dir = tempdir();
    let config = OrgtreeConfig::load(dir.path(), None).unwrap();

    assert!(config.build.effective_parallel());
    assert_eq!(config.build.effective_threads(), 0);
    assert_eq!(config.build.effective_parallel_threshold(), 1024);
    assert!(config.build.effective_track_known_ids());
    assert_eq!(config.lookup.effective_canonical_prefix(), DEFAULT_CANONICAL_PREFIX);
    assert_eq!(config.output.effective_dir(), std::path::PathBuf::from("data"));
    assert!(!config.output.effective_pretty());
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_orgtree_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("orgtree.toml"), "not valid toml {{{{").unwrap();

    match OrgtreeConfig::load(dir.path(), None) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_empty_prefix_rejected() {
    let config = OrgtreeConfig::from_toml(
        r#"
[lookup]
canonical_prefix = "   "
"#,
    )
    .unwrap();

    match OrgtreeConfig::validate(&config) {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "lookup.canonical_prefix");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_zero_parallel_threshold_rejected() {
    let config = OrgtreeConfig::from_toml("[build]\nparallel_threshold = 0\n").unwrap();
    assert!(matches!(
        OrgtreeConfig::validate(&config),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_unparsable_env_value_is_an_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_orgtree_env_vars();

    let dir = tempdir();
    std::env::set_var("ORGTREE_BUILD_THREADS", "lots");

    let result = OrgtreeConfig::load(dir.path(), None);
    clear_orgtree_env_vars();

    match result {
        Err(ConfigError::InvalidValue { field, .. }) => {
            assert_eq!(field, "ORGTREE_BUILD_THREADS");
        }
        other => panic!("Expected InvalidValue, got: {:?}", other),
    }
}

#[test]
fn test_unknown_keys_ignored() {
    let config = OrgtreeConfig::from_toml(
        r#"
[build]
parallel = false
future_knob = "whatever"

[brand_new_section]
x = 1
"#,
    )
    .unwrap();
    assert_eq!(config.build.parallel, Some(false));
}

#[test]
fn test_use_parallel_for_threshold() {
    let config = OrgtreeConfig::from_toml("[build]\nparallel_threshold = 10\n").unwrap();
    assert!(!config.build.use_parallel_for(9));
    assert!(config.build.use_parallel_for(10));

    let sequential = OrgtreeConfig::from_toml("[build]\nparallel = false\n").unwrap();
    assert!(!sequential.build.use_parallel_for(1_000_000));
}

#[test]
fn test_toml_roundtrip() {
    let config = OrgtreeConfig::from_toml(
        r#"
[build]
threads = 4

[lookup]
canonical_prefix = "https://example.org/"

[output]
pretty = true
"#,
    )
    .unwrap();

    let toml_str = config.to_toml().unwrap();
    let reparsed = OrgtreeConfig::from_toml(&toml_str).unwrap();
    assert_eq!(config, reparsed);
}
