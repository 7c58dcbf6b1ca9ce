//! Unit tests for configuration resolution and layering.

use ortho_config::OrthoConfig;
use rstest::rstest;

use super::{DEFAULT_API_BASE, DEFAULT_PAGE_SIZE, OperationMode, UserdeckConfig};
use crate::provider::FetchError;

/// Loads configuration with the given environment and CLI arguments.
///
/// Points `HOME` and `XDG_CONFIG_HOME` at a temporary directory so discovery
/// cannot pick up a real `.userdeck.toml`.
fn load_with_env(env_api_base: Option<&str>, cli_args: &[&str]) -> UserdeckConfig {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().to_string();

    let _guard = env_lock::lock_env([
        ("USERDECK_API_BASE", env_api_base),
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
    ]);

    let mut args: Vec<std::ffi::OsString> = vec![std::ffi::OsString::from("userdeck")];
    args.extend(cli_args.iter().map(std::ffi::OsString::from));

    UserdeckConfig::load_from_iter(args).expect("config should load")
}

#[test]
fn defaults_point_at_public_provider() {
    let config = UserdeckConfig::default();
    assert_eq!(config.resolve_api_base(), DEFAULT_API_BASE);
    assert_eq!(config.page, 1);
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    assert!(!config.plain);
}

#[rstest]
fn api_base_defaults_when_environment_is_empty() {
    let config = load_with_env(None, &[]);
    assert_eq!(
        config.resolve_api_base(),
        DEFAULT_API_BASE,
        "unset USERDECK_API_BASE should fall back to the public default"
    );
}

#[rstest]
fn api_base_loads_from_environment_variable() {
    let config = load_with_env(Some("https://env.example.test/api"), &[]);
    assert_eq!(
        config.resolve_api_base(),
        "https://env.example.test/api",
        "USERDECK_API_BASE should override the default"
    );
}

#[rstest]
fn cli_api_base_overrides_environment_variable() {
    let config = load_with_env(
        Some("https://env.example.test/api"),
        &["--api-base", "https://cli.example.test/api"],
    );
    assert_eq!(
        config.resolve_api_base(),
        "https://cli.example.test/api",
        "--api-base should win over USERDECK_API_BASE"
    );
}

#[test]
fn explicit_api_base_wins_over_default() {
    let config = UserdeckConfig {
        api_base: Some("https://example.test/api".to_owned()),
        ..UserdeckConfig::default()
    };
    assert_eq!(config.resolve_api_base(), "https://example.test/api");
}

#[test]
fn validated_start_page_accepts_positive_pages() {
    let config = UserdeckConfig {
        page: 3,
        ..UserdeckConfig::default()
    };
    assert_eq!(config.validated_start_page(), Ok(3));
}

#[test]
fn validated_start_page_rejects_zero() {
    let config = UserdeckConfig {
        page: 0,
        ..UserdeckConfig::default()
    };
    assert!(matches!(
        config.validated_start_page(),
        Err(FetchError::InvalidPagination { .. })
    ));
}

#[rstest]
#[case(false, OperationMode::UsersTui)]
#[case(true, OperationMode::PlainListing)]
fn operation_mode_follows_plain_flag(#[case] plain: bool, #[case] expected: OperationMode) {
    let config = UserdeckConfig {
        plain,
        ..UserdeckConfig::default()
    };
    assert_eq!(config.operation_mode(), expected);
}
