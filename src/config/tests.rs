//! Configuration tests
//!
//! The round-trip tests guard `to_toml()`: every field written must parse back
//! into the same resolved value.

use super::analysis::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str).unwrap_or_else(|e| panic!("TOML:\n{}\nError: {}", toml_str, e))
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();
    let resolved = Config::resolve(parse(&toml_str), no_env);

    assert_eq!(resolved.theme, ThemeVariant::Ios);
    assert_eq!(resolved.logging.level, "info");
    assert_eq!(resolved.logging.file_rotation, LogRotation::Daily);
    assert_eq!(resolved.analysis.model, DEFAULT_MODEL);
    assert_eq!(resolved.analysis.endpoint, DEFAULT_ENDPOINT);
    assert!(!resolved.analysis.has_credential());
    assert_eq!(resolved.simulation.bitrate_interval_ms, 2000);
    assert_eq!(resolved.simulation.pairing_delay_ms, 4000);
    assert_eq!(resolved.simulation.cell_px, 8);
}

#[test]
fn test_config_roundtrip_customized() {
    let mut config = Config::default();
    config.theme = ThemeVariant::Android;
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;
    config.analysis = AnalysisConfig::from_file(
        Some(FileAnalysis {
            api_key: Some("file-key".to_string()),
            ..Default::default()
        }),
        None,
    );
    config.simulation.cell_px = 10;

    let resolved = Config::resolve(parse(&config.to_toml()), no_env);

    assert_eq!(resolved.theme, ThemeVariant::Android);
    assert!(resolved.logging.file_enabled);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Hourly);
    assert_eq!(resolved.analysis.api_key.as_deref(), Some("file-key"));
    assert_eq!(resolved.analysis.key_source, KeySource::File);
    assert_eq!(resolved.simulation.cell_px, 10);
}

#[test]
fn test_env_key_is_never_written_to_file() {
    let config = Config::resolve(
        FileConfig::default(),
        env_from(&[("GEMINI_API_KEY", "secret-from-env")]),
    );
    assert_eq!(config.analysis.key_source, KeySource::Env);

    let toml_str = config.to_toml();
    assert!(!toml_str.contains("secret-from-env"));
    assert!(parse(&toml_str).analysis.and_then(|a| a.api_key).is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
theme = "android"
[analysis]
api_key = "from-file"
"#,
    );
    let config = Config::resolve(
        file,
        env_from(&[("SECUREVIEW_THEME", "ios"), ("API_KEY", "from-env")]),
    );

    assert_eq!(config.theme, ThemeVariant::Ios);
    assert_eq!(config.analysis.api_key.as_deref(), Some("from-env"));
}

#[test]
fn test_gemini_key_wins_over_generic_key() {
    let config = Config::resolve(
        FileConfig::default(),
        env_from(&[("API_KEY", "generic"), ("GEMINI_API_KEY", "gemini")]),
    );
    assert_eq!(config.analysis.api_key.as_deref(), Some("gemini"));
}

#[test]
fn test_blank_key_counts_as_missing() {
    let file = parse(
        r#"
[analysis]
api_key = "   "
"#,
    );
    let config = Config::resolve(file, env_from(&[("GEMINI_API_KEY", "")]));
    assert!(!config.analysis.has_credential());
    assert_eq!(config.analysis.key_source, KeySource::None);
}

#[test]
fn test_unknown_theme_falls_back() {
    let config = Config::resolve(parse("theme = \"windows-phone\""), no_env);
    assert_eq!(config.theme, ThemeVariant::Ios);
}

#[test]
fn test_zero_intervals_rejected() {
    let file = parse(
        r#"
[simulation]
bitrate_interval_ms = 0
cell_px = 0
pairing_delay_ms = 0
"#,
    );
    let config = Config::resolve(file, no_env);
    assert_eq!(config.simulation.bitrate_interval_ms, 2000);
    assert_eq!(config.simulation.cell_px, 8);
    // An instant pairing is allowed
    assert_eq!(config.simulation.pairing_delay_ms, 0);
}

#[test]
fn test_malformed_section_is_a_parse_error() {
    let result: Result<FileConfig, _> = toml::from_str("[simulation]\ncell_px = \"eight\"\n");
    assert!(result.is_err());
}
