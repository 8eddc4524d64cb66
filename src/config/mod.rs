//! Application configuration
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/secureview/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

use crate::theme::ThemeVariant;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod analysis;
mod logging;
mod serialization;
mod simulation;

#[cfg(test)]
mod tests;

pub use analysis::{AnalysisConfig, FileAnalysis, KeySource};
pub use logging::{FileLogging, LogRotation, LoggingConfig};
pub use simulation::{FileSimulation, SimulationConfig};

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Env vars consulted for the analysis key, in order
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Platform style of the phone frame
    pub theme: ThemeVariant,

    pub logging: LoggingConfig,

    /// Frame analysis service
    pub analysis: AnalysisConfig,

    /// Simulated timers and pointer scaling
    pub simulation: SimulationConfig,
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,

    /// Optional [analysis] section
    pub analysis: Option<FileAnalysis>,

    /// Optional [simulation] section
    pub simulation: Option<FileSimulation>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/secureview/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("secureview").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be parsed exits the process with
    /// an actionable message instead of silently falling back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: theme must be \"ios\" or \"android\", and numbers");
                    eprintln!("  in [simulation] must not be quoted.\n");
                    eprintln!("  To reset, run `secureview config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::resolve(file, |name| std::env::var(name).ok())
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Theme: env > file > default; unknown names keep the default
        let theme = env("SECUREVIEW_THEME")
            .or(file.theme)
            .map(|name| {
                ThemeVariant::parse(&name).unwrap_or_else(|| {
                    eprintln!("Unknown theme {:?}, using {}", name, ThemeVariant::default());
                    ThemeVariant::default()
                })
            })
            .unwrap_or_default();

        let api_key = API_KEY_VARS
            .iter()
            .find_map(|name| env(name).filter(|v| !v.trim().is_empty()));

        Self {
            theme,
            logging: LoggingConfig::from_file(file.logging),
            analysis: AnalysisConfig::from_file(file.analysis, api_key),
            simulation: SimulationConfig::from_file(file.simulation),
        }
    }
}
