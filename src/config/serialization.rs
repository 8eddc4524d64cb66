//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::{Config, KeySource};

impl Config {
    /// Serialize config to TOML string
    pub fn to_toml(&self) -> String {
        format!(
            r#"# secureview configuration

# Platform style of the phone frame: "ios" or "android"
# (also toggled from the Settings screen)
theme = "{theme}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to the TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"

# Frame analysis ("AI Detect" on the live view)
# Without a key, analysis runs in simulation mode and returns a canned message.
# GEMINI_API_KEY or API_KEY in the environment override the key below.
[analysis]
{api_key}endpoint = "{endpoint}"
model = "{model}"
timeout_secs = {timeout}

# Simulated timers and mouse scaling
[simulation]
bitrate_interval_ms = {bitrate_ms}
pairing_delay_ms = {pairing_ms}
# Pixels per terminal column when dragging the playback ruler
cell_px = {cell_px}
"#,
            theme = self.theme.as_str(),
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
            api_key = match (&self.analysis.api_key, self.analysis.key_source) {
                (Some(key), KeySource::File) => format!("api_key = {:?}\n", key),
                _ => "# api_key = \"...\"\n".to_string(),
            },
            endpoint = self.analysis.endpoint,
            model = self.analysis.model,
            timeout = self.analysis.timeout_secs,
            bitrate_ms = self.simulation.bitrate_interval_ms,
            pairing_ms = self.simulation.pairing_delay_ms,
            cell_px = self.simulation.cell_px,
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }
}
