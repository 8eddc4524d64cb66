// CLI module - command-line argument parsing and handlers
//
// Provides subcommands next to the TUI:
// - config --show: Display effective configuration
// - config --path: Print the config file location
// - config --reset: Regenerate config file with defaults
// - analyze <IMAGE>: Run frame analysis on a JPEG from disk
// - devices / events: Print the seed data, optionally as JSON

use crate::analysis::{self, FrameAnalyzer};
use crate::config::{Config, KeySource, VERSION};
use crate::logging::{self, LogBuffer, LogSink};
use crate::model::{seed, EventFilter};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

/// SecureView - security camera companion in your terminal
#[derive(Parser)]
#[command(name = "secureview")]
#[command(version = VERSION)]
#[command(about = "Security camera companion app in a terminal phone frame", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Describe a JPEG still with the frame analyzer
    Analyze {
        /// Path to the image file
        image: PathBuf,
    },

    /// List cameras
    Devices {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List recorded activity
    Events {
        /// Category filter: all, person, motion, sound, pet
        #[arg(long, default_value = "all", value_parser = parse_filter)]
        filter: EventFilter,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_filter(value: &str) -> Result<EventFilter, String> {
    EventFilter::parse(value).ok_or_else(|| {
        let names: Vec<&str> = EventFilter::ALL.iter().map(|f| f.label()).collect();
        format!("unknown filter '{}' (expected {})", value, names.join(", "))
    })
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub async fn handle_cli() -> Result<bool> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return Ok(false); // No subcommand, run the TUI
    };

    match command {
        Commands::Config { show, reset, path } => {
            if path {
                handle_config_path()?;
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset()?;
            } else {
                // No flag provided, show help
                println!("Usage: secureview config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
        }
        Commands::Analyze { image } => handle_analyze(&image).await?,
        Commands::Devices { json } => handle_devices(json)?,
        Commands::Events { filter, json } => handle_events(filter, json)?,
    }

    Ok(true)
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme.as_str());
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!();
    println!("[analysis]");
    let key = match config.analysis.key_source {
        KeySource::Env => "set (environment)",
        KeySource::File => "set (config file)",
        KeySource::None => "not set, simulation mode",
    };
    println!("api_key = {}", key);
    println!("endpoint = {:?}", config.analysis.endpoint);
    println!("model = {:?}", config.analysis.model);
    println!("timeout_secs = {}", config.analysis.timeout_secs);
    println!();
    println!("[simulation]");
    println!(
        "bitrate_interval_ms = {}",
        config.simulation.bitrate_interval_ms
    );
    println!("pairing_delay_ms = {}", config.simulation.pairing_delay_ms);
    println!("cell_px = {}", config.simulation.cell_px);

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().context("Failed to flush prompt")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read answer")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    // Write the default config (using Config's single source of truth)
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

async fn handle_analyze(image: &Path) -> Result<()> {
    let config = Config::from_env();
    let _guard = logging::init(&config.logging, LogSink::Stderr, &LogBuffer::new());

    let bytes = std::fs::read(image)
        .with_context(|| format!("Failed to read image {}", image.display()))?;

    let analyzer = FrameAnalyzer::new(&config.analysis);
    let text = match analysis::encode_frame(&bytes) {
        Ok(encoded) => analyzer.analyze(&encoded).await,
        Err(e) => {
            tracing::warn!("Cannot analyze {}: {}", image.display(), e);
            analysis::UNAVAILABLE_MESSAGE.to_string()
        }
    };

    println!("{}", text);
    Ok(())
}

fn handle_devices(json: bool) -> Result<()> {
    let devices = seed::devices();

    if json {
        let out = serde_json::to_string_pretty(&devices).context("Failed to serialize devices")?;
        println!("{}", out);
        return Ok(());
    }

    println!(
        "{:<8} {:<12} {:<10} {:<10} {:>7} {:<6} LAST ACTIVE",
        "ID", "NAME", "STATUS", "LOCATION", "BATTERY", "SIGNAL"
    );
    for device in &devices {
        println!(
            "{:<8} {:<12} {:<10} {:<10} {:>7} {:<6} {}",
            device.id,
            device.name,
            device.status.as_str(),
            device.location,
            device.battery_label(),
            device.signal_bars(),
            device.last_active
        );
    }
    Ok(())
}

fn handle_events(filter: EventFilter, json: bool) -> Result<()> {
    let events = seed::events();
    let shown = filter.apply(&events);

    if json {
        let out = serde_json::to_string_pretty(&shown).context("Failed to serialize events")?;
        println!("{}", out);
        return Ok(());
    }

    if shown.is_empty() {
        println!("No {} events", filter);
        return Ok(());
    }

    println!(
        "{:<6} {:<10} {:<16} {:<12} DURATION",
        "ID", "TIME", "EVENT", "CAMERA"
    );
    for event in shown {
        println!(
            "{:<6} {:<10} {:<16} {:<12} {}",
            event.id,
            event.timestamp,
            event.category.headline(),
            event.camera_name,
            event.duration
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn filter_flag_parses_labels() {
        let cli = Cli::try_parse_from(["secureview", "events", "--filter", "Pet", "--json"])
            .expect("valid args");
        match cli.command {
            Some(Commands::Events { filter, json }) => {
                assert_eq!(filter, EventFilter::Pet);
                assert!(json);
            }
            _ => panic!("expected events command"),
        }

        assert!(Cli::try_parse_from(["secureview", "events", "--filter", "cars"]).is_err());
    }

    #[test]
    fn no_subcommand_runs_tui() {
        let cli = Cli::try_parse_from(["secureview"]).expect("valid args");
        assert!(cli.command.is_none());
    }
}
