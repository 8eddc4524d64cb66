// SecureView - security camera companion app in a terminal phone frame
//
// Simulates a consumer camera app: a dashboard of cameras, live view with a
// jittering bitrate readout, an activity feed, timeline playback with a
// draggable ruler, a pairing wizard and iOS/Android platform styles.
//
// Architecture:
// - Model: seed cameras and recorded events
// - Navigator: screen transitions and the single back slot
// - Timeline: ruler offset <-> clock time mapping and drag tracking
// - Sim: cancellable background timers (bitrate, pairing, analysis)
// - Analysis: frame description over HTTP, with a simulation fallback
// - TUI (ratatui): phone frame, screens and side panel
// - Channels: sim tasks report back to the event loop over mpsc

mod analysis;
mod cli;
mod config;
mod logging;
mod model;
mod nav;
mod sim;
mod theme;
mod timeline;
mod tui;

use analysis::FrameAnalyzer;
use anyhow::Result;
use config::Config;
use logging::{LogBuffer, LogSink};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config, analyze, devices, events)
    // If a command was handled, exit early
    if cli::handle_cli().await? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Extract bundled themes on first run
    theme::ensure_themes_extracted();

    let config = Config::from_env();

    // In TUI mode logs are captured to the buffer (stdout would garble the
    // display). The guard flushes file logging and must outlive the TUI.
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, LogSink::Tui, &log_buffer);

    tracing::debug!(
        "Config loaded: theme={}, analysis key={:?}",
        config.theme,
        config.analysis.key_source
    );

    let analyzer = FrameAnalyzer::new(&config.analysis);

    tui::run_tui(config, log_buffer, analyzer).await
}
