//! Simulation timing and pointer scaling

use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Bitrate readout jitter period on the live view
    pub bitrate_interval_ms: u64,
    /// Delay before the pairing wizard's Connecting step completes
    pub pairing_delay_ms: u64,
    /// Pixels per terminal column when converting mouse drags
    pub cell_px: u16,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            bitrate_interval_ms: 2000,
            pairing_delay_ms: 4000,
            cell_px: 8,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileSimulation {
    pub bitrate_interval_ms: Option<u64>,
    pub pairing_delay_ms: Option<u64>,
    pub cell_px: Option<u16>,
}

impl SimulationConfig {
    /// Create from file config with defaults (zero values are rejected)
    pub fn from_file(file: Option<FileSimulation>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            bitrate_interval_ms: file
                .bitrate_interval_ms
                .filter(|v| *v > 0)
                .unwrap_or(defaults.bitrate_interval_ms),
            pairing_delay_ms: file.pairing_delay_ms.unwrap_or(defaults.pairing_delay_ms),
            cell_px: file
                .cell_px
                .filter(|v| *v > 0)
                .unwrap_or(defaults.cell_px),
        }
    }

    pub fn bitrate_interval(&self) -> Duration {
        Duration::from_millis(self.bitrate_interval_ms)
    }

    pub fn pairing_delay(&self) -> Duration {
        Duration::from_millis(self.pairing_delay_ms)
    }
}
