//! Camera devices and the ordered device list
//!
//! The list is append-only: seed devices at startup, paired devices when the
//! setup wizard completes. Nothing is ever removed.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection state reported by a camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Online,
    Offline,
    Recording,
}

impl DeviceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Online => "online",
            DeviceStatus::Offline => "offline",
            DeviceStatus::Recording => "recording",
        }
    }

    /// Label for the card badge ("Live" for online cameras)
    pub fn badge(&self) -> &'static str {
        match self {
            DeviceStatus::Online => "Live",
            other => other.as_str(),
        }
    }

    /// Mocked connection speed shown on dashboard cards
    pub fn speed_label(&self) -> &'static str {
        match self {
            DeviceStatus::Online => "128 KB/s",
            _ => "0 KB/s",
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: DeviceStatus,
    /// Opaque media reference, never inspected
    pub thumbnail_url: String,
    pub last_active: String,
    /// Battery percentage, absent for mains-powered units
    pub battery: Option<u8>,
    /// Signal bars 0-4, absent until the camera reports one
    pub signal: Option<u8>,
}

impl Device {
    /// Signal bars rendered as a 4-slot glyph string, e.g. "▂▄▆_"
    pub fn signal_bars(&self) -> String {
        const BARS: [char; 4] = ['▂', '▄', '▆', '█'];
        let level = self.signal.unwrap_or(0).min(4) as usize;
        BARS.iter()
            .enumerate()
            .map(|(i, bar)| if i < level { *bar } else { '_' })
            .collect()
    }

    /// Battery readout, "--" when unknown
    pub fn battery_label(&self) -> String {
        match self.battery {
            Some(pct) => format!("{}%", pct),
            None => "--".to_string(),
        }
    }
}

/// Ordered, append-only list of devices
#[derive(Debug, Clone, Default)]
pub struct DeviceList {
    devices: Vec<Device>,
}

impl DeviceList {
    pub fn new(devices: Vec<Device>) -> Self {
        Self { devices }
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    pub fn first(&self) -> Option<&Device> {
        self.devices.first()
    }

    pub fn at(&self, index: usize) -> Option<&Device> {
        self.devices.get(index)
    }

    /// Look up a device, falling back to the first device on a miss
    ///
    /// Returns `None` only when the list is empty.
    pub fn resolve_or_first(&self, id: &str) -> Option<&Device> {
        match self.get(id) {
            Some(device) => Some(device),
            None => {
                let fallback = self.first();
                if let Some(dev) = fallback {
                    tracing::debug!(
                        "Device '{}' not found, falling back to '{}'",
                        id,
                        dev.id
                    );
                }
                fallback
            }
        }
    }

    /// Append the record produced by a completed pairing, returning its id
    pub fn register_paired(&mut self) -> String {
        let mut id = format!("cam-{}", Utc::now().timestamp_millis());
        while self.get(&id).is_some() {
            // Two pairings inside the same millisecond
            id.push('x');
        }

        self.devices.push(Device {
            id: id.clone(),
            name: "New Camera".to_string(),
            location: "Living Room".to_string(),
            status: DeviceStatus::Online,
            thumbnail_url: "https://picsum.photos/800/450?random=99".to_string(),
            last_active: "Just now".to_string(),
            battery: Some(100),
            signal: None,
        });

        tracing::info!("Paired new device {}", id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed;

    #[test]
    fn resolve_falls_back_to_first() {
        let list = DeviceList::new(seed::devices());
        let dev = list.resolve_or_first("cam-missing").unwrap();
        assert_eq!(dev.id, "cam-01");
    }

    #[test]
    fn resolve_on_empty_list_is_none() {
        let list = DeviceList::default();
        assert!(list.resolve_or_first("cam-01").is_none());
    }

    #[test]
    fn paired_devices_append_with_unique_ids() {
        let mut list = DeviceList::new(seed::devices());
        let a = list.register_paired();
        let b = list.register_paired();

        assert_eq!(list.len(), 5);
        assert_ne!(a, b);
        assert_eq!(list.at(3).unwrap().id, a);
        assert_eq!(list.at(4).unwrap().name, "New Camera");
        assert_eq!(list.at(4).unwrap().battery, Some(100));
    }

    #[test]
    fn signal_bars_render() {
        let mut dev = seed::devices().remove(0);
        dev.signal = Some(2);
        assert_eq!(dev.signal_bars(), "▂▄__");
        dev.signal = None;
        assert_eq!(dev.signal_bars(), "____");
    }

    #[test]
    fn online_badge_says_live() {
        assert_eq!(DeviceStatus::Online.badge(), "Live");
        assert_eq!(DeviceStatus::Offline.badge(), "offline");
        assert_eq!(DeviceStatus::Offline.speed_label(), "0 KB/s");
    }
}
