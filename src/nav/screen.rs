//! Screens and tab-bar targets
//!
//! `Screen` carries the data each screen needs, so a live view without a
//! device (or playback without one) cannot be constructed.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Live {
        device_id: String,
    },
    Events,
    Playback {
        device_id: String,
        /// Timestamp label to seek to on entry ("14:42", or a relative label)
        seek: Option<String>,
    },
    Setup,
    Settings,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Dashboard => ScreenKind::Dashboard,
            Screen::Live { .. } => ScreenKind::Live,
            Screen::Events => ScreenKind::Events,
            Screen::Playback { .. } => ScreenKind::Playback,
            Screen::Setup => ScreenKind::Setup,
            Screen::Settings => ScreenKind::Settings,
        }
    }

    /// Device the screen is showing, if any
    pub fn device_id(&self) -> Option<&str> {
        match self {
            Screen::Live { device_id } | Screen::Playback { device_id, .. } => Some(device_id),
            _ => None,
        }
    }

    pub fn seek(&self) -> Option<&str> {
        match self {
            Screen::Playback { seek, .. } => seek.as_deref(),
            _ => None,
        }
    }
}

/// Screen tag without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Dashboard,
    Live,
    Events,
    Playback,
    Setup,
    Settings,
}

impl ScreenKind {
    /// Top-level screens show the tab bar; detail and modal screens hide it
    pub fn shows_tab_bar(&self) -> bool {
        matches!(
            self,
            ScreenKind::Dashboard | ScreenKind::Events | ScreenKind::Settings
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScreenKind::Dashboard => "Dashboard",
            ScreenKind::Live => "Live",
            ScreenKind::Events => "Events",
            ScreenKind::Playback => "Playback",
            ScreenKind::Setup => "Setup",
            ScreenKind::Settings => "Settings",
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tab-bar buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Events,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Events, Tab::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Events => "Events",
            Tab::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Home => "▦",
            Tab::Events => "◷",
            Tab::Settings => "⚙",
        }
    }

    /// Tab highlighted for a screen, if any
    pub fn for_screen(kind: ScreenKind) -> Option<Tab> {
        match kind {
            ScreenKind::Dashboard => Some(Tab::Home),
            ScreenKind::Events => Some(Tab::Events),
            ScreenKind::Settings => Some(Tab::Settings),
            _ => None,
        }
    }
}
