// Navigation state machine
//
// Holds the current screen and a single remembered "previous" screen used by
// back-navigation out of playback. This is one slot, not a stack: entering
// playback again before going back overwrites it.
//
// Every mutation goes through `Navigator::apply` with a named action. Actions
// that make no sense for the current screen are ignored, never errors.

pub mod screen;

pub use screen::{Screen, ScreenKind, Tab};

use crate::model::DeviceList;

/// Named navigation actions emitted by the views
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Dashboard: open a camera's live view
    SelectDevice(String),
    /// Dashboard: start the pairing wizard
    AddDevice,
    /// Header back control on any detail screen
    Back,
    /// Live view: open playback for the current camera
    RequestHistory,
    /// Events feed: open playback for an event
    SelectEvent { device_id: String, timestamp: String },
    /// Setup wizard finished pairing
    CompleteSetup,
    /// Setup wizard abandoned
    CancelSetup,
    /// Tab bar button
    Tab(Tab),
}

/// Outcome of applying an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Moved { from: ScreenKind, to: ScreenKind },
    Ignored,
}

impl Transition {
    pub fn moved(&self) -> bool {
        matches!(self, Transition::Moved { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    screen: Screen,
    previous: Screen,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            screen: Screen::Dashboard,
            previous: Screen::Dashboard,
        }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn previous(&self) -> &Screen {
        &self.previous
    }

    pub fn tab_bar_visible(&self) -> bool {
        self.screen.kind().shows_tab_bar()
    }

    pub fn selected_device(&self) -> Option<&str> {
        self.screen.device_id()
    }

    /// Apply an action; `devices` is consulted for lookups and grows on setup completion
    pub fn apply(&mut self, action: NavAction, devices: &mut DeviceList) -> Transition {
        let from = self.screen.kind();

        let next = match (&self.screen, action) {
            (Screen::Dashboard, NavAction::SelectDevice(id)) => {
                if devices.get(&id).is_none() {
                    tracing::debug!("Ignoring selection of unknown device '{}'", id);
                    return Transition::Ignored;
                }
                self.previous = Screen::Dashboard;
                Screen::Live { device_id: id }
            }
            (Screen::Dashboard, NavAction::AddDevice) => Screen::Setup,
            (Screen::Live { .. }, NavAction::Back) => Screen::Dashboard,
            (Screen::Live { device_id }, NavAction::RequestHistory) => {
                let device_id = device_id.clone();
                self.previous = self.screen.clone();
                Screen::Playback {
                    device_id,
                    seek: None,
                }
            }
            (
                Screen::Events,
                NavAction::SelectEvent {
                    device_id,
                    timestamp,
                },
            ) => {
                if devices.is_empty() {
                    tracing::warn!("No devices registered, cannot open playback");
                    return Transition::Ignored;
                }
                let device_id = devices
                    .resolve_or_first(&device_id)
                    .map_or(device_id, |device| device.id.clone());
                self.previous = Screen::Events;
                Screen::Playback {
                    device_id,
                    seek: Some(timestamp),
                }
            }
            (Screen::Playback { .. }, NavAction::Back) => self.previous.clone(),
            (Screen::Setup, NavAction::CompleteSetup) => {
                devices.register_paired();
                Screen::Dashboard
            }
            (Screen::Setup, NavAction::CancelSetup | NavAction::Back) => Screen::Dashboard,
            (Screen::Settings, NavAction::Back) => Screen::Dashboard,
            (_, NavAction::Tab(tab)) => match tab {
                Tab::Home => Screen::Dashboard,
                Tab::Events => {
                    self.previous = Screen::Dashboard;
                    Screen::Events
                }
                Tab::Settings => Screen::Settings,
            },
            (screen, action) => {
                tracing::debug!("Ignoring {:?} on {}", action, screen.kind());
                return Transition::Ignored;
            }
        };

        self.screen = next;
        let to = self.screen.kind();
        tracing::debug!("Navigated {} -> {}", from, to);
        Transition::Moved { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed;

    fn setup() -> (Navigator, DeviceList) {
        (Navigator::new(), DeviceList::new(seed::devices()))
    }

    fn select_event(device_id: &str, timestamp: &str) -> NavAction {
        NavAction::SelectEvent {
            device_id: device_id.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn starts_on_dashboard_with_tab_bar() {
        let nav = Navigator::new();
        assert_eq!(nav.screen(), &Screen::Dashboard);
        assert!(nav.tab_bar_visible());
        assert!(nav.selected_device().is_none());
    }

    #[test]
    fn select_device_then_back() {
        let (mut nav, mut devices) = setup();

        let t = nav.apply(NavAction::SelectDevice("cam-02".into()), &mut devices);
        assert_eq!(
            t,
            Transition::Moved {
                from: ScreenKind::Dashboard,
                to: ScreenKind::Live
            }
        );
        assert!(!nav.tab_bar_visible());
        assert_eq!(nav.selected_device(), Some("cam-02"));

        nav.apply(NavAction::Back, &mut devices);
        assert_eq!(nav.screen(), &Screen::Dashboard);
        assert!(nav.tab_bar_visible());
    }

    #[test]
    fn unknown_device_is_ignored() {
        let (mut nav, mut devices) = setup();
        let t = nav.apply(NavAction::SelectDevice("cam-99".into()), &mut devices);
        assert_eq!(t, Transition::Ignored);
        assert_eq!(nav.screen(), &Screen::Dashboard);
    }

    #[test]
    fn back_depth_is_one_level_through_live() {
        let (mut nav, mut devices) = setup();
        let mut seen = vec![nav.screen().kind()];

        for action in [
            NavAction::SelectDevice("cam-01".into()),
            NavAction::RequestHistory,
            NavAction::Back,
            NavAction::Back,
        ] {
            assert!(nav.apply(action, &mut devices).moved());
            seen.push(nav.screen().kind());
        }

        assert_eq!(
            seen,
            vec![
                ScreenKind::Dashboard,
                ScreenKind::Live,
                ScreenKind::Playback,
                ScreenKind::Live,
                ScreenKind::Dashboard,
            ]
        );
        assert!(nav.tab_bar_visible());
    }

    #[test]
    fn history_from_live_keeps_device_and_clears_seek() {
        let (mut nav, mut devices) = setup();
        nav.apply(NavAction::SelectDevice("cam-03".into()), &mut devices);
        nav.apply(NavAction::RequestHistory, &mut devices);

        assert_eq!(
            nav.screen(),
            &Screen::Playback {
                device_id: "cam-03".into(),
                seek: None
            }
        );
        assert!(!nav.tab_bar_visible());

        // Back lands on the same camera's live view, tab bar still hidden
        nav.apply(NavAction::Back, &mut devices);
        assert_eq!(nav.selected_device(), Some("cam-03"));
        assert!(!nav.tab_bar_visible());
    }

    #[test]
    fn event_playback_returns_to_events() {
        let (mut nav, mut devices) = setup();
        nav.apply(NavAction::Tab(Tab::Events), &mut devices);
        nav.apply(select_event("cam-02", "09:30"), &mut devices);

        assert_eq!(nav.screen().seek(), Some("09:30"));
        assert_eq!(nav.selected_device(), Some("cam-02"));
        assert!(!nav.tab_bar_visible());

        nav.apply(NavAction::Back, &mut devices);
        assert_eq!(nav.screen(), &Screen::Events);
        assert!(nav.tab_bar_visible());
    }

    #[test]
    fn event_with_missing_device_falls_back_to_first() {
        let (mut nav, mut devices) = setup();
        nav.apply(NavAction::Tab(Tab::Events), &mut devices);
        let t = nav.apply(select_event("cam-gone", "12:15"), &mut devices);

        assert!(t.moved());
        assert_eq!(nav.selected_device(), Some("cam-01"));
    }

    #[test]
    fn event_with_no_devices_is_ignored() {
        let mut nav = Navigator::new();
        let mut devices = DeviceList::default();
        nav.apply(NavAction::Tab(Tab::Events), &mut devices);

        let t = nav.apply(select_event("cam-01", "12:15"), &mut devices);
        assert_eq!(t, Transition::Ignored);
        assert_eq!(nav.screen(), &Screen::Events);
    }

    #[test]
    fn previous_slot_is_overwritten_not_stacked() {
        let (mut nav, mut devices) = setup();
        nav.apply(NavAction::Tab(Tab::Events), &mut devices);
        nav.apply(select_event("cam-01", "14:42"), &mut devices);
        assert_eq!(nav.previous(), &Screen::Events);

        // Jump to the dashboard via a tab and open a camera: previous is replaced
        nav.apply(NavAction::Tab(Tab::Home), &mut devices);
        nav.apply(NavAction::SelectDevice("cam-02".into()), &mut devices);
        nav.apply(NavAction::RequestHistory, &mut devices);
        nav.apply(NavAction::Back, &mut devices);
        nav.apply(NavAction::Back, &mut devices);

        assert_eq!(nav.screen(), &Screen::Dashboard);
    }

    #[test]
    fn events_tab_resets_previous() {
        let (mut nav, mut devices) = setup();
        nav.apply(NavAction::SelectDevice("cam-01".into()), &mut devices);
        nav.apply(NavAction::RequestHistory, &mut devices);
        assert_eq!(nav.previous().kind(), ScreenKind::Live);

        nav.apply(NavAction::Tab(Tab::Events), &mut devices);
        assert_eq!(nav.previous(), &Screen::Dashboard);
        assert!(nav.tab_bar_visible());
    }

    #[test]
    fn setup_complete_appends_one_device() {
        let (mut nav, mut devices) = setup();
        nav.apply(NavAction::AddDevice, &mut devices);
        assert_eq!(nav.screen(), &Screen::Setup);
        assert!(!nav.tab_bar_visible());

        nav.apply(NavAction::CompleteSetup, &mut devices);
        assert_eq!(devices.len(), 4);
        assert_eq!(nav.screen(), &Screen::Dashboard);
        assert!(nav.tab_bar_visible());
    }

    #[test]
    fn setup_cancel_adds_nothing() {
        let (mut nav, mut devices) = setup();
        nav.apply(NavAction::AddDevice, &mut devices);
        nav.apply(NavAction::CancelSetup, &mut devices);
        assert_eq!(devices.len(), 3);
        assert_eq!(nav.screen(), &Screen::Dashboard);
    }

    #[test]
    fn complete_outside_setup_is_ignored() {
        let (mut nav, mut devices) = setup();
        assert_eq!(
            nav.apply(NavAction::CompleteSetup, &mut devices),
            Transition::Ignored
        );
        assert_eq!(devices.len(), 3);
    }

    #[test]
    fn settings_tab_and_back() {
        let (mut nav, mut devices) = setup();
        nav.apply(NavAction::Tab(Tab::Settings), &mut devices);
        assert_eq!(nav.screen(), &Screen::Settings);
        assert!(nav.tab_bar_visible());

        nav.apply(NavAction::Back, &mut devices);
        assert_eq!(nav.screen(), &Screen::Dashboard);
    }

    #[test]
    fn back_on_dashboard_is_ignored() {
        let (mut nav, mut devices) = setup();
        assert_eq!(nav.apply(NavAction::Back, &mut devices), Transition::Ignored);
    }
}
