// TUI application state
//
// One owned `App` holds everything the phone frame shows: the device list,
// the navigator and the state of the screen on display. Screen state is
// rebuilt whenever the navigator moves, which drops (and so aborts) any timer
// the previous screen owned.

use chrono::{Days, Local, NaiveDate};
use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc;

use super::components::Toast;
use super::modal::Modal;
use crate::analysis::FrameAnalyzer;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::model::{seed, DeviceList, EventFilter, RecordingEvent};
use crate::nav::{NavAction, Navigator, Screen, Tab, Transition};
use crate::sim::{self, bitrate, pairing, Generation, ScheduledTask, SimEvent};
use crate::theme::{Theme, ThemeVariant};
use crate::timeline::{PointerInput, Scrubber, TimeMapper};

/// Days shown on the playback calendar strip (today and the six before it)
pub const CALENDAR_DAYS: usize = 7;

/// Events listed under the playback ruler
pub const PLAYBACK_EVENTS: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Live view
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
    #[default]
    Hd,
    Sd,
}

impl Quality {
    pub fn label(&self) -> &'static str {
        match self {
            Quality::Hd => "HD",
            Quality::Sd => "SD",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Quality::Hd => Quality::Sd,
            Quality::Sd => Quality::Hd,
        }
    }
}

/// Live view toolbar buttons, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveTool {
    AiDetect,
    History,
    Snap,
    Record,
    Alarm,
}

impl LiveTool {
    pub const ALL: [LiveTool; 5] = [
        LiveTool::AiDetect,
        LiveTool::History,
        LiveTool::Snap,
        LiveTool::Record,
        LiveTool::Alarm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LiveTool::AiDetect => "AI Detect",
            LiveTool::History => "History",
            LiveTool::Snap => "Snap",
            LiveTool::Record => "Record",
            LiveTool::Alarm => "Alarm",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            LiveTool::AiDetect => "⚡",
            LiveTool::History => "↺",
            LiveTool::Snap => "◉",
            LiveTool::Record => "●",
            LiveTool::Alarm => "♫",
        }
    }

    /// Shortcut key shown under the button
    pub fn key(&self) -> char {
        match self {
            LiveTool::AiDetect => 'a',
            LiveTool::History => 'h',
            LiveTool::Snap => 's',
            LiveTool::Record => 'r',
            LiveTool::Alarm => 'l',
        }
    }
}

/// The "Gemini Vision" overlay on the live feed
#[derive(Debug, Default)]
pub enum AnalysisPanel {
    #[default]
    Hidden,
    Analyzing(ScheduledTask),
    Ready(String),
}

#[derive(Debug)]
pub struct LiveState {
    pub device_id: String,
    pub muted: bool,
    pub quality: Quality,
    pub talking: bool,
    /// Unfloored reading, see `bitrate::display_kbps`
    pub bitrate: f64,
    /// Highlighted toolbar button
    pub tool: usize,
    pub analysis: AnalysisPanel,
    bitrate_task: ScheduledTask,
}

impl LiveState {
    fn new(device_id: String, bitrate_task: ScheduledTask) -> Self {
        Self {
            device_id,
            muted: false,
            quality: Quality::default(),
            talking: false,
            bitrate: bitrate::START_KBPS,
            tool: 0,
            analysis: AnalysisPanel::Hidden,
            bitrate_task,
        }
    }

    #[cfg(test)]
    pub fn bitrate_generation(&self) -> Generation {
        self.bitrate_task.generation()
    }

    pub fn selected_tool(&self) -> LiveTool {
        LiveTool::ALL[self.tool.min(LiveTool::ALL.len() - 1)]
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.analysis, AnalysisPanel::Analyzing(_))
    }

    fn owns_analysis(&self, generation: Generation) -> bool {
        matches!(&self.analysis, AnalysisPanel::Analyzing(task) if task.owns(generation))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Playback
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct PlaybackState {
    pub device_id: String,
    pub scrubber: Scrubber,
    pub playing: bool,
    /// Index into `calendar_days`, 0 = six days ago
    pub day: usize,
    /// Highlighted row of the event list
    pub selected: usize,
}

impl PlaybackState {
    fn new(device_id: String, seek: Option<&str>) -> Self {
        let mut scrubber = Scrubber::new(TimeMapper::default());
        if let Some(label) = seek {
            scrubber.seek_label(label);
        }

        Self {
            device_id,
            scrubber,
            playing: true,
            day: CALENDAR_DAYS - 1,
            selected: 0,
        }
    }

    /// Selected calendar date relative to `today`
    pub fn date(&self, today: NaiveDate) -> NaiveDate {
        calendar_days(today)
            .get(self.day)
            .copied()
            .unwrap_or(today)
    }
}

/// Today and the six days before it, oldest first
pub fn calendar_days(today: NaiveDate) -> Vec<NaiveDate> {
    (0..CALENDAR_DAYS as u64)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Setup wizard
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupStep {
    #[default]
    SelectModel,
    ResetDevice,
    WifiConfig,
    ScanCode,
    Connecting,
}

impl SetupStep {
    pub const COUNT: usize = 5;

    /// 1-based position shown in the progress dots
    pub fn number(&self) -> usize {
        match self {
            SetupStep::SelectModel => 1,
            SetupStep::ResetDevice => 2,
            SetupStep::WifiConfig => 3,
            SetupStep::ScanCode => 4,
            SetupStep::Connecting => 5,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SetupStep::SelectModel => "Select Model",
            SetupStep::ResetDevice => "Reset Device",
            SetupStep::WifiConfig => "WiFi Configuration",
            SetupStep::ScanCode => "Scan with Camera",
            SetupStep::Connecting => "Connecting...",
        }
    }

    fn next(&self) -> Option<Self> {
        match self {
            SetupStep::SelectModel => Some(SetupStep::ResetDevice),
            SetupStep::ResetDevice => Some(SetupStep::WifiConfig),
            SetupStep::WifiConfig => Some(SetupStep::ScanCode),
            SetupStep::ScanCode => Some(SetupStep::Connecting),
            SetupStep::Connecting => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraModel {
    #[default]
    ProCamera,
    Doorbell,
}

impl CameraModel {
    pub const ALL: [CameraModel; 2] = [CameraModel::ProCamera, CameraModel::Doorbell];

    pub fn label(&self) -> &'static str {
        match self {
            CameraModel::ProCamera => "Pro Camera",
            CameraModel::Doorbell => "Doorbell",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CameraModel::ProCamera => "◉",
            CameraModel::Doorbell => "▣",
        }
    }

    fn toggled(&self) -> Self {
        match self {
            CameraModel::ProCamera => CameraModel::Doorbell,
            CameraModel::Doorbell => CameraModel::ProCamera,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WifiField {
    #[default]
    Ssid,
    Password,
}

pub const DEFAULT_SSID: &str = "Home_WiFi_5G";

#[derive(Debug)]
pub struct SetupState {
    pub step: SetupStep,
    pub model: CameraModel,
    pub red_light_confirmed: bool,
    pub ssid: String,
    pub password: String,
    pub field: WifiField,
    pairing: Option<ScheduledTask>,
}

impl Default for SetupState {
    fn default() -> Self {
        Self {
            step: SetupStep::default(),
            model: CameraModel::default(),
            red_light_confirmed: false,
            ssid: DEFAULT_SSID.to_string(),
            password: String::new(),
            field: WifiField::default(),
            pairing: None,
        }
    }
}

impl SetupState {
    /// True while the WiFi form owns character keys
    pub fn is_editing(&self) -> bool {
        self.step == SetupStep::WifiConfig
    }

    fn owns_pairing(&self, generation: Generation) -> bool {
        self.pairing.as_ref().is_some_and(|t| t.owns(generation))
    }

    fn field_mut(&mut self) -> &mut String {
        match self.field {
            WifiField::Ssid => &mut self.ssid,
            WifiField::Password => &mut self.password,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Top-level screens
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct DashboardState {
    /// Card index; `devices.len()` is the add-device button
    pub selected: usize,
}

#[derive(Debug, Default)]
pub struct EventsState {
    pub filter: EventFilter,
    /// Row within the filtered feed
    pub selected: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    PlatformStyle,
    PushNotifications,
    CellularData,
    SignOut,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 4] = [
        SettingsRow::PlatformStyle,
        SettingsRow::PushNotifications,
        SettingsRow::CellularData,
        SettingsRow::SignOut,
    ];
}

#[derive(Debug, Default)]
pub struct SettingsState {
    pub selected: usize,
}

impl SettingsState {
    pub fn row(&self) -> SettingsRow {
        SettingsRow::ALL[self.selected.min(SettingsRow::ALL.len() - 1)]
    }
}

/// Session-wide toggles from the settings screen
#[derive(Debug, Clone, Copy)]
pub struct Preferences {
    pub push_notifications: bool,
    pub cellular_data: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            push_notifications: true,
            cellular_data: false,
        }
    }
}

/// Per-screen state, matching the navigator's current `Screen`
#[derive(Debug)]
pub enum ScreenState {
    Dashboard(DashboardState),
    Live(LiveState),
    Events(EventsState),
    Playback(PlaybackState),
    Setup(SetupState),
    Settings(SettingsState),
}

/// Clickable regions recorded during the last render
#[derive(Debug, Default, Clone)]
pub struct HitAreas {
    /// Inside of the phone frame
    pub screen: Option<Rect>,
    pub ruler: Option<Rect>,
    pub tabs: Vec<(Tab, Rect)>,
}

impl HitAreas {
    pub fn tab_at(&self, column: u16, row: u16) -> Option<Tab> {
        let pos = Position::new(column, row);
        self.tabs
            .iter()
            .find(|(_, area)| area.contains(pos))
            .map(|(tab, _)| *tab)
    }

    pub fn on_ruler(&self, column: u16, row: u16) -> bool {
        self.ruler
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    pub fn on_screen(&self, column: u16, row: u16) -> bool {
        self.screen
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App
// ─────────────────────────────────────────────────────────────────────────────

pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub devices: DeviceList,
    pub events: Vec<RecordingEvent>,
    pub nav: Navigator,
    pub view: ScreenState,
    pub prefs: Preferences,
    pub toast: Option<Toast>,
    pub modal: Option<Modal>,
    pub log_buffer: LogBuffer,
    pub hit: HitAreas,
    pub should_quit: bool,
    analyzer: FrameAnalyzer,
    sim_tx: mpsc::Sender<SimEvent>,
}

impl App {
    pub fn new(
        config: Config,
        log_buffer: LogBuffer,
        analyzer: FrameAnalyzer,
        sim_tx: mpsc::Sender<SimEvent>,
    ) -> Self {
        let theme = Theme::for_variant(config.theme);
        Self {
            config,
            theme,
            devices: DeviceList::new(seed::devices()),
            events: seed::events(),
            nav: Navigator::new(),
            view: ScreenState::Dashboard(DashboardState::default()),
            prefs: Preferences::default(),
            toast: None,
            modal: None,
            log_buffer,
            hit: HitAreas::default(),
            should_quit: false,
            analyzer,
            sim_tx,
        }
    }

    pub fn analyzer(&self) -> &FrameAnalyzer {
        &self.analyzer
    }

    /// Apply a navigation action and rebuild screen state if the screen changed
    pub fn navigate(&mut self, action: NavAction) -> Transition {
        let transition = self.nav.apply(action, &mut self.devices);
        if transition.moved() {
            self.view = self.enter(self.nav.screen());
        }
        transition
    }

    fn enter(&self, screen: &Screen) -> ScreenState {
        match screen {
            Screen::Dashboard => ScreenState::Dashboard(DashboardState::default()),
            Screen::Live { device_id } => {
                let task = bitrate::spawn(
                    self.config.simulation.bitrate_interval(),
                    self.sim_tx.clone(),
                );
                ScreenState::Live(LiveState::new(device_id.clone(), task))
            }
            Screen::Events => ScreenState::Events(EventsState::default()),
            Screen::Playback { device_id, seek } => {
                ScreenState::Playback(PlaybackState::new(device_id.clone(), seek.as_deref()))
            }
            Screen::Setup => ScreenState::Setup(SetupState::default()),
            Screen::Settings => ScreenState::Settings(SettingsState::default()),
        }
    }

    /// Route a background message to the screen that owns its task
    pub fn handle_sim_event(&mut self, event: SimEvent) {
        match event {
            SimEvent::Bitrate { generation, kbps } => {
                if let ScreenState::Live(live) = &mut self.view {
                    if live.bitrate_task.owns(generation) {
                        live.bitrate = kbps;
                        return;
                    }
                }
                tracing::trace!("Discarding stale bitrate reading");
            }
            SimEvent::AnalysisReady { generation, text } => {
                if let ScreenState::Live(live) = &mut self.view {
                    if live.owns_analysis(generation) {
                        live.analysis = AnalysisPanel::Ready(text);
                        return;
                    }
                }
                tracing::debug!("Discarding analysis result for a closed live view");
            }
            SimEvent::PairingComplete { generation } => {
                let owned =
                    matches!(&self.view, ScreenState::Setup(setup) if setup.owns_pairing(generation));
                if !owned {
                    tracing::debug!("Discarding pairing result for a closed wizard");
                    return;
                }
                if self.navigate(NavAction::CompleteSetup).moved() {
                    self.show_toast("✓ New Camera added");
                }
            }
        }
    }

    /// Tab-bar button; ignored while the tab bar is hidden
    pub fn select_tab(&mut self, tab: Tab) {
        if !self.nav.tab_bar_visible() {
            return;
        }
        self.navigate(NavAction::Tab(tab));
    }

    /// Header back control
    pub fn back(&mut self) {
        let action = match self.view {
            ScreenState::Setup(_) => NavAction::CancelSetup,
            _ => NavAction::Back,
        };
        self.navigate(action);
    }

    /// True while a form field should receive character keys
    pub fn is_text_input_active(&self) -> bool {
        matches!(&self.view, ScreenState::Setup(setup) if setup.is_editing())
    }

    // ─── Dashboard ────────────────────────────────────────────

    pub fn dashboard_move(&mut self, delta: isize) {
        let count = self.devices.len() + 1;
        if let ScreenState::Dashboard(state) = &mut self.view {
            state.selected = step_index(state.selected, delta, count);
        }
    }

    pub fn dashboard_activate(&mut self) {
        let ScreenState::Dashboard(state) = &self.view else {
            return;
        };
        let action = match self.devices.at(state.selected) {
            Some(device) => NavAction::SelectDevice(device.id.clone()),
            None => NavAction::AddDevice,
        };
        self.navigate(action);
    }

    // ─── Events feed ──────────────────────────────────────────

    pub fn filtered_events(&self) -> Vec<&RecordingEvent> {
        match &self.view {
            ScreenState::Events(state) => state.filter.apply(&self.events),
            _ => self.events.iter().collect(),
        }
    }

    pub fn events_set_filter(&mut self, filter: EventFilter) {
        if let ScreenState::Events(state) = &mut self.view {
            state.filter = filter;
            state.selected = 0;
        }
    }

    pub fn events_cycle_filter(&mut self, forward: bool) {
        if let ScreenState::Events(state) = &self.view {
            let next = if forward {
                state.filter.next()
            } else {
                state.filter.prev()
            };
            self.events_set_filter(next);
        }
    }

    pub fn events_move(&mut self, delta: isize) {
        let count = self.filtered_events().len();
        if let ScreenState::Events(state) = &mut self.view {
            state.selected = step_index(state.selected, delta, count);
        }
    }

    pub fn events_activate(&mut self) {
        let ScreenState::Events(state) = &self.view else {
            return;
        };
        let Some(event) = state.filter.apply(&self.events).get(state.selected).copied() else {
            return;
        };
        let action = NavAction::SelectEvent {
            device_id: event.device_id.clone(),
            timestamp: event.timestamp.clone(),
        };
        self.navigate(action);
    }

    // ─── Live view ────────────────────────────────────────────

    pub fn live_toggle_mute(&mut self) {
        if let ScreenState::Live(live) = &mut self.view {
            live.muted = !live.muted;
        }
    }

    pub fn live_toggle_quality(&mut self) {
        if let ScreenState::Live(live) = &mut self.view {
            live.quality = live.quality.toggled();
            tracing::debug!("Stream quality set to {}", live.quality.label());
        }
    }

    /// Press-to-talk; a second press stops when the terminal sends no releases
    pub fn live_talk_pressed(&mut self) {
        if let ScreenState::Live(live) = &mut self.view {
            live.talking = !live.talking;
        }
    }

    pub fn live_talk_released(&mut self) {
        if let ScreenState::Live(live) = &mut self.view {
            live.talking = false;
        }
    }

    pub fn live_move_tool(&mut self, delta: isize) {
        if let ScreenState::Live(live) = &mut self.view {
            live.tool = step_index(live.tool, delta, LiveTool::ALL.len());
        }
    }

    pub fn live_activate_selected(&mut self) {
        if let ScreenState::Live(live) = &self.view {
            let tool = live.selected_tool();
            self.live_tool(tool);
        }
    }

    pub fn live_tool(&mut self, tool: LiveTool) {
        if let ScreenState::Live(live) = &mut self.view {
            if let Some(idx) = LiveTool::ALL.iter().position(|t| *t == tool) {
                live.tool = idx;
            }
        }

        match tool {
            LiveTool::AiDetect => self.live_analyze(),
            LiveTool::History => {
                self.navigate(NavAction::RequestHistory);
            }
            LiveTool::Snap => self.show_toast("◉ Snapshot saved"),
            LiveTool::Record => self.show_toast("● Recording clip"),
            LiveTool::Alarm => self.show_toast("♫ Siren sounded"),
        }
    }

    /// Start frame analysis for the camera on screen
    pub fn live_analyze(&mut self) {
        let ScreenState::Live(live) = &mut self.view else {
            return;
        };
        if live.is_analyzing() {
            return;
        }
        let Some(device) = self.devices.resolve_or_first(&live.device_id) else {
            return;
        };

        tracing::info!("Analyzing frame from {}", device.name);
        let task = sim::spawn_analysis(
            self.analyzer.clone(),
            device.thumbnail_url.clone(),
            self.sim_tx.clone(),
        );
        live.analysis = AnalysisPanel::Analyzing(task);
    }

    pub fn live_dismiss_analysis(&mut self) {
        if let ScreenState::Live(live) = &mut self.view {
            if matches!(live.analysis, AnalysisPanel::Ready(_)) {
                live.analysis = AnalysisPanel::Hidden;
            }
        }
    }

    // ─── Playback ─────────────────────────────────────────────

    pub fn playback_pointer(&mut self, input: PointerInput) {
        if let ScreenState::Playback(playback) = &mut self.view {
            playback.scrubber.pointer(input);
        }
    }

    pub fn playback_is_dragging(&self) -> bool {
        matches!(&self.view, ScreenState::Playback(p) if p.scrubber.is_dragging())
    }

    /// Arrow-key scrubbing by whole terminal columns
    pub fn playback_step(&mut self, columns: i16) {
        let delta = columns as f64 * self.config.simulation.cell_px as f64;
        if let ScreenState::Playback(playback) = &mut self.view {
            playback.scrubber.step(delta);
        }
    }

    pub fn playback_toggle_play(&mut self) {
        if let ScreenState::Playback(playback) = &mut self.view {
            playback.playing = !playback.playing;
        }
    }

    pub fn playback_move_day(&mut self, delta: isize) {
        if let ScreenState::Playback(playback) = &mut self.view {
            playback.day = step_index(playback.day, delta, CALENDAR_DAYS);
        }
    }

    pub fn playback_events(&self) -> &[RecordingEvent] {
        &self.events[..self.events.len().min(PLAYBACK_EVENTS)]
    }

    pub fn playback_move_event(&mut self, delta: isize) {
        let count = self.playback_events().len();
        if let ScreenState::Playback(playback) = &mut self.view {
            playback.selected = step_index(playback.selected, delta, count);
        }
    }

    /// Seek the ruler to the highlighted event's timestamp
    pub fn playback_jump(&mut self) {
        let ScreenState::Playback(playback) = &mut self.view else {
            return;
        };
        let Some(event) = self.events.iter().take(PLAYBACK_EVENTS).nth(playback.selected) else {
            return;
        };
        if !playback.scrubber.seek_label(&event.timestamp) {
            let message = format!("{} has no clock time", event.timestamp);
            self.show_toast(message);
        }
    }

    // ─── Setup wizard ─────────────────────────────────────────

    pub fn setup_toggle_model(&mut self) {
        if let ScreenState::Setup(setup) = &mut self.view {
            if setup.step == SetupStep::SelectModel {
                setup.model = setup.model.toggled();
            }
        }
    }

    pub fn setup_toggle_confirm(&mut self) {
        if let ScreenState::Setup(setup) = &mut self.view {
            if setup.step == SetupStep::ResetDevice {
                setup.red_light_confirmed = !setup.red_light_confirmed;
            }
        }
    }

    pub fn setup_switch_field(&mut self) {
        if let ScreenState::Setup(setup) = &mut self.view {
            setup.field = match setup.field {
                WifiField::Ssid => WifiField::Password,
                WifiField::Password => WifiField::Ssid,
            };
        }
    }

    pub fn setup_input(&mut self, c: char) {
        if let ScreenState::Setup(setup) = &mut self.view {
            if setup.is_editing() && !c.is_control() {
                setup.field_mut().push(c);
            }
        }
    }

    pub fn setup_backspace(&mut self) {
        if let ScreenState::Setup(setup) = &mut self.view {
            if setup.is_editing() {
                setup.field_mut().pop();
            }
        }
    }

    /// Advance the wizard one step; entering Connecting starts the pairing timer
    pub fn setup_next(&mut self) {
        let ScreenState::Setup(setup) = &mut self.view else {
            return;
        };

        let blocked = match setup.step {
            SetupStep::ResetDevice if !setup.red_light_confirmed => {
                Some("Confirm the red light first")
            }
            SetupStep::WifiConfig if setup.ssid.trim().is_empty() => {
                Some("Enter a network name")
            }
            _ => None,
        };
        if let Some(message) = blocked {
            self.show_toast(message);
            return;
        }

        let Some(next) = setup.step.next() else {
            return;
        };
        setup.step = next;
        tracing::debug!("Setup step {} ({})", next.number(), next.title());

        if next == SetupStep::Connecting {
            tracing::info!(
                "Pairing {} on network {}",
                setup.model.label(),
                setup.ssid
            );
            setup.pairing = Some(pairing::spawn(
                self.config.simulation.pairing_delay(),
                self.sim_tx.clone(),
            ));
        }
    }

    // ─── Settings ─────────────────────────────────────────────

    pub fn settings_move(&mut self, delta: isize) {
        if let ScreenState::Settings(state) = &mut self.view {
            state.selected = step_index(state.selected, delta, SettingsRow::ALL.len());
        }
    }

    pub fn settings_activate(&mut self) {
        let ScreenState::Settings(state) = &self.view else {
            return;
        };
        match state.row() {
            SettingsRow::PlatformStyle => self.toggle_platform(),
            SettingsRow::PushNotifications => {
                self.prefs.push_notifications = !self.prefs.push_notifications;
            }
            SettingsRow::CellularData => {
                self.prefs.cellular_data = !self.prefs.cellular_data;
            }
            SettingsRow::SignOut => self.show_toast("No account is signed in"),
        }
    }

    /// Switch platform style and persist it to the config file
    pub fn toggle_platform(&mut self) {
        self.set_platform(self.config.theme.toggled());

        match self.config.save() {
            Ok(()) => self.show_toast(format!("✓ {}", self.config.theme.label())),
            Err(e) => {
                tracing::warn!("Failed to save config: {}", e);
                self.show_toast("✗ Failed to save config");
            }
        }
    }

    fn set_platform(&mut self, variant: ThemeVariant) {
        self.config.theme = variant;
        self.theme = Theme::for_variant(variant);
        tracing::info!("Platform style set to {}", variant);
    }

    // ─── Overlays ─────────────────────────────────────────────

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Current date for the playback calendar
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Move within `0..count`, clamping at both ends
fn step_index(current: usize, delta: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::nav::ScreenKind;
    use std::time::Duration;

    fn app() -> (App, mpsc::Receiver<SimEvent>) {
        let (tx, rx) = mpsc::channel(16);
        let app = App::new(
            Config::default(),
            LogBuffer::new(),
            FrameAnalyzer::new(&AnalysisConfig::default()),
            tx,
        );
        (app, rx)
    }

    fn live_generation(app: &App) -> Generation {
        match &app.view {
            ScreenState::Live(live) => live.bitrate_generation(),
            other => panic!("expected live view, got {:?}", other),
        }
    }

    #[test]
    fn step_index_clamps() {
        assert_eq!(step_index(0, -1, 4), 0);
        assert_eq!(step_index(3, 1, 4), 3);
        assert_eq!(step_index(1, 1, 4), 2);
        assert_eq!(step_index(5, 1, 0), 0);
    }

    #[test]
    fn calendar_ends_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let days = calendar_days(today);
        assert_eq!(days.len(), CALENDAR_DAYS);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 2, 25).unwrap());
        assert_eq!(days[6], today);
    }

    #[tokio::test]
    async fn dashboard_last_row_adds_device() {
        let (mut app, _rx) = app();
        app.dashboard_move(10);
        app.dashboard_activate();
        assert_eq!(app.nav.screen().kind(), ScreenKind::Setup);
        assert!(matches!(app.view, ScreenState::Setup(_)));
    }

    #[tokio::test]
    async fn live_state_follows_navigation() {
        let (mut app, _rx) = app();
        app.dashboard_move(1);
        app.dashboard_activate();

        match &app.view {
            ScreenState::Live(live) => {
                assert_eq!(live.device_id, "cam-02");
                assert_eq!(live.bitrate, bitrate::START_KBPS);
                assert!(!live.muted);
                assert_eq!(live.quality, Quality::Hd);
            }
            other => panic!("expected live view, got {:?}", other),
        }

        app.back();
        assert!(matches!(app.view, ScreenState::Dashboard(_)));
    }

    #[tokio::test]
    async fn stale_bitrate_is_discarded() {
        let (mut app, _rx) = app();
        app.navigate(NavAction::SelectDevice("cam-01".into()));
        let old = live_generation(&app);

        // Leave and come back: the first timer is gone
        app.navigate(NavAction::Back);
        app.navigate(NavAction::SelectDevice("cam-01".into()));
        let current = live_generation(&app);
        assert_ne!(old, current);

        app.handle_sim_event(SimEvent::Bitrate {
            generation: old,
            kbps: 200.0,
        });
        let ScreenState::Live(live) = &app.view else {
            panic!("expected live view");
        };
        assert_eq!(live.bitrate, bitrate::START_KBPS);

        app.handle_sim_event(SimEvent::Bitrate {
            generation: current,
            kbps: 131.5,
        });
        let ScreenState::Live(live) = &app.view else {
            panic!("expected live view");
        };
        assert_eq!(live.bitrate, 131.5);
    }

    #[tokio::test]
    async fn analysis_result_fills_overlay() {
        let (mut app, mut rx) = app();
        app.navigate(NavAction::SelectDevice("cam-01".into()));
        app.live_tool(LiveTool::AiDetect);

        let ScreenState::Live(live) = &app.view else {
            panic!("expected live view");
        };
        assert!(live.is_analyzing());

        // The bitrate timer needs two seconds; the simulated analysis is immediate
        let event = rx.recv().await.unwrap();
        assert!(matches!(event, SimEvent::AnalysisReady { .. }));
        app.handle_sim_event(event);

        let ScreenState::Live(live) = &app.view else {
            panic!("expected live view");
        };
        match &live.analysis {
            AnalysisPanel::Ready(text) => assert_eq!(text, crate::analysis::SIMULATION_MESSAGE),
            other => panic!("unexpected overlay: {:?}", other),
        }

        app.live_dismiss_analysis();
        let ScreenState::Live(live) = &app.view else {
            panic!("expected live view");
        };
        assert!(matches!(live.analysis, AnalysisPanel::Hidden));
    }

    #[tokio::test]
    async fn leaving_live_cancels_analysis() {
        let (mut app, mut rx) = app();
        app.navigate(NavAction::SelectDevice("cam-01".into()));
        app.live_tool(LiveTool::AiDetect);
        let old = match &app.view {
            ScreenState::Live(LiveState {
                analysis: AnalysisPanel::Analyzing(task),
                ..
            }) => task.generation(),
            other => panic!("expected pending analysis, got {:?}", other),
        };

        app.back();
        app.navigate(NavAction::SelectDevice("cam-01".into()));

        // The aborted task never reports
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        while let Ok(event) = rx.try_recv() {
            assert!(
                !matches!(event, SimEvent::AnalysisReady { .. }),
                "analysis outlived its live view: {:?}",
                event
            );
        }

        // A late result from the old view is dropped
        app.handle_sim_event(SimEvent::AnalysisReady {
            generation: old,
            text: "Person at the door".into(),
        });
        let ScreenState::Live(live) = &app.view else {
            panic!("expected live view");
        };
        assert!(matches!(live.analysis, AnalysisPanel::Hidden));
    }

    #[tokio::test]
    async fn history_opens_playback_at_anchor() {
        let (mut app, _rx) = app();
        app.navigate(NavAction::SelectDevice("cam-03".into()));
        app.live_tool(LiveTool::History);

        let ScreenState::Playback(playback) = &app.view else {
            panic!("expected playback");
        };
        assert_eq!(playback.device_id, "cam-03");
        assert_eq!(playback.scrubber.offset(), 0.0);
        assert!(playback.playing);
        assert_eq!(playback.day, CALENDAR_DAYS - 1);
    }

    #[tokio::test]
    async fn event_selection_seeks_playback() {
        let (mut app, _rx) = app();
        app.select_tab(Tab::Events);
        app.events_set_filter(EventFilter::Pet);
        app.events_activate();

        let ScreenState::Playback(playback) = &app.view else {
            panic!("expected playback");
        };
        assert_eq!(playback.device_id, "cam-02");
        assert_eq!(playback.scrubber.time().short(), "09:30");
        assert!(!app.nav.tab_bar_visible());

        app.back();
        assert!(matches!(app.view, ScreenState::Events(_)));
    }

    #[tokio::test]
    async fn playback_jump_and_step() {
        let (mut app, _rx) = app();
        app.navigate(NavAction::SelectDevice("cam-01".into()));
        app.navigate(NavAction::RequestHistory);

        app.playback_move_event(2);
        app.playback_jump();
        app.playback_step(1);

        let ScreenState::Playback(playback) = &app.view else {
            panic!("expected playback");
        };
        // evt-3 at 09:30, then one 8 px column (4.8 min) back
        assert_eq!(playback.scrubber.time().to_string(), "09:25:12");
    }

    #[tokio::test]
    async fn ruler_drag_updates_time() {
        let (mut app, _rx) = app();
        app.navigate(NavAction::SelectDevice("cam-01".into()));
        app.navigate(NavAction::RequestHistory);

        app.playback_pointer(PointerInput::Press(80.0));
        assert!(app.playback_is_dragging());
        app.playback_pointer(PointerInput::Move(180.0));
        app.playback_pointer(PointerInput::Leave);
        assert!(!app.playback_is_dragging());

        let ScreenState::Playback(playback) = &app.view else {
            panic!("expected playback");
        };
        assert_eq!(playback.scrubber.time().to_string(), "13:42:00");
    }

    #[tokio::test]
    async fn tabs_ignored_when_hidden() {
        let (mut app, _rx) = app();
        app.navigate(NavAction::SelectDevice("cam-01".into()));
        app.select_tab(Tab::Settings);
        assert_eq!(app.nav.screen().kind(), ScreenKind::Live);
    }

    #[tokio::test]
    async fn reset_step_requires_confirmation() {
        let (mut app, _rx) = app();
        app.navigate(NavAction::AddDevice);
        app.setup_next();
        app.setup_next();

        let ScreenState::Setup(setup) = &app.view else {
            panic!("expected setup");
        };
        assert_eq!(setup.step, SetupStep::ResetDevice);
        assert!(app.toast.is_some());

        app.setup_toggle_confirm();
        app.setup_next();
        let ScreenState::Setup(setup) = &app.view else {
            panic!("expected setup");
        };
        assert_eq!(setup.step, SetupStep::WifiConfig);
        assert!(app.is_text_input_active());
    }

    #[tokio::test]
    async fn wifi_form_edits_focused_field() {
        let (mut app, _rx) = app();
        app.navigate(NavAction::AddDevice);
        if let ScreenState::Setup(setup) = &mut app.view {
            setup.step = SetupStep::WifiConfig;
        }

        app.setup_backspace();
        app.setup_input('X');
        app.setup_switch_field();
        for c in "hunter2".chars() {
            app.setup_input(c);
        }

        let ScreenState::Setup(setup) = &app.view else {
            panic!("expected setup");
        };
        assert_eq!(setup.ssid, "Home_WiFi_5X");
        assert_eq!(setup.password, "hunter2");
    }

    #[tokio::test(start_paused = true)]
    async fn pairing_completes_setup() {
        let (mut app, mut rx) = app();
        app.navigate(NavAction::AddDevice);
        if let ScreenState::Setup(setup) = &mut app.view {
            setup.step = SetupStep::ScanCode;
        }
        app.setup_next();

        let started = tokio::time::Instant::now();
        let event = rx.recv().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(4000));
        app.handle_sim_event(event);

        assert_eq!(app.devices.len(), 4);
        assert!(matches!(app.view, ScreenState::Dashboard(_)));
        assert!(app.nav.tab_bar_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_wizard_ignores_pairing() {
        let (mut app, _rx) = app();
        app.navigate(NavAction::AddDevice);
        if let ScreenState::Setup(setup) = &mut app.view {
            setup.step = SetupStep::ScanCode;
        }
        app.setup_next();
        let generation = match &app.view {
            ScreenState::Setup(setup) => setup.pairing.as_ref().unwrap().generation(),
            other => panic!("expected setup, got {:?}", other),
        };

        app.back();
        app.handle_sim_event(SimEvent::PairingComplete { generation });
        assert_eq!(app.devices.len(), 3);
        assert!(matches!(app.view, ScreenState::Dashboard(_)));
    }

    #[tokio::test]
    async fn settings_toggles_are_session_wide() {
        let (mut app, _rx) = app();
        app.select_tab(Tab::Settings);
        app.settings_move(1);
        app.settings_activate();
        assert!(!app.prefs.push_notifications);

        app.select_tab(Tab::Home);
        app.select_tab(Tab::Settings);
        assert!(!app.prefs.push_notifications);
    }

    #[tokio::test]
    async fn set_platform_swaps_theme() {
        let (mut app, _rx) = app();
        app.set_platform(ThemeVariant::Android);
        assert_eq!(app.config.theme, ThemeVariant::Android);
        assert_eq!(app.theme.variant, ThemeVariant::Android);
    }

    #[test]
    fn hit_areas_locate_tabs() {
        let hit = HitAreas {
            screen: Some(Rect::new(0, 0, 40, 30)),
            ruler: Some(Rect::new(2, 10, 36, 4)),
            tabs: vec![
                (Tab::Home, Rect::new(0, 28, 13, 2)),
                (Tab::Events, Rect::new(13, 28, 13, 2)),
            ],
        };
        assert_eq!(hit.tab_at(14, 29), Some(Tab::Events));
        assert_eq!(hit.tab_at(30, 29), None);
        assert!(hit.on_ruler(2, 13));
        assert!(!hit.on_ruler(2, 14));
        assert!(hit.on_screen(39, 29));
    }
}
