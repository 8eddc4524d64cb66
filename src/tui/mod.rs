// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Rendering the phone frame
// - Receiving simulation messages (bitrate, pairing, analysis)

pub mod app;
pub mod components;
pub mod layout;
pub mod modal;
pub mod views;

use crate::analysis::FrameAnalyzer;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::model::EventFilter;
use crate::nav::{NavAction, Tab};
use crate::sim::SimEvent;
use crate::timeline::PointerInput;
use anyhow::{Context, Result};
use app::{App, LiveTool, ScreenState};
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done.
pub async fn run_tui(config: Config, log_buffer: LogBuffer, analyzer: FrameAnalyzer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )
    .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Background timers report back over this channel
    let (sim_tx, mut sim_rx) = mpsc::channel(64);
    let mut app = App::new(config, log_buffer, analyzer, sim_tx);
    tracing::info!("SecureView started in {} style", app.config.theme.label());

    let result = run_event_loop(&mut terminal, &mut app, &mut sim_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Three sources, whichever is ready first:
/// 1. Keyboard, mouse and focus input
/// 2. Timer ticks (redraw for clock, spinner and toast expiry)
/// 3. Simulation messages from background tasks
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    sim_rx: &mut mpsc::Receiver<SimEvent>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard, mouse or focus input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        Ok(Event::FocusLost) => app.playback_pointer(PointerInput::Leave),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {}

            // Simulation messages
            Some(sim_event) = sim_rx.recv() => {
                app.handle_sim_event(sim_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Screen
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Terminals that report releases end push-to-talk on release
    if key_event.kind == KeyEventKind::Release {
        if matches!(key_event.code, KeyCode::Char('t') | KeyCode::Char(' ')) {
            app.live_talk_released();
        }
        return;
    }
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 3: Screen keys
    handle_screen_key(app, &key_event);
}

fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::Quit => app.should_quit = true,
    }

    true // Modal absorbed the input
}

fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;

    if key == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return true;
    }

    // Form fields own printable keys
    let typing = app.is_text_input_active();

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') if !typing => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('?') if !typing => {
            app.modal = Some(Modal::help());
            true
        }
        KeyCode::F(1) => {
            app.select_tab(Tab::Home);
            true
        }
        KeyCode::F(2) => {
            app.select_tab(Tab::Events);
            true
        }
        KeyCode::F(3) => {
            app.select_tab(Tab::Settings);
            true
        }
        _ => false,
    }
}

fn handle_screen_key(app: &mut App, key_event: &KeyEvent) {
    let key = key_event.code;

    match &app.view {
        ScreenState::Dashboard(_) => match key {
            KeyCode::Up | KeyCode::Char('k') => app.dashboard_move(-1),
            KeyCode::Down | KeyCode::Char('j') => app.dashboard_move(1),
            KeyCode::Enter => app.dashboard_activate(),
            KeyCode::Char('a') | KeyCode::Char('+') => {
                app.navigate(NavAction::AddDevice);
            }
            _ => {}
        },
        ScreenState::Live(_) => match key {
            KeyCode::Esc | KeyCode::Backspace => app.back(),
            KeyCode::Char('m') => app.live_toggle_mute(),
            KeyCode::Char('v') => app.live_toggle_quality(),
            KeyCode::Char('t') | KeyCode::Char(' ') => app.live_talk_pressed(),
            KeyCode::Char('x') => app.live_dismiss_analysis(),
            KeyCode::Left => app.live_move_tool(-1),
            KeyCode::Right => app.live_move_tool(1),
            KeyCode::Enter => app.live_activate_selected(),
            KeyCode::Char(c) => {
                if let Some(tool) = LiveTool::ALL.into_iter().find(|t| t.key() == c) {
                    app.live_tool(tool);
                }
            }
            _ => {}
        },
        ScreenState::Events(_) => match key {
            KeyCode::Esc => app.select_tab(Tab::Home),
            KeyCode::Left | KeyCode::Char('h') => app.events_cycle_filter(false),
            KeyCode::Right | KeyCode::Char('l') => app.events_cycle_filter(true),
            KeyCode::Up | KeyCode::Char('k') => app.events_move(-1),
            KeyCode::Down | KeyCode::Char('j') => app.events_move(1),
            KeyCode::Enter => app.events_activate(),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                app.events_set_filter(EventFilter::ALL[index]);
            }
            _ => {}
        },
        ScreenState::Playback(_) => match key {
            KeyCode::Esc | KeyCode::Backspace => app.back(),
            KeyCode::Char(' ') => app.playback_toggle_play(),
            // Dragging right shows earlier times, so Left steps back
            KeyCode::Left | KeyCode::Char('h') => app.playback_step(1),
            KeyCode::Right | KeyCode::Char('l') => app.playback_step(-1),
            KeyCode::Char('[') => app.playback_move_day(-1),
            KeyCode::Char(']') => app.playback_move_day(1),
            KeyCode::Up | KeyCode::Char('k') => app.playback_move_event(-1),
            KeyCode::Down | KeyCode::Char('j') => app.playback_move_event(1),
            KeyCode::Enter => app.playback_jump(),
            _ => {}
        },
        ScreenState::Setup(setup) => {
            if setup.is_editing() {
                match key {
                    KeyCode::Esc => app.back(),
                    KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                        app.setup_switch_field()
                    }
                    KeyCode::Enter => app.setup_next(),
                    KeyCode::Backspace => app.setup_backspace(),
                    KeyCode::Char(c) => app.setup_input(c),
                    _ => {}
                }
            } else {
                match key {
                    KeyCode::Esc => app.back(),
                    KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                        app.setup_toggle_model()
                    }
                    KeyCode::Char(' ') => app.setup_toggle_confirm(),
                    KeyCode::Enter => app.setup_next(),
                    _ => {}
                }
            }
        }
        ScreenState::Settings(_) => match key {
            KeyCode::Esc | KeyCode::Backspace => app.back(),
            KeyCode::Up | KeyCode::Char('k') => app.settings_move(-1),
            KeyCode::Down | KeyCode::Char('j') => app.settings_move(1),
            KeyCode::Enter | KeyCode::Char(' ') => app.settings_activate(),
            _ => {}
        },
    }
}

fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let (column, row) = (mouse_event.column, mouse_event.row);
    let pixels = column as f64 * app.config.simulation.cell_px as f64;

    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(tab) = app.hit.tab_at(column, row) {
                app.select_tab(tab);
            } else if app.hit.on_ruler(column, row) {
                app.playback_pointer(PointerInput::Press(pixels));
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if !app.playback_is_dragging() {
                return;
            }
            if app.hit.on_screen(column, row) {
                app.playback_pointer(PointerInput::Move(pixels));
            } else {
                app.playback_pointer(PointerInput::Leave);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => app.playback_pointer(PointerInput::Release),
        MouseEventKind::ScrollUp => scroll_list(app, -1),
        MouseEventKind::ScrollDown => scroll_list(app, 1),
        _ => {}
    }
}

/// Mouse wheel moves the selection of whichever list is on screen
fn scroll_list(app: &mut App, delta: isize) {
    match app.view {
        ScreenState::Dashboard(_) => app.dashboard_move(delta),
        ScreenState::Events(_) => app.events_move(delta),
        ScreenState::Playback(_) => app.playback_move_event(delta),
        ScreenState::Settings(_) => app.settings_move(delta),
        ScreenState::Live(_) => app.live_move_tool(delta),
        ScreenState::Setup(_) => {}
    }
}
