// Side panel - shown next to the phone on wide terminals
//
// Product blurb, key hints for the current screen, and the tail of the log
// buffer. Ultra-wide terminals also get log timestamps.

use super::keys::{screen_keys, GLOBAL_KEYS};
use crate::logging::{LogEntry, LogLevel};
use crate::nav::ScreenKind;
use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::components::fit;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const FEATURES: [(&str, &str); 3] = [
    (
        "▣ Dual Platform",
        "Switch between iOS and Android styles in Settings.",
    ),
    (
        "⌔ Smart Pairing",
        "Guided setup with WiFi and QR code pairing.",
    ),
    (
        "↺ Timeline Playback",
        "Drag the ruler to scrub recorded footage.",
    ),
];

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let detailed = Breakpoint::from_width(f.area().width).at_least(Breakpoint::UltraWide);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .padding(Padding::horizontal(1))
        .title(Span::styled(
            " SecureView Pro ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let kind = app.nav.screen().kind();
    let keys = screen_keys(kind);
    let keys_height = (keys.len() + GLOBAL_KEYS.len() + 2) as u16;

    let [about, _, session, hints, _, logs] = Layout::vertical([
        Constraint::Length(2 + FEATURES.len() as u16 * 3),
        Constraint::Length(1),
        Constraint::Length(SESSION_HEIGHT),
        Constraint::Length(keys_height),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    render_about(f, about, theme);
    render_session(f, session, app);
    render_hints(f, hints, kind.name(), keys, theme);
    render_logs(f, logs, app, detailed);
}

fn section_title(text: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        text.to_uppercase(),
        Style::default()
            .fg(theme.muted)
            .add_modifier(Modifier::BOLD),
    ))
}

fn render_about(f: &mut Frame, area: Rect, theme: &Theme) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Professional grade security interface simulation.",
            Style::default().fg(theme.foreground),
        )),
        Line::raw(""),
    ];
    for (title, blurb) in FEATURES {
        lines.push(Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(blurb, Style::default().fg(theme.muted))));
        lines.push(Line::raw(""));
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

const SESSION_HEIGHT: u16 = 5;

fn render_session(f: &mut Frame, area: Rect, app: &App) {
    f.render_widget(Paragraph::new(session_lines(app)), area);
}

/// Camera on screen, pending seek, back target and analyzer mode
fn session_lines(app: &App) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let label = Style::default().fg(theme.muted);
    let value = Style::default().fg(theme.foreground);
    let row = |name: &str, text: &str| {
        Line::from(vec![
            Span::styled(format!("{:<8}", name), label),
            Span::styled(text.to_string(), value),
        ])
    };

    let mut lines = vec![section_title("Session", theme)];
    if let Some(id) = app.nav.selected_device() {
        let name = app.devices.get(id).map_or(id, |d| d.name.as_str());
        lines.push(row("Camera", name));
    }
    let screen = app.nav.screen();
    if let Some(seek) = screen.seek() {
        lines.push(row("Seek", seek));
    }
    if screen.kind() == ScreenKind::Playback {
        lines.push(row("Back", app.nav.previous().kind().name()));
    }
    let mode = if app.analyzer().has_credential() {
        "Gemini"
    } else {
        "Simulation"
    };
    lines.push(row("AI", mode));
    lines
}

fn render_hints(
    f: &mut Frame,
    area: Rect,
    screen: &str,
    keys: &[(&str, &str)],
    theme: &Theme,
) {
    let key_style = Style::default().fg(theme.accent);
    let desc_style = Style::default().fg(theme.foreground);

    let mut lines = vec![section_title(&format!("Keys · {}", screen), theme)];
    for (key, desc) in keys.iter().chain(GLOBAL_KEYS.iter()) {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(*desc, desc_style),
        ]));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn render_logs(f: &mut Frame, area: Rect, app: &App, with_time: bool) {
    let theme = &app.theme;
    let rows = area.height.saturating_sub(1) as usize;

    let title = format!("Log · {}", app.log_buffer.len());
    let mut lines = vec![section_title(&title, theme)];
    let entries = app.log_buffer.recent(rows);
    if app.log_buffer.is_empty() {
        lines.push(Line::from(Span::styled(
            "No log entries yet",
            Style::default().fg(theme.muted),
        )));
    }
    lines.extend(
        entries
            .iter()
            .map(|entry| log_line(entry, with_time, area.width, theme)),
    );

    f.render_widget(Paragraph::new(lines), area);
}

fn log_line(entry: &LogEntry, with_time: bool, width: u16, theme: &Theme) -> Line<'static> {
    let level_color = match entry.level {
        LogLevel::Error => theme.danger,
        LogLevel::Warn => theme.warning,
        LogLevel::Info => theme.accent,
        LogLevel::Debug | LogLevel::Trace => theme.muted,
    };

    let mut spans = Vec::with_capacity(3);
    let mut used = 0;
    if with_time {
        let time = entry.timestamp.format("%H:%M:%S ").to_string();
        used += time.len();
        spans.push(Span::styled(time, Style::default().fg(theme.muted)));
    }
    let level = format!("{:<5} ", entry.level.as_str());
    used += level.len();
    spans.push(Span::styled(level, Style::default().fg(level_color)));

    let room = (width as usize).saturating_sub(used);
    spans.push(Span::styled(
        fit(&entry.message, room),
        Style::default().fg(theme.foreground),
    ));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::FrameAnalyzer;
    use crate::config::{AnalysisConfig, Config};
    use crate::logging::LogBuffer;
    use crate::nav::{NavAction, Tab};
    use chrono::Local;

    #[test]
    fn log_line_fits_panel_width() {
        let entry = LogEntry {
            timestamp: Local::now(),
            level: LogLevel::Warn,
            message: "Failed to save config: permission denied".to_string(),
        };
        let theme = Theme::default();

        let line = log_line(&entry, false, 24, &theme);
        assert_eq!(line.width(), 24);
        assert!(line.to_string().starts_with("WARN  Failed"));

        let timed = log_line(&entry, true, 60, &theme);
        assert!(timed.to_string().contains("WARN"));
        assert_eq!(timed.spans.len(), 3);
    }

    #[test]
    fn session_follows_navigation() {
        let (tx, _rx) = tokio::sync::mpsc::channel(1);
        let mut app = App::new(
            Config::default(),
            LogBuffer::new(),
            FrameAnalyzer::new(&AnalysisConfig::default()),
            tx,
        );

        let text = |app: &App| -> Vec<String> {
            session_lines(app).iter().map(|l| l.to_string()).collect()
        };
        assert_eq!(text(&app), ["SESSION", "AI      Simulation"]);

        app.navigate(NavAction::Tab(Tab::Events));
        app.navigate(NavAction::SelectEvent {
            device_id: "cam-02".into(),
            timestamp: "09:30".into(),
        });
        assert_eq!(
            text(&app),
            [
                "SESSION",
                "Camera  Baby Room",
                "Seek    09:30",
                "Back    Events",
                "AI      Simulation",
            ]
        );
    }
}
