// Setup view - five-step pairing wizard
//
// Progress dots under the header, then the body for the current step. The
// last step just waits for the pairing timer; the app moves on by itself.

use crate::theme::Theme;
use crate::tui::app::{App, CameraModel, SetupState, SetupStep, WifiField};
use crate::tui::components::{fit, mask, Header};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::hash::{DefaultHasher, Hash, Hasher};

/// Modules per side of the pairing code
const CODE_SIZE: usize = 17;
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn render(f: &mut Frame, area: Rect, app: &App, state: &SetupState) {
    let theme = &app.theme;

    let header = Header::new("Add Device").with_back();
    let [head, progress, _, title, body] = Layout::vertical([
        Constraint::Length(header.height()),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    header.render(f, head, theme);

    f.render_widget(
        Paragraph::new(progress_dots(state.step, theme)).alignment(Alignment::Center),
        progress,
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            format!("{}. {}", state.step.number(), state.step.title()),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        title,
    );

    match state.step {
        SetupStep::SelectModel => render_select_model(f, body, state, theme),
        SetupStep::ResetDevice => render_reset(f, body, state, theme),
        SetupStep::WifiConfig => render_wifi(f, body, state, theme),
        SetupStep::ScanCode => render_scan(f, body, state, theme),
        SetupStep::Connecting => render_connecting(f, body, theme),
    }
}

fn progress_dots(step: SetupStep, theme: &Theme) -> Line<'static> {
    let spans: Vec<Span> = (1..=SetupStep::COUNT)
        .map(|n| {
            if n <= step.number() {
                Span::styled("● ", Style::default().fg(theme.accent))
            } else {
                Span::styled("○ ", Style::default().fg(theme.muted))
            }
        })
        .collect();
    Line::from(spans)
}

fn instructions<'a>(text: &'a str, theme: &Theme) -> Paragraph<'a> {
    Paragraph::new(Span::styled(text, Style::default().fg(theme.muted))).wrap(Wrap { trim: true })
}

/// Primary action button, drawn filled when it can be pressed
fn button<'a>(label: &'a str, enabled: bool, theme: &Theme) -> Paragraph<'a> {
    let style = if enabled {
        Style::default()
            .fg(theme.on_accent)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted).bg(theme.surface)
    };
    Paragraph::new(Line::from(Span::styled(format!("  {}  ", label), style)).centered())
}

fn render_select_model(f: &mut Frame, area: Rect, state: &SetupState, theme: &Theme) {
    let [text, _, cards, _, action] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    f.render_widget(instructions("Choose the device you want to set up.", theme), text);

    let halves = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(cards);
    for (model, cell) in CameraModel::ALL.into_iter().zip(halves.iter()) {
        let selected = model == state.model;
        let border = if selected { theme.accent } else { theme.border };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(theme.surface));
        let label_style = if selected {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground)
        };
        let card = Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled(model.icon(), label_style)),
            Line::from(Span::styled(model.label(), label_style)),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(card, *cell);
    }

    f.render_widget(button("Next", true, theme), action);
}

fn render_reset(f: &mut Frame, area: Rect, state: &SetupState, theme: &Theme) {
    let [text, _, art, _, check, _, action] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    f.render_widget(
        instructions(
            "Power on the device and hold the reset button for 5 seconds until the indicator flashes red.",
            theme,
        ),
        text,
    );

    let body = Style::default().fg(theme.foreground);
    let led = Style::default().fg(theme.danger).add_modifier(Modifier::SLOW_BLINK);
    let camera = Paragraph::new(vec![
        Line::from(Span::styled("╭───────╮", body)),
        Line::from(vec![
            Span::styled("│  ", body),
            Span::styled("(◉)", body),
            Span::styled("  │", body),
        ]),
        Line::from(vec![
            Span::styled("│   ", body),
            Span::styled("●", led),
            Span::styled("   │", body),
        ]),
        Line::from(Span::styled("╰───┬───╯", body)),
        Line::from(Span::styled("  RESET  ", Style::default().fg(theme.muted))),
    ])
    .alignment(Alignment::Center);
    f.render_widget(camera, art);

    let (mark, style) = if state.red_light_confirmed {
        ("[x]", Style::default().fg(theme.accent))
    } else {
        ("[ ]", Style::default().fg(theme.muted))
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(mark, style),
            Span::styled(" I see the red light flashing", Style::default().fg(theme.foreground)),
        ])),
        check,
    );

    f.render_widget(button("Next", state.red_light_confirmed, theme), action);
}

fn render_wifi(f: &mut Frame, area: Rect, state: &SetupState, theme: &Theme) {
    let [text, _, ssid, password, _, action] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    f.render_widget(
        instructions("Select a 2.4GHz Wi-Fi network for the camera.", theme),
        text,
    );

    let masked = mask(&state.password);
    let fields = [
        (WifiField::Ssid, "Network Name", state.ssid.as_str(), "", ssid),
        (
            WifiField::Password,
            "Password",
            masked.as_str(),
            "Enter WiFi Password",
            password,
        ),
    ];

    for (field, label, value, placeholder, cell) in fields {
        let focused = field == state.field;
        let border = if focused { theme.accent } else { theme.border };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                format!(" {} ", label),
                Style::default().fg(theme.muted),
            ));
        let width = cell.width.saturating_sub(4) as usize;

        let mut spans = if value.is_empty() {
            vec![Span::styled(placeholder, Style::default().fg(theme.muted))]
        } else {
            vec![Span::styled(
                tail(value, width),
                Style::default().fg(theme.foreground),
            )]
        };
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(theme.accent)));
        }

        f.render_widget(Paragraph::new(Line::from(spans)).block(block), cell);
    }

    let ready = !state.ssid.trim().is_empty();
    f.render_widget(button("Generate QR Code", ready, theme), action);
}

/// Last `width` columns of a field so the cursor end stays visible
fn tail(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count <= width {
        return value.to_string();
    }
    value.chars().skip(count - width).collect()
}

fn render_scan(f: &mut Frame, area: Rect, state: &SetupState, theme: &Theme) {
    let code_rows = (CODE_SIZE as u16).div_ceil(2);
    let [text, _, code, _, network, _, action] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(code_rows),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    f.render_widget(
        instructions(
            "Show this QR code to the camera lens from 6-8 inches away.",
            theme,
        ),
        text,
    );

    let lines: Vec<Line> = pairing_code(&state.ssid, &state.password)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, Style::default().fg(theme.foreground))))
        .collect();
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), code);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("⌔ {}", fit(&state.ssid, network.width.saturating_sub(2) as usize)),
            Style::default().fg(theme.muted),
        )))
        .alignment(Alignment::Center),
        network,
    );

    f.render_widget(button("♪ I heard a prompt sound", true, theme), action);
}

/// Deterministic QR-style block for the network credentials
///
/// Finder squares in three corners, data modules from a hash of the input.
/// Two module rows per text row using half blocks.
fn pairing_code(ssid: &str, password: &str) -> Vec<String> {
    let mut hasher = DefaultHasher::new();
    ssid.hash(&mut hasher);
    password.hash(&mut hasher);
    let mut seed = hasher.finish() | 1;

    let mut grid = [[false; CODE_SIZE]; CODE_SIZE];
    for (y, row) in grid.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = match finder_module(x, y) {
                Some(on) => on,
                None => {
                    // xorshift64
                    seed ^= seed << 13;
                    seed ^= seed >> 7;
                    seed ^= seed << 17;
                    seed & 1 == 1
                }
            };
        }
    }

    grid.chunks(2)
        .map(|pair| {
            (0..CODE_SIZE)
                .map(|x| {
                    let top = pair[0][x];
                    let bottom = pair.get(1).is_some_and(|row| row[x]);
                    match (top, bottom) {
                        (true, true) => '█',
                        (true, false) => '▀',
                        (false, true) => '▄',
                        (false, false) => ' ',
                    }
                })
                .collect()
        })
        .collect()
}

/// Module value inside a 7x7 finder square (plus separator), if any
fn finder_module(x: usize, y: usize) -> Option<bool> {
    let far = CODE_SIZE - 7;
    let origins = [(0, 0), (far, 0), (0, far)];

    for (ox, oy) in origins {
        // Separator ring one module outside the square
        let (lo_x, lo_y) = (ox.saturating_sub(1), oy.saturating_sub(1));
        if x < lo_x || y < lo_y || x > ox + 7 || y > oy + 7 {
            continue;
        }
        if x >= ox + 7 || y >= oy + 7 || x < ox || y < oy {
            return Some(false);
        }
        let (dx, dy) = (x - ox, y - oy);
        let ring = dx.min(dy).min(6 - dx).min(6 - dy);
        return Some(ring != 1);
    }
    None
}

fn render_connecting(f: &mut Frame, area: Rect, theme: &Theme) {
    let frame = (chrono::Local::now().timestamp_millis() / 200).rem_euclid(SPINNER.len() as i64);
    let spinner = SPINNER[frame as usize];
    let done = Style::default().fg(theme.online);
    let pending = Style::default().fg(theme.muted);

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            spinner,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::raw(""),
        Line::from(Span::styled(
            "Keep your phone close to the device.",
            Style::default().fg(theme.muted),
        ))
        .centered(),
        Line::raw(""),
        Line::from(vec![
            Span::styled("✓ ", done),
            Span::styled("Device found", Style::default().fg(theme.foreground)),
        ]),
        Line::from(vec![
            Span::styled("✓ ", done),
            Span::styled("Registering to cloud", Style::default().fg(theme.foreground)),
        ]),
        Line::from(vec![
            Span::styled(format!("{} ", spinner), pending),
            Span::styled("Initializing...", pending),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
