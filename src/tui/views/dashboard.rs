// Dashboard view - "My Devices"
//
// One card per camera followed by the "Add Device" row. The highlighted card
// opens the live view; the add row starts the pairing wizard.

use super::{edge_line, scroll_start};
use crate::model::{Device, DeviceStatus};
use crate::theme::{Theme, ThemeVariant};
use crate::tui::app::{App, DashboardState};
use crate::tui::components::{fit, Header};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

const CARD_HEIGHT: u16 = 4;

pub fn render(f: &mut Frame, area: Rect, app: &App, state: &DashboardState) {
    let theme = &app.theme;

    let header = match theme.variant {
        ThemeVariant::Android => Header::new("My Devices").eyebrow("SecureView Home"),
        ThemeVariant::Ios => Header::new("My Devices").subtitle("SecureView Home"),
    };
    let [head, _, list] = Layout::vertical([
        Constraint::Length(header.height()),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    header.render(f, head, theme);

    // Devices plus the add row
    let count = app.devices.len() + 1;
    let visible = (list.height / CARD_HEIGHT) as usize;
    let start = scroll_start(state.selected, count, visible);

    for (slot, index) in (start..count).take(visible).enumerate() {
        let card = Rect::new(
            list.x,
            list.y + slot as u16 * CARD_HEIGHT,
            list.width,
            CARD_HEIGHT,
        );
        let selected = index == state.selected;
        match app.devices.at(index) {
            Some(device) => render_card(f, card, device, selected, theme),
            None => render_add_row(f, card, selected, theme),
        }
    }
}

fn card_block<'a>(selected: bool, theme: &Theme) -> Block<'a> {
    let border = if selected { theme.accent } else { theme.border };
    Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.surface))
        .padding(Padding::horizontal(1))
}

fn render_card(f: &mut Frame, area: Rect, device: &Device, selected: bool, theme: &Theme) {
    let status_color = theme.status_color(device.status);
    let name_width = area.width.saturating_sub(14) as usize;

    let block = card_block(selected, theme)
        .title(Span::styled(
            format!(" {} ", fit(&device.name, name_width)),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ))
        .title_top(
            Line::from(Span::styled(
                format!(" ● {} ", device.status.badge()),
                Style::default().fg(status_color),
            ))
            .right_aligned(),
        );
    let inner = block.inner(area);
    f.render_widget(block, area);

    let offline = device.status == DeviceStatus::Offline;
    let text = if offline { theme.muted } else { theme.foreground };
    let muted = Style::default().fg(theme.muted);

    let battery_style = match device.battery {
        Some(pct) if pct < 20 => Style::default().fg(theme.danger),
        _ => Style::default().fg(text),
    };

    let lines = vec![
        edge_line(
            vec![Span::styled(format!("⌂ {}", device.location), muted)],
            vec![
                Span::styled(device.signal_bars(), Style::default().fg(text)),
                Span::raw("  "),
                Span::styled(format!("▮ {}", device.battery_label()), battery_style),
            ],
            inner.width,
        ),
        edge_line(
            vec![Span::styled(
                format!("⇅ {}", device.status.speed_label()),
                Style::default().fg(text),
            )],
            vec![Span::styled(format!("Active: {}", device.last_active), muted)],
            inner.width,
        ),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_add_row(f: &mut Frame, area: Rect, selected: bool, theme: &Theme) {
    let style = if selected {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted)
    };

    let block = card_block(selected, theme).style(Style::default());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let label = Paragraph::new(vec![
        Line::from(Span::styled("＋ Add Device", style)),
        Line::from(Span::styled(
            "Pair a new camera",
            Style::default().fg(theme.muted),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(label, inner);
}
