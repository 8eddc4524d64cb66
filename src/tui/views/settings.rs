// Settings view
//
// Platform style (persisted), two session toggles and sign out.

use crate::theme::{Theme, ThemeVariant};
use crate::tui::app::{App, SettingsRow, SettingsState};
use crate::tui::components::Header;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::edge_line;

const ROW_HEIGHT: u16 = 3;

pub fn render(f: &mut Frame, area: Rect, app: &App, state: &SettingsState) {
    let theme = &app.theme;

    let header = Header::new("Settings").with_back();
    let [head, _, rows, footer] = Layout::vertical([
        Constraint::Length(header.height()),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);
    header.render(f, head, theme);

    let current = format!("Current: {}", app.config.theme.label());
    let mut lines = Vec::new();

    for (index, row) in SettingsRow::ALL.into_iter().enumerate() {
        let selected = index == state.selected;
        let (title, detail, toggle) = match row {
            SettingsRow::PlatformStyle => (
                "▣ Platform Style",
                Some(current.as_str()),
                Some(app.config.theme == ThemeVariant::Android),
            ),
            SettingsRow::PushNotifications => (
                "◔ Push Notifications",
                None,
                Some(app.prefs.push_notifications),
            ),
            SettingsRow::CellularData => (
                "⇅ Cellular Data Usage",
                None,
                Some(app.prefs.cellular_data),
            ),
            SettingsRow::SignOut => ("⏻ Sign Out", None, None),
        };
        lines.extend(row_lines(row, title, detail, toggle, selected, rows.width, theme));
    }

    if (rows.height as usize) < SettingsRow::ALL.len() * ROW_HEIGHT as usize {
        // Too short for spacing, keep only the content lines
        lines.retain(|line| !line.spans.is_empty());
    }
    f.render_widget(Paragraph::new(lines), rows);

    let version = format!("SecureView v{} · {}", env!("CARGO_PKG_VERSION"), theme.name);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(version, Style::default().fg(theme.muted))).centered()),
        footer,
    );
}

fn row_lines<'a>(
    row: SettingsRow,
    title: &'a str,
    detail: Option<&'a str>,
    toggle: Option<bool>,
    selected: bool,
    width: u16,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let title_color = if row == SettingsRow::SignOut {
        theme.danger
    } else {
        theme.foreground
    };
    let mut title_style = Style::default().fg(title_color);
    if selected {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    let row_bg = if selected {
        Style::default().bg(theme.surface)
    } else {
        Style::default()
    };

    let right = match toggle {
        Some(on) => vec![toggle_span(on, theme)],
        None => Vec::new(),
    };

    let mut lines = vec![edge_line(vec![Span::styled(title, title_style)], right, width).patch_style(row_bg)];
    match detail {
        Some(detail) => lines.push(
            Line::from(Span::styled(
                format!("  {}", detail),
                Style::default().fg(theme.muted),
            ))
            .patch_style(row_bg),
        ),
        None => lines.push(Line::default()),
    }
    lines.push(Line::default());
    lines
}

/// Switch glyph, knob right when on
fn toggle_span(on: bool, theme: &Theme) -> Span<'static> {
    if on {
        Span::styled("━━●", Style::default().fg(theme.accent))
    } else {
        Span::styled("●━━", Style::default().fg(theme.muted))
    }
}
