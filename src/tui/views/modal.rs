// Modal overlay rendering
//
// Modals are rendered on top of the phone and side panel:
// - Help modal: shortcuts for the current screen and the active style

use super::keys::{screen_keys, GLOBAL_KEYS};
use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.accent);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.accent)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<13}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    // Keys for the screen on display only
    let kind = app.nav.screen().kind();

    let mut lines = vec![Line::raw("")];
    lines.push(Line::from(Span::styled(
        format!("  {}", kind.name()),
        header_style,
    )));
    lines.extend(screen_keys(kind).iter().map(|&(key, desc)| kb(key, desc)));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("  General", header_style)));
    lines.extend(GLOBAL_KEYS.iter().map(|&(key, desc)| kb(key, desc)));

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("  Mouse", header_style)));
    lines.push(kb("Click", "Tab bar buttons"));
    lines.push(kb("Drag", "Scrub the playback ruler"));
    lines.push(kb("Scroll", "Move through lists"));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "  ──────────────────────────────────",
        divider_style,
    )));
    lines.push(Line::from(vec![
        Span::styled("  Style: ", desc_style),
        Span::styled(app.config.theme.label(), key_style),
        Span::styled("  |  Theme: ", desc_style),
        Span::styled(app.theme.name.as_str(), key_style),
    ]));

    let height = lines.len() as u16 + 2;
    let area = centered_rect(56, height, f.area());

    // Clear the area behind the modal
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(Text::from(lines))
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.accent))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
