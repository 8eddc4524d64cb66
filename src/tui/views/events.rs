// Events view - activity feed
//
// Filter chips across the top, then one row pair per recording. Enter on a
// row opens playback seeked to that event.

use super::{edge_line, scroll_start};
use crate::model::{EventFilter, RecordingEvent};
use crate::theme::Theme;
use crate::tui::app::{App, EventsState};
use crate::tui::components::Header;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Two content lines plus a spacer
const ROW_HEIGHT: u16 = 3;

pub fn render(f: &mut Frame, area: Rect, app: &App, state: &EventsState) {
    let theme = &app.theme;

    let header = Header::new("Activity").subtitle("Recent alerts from your system");
    let [head, chips, _, list] = Layout::vertical([
        Constraint::Length(header.height()),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    header.render(f, head, theme);

    f.render_widget(Paragraph::new(chip_line(state.filter, theme)), chips);

    let events = app.filtered_events();
    if events.is_empty() {
        let empty = Paragraph::new(format!("No {} events", state.filter.label()))
            .style(Style::default().fg(theme.muted))
            .alignment(Alignment::Center);
        f.render_widget(empty, list);
        return;
    }

    let visible = (list.height / ROW_HEIGHT) as usize;
    let start = scroll_start(state.selected, events.len(), visible);
    let mut lines: Vec<Line> = Vec::new();

    for (index, event) in events.iter().enumerate().skip(start).take(visible) {
        lines.extend(event_lines(event, index == state.selected, list.width, theme));
        lines.push(Line::raw(""));
    }

    if start + visible >= events.len() {
        lines.push(
            Line::from(Span::styled(
                "End of recent history",
                Style::default().fg(theme.muted),
            ))
            .centered(),
        );
    }

    f.render_widget(Paragraph::new(lines), list);
}

/// Filter chips, the active one drawn filled
fn chip_line(active: EventFilter, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(EventFilter::ALL.len() * 2);
    for filter in EventFilter::ALL {
        let style = if filter == active {
            Style::default()
                .fg(theme.on_accent)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted).bg(theme.surface)
        };
        spans.push(Span::styled(format!(" {} ", capitalize(filter.label())), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn event_lines<'a>(
    event: &'a RecordingEvent,
    selected: bool,
    width: u16,
    theme: &Theme,
) -> [Line<'a>; 2] {
    let marker = if selected { "▌" } else { " " };
    let marker_style = Style::default().fg(theme.accent);
    let muted = Style::default().fg(theme.muted);
    let row_bg = if selected {
        Style::default().bg(theme.surface)
    } else {
        Style::default()
    };

    let headline = edge_line(
        vec![
            Span::styled(marker, marker_style),
            Span::styled(
                format!("{} ", event.category.icon()),
                Style::default().fg(theme.category_color(event.category)),
            ),
            Span::styled(
                event.category.headline(),
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
        ],
        vec![Span::styled(event.timestamp.as_str(), muted)],
        width,
    )
    .patch_style(row_bg);

    let detail = Line::from(vec![
        Span::styled(marker, marker_style),
        Span::styled(
            format!("  {} • {} recorded", event.camera_name, event.duration),
            muted,
        ),
    ])
    .patch_style(row_bg);

    [headline, detail]
}

/// "person" -> "Person"
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_labels_are_capitalized() {
        assert_eq!(capitalize("motion"), "Motion");
        assert_eq!(capitalize(""), "");
        let line = chip_line(EventFilter::Pet, &Theme::default());
        assert!(line.to_string().contains(" Pet "));
        assert!(line.to_string().starts_with(" All "));
    }
}
