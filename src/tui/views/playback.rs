// Playback view - recorded footage with the draggable time ruler
//
// The ruler is drawn from the scrubber offset alone: every column covers
// `cell_px` pixels, and the clock time under a column comes from the same
// mapper the scrubber uses, so drawing and dragging always agree.

use super::{edge_line, scroll_start};
use crate::theme::Theme;
use crate::timeline::{ClockTime, TimeMapper};
use crate::tui::app::{calendar_days, App, PlaybackState};
use crate::tui::components::Header;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What a ruler column shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tick {
    None,
    Quarter,
    /// Hour mark, 0-23
    Hour(u32),
}

/// Render playback; returns the ruler area for mouse hit testing
pub fn render(f: &mut Frame, area: Rect, app: &App, state: &PlaybackState) -> Option<Rect> {
    let theme = &app.theme;
    let today = app.today();
    let date = state.date(today);
    let subtitle = date.format("%A, %B %-d").to_string();

    let header = Header::new("History").subtitle(&subtitle).with_back();
    let [head, _, player, controls, _, ruler, _, calendar, _, list] = Layout::vertical([
        Constraint::Length(header.height()),
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    header.render(f, head, theme);

    let camera = app
        .devices
        .get(&state.device_id)
        .map_or(state.device_id.as_str(), |d| d.name.as_str());
    render_player(f, player, state, camera, theme);
    render_controls(f, controls, state, theme);
    render_ruler(f, ruler, app, state);
    render_calendar(f, calendar, state, today, theme);
    render_events(f, list, app, state);

    Some(ruler)
}

fn render_player(f: &mut Frame, area: Rect, state: &PlaybackState, camera: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.frame))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [top, middle, bottom] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(Span::styled(camera, Style::default().fg(Color::Gray))),
        top,
    );

    let center = if state.playing { "⏸" } else { "▶" };
    let centered = Rect {
        y: middle.y + middle.height / 2,
        height: 1.min(middle.height),
        ..middle
    };
    f.render_widget(
        Paragraph::new(center)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        centered,
    );

    let time = state.scrubber.time().to_string();
    let status = if state.playing { "Playing" } else { "Paused" };
    f.render_widget(
        Paragraph::new(edge_line(
            vec![Span::styled(status, Style::default().fg(Color::Gray))],
            vec![Span::styled(time, Style::default().fg(Color::White))],
            bottom.width,
        )),
        bottom,
    );
}

fn render_controls(f: &mut Frame, area: Rect, state: &PlaybackState, theme: &Theme) {
    let play = if state.playing { " ⏸ Pause " } else { " ▶ Play " };
    let muted = Style::default().fg(theme.muted);
    let line = Line::from(vec![
        Span::styled("⇪ Share   ", muted),
        Span::styled(
            play,
            Style::default()
                .fg(theme.on_accent)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   ⤓ Save", muted),
    ])
    .centered();
    f.render_widget(Paragraph::new(line), area);
}

fn render_ruler(f: &mut Frame, area: Rect, app: &App, state: &PlaybackState) {
    let theme = &app.theme;
    let cell_px = app.config.simulation.cell_px;
    let mapper = state.scrubber.mapper();
    let offset = state.scrubber.offset();
    let center = area.width / 2;

    let block = Block::default().style(Style::default().bg(theme.surface));
    f.render_widget(block, area);

    let [label_row, marker_row, tick_row, hour_row] =
        Layout::vertical([Constraint::Length(1); 4]).areas(area);

    // Current time above the scrubber line
    let needle = Style::default()
        .fg(theme.danger)
        .add_modifier(Modifier::BOLD);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(state.scrubber.time().short(), needle)).centered()),
        label_row,
    );

    let ticks = ruler_ticks(mapper, offset, area.width, cell_px);
    let event_minutes: Vec<(f64, Color)> = app
        .playback_events()
        .iter()
        .filter_map(|e| {
            ClockTime::parse(&e.timestamp)
                .map(|t| (t.total_minutes(), theme.category_color(e.category)))
        })
        .collect();

    let span = column_minutes(mapper, cell_px);
    let mut markers = Vec::with_capacity(area.width as usize);
    let mut tick_spans = Vec::with_capacity(area.width as usize);

    for (col, tick) in ticks.iter().enumerate() {
        let col = col as u16;
        let start = column_start(mapper, offset, col, center, cell_px);

        if col == center {
            markers.push(Span::styled("│", needle));
            tick_spans.push(Span::styled("┃", needle));
            continue;
        }

        let marker = event_minutes
            .iter()
            .find(|(minute, _)| *minute >= start && *minute < start + span);
        markers.push(match marker {
            Some((_, color)) => Span::styled("▮", Style::default().fg(*color)),
            None => Span::raw(" "),
        });

        let glyph = match tick {
            Tick::Hour(_) => "┃",
            Tick::Quarter => "╵",
            Tick::None => "─",
        };
        tick_spans.push(Span::styled(glyph, Style::default().fg(theme.muted)));
    }

    f.render_widget(Paragraph::new(Line::from(markers)), marker_row);
    f.render_widget(Paragraph::new(Line::from(tick_spans)), tick_row);
    f.render_widget(
        Paragraph::new(hour_labels(&ticks)).style(Style::default().fg(theme.muted)),
        hour_row,
    );
}

/// Minutes covered by one column
fn column_minutes(mapper: &TimeMapper, cell_px: u16) -> f64 {
    cell_px as f64 * 60.0 / mapper.pixels_per_hour()
}

/// Earliest minute under a column; the center column sits on the scrubber
fn column_start(mapper: &TimeMapper, offset: f64, col: u16, center: u16, cell_px: u16) -> f64 {
    let px = (col as f64 - center as f64) * cell_px as f64;
    mapper.minutes_at(offset - px)
}

/// Tick for every column of a ruler `width` columns wide
fn ruler_ticks(mapper: &TimeMapper, offset: f64, width: u16, cell_px: u16) -> Vec<Tick> {
    let center = width / 2;
    let span = column_minutes(mapper, cell_px);

    (0..width)
        .map(|col| {
            let start = column_start(mapper, offset, col, center, cell_px);
            let mark = (start / 15.0).ceil() * 15.0;
            if mark >= start + span {
                return Tick::None;
            }
            let minute = mark as i64;
            if minute.rem_euclid(60) == 0 {
                Tick::Hour((minute / 60).rem_euclid(24) as u32)
            } else {
                Tick::Quarter
            }
        })
        .collect()
}

/// "HH:00" centered under each hour tick, skipping labels that would collide
fn hour_labels(ticks: &[Tick]) -> String {
    let mut row = vec![' '; ticks.len()];
    let mut free_from = 0;

    for (col, tick) in ticks.iter().enumerate() {
        let Tick::Hour(hour) = tick else {
            continue;
        };
        let label = format!("{:02}:00", hour);
        let start = match col.checked_sub(2) {
            Some(start) if start >= free_from => start,
            _ => continue,
        };
        if start + label.len() > row.len() {
            continue;
        }
        for (i, ch) in label.chars().enumerate() {
            row[start + i] = ch;
        }
        free_from = start + label.len() + 1;
    }

    row.into_iter().collect()
}

fn render_calendar(
    f: &mut Frame,
    area: Rect,
    state: &PlaybackState,
    today: chrono::NaiveDate,
    theme: &Theme,
) {
    let days = calendar_days(today);
    let cells = Layout::horizontal(vec![Constraint::Ratio(1, days.len().max(1) as u32); days.len()])
        .split(area);

    for (index, (day, cell)) in days.iter().zip(cells.iter()).enumerate() {
        let style = if index == state.day {
            Style::default()
                .fg(theme.on_accent)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        let chip = Paragraph::new(vec![
            Line::from(day.format("%a").to_string()),
            Line::from(day.format("%d").to_string()),
        ])
        .alignment(Alignment::Center)
        .style(style);
        f.render_widget(chip, *cell);
    }
}

fn render_events(f: &mut Frame, area: Rect, app: &App, state: &PlaybackState) {
    let theme = &app.theme;
    let events = app.playback_events();
    let visible = area.height as usize;
    let start = scroll_start(state.selected, events.len(), visible);

    let lines: Vec<Line> = events
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(index, event)| {
            let selected = index == state.selected;
            let base = if selected {
                Style::default().fg(theme.selection_fg).bg(theme.selection)
            } else {
                Style::default().fg(theme.foreground)
            };
            edge_line(
                vec![
                    Span::styled(format!("{:>9} ", event.timestamp), base),
                    Span::styled(
                        format!("{} ", event.category.icon()),
                        Style::default().fg(theme.category_color(event.category)),
                    ),
                    Span::styled(event.category.headline(), base),
                ],
                vec![Span::styled(
                    format!("{} • {}", event.duration, event.camera_name),
                    Style::default().fg(theme.muted),
                )],
                area.width,
            )
            .patch_style(if selected {
                Style::default().bg(theme.selection)
            } else {
                Style::default()
            })
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}
