// Live view - camera feed with OSD, toolbar and push-to-talk
//
// The feed box carries the on-screen display (timestamp, bitrate, audio and
// quality). Frame analysis results float over the top of the feed.

use super::edge_line;
use crate::model::DeviceStatus;
use crate::sim::bitrate;
use crate::theme::Theme;
use crate::tui::app::{AnalysisPanel, App, LiveState, LiveTool};
use crate::tui::components::fit;
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const VISUALIZER_BARS: usize = 21;
const BAR_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub fn render(f: &mut Frame, area: Rect, app: &App, state: &LiveState) {
    let theme = &app.theme;
    let device = app.devices.get(&state.device_id);
    let name = device.map_or(state.device_id.as_str(), |d| d.name.as_str());
    let status = device.map_or(DeviceStatus::Offline, |d| d.status);

    let [head, sub, _, feed, _, tools, _, talk] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(8),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(4),
    ])
    .areas(area);

    let header = edge_line(
        vec![
            Span::styled("‹ ", Style::default().fg(theme.accent)),
            Span::styled(
                fit(name, head.width.saturating_sub(8) as usize),
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
        ],
        vec![Span::styled(
            format!(" {} ", state.quality.label()),
            Style::default().fg(theme.on_accent).bg(theme.accent),
        )],
        head.width,
    );
    f.render_widget(Paragraph::new(header), head);

    let location = device.map_or("", |d| d.location.as_str());
    let subtitle = Line::from(vec![
        Span::styled(
            format!("● {}", status.badge()),
            Style::default().fg(theme.status_color(status)),
        ),
        Span::styled(format!("  {}", location), Style::default().fg(theme.muted)),
    ]);
    f.render_widget(Paragraph::new(subtitle), sub);

    render_feed(f, feed, state, status, theme);
    render_toolbar(f, tools, state, theme);
    render_talk(f, talk, state, theme);
}

fn render_feed(f: &mut Frame, area: Rect, state: &LiveState, status: DeviceStatus, theme: &Theme) {
    // Video is black regardless of platform style
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.frame))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 3 {
        return;
    }

    let osd = Style::default().fg(Color::White);
    let dim = Style::default().fg(Color::Gray);
    let rec_label = if status == DeviceStatus::Recording {
        "● REC"
    } else {
        "● LIVE"
    };

    let top = edge_line(
        vec![Span::styled(
            rec_label,
            Style::default()
                .fg(theme.recording)
                .add_modifier(Modifier::BOLD),
        )],
        vec![Span::styled(
            Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            osd,
        )],
        inner.width,
    );
    let rate = Line::from(Span::styled(
        format!("{} KB/s", bitrate::display_kbps(state.bitrate)),
        dim,
    ))
    .right_aligned();

    let audio = if state.muted { "◁× Muted" } else { "◁)) Audio" };
    let bottom = edge_line(
        vec![Span::styled(audio, osd)],
        vec![Span::styled(format!("{}  ⛶", state.quality.label()), osd)],
        inner.width,
    );

    let [top_row, rate_row, middle, bottom_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    f.render_widget(Paragraph::new(top), top_row);
    f.render_widget(Paragraph::new(rate), rate_row);
    f.render_widget(Paragraph::new(bottom), bottom_row);

    let scene = if status == DeviceStatus::Offline {
        Span::styled("Camera offline", Style::default().fg(theme.offline))
    } else {
        Span::styled("░▒▓ streaming ▓▒░", dim)
    };
    let centered = Rect {
        y: middle.y + middle.height / 2,
        height: 1.min(middle.height),
        ..middle
    };
    f.render_widget(Paragraph::new(Line::from(scene).centered()), centered);

    render_analysis(f, middle, &state.analysis, theme);
}

/// Frame analysis card floating over the feed
fn render_analysis(f: &mut Frame, area: Rect, panel: &AnalysisPanel, theme: &Theme) {
    let (text, style) = match panel {
        AnalysisPanel::Hidden => return,
        AnalysisPanel::Analyzing(_) => (
            "Analyzing frame...",
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        ),
        AnalysisPanel::Ready(text) => (text.as_str(), Style::default().fg(theme.foreground)),
    };

    let width = area.width.saturating_sub(2);
    // Rough wrap estimate, capped to the feed
    let text_rows = (text.chars().count() as u16 / width.saturating_sub(2).max(1)) + 1;
    let height = (text_rows + 2).min(area.height);
    let card = Rect::new(area.x + 1, area.y, width, height);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.surface))
        .title(Span::styled(
            " ⚡ Gemini Vision ",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    if matches!(panel, AnalysisPanel::Ready(_)) {
        block = block.title_bottom(Line::from(" x dismiss ").right_aligned());
    }

    let paragraph = Paragraph::new(Span::styled(text, style))
        .wrap(Wrap { trim: true })
        .block(block);

    f.render_widget(Clear, card);
    f.render_widget(paragraph, card);
}

fn render_toolbar(f: &mut Frame, area: Rect, state: &LiveState, theme: &Theme) {
    let cells = Layout::horizontal([Constraint::Ratio(1, 5); 5]).split(area);
    let selected = state.selected_tool();

    for (tool, cell) in LiveTool::ALL.into_iter().zip(cells.iter()) {
        let busy = tool == LiveTool::AiDetect && state.is_analyzing();
        let style = if tool == selected {
            Style::default()
                .fg(theme.accent)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground)
        };
        let icon = if busy { "…" } else { tool.icon() };

        let button = Paragraph::new(vec![
            Line::from(Span::styled(icon, style)),
            Line::from(vec![
                Span::styled(tool.label(), style),
                Span::styled(
                    format!(" {}", tool.key()),
                    Style::default().fg(theme.muted),
                ),
            ]),
        ])
        .alignment(Alignment::Center);
        f.render_widget(button, *cell);
    }
}

fn render_talk(f: &mut Frame, area: Rect, state: &LiveState, theme: &Theme) {
    let (button_style, label) = if state.talking {
        (
            Style::default()
                .fg(theme.on_accent)
                .bg(theme.danger)
                .add_modifier(Modifier::BOLD),
            "Transmitting Audio...",
        )
    } else {
        (
            Style::default().fg(theme.foreground).bg(theme.surface),
            "Hold to Talk",
        )
    };

    let lines = vec![
        Line::from(Span::styled(
            visualizer(state.talking),
            Style::default().fg(theme.accent),
        )),
        Line::raw(""),
        Line::from(Span::styled("  🎙  ", button_style)),
        Line::from(Span::styled(label, Style::default().fg(theme.muted))),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Audio level bars; flat while idle
fn visualizer(talking: bool) -> String {
    (0..VISUALIZER_BARS)
        .map(|_| {
            if talking {
                let level = (bitrate::random_unit() * BAR_GLYPHS.len() as f64) as usize;
                BAR_GLYPHS[level.min(BAR_GLYPHS.len() - 1)]
            } else {
                BAR_GLYPHS[0]
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_visualizer_is_flat() {
        assert_eq!(visualizer(false), "▁".repeat(VISUALIZER_BARS));
        assert_eq!(visualizer(true).chars().count(), VISUALIZER_BARS);
    }
}
