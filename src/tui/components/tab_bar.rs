// Tab bar component
//
// Home / Events / Settings along the bottom of the phone. Each button's area
// is returned so mouse clicks can be mapped back to a tab.

use crate::nav::Tab;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by the tab bar, including the iOS home indicator
pub fn height(theme: &Theme) -> u16 {
    if theme.variant.has_home_indicator() {
        4
    } else {
        3
    }
}

/// Render the tab bar; returns each button's clickable area
pub fn render(f: &mut Frame, area: Rect, active: Option<Tab>, theme: &Theme) -> Vec<(Tab, Rect)> {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.tab_bar_bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [buttons, indicator] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)])
        .areas(inner);

    let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(buttons);
    let mut hits = Vec::with_capacity(Tab::ALL.len());

    for (tab, cell) in Tab::ALL.into_iter().zip(cells.iter()) {
        let style = if active == Some(tab) {
            Style::default()
                .fg(theme.tab_active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.tab_inactive)
        };

        let button = Paragraph::new(vec![
            Line::from(Span::styled(tab.icon(), style)),
            Line::from(Span::styled(tab.label(), style)),
        ])
        .alignment(Alignment::Center);

        f.render_widget(button, *cell);
        hits.push((tab, *cell));
    }

    if theme.variant.has_home_indicator() && indicator.height > 0 {
        let bar = Paragraph::new("━━━━━━━━━━")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground));
        f.render_widget(bar, indicator);
    }

    hits
}
