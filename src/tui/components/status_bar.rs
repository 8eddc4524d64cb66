// Status bar component
//
// The phone's own status bar: clock on the left, signal, WiFi and battery on
// the right. Android draws it on a solid strip, iOS over the screen content.

use super::formatters::spread;
use crate::theme::{Theme, ThemeVariant};
use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

const INDICATORS: &str = "▂▄▆█ WiFi ▮▮▮▯";

/// Status bar text for a given clock reading
pub fn status_text(clock: &str, width: u16) -> String {
    // One column of padding each side
    let inner = width.saturating_sub(2) as usize;
    format!(" {} ", spread(clock, INDICATORS, inner))
}

pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
    let clock = Local::now().format("%H:%M").to_string();

    let style = match theme.variant {
        ThemeVariant::Ios => Style::default()
            .fg(theme.status_bar_fg)
            .add_modifier(Modifier::BOLD),
        ThemeVariant::Android => Style::default()
            .fg(theme.status_bar_fg)
            .bg(theme.status_bar_bg),
    };

    f.render_widget(
        Paragraph::new(status_text(&clock, area.width)).style(style),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_left_indicators_right() {
        let text = status_text("09:41", 30);
        assert!(text.starts_with(" 09:41 "));
        assert!(text.ends_with("▮▮▮▯ "));
        assert_eq!(unicode_width::UnicodeWidthStr::width(text.as_str()), 30);
    }
}
