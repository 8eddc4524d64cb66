//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a configurable duration.
//! Renders near the bottom of the phone screen on top of all other content.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

use super::formatters::fit;

/// A toast notification that auto-dismisses
pub struct Toast {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    /// Create a new toast with default 2-second duration
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: Duration::from_secs(2),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Render centered horizontally, `lift` rows above the bottom of `area`
    ///
    /// Uses `Clear` widget to ensure toast is visible on top of other content.
    pub fn render(&self, f: &mut Frame, area: Rect, lift: u16, theme: &Theme) {
        // 2 border + 2 padding columns
        let max_text = area.width.saturating_sub(6) as usize;
        let text = fit(&self.message, max_text);
        let width = (text.width() as u16 + 4).min(area.width);
        let height = 3;

        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.bottom().saturating_sub(height + lift).max(area.y);
        let toast_area = Rect::new(x, y, width, height.min(area.height));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.surface));

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(paragraph, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_toast_is_not_expired() {
        let toast = Toast::new("Snapshot saved");
        assert!(!toast.is_expired());
        assert_eq!(toast.message, "Snapshot saved");
    }

    #[test]
    fn zero_duration_expires_immediately() {
        let toast = Toast {
            message: String::new(),
            created_at: Instant::now(),
            duration: Duration::ZERO,
        };
        assert!(toast.is_expired());
    }
}
