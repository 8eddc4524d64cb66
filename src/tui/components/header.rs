// Screen header component
//
// Title row shared by every screen: optional back chevron, title aligned per
// platform style, and an optional muted line underneath.

use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct Header<'a> {
    pub title: &'a str,
    /// Small line above the title (Android dashboard)
    pub eyebrow: Option<&'a str>,
    /// Muted line below the title
    pub subtitle: Option<&'a str>,
    pub back: bool,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            eyebrow: None,
            subtitle: None,
            back: false,
        }
    }

    pub fn eyebrow(mut self, text: &'a str) -> Self {
        self.eyebrow = Some(text);
        self
    }

    pub fn subtitle(mut self, text: &'a str) -> Self {
        self.subtitle = Some(text);
        self
    }

    pub fn with_back(mut self) -> Self {
        self.back = true;
        self
    }

    /// Rows this header needs
    pub fn height(&self) -> u16 {
        1 + self.eyebrow.is_some() as u16 + self.subtitle.is_some() as u16
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let muted = Style::default().fg(theme.muted);
        let mut lines = Vec::with_capacity(3);

        if let Some(eyebrow) = self.eyebrow {
            lines.push(Line::from(Span::styled(eyebrow.to_uppercase(), muted)));
        }

        let mut title = Vec::with_capacity(2);
        if self.back {
            title.push(Span::styled("‹ ", Style::default().fg(theme.accent)));
        }
        title.push(Span::styled(
            self.title,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(title));

        if let Some(subtitle) = self.subtitle {
            lines.push(Line::from(Span::styled(subtitle, muted)));
        }

        let paragraph = Paragraph::new(lines).alignment(theme.variant.title_alignment());
        f.render_widget(paragraph, area);
    }
}
