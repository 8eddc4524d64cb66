// Views module - screen-level rendering logic
//
// Everything is drawn inside a phone bezel centered in the terminal:
// - Status bar on top, tab bar at the bottom (top-level screens only)
// - One view per screen in between
// - Side panel to the right when the terminal is wide enough
//
// This module dispatches to the appropriate view based on app state.

mod dashboard;
mod events;
mod keys;
mod live;
mod modal;
mod playback;
mod settings;
mod setup;
mod side_panel;

use super::app::{App, HitAreas, ScreenState};
use super::components::{status_bar, tab_bar};
use super::layout::PhoneLayout;
use crate::nav::Tab;
use crate::theme::ThemeVariant;
use ratatui::layout::{Constraint, Layout, Margin};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    app.hit = HitAreas::default();

    let layout = PhoneLayout::compute(f.area());

    // Bezel with the platform's camera cutout
    let cutout = match app.theme.variant {
        ThemeVariant::Ios => " ▬▬▬▬ ",
        ThemeVariant::Android => " ● ",
    };
    let bezel = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.frame))
        .style(
            Style::default()
                .bg(app.theme.background)
                .fg(app.theme.foreground),
        )
        .title_top(Line::from(cutout).centered());
    let screen = bezel.inner(layout.frame);
    f.render_widget(bezel, layout.frame);
    app.hit.screen = Some(screen);

    let tab_height = if app.nav.tab_bar_visible() {
        tab_bar::height(&app.theme)
    } else {
        0
    };
    let [status, content, tabs] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(tab_height),
    ])
    .areas(screen);

    status_bar::render(f, status, &app.theme);

    // One column of margin inside the bezel
    let content = content.inner(Margin::new(1, 0));

    let ruler = match &app.view {
        ScreenState::Dashboard(state) => {
            dashboard::render(f, content, app, state);
            None
        }
        ScreenState::Live(state) => {
            live::render(f, content, app, state);
            None
        }
        ScreenState::Events(state) => {
            events::render(f, content, app, state);
            None
        }
        ScreenState::Playback(state) => playback::render(f, content, app, state),
        ScreenState::Setup(state) => {
            setup::render(f, content, app, state);
            None
        }
        ScreenState::Settings(state) => {
            settings::render(f, content, app, state);
            None
        }
    };
    app.hit.ruler = ruler;

    if tab_height > 0 {
        let active = Tab::for_screen(app.nav.screen().kind());
        app.hit.tabs = tab_bar::render(f, tabs, active, &app.theme);
    }

    if let Some(panel) = layout.side_panel {
        side_panel::render(f, panel, app);
    }

    // Modal overlay on top of the phone
    if let Some(modal_state) = &app.modal {
        modal::render(f, modal_state, app);
    }

    // Toast on top of everything, lifted clear of the tab bar
    if let Some(toast) = &app.toast {
        toast.render(f, screen, tab_height + 1, &app.theme);
    }

    app.clear_expired_toast();
}

/// First visible row so that `selected` stays on screen
fn scroll_start(selected: usize, count: usize, visible: usize) -> usize {
    if visible == 0 || count <= visible {
        return 0;
    }
    selected
        .saturating_sub(visible - 1)
        .min(count - visible)
}

/// Left spans flush left, right spans flush right, padded to `width`
fn edge_line<'a>(mut left: Vec<Span<'a>>, right: Vec<Span<'a>>, width: u16) -> Line<'a> {
    let used: usize = left.iter().chain(right.iter()).map(Span::width).sum();
    let gap = (width as usize).saturating_sub(used).max(1);
    left.push(Span::raw(" ".repeat(gap)));
    left.extend(right);
    Line::from(left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_line_fills_width() {
        let line = edge_line(vec![Span::raw("Garage")], vec![Span::raw("12%")], 20);
        assert_eq!(line.width(), 20);
        // Never glues the halves together
        let tight = edge_line(vec![Span::raw("Front Door")], vec![Span::raw("85%")], 5);
        assert_eq!(tight.to_string(), "Front Door 85%");
    }

    #[test]
    fn scroll_keeps_selection_visible() {
        assert_eq!(scroll_start(0, 3, 5), 0);
        assert_eq!(scroll_start(2, 10, 3), 0);
        assert_eq!(scroll_start(3, 10, 3), 1);
        assert_eq!(scroll_start(9, 10, 3), 7);
        assert_eq!(scroll_start(4, 10, 0), 0);
    }
}
