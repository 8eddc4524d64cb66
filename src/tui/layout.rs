//! Responsive layout for the phone frame.
//!
//! Single source of truth for width thresholds and frame geometry - no magic
//! numbers scattered in render code.

use ratatui::layout::Rect;

/// Phone frame size in cells: 375x812 points at roughly 8x20 points per cell
pub const PHONE_WIDTH: u16 = 46;
pub const PHONE_HEIGHT: u16 = 40;

/// Gap between the phone frame and the side panel
const PANEL_GAP: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: phone frame only, may shrink
    Compact,
    /// 60-99 cols: phone frame only
    Normal,
    /// 100-139 cols: phone frame plus side panel
    Wide,
    /// 140+ cols: wider side panel
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
            Breakpoint::UltraWide => 3,
        }
    }

    fn side_panel_width(&self) -> Option<u16> {
        match self {
            Breakpoint::Compact | Breakpoint::Normal => None,
            Breakpoint::Wide => Some(40),
            Breakpoint::UltraWide => Some(56),
        }
    }
}

/// Where the phone frame and the optional side panel go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneLayout {
    pub frame: Rect,
    pub side_panel: Option<Rect>,
}

impl PhoneLayout {
    /// Center the frame (and panel) in `area`, shrinking the frame to fit
    pub fn compute(area: Rect) -> Self {
        let width = PHONE_WIDTH.min(area.width);
        let height = PHONE_HEIGHT.min(area.height);
        let side = Breakpoint::from_width(area.width).side_panel_width();

        let group_width = match side {
            Some(w) => width + PANEL_GAP + w,
            None => width,
        };
        let x = area.x + area.width.saturating_sub(group_width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;

        let frame = Rect::new(x, y, width, height);
        let side_panel = side.map(|w| Rect::new(x + width + PANEL_GAP, y, w, height));

        Self { frame, side_panel }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(139), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(140), Breakpoint::UltraWide);
    }

    #[test]
    fn at_least_comparisons() {
        let wide = Breakpoint::Wide;
        assert!(wide.at_least(Breakpoint::Compact));
        assert!(wide.at_least(Breakpoint::Wide));
        assert!(!wide.at_least(Breakpoint::UltraWide));
    }

    #[test]
    fn narrow_terminal_has_no_side_panel() {
        let layout = PhoneLayout::compute(Rect::new(0, 0, 80, 50));
        assert!(layout.side_panel.is_none());
        assert_eq!(layout.frame, Rect::new(17, 5, PHONE_WIDTH, PHONE_HEIGHT));
    }

    #[test]
    fn small_terminal_shrinks_frame() {
        let layout = PhoneLayout::compute(Rect::new(0, 0, 30, 20));
        assert_eq!(layout.frame, Rect::new(0, 0, 30, 20));
    }

    #[test]
    fn wide_terminal_places_panel_beside_frame() {
        let layout = PhoneLayout::compute(Rect::new(0, 0, 120, 45));
        let panel = layout.side_panel.unwrap();

        assert_eq!(panel.width, 40);
        assert_eq!(panel.y, layout.frame.y);
        assert_eq!(panel.x, layout.frame.right() + PANEL_GAP);
        assert!(panel.right() <= 120);
        // Group is centered: 46 + 3 + 40 = 89 wide
        assert_eq!(layout.frame.x, (120 - 89) / 2);
    }
}
