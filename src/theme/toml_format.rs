// TOML platform-style format parser
//
// Each platform style spells out every color the phone frame uses; nothing is
// derived from a palette. External files in ~/.config/secureview/themes/ use
// the same format as the bundled ones.
//
// Format version: 1

use ratatui::style::Color;
use serde::Deserialize;

/// Root structure for TOML theme files
#[derive(Debug, Clone, Deserialize)]
pub struct TomlTheme {
    pub meta: ThemeMeta,
    pub ui: UiColors,
    pub brand: BrandColors,
    pub status: StatusColors,
    pub chrome: ChromeColors,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
    #[allow(dead_code)] // For future schema evolution
    pub version: u32,
}

/// Screen content colors
#[derive(Debug, Clone, Deserialize)]
pub struct UiColors {
    pub background: String,
    pub surface: String,
    pub foreground: String,
    pub muted: String,
    pub border: String,
    /// Outer bezel of the phone frame
    pub frame: String,
    pub selection_bg: String,
    pub selection_fg: String,
    /// Optional border style: "plain", "rounded", "double", "thick" (default: plain)
    pub border_type: Option<String>,
}

/// Platform accent (iOS blue, Android green)
#[derive(Debug, Clone, Deserialize)]
pub struct BrandColors {
    pub accent: String,
    /// Text drawn on top of the accent color
    pub on_accent: String,
}

/// Device and alert state colors
#[derive(Debug, Clone, Deserialize)]
pub struct StatusColors {
    pub online: String,
    pub offline: String,
    pub recording: String,
    pub danger: String,
    pub warning: String,
}

/// Status bar and tab bar colors
#[derive(Debug, Clone, Deserialize)]
pub struct ChromeColors {
    pub status_bar_bg: String,
    pub status_bar_fg: String,
    pub tab_bar_bg: String,
    pub tab_active: String,
    pub tab_inactive: String,
}

impl TomlTheme {
    /// Parse a TOML theme from string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse a color string to ratatui Color
    /// Supports:
    /// - Hex format: #RRGGBB
    /// - ANSI format: ansi:0-15, ansi:fg, ansi:bg (for terminal-native colors)
    pub fn parse_color(value: &str) -> Color {
        if let Some(ansi) = value.strip_prefix("ansi:") {
            return match ansi {
                "0" => Color::Black,
                "1" => Color::Red,
                "2" => Color::Green,
                "3" => Color::Yellow,
                "4" => Color::Blue,
                "5" => Color::Magenta,
                "6" => Color::Cyan,
                "7" => Color::White,
                "8" => Color::DarkGray,
                "9" => Color::LightRed,
                "10" => Color::LightGreen,
                "11" => Color::LightYellow,
                "12" => Color::LightBlue,
                "13" => Color::LightMagenta,
                "14" => Color::LightCyan,
                "15" => Color::Gray,
                "fg" | "bg" => Color::Reset,
                _ => Color::White,
            };
        }

        let hex = value.trim_start_matches('#');
        if hex.len() != 6 {
            return Color::White; // fallback
        }
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
        Color::Rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(TomlTheme::parse_color("#0a84ff"), Color::Rgb(10, 132, 255));
        assert_eq!(TomlTheme::parse_color("3ddc84"), Color::Rgb(61, 220, 132));
        assert_eq!(TomlTheme::parse_color("ansi:8"), Color::DarkGray);
        assert_eq!(TomlTheme::parse_color("ansi:bg"), Color::Reset);
        assert_eq!(TomlTheme::parse_color("#fff"), Color::White);
    }

    #[test]
    fn test_missing_section_is_rejected() {
        let toml = r##"
[meta]
name = "Partial"
version = 1

[ui]
background = "#000000"
surface = "#111111"
foreground = "#ffffff"
muted = "#888888"
border = "#333333"
frame = "#222222"
selection_bg = "#333333"
selection_fg = "#ffffff"
"##;
        assert!(TomlTheme::from_str(toml).is_err());
    }
}
