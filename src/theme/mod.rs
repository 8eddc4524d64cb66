// Platform styles for the phone frame
//
// Two variants exist, iOS and Android. They differ only in presentation:
// colors, border style, title alignment and a few chrome details. Screen
// logic never branches on the variant.
//
// Theme loading priority:
// 1. External TOML from ~/.config/secureview/themes/<variant>.toml
// 2. Bundled TOML (compiled into binary)
// 3. Hardcoded fallback

mod bundled;
mod toml_format;

pub use toml_format::TomlTheme;

use ratatui::layout::Alignment;
use ratatui::style::Color;
use ratatui::widgets::BorderType;
use std::fmt;
use std::path::PathBuf;

/// Which platform the phone frame imitates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Ios,
    Android,
}

impl ThemeVariant {
    /// Parse a config value; unknown values yield None
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ios" | "apple" => Some(Self::Ios),
            "android" | "material" => Some(Self::Android),
            _ => None,
        }
    }

    /// Value written to the config file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }

    /// Label shown on the settings screen
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ios => "iOS (Apple)",
            Self::Android => "Android (Material)",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Ios => Self::Android,
            Self::Android => Self::Ios,
        }
    }

    /// iOS centers screen titles, Android left-aligns them
    pub fn title_alignment(&self) -> Alignment {
        match self {
            Self::Ios => Alignment::Center,
            Self::Android => Alignment::Left,
        }
    }

    /// iOS draws a home indicator bar under the tab bar
    pub fn has_home_indicator(&self) -> bool {
        matches!(self, Self::Ios)
    }

    fn filename(&self) -> String {
        format!("{}.toml", self.as_str())
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete resolved theme ready for use in the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub variant: ThemeVariant,

    // ─── Content ─────────────────────────────────────────────
    pub background: Color,
    pub surface: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub frame: Color,
    pub selection: Color,
    pub selection_fg: Color,
    pub border_type: BorderType,

    // ─── Brand ───────────────────────────────────────────────
    pub accent: Color,
    pub on_accent: Color,

    // ─── State ───────────────────────────────────────────────
    pub online: Color,
    pub offline: Color,
    pub recording: Color,
    pub danger: Color,
    pub warning: Color,

    // ─── Chrome ──────────────────────────────────────────────
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub tab_bar_bg: Color,
    pub tab_active: Color,
    pub tab_inactive: Color,
}

impl Theme {
    pub fn for_variant(variant: ThemeVariant) -> Self {
        if let Some(theme) = Self::load_external(variant) {
            return theme;
        }

        match bundled::find(&variant.filename()).map(TomlTheme::from_str) {
            Some(Ok(toml)) => Self::from_toml(toml, variant),
            Some(Err(e)) => {
                tracing::warn!("Bundled {} theme failed to parse: {}", variant, e);
                Self::hardcoded_default(variant)
            }
            None => Self::hardcoded_default(variant),
        }
    }

    fn load_external(variant: ThemeVariant) -> Option<Self> {
        let path = Self::themes_dir()?.join(variant.filename());
        let contents = std::fs::read_to_string(&path).ok()?;
        match TomlTheme::from_str(&contents) {
            Ok(toml) => Some(Self::from_toml(toml, variant)),
            Err(e) => {
                tracing::warn!("Ignoring theme file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Get themes directory path
    fn themes_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("secureview").join("themes"))
    }

    fn parse_border_type(value: Option<&String>) -> BorderType {
        match value.map(|s| s.as_str()) {
            Some("rounded") => BorderType::Rounded,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }

    fn from_toml(toml: TomlTheme, variant: ThemeVariant) -> Self {
        let parse = TomlTheme::parse_color;

        Self {
            name: toml.meta.name.clone(),
            variant,

            background: parse(&toml.ui.background),
            surface: parse(&toml.ui.surface),
            foreground: parse(&toml.ui.foreground),
            muted: parse(&toml.ui.muted),
            border: parse(&toml.ui.border),
            frame: parse(&toml.ui.frame),
            selection: parse(&toml.ui.selection_bg),
            selection_fg: parse(&toml.ui.selection_fg),
            border_type: Self::parse_border_type(toml.ui.border_type.as_ref()),

            accent: parse(&toml.brand.accent),
            on_accent: parse(&toml.brand.on_accent),

            online: parse(&toml.status.online),
            offline: parse(&toml.status.offline),
            recording: parse(&toml.status.recording),
            danger: parse(&toml.status.danger),
            warning: parse(&toml.status.warning),

            status_bar_bg: parse(&toml.chrome.status_bar_bg),
            status_bar_fg: parse(&toml.chrome.status_bar_fg),
            tab_bar_bg: parse(&toml.chrome.tab_bar_bg),
            tab_active: parse(&toml.chrome.tab_active),
            tab_inactive: parse(&toml.chrome.tab_inactive),
        }
    }

    /// Hardcoded fallback when no theme can be loaded (ANSI colors only)
    fn hardcoded_default(variant: ThemeVariant) -> Self {
        let accent = match variant {
            ThemeVariant::Ios => Color::LightBlue,
            ThemeVariant::Android => Color::LightGreen,
        };

        Self {
            name: format!("{} (Fallback)", variant.label()),
            variant,
            background: Color::Reset,
            surface: Color::Reset,
            foreground: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            frame: Color::DarkGray,
            selection: accent,
            selection_fg: Color::Black,
            border_type: BorderType::Plain,
            accent,
            on_accent: Color::Black,
            online: Color::Green,
            offline: Color::Gray,
            recording: Color::Red,
            danger: Color::Red,
            warning: Color::Yellow,
            status_bar_bg: Color::Reset,
            status_bar_fg: Color::White,
            tab_bar_bg: Color::Reset,
            tab_active: accent,
            tab_inactive: Color::DarkGray,
        }
    }

    /// Color for a device status badge
    pub fn status_color(&self, status: crate::model::DeviceStatus) -> Color {
        use crate::model::DeviceStatus;
        match status {
            DeviceStatus::Online => self.online,
            DeviceStatus::Offline => self.offline,
            DeviceStatus::Recording => self.recording,
        }
    }

    /// Icon tint for an activity category
    pub fn category_color(&self, category: crate::model::EventCategory) -> Color {
        use crate::model::EventCategory;
        match category {
            EventCategory::Person => self.accent,
            EventCategory::Motion => self.warning,
            EventCategory::Sound => Color::Magenta,
            EventCategory::Pet => Color::Yellow,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_variant(ThemeVariant::default())
    }
}

/// Ensure themes directory exists and extract bundled themes on first run
pub fn ensure_themes_extracted() {
    let Some(themes_dir) = Theme::themes_dir() else {
        return;
    };

    if std::fs::create_dir_all(&themes_dir).is_err() {
        return;
    }

    for theme in bundled::BUNDLED_THEMES {
        let path = themes_dir.join(theme.filename);
        // Never overwrite user modifications
        if !path.exists() {
            let _ = std::fs::write(&path, theme.content);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_themes_parse() {
        for theme in bundled::BUNDLED_THEMES {
            let parsed = TomlTheme::from_str(theme.content);
            assert!(
                parsed.is_ok(),
                "{} failed to parse: {:?}",
                theme.filename,
                parsed.err()
            );
        }
    }

    #[test]
    fn variants_have_distinct_accents() {
        let ios = Theme::from_toml(
            TomlTheme::from_str(bundled::IOS).unwrap(),
            ThemeVariant::Ios,
        );
        let android = Theme::from_toml(
            TomlTheme::from_str(bundled::ANDROID).unwrap(),
            ThemeVariant::Android,
        );

        assert_eq!(ios.accent, Color::Rgb(10, 132, 255));
        assert_eq!(android.accent, Color::Rgb(61, 220, 132));
        assert_eq!(ios.border_type, BorderType::Rounded);
        assert_eq!(android.border_type, BorderType::Plain);
    }

    #[test]
    fn variant_parse_and_toggle() {
        assert_eq!(ThemeVariant::parse("iOS"), Some(ThemeVariant::Ios));
        assert_eq!(ThemeVariant::parse(" android "), Some(ThemeVariant::Android));
        assert_eq!(ThemeVariant::parse("windows"), None);
        assert_eq!(ThemeVariant::Ios.toggled(), ThemeVariant::Android);
        assert_eq!(ThemeVariant::Android.toggled().toggled(), ThemeVariant::Android);
    }

    #[test]
    fn fallback_keeps_variant() {
        let theme = Theme::hardcoded_default(ThemeVariant::Android);
        assert_eq!(theme.variant, ThemeVariant::Android);
        assert_eq!(theme.tab_active, Color::LightGreen);
    }
}
