//! Bundled platform styles (compiled into binary, extracted on first run)
//!
//! These are written to ~/.config/secureview/themes/ on first run so users
//! can tweak colors without rebuilding.

mod android;
mod ios;

pub use android::THEME as ANDROID;
pub use ios::THEME as IOS;

/// Bundled theme: file name and TOML content
pub struct BundledTheme {
    pub filename: &'static str,
    pub content: &'static str,
}

pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "ios.toml",
        content: IOS,
    },
    BundledTheme {
        filename: "android.toml",
        content: ANDROID,
    },
];

/// Bundled content for a file name
pub fn find(filename: &str) -> Option<&'static str> {
    BUNDLED_THEMES
        .iter()
        .find(|t| t.filename.eq_ignore_ascii_case(filename))
        .map(|t| t.content)
}
