// Key hints shared by the help modal and the side panel

use crate::nav::ScreenKind;

pub const GLOBAL_KEYS: &[(&str, &str)] = &[
    ("F1/F2/F3", "Home / Events / Settings"),
    ("?", "Toggle this help"),
    ("q, Ctrl+C", "Quit"),
];

/// Keybindings that apply on a given screen
pub fn screen_keys(kind: ScreenKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        ScreenKind::Dashboard => &[
            ("↑/↓, j/k", "Select camera"),
            ("Enter", "Open live view"),
            ("a, +", "Add device"),
        ],
        ScreenKind::Live => &[
            ("←/→, Enter", "Pick and run a tool"),
            ("a/h/s/r/l", "AI / History / Snap / Rec / Alarm"),
            ("m", "Mute audio"),
            ("v", "Switch HD / SD"),
            ("t, Space", "Hold to talk"),
            ("x", "Dismiss analysis"),
            ("Esc", "Back"),
        ],
        ScreenKind::Events => &[
            ("←/→, 1-5", "Filter by category"),
            ("↑/↓, j/k", "Select event"),
            ("Enter", "Open playback"),
        ],
        ScreenKind::Playback => &[
            ("←/→, drag", "Scrub the timeline"),
            ("Space", "Play / pause"),
            ("[ / ]", "Previous / next day"),
            ("↑/↓, Enter", "Jump to an event"),
            ("Esc", "Back"),
        ],
        ScreenKind::Setup => &[
            ("←/→", "Choose model"),
            ("Space", "Confirm red light"),
            ("Tab", "Switch WiFi field"),
            ("Enter", "Next step"),
            ("Esc", "Cancel setup"),
        ],
        ScreenKind::Settings => &[
            ("↑/↓, j/k", "Select row"),
            ("Enter, Space", "Toggle"),
            ("Esc", "Back"),
        ],
    }
}
