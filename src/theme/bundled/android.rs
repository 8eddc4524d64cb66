//! Android - Material dark surfaces with the Android green accent

pub const THEME: &str = r##"# Android (Material) platform style for secureview

[meta]
name = "Android"
version = 1

[ui]
background = "#111827"
surface = "#1f2937"
foreground = "#f9fafb"
muted = "#9ca3af"
border = "#374151"
frame = "#171717"
selection_bg = "#3ddc84"
selection_fg = "#000000"
border_type = "plain"

[brand]
accent = "#3ddc84"
on_accent = "#000000"

[status]
online = "#22c55e"
offline = "#6b7280"
recording = "#ef4444"
danger = "#ef4444"
warning = "#facc15"

[chrome]
status_bar_bg = "#000000"
status_bar_fg = "#ffffff"
tab_bar_bg = "#1e1e1e"
tab_active = "#3ddc84"
tab_inactive = "#6b7280"
"##;
