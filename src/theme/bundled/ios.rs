//! iOS - translucent dark chrome with the system blue accent

pub const THEME: &str = r##"# iOS platform style for secureview

[meta]
name = "iOS"
version = 1

[ui]
background = "#000000"
surface = "#1c1c1e"
foreground = "#ffffff"
muted = "#8e8e93"
border = "#2c2c2e"
frame = "#3a3a3c"
selection_bg = "#ffffff"
selection_fg = "#000000"
border_type = "rounded"

[brand]
accent = "#0a84ff"
on_accent = "#ffffff"

[status]
online = "#30d158"
offline = "#8e8e93"
recording = "#ff453a"
danger = "#ff453a"
warning = "#ffd60a"

[chrome]
status_bar_bg = "#000000"
status_bar_fg = "#ffffff"
tab_bar_bg = "#1c1c1e"
tab_active = "#0a84ff"
tab_inactive = "#6b7280"
"##;
