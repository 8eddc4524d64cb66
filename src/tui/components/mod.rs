// Components module - reusable UI building blocks
//
// Chrome components are drawn around every screen:
// - Status bar: clock, signal, battery
// - Header: back chevron and platform-aligned title
// - Tab bar: Home / Events / Settings
// - Toast: transient messages
//
// Each component is a focused, single-responsibility module.

pub mod formatters;
pub mod header;
pub mod status_bar;
pub mod tab_bar;
pub mod toast;

pub use header::Header;
pub use toast::Toast;

// Re-export formatters for shared use
pub use formatters::{fit, mask};
