// Text formatters
//
// Width-aware helpers for fitting text into the narrow phone frame. Widths
// are display columns, not bytes or chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to `width` columns, ending in "…" when anything was cut
///
/// # Examples
/// ```ignore
/// assert_eq!(fit("Front Door", 6), "Front…");
/// assert_eq!(fit("Garage", 10), "Garage");
/// ```
pub fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// `left` and `right` separated by enough spaces to fill `width`
pub fn spread(left: &str, right: &str, width: usize) -> String {
    let gap = width.saturating_sub(left.width() + right.width()).max(1);
    format!("{}{}{}", left, " ".repeat(gap), right)
}

/// Mask a secret for display, one bullet per char
pub fn mask(secret: &str) -> String {
    "•".repeat(secret.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_truncates_with_ellipsis() {
        assert_eq!(fit("Front Door", 6), "Front…");
        assert_eq!(fit("Garage", 10), "Garage");
        assert_eq!(fit("Garage", 6), "Garage");
        assert_eq!(fit("Garage", 0), "");
    }

    #[test]
    fn fit_counts_wide_chars() {
        // Each CJK char is two columns
        assert_eq!(fit("監視カメラ", 5), "監視…");
    }

    #[test]
    fn spread_fills_width() {
        assert_eq!(spread("9:41", "WiFi", 12), "9:41    WiFi");
        assert_eq!(spread("long left", "right", 4), "long left right");
    }

    #[test]
    fn mask_hides_every_char() {
        assert_eq!(mask("pässword"), "••••••••");
        assert_eq!(mask(""), "");
    }
}
