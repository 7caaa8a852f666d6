use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Ellipsis appended to truncated text.
const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Display width of a string in terminal columns.
///
/// Wide characters (CJK, most emoji) count as two columns, combining marks as zero.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Byte index of the longest prefix of `s` that fits in `max_width` columns.
fn fit_prefix(s: &str, max_width: usize) -> usize {
    let mut width = 0;
    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max_width {
            return idx;
        }
        width += w;
    }
    s.len()
}

/// Truncate `s` to at most `max_width` columns, ending in "..." when cut.
///
/// Borrows when the string already fits. Widths of 3 or less have no room
/// for an ellipsis and get a plain prefix instead.
///
/// ```
/// use feedsim::util::truncate_to_width;
///
/// assert_eq!(truncate_to_width("[Tech] Item #1", 40), "[Tech] Item #1");
/// assert_eq!(truncate_to_width("[Tech] Item #12", 10), "[Tech] ...");
/// assert_eq!(truncate_to_width("Sport", 3), "Spo");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }

    if max_width <= ELLIPSIS_WIDTH {
        return Cow::Owned(s[..fit_prefix(s, max_width)].to_string());
    }

    let cut = fit_prefix(s, max_width - ELLIPSIS_WIDTH);
    Cow::Owned(format!("{}{}", &s[..cut], ELLIPSIS))
}

/// Remove control characters (including ESC, so no ANSI sequence survives
/// intact) from text that came from a config file before it reaches the
/// terminal.
///
/// Borrows when nothing needs removing.
pub fn strip_control_chars(s: &str) -> Cow<'_, str> {
    if !s.chars().any(char::is_control) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| !c.is_control()).collect())
}
