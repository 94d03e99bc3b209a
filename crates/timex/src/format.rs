//! Layout conversion and human readable durations.

use crate::DEFAULT_LAYOUT;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use std::fmt;

/// Format without panicking on a malformed layout.
pub(crate) fn strftime<Tz>(time: &DateTime<Tz>, layout: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let layout = if layout.is_empty() || !is_valid(layout) {
        DEFAULT_LAYOUT
    } else {
        layout
    };
    time.format(layout).to_string()
}

fn is_valid(layout: &str) -> bool {
    !StrftimeItems::new(layout).any(|item| matches!(item, Item::Error))
}

/// Convert a date template like "Y-m-d H:i:s" to a strftime layout.
///
/// | char | meaning | | char | meaning |
/// |---|---|---|---|---|
/// | Y | 2006 | | H | 15 |
/// | y | 06 | | G | 15, no padding |
/// | m | 01 | | h | 03 |
/// | n | 1 | | g | 3 |
/// | M | Jan | | i | 04 |
/// | F | January | | s | 05 |
/// | d | 02 | | a | pm |
/// | j | 2 | | A | PM |
/// | D | Mon | | T | MST |
/// | l | Monday | | P | -07:00 |
/// | U | unix seconds | | O | -0700 |
///
/// `\` escapes the next char. Anything else is copied literally.
pub fn to_layout(template: &str) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        let spec = match c {
            'Y' => "%Y",
            'y' => "%y",
            'm' => "%m",
            'n' => "%-m",
            'M' => "%b",
            'F' => "%B",
            'd' => "%d",
            'j' => "%-d",
            'D' => "%a",
            'l' => "%A",
            'H' => "%H",
            'G' => "%-H",
            'h' => "%I",
            'g' => "%-I",
            'i' => "%M",
            's' => "%S",
            'a' => "%P",
            'A' => "%p",
            'T' => "%Z",
            'P' => "%:z",
            'O' => "%z",
            'U' => "%s",
            '\\' => {
                if let Some(next) = chars.next() {
                    push_literal(&mut out, next);
                }
                continue;
            }
            other => {
                push_literal(&mut out, other);
                continue;
            }
        };
        out.push_str(spec);
    }
    out
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

/// (lower bound in seconds, unit label, divisor). A zero divisor means the
/// label is printed as-is.
const AGO_STEPS: &[(i64, &str, i64)] = &[
    (0, "now", 0),
    (1, "1 sec", 0),
    (2, "secs", 1),
    (60, "1 min", 0),
    (120, "mins", 60),
    (3600, "1 hour", 0),
    (7200, "hours", 3600),
    (86400, "1 day", 0),
    (172800, "days", 86400),
];

/// Format an elapsed number of seconds, e.g. 150 → "2 mins".
pub fn how_long_ago(secs: i64) -> String {
    let Some(&(_, label, divisor)) = AGO_STEPS.iter().rev().find(|(min, _, _)| secs >= *min) else {
        return "unknown".to_string();
    };

    if divisor == 0 {
        label.to_string()
    } else {
        format!("{} {}", secs / divisor, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn template_to_layout() {
        assert_eq!(to_layout("Y-m-d H:i:s"), "%Y-%m-%d %H:%M:%S");
        assert_eq!(to_layout("D, j M y"), "%a, %-d %b %y");
        assert_eq!(to_layout("100% \\Y"), "100%% Y");
    }

    #[test]
    fn malformed_layout_is_detected() {
        assert!(is_valid("%Y-%m-%d"));
        assert!(!is_valid("%Q"));
    }

    #[test]
    fn formats_with_layout() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap();
        assert_eq!(strftime(&t, &to_layout("n/j g:i A")), "3/1 9:05 AM");
    }

    #[test]
    fn how_long_ago_steps() {
        assert_eq!(how_long_ago(-1), "unknown");
        assert_eq!(how_long_ago(0), "now");
        assert_eq!(how_long_ago(1), "1 sec");
        assert_eq!(how_long_ago(45), "45 secs");
        assert_eq!(how_long_ago(60), "1 min");
        assert_eq!(how_long_ago(150), "2 mins");
        assert_eq!(how_long_ago(3600), "1 hour");
        assert_eq!(how_long_ago(3 * 3600 + 5), "3 hours");
        assert_eq!(how_long_ago(86400), "1 day");
        assert_eq!(how_long_ago(10 * 86400), "10 days");
    }
}
