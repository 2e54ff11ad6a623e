//! Token-based date rendering.
//!
//! Patterns use the familiar long-date tokens:
//!
//! | Token | Output |
//! |-------|--------|
//! | `YYYY` / `YY` / `Y` | 4-digit, 2-digit, unpadded year |
//! | `MMMM` / `MMM` / `MM` / `M` | long name, short name, padded, unpadded month |
//! | `DD` / `D` | padded, unpadded day of month |
//! | `dddd` / `ddd` / `d` | long weekday, short weekday, day of week (Sunday = 0) |
//! | `HH` / `H` / `hh` / `h` | 24-hour and 12-hour clock |
//! | `mm` / `m`, `ss` / `s`, `SSS` | minutes, seconds, milliseconds |
//! | `A` / `a` | AM/PM marker |
//! | `Q` | quarter |
//! | `[text]` | literal text |
//!
//! Anything else is copied through unchanged.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::calendar::millisecond;
use crate::locale::CalendarNames;

const TOKENS: &[&str] = &[
    "YYYY", "MMMM", "dddd", "SSS", "MMM", "ddd", "YY", "MM", "DD", "HH", "hh", "mm", "ss", "Y",
    "M", "D", "d", "H", "h", "m", "s", "A", "a", "Q",
];

/// Render `dt` according to `pattern` using `names` for month and weekday text.
pub fn format_date(dt: NaiveDateTime, pattern: &str, names: &CalendarNames) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;

    while let Some(c) = rest.chars().next() {
        if c == '[' {
            if let Some(close) = rest.find(']') {
                out.push_str(&rest[1..close]);
                rest = &rest[close + 1..];
                continue;
            }
        }
        match TOKENS.iter().find(|tok| rest.starts_with(**tok)) {
            Some(tok) => {
                render_token(&mut out, tok, dt, names);
                rest = &rest[tok.len()..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    out
}

fn render_token(out: &mut String, token: &str, dt: NaiveDateTime, names: &CalendarNames) {
    let month0 = dt.month0() as usize;
    let weekday = dt.weekday().num_days_from_sunday() as usize;
    let hour12 = match dt.hour() % 12 {
        0 => 12,
        h => h,
    };

    let rendered = match token {
        "YYYY" => format!("{:04}", dt.year()),
        "YY" => format!("{:02}", dt.year().rem_euclid(100)),
        "Y" => dt.year().to_string(),
        "MMMM" => name_at(&names.months, month0),
        "MMM" => name_at(&names.months_short, month0),
        "MM" => format!("{:02}", dt.month()),
        "M" => dt.month().to_string(),
        "DD" => format!("{:02}", dt.day()),
        "D" => dt.day().to_string(),
        "dddd" => name_at(&names.weekdays, weekday),
        "ddd" => name_at(&names.weekdays_short, weekday),
        "d" => weekday.to_string(),
        "HH" => format!("{:02}", dt.hour()),
        "H" => dt.hour().to_string(),
        "hh" => format!("{hour12:02}"),
        "h" => hour12.to_string(),
        "mm" => format!("{:02}", dt.minute()),
        "m" => dt.minute().to_string(),
        "ss" => format!("{:02}", dt.second()),
        "s" => dt.second().to_string(),
        "SSS" => format!("{:03}", millisecond(dt)),
        "A" => (if dt.hour() < 12 { "AM" } else { "PM" }).to_string(),
        "a" => (if dt.hour() < 12 { "am" } else { "pm" }).to_string(),
        "Q" => ((dt.month() - 1) / 3 + 1).to_string(),
        _ => token.to_string(),
    };
    out.push_str(&rendered);
}

fn name_at(names: &[String], index: usize) -> String {
    names.get(index).cloned().unwrap_or_default()
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::parse_date;
    use crate::locale::builtin;

    fn render(date: &str, pattern: &str) -> String {
        let names = builtin("en").map(|data| data.calendar).unwrap_or_default();
        format_date(parse_date(date).unwrap(), pattern, &names)
    }

    #[test]
    fn test_day_format() {
        assert_eq!(render("3000-02-12", "YYYY-MM-DD"), "3000-02-12");
    }

    #[test]
    fn test_unpadded_tokens() {
        assert_eq!(render("2000-01-01", "YMD"), "200011");
    }

    #[test]
    fn test_month_and_weekday_names() {
        assert_eq!(render("3000-02-12", "dddd, MMMM D, YYYY"), "Wednesday, February 12, 3000");
        assert_eq!(render("3000-02-12", "ddd MMM D"), "Wed Feb 12");
    }

    #[test]
    fn test_bracketed_literal_is_not_tokenized() {
        assert_eq!(render("3000-02-12", "D [de] MMM"), "12 de Feb");
    }

    #[test]
    fn test_time_tokens() {
        assert_eq!(render("3000-02-12T00:05:09", "hh:mm:ss A"), "12:05:09 AM");
        assert_eq!(render("3000-02-12T23:59:59.999", "HH:mm:ss.SSS"), "23:59:59.999");
        assert_eq!(render("3000-08-12", "[Q]Q"), "Q3");
    }
}
