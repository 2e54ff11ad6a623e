//! Rendering resolved ranges as text.
//!
//! Two families of output share [`RelativeRange::format`]:
//!
//! - **Static** (any token except `R`/`RR`): the absolute span written with
//!   the locale's long-date patterns, e.g. `"Feb 1 - 28"` or
//!   `"Dec 1, 2999 - Jan 31, 3000"`. With the readable tokens (`ll`, `LL`)
//!   a span inside one month names the month only once.
//! - **Relative** (`R`, `RR`): a phrase built from the signed unit count,
//!   e.g. `"previous 2 days"` (`R`) or `"last 2 days"` (`RR`).
//!
//! Formatting never fails. Missing phrases degrade to empty text.

use std::fmt;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDateTime};
use regex::Regex;

use crate::calendar::is_last_day_of_month;
use crate::locale::{with_registry, LocaleRegistry, RelativeRangeTable, ResolvedLocale, FALLBACK_LOCALE};
use crate::measure::Measure;
use crate::pattern::format_date;
use crate::range::RelativeRange;

/// Token used by `Display`: the abbreviated long-date pattern.
pub const DEFAULT_FORMAT: &str = "ll";

/// Relative phrasing, default variant.
pub const RELATIVE_FORMAT: &str = "R";

/// Relative phrasing, terse variant.
pub const RELATIVE_SHORT_FORMAT: &str = "RR";

/// Options for static formatting.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Locale id, e.g. `"nl"` or `"de-AT"`.
    pub locale: String,
    /// Drop the year from sides that fall in the reference date's year.
    pub attempt_year_hiding: bool,
    /// Drop the day of month when the span covers whole months.
    pub attempt_day_hiding: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            locale: FALLBACK_LOCALE.to_string(),
            attempt_year_hiding: false,
            attempt_day_hiding: false,
        }
    }
}

impl FormatOptions {
    pub fn locale(locale: &str) -> Self {
        FormatOptions {
            locale: locale.to_string(),
            ..FormatOptions::default()
        }
    }
}

impl RelativeRange {
    /// Render the range using the process-wide locale registry.
    pub fn format(&self, token: &str, options: &FormatOptions) -> String {
        with_registry(|registry| self.format_with(registry, token, options))
    }

    /// Render the range against an explicit registry.
    pub fn format_with(&self, registry: &LocaleRegistry, token: &str, options: &FormatOptions) -> String {
        let locale = registry.resolve(&options.locale);
        match token {
            RELATIVE_FORMAT | RELATIVE_SHORT_FORMAT => format_relative(
                self.count(),
                self.countable_measure(),
                token,
                locale.relative_range,
            ),
            _ => format_static(
                self.start(),
                self.end(),
                self.date().year(),
                token,
                &locale,
                options,
            ),
        }
    }
}

impl fmt::Display for RelativeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_FORMAT, &FormatOptions::default()))
    }
}

// ── Static ──────────────────────────────────────────────────────────────────

static YEAR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^MD.]*)YYYY([^MD.]*)").expect("valid year pattern"));

static MONTH_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^D.]*)(M+)([^D.]*)").expect("valid month pattern"));

// Day token plus its trailing punctuation and an optional bracketed literal ("D [de] ").
static DAY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"D+\.?,?\s*(\[[^\]]*\]\s*)?").expect("valid day pattern"));

fn strip(regex: &Regex, pattern: &str) -> String {
    regex.replace(pattern, "").trim().to_string()
}

/// Write `[start, end]` as an absolute span.
///
/// `anchor_year` is the year of the range's reference date; it decides which
/// sides may drop their year.
pub fn format_static(
    start: NaiveDateTime,
    end: NaiveDateTime,
    anchor_year: i32,
    token: &str,
    locale: &ResolvedLocale<'_>,
    options: &FormatOptions,
) -> String {
    let same_year = start.year() == end.year();
    let same_month = same_year && start.month() == end.month();
    let same_day = same_month && start.day() == end.day();
    let readable = token.to_lowercase() == "ll";

    let hide_day = options.attempt_day_hiding
        && readable
        && start.day() == 1
        && is_last_day_of_month(end);

    let mut long_format = locale
        .calendar
        .long_date_format(token)
        .unwrap_or_else(|| token.to_string());
    if hide_day {
        long_format = strip(&DAY_TOKEN, &long_format);
    }

    let month_format = if readable {
        strip(&YEAR_TOKEN, &long_format)
    } else {
        long_format.clone()
    };

    let hide_year = options.attempt_year_hiding;
    let start_this_year = start.year() == anchor_year;
    let end_this_year = end.year() == anchor_year;

    // A day-hidden span inside one month reads as that month alone.
    let single = same_day || (hide_day && same_month);
    let merged = same_month && !single && readable;

    let (start_format, end_format) = if merged {
        let day_first = long_format.find('D') < long_format.find('M');
        let (start_format, end_format) = if day_first {
            (strip(&MONTH_TOKEN, &month_format), month_format)
        } else {
            (month_format.clone(), strip(&MONTH_TOKEN, &month_format))
        };
        let end_format = if (!end_this_year || !hide_year) && end_format != long_format {
            locale.static_range.other_year().replacen("%s", &end_format, 1)
        } else {
            end_format
        };
        (start_format, end_format)
    } else {
        let side = |this_year: bool| {
            if this_year && same_year && hide_year {
                month_format.clone()
            } else {
                long_format.clone()
            }
        };
        (side(start_this_year), side(end_this_year))
    };

    let start_text = format_date(start, &start_format, locale.calendar);
    let end_text = if single {
        String::new()
    } else {
        format_date(end, &end_format, locale.calendar)
    };

    let mut parts = Vec::with_capacity(3);
    if !start_text.trim().is_empty() {
        parts.push(start_text);
    }
    if !end_text.trim().is_empty() {
        if !parts.is_empty() {
            parts.push(locale.static_range.separator().to_string());
        }
        parts.push(end_text);
    }
    parts.join(" ")
}

// ── Relative ────────────────────────────────────────────────────────────────

/// Phrase a signed count of `measure`s with the `variant` table.
pub fn format_relative(count: i32, measure: Measure, variant: &str, table: &RelativeRangeTable) -> String {
    let phrases = table.phrases(variant);
    let measure = measure.as_str();
    let abs = count.unsigned_abs();
    let abs_text = abs.to_string();

    if let Some(irregular) = phrases.get(&format!("{measure}_{count}")) {
        return irregular.replacen("%s", &abs_text, 1);
    }

    let plural = abs > 1;
    let unit = plural
        .then(|| phrases.get(&format!("{measure}_plural")))
        .flatten()
        .or_else(|| phrases.get(measure))
        .unwrap_or_default()
        .replacen("%s", &abs_text, 1);

    let kind = match count {
        0 => "current",
        c if c > 0 => "future",
        _ => "past",
    };
    let phrase = phrases
        .get(&format!("{kind}_{measure}"))
        .or_else(|| phrases.get(&format!("{kind}_{abs}")))
        .or_else(|| plural.then(|| phrases.get(&format!("{kind}_plural"))).flatten())
        .or_else(|| phrases.get(kind))
        .unwrap_or_default();

    phrase.replacen("%d", &unit, 1)
}

// ── Tests ───────────────────────────────────────────────────────────────────
