//! Timezone-naive Gregorian date arithmetic.
//!
//! The small set of operations range resolution needs: stepping by a
//! [`Measure`], truncating to the start or end of a period, and parsing
//! textual dates. All functions are pure and return `None` when the result
//! leaves chrono's representable range.

use chrono::{
    DateTime, Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike,
};

use crate::error::RangeError;
use crate::measure::{Measure, WeekStartDay};

/// Step `dt` by `amount` units of `measure` (negative steps go back in time).
///
/// Month-based steps clamp to the last valid day of the target month, so
/// March 31 minus one month is the last day of February.
pub fn shift(dt: NaiveDateTime, amount: i64, measure: Measure) -> Option<NaiveDateTime> {
    match measure {
        Measure::Day => dt.checked_add_signed(Duration::try_days(amount)?),
        Measure::Week | Measure::IsoWeek => {
            dt.checked_add_signed(Duration::try_days(amount.checked_mul(7)?)?)
        }
        Measure::Month => shift_months(dt, amount),
        Measure::Quarter => shift_months(dt, amount.checked_mul(3)?),
        Measure::Year => shift_months(dt, amount.checked_mul(12)?),
    }
}

fn shift_months(dt: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        dt.checked_add_months(magnitude)
    } else {
        dt.checked_sub_months(magnitude)
    }
}

/// Truncate `dt` to 00:00 on the first day of its `measure` period.
pub fn start_of(dt: NaiveDateTime, measure: Measure, ws: WeekStartDay) -> Option<NaiveDateTime> {
    let date = dt.date();
    let first = match measure {
        Measure::Day => date,
        Measure::Week => date.checked_sub_signed(Duration::days(ws.days_since(date.weekday())))?,
        Measure::IsoWeek => date.checked_sub_signed(Duration::days(
            WeekStartDay::Monday.days_since(date.weekday()),
        ))?,
        Measure::Month => NaiveDate::from_ymd_opt(date.year(), date.month(), 1)?,
        Measure::Quarter => {
            let q_start_month = ((date.month() - 1) / 3) * 3 + 1;
            NaiveDate::from_ymd_opt(date.year(), q_start_month, 1)?
        }
        Measure::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1)?,
    };
    Some(first.and_time(NaiveTime::MIN))
}

/// Truncate `dt` to 23:59:59.999 on the last day of its `measure` period.
pub fn end_of(dt: NaiveDateTime, measure: Measure, ws: WeekStartDay) -> Option<NaiveDateTime> {
    let next_start = shift(start_of(dt, measure, ws)?, 1, measure)?;
    next_start.checked_sub_signed(Duration::milliseconds(1))
}

pub fn start_of_day(dt: NaiveDateTime) -> NaiveDateTime {
    dt.date().and_time(NaiveTime::MIN)
}

/// 23:59:59.999 on the same day.
pub fn end_of_day(dt: NaiveDateTime) -> NaiveDateTime {
    let (last, _) = NaiveTime::MIN.overflowing_sub_signed(Duration::milliseconds(1));
    dt.date().and_time(last)
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (y, m) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|first_next| first_next.pred_opt())
        .map_or(31, |last| last.day())
}

/// Whether `dt` falls on the last calendar day of its month.
pub fn is_last_day_of_month(dt: NaiveDateTime) -> bool {
    dt.day() == days_in_month(dt.date())
}

/// Whole days from `earlier` to `later`, truncated toward zero.
pub fn days_between(later: NaiveDateTime, earlier: NaiveDateTime) -> i64 {
    (later - earlier).num_days()
}

/// Parse a textual date.
///
/// Accepts RFC 3339 (the offset is dropped, keeping the wall-clock time),
/// `YYYY-MM-DDTHH:MM:SS[.fff]`, `YYYY-MM-DD HH:MM:SS` and `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDateTime, RangeError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|e| RangeError::InvalidDate(format!("'{s}': {e}")))
}

/// The millisecond component of `dt`'s time of day.
pub(crate) fn millisecond(dt: NaiveDateTime) -> u32 {
    dt.nanosecond() / 1_000_000 % 1000
}

// ── Tests ───────────────────────────────────────────────────────────────────
