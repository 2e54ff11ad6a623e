//! Enumerated range vocabulary: measures, range types, range parts and the
//! configurable week start.
//!
//! Every enumeration parses from its textual spelling via [`FromStr`] and
//! rejects anything outside its fixed set with [`RangeError::InvalidValue`].

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::RangeError;

// ── Measure ─────────────────────────────────────────────────────────────────

/// The calendar unit a range is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Measure {
    Day,
    Week,
    /// Week starting on Monday regardless of [`WeekStartDay`].
    IsoWeek,
    #[default]
    Month,
    Quarter,
    Year,
}

impl Measure {
    pub const ALL: [Measure; 6] = [
        Measure::Day,
        Measure::Week,
        Measure::IsoWeek,
        Measure::Month,
        Measure::Quarter,
        Measure::Year,
    ];

    /// Canonical singular spelling (`"isoWeek"` for ISO weeks).
    pub fn as_str(self) -> &'static str {
        match self {
            Measure::Day => "day",
            Measure::Week => "week",
            Measure::IsoWeek => "isoWeek",
            Measure::Month => "month",
            Measure::Quarter => "quarter",
            Measure::Year => "year",
        }
    }

    /// The unit used for add/subtract arithmetic. ISO weeks step in plain weeks.
    pub fn countable(self) -> Measure {
        match self {
            Measure::IsoWeek => Measure::Week,
            other => other,
        }
    }
}

impl FromStr for Measure {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" | "days" => Ok(Measure::Day),
            "week" | "weeks" => Ok(Measure::Week),
            "isoWeek" | "isoWeeks" => Ok(Measure::IsoWeek),
            "month" | "months" => Ok(Measure::Month),
            "quarter" | "quarters" => Ok(Measure::Quarter),
            "year" | "years" => Ok(Measure::Year),
            _ => Err(RangeError::invalid_value("measure", s)),
        }
    }
}

impl TryFrom<String> for Measure {
    type Error = RangeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Measure> for String {
    fn from(measure: Measure) -> Self {
        measure.as_str().to_string()
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RangeType ───────────────────────────────────────────────────────────────

/// Which side of the reference date a range lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RangeType {
    #[default]
    Previous,
    /// The period containing the reference date, up to that date.
    Current,
    Next,
}

impl RangeType {
    pub fn as_str(self) -> &'static str {
        match self {
            RangeType::Previous => "previous",
            RangeType::Current => "current",
            RangeType::Next => "next",
        }
    }
}

impl FromStr for RangeType {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "previous" => Ok(RangeType::Previous),
            "current" => Ok(RangeType::Current),
            "next" => Ok(RangeType::Next),
            _ => Err(RangeError::invalid_value("type", s)),
        }
    }
}

impl TryFrom<String> for RangeType {
    type Error = RangeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RangeType> for String {
    fn from(range_type: RangeType) -> Self {
        range_type.as_str().to_string()
    }
}

impl fmt::Display for RangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RangePart ───────────────────────────────────────────────────────────────

/// One boundary of a range, used by lock/unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangePart {
    Start,
    End,
}

impl RangePart {
    pub const BOTH: [RangePart; 2] = [RangePart::Start, RangePart::End];
}

// ── Configurable week start ─────────────────────────────────────────────────

/// Which day begins a plain [`Measure::Week`].
///
/// Does **not** affect [`Measure::IsoWeek`], which always starts on Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStartDay {
    Monday,
    /// US/English convention.
    #[default]
    Sunday,
}

impl WeekStartDay {
    /// How many days `weekday` is from this week-start day.
    pub(crate) fn days_since(self, weekday: Weekday) -> i64 {
        match self {
            WeekStartDay::Monday => weekday.num_days_from_monday() as i64,
            WeekStartDay::Sunday => weekday.num_days_from_sunday() as i64,
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
