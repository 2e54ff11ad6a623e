//! Relative range resolution.
//!
//! A [`RelativeRange`] is a declarative description ("the previous 2 whole
//! months", "this quarter to date") anchored to a reference date. Reading
//! [`start`](RelativeRange::start) or [`end`](RelativeRange::end) resolves it
//! into an inclusive, day-granular interval: `start` is always 00:00:00.000
//! and `end` is always 23:59:59.999.
//!
//! # Resolution
//!
//! The end is derived from the reference date, the range type, the whole
//! flag and the margin. The start is derived from the end, the unit count,
//! the measure and the whole flag. Explicit `start`/`end` overrides ("locks")
//! and the `minimum_start` floor act as ceilings/floors on those computed
//! values and never widen the range past its opposite boundary.
//!
//! Resolution is memoized; every setter invalidates the cached bounds.
//!
//! # Examples
//!
//! ```
//! use relative_range::{Measure, RelativeRange};
//! use relative_range::calendar::parse_date;
//!
//! let mut range = RelativeRange::new();
//! range
//!     .set_date(Some(parse_date("3000-02-12").unwrap()))
//!     .set_units(2)
//!     .set_measure(Measure::Month);
//!
//! assert_eq!(range.to_array(None), ["2999-12-01", "3000-01-31"]);
//! assert_eq!(range.length(), 62);
//! ```

use std::cell::OnceCell;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::trace;

use crate::calendar::{days_between, end_of, end_of_day, parse_date, shift, start_of, start_of_day};
use crate::error::{RangeError, Result};
use crate::locale::{with_registry, FALLBACK_LOCALE};
use crate::measure::{Measure, RangePart, RangeType, WeekStartDay};
use crate::pattern::format_date;

/// Date pattern used by [`RelativeRange::to_json`] and [`RelativeRange::to_array`].
pub const DAY_FORMAT: &str = "YYYY-MM-DD";

// ── Attributes ──────────────────────────────────────────────────────────────

/// The settable fields of a [`RelativeRange`], in serialization order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Date,
    Measure,
    Units,
    Type,
    Whole,
    Margin,
    Start,
    End,
    MinimumStart,
}

impl Attribute {
    pub const ALL: [Attribute; 9] = [
        Attribute::Date,
        Attribute::Measure,
        Attribute::Units,
        Attribute::Type,
        Attribute::Whole,
        Attribute::Margin,
        Attribute::Start,
        Attribute::End,
        Attribute::MinimumStart,
    ];

    /// The serialized (camelCase) name.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Date => "date",
            Attribute::Measure => "measure",
            Attribute::Units => "units",
            Attribute::Type => "type",
            Attribute::Whole => "whole",
            Attribute::Margin => "margin",
            Attribute::Start => "start",
            Attribute::End => "end",
            Attribute::MinimumStart => "minimumStart",
        }
    }
}

impl FromStr for Attribute {
    type Err = RangeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|attribute| attribute.name() == s)
            .ok_or_else(|| RangeError::UnknownAttribute(s.to_string()))
    }
}

// ── Options ─────────────────────────────────────────────────────────────────

/// A partial range specification. `None` fields are left untouched by
/// [`RelativeRange::set`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RangeOptions {
    #[serde(deserialize_with = "deserialize_date")]
    pub date: Option<NaiveDateTime>,
    pub measure: Option<Measure>,
    pub units: Option<i32>,
    #[serde(rename = "type")]
    pub range_type: Option<RangeType>,
    pub whole: Option<bool>,
    pub margin: Option<i32>,
    #[serde(deserialize_with = "deserialize_date")]
    pub start: Option<NaiveDateTime>,
    #[serde(deserialize_with = "deserialize_date")]
    pub end: Option<NaiveDateTime>,
    #[serde(deserialize_with = "deserialize_date")]
    pub minimum_start: Option<NaiveDateTime>,
}

fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|s| parse_date(&s).map_err(serde::de::Error::custom))
        .transpose()
}

/// Options for [`RelativeRange::to_json`].
#[derive(Debug, Clone)]
pub struct JsonOptions {
    /// Pattern for date-valued fields.
    pub format: String,
    /// Emit resolved defaults (`true`) or only explicitly set fields (`false`).
    pub defaults: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            format: DAY_FORMAT.to_string(),
            defaults: true,
        }
    }
}

// ── RelativeRange ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

/// A date range relative to a reference date.
///
/// Not `Sync`: resolution is cached per instance.
#[derive(Debug, Clone, Default)]
pub struct RelativeRange {
    date: Option<NaiveDateTime>,
    measure: Option<Measure>,
    units: Option<i32>,
    range_type: Option<RangeType>,
    whole: Option<bool>,
    margin: Option<i32>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    minimum_start: Option<NaiveDateTime>,
    week_start: WeekStartDay,
    cache: OnceCell<Bounds>,
}

impl RelativeRange {
    /// A range with every field at its default: the previous whole month
    /// before today.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_options(options: RangeOptions) -> Self {
        let mut range = Self::new();
        range.set(options);
        range
    }

    /// Overwrite the fields `options` supplies; leave the rest alone.
    pub fn set(&mut self, options: RangeOptions) -> &mut Self {
        let RangeOptions {
            date,
            measure,
            units,
            range_type,
            whole,
            margin,
            start,
            end,
            minimum_start,
        } = options;

        self.date = date.or(self.date);
        self.measure = measure.or(self.measure);
        self.units = units.or(self.units);
        self.range_type = range_type.or(self.range_type);
        self.whole = whole.or(self.whole);
        self.margin = margin.or(self.margin);
        self.start = start.or(self.start);
        self.end = end.or(self.end);
        self.minimum_start = minimum_start.or(self.minimum_start);
        self.invalidate()
    }

    /// Set one field from text, validating it.
    ///
    /// An empty `value` clears the field. Enumerated fields reject values
    /// outside their set; dates must parse with [`parse_date`].
    pub fn set_attribute(&mut self, attribute: Attribute, value: &str) -> Result<&mut Self> {
        let value = value.trim();
        let empty = value.is_empty();
        let date = || (!empty).then(|| parse_date(value)).transpose();
        let number = |field: &'static str| {
            (!empty)
                .then(|| value.parse::<i32>())
                .transpose()
                .map_err(|_| RangeError::invalid_value(field, value))
        };

        match attribute {
            Attribute::Date => self.date = date()?,
            Attribute::Measure => self.measure = (!empty).then(|| value.parse()).transpose()?,
            Attribute::Units => self.units = number("units")?,
            Attribute::Type => self.range_type = (!empty).then(|| value.parse()).transpose()?,
            Attribute::Whole => {
                self.whole = (!empty)
                    .then(|| value.parse::<bool>())
                    .transpose()
                    .map_err(|_| RangeError::invalid_value("whole", value))?
            }
            Attribute::Margin => self.margin = number("margin")?,
            Attribute::Start => self.start = date()?,
            Attribute::End => self.end = date()?,
            Attribute::MinimumStart => self.minimum_start = date()?,
        }
        Ok(self.invalidate())
    }

    fn invalidate(&mut self) -> &mut Self {
        self.cache.take();
        self
    }

    // ── setters ─────────────────────────────────────────────────────────

    /// Set the reference date; `None` means "now".
    pub fn set_date(&mut self, date: Option<NaiveDateTime>) -> &mut Self {
        self.date = date;
        self.invalidate()
    }

    pub fn set_measure(&mut self, measure: Measure) -> &mut Self {
        self.measure = Some(measure);
        self.invalidate()
    }

    pub fn set_units(&mut self, units: i32) -> &mut Self {
        self.units = Some(units);
        self.invalidate()
    }

    pub fn set_type(&mut self, range_type: RangeType) -> &mut Self {
        self.range_type = Some(range_type);
        self.invalidate()
    }

    pub fn set_whole(&mut self, whole: Option<bool>) -> &mut Self {
        self.whole = whole;
        self.invalidate()
    }

    pub fn set_margin(&mut self, margin: Option<i32>) -> &mut Self {
        self.margin = margin;
        self.invalidate()
    }

    pub fn set_start(&mut self, start: Option<NaiveDateTime>) -> &mut Self {
        self.start = start;
        self.invalidate()
    }

    pub fn set_end(&mut self, end: Option<NaiveDateTime>) -> &mut Self {
        self.end = end;
        self.invalidate()
    }

    pub fn set_minimum_start(&mut self, minimum_start: Option<NaiveDateTime>) -> &mut Self {
        self.minimum_start = minimum_start;
        self.invalidate()
    }

    pub fn set_week_start(&mut self, week_start: WeekStartDay) -> &mut Self {
        self.week_start = week_start;
        self.invalidate()
    }

    // ── specification getters ───────────────────────────────────────────

    /// The reference date, or the local "now" when none was set.
    pub fn date(&self) -> NaiveDateTime {
        self.date.unwrap_or_else(|| Local::now().naive_local())
    }

    /// The explicitly set reference date.
    pub fn explicit_date(&self) -> Option<NaiveDateTime> {
        self.date
    }

    pub fn measure(&self) -> Measure {
        self.measure.unwrap_or_default()
    }

    /// The unit used for arithmetic (`isoWeek` steps in plain weeks).
    pub fn countable_measure(&self) -> Measure {
        self.measure().countable()
    }

    pub fn range_type(&self) -> RangeType {
        self.range_type.unwrap_or_default()
    }

    /// Unit count; always 1 for `current` ranges.
    pub fn units(&self) -> i32 {
        match self.range_type() {
            RangeType::Current => 1,
            _ => self.units.unwrap_or(1),
        }
    }

    /// Day offset; defaults to 0 for `current` and 1 otherwise.
    pub fn margin(&self) -> i32 {
        self.margin.unwrap_or(match self.range_type() {
            RangeType::Current => 0,
            _ => 1,
        })
    }

    /// The explicitly set whole flag.
    pub fn whole(&self) -> Option<bool> {
        self.whole
    }

    /// Whether the range snaps to period boundaries.
    ///
    /// Days are always whole. Otherwise the explicit flag wins, and a
    /// to-date range is not whole by default.
    pub fn is_whole(&self) -> bool {
        self.measure() == Measure::Day || self.whole.unwrap_or(!self.is_to_date())
    }

    pub fn is_to_date(&self) -> bool {
        self.range_type() == RangeType::Current
    }

    pub fn minimum_start(&self) -> Option<NaiveDateTime> {
        self.minimum_start
    }

    pub fn week_start(&self) -> WeekStartDay {
        self.week_start
    }

    // ── resolved values ─────────────────────────────────────────────────

    /// The first instant of the range (00:00:00.000).
    pub fn start(&self) -> NaiveDateTime {
        self.bounds().start
    }

    /// The last instant of the range (23:59:59.999).
    pub fn end(&self) -> NaiveDateTime {
        self.bounds().end
    }

    /// Number of calendar days covered, inclusive.
    pub fn length(&self) -> i64 {
        let Bounds { start, end } = self.bounds();
        1 + days_between(end, start)
    }

    /// Signed unit count: 0 for `current`, negative for `previous`.
    pub fn count(&self) -> i32 {
        match self.range_type() {
            RangeType::Current => 0,
            RangeType::Previous => self.units().saturating_neg(),
            RangeType::Next => self.units(),
        }
    }

    fn bounds(&self) -> Bounds {
        *self.cache.get_or_init(|| {
            let end = self.resolve_end();
            let start = self.resolve_start(end);
            trace!(
                measure = %self.measure(),
                range_type = %self.range_type(),
                units = self.units(),
                %start,
                %end,
                "resolved relative range"
            );
            Bounds { start, end }
        })
    }

    fn resolve_end(&self) -> NaiveDateTime {
        let date = self.date();
        let measure = self.measure();
        let ws = self.week_start;
        let forward = self.range_type() == RangeType::Next;
        let sign = if forward { 1 } else { -1 };
        let margin = i64::from(self.margin());

        let computed = if self.is_whole() {
            shift(date, sign * (margin - 1), Measure::Day)
                .and_then(|dt| {
                    if forward {
                        end_of(dt, measure, ws)
                    } else {
                        start_of(dt, measure, ws)
                    }
                })
                .and_then(|dt| shift(dt, sign, Measure::Day))
                .and_then(|dt| end_of(dt, measure, ws))
        } else {
            shift(date, sign * margin, Measure::Day)
        };
        let computed = end_of_day(computed.unwrap_or(saturated(forward)));

        match self.end {
            Some(lock) => lock.min(computed),
            None => computed,
        }
    }

    fn resolve_start(&self, end: NaiveDateTime) -> NaiveDateTime {
        let measure = self.measure();
        let countable = measure.countable();
        let ws = self.week_start;
        let units = i64::from(self.units());

        let computed = if self.is_whole() {
            shift(end, -(units - 1), countable).and_then(|dt| start_of(dt, measure, ws))
        } else {
            shift(end, -units, countable)
                .and_then(|dt| {
                    if self.is_to_date() {
                        end_of(dt, measure, ws)
                    } else {
                        Some(dt)
                    }
                })
                .and_then(|dt| shift(dt, 1, Measure::Day))
        };
        let mut start = start_of_day(computed.unwrap_or(NaiveDateTime::MIN));

        if let Some(floor) = self.minimum_start {
            start = start.max(floor).min(end);
        }

        match self.start {
            Some(lock) => lock.min(end),
            None => start,
        }
    }

    // ── locks ───────────────────────────────────────────────────────────

    /// Freeze the computed boundary (or both, for `None`) into an explicit
    /// override so it stops following the specification.
    pub fn lock(&mut self, part: Option<RangePart>) -> &mut Self {
        let Bounds { start, end } = self.bounds();
        for part in parts(part) {
            match part {
                RangePart::Start => self.start = Some(start),
                RangePart::End => self.end = Some(end),
            }
        }
        self.invalidate()
    }

    /// Release the override on a boundary (or both, for `None`).
    pub fn unlock(&mut self, part: Option<RangePart>) -> &mut Self {
        for part in parts(part) {
            match part {
                RangePart::Start => self.start = None,
                RangePart::End => self.end = None,
            }
        }
        self.invalidate()
    }

    /// Whether the boundary (or both, for `None`) carries an override.
    pub fn is_locked(&self, part: Option<RangePart>) -> bool {
        parts(part).iter().all(|part| match part {
            RangePart::Start => self.start.is_some(),
            RangePart::End => self.end.is_some(),
        })
    }

    // ── derived ranges ──────────────────────────────────────────────────

    /// The `units` `measure`s before this range's start.
    pub fn previous(&self, units: i32, measure: Measure, whole: Option<bool>) -> RelativeRange {
        self.derive(self.start(), RangeType::Previous, units, measure, whole)
    }

    /// The `measure` containing this range's end, up to that end.
    pub fn current(&self, measure: Measure, whole: Option<bool>) -> RelativeRange {
        self.derive(self.end(), RangeType::Current, 1, measure, whole)
    }

    /// The `units` `measure`s after this range's end.
    pub fn next(&self, units: i32, measure: Measure, whole: Option<bool>) -> RelativeRange {
        self.derive(self.end(), RangeType::Next, units, measure, whole)
    }

    fn derive(
        &self,
        date: NaiveDateTime,
        range_type: RangeType,
        units: i32,
        measure: Measure,
        whole: Option<bool>,
    ) -> RelativeRange {
        let mut range = anchored(date, range_type, units, measure, whole);
        range.week_start = self.week_start;
        range
    }

    // ── export ──────────────────────────────────────────────────────────

    /// The range's fields as a JSON object.
    ///
    /// With `defaults`, resolved values are emitted for every field that has
    /// one (`measure`, `units`, `type`, `margin`, `start`, `end`) plus any
    /// explicitly set fields. Without, only explicitly set fields appear.
    pub fn to_json(&self, options: &JsonOptions) -> Map<String, Value> {
        let render = |dt: NaiveDateTime| Value::String(self.render_date(dt, &options.format));

        Attribute::ALL
            .into_iter()
            .filter_map(|attribute| {
                let value = if options.defaults {
                    self.resolved_value(attribute, &render)
                        .or_else(|| self.explicit_value(attribute, &render))
                } else {
                    self.explicit_value(attribute, &render)
                };
                value.map(|value| (attribute.name().to_string(), value))
            })
            .collect()
    }

    fn explicit_value(
        &self,
        attribute: Attribute,
        render: &impl Fn(NaiveDateTime) -> Value,
    ) -> Option<Value> {
        match attribute {
            Attribute::Date => self.date.map(render),
            Attribute::Measure => self.measure.map(|m| Value::from(m.as_str())),
            Attribute::Units => self.units.map(Value::from),
            Attribute::Type => self.range_type.map(|t| Value::from(t.as_str())),
            Attribute::Whole => self.whole.map(Value::from),
            Attribute::Margin => self.margin.map(Value::from),
            Attribute::Start => self.start.map(|_| render(self.start())),
            Attribute::End => self.end.map(|_| render(self.end())),
            Attribute::MinimumStart => self.minimum_start.map(render),
        }
    }

    fn resolved_value(
        &self,
        attribute: Attribute,
        render: &impl Fn(NaiveDateTime) -> Value,
    ) -> Option<Value> {
        match attribute {
            Attribute::Measure => Some(Value::from(self.measure().as_str())),
            Attribute::Units => Some(Value::from(self.units())),
            Attribute::Type => Some(Value::from(self.range_type().as_str())),
            Attribute::Margin => Some(Value::from(self.margin())),
            Attribute::Start => Some(render(self.start())),
            Attribute::End => Some(render(self.end())),
            Attribute::Date | Attribute::Whole | Attribute::MinimumStart => None,
        }
    }

    /// `[start, end]` rendered with `pattern` (default [`DAY_FORMAT`]).
    pub fn to_array(&self, pattern: Option<&str>) -> [String; 2] {
        let pattern = pattern.unwrap_or(DAY_FORMAT);
        [
            self.render_date(self.start(), pattern),
            self.render_date(self.end(), pattern),
        ]
    }

    fn render_date(&self, dt: NaiveDateTime, pattern: &str) -> String {
        with_registry(|registry| format_date(dt, pattern, registry.resolve(FALLBACK_LOCALE).calendar))
    }
}

impl Serialize for RelativeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json(&JsonOptions::default()).serialize(serializer)
    }
}

fn parts(part: Option<RangePart>) -> Vec<RangePart> {
    match part {
        Some(part) => vec![part],
        None => RangePart::BOTH.to_vec(),
    }
}

fn saturated(forward: bool) -> NaiveDateTime {
    if forward {
        NaiveDateTime::MAX
    } else {
        NaiveDateTime::MIN
    }
}

fn anchored(
    date: NaiveDateTime,
    range_type: RangeType,
    units: i32,
    measure: Measure,
    whole: Option<bool>,
) -> RelativeRange {
    RelativeRange::from_options(RangeOptions {
        date: Some(date),
        measure: Some(measure),
        units: Some(units),
        range_type: Some(range_type),
        whole,
        ..RangeOptions::default()
    })
}

/// The `units` `measure`s before `date`.
pub fn previous(date: NaiveDateTime, units: i32, measure: Measure, whole: Option<bool>) -> RelativeRange {
    anchored(date, RangeType::Previous, units, measure, whole)
}

/// The `measure` containing `date`, up to `date`.
pub fn current(date: NaiveDateTime, measure: Measure, whole: Option<bool>) -> RelativeRange {
    anchored(date, RangeType::Current, 1, measure, whole)
}

/// The `units` `measure`s after `date`.
pub fn next(date: NaiveDateTime, units: i32, measure: Measure, whole: Option<bool>) -> RelativeRange {
    anchored(date, RangeType::Next, units, measure, whole)
}

// ── Tests ───────────────────────────────────────────────────────────────────
