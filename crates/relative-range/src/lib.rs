//! # relative-range
//!
//! Relative calendar date ranges and their localized rendering.
//!
//! A [`RelativeRange`] describes a span such as "the previous 2 whole
//! months" or "this week to date" relative to a reference date, resolves it
//! into inclusive day-granular bounds, and renders it either as an absolute
//! span ("Feb 1 - 28") or as a phrase ("last 2 days").
//!
//! ## Modules
//!
//! - [`range`] — range specification, resolution, locks, derived ranges and export
//! - [`format`] — static (absolute span) and relative (phrase) formatting
//! - [`locale`] — locale tables, built-in locales and the locale registry
//! - [`measure`] — measures, range types and the configurable week start
//! - [`calendar`] — timezone-naive date arithmetic and date parsing
//! - [`pattern`] — token-based date patterns
//! - [`error`] — Error types

pub mod calendar;
pub mod error;
pub mod format;
pub mod locale;
pub mod measure;
pub mod pattern;
pub mod range;

pub use error::{RangeError, Result};
pub use format::{format_relative, format_static, FormatOptions, DEFAULT_FORMAT};
pub use locale::{
    update_locale, update_locale_json, with_registry, CalendarNames, LocaleData, LocaleRegistry,
    LocaleUpdate, RelativeRangeTable, StaticRangeTable,
};
pub use measure::{Measure, RangePart, RangeType, WeekStartDay};
pub use range::{
    current, next, previous, Attribute, JsonOptions, RangeOptions, RelativeRange, DAY_FORMAT,
};
