//! Locale data and the locale registry.
//!
//! A locale record carries three tables:
//!
//! - [`CalendarNames`] — month/weekday names and long-date patterns used to
//!   render dates.
//! - [`StaticRangeTable`] — the separator and "other year" template used when
//!   writing out an absolute span.
//! - [`RelativeRangeTable`] — phrase templates for relative phrasing, plus
//!   nested named variants (`R`, `RR`) that override base phrases.
//!
//! Records live in a [`LocaleRegistry`]. Registering data for a locale that
//! already exists deep-merges into it rather than replacing it. A process-wide
//! registry is available through [`with_registry`] and [`update_locale`];
//! register locales once at startup.

mod de;
mod en;
mod es;
mod nl;

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use parking_lot::RwLock;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Separator used when a locale defines none.
pub const DEFAULT_SEPARATOR: &str = "-";

/// "Other year" template used when a locale defines none.
pub const DEFAULT_OTHER_YEAR: &str = "%s, YYYY";

/// Locale consulted when a requested locale is unknown.
pub const FALLBACK_LOCALE: &str = "en";

// ── Calendar names ──────────────────────────────────────────────────────────

/// Month and weekday names plus long-date patterns for one locale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarNames {
    /// January first.
    pub months: Vec<String>,
    pub months_short: Vec<String>,
    /// Sunday first.
    pub weekdays: Vec<String>,
    pub weekdays_short: Vec<String>,
    /// Long-date patterns keyed `L`, `LL`, `LLL`, `LLLL`.
    pub long_date_formats: BTreeMap<String, String>,
}

static SHORTEN_TOKENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("MMMM|MM|DD|dddd").expect("valid shorten pattern"));

impl CalendarNames {
    /// Resolve a long-date token (`L`, `ll`, ...) to its pattern.
    ///
    /// Lowercase tokens that the locale does not define are derived from the
    /// uppercase pattern by shortening `MMMM`, `MM`, `DD` and `dddd` by one
    /// letter each. Returns `None` for tokens that are not long-date tokens.
    pub fn long_date_format(&self, token: &str) -> Option<String> {
        if let Some(pattern) = self.long_date_formats.get(token) {
            return Some(pattern.clone());
        }
        let upper = token.to_uppercase();
        if upper == token {
            return None;
        }
        let pattern = self.long_date_formats.get(&upper)?;
        Some(
            SHORTEN_TOKENS
                .replace_all(pattern, |caps: &regex::Captures<'_>| caps[0][1..].to_string())
                .into_owned(),
        )
    }
}

// ── Static range table ──────────────────────────────────────────────────────

/// Phrasing for absolute spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaticRangeTable {
    /// Placed between the start and end date.
    pub separator: Option<String>,
    /// Wraps the end pattern (`%s`) when the year must be spelled out.
    pub other_year: Option<String>,
}

impl StaticRangeTable {
    pub fn merge(&mut self, other: StaticRangeTable) {
        if other.separator.is_some() {
            self.separator = other.separator;
        }
        if other.other_year.is_some() {
            self.other_year = other.other_year;
        }
    }

    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }

    pub fn other_year(&self) -> &str {
        self.other_year.as_deref().unwrap_or(DEFAULT_OTHER_YEAR)
    }
}

// ── Relative range table ────────────────────────────────────────────────────

/// A value in the serialized relative table: either a phrase or a nested
/// variant table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelativeEntry {
    Phrase(String),
    Variant(BTreeMap<String, String>),
}

/// Phrase templates for relative phrasing.
///
/// Keys follow a small vocabulary: `past`/`future`/`current` (optionally
/// suffixed `_plural`, `_<measure>` or `_<count>`), `<measure>` and
/// `<measure>_plural` for unit phrases, and `<measure>_<signed count>` for
/// irregular forms such as `day_-1`. `%d` marks where the unit phrase goes;
/// `%s` marks where the absolute count goes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, RelativeEntry>",
    into = "BTreeMap<String, RelativeEntry>"
)]
pub struct RelativeRangeTable {
    phrases: BTreeMap<String, String>,
    variants: BTreeMap<String, BTreeMap<String, String>>,
}

impl From<BTreeMap<String, RelativeEntry>> for RelativeRangeTable {
    fn from(entries: BTreeMap<String, RelativeEntry>) -> Self {
        let mut table = RelativeRangeTable::default();
        for (key, entry) in entries {
            match entry {
                RelativeEntry::Phrase(phrase) => {
                    table.phrases.insert(key, phrase);
                }
                RelativeEntry::Variant(variant) => {
                    table.variants.insert(key, variant);
                }
            }
        }
        table
    }
}

impl From<RelativeRangeTable> for BTreeMap<String, RelativeEntry> {
    fn from(table: RelativeRangeTable) -> Self {
        let phrases = table
            .phrases
            .into_iter()
            .map(|(k, v)| (k, RelativeEntry::Phrase(v)));
        let variants = table
            .variants
            .into_iter()
            .map(|(k, v)| (k, RelativeEntry::Variant(v)));
        phrases.chain(variants).collect()
    }
}

impl RelativeRangeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from base phrases.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        RelativeRangeTable {
            phrases: to_map(pairs),
            variants: BTreeMap::new(),
        }
    }

    /// Add (or extend) the named variant table.
    pub fn with_variant(mut self, name: &str, pairs: &[(&str, &str)]) -> Self {
        self.variants
            .entry(name.to_string())
            .or_default()
            .extend(to_map(pairs));
        self
    }

    /// Deep-merge `other` into `self`; entries in `other` win.
    pub fn merge(&mut self, other: RelativeRangeTable) {
        self.phrases.extend(other.phrases);
        for (name, variant) in other.variants {
            self.variants.entry(name).or_default().extend(variant);
        }
    }

    /// The phrase lookup for `variant`: variant entries first, base second.
    pub fn phrases(&self, variant: &str) -> Phrases<'_> {
        Phrases {
            base: &self.phrases,
            variant: self.variants.get(variant),
        }
    }
}

fn to_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A base table overlaid with one variant table.
#[derive(Debug, Clone, Copy)]
pub struct Phrases<'a> {
    base: &'a BTreeMap<String, String>,
    variant: Option<&'a BTreeMap<String, String>>,
}

impl<'a> Phrases<'a> {
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.variant
            .and_then(|variant| variant.get(key))
            .or_else(|| self.base.get(key))
            .map(String::as_str)
    }
}

// ── Locale records ──────────────────────────────────────────────────────────

/// Everything registered for one locale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleData {
    pub calendar: CalendarNames,
    pub static_range: Option<StaticRangeTable>,
    pub relative_range: Option<RelativeRangeTable>,
}

/// A partial locale record, merged into the registry by [`LocaleRegistry::update`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleUpdate {
    /// Replaces the calendar names when present.
    pub calendar: Option<CalendarNames>,
    pub static_range: Option<StaticRangeTable>,
    pub relative_range: Option<RelativeRangeTable>,
}

impl LocaleData {
    fn merge(&mut self, update: LocaleUpdate) {
        if let Some(calendar) = update.calendar {
            self.calendar = calendar;
        }
        if let Some(table) = update.static_range {
            self.static_range.get_or_insert_with(Default::default).merge(table);
        }
        if let Some(table) = update.relative_range {
            self.relative_range
                .get_or_insert_with(Default::default)
                .merge(table);
        }
    }
}

/// Built-in data for `id`, if the crate ships it.
pub fn builtin(id: &str) -> Option<LocaleData> {
    match id {
        "en" => Some(en::data()),
        "nl" => Some(nl::data()),
        "de" => Some(de::data()),
        "es" => Some(es::data()),
        _ => None,
    }
}

fn names(underscored: &str) -> Vec<String> {
    underscored.split('_').map(str::to_string).collect()
}

fn long_date_formats(l: &str, ll: &str, lll: &str, llll: &str) -> BTreeMap<String, String> {
    to_map(&[("L", l), ("LL", ll), ("LLL", lll), ("LLLL", llll)])
}

// ── Registry ────────────────────────────────────────────────────────────────

/// Locale records keyed by locale id.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: HashMap<String, LocaleData>,
    fallback: LocaleData,
}

/// The tables formatting reads for one locale, with fallbacks applied.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedLocale<'a> {
    pub calendar: &'a CalendarNames,
    pub static_range: &'a StaticRangeTable,
    pub relative_range: &'a RelativeRangeTable,
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl LocaleRegistry {
    /// A registry holding only the English fallback.
    pub fn new() -> Self {
        LocaleRegistry {
            locales: HashMap::new(),
            fallback: en::data(),
        }
    }

    /// A registry preloaded with every built-in locale.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for id in ["en", "nl", "de", "es"] {
            if let Some(data) = builtin(id) {
                registry.locales.insert(id.to_string(), data);
            }
        }
        registry
    }

    /// Deep-merge `update` into the record for `id`, creating it if needed.
    ///
    /// A new locale starts from the English calendar names so it can render
    /// dates before it registers its own.
    pub fn update(&mut self, id: &str, update: LocaleUpdate) {
        let id = normalize_id(id);
        debug!(locale = %id, "updating locale data");
        let fallback_calendar = &self.fallback.calendar;
        self.locales
            .entry(id)
            .or_insert_with(|| LocaleData {
                calendar: fallback_calendar.clone(),
                ..LocaleData::default()
            })
            .merge(update);
    }

    /// Like [`update`](Self::update), reading the update from JSON.
    pub fn update_json(&mut self, id: &str, json: &str) -> Result<()> {
        let update: LocaleUpdate = serde_json::from_str(json)?;
        self.update(id, update);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&LocaleData> {
        self.locales.get(&normalize_id(id))
    }

    /// Resolve the tables for `id`.
    ///
    /// Lookup tries the full id, then its language part (`nl-BE` → `nl`),
    /// then English. A locale without a relative table uses the English one
    /// whole; a locale without static data uses the English defaults.
    pub fn resolve(&self, id: &str) -> ResolvedLocale<'_> {
        let id = normalize_id(id);
        let language = id.split('-').next().unwrap_or_default();
        let data = self
            .locales
            .get(&id)
            .or_else(|| self.locales.get(language))
            .unwrap_or(&self.fallback);

        ResolvedLocale {
            calendar: &data.calendar,
            static_range: data
                .static_range
                .as_ref()
                .or(self.fallback.static_range.as_ref())
                .unwrap_or(&EMPTY_STATIC_TABLE),
            relative_range: data
                .relative_range
                .as_ref()
                .or(self.fallback.relative_range.as_ref())
                .unwrap_or(&*EMPTY_RELATIVE_TABLE),
        }
    }
}

static EMPTY_STATIC_TABLE: StaticRangeTable = StaticRangeTable {
    separator: None,
    other_year: None,
};

static EMPTY_RELATIVE_TABLE: LazyLock<RelativeRangeTable> = LazyLock::new(RelativeRangeTable::new);

fn normalize_id(id: &str) -> String {
    id.trim().replace('_', "-").to_lowercase()
}

// ── Process-wide registry ───────────────────────────────────────────────────

static GLOBAL_REGISTRY: LazyLock<RwLock<LocaleRegistry>> =
    LazyLock::new(|| RwLock::new(LocaleRegistry::with_builtins()));

/// Provides read access to the process-wide registry.
pub fn with_registry<T>(f: impl FnOnce(&LocaleRegistry) -> T) -> T {
    f(&GLOBAL_REGISTRY.read())
}

/// Deep-merge `update` into the process-wide registry.
pub fn update_locale(id: &str, update: LocaleUpdate) {
    GLOBAL_REGISTRY.write().update(id, update);
}

/// Deep-merge JSON locale data into the process-wide registry.
///
/// The JSON object may carry `calendar`, `staticRange` and `relativeRange`.
pub fn update_locale_json(id: &str, json: &str) -> Result<()> {
    let update: LocaleUpdate = serde_json::from_str(json)?;
    update_locale(id, update);
    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_long_date_format_is_derived() {
        let en = builtin("en").unwrap();
        assert_eq!(en.calendar.long_date_format("LL").unwrap(), "MMMM D, YYYY");
        assert_eq!(en.calendar.long_date_format("ll").unwrap(), "MMM D, YYYY");
        assert_eq!(en.calendar.long_date_format("l").unwrap(), "M/D/YYYY");
        assert_eq!(en.calendar.long_date_format("YYYY"), None);
    }

    #[test]
    fn test_relative_table_deserializes_variants() {
        let table: RelativeRangeTable = serde_json::from_str(
            r#"{ "past": "vorige %d", "RR": { "past": "afgelopen %d" } }"#,
        )
        .unwrap();
        assert_eq!(table.phrases("R").get("past"), Some("vorige %d"));
        assert_eq!(table.phrases("RR").get("past"), Some("afgelopen %d"));
    }

    #[test]
    fn test_update_deep_merges_existing_locale() {
        let mut registry = LocaleRegistry::with_builtins();
        registry
            .update_json("nl", r#"{ "relativeRange": { "RR": { "day_2": "overmorgen" } } }"#)
            .unwrap();

        let nl = registry.resolve("nl");
        let rr = nl.relative_range.phrases("RR");
        assert_eq!(rr.get("day_2"), Some("overmorgen"));
        // existing entries survive the merge
        assert_eq!(rr.get("day_1"), Some("morgen"));
        assert_eq!(nl.static_range.separator(), "t/m");
    }

    #[test]
    fn test_repeated_static_updates_merge_per_key() {
        let mut registry = LocaleRegistry::new();
        registry.update(
            "fr",
            LocaleUpdate {
                static_range: Some(StaticRangeTable {
                    separator: Some("au".into()),
                    other_year: None,
                }),
                ..LocaleUpdate::default()
            },
        );
        registry.update(
            "fr",
            LocaleUpdate {
                static_range: Some(StaticRangeTable {
                    separator: None,
                    other_year: Some("%s YYYY".into()),
                }),
                ..LocaleUpdate::default()
            },
        );

        let fr = registry.resolve("fr");
        assert_eq!(fr.static_range.separator(), "au");
        assert_eq!(fr.static_range.other_year(), "%s YYYY");
    }

    #[test]
    fn test_locale_without_relative_table_falls_back_to_english() {
        let mut registry = LocaleRegistry::new();
        registry
            .update_json("fr", r#"{ "staticRange": { "separator": "au" } }"#)
            .unwrap();

        let fr = registry.resolve("fr");
        assert_eq!(fr.relative_range.phrases("R").get("past"), Some("previous %d"));
        assert_eq!(fr.calendar.months[0], "January");
    }

    #[test]
    fn test_resolve_region_falls_back_to_language() {
        let registry = LocaleRegistry::with_builtins();
        let resolved = registry.resolve("nl_BE");
        assert_eq!(resolved.static_range.separator(), "t/m");
        let unknown = registry.resolve("xx");
        assert_eq!(unknown.static_range.separator(), DEFAULT_SEPARATOR);
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let mut registry = LocaleRegistry::new();
        let err = registry.update_json("fr", "{ not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid locale data"));
    }
}
