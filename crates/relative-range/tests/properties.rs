use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use proptest::prelude::*;
use relative_range::calendar::{end_of, start_of};
use relative_range::{format_relative, LocaleRegistry, Measure, RangeType, RelativeRange, WeekStartDay};

fn measure() -> impl Strategy<Value = Measure> {
    prop::sample::select(Measure::ALL.to_vec())
}

fn range_type() -> impl Strategy<Value = RangeType> {
    prop::sample::select(vec![RangeType::Previous, RangeType::Current, RangeType::Next])
}

fn date() -> impl Strategy<Value = NaiveDateTime> {
    (1900i32..2200, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60).prop_map(|(y, m, d, h, min)| {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    })
}

fn build(
    date: NaiveDateTime,
    measure: Measure,
    units: i32,
    range_type: RangeType,
    whole: Option<bool>,
) -> RelativeRange {
    let mut range = RelativeRange::new();
    range
        .set_date(Some(date))
        .set_measure(measure)
        .set_units(units)
        .set_type(range_type)
        .set_whole(whole);
    range
}

proptest! {
    #[test]
    fn prop_length_matches_bounds(
        date in date(),
        measure in measure(),
        units in 1i32..24,
        range_type in range_type(),
        whole in prop::option::of(any::<bool>()),
    ) {
        let range = build(date, measure, units, range_type, whole);
        prop_assert!(range.start() <= range.end());
        prop_assert_eq!(range.length(), 1 + (range.end() - range.start()).num_days());
        prop_assert!(range.length() >= 1);
    }

    #[test]
    fn prop_bounds_are_whole_days(
        date in date(),
        measure in measure(),
        units in 1i32..24,
        range_type in range_type(),
    ) {
        let range = build(date, measure, units, range_type, None);
        prop_assert_eq!(range.start().time(), NaiveTime::MIN);
        prop_assert_eq!(range.end().time().to_string(), "23:59:59.999");
    }

    #[test]
    fn prop_whole_ranges_fall_on_period_boundaries(
        date in date(),
        measure in measure(),
        units in 1i32..12,
        range_type in prop::sample::select(vec![RangeType::Previous, RangeType::Next]),
    ) {
        let range = build(date, measure, units, range_type, Some(true));
        let ws = WeekStartDay::Sunday;
        prop_assert_eq!(start_of(range.start(), measure, ws), Some(range.start()));
        prop_assert_eq!(end_of(range.end(), measure, ws), Some(range.end()));
    }

    #[test]
    fn prop_current_forces_one_unit(
        date in date(),
        measure in measure(),
        units in -50i32..50,
    ) {
        let range = build(date, measure, units, RangeType::Current, None);
        prop_assert_eq!(range.units(), 1);
        prop_assert_eq!(range.count(), 0);
    }

    #[test]
    fn prop_day_measure_is_always_whole(
        date in date(),
        whole in prop::option::of(any::<bool>()),
        range_type in range_type(),
    ) {
        let range = build(date, Measure::Day, 1, range_type, whole);
        prop_assert!(range.is_whole());
    }

    #[test]
    fn prop_overrides_never_cross_the_other_bound(
        date in date(),
        measure in measure(),
        override_date in date(),
        lock_end in any::<bool>(),
    ) {
        let mut range = build(date, measure, 1, RangeType::Previous, None);
        let natural = range.clone();
        if lock_end {
            range.set_end(Some(override_date));
            prop_assert_eq!(range.end(), override_date.min(natural.end()));
        } else {
            range.set_start(Some(override_date));
            prop_assert_eq!(range.start(), override_date.min(natural.end()));
        }
        prop_assert!(range.start() <= range.end());
    }

    #[test]
    fn prop_irregular_days_win(count in -1i32..=1, other in ".*") {
        let mut registry = LocaleRegistry::with_builtins();
        let json = serde_json::json!({
            "relativeRange": { "RR": { "past": other.clone(), "future": other.clone(), "current": other } }
        });
        registry.update_json("en", &json.to_string()).unwrap();
        let table = registry.resolve("en").relative_range;
        let expected = match count {
            -1 => "yesterday",
            0 => "today",
            _ => "tomorrow",
        };
        prop_assert_eq!(format_relative(count, Measure::Day, "RR", table), expected);
    }

    #[test]
    fn prop_next_ends_after_reference(
        date in date(),
        measure in measure(),
        units in 1i32..6,
    ) {
        let range = build(date, measure, units, RangeType::Next, None);
        prop_assert!(range.end().date() > date.date());
        prop_assert!(range.end().year() >= date.year());
    }
}
