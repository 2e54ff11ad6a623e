//! English (built-in default).

use super::{long_date_formats, names, CalendarNames, LocaleData, RelativeRangeTable, StaticRangeTable};

pub(super) fn data() -> LocaleData {
    LocaleData {
        calendar: CalendarNames {
            months: names(
                "January_February_March_April_May_June_July_August_September_October_November_December",
            ),
            months_short: names("Jan_Feb_Mar_Apr_May_Jun_Jul_Aug_Sep_Oct_Nov_Dec"),
            weekdays: names("Sunday_Monday_Tuesday_Wednesday_Thursday_Friday_Saturday"),
            weekdays_short: names("Sun_Mon_Tue_Wed_Thu_Fri_Sat"),
            long_date_formats: long_date_formats(
                "MM/DD/YYYY",
                "MMMM D, YYYY",
                "MMMM D, YYYY h:mm A",
                "dddd, MMMM D, YYYY h:mm A",
            ),
        },
        static_range: Some(StaticRangeTable {
            separator: Some("-".into()),
            other_year: Some("%s, YYYY".into()),
        }),
        relative_range: Some(relative_range()),
    }
}

fn relative_range() -> RelativeRangeTable {
    RelativeRangeTable::from_pairs(&[
        ("past", "previous %d"),
        ("future", "next %d"),
        ("current", "this %d"),
        ("day", "day"),
        ("day_plural", "%s days"),
        ("week", "week"),
        ("week_plural", "%s weeks"),
        ("month", "month"),
        ("month_plural", "%s months"),
        ("quarter", "quarter"),
        ("quarter_plural", "%s quarters"),
        ("year", "year"),
        ("year_plural", "%s years"),
    ])
    .with_variant(
        "RR",
        &[
            ("past", "last %d"),
            ("future", "coming %d"),
            ("current", "%d to date"),
            ("day_0", "today"),
            ("day_1", "tomorrow"),
            ("day_-1", "yesterday"),
        ],
    )
}
