//! German.

use super::{long_date_formats, names, CalendarNames, LocaleData, RelativeRangeTable, StaticRangeTable};

pub(super) fn data() -> LocaleData {
    LocaleData {
        calendar: CalendarNames {
            months: names(
                "Januar_Februar_März_April_Mai_Juni_Juli_August_September_Oktober_November_Dezember",
            ),
            months_short: names("Jan._Feb._März_Apr._Mai_Juni_Juli_Aug._Sep._Okt._Nov._Dez."),
            weekdays: names("Sonntag_Montag_Dienstag_Mittwoch_Donnerstag_Freitag_Samstag"),
            weekdays_short: names("So._Mo._Di._Mi._Do._Fr._Sa."),
            long_date_formats: long_date_formats(
                "DD.MM.YYYY",
                "D. MMMM YYYY",
                "D. MMMM YYYY HH:mm",
                "dddd, D. MMMM YYYY HH:mm",
            ),
        },
        static_range: Some(StaticRangeTable {
            separator: Some("-".into()),
            other_year: Some("%s YYYY".into()),
        }),
        relative_range: Some(relative_range()),
    }
}

fn relative_range() -> RelativeRangeTable {
    RelativeRangeTable::from_pairs(&[
        ("past", "vorheriges %d"),
        ("past_plural", "vorherige %d"),
        ("future", "nächstes %d"),
        ("future_plural", "nächsten %d"),
        ("current", "%d bis jetzt"),
        ("day", "Tag"),
        ("day_plural", "%s Tage"),
        ("week", "Woche"),
        ("week_plural", "%s Wochen"),
        ("month", "Monat"),
        ("month_plural", "%s Monate"),
        ("quarter", "Quartal"),
        ("quarter_plural", "%s Quartalen"),
        ("year", "Jahr"),
        ("year_plural", "%s Jahren"),
    ])
    .with_variant("R", &[("day_0", "dieser Tag")])
    .with_variant(
        "RR",
        &[
            ("past", "letztes %d"),
            ("past_plural", "letzte %d"),
            ("future", "kommendes %d"),
            ("future_plural", "kommende %d"),
            ("day_0", "heute"),
            ("day_1", "morgen"),
            ("day_-1", "gestern"),
        ],
    )
}
