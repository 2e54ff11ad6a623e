//! Dutch.

use super::{long_date_formats, names, CalendarNames, LocaleData, RelativeRangeTable, StaticRangeTable};

pub(super) fn data() -> LocaleData {
    LocaleData {
        calendar: CalendarNames {
            months: names(
                "januari_februari_maart_april_mei_juni_juli_augustus_september_oktober_november_december",
            ),
            months_short: names("jan._feb._mrt._apr._mei_jun._jul._aug._sep._okt._nov._dec."),
            weekdays: names("zondag_maandag_dinsdag_woensdag_donderdag_vrijdag_zaterdag"),
            weekdays_short: names("zo._ma._di._wo._do._vr._za."),
            long_date_formats: long_date_formats(
                "DD-MM-YYYY",
                "D MMMM YYYY",
                "D MMMM YYYY HH:mm",
                "dddd D MMMM YYYY HH:mm",
            ),
        },
        static_range: Some(StaticRangeTable {
            separator: Some("t/m".into()),
            other_year: Some("%s YYYY".into()),
        }),
        relative_range: Some(relative_range()),
    }
}

fn relative_range() -> RelativeRangeTable {
    RelativeRangeTable::from_pairs(&[
        ("past", "vorige %d"),
        ("future", "volgende %d"),
        ("current", "%d tot nu"),
        ("day", "dag"),
        ("day_plural", "%s dagen"),
        ("day_0", "deze dag"),
        ("week", "week"),
        ("week_plural", "%s weken"),
        ("month", "maand"),
        ("month_plural", "%s maanden"),
        ("quarter", "kwartaal"),
        ("quarter_plural", "%s kwartalen"),
        ("year", "jaar"),
        ("year_plural", "%s jaar"),
    ])
    .with_variant(
        "R",
        &[
            ("quarter_1", "volgend kwartaal"),
            ("quarter_-1", "vorig kwartaal"),
            ("year_1", "volgend jaar"),
            ("year_-1", "vorig jaar"),
        ],
    )
    .with_variant(
        "RR",
        &[
            ("past", "afgelopen %d"),
            ("future", "komende %d"),
            ("current", "%d tot nu"),
            ("day_0", "vandaag"),
            ("day_1", "morgen"),
            ("day_-1", "gisteren"),
            ("quarter_1", "komend kwartaal"),
            ("year_1", "komend jaar"),
        ],
    )
}
