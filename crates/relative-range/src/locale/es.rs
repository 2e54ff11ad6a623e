//! Spanish.

use super::{long_date_formats, names, CalendarNames, LocaleData, RelativeRangeTable, StaticRangeTable};

pub(super) fn data() -> LocaleData {
    LocaleData {
        calendar: CalendarNames {
            months: names(
                "enero_febrero_marzo_abril_mayo_junio_julio_agosto_septiembre_octubre_noviembre_diciembre",
            ),
            months_short: names("ene._feb._mar._abr._may._jun._jul._ago._sep._oct._nov._dic."),
            weekdays: names("domingo_lunes_martes_miércoles_jueves_viernes_sábado"),
            weekdays_short: names("dom._lun._mar._mié._jue._vie._sáb."),
            long_date_formats: long_date_formats(
                "DD/MM/YYYY",
                "D [de] MMMM [de] YYYY",
                "D [de] MMMM [de] YYYY H:mm",
                "dddd, D [de] MMMM [de] YYYY H:mm",
            ),
        },
        static_range: Some(StaticRangeTable {
            separator: Some("al".into()),
            other_year: Some("%s [de] YYYY".into()),
        }),
        relative_range: Some(relative_range()),
    }
}

fn relative_range() -> RelativeRangeTable {
    RelativeRangeTable::from_pairs(&[
        ("past", "%d previos"),
        ("past_week", "%d previas"),
        ("future", "próximos %d"),
        ("future_week", "próximas %d"),
        ("current", "%d hasta la fecha"),
        ("day", "día"),
        ("day_plural", "%s dias"),
        ("week", "semana"),
        ("week_plural", "%s semanas"),
        ("month", "mes"),
        ("month_plural", "%s meses"),
        ("quarter", "trimestre"),
        ("quarter_plural", "%s trimestres"),
        ("quarter_1", "el próximo trimestre"),
        ("quarter_-1", "el trimestre anterior"),
        ("year", "año"),
        ("year_plural", "%s años"),
        ("year_1", "el próximo año"),
        ("year_-1", "año anterior"),
    ])
    .with_variant(
        "RR",
        &[("day_0", "hoy"), ("day_1", "mañana"), ("day_-1", "ayer")],
    )
}
