//! Calendar expansion: cyclical week templates plus point exceptions.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use tracing::debug;

use belltower_instant::sunday_on_or_before;
use belltower_schedule::{ScheduleInfo, WeekException, DEFAULT_WEEK};

/// Expands the declared span into a week-tag-keyed calendar.
///
/// Walks from the Sunday on or before the first day through the Saturday on
/// or after the last day (closed interval), stepping 7 days at a time. Each
/// week resolves to `DEFAULT` unless an exception names its exact tag;
/// exception tags are already normalized to Sundays by validation, as is
/// the existence of every named week type, so expansion cannot fail.
///
/// Runs exactly once per [`crate::Year`] construction; queries consult only
/// the returned map.
pub(crate) fn expand_calendar(
    info: &ScheduleInfo,
    exceptions: &[WeekException],
) -> BTreeMap<NaiveDate, String> {
    let first_sunday = sunday_on_or_before(info.first_day());
    let last_saturday = sunday_on_or_before(info.last_day()) + Days::new(6);

    let mut calendar = BTreeMap::new();
    let mut tag = first_sunday;
    while tag <= last_saturday {
        let week_type = exceptions
            .iter()
            .find(|exception| exception.week_tag() == tag)
            .map(|exception| exception.week_type().to_string())
            .unwrap_or_else(|| DEFAULT_WEEK.to_string());
        calendar.insert(tag, week_type);
        tag = tag + Days::new(7);
    }

    debug!(
        weeks = calendar.len(),
        from = %first_sunday,
        to = %last_saturday,
        "expanded calendar"
    );
    calendar
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap as Map;

    use belltower_schedule::{ScheduleDefinition, ScheduleDocument};
    use chrono::Datelike;

    fn fixture(exceptions: serde_json::Value) -> (ScheduleInfo, Vec<WeekException>) {
        let doc: ScheduleDocument = serde_json::from_value(serde_json::json!({
            "Info": {
                "FirstPeriod": "1", "LastPeriod": "1",
                "FirstDayTag": "1970-01-01", "LastDayTag": "1970-12-31",
                "Timezone": "Z"
            },
            "Days": {
                "FreeDay": [
                    {"Type": "Nothing", "Name": "Free", "Start": "00:00", "End": "23:59"}
                ]
            },
            "Weeks": {
                "DEFAULT": ["FreeDay", "FreeDay", "FreeDay", "FreeDay",
                            "FreeDay", "FreeDay", "FreeDay"],
                "Holiday": ["FreeDay", "FreeDay", "FreeDay", "FreeDay",
                            "FreeDay", "FreeDay", "FreeDay"]
            },
            "Exceptions": exceptions
        }))
        .unwrap();
        let definition = ScheduleDefinition::from_document(&doc).unwrap();
        let (info, _, _, exceptions) = definition.into_parts();
        (info, exceptions)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn covers_every_week_touching_the_span() {
        let (info, exceptions) = fixture(serde_json::json!([]));
        let calendar = expand_calendar(&info, &exceptions);

        // 1970-01-01 is a Thursday: the first week tag is the previous
        // Sunday, 1969-12-28. 1970-12-31 is also a Thursday: the last week
        // tag is 1970-12-27.
        let first = *calendar.keys().next().unwrap();
        let last = *calendar.keys().next_back().unwrap();
        assert_eq!(first, date(1969, 12, 28));
        assert_eq!(last, date(1970, 12, 27));
        assert_eq!(calendar.len(), 53);
    }

    #[test]
    fn week_tags_are_sundays_seven_days_apart() {
        let (info, exceptions) = fixture(serde_json::json!([]));
        let calendar = expand_calendar(&info, &exceptions);
        let tags: Vec<NaiveDate> = calendar.keys().copied().collect();
        for pair in tags.windows(2) {
            assert_eq!(pair[1] - pair[0], chrono::TimeDelta::days(7));
        }
        for tag in tags {
            assert_eq!(tag.weekday(), chrono::Weekday::Sun);
        }
    }

    #[test]
    fn defaults_unless_excepted() {
        let (info, exceptions) = fixture(serde_json::json!([
            {"WeekTag": "1970-01-05", "Type": "Holiday"}
        ]));
        let calendar = expand_calendar(&info, &exceptions);

        // The Monday tag normalizes to Sunday 1970-01-04.
        assert_eq!(calendar[&date(1970, 1, 4)], "Holiday");
        assert_eq!(calendar[&date(1969, 12, 28)], "DEFAULT");
        assert_eq!(calendar[&date(1970, 1, 11)], "DEFAULT");
        let holidays = calendar.values().filter(|w| *w == "Holiday").count();
        assert_eq!(holidays, 1);
    }

    #[test]
    fn span_starting_on_sunday_does_not_pad() {
        let mut doc: Map<String, String> = Map::new();
        doc.insert("FirstPeriod".into(), "1".into());
        doc.insert("LastPeriod".into(), "1".into());
        // 1970-01-04 is a Sunday, 1970-01-17 a Saturday.
        doc.insert("FirstDayTag".into(), "1970-01-04".into());
        doc.insert("LastDayTag".into(), "1970-01-17".into());
        doc.insert("Timezone".into(), "Z".into());
        let info = ScheduleInfo::parse(&doc).unwrap();

        let calendar = expand_calendar(&info, &[]);
        assert_eq!(calendar.len(), 2);
        assert_eq!(*calendar.keys().next().unwrap(), date(1970, 1, 4));
        assert_eq!(*calendar.keys().next_back().unwrap(), date(1970, 1, 11));
    }
}
