//! Shared fixture: a 1970 school year with a holiday exception week.
//!
//! Layout: school days Monday through Friday with three numbered periods,
//! a counted Lunch, and non-counted filler; weekends and holidays are one
//! all-day non-counted block. The week of 1970-01-04 is overridden to
//! AllHoliday via an exception tagged on the Monday (so normalization is
//! exercised too).

use belltower_engine::Year;
use belltower_instant::TimeInstant;
use belltower_schedule::{ScheduleDefinition, ScheduleDocument};
use serde_json::json;

pub fn year() -> Year {
    let doc: ScheduleDocument = serde_json::from_value(json!({
        "Info": {
            "FirstPeriod": "1",
            "LastPeriod": "3",
            "FirstDayTag": "1970-01-01",
            "LastDayTag": "1970-12-31",
            "Timezone": "Z"
        },
        "Days": {
            "SchoolDay": [
                {"Type": "Nothing", "Name": "Before class", "Start": "00:00", "End": "08:00"},
                {"Type": "1", "Name": "Period 1", "Start": "08:00", "End": "09:00"},
                {"Type": "Nothing", "Name": "Passing", "Start": "09:00", "End": "09:10"},
                {"Type": "2", "Name": "Period 2", "Start": "09:10", "End": "10:10"},
                {"Type": "Special", "Name": "Lunch", "Start": "10:10", "End": "11:00"},
                {"Type": "3", "Name": "Period 3", "Start": "11:00", "End": "12:00"},
                {"Type": "Nothing", "Name": "After class", "Start": "12:00", "End": "23:59"}
            ],
            "WeekendDay": [
                {"Type": "Nothing", "Name": "Weekend", "Start": "00:00", "End": "23:59"}
            ],
            "HolidayDay": [
                {"Type": "Nothing", "Name": "Holiday", "Start": "00:00", "End": "23:59"}
            ]
        },
        "Weeks": {
            "DEFAULT": ["WeekendDay", "SchoolDay", "SchoolDay", "SchoolDay",
                        "SchoolDay", "SchoolDay", "WeekendDay"],
            "AllHoliday": ["HolidayDay", "HolidayDay", "HolidayDay", "HolidayDay",
                           "HolidayDay", "HolidayDay", "HolidayDay"]
        },
        "Exceptions": [
            {"WeekTag": "1970-01-05", "Type": "AllHoliday"}
        ]
    }))
    .expect("fixture deserializes");
    let definition = ScheduleDefinition::from_document(&doc).expect("fixture validates");
    Year::new(definition)
}

pub fn at(text: &str) -> TimeInstant {
    TimeInstant::of(text, "Z").expect("fixture instant parses")
}
