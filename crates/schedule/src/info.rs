//! The validated Info section.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use chrono_tz::Tz;

use belltower_instant::resolve_zone;

use crate::document::{
    parse_day_tag, FIRST_DAY_TAG, FIRST_PERIOD, LAST_DAY_TAG, LAST_PERIOD, TIMEZONE,
};
use crate::error::StructuralError;

/// The validated "Info" section: period number range, schedule span, and
/// the timezone the schedule is authored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleInfo {
    first_period: i32,
    last_period: i32,
    first_day: NaiveDate,
    last_day: NaiveDate,
    timezone: Tz,
}

impl ScheduleInfo {
    /// Parses and validates the Info section.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError`] when a required key is absent, a period
    /// number or date does not parse, the span is empty or reversed, or the
    /// timezone id is unresolvable.
    pub fn parse(info: &BTreeMap<String, String>) -> Result<Self, StructuralError> {
        let field = |key: &str| {
            info.get(key)
                .map(String::as_str)
                .ok_or_else(|| StructuralError::MissingInfoKey {
                    key: key.to_string(),
                })
        };
        let number = |key: &str| -> Result<i32, StructuralError> {
            let value = field(key)?;
            value
                .parse()
                .map_err(|_| StructuralError::BadPeriodNumber {
                    key: key.to_string(),
                    value: value.to_string(),
                })
        };

        let first_period = number(FIRST_PERIOD)?;
        let last_period = number(LAST_PERIOD)?;
        let first_day = parse_day_tag(field(FIRST_DAY_TAG)?, FIRST_DAY_TAG)?;
        let last_day = parse_day_tag(field(LAST_DAY_TAG)?, LAST_DAY_TAG)?;
        if first_day >= last_day {
            return Err(StructuralError::DayTagOrder {
                first: first_day,
                last: last_day,
            });
        }

        let zone_id = field(TIMEZONE)?;
        let timezone = resolve_zone(zone_id).map_err(|_| StructuralError::UnknownZone {
            id: zone_id.to_string(),
        })?;

        Ok(Self {
            first_period,
            last_period,
            first_day,
            last_day,
            timezone,
        })
    }

    /// Returns the first academic period number.
    pub fn first_period(&self) -> i32 {
        self.first_period
    }

    /// Returns the last academic period number.
    pub fn last_period(&self) -> i32 {
        self.last_period
    }

    /// Returns the first day of the schedule span (inclusive).
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Returns the last day of the schedule span (inclusive).
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Returns the timezone the schedule is authored in.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}
