//! Raw schedule document shape and key constants.
//!
//! The document is deserialized into loose string maps mirroring the JSON
//! exactly; every structural guarantee is established by the one validating
//! transform in [`crate::definition`], never by the deserializer.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::StructuralError;

/// Info section: declared first period number.
pub const FIRST_PERIOD: &str = "FirstPeriod";
/// Info section: declared last period number.
pub const LAST_PERIOD: &str = "LastPeriod";
/// Info section: first day of the schedule span.
pub const FIRST_DAY_TAG: &str = "FirstDayTag";
/// Info section: last day of the schedule span.
pub const LAST_DAY_TAG: &str = "LastDayTag";
/// Info section: timezone id the schedule is authored in.
pub const TIMEZONE: &str = "Timezone";

/// Period record and exception record: the type discriminant.
pub const TYPE: &str = "Type";
/// Period record: display name.
pub const NAME: &str = "Name";
/// Period record: start time of day.
pub const START: &str = "Start";
/// Period record: end time of day.
pub const END: &str = "End";
/// Period type sentinel for non-counted filler time.
pub const NOTHING: &str = "Nothing";
/// Period type sentinel for counted special events.
pub const SPECIAL: &str = "Special";

/// The week type every calendar week resolves to unless overridden.
pub const DEFAULT_WEEK: &str = "DEFAULT";

/// Exception record: the week (or any day within it) being overridden.
pub const WEEK_TAG: &str = "WeekTag";

/// An already-deserialized schedule document.
///
/// Sections default to empty so that a missing section surfaces as the
/// corresponding validation error (missing key, missing DEFAULT week)
/// rather than a deserializer error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleDocument {
    /// The "Info" section: flat string key/value pairs.
    #[serde(rename = "Info", default)]
    pub info: BTreeMap<String, String>,

    /// The "Days" section: day type to ordered period records.
    #[serde(rename = "Days", default)]
    pub days: BTreeMap<String, Vec<BTreeMap<String, String>>>,

    /// The "Weeks" section: week type to ordered day-type names.
    #[serde(rename = "Weeks", default)]
    pub weeks: BTreeMap<String, Vec<String>>,

    /// The "Exceptions" section: week-tag/type override records.
    #[serde(rename = "Exceptions", default)]
    pub exceptions: Vec<BTreeMap<String, String>>,
}

/// Parses a `yyyy-mm-dd` tag, reporting the document key on failure.
pub(crate) fn parse_day_tag(value: &str, key: &str) -> Result<NaiveDate, StructuralError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| StructuralError::BadDate {
        key: key.to_string(),
        value: value.to_string(),
    })
}
