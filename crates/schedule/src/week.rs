//! Week templates and week exceptions.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};

use belltower_instant::sunday_on_or_before;

use crate::day::Day;
use crate::document::{parse_day_tag, TYPE, WEEK_TAG};
use crate::error::StructuralError;

/// Number of day entries every week template must declare.
pub const DAYS_PER_WEEK: usize = 7;

/// A week template from the "Weeks" section: exactly 7 day-type references,
/// index 0 = Sunday through index 6 = Saturday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    week_type: String,
    day_types: Vec<String>,
}

impl Week {
    /// Parses and validates one week template against the defined days.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError::WeekLength`] for a list of the wrong size
    /// and [`StructuralError::UndefinedDayType`] for a dangling reference.
    pub fn parse(
        week_type: &str,
        day_types: &[String],
        days: &BTreeMap<String, Day>,
    ) -> Result<Self, StructuralError> {
        if day_types.len() != DAYS_PER_WEEK {
            return Err(StructuralError::WeekLength {
                week_type: week_type.to_string(),
                count: day_types.len(),
            });
        }
        for day_type in day_types {
            if !days.contains_key(day_type) {
                return Err(StructuralError::UndefinedDayType {
                    week_type: week_type.to_string(),
                    day_type: day_type.clone(),
                });
            }
        }
        Ok(Self {
            week_type: week_type.to_string(),
            day_types: day_types.to_vec(),
        })
    }

    /// Returns the week-type name.
    pub fn week_type(&self) -> &str {
        &self.week_type
    }

    /// Returns the day-type name in effect on `weekday`.
    pub fn day_type_on(&self, weekday: Weekday) -> &str {
        &self.day_types[weekday.num_days_from_sunday() as usize]
    }

    /// Returns all 7 day-type names, Sunday first.
    pub fn day_types(&self) -> &[String] {
        &self.day_types
    }
}

/// A week exception: one calendar week resolved to a week type other than
/// `DEFAULT`.
///
/// The document may tag the exception with any date inside the week; the
/// tag is normalized to that week's Sunday here, so later lookups compare
/// exact tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekException {
    week_tag: NaiveDate,
    week_type: String,
}

impl WeekException {
    /// Parses and validates one exception record against the defined weeks.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError`] when a key is missing, the tag does not
    /// parse, or the named week type is undefined.
    pub fn parse(
        record: &BTreeMap<String, String>,
        weeks: &BTreeMap<String, Week>,
    ) -> Result<Self, StructuralError> {
        let field = |key: &str| {
            record
                .get(key)
                .map(String::as_str)
                .ok_or_else(|| StructuralError::MissingExceptionKey {
                    key: key.to_string(),
                })
        };
        let tag_date = parse_day_tag(field(WEEK_TAG)?, WEEK_TAG)?;
        let week_tag = sunday_on_or_before(tag_date);
        let week_type = field(TYPE)?.to_string();
        if !weeks.contains_key(&week_type) {
            return Err(StructuralError::UndefinedWeekType {
                week_tag,
                week_type,
            });
        }
        Ok(Self {
            week_tag,
            week_type,
        })
    }

    /// Returns the normalized week tag (always a Sunday).
    pub fn week_tag(&self) -> NaiveDate {
        self.week_tag
    }

    /// Returns the week type in effect for the tagged week.
    pub fn week_type(&self) -> &str {
        &self.week_type
    }
}
