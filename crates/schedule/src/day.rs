//! Day templates: an ordered, non-empty sequence of periods.

use std::collections::BTreeMap;

use crate::document::{END, NAME, START, TYPE};
use crate::error::StructuralError;
use crate::period::{Period, PeriodKind, TimeOfDay};

/// A day template from the "Days" section: an ordered, non-empty list of
/// periods identified by a day-type name.
///
/// Authors are expected to partition the full 24 hours without gaps or
/// overlaps; that convention is relied on by navigation but not enforced
/// here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    day_type: String,
    periods: Vec<Period>,
}

impl Day {
    /// Parses and validates one day template from its raw period records.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError`] when the day is empty, a record lacks a
    /// required key, or a field fails to parse.
    pub fn parse(
        day_type: &str,
        records: &[BTreeMap<String, String>],
    ) -> Result<Self, StructuralError> {
        if records.is_empty() {
            return Err(StructuralError::EmptyDay {
                day_type: day_type.to_string(),
            });
        }

        let mut periods = Vec::with_capacity(records.len());
        for record in records {
            let field = |key: &str| {
                record
                    .get(key)
                    .map(String::as_str)
                    .ok_or_else(|| StructuralError::MissingPeriodKey {
                        day_type: day_type.to_string(),
                        key: key.to_string(),
                    })
            };
            let kind = PeriodKind::parse(field(TYPE)?)?;
            let name = field(NAME)?.to_string();
            let start = TimeOfDay::parse(field(START)?)?;
            let end = TimeOfDay::parse(field(END)?)?;
            periods.push(Period::new(kind, name, start, end)?);
        }

        Ok(Self {
            day_type: day_type.to_string(),
            periods,
        })
    }

    /// Returns the day-type name.
    pub fn day_type(&self) -> &str {
        &self.day_type
    }

    /// Returns the periods in declared order. Never empty.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: &str, name: &str, start: &str, end: &str) -> BTreeMap<String, String> {
        [
            (TYPE.to_string(), kind.to_string()),
            (NAME.to_string(), name.to_string()),
            (START.to_string(), start.to_string()),
            (END.to_string(), end.to_string()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn parse_ordered_periods() {
        let day = Day::parse(
            "SchoolDay",
            &[
                record("Nothing", "Before class", "00:00", "08:00"),
                record("1", "Period 1", "08:00", "09:00"),
            ],
        )
        .unwrap();
        assert_eq!(day.day_type(), "SchoolDay");
        assert_eq!(day.periods().len(), 2);
        assert_eq!(day.periods()[1].name(), "Period 1");
        assert_eq!(day.periods()[1].kind(), PeriodKind::Numbered(1));
    }

    #[test]
    fn empty_day_rejected() {
        let err = Day::parse("Ghost", &[]).unwrap_err();
        assert_eq!(
            err,
            StructuralError::EmptyDay {
                day_type: "Ghost".to_string()
            }
        );
    }

    #[test]
    fn missing_record_key_rejected() {
        let mut incomplete = record("1", "Period 1", "08:00", "09:00");
        incomplete.remove(START);
        let err = Day::parse("SchoolDay", &[incomplete]).unwrap_err();
        assert_eq!(
            err,
            StructuralError::MissingPeriodKey {
                day_type: "SchoolDay".to_string(),
                key: "Start".to_string(),
            }
        );
    }

    #[test]
    fn bad_time_rejected() {
        let err = Day::parse("SchoolDay", &[record("1", "Period 1", "8am", "09:00")]).unwrap_err();
        assert!(matches!(err, StructuralError::BadTime { .. }));
    }
}
