//! Error types for the belltower-schedule crate.

use chrono::NaiveDate;

use crate::period::TimeOfDay;

/// Error type for schedule document validation.
///
/// Every variant is a construction-time defect in the declarative schedule:
/// a missing key, a dangling reference, or a value that does not parse.
/// Validation is eager and never silently substitutes a default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    /// Returned when the Info section lacks a required key.
    #[error("Info is missing required key {key:?}")]
    MissingInfoKey {
        /// The absent key.
        key: String,
    },

    /// Returned when a first/last period number is not an integer.
    #[error("Info key {key:?} has non-numeric period number {value:?}")]
    BadPeriodNumber {
        /// The Info key holding the value.
        key: String,
        /// The non-numeric value.
        value: String,
    },

    /// Returned when a date tag does not parse as `yyyy-mm-dd`.
    #[error("{key:?} has unparsable date {value:?} (expected yyyy-mm-dd)")]
    BadDate {
        /// The key holding the value.
        key: String,
        /// The unparsable value.
        value: String,
    },

    /// Returned when the schedule span is empty or reversed.
    #[error("FirstDayTag {first} is not strictly before LastDayTag {last}")]
    DayTagOrder {
        /// The declared first day.
        first: NaiveDate,
        /// The declared last day.
        last: NaiveDate,
    },

    /// Returned when the Info timezone id names no known zone.
    #[error("unknown timezone id: {id:?}")]
    UnknownZone {
        /// The unrecognized timezone id.
        id: String,
    },

    /// Returned when the Weeks section has no `DEFAULT` entry.
    #[error("Weeks does not contain the DEFAULT week")]
    MissingDefaultWeek,

    /// Returned when a week lists a number of days other than 7.
    #[error("week type {week_type:?} has {count} days (expected 7)")]
    WeekLength {
        /// The offending week type.
        week_type: String,
        /// The number of day entries found.
        count: usize,
    },

    /// Returned when a week references a day type with no definition.
    #[error("week type {week_type:?} references undefined day type {day_type:?}")]
    UndefinedDayType {
        /// The referencing week type.
        week_type: String,
        /// The dangling day type.
        day_type: String,
    },

    /// Returned when a day type defines zero periods.
    #[error("day type {day_type:?} has no periods")]
    EmptyDay {
        /// The empty day type.
        day_type: String,
    },

    /// Returned when a period record lacks a required key.
    #[error("period in day type {day_type:?} is missing key {key:?}")]
    MissingPeriodKey {
        /// The day type holding the record.
        day_type: String,
        /// The absent key.
        key: String,
    },

    /// Returned when a period start/end does not parse as `HH:mm`.
    #[error("unparsable time of day {value:?} (expected HH:mm)")]
    BadTime {
        /// The unparsable value.
        value: String,
    },

    /// Returned when a period type is not a recognized kind.
    #[error("invalid period type {value:?} (expected Nothing, Special, or a period number)")]
    BadPeriodKind {
        /// The unrecognized value.
        value: String,
    },

    /// Returned when a period does not start strictly before it ends.
    #[error("period {name:?} does not start before it ends ({start}..{end})")]
    PeriodOrder {
        /// The period name.
        name: String,
        /// The declared start time.
        start: TimeOfDay,
        /// The declared end time.
        end: TimeOfDay,
    },

    /// Returned when a week exception record lacks a required key.
    #[error("week exception is missing key {key:?}")]
    MissingExceptionKey {
        /// The absent key.
        key: String,
    },

    /// Returned when a week exception names an undefined week type.
    #[error("week exception {week_tag} has undefined week type {week_type:?}")]
    UndefinedWeekType {
        /// The normalized week tag of the exception.
        week_tag: NaiveDate,
        /// The dangling week type.
        week_type: String,
    },
}
