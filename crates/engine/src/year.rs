//! The immutable year: templates plus the expanded calendar.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use chrono_tz::Tz;
use tracing::debug;

use belltower_instant::sunday_on_or_before;
use belltower_schedule::{Day, ScheduleDefinition, ScheduleInfo, Week};

use crate::expand::expand_calendar;

/// A full school year: the validated templates plus the derived
/// week-tag-keyed calendar.
///
/// Construction runs the calendar expansion exactly once; afterwards the
/// value is deeply immutable and freely shareable across concurrent readers.
/// A changed schedule means constructing a new `Year` and swapping the
/// reference callers consult, never mutating a live instance.
#[derive(Debug, Clone)]
pub struct Year {
    info: ScheduleInfo,
    days: BTreeMap<String, Day>,
    weeks: BTreeMap<String, Week>,
    calendar: BTreeMap<NaiveDate, String>,
    span_start: NaiveDate,
    span_end: NaiveDate,
}

impl Year {
    /// Builds a year from a validated definition.
    ///
    /// Infallible: validation already established that every reference in
    /// the definition resolves, which is exactly the invariant the derived
    /// calendar relies on.
    pub fn new(definition: ScheduleDefinition) -> Self {
        let (info, days, weeks, exceptions) = definition.into_parts();
        let calendar = expand_calendar(&info, &exceptions);
        let span_start = sunday_on_or_before(info.first_day());
        let span_end = sunday_on_or_before(info.last_day()) + Days::new(6);
        debug!(
            span_start = %span_start,
            span_end = %span_end,
            weeks = calendar.len(),
            zone = %info.timezone(),
            "constructed year"
        );
        Self {
            info,
            days,
            weeks,
            calendar,
            span_start,
            span_end,
        }
    }

    /// Returns the timezone the schedule is authored in.
    pub fn timezone(&self) -> Tz {
        self.info.timezone()
    }

    /// Returns the first academic period number.
    pub fn first_period(&self) -> i32 {
        self.info.first_period()
    }

    /// Returns the last academic period number.
    pub fn last_period(&self) -> i32 {
        self.info.last_period()
    }

    /// Returns the declared first day of the span (inclusive).
    pub fn first_day(&self) -> NaiveDate {
        self.info.first_day()
    }

    /// Returns the declared last day of the span (inclusive).
    pub fn last_day(&self) -> NaiveDate {
        self.info.last_day()
    }

    /// Returns the number of calendar weeks the expansion covers.
    pub fn week_count(&self) -> usize {
        self.calendar.len()
    }

    /// Returns the number of day templates.
    pub fn day_template_count(&self) -> usize {
        self.days.len()
    }

    /// Returns the number of week templates.
    pub fn week_template_count(&self) -> usize {
        self.weeks.len()
    }

    /// First day of the expanded calendar (the Sunday on or before the
    /// declared first day).
    pub(crate) fn span_start(&self) -> NaiveDate {
        self.span_start
    }

    /// Last day of the expanded calendar (the Saturday on or after the
    /// declared last day).
    pub(crate) fn span_end(&self) -> NaiveDate {
        self.span_end
    }

    /// Resolves a week tag to the week template in effect, or `None` when
    /// the tag falls outside the expanded calendar.
    pub(crate) fn effective_week(&self, week_tag: NaiveDate) -> Option<&Week> {
        let week_type = self.calendar.get(&week_tag)?;
        // Safety: expansion only writes week types that validation proved
        // defined.
        Some(&self.weeks[week_type.as_str()])
    }

    /// Resolves a day-type name to its template.
    pub(crate) fn day_template(&self, day_type: &str) -> &Day {
        // Safety: validation proved every day type a week references
        // defined.
        &self.days[day_type]
    }
}
