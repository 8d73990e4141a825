//! The one validating transform from raw document to typed model.

use std::collections::BTreeMap;

use tracing::debug;

use crate::day::Day;
use crate::document::{ScheduleDocument, DEFAULT_WEEK};
use crate::error::StructuralError;
use crate::info::ScheduleInfo;
use crate::week::{Week, WeekException};

/// A fully validated schedule definition.
///
/// Produced by [`ScheduleDefinition::from_document`], after which every
/// reference is known to resolve: weeks have exactly 7 days, every day type
/// a week names is defined, every exception names a defined week type, and
/// all times, dates, and numbers are parsed. Downstream components work
/// against these checked shapes and never re-validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDefinition {
    info: ScheduleInfo,
    days: BTreeMap<String, Day>,
    weeks: BTreeMap<String, Week>,
    exceptions: Vec<WeekException>,
}

impl ScheduleDefinition {
    /// Validates an already-deserialized document into the typed model.
    ///
    /// Validation is eager: the first structural defect aborts with a
    /// [`StructuralError`] and nothing is silently defaulted.
    ///
    /// # Errors
    ///
    /// See [`StructuralError`] for the full taxonomy.
    pub fn from_document(doc: &ScheduleDocument) -> Result<Self, StructuralError> {
        let info = ScheduleInfo::parse(&doc.info)?;

        let mut days = BTreeMap::new();
        for (day_type, records) in &doc.days {
            days.insert(day_type.clone(), Day::parse(day_type, records)?);
        }

        if !doc.weeks.contains_key(DEFAULT_WEEK) {
            return Err(StructuralError::MissingDefaultWeek);
        }
        let mut weeks = BTreeMap::new();
        for (week_type, day_types) in &doc.weeks {
            weeks.insert(week_type.clone(), Week::parse(week_type, day_types, &days)?);
        }

        let mut exceptions = Vec::with_capacity(doc.exceptions.len());
        for record in &doc.exceptions {
            exceptions.push(WeekException::parse(record, &weeks)?);
        }

        debug!(
            days = days.len(),
            weeks = weeks.len(),
            exceptions = exceptions.len(),
            "validated schedule definition"
        );

        Ok(Self {
            info,
            days,
            weeks,
            exceptions,
        })
    }

    /// Returns the validated Info section.
    pub fn info(&self) -> &ScheduleInfo {
        &self.info
    }

    /// Returns the day templates, keyed by day type.
    pub fn days(&self) -> &BTreeMap<String, Day> {
        &self.days
    }

    /// Returns the week templates, keyed by week type.
    pub fn weeks(&self) -> &BTreeMap<String, Week> {
        &self.weeks
    }

    /// Returns the week exceptions with normalized tags.
    pub fn exceptions(&self) -> &[WeekException] {
        &self.exceptions
    }

    /// Consumes the definition, handing its parts to a single new owner.
    pub fn into_parts(
        self,
    ) -> (
        ScheduleInfo,
        BTreeMap<String, Day>,
        BTreeMap<String, Week>,
        Vec<WeekException>,
    ) {
        (self.info, self.days, self.weeks, self.exceptions)
    }
}
