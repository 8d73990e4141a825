//! Period location: resolving a query instant to the active day and period.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use chrono_tz::Tz;

use belltower_instant::TimeInstant;
use belltower_schedule::{Day, Period};

use crate::year::Year;

/// A period resolved against a concrete calendar day.
///
/// `start` and `end` are the period's anchored bounds: `end` is the last
/// millisecond the period owns, so `end + 1ms` is always the first instant
/// of whatever follows. Transient; borrows the [`Year`] it came from.
#[derive(Debug, Clone)]
pub struct PeriodMatch<'a> {
    day: &'a Day,
    period: &'a Period,
    index: usize,
    start: TimeInstant,
    end: TimeInstant,
}

impl<'a> PeriodMatch<'a> {
    /// Returns the day template the period came from.
    pub fn day(&self) -> &'a Day {
        self.day
    }

    /// Returns the matched period.
    pub fn period(&self) -> &'a Period {
        self.period
    }

    /// Returns the anchored start instant (first owned millisecond).
    pub fn start(&self) -> TimeInstant {
        self.start
    }

    /// Returns the anchored end instant (last owned millisecond).
    pub fn end(&self) -> TimeInstant {
        self.end
    }

    /// Whether this is the final period of its day.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.day.periods().len()
    }

    /// Whether the matched period participates in time-remaining
    /// calculations.
    pub fn is_counted(&self) -> bool {
        self.period.is_counted()
    }
}

impl Year {
    /// Resolves the period active at `instant`, or `None` when the instant
    /// falls outside the expanded calendar (or inside an authoring gap).
    ///
    /// Containment is start-inclusive and end-inclusive of the period's
    /// effective last millisecond: a nominal end of `HH:mm` owns up to
    /// `HH:mm` minus one millisecond, and the day's final period owns up to
    /// `23:59:59.999`. Adjacent periods therefore never claim the same
    /// millisecond.
    pub fn current_period(&self, instant: TimeInstant) -> Option<PeriodMatch<'_>> {
        let local = instant.with_zone(self.timezone());
        let week = self.effective_week(local.week_tag())?;
        let day = self.day_template(week.day_type_on(local.weekday()));
        let date = local.day_tag();

        let count = day.periods().len();
        for (index, period) in day.periods().iter().enumerate() {
            let start = anchor_start(period, date, self.timezone());
            let end = anchor_end(period, date, self.timezone(), index + 1 == count);
            if instant >= start && instant <= end {
                return Some(PeriodMatch {
                    day,
                    period,
                    index,
                    start,
                    end,
                });
            }
        }
        None
    }
}

/// Anchors a period's nominal start time to a concrete calendar day.
fn anchor_start(period: &Period, date: NaiveDate, zone: Tz) -> TimeInstant {
    TimeInstant::from_local(date, period.start().as_naive(), zone)
}

/// Anchors a period's effective end: one millisecond before the nominal end
/// minute, or the day's literal last millisecond for the final period.
fn anchor_end(period: &Period, date: NaiveDate, zone: Tz, is_last: bool) -> TimeInstant {
    if is_last {
        // Safety: 23:59:59.999 is always a valid wall time.
        let end_of_day =
            NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("valid end-of-day wall time");
        return TimeInstant::from_local(date, end_of_day, zone);
    }
    // Validation guarantees end > start >= 00:00, so the nominal end is at
    // least 00:01 and backing up one millisecond stays on the same date.
    let effective = date.and_time(period.end().as_naive()) - TimeDelta::milliseconds(1);
    TimeInstant::from_local(effective.date(), effective.time(), zone)
}
