//! Period navigation: next/previous searches across day and year boundaries.

use belltower_instant::{TimeInstant, TimeUnit};

use crate::error::EngineError;
use crate::locate::PeriodMatch;
use crate::year::Year;

/// Iteration cap for bounded navigation walks.
///
/// Generous enough to cross any real schedule (a year of days, or a year's
/// worth of period hops); exceeding it means the schedule can never resolve
/// and surfaces as [`EngineError::IterationCap`] instead of looping.
pub const WALK_CAP: u32 = 366;

impl Year {
    /// Returns the period after the current one within the same day, or
    /// `None` when there is no current period or it is the day's last.
    pub fn next_period_today(&self, instant: TimeInstant) -> Option<PeriodMatch<'_>> {
        let current = self.current_period(instant)?;
        if current.is_last() {
            return None;
        }
        self.current_period(current.end().plus(1, TimeUnit::Millis))
    }

    /// Returns the next period at or after `instant`, rolling across day,
    /// week, and year boundaries.
    ///
    /// With a current period this is simply the period owning the first
    /// millisecond after it. Outside the schedule span the search walks
    /// forward one day at a time, probing each midnight, and returns `None`
    /// once the walk leaves the expanded calendar.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IterationCap`] when probes inside the span
    /// keep failing, which only a malformed day template can cause.
    pub fn next_period(&self, instant: TimeInstant) -> Result<Option<PeriodMatch<'_>>, EngineError> {
        if let Some(current) = self.current_period(instant) {
            return Ok(self.current_period(current.end().plus(1, TimeUnit::Millis)));
        }

        let mut walk = instant.with_zone(self.timezone());
        if walk.day_tag() > self.span_end() {
            return Ok(None);
        }
        for _ in 0..WALK_CAP {
            walk = walk.plus(1, TimeUnit::Days).to_midnight();
            if walk.day_tag() > self.span_end() {
                return Ok(None);
            }
            if let Some(found) = self.current_period(walk) {
                return Ok(Some(found));
            }
        }
        Err(EngineError::IterationCap {
            from: instant,
            cap: WALK_CAP,
        })
    }

    /// Returns the previous period at or before `instant`: the time-reversed
    /// mirror of [`Year::next_period`].
    ///
    /// With a current period this is the period owning the millisecond
    /// before its start. Outside the span the search walks backward one day
    /// at a time, probing each day's last millisecond, and returns `None`
    /// once the walk leaves the expanded calendar.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IterationCap`] as [`Year::next_period`] does.
    pub fn previous_period(
        &self,
        instant: TimeInstant,
    ) -> Result<Option<PeriodMatch<'_>>, EngineError> {
        if let Some(current) = self.current_period(instant) {
            return Ok(self.current_period(current.start().plus(-1, TimeUnit::Millis)));
        }

        let mut walk = instant.with_zone(self.timezone());
        if walk.day_tag() < self.span_start() {
            return Ok(None);
        }
        for _ in 0..WALK_CAP {
            // Last millisecond of the previous day.
            walk = walk.to_midnight().plus(-1, TimeUnit::Millis);
            if walk.day_tag() < self.span_start() {
                return Ok(None);
            }
            if let Some(found) = self.current_period(walk) {
                return Ok(Some(found));
            }
        }
        Err(EngineError::IterationCap {
            from: instant,
            cap: WALK_CAP,
        })
    }

    /// Returns the first counted period at or after `instant`: the current
    /// period when it is itself counted, else the result of repeatedly
    /// taking [`Year::next_period`] until a counted period appears.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IterationCap`] when the hop count exceeds the
    /// cap, or propagates a cap overrun from an inner search.
    pub fn next_counted_period(
        &self,
        instant: TimeInstant,
    ) -> Result<Option<PeriodMatch<'_>>, EngineError> {
        if let Some(current) = self.current_period(instant) {
            if current.is_counted() {
                return Ok(Some(current));
            }
        }

        let mut probe = instant;
        for _ in 0..WALK_CAP {
            let Some(next) = self.next_period(probe)? else {
                return Ok(None);
            };
            if next.is_counted() {
                return Ok(Some(next));
            }
            probe = next.start();
        }
        Err(EngineError::IterationCap {
            from: instant,
            cap: WALK_CAP,
        })
    }
}
