//! Durations: greedy decomposition of millisecond deltas and time-remaining.

use std::fmt;

use belltower_instant::{TimeInstant, TimeUnit};

use crate::error::EngineError;
use crate::year::Year;

/// Milliseconds per second.
pub const MS_PER_SECOND: i64 = 1_000;
/// Milliseconds per minute.
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
/// Milliseconds per hour.
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
/// Milliseconds per day.
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// A non-negative span of time decomposed into calendar-free components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duration {
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    millis: i64,
}

impl Duration {
    /// Computes the duration from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`] when `start > end`.
    pub fn between(start: TimeInstant, end: TimeInstant) -> Result<Self, EngineError> {
        if start > end {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(Self::from_delta_millis(
            end.epoch_millis() - start.epoch_millis(),
        ))
    }

    /// Decomposes a millisecond delta greedily into
    /// days, hours, minutes, seconds, and milliseconds.
    /// Negative deltas clamp to zero.
    pub fn from_delta_millis(delta: i64) -> Self {
        let mut remaining = delta.max(0);
        let days = remaining / MS_PER_DAY;
        remaining -= days * MS_PER_DAY;
        let hours = remaining / MS_PER_HOUR;
        remaining -= hours * MS_PER_HOUR;
        let minutes = remaining / MS_PER_MINUTE;
        remaining -= minutes * MS_PER_MINUTE;
        let seconds = remaining / MS_PER_SECOND;
        remaining -= seconds * MS_PER_SECOND;
        Self {
            days,
            hours,
            minutes,
            seconds,
            millis: remaining,
        }
    }

    /// Builds a duration from explicit components.
    pub fn from_components(days: i64, hours: i64, minutes: i64, seconds: i64, millis: i64) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
            millis,
        }
    }

    /// Returns this duration with its days folded into hours.
    pub fn fold_days(self) -> Self {
        Self {
            days: 0,
            hours: self.hours + self.days * 24,
            ..self
        }
    }

    /// Returns the whole days component.
    pub fn days(&self) -> i64 {
        self.days
    }

    /// Returns the hours component.
    pub fn hours(&self) -> i64 {
        self.hours
    }

    /// Returns the minutes component.
    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    /// Returns the seconds component.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the milliseconds component.
    pub fn millis(&self) -> i64 {
        self.millis
    }

    /// Returns the total length in milliseconds.
    pub fn total_millis(&self) -> i64 {
        self.days * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
            + self.millis
    }

    /// Whether the duration is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.total_millis() == 0
    }
}

/// Renders `H:MM:SS` with days folded into hours, or `MM:SS` when under an
/// hour.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let folded = self.fold_days();
        if folded.hours == 0 {
            write!(f, "{:02}:{:02}", folded.minutes, folded.seconds)
        } else {
            write!(
                f,
                "{}:{:02}:{:02}",
                folded.hours, folded.minutes, folded.seconds
            )
        }
    }
}

impl Year {
    /// Returns the time remaining until the start of the next counted
    /// period.
    ///
    /// Inside a counted period this measures to the period's end (one
    /// millisecond past its last owned millisecond, which is the start of
    /// whatever follows). Otherwise it measures to the start of the next
    /// counted period, transparently absorbing any run of non-counted
    /// periods into the one figure. `None` when no counted period remains.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineError::IterationCap`] from the counted-period
    /// search.
    pub fn time_remaining(&self, instant: TimeInstant) -> Result<Option<Duration>, EngineError> {
        if let Some(current) = self.current_period(instant) {
            if current.is_counted() {
                let end = current.end().plus(1, TimeUnit::Millis);
                return Duration::between(instant, end).map(Some);
            }
        }
        match self.next_counted_period(instant)? {
            Some(next) => {
                let start = next.start();
                Duration::between(instant, start).map(Some)
            }
            None => Ok(None),
        }
    }
}
