//! Timezone-aware instant value type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{
    DateTime, Datelike, Days, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
    TimeZone, Timelike, Utc, Weekday,
};
use chrono_tz::Tz;

use crate::error::InstantError;
use crate::zone::resolve_zone;

/// Units accepted by [`TimeInstant::plus`].
///
/// `Weeks` and `Days` are calendar-aware in the display timezone (the local
/// wall time is preserved across DST transitions); the smaller units are
/// absolute shifts of the underlying instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Calendar weeks (7 calendar days).
    Weeks,
    /// Calendar days in the display timezone.
    Days,
    /// Absolute hours.
    Hours,
    /// Absolute minutes.
    Minutes,
    /// Absolute seconds.
    Seconds,
    /// Absolute milliseconds.
    Millis,
}

/// An immutable point in time, normalized to UTC internally and labeled
/// with a display timezone.
///
/// Equality, ordering, and hashing consider only the instant itself, never
/// the display timezone: `08:00 UTC` and `00:00 America/Los_Angeles` on the
/// same winter day compare equal. All transformation methods return new
/// values; nothing mutates after construction.
#[derive(Debug, Clone, Copy)]
pub struct TimeInstant {
    utc: DateTime<Utc>,
    zone: Tz,
}

impl PartialEq for TimeInstant {
    fn eq(&self, other: &Self) -> bool {
        self.utc == other.utc
    }
}

impl Eq for TimeInstant {}

impl PartialOrd for TimeInstant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeInstant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.utc.cmp(&other.utc)
    }
}

impl Hash for TimeInstant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.utc.hash(state);
    }
}

impl TimeInstant {
    /// Returns the current instant, displayed in UTC.
    pub fn now() -> Self {
        Self {
            utc: Utc::now(),
            zone: Tz::UTC,
        }
    }

    /// Parses an instant from text, interpreted in the given timezone.
    ///
    /// Accepts, in order of preference:
    /// - an RFC 3339 string carrying its own offset (`1970-01-05T10:00:00Z`),
    /// - a naive date-time `yyyy-mm-ddTHH:MM:SS` with optional fractional
    ///   seconds, read as wall time in `zone_id`,
    /// - a bare date `yyyy-mm-dd`, read as midnight in `zone_id`.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::UnknownZone`] for a bad zone id and
    /// [`InstantError::Format`] when no format matches.
    pub fn of(text: &str, zone_id: &str) -> Result<Self, InstantError> {
        let zone = resolve_zone(zone_id)?;
        if let Ok(fixed) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self {
                utc: fixed.with_timezone(&Utc),
                zone,
            });
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Self {
                utc: resolve_local(naive, zone),
                zone,
            });
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Ok(Self::from_local(date, NaiveTime::MIN, zone));
        }
        Err(InstantError::Format {
            input: text.to_string(),
        })
    }

    /// Builds an instant from a wall-clock date and time in `zone`.
    ///
    /// Ambiguous wall times (DST fall-back) resolve to the earlier instant;
    /// wall times inside a DST gap are nudged forward to the first instant
    /// that exists.
    pub fn from_local(date: NaiveDate, time: NaiveTime, zone: Tz) -> Self {
        Self {
            utc: resolve_local(date.and_time(time), zone),
            zone,
        }
    }

    /// Relabels this instant with the timezone named by `zone_id`.
    ///
    /// The instant itself is unchanged; only field accessors and tags are
    /// affected.
    ///
    /// # Errors
    ///
    /// Returns [`InstantError::UnknownZone`] for a bad zone id.
    pub fn to(&self, zone_id: &str) -> Result<Self, InstantError> {
        Ok(self.with_zone(resolve_zone(zone_id)?))
    }

    /// Relabels this instant with an already-resolved display timezone.
    pub fn with_zone(&self, zone: Tz) -> Self {
        Self {
            utc: self.utc,
            zone,
        }
    }

    /// Returns the display timezone.
    pub fn zone(&self) -> Tz {
        self.zone
    }

    fn local(&self) -> DateTime<Tz> {
        self.utc.with_timezone(&self.zone)
    }

    /// Returns the year in the display timezone.
    pub fn year(&self) -> i32 {
        self.local().year()
    }

    /// Returns the month (1..=12) in the display timezone.
    pub fn month(&self) -> u32 {
        self.local().month()
    }

    /// Returns the day of month (1..=31) in the display timezone.
    pub fn day(&self) -> u32 {
        self.local().day()
    }

    /// Returns the day of week in the display timezone.
    pub fn weekday(&self) -> Weekday {
        self.local().weekday()
    }

    /// Returns the hour (0..=23) in the display timezone.
    pub fn hour(&self) -> u32 {
        self.local().hour()
    }

    /// Returns the minute (0..=59) in the display timezone.
    pub fn minute(&self) -> u32 {
        self.local().minute()
    }

    /// Returns the second (0..=59) in the display timezone.
    pub fn second(&self) -> u32 {
        self.local().second()
    }

    /// Returns the millisecond within the second (0..=999).
    pub fn millisecond(&self) -> u32 {
        self.utc.timestamp_subsec_millis()
    }

    /// Returns milliseconds since the Unix epoch.
    pub fn epoch_millis(&self) -> i64 {
        self.utc.timestamp_millis()
    }

    /// Returns a new instant shifted by `amount` of `unit`.
    ///
    /// Negative amounts shift backwards. `Weeks`/`Days` step the calendar in
    /// the display timezone so that crossing a DST transition lands on the
    /// same wall time rather than 23 or 25 hours away.
    pub fn plus(&self, amount: i64, unit: TimeUnit) -> Self {
        match unit {
            TimeUnit::Weeks => self.plus_days(amount * 7),
            TimeUnit::Days => self.plus_days(amount),
            TimeUnit::Hours => self.shift(TimeDelta::hours(amount)),
            TimeUnit::Minutes => self.shift(TimeDelta::minutes(amount)),
            TimeUnit::Seconds => self.shift(TimeDelta::seconds(amount)),
            TimeUnit::Millis => self.shift(TimeDelta::milliseconds(amount)),
        }
    }

    fn shift(&self, delta: TimeDelta) -> Self {
        Self {
            utc: self.utc + delta,
            zone: self.zone,
        }
    }

    fn plus_days(&self, amount: i64) -> Self {
        let local = self.local();
        let date = if amount >= 0 {
            local.date_naive() + Days::new(amount as u64)
        } else {
            local.date_naive() - Days::new(amount.unsigned_abs())
        };
        Self {
            utc: resolve_local(date.and_time(local.time()), self.zone),
            zone: self.zone,
        }
    }

    /// Truncates to 00:00:00.000 of this instant's display-timezone day.
    pub fn to_midnight(&self) -> Self {
        Self::from_local(self.local().date_naive(), NaiveTime::MIN, self.zone)
    }

    /// Shifts backwards to the closest `target` day of week, inclusive of
    /// the current day if it already matches. The wall time is preserved.
    pub fn shifted_to_previous(&self, target: Weekday) -> Self {
        let current = self.local().weekday().num_days_from_sunday();
        let back = (current + 7 - target.num_days_from_sunday()) % 7;
        self.plus_days(-i64::from(back))
    }

    /// Shifts forwards to the closest `target` day of week, inclusive of
    /// the current day if it already matches. The wall time is preserved.
    pub fn shifted_to_next(&self, target: Weekday) -> Self {
        let current = self.local().weekday().num_days_from_sunday();
        let forward = (target.num_days_from_sunday() + 7 - current) % 7;
        self.plus_days(i64::from(forward))
    }

    /// Returns the display-timezone calendar date of this instant.
    pub fn day_tag(&self) -> NaiveDate {
        self.local().date_naive()
    }

    /// Returns the week tag: the date of the Sunday on or before this
    /// instant in the display timezone.
    pub fn week_tag(&self) -> NaiveDate {
        sunday_on_or_before(self.day_tag())
    }
}

impl fmt::Display for TimeInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.local().format("%Y-%m-%dT%H:%M:%S%.3f"),
            self.zone.name()
        )
    }
}

/// Returns the Sunday on or before `date`: the week tag shared by every
/// instant of that calendar week.
pub fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
}

/// Maps a wall time to UTC, resolving DST ambiguity.
///
/// Ambiguous wall times take the earlier offset. Wall times inside a DST gap
/// are nudged forward one hour at a time until they exist (no real zone
/// skips more than a whole day; past that the wall time is read as UTC).
fn resolve_local(naive: NaiveDateTime, zone: Tz) -> DateTime<Utc> {
    let mut probe = naive;
    for _ in 0..48 {
        match zone.from_local_datetime(&probe) {
            LocalResult::Single(instant) => return instant.with_timezone(&Utc),
            LocalResult::Ambiguous(earliest, _) => return earliest.with_timezone(&Utc),
            LocalResult::None => probe += TimeDelta::hours(1),
        }
    }
    Utc.from_utc_datetime(&naive)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str, zone: &str) -> TimeInstant {
        TimeInstant::of(text, zone).unwrap()
    }

    #[test]
    fn of_rfc3339() {
        let t = at("1970-01-05T10:00:00Z", "Z");
        assert_eq!(t.epoch_millis(), 4 * 86_400_000 + 10 * 3_600_000);
    }

    #[test]
    fn of_naive_datetime_in_zone() {
        let t = at("2024-06-01T08:30:15.250", "America/Los_Angeles");
        assert_eq!(t.hour(), 8);
        assert_eq!(t.minute(), 30);
        assert_eq!(t.second(), 15);
        assert_eq!(t.millisecond(), 250);
        // PDT is UTC-7 in June.
        assert_eq!(t.with_zone(Tz::UTC).hour(), 15);
    }

    #[test]
    fn of_date_only_is_midnight() {
        let t = at("2024-06-01", "UTC");
        assert_eq!((t.hour(), t.minute(), t.second(), t.millisecond()), (0, 0, 0, 0));
    }

    #[test]
    fn of_rejects_garbage() {
        let err = TimeInstant::of("soon", "UTC").unwrap_err();
        assert!(matches!(err, InstantError::Format { .. }));
    }

    #[test]
    fn of_rejects_unknown_zone() {
        let err = TimeInstant::of("2024-06-01", "Nowhere/Void").unwrap_err();
        assert!(matches!(err, InstantError::UnknownZone { .. }));
    }

    #[test]
    fn equality_ignores_display_zone() {
        let utc = at("2024-01-15T08:00:00", "UTC");
        let la = at("2024-01-15T00:00:00", "America/Los_Angeles");
        assert_eq!(utc, la);
        assert_eq!(utc.cmp(&la), Ordering::Equal);
    }

    #[test]
    fn ordering_by_instant() {
        let a = at("2024-01-15T08:00:00", "UTC");
        let b = a.plus(1, TimeUnit::Millis);
        assert!(a < b);
        assert_eq!(b.plus(-1, TimeUnit::Millis), a);
    }

    #[test]
    fn plus_small_units_are_absolute() {
        let t = at("2024-01-15T08:00:00", "UTC");
        assert_eq!(t.plus(90, TimeUnit::Minutes).hour(), 9);
        assert_eq!(t.plus(90, TimeUnit::Minutes).minute(), 30);
        assert_eq!(t.plus(-1, TimeUnit::Seconds).second(), 59);
    }

    #[test]
    fn plus_days_preserves_wall_time_across_dst() {
        // 2024-03-10 02:00 is the PST->PDT spring-forward in Los Angeles.
        let before = at("2024-03-09T12:00:00", "America/Los_Angeles");
        let after = before.plus(1, TimeUnit::Days);
        assert_eq!(after.hour(), 12);
        assert_eq!(after.day(), 10);
        // The absolute gap is only 23 hours.
        assert_eq!(after.epoch_millis() - before.epoch_millis(), 23 * 3_600_000);
    }

    #[test]
    fn plus_weeks() {
        let t = at("1970-01-01", "Z");
        assert_eq!(t.plus(2, TimeUnit::Weeks).day_tag(), date(1970, 1, 15));
    }

    #[test]
    fn to_midnight_truncates_in_display_zone() {
        let t = at("2024-06-01T18:45:12.345", "America/Los_Angeles");
        let midnight = t.to_midnight();
        assert_eq!(midnight.hour(), 0);
        assert_eq!(midnight.day_tag(), t.day_tag());
        // Truncation follows the display zone, not UTC.
        assert_eq!(midnight.with_zone(Tz::UTC).hour(), 7);
    }

    #[test]
    fn midnight_in_dst_gap_nudges_forward() {
        // America/Sao_Paulo (historically) skipped midnight on DST starts;
        // 2017-10-15 00:00 did not exist there.
        let t = TimeInstant::from_local(
            date(2017, 10, 15),
            NaiveTime::MIN,
            Tz::America__Sao_Paulo,
        );
        assert_eq!(t.day_tag(), date(2017, 10, 15));
        assert_eq!(t.hour(), 1);
    }

    #[test]
    fn shifted_to_previous_is_inclusive() {
        // 1970-01-04 is a Sunday.
        let sunday = at("1970-01-04T10:00:00", "Z");
        assert_eq!(sunday.shifted_to_previous(Weekday::Sun), sunday);
        let thursday = at("1970-01-01T10:00:00", "Z");
        assert_eq!(
            thursday.shifted_to_previous(Weekday::Sun).day_tag(),
            date(1969, 12, 28)
        );
    }

    #[test]
    fn shifted_to_next_is_inclusive() {
        let thursday = at("1970-01-01T10:00:00", "Z");
        assert_eq!(thursday.shifted_to_next(Weekday::Thu), thursday);
        assert_eq!(
            thursday.shifted_to_next(Weekday::Sat).day_tag(),
            date(1970, 1, 3)
        );
    }

    #[test]
    fn week_tag_is_previous_sunday_day_tag() {
        for offset in 0..21 {
            let t = at("1970-01-01T13:00:00", "Z").plus(offset, TimeUnit::Days);
            assert_eq!(
                t.week_tag(),
                t.shifted_to_previous(Weekday::Sun).day_tag(),
                "week tag mismatch at offset {offset}"
            );
        }
    }

    #[test]
    fn day_tag_respects_display_zone() {
        // 23:30 in LA is already the next day in UTC.
        let t = at("2024-01-15T23:30:00", "America/Los_Angeles");
        assert_eq!(t.day_tag(), date(2024, 1, 15));
        assert_eq!(t.with_zone(Tz::UTC).day_tag(), date(2024, 1, 16));
    }

    #[test]
    fn display_format() {
        let t = at("1970-01-05T10:00:00Z", "Z");
        assert_eq!(t.to_string(), "1970-01-05T10:00:00.000 UTC");
    }

    #[test]
    fn sunday_on_or_before_fixed_point() {
        assert_eq!(sunday_on_or_before(date(1970, 1, 4)), date(1970, 1, 4));
        assert_eq!(sunday_on_or_before(date(1970, 1, 10)), date(1970, 1, 4));
        assert_eq!(sunday_on_or_before(date(1970, 1, 1)), date(1969, 12, 28));
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }
}
