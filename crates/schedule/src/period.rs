//! Period records: time of day, period kind, and the period itself.

use std::fmt;

use chrono::NaiveTime;

use crate::document::{NOTHING, SPECIAL};
use crate::error::StructuralError;

/// A wall-clock time of day with minute resolution, parsed from `HH:mm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Creates a `TimeOfDay` from hour and minute.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError::BadTime`] when the fields are out of range.
    pub fn new(hour: u8, minute: u8) -> Result<Self, StructuralError> {
        if hour >= 24 || minute >= 60 {
            return Err(StructuralError::BadTime {
                value: format!("{hour:02}:{minute:02}"),
            });
        }
        Ok(Self { hour, minute })
    }

    /// Parses a `TimeOfDay` from an `HH:mm` string.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError::BadTime`] for any other shape.
    pub fn parse(text: &str) -> Result<Self, StructuralError> {
        let bad = || StructuralError::BadTime {
            value: text.to_string(),
        };
        let (hour_text, minute_text) = text.split_once(':').ok_or_else(bad)?;
        if hour_text.len() != 2 || minute_text.len() != 2 {
            return Err(bad());
        }
        let hour: u8 = hour_text.parse().map_err(|_| bad())?;
        let minute: u8 = minute_text.parse().map_err(|_| bad())?;
        Self::new(hour, minute)
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns this time as a [`NaiveTime`] at second zero.
    pub fn as_naive(self) -> NaiveTime {
        // Safety: TimeOfDay always holds a valid wall time, guaranteed by
        // the constructors.
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .expect("TimeOfDay always holds a valid wall time")
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// The kind of a period: the tagged form of the document's free-form
/// `Type` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodKind {
    /// Filler time (passing periods, before/after school). Never counted.
    Nothing,
    /// A counted event that is not an academic period (lunch, assembly).
    Special,
    /// An academic period with its declared number.
    Numbered(i32),
}

impl PeriodKind {
    /// Parses a kind from the document grammar: `Nothing`, `Special`, or an
    /// integer period number.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError::BadPeriodKind`] for anything else.
    pub fn parse(text: &str) -> Result<Self, StructuralError> {
        match text {
            NOTHING => Ok(Self::Nothing),
            SPECIAL => Ok(Self::Special),
            other => other.parse::<i32>().map(Self::Numbered).map_err(|_| {
                StructuralError::BadPeriodKind {
                    value: text.to_string(),
                }
            }),
        }
    }

    /// Whether this kind participates in time-remaining calculations.
    pub fn is_counted(self) -> bool {
        !matches!(self, Self::Nothing)
    }

    /// Whether this kind carries no academic period number.
    pub fn is_free(self) -> bool {
        matches!(self, Self::Nothing | Self::Special)
    }
}

/// One period of a day template: a kind, a display name, and a start/end
/// time range. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    kind: PeriodKind,
    name: String,
    start: TimeOfDay,
    end: TimeOfDay,
}

impl Period {
    /// Creates a period, enforcing that it starts strictly before it ends.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError::PeriodOrder`] when `start >= end`.
    pub fn new(
        kind: PeriodKind,
        name: String,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<Self, StructuralError> {
        if start >= end {
            return Err(StructuralError::PeriodOrder { name, start, end });
        }
        Ok(Self {
            kind,
            name,
            start,
            end,
        })
    }

    /// Returns the period kind.
    pub fn kind(&self) -> PeriodKind {
        self.kind
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the nominal start time of day.
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// Returns the nominal end time of day.
    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Whether this period participates in time-remaining calculations.
    pub fn is_counted(&self) -> bool {
        self.kind.is_counted()
    }

    /// Whether this period carries no academic period number.
    pub fn is_free(&self) -> bool {
        self.kind.is_free()
    }
}
