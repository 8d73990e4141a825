//! # belltower-schedule
//!
//! Schedule document parsing and validation for the belltower engine.
//!
//! The raw JSON document (period records grouped into day templates, day
//! templates grouped into week templates, plus week exceptions) is
//! deserialized into the loose [`ScheduleDocument`] shape and converted by
//! one validating transform into the typed, immutable
//! [`ScheduleDefinition`]. Everything downstream — calendar expansion,
//! period location, navigation — works against checked shapes.
//!
//! ## Quick Start
//!
//! ```ignore
//! use belltower_schedule::{ScheduleDefinition, ScheduleDocument};
//!
//! let doc: ScheduleDocument = serde_json::from_str(&text)?;
//! let definition = ScheduleDefinition::from_document(&doc)?;
//! assert!(definition.weeks().contains_key("DEFAULT"));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `document` | Raw document shape and key constants |
//! | `period` | Time of day, period kind, period records |
//! | `day` | Day templates |
//! | `week` | Week templates and week exceptions |
//! | `info` | The validated Info section |
//! | `definition` | The validating transform |
//! | `error` | Error types |

mod day;
mod definition;
mod document;
mod error;
mod info;
mod period;
mod week;

pub use day::Day;
pub use definition::ScheduleDefinition;
pub use document::{ScheduleDocument, DEFAULT_WEEK, NOTHING, SPECIAL};
pub use error::StructuralError;
pub use info::ScheduleInfo;
pub use period::{Period, PeriodKind, TimeOfDay};
pub use week::{Week, WeekException, DAYS_PER_WEEK};
