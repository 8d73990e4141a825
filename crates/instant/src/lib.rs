//! # belltower-instant
//!
//! Immutable, timezone-aware instant type for the belltower schedule engine.
//!
//! A [`TimeInstant`] is normalized to UTC internally and labeled with a
//! display timezone; equality and ordering consider only the instant, never
//! the label. All operations are pure and return new values, so one instant
//! can be threaded through arbitrarily many computations without aliasing
//! concerns.
//!
//! ## Quick Start
//!
//! ```ignore
//! use belltower_instant::{TimeInstant, TimeUnit};
//! use chrono::Weekday;
//!
//! let t = TimeInstant::of("1970-01-05T10:00:00Z", "Z").unwrap();
//! let next_day = t.plus(1, TimeUnit::Days);
//! let week_tag = t.week_tag(); // 1970-01-04, the Sunday on or before
//! assert_eq!(week_tag, t.shifted_to_previous(Weekday::Sun).day_tag());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `instant` | The `TimeInstant` value type and `TimeUnit` arithmetic |
//! | `zone` | Timezone id resolution |
//! | `error` | Error types |

mod error;
mod instant;
mod zone;

pub use error::InstantError;
pub use instant::{sunday_on_or_before, TimeInstant, TimeUnit};
pub use zone::resolve_zone;
