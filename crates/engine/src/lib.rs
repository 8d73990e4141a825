//! # belltower-engine
//!
//! Calendar expansion and period resolution for the belltower schedule
//! engine.
//!
//! A validated [`belltower_schedule::ScheduleDefinition`] is expanded once
//! into a [`Year`]: a dense Sunday-to-Saturday calendar mapping every week
//! of the school year to its governing week template. The year then answers
//! point queries — which period owns an instant, what comes next or
//! before, how long until the next counted period — all deterministically
//! from the expanded calendar.
//!
//! ## Quick Start
//!
//! ```ignore
//! use belltower_engine::Year;
//! use belltower_instant::TimeInstant;
//!
//! let year = Year::new(definition);
//! let now = TimeInstant::now().with_zone(year.timezone());
//! if let Some(m) = year.current_period(now) {
//!     println!("{} until {}", m.period().name(), m.end());
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `year` | The expanded year and its accessors |
//! | `expand` | Week-by-week calendar expansion |
//! | `locate` | Point lookup of the period owning an instant |
//! | `navigate` | Forward and backward walks between periods |
//! | `duration` | Duration decomposition and time remaining |
//! | `error` | Error types |

mod duration;
mod error;
mod expand;
mod locate;
mod navigate;
mod year;

pub use duration::{Duration, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};
pub use error::EngineError;
pub use locate::PeriodMatch;
pub use navigate::WALK_CAP;
pub use year::Year;
