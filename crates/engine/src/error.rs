//! Error types for the belltower-engine crate.

use belltower_instant::TimeInstant;

/// Error type for engine queries.
///
/// Query misses ("it is summer") are `None` results, never errors; these
/// variants cover genuine defects: a reversed duration range and a bounded
/// search that exhausted its cap on a structurally valid but operationally
/// unreachable schedule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Returned when a duration's endpoints are reversed.
    #[error("invalid duration range: {start} is after {end}")]
    InvalidRange {
        /// The declared start of the range.
        start: TimeInstant,
        /// The declared end of the range.
        end: TimeInstant,
    },

    /// Returned when a bounded navigation search exceeds its iteration cap.
    ///
    /// This converts what would be an infinite loop over a malformed
    /// schedule into a detectable failure; it is never a semantic limit.
    #[error("navigation from {from} exceeded the {cap}-iteration cap; the schedule never resolves")]
    IterationCap {
        /// The instant the search started from.
        from: TimeInstant,
        /// The cap that was exhausted.
        cap: u32,
    },
}
