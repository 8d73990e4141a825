//! Error types for the belltower-instant crate.

/// Error type for all fallible operations in the belltower-instant crate.
///
/// Covers the two ways building an instant from text can fail: a date or
/// date-time string that matches no accepted format, and a timezone id that
/// does not name a known zone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstantError {
    /// Returned when a date or date-time string cannot be parsed.
    #[error(
        "unparsable date-time: {input:?} (expected yyyy-mm-dd, yyyy-mm-ddTHH:MM:SS[.mmm], or RFC 3339)"
    )]
    Format {
        /// The string that failed to parse.
        input: String,
    },

    /// Returned when a timezone id does not name a known timezone.
    #[error("unknown timezone id: {id:?}")]
    UnknownZone {
        /// The unrecognized timezone id.
        id: String,
    },
}
