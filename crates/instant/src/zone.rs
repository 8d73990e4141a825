//! Timezone id resolution.

use std::str::FromStr;

use chrono_tz::Tz;

use crate::error::InstantError;

/// Resolves a timezone id to a [`Tz`].
///
/// Accepts any IANA zone name understood by chrono-tz
/// (`America/Los_Angeles`, `UTC`, ...). The bare `Z` designator is accepted
/// as an alias for UTC so that schedule documents can use the RFC 3339
/// shorthand.
///
/// # Errors
///
/// Returns [`InstantError::UnknownZone`] when `id` names no known zone.
pub fn resolve_zone(id: &str) -> Result<Tz, InstantError> {
    if id == "Z" {
        return Ok(Tz::UTC);
    }
    Tz::from_str(id).map_err(|_| InstantError::UnknownZone { id: id.to_string() })
}
