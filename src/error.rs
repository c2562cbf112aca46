//! Error type shared across the library.
//!
//! The policy functions themselves are total over their documented
//! domain; errors arise only at the boundaries where raw numbers and
//! records enter the system, or inside a storage backend.

use thiserror::Error;

/// Errors returned by validation boundaries and store operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Latitude must be a finite number in [-90, 90].
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// Longitude must be a finite number in [-180, 180].
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    /// Walkability scores live in [0, 100].
    #[error("walkability score {0} is outside [0, 100]")]
    ScoreOutOfRange(u8),

    /// Star ratings live in [1, 5].
    #[error("star rating {0} is outside [1, 5]")]
    StarsOutOfRange(u8),

    /// The route does not qualify for complaint escalation. Either the
    /// distance exceeds practical walking limits or the score meets the
    /// threshold for that distance.
    #[error("escalation unavailable for score {score} over {distance_meters} m")]
    EscalationUnavailable { score: u8, distance_meters: f64 },

    /// A storage backend failed. The in-memory store never returns
    /// this; database-backed implementations wrap their driver errors
    /// here.
    #[error("storage error: {0}")]
    Storage(String),
}
