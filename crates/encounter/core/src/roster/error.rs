//! Roster resolution errors.

use crate::env::MissingDataError;
use crate::error::{EncounterError, ErrorSeverity};
use crate::state::{ActorId, Compass};

/// Upstream assignment data that cannot describe a valid party.
///
/// Resolution aborts on the first error; there is no partial roster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// An encounter variable the init step needs was never recorded.
    #[error("encounter variable '{0}' is not set")]
    MissingVariable(String),

    /// An encounter variable holds a value that does not parse.
    #[error("encounter variable '{key}' has malformed value '{value}'")]
    MalformedVariable { key: String, value: String },

    #[error("{field} has {len} entries, expected {expected}")]
    WrongPartySize {
        field: &'static str,
        len: usize,
        expected: usize,
    },

    #[error("rotation offset {0} is outside 0..8")]
    RotationOutOfRange(i64),

    #[error("party slot {slot} carries unknown status code {code}")]
    UnknownStatus { slot: usize, code: u8 },

    #[error("player {0} appears twice in the party")]
    DuplicatePlayer(ActorId),

    #[error("players {first} and {second} both resolve to compass {compass}")]
    DuplicateCompass {
        compass: Compass,
        first: ActorId,
        second: ActorId,
    },

    #[error("no marker recorded at compass {0}")]
    MissingMarker(Compass),

    #[error("marker {0} is recorded at more than one compass position")]
    DuplicateMarker(ActorId),

    #[error("two markers are recorded at compass {0}")]
    DuplicateMarkerCompass(Compass),

    /// A party member's identity could not be fetched while resolving.
    #[error("cannot resolve party member: {0}")]
    Identity(#[source] MissingDataError),
}

impl EncounterError for ConfigurationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use ConfigurationError::*;
        match self {
            MissingVariable(_) => "CONFIG_MISSING_VARIABLE",
            MalformedVariable { .. } => "CONFIG_MALFORMED_VARIABLE",
            WrongPartySize { .. } => "CONFIG_WRONG_PARTY_SIZE",
            RotationOutOfRange(_) => "CONFIG_ROTATION_OUT_OF_RANGE",
            UnknownStatus { .. } => "CONFIG_UNKNOWN_STATUS",
            DuplicatePlayer(_) => "CONFIG_DUPLICATE_PLAYER",
            DuplicateCompass { .. } => "CONFIG_DUPLICATE_COMPASS",
            MissingMarker(_) => "CONFIG_MISSING_MARKER",
            DuplicateMarker(_) => "CONFIG_DUPLICATE_MARKER",
            DuplicateMarkerCompass(_) => "CONFIG_DUPLICATE_MARKER_COMPASS",
            Identity(_) => "CONFIG_IDENTITY",
        }
    }
}
