//! Common error infrastructure for encounter-core.
//!
//! Domain errors live next to the code that raises them:
//! [`ConfigurationError`](crate::roster::ConfigurationError) in the roster,
//! [`MissingDataError`](crate::env::MissingDataError) in the oracle layer.
//! [`StateError`] is shared because both the roster and the judge raise it.
//!
//! # Severity
//!
//! - **Recoverable**: the current cast is abandoned, the session continues
//! - **Fatal**: bad upstream data or a defect; must surface to the caller

use crate::judge::AbilityKind;
use crate::state::{ActorId, Compass};

/// Severity level of an error, used to pick a recovery strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Only the current unit of work is lost.
    ///
    /// Examples: telemetry has no entity for an id.
    Recoverable,

    /// Processing must stop and the failure must be shown.
    ///
    /// Examples: duplicate compass positions, unset marker rotation read.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all encounter-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by how far the failure propagates, not by its impact
pub trait EncounterError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Internal inconsistencies. These never indicate a player misplay.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// A marker's rotation direction was read before it was recorded.
    #[error("marker {marker} (compass {compass}) has no recorded rotation direction")]
    RotationUnset { marker: ActorId, compass: Compass },

    /// The ability id has no entry in the rule table.
    #[error("no rule registered for ability {0:#06X}")]
    UnregisteredAbility(u32),

    /// The occurrence ordinal runs past the schedule for that ability.
    #[error("{ability} occurrence {occurrence} is outside its {len}-slot schedule")]
    OccurrenceOutOfSchedule {
        ability: AbilityKind,
        occurrence: u32,
        len: usize,
    },

    /// A marker id referenced after init is not part of the roster.
    #[error("marker {0} is not part of the roster")]
    UnknownMarker(ActorId),
}

impl EncounterError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            RotationUnset { .. } => "STATE_ROTATION_UNSET",
            UnregisteredAbility(_) => "STATE_UNREGISTERED_ABILITY",
            OccurrenceOutOfSchedule { .. } => "STATE_OCCURRENCE_OUT_OF_SCHEDULE",
            UnknownMarker(_) => "STATE_UNKNOWN_MARKER",
        }
    }
}
