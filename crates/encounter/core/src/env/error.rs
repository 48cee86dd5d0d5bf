//! Lookup failures against per-cast data.

use crate::error::{EncounterError, ErrorSeverity};
use crate::state::ActorId;

/// A referenced id could not be resolved for the current cast.
///
/// Only the cast being judged is lost; session state is untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissingDataError {
    /// Telemetry returned nothing for the id.
    #[error("telemetry has no entity {0}")]
    EntityNotFound(ActorId),

    /// The cast names a player that is not part of the resolved roster.
    #[error("player {0} is not part of the roster")]
    NotInRoster(ActorId),

    /// A cast with targets carried no primary target id.
    #[error("cast has targets but no primary target")]
    NoPrimaryTarget,
}

impl EncounterError for MissingDataError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EntityNotFound(_) => "DATA_ENTITY_NOT_FOUND",
            Self::NotInRoster(_) => "DATA_NOT_IN_ROSTER",
            Self::NoPrimaryTarget => "DATA_NO_PRIMARY_TARGET",
        }
    }
}
