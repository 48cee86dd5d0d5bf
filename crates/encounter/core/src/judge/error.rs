use crate::env::MissingDataError;
use crate::error::{EncounterError, ErrorSeverity, StateError};

/// Failure while judging a single cast.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum JudgeError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    MissingData(#[from] MissingDataError),
}

impl EncounterError for JudgeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::State(e) => e.severity(),
            Self::MissingData(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::State(e) => e.error_code(),
            Self::MissingData(e) => e.error_code(),
        }
    }
}
