//! Unified error types surfaced by the runtime API.
//!
//! Wraps record decoding, roster configuration and judge failures so the
//! binary can bubble them up with consistent context. Per-cast telemetry
//! misses never reach this type; the runtime absorbs them.
use std::io;

use encounter_core::{ConfigurationError, EncounterError, ErrorSeverity, StateError};
use thiserror::Error;

use crate::events::{Command, RecordError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("malformed event record")]
    Record(#[from] RecordError),

    #[error("encounter init failed")]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error("'{0}' received before any init")]
    NoSession(Command),

    #[error("failed to write diagnosis")]
    Sink(#[source] io::Error),
}

impl EncounterError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Record(e) => e.severity(),
            Self::Configuration(e) => e.severity(),
            Self::State(e) => e.severity(),
            Self::NoSession(_) | Self::Sink(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Record(e) => e.error_code(),
            Self::Configuration(e) => e.error_code(),
            Self::State(e) => e.error_code(),
            Self::NoSession(_) => "RUNTIME_NO_SESSION",
            Self::Sink(_) => "RUNTIME_SINK",
        }
    }
}
