//! Positioning analysis for an eight-player rotating-marker encounter.
//!
//! `encounter-core` resolves the party's assigned compass positions from their
//! status effects, derives which players each mechanic should hit, and explains
//! casts that hit the wrong players in geometric terms. Everything here is
//! synchronous and free of I/O; telemetry arrives through the oracle traits in
//! [`env`], and all per-attempt state lives in [`session::Session`].
pub mod config;
pub mod env;
pub mod error;
pub mod geometry;
pub mod judge;
pub mod report;
pub mod roster;
pub mod session;
pub mod state;
pub mod targets;

#[cfg(test)]
pub(crate) mod testing;

pub use config::EncounterConfig;
pub use env::{EntitySnapshot, MissingDataError, TelemetryOracle, VariableOracle};
pub use error::{EncounterError, ErrorSeverity, StateError};
pub use geometry::{PolarCoord, Vec2};
pub use judge::{
    AbilityJudge, AbilityKind, CastEvent, Diagnosis, DistanceNote, Finding, JudgeContext,
    JudgeError, Judgement, MarkVerdict, Placement, SkipReason, StackEntry,
};
pub use report::{DiagnosticReporter, ReportedDiagnosis};
pub use roster::{
    CompositeStatus, ConfigurationError, Marker, Player, Role, Roster, RosterInput,
    RosterResolver, RotationDirection, SpeedCategory, StatusEffect, StatusRef,
};
pub use session::{CastOutcome, Session};
pub use state::{ActorId, Compass, ParseActorIdError};
pub use targets::{TargetSet, TargetSetCatalog};
