//! State of one encounter attempt.
//!
//! A [`Session`] is created by an init event and replaced wholesale by the
//! next one. Nothing in it outlives the attempt.
use crate::config::EncounterConfig;
use crate::env::TelemetryOracle;
use crate::error::StateError;
use crate::judge::{
    AbilityJudge, AbilityKind, CastEvent, Diagnosis, JudgeContext, JudgeError, Judgement,
    SkipReason,
};
use crate::report::DiagnosticReporter;
use crate::roster::{ConfigurationError, RotationDirection, Roster, RosterInput, RosterResolver};
use crate::state::ActorId;
use crate::targets::TargetSetCatalog;

/// What happened to one cast.
#[derive(Clone, Debug, PartialEq)]
pub enum CastOutcome {
    Skipped(SkipReason),
    Clean,
    Reported { diagnosis: Diagnosis, surfaced: bool },
}

#[derive(Clone, Debug)]
pub struct Session {
    roster: Roster,
    catalog: TargetSetCatalog,
    judge: AbilityJudge,
    reporter: DiagnosticReporter,
}

impl Session {
    /// Resolves the roster and derives the target sets for a new attempt.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] when the roster cannot be resolved.
    pub fn start(
        input: &RosterInput,
        telemetry: &dyn TelemetryOracle,
        config: &EncounterConfig,
    ) -> Result<Self, ConfigurationError> {
        let roster = RosterResolver::resolve(input, telemetry)?;
        let catalog = TargetSetCatalog::build(&roster);
        tracing::info!(rotation = %roster.rotation(), "encounter session started");
        Ok(Self {
            roster,
            catalog,
            judge: AbilityJudge::new(),
            reporter: DiagnosticReporter::new(config),
        })
    }

    /// Judges a cast and passes any diagnosis through the reporter.
    ///
    /// # Errors
    ///
    /// See [`AbilityJudge::judge`]. A failed cast leaves session state as it
    /// was apart from the occurrence counter.
    pub fn judge(
        &mut self,
        cast: &CastEvent,
        telemetry: &dyn TelemetryOracle,
    ) -> Result<CastOutcome, JudgeError> {
        let ctx = JudgeContext {
            roster: &self.roster,
            catalog: &self.catalog,
            telemetry,
        };
        Ok(match self.judge.judge(cast, &ctx)? {
            Judgement::Skipped(reason) => CastOutcome::Skipped(reason),
            Judgement::Clean => CastOutcome::Clean,
            Judgement::Diagnosed(diagnosis) => {
                let surfaced = self.reporter.report(diagnosis.clone());
                CastOutcome::Reported {
                    diagnosis,
                    surfaced,
                }
            }
        })
    }

    /// # Errors
    ///
    /// Returns [`StateError::UnknownMarker`] if `marker` is not on the arena.
    pub fn record_rotation(
        &mut self,
        marker: ActorId,
        direction: RotationDirection,
    ) -> Result<(), StateError> {
        let entry = self
            .roster
            .marker_mut(marker)
            .ok_or(StateError::UnknownMarker(marker))?;
        entry.set_rotation(direction);
        tracing::debug!(%marker, compass = %entry.compass, %direction, "marker rotation recorded");
        Ok(())
    }

    /// # Errors
    ///
    /// [`StateError::UnknownMarker`] for an id outside the roster, and
    /// [`StateError::RotationUnset`] if no direction was recorded yet.
    pub fn marker_rotation(&self, marker: ActorId) -> Result<RotationDirection, StateError> {
        self.roster
            .marker(marker)
            .ok_or(StateError::UnknownMarker(marker))?
            .rotation()
    }

    pub fn occurrences(&self, kind: AbilityKind) -> u32 {
        self.judge.occurrences(kind)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn catalog(&self) -> &TargetSetCatalog {
        &self.catalog
    }

    pub fn reporter(&self) -> &DiagnosticReporter {
        &self.reporter
    }
}
