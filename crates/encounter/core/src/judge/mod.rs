//! Per-cast rule evaluation.
//!
//! [`AbilityJudge`] owns the occurrence counters for one encounter attempt and
//! evaluates each cast against the [`rules`](RULES) table. Evaluation happens
//! in a fixed order:
//!
//! 1. Look up the ability kind (unknown ids are a [`StateError`])
//! 2. Bump that kind's occurrence counter
//! 3. Skip telemetry-only kinds and casts that hit nobody
//! 4. Resolve every referenced player against the roster
//! 5. Dispatch to the rule family
mod ability;
mod diagnosis;
mod error;
mod families;
mod rules;

use std::collections::HashSet;

pub use ability::{AbilityKind, OccurrenceCounter};
pub use diagnosis::{Diagnosis, DistanceNote, Finding, MarkVerdict, Placement, StackEntry};
pub use error::JudgeError;
pub use rules::{
    rule, AbilityRule, MarkThresholds, RingThresholds, RuleFamily, SetSelector, StackThresholds,
    RULES,
};

use crate::env::{MissingDataError, TelemetryOracle};
use crate::error::StateError;
use crate::roster::{Player, Roster};
use crate::state::ActorId;
use crate::targets::TargetSetCatalog;

/// One resolved boss cast as seen in the log.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastEvent {
    /// Game action id.
    pub ability: u32,
    /// Total number of players the cast affected.
    pub count: u32,
    pub target: Option<ActorId>,
    /// Every other affected player.
    pub others: Vec<ActorId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SkipReason {
    /// The ability is only tracked for its occurrence count.
    TelemetryOnly,
    /// The cast affected nobody.
    NoTargets,
    /// A marked cast with nobody but the primary target to compare against.
    SingleTarget,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Judgement {
    Skipped(SkipReason),
    /// Evaluated and within tolerance.
    Clean,
    Diagnosed(Diagnosis),
}

/// Read-only encounter data a cast is judged against.
#[derive(Clone, Copy)]
pub struct JudgeContext<'a> {
    pub roster: &'a Roster,
    pub catalog: &'a TargetSetCatalog,
    pub telemetry: &'a dyn TelemetryOracle,
}

#[derive(Clone, Debug, Default)]
pub struct AbilityJudge {
    counter: OccurrenceCounter,
}

impl AbilityJudge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Casts of `kind` seen so far, including skipped ones.
    pub fn occurrences(&self, kind: AbilityKind) -> u32 {
        self.counter.get(kind)
    }

    /// Judges one cast.
    ///
    /// The occurrence counter is bumped before anything that can fail except
    /// the ability lookup, so an aborted cast still counts.
    ///
    /// # Errors
    ///
    /// - [`StateError`] for an unregistered ability or an occurrence past its
    ///   schedule
    /// - [`MissingDataError`] for a player outside the roster or missing from
    ///   telemetry
    pub fn judge(
        &mut self,
        cast: &CastEvent,
        ctx: &JudgeContext<'_>,
    ) -> Result<Judgement, JudgeError> {
        let kind = AbilityKind::from_id(cast.ability)
            .ok_or(StateError::UnregisteredAbility(cast.ability))?;
        let occurrence = self.counter.bump(kind);
        let family = &rule(kind).family;

        if matches!(family, RuleFamily::TelemetryOnly) {
            return Ok(skip(kind, occurrence, SkipReason::TelemetryOnly));
        }
        if cast.count == 0 {
            return Ok(skip(kind, occurrence, SkipReason::NoTargets));
        }

        let primary_id = cast.target.ok_or(MissingDataError::NoPrimaryTarget)?;
        let primary = lookup(ctx.roster, primary_id)?;
        let secondaries = secondaries(ctx.roster, primary_id, &cast.others)?;

        let finding = match family {
            RuleFamily::TelemetryOnly => None,
            RuleFamily::Stack {
                expected,
                thresholds,
            } => {
                let expected = expected.select(kind, occurrence, ctx.roster)?;
                let mut observed = Vec::with_capacity(secondaries.len() + 1);
                observed.push(primary);
                observed.extend(&secondaries);
                families::stack(ctx, expected, thresholds, &observed)?
            }
            RuleFamily::Mark { wrong, thresholds } => {
                if cast.count == 1 {
                    return Ok(skip(kind, occurrence, SkipReason::SingleTarget));
                }
                let wrong = wrong.select(kind, occurrence, ctx.roster)?;
                Some(families::mark(ctx, wrong, thresholds, primary, &secondaries)?)
            }
            RuleFamily::Ring { center, thresholds } => {
                let mut observed = Vec::with_capacity(secondaries.len() + 1);
                observed.push(primary);
                observed.extend(&secondaries);
                Some(families::ring(ctx, *center, thresholds, &observed)?)
            }
        };

        Ok(match finding {
            Some(finding) => {
                tracing::debug!(ability = %kind, occurrence, "cast diagnosed");
                Judgement::Diagnosed(Diagnosis {
                    ability: kind,
                    occurrence,
                    finding,
                })
            }
            None => {
                tracing::debug!(ability = %kind, occurrence, "cast clean");
                Judgement::Clean
            }
        })
    }
}

fn skip(kind: AbilityKind, occurrence: u32, reason: SkipReason) -> Judgement {
    tracing::debug!(ability = %kind, occurrence, %reason, "cast skipped");
    Judgement::Skipped(reason)
}

fn lookup(roster: &Roster, id: ActorId) -> Result<&Player, MissingDataError> {
    roster.player(id).ok_or(MissingDataError::NotInRoster(id))
}

/// Resolves the non-primary targets in listed order, dropping repeats.
fn secondaries<'r>(
    roster: &'r Roster,
    primary: ActorId,
    others: &[ActorId],
) -> Result<Vec<&'r Player>, MissingDataError> {
    let mut seen = HashSet::with_capacity(others.len() + 1);
    seen.insert(primary);
    others
        .iter()
        .filter(|&&id| seen.insert(id))
        .map(|&id| lookup(roster, id))
        .collect()
}
