//! Evaluation of the positional rule families.
use std::collections::BTreeSet;

use crate::env::MissingDataError;
use crate::roster::{CompositeStatus, Player};
use crate::state::ActorId;
use crate::targets::TargetSet;

use super::diagnosis::{DistanceNote, Finding, MarkVerdict, Placement, StackEntry};
use super::rules::{MarkThresholds, RingThresholds, StackThresholds};
use super::JudgeContext;

/// Compares observed targets against the expected set.
///
/// Returns `None` when the deviation is within tolerance. Geometry is only
/// read once a finding is certain.
pub(super) fn stack(
    ctx: &JudgeContext<'_>,
    expected: TargetSet,
    thresholds: &StackThresholds,
    observed: &[&Player],
) -> Result<Option<Finding>, MissingDataError> {
    let observed: BTreeSet<ActorId> = observed.iter().map(|player| player.id).collect();
    let members = ctx.catalog.get(expected);

    let party = ctx.roster.party();
    let extras: Vec<&Player> = party
        .iter()
        .filter(|p| observed.contains(&p.id) && !members.contains(&p.id))
        .collect();
    let missing: Vec<&Player> = party
        .iter()
        .filter(|p| members.contains(&p.id) && !observed.contains(&p.id))
        .collect();

    let tolerated = missing.is_empty()
        || (missing.len() == 1 && members.len() == thresholds.tolerated_set_len);
    if extras.is_empty() && tolerated {
        tracing::debug!(
            set = %expected,
            missing = missing.len(),
            "stack within tolerance"
        );
        return Ok(None);
    }

    let extras = entries(ctx, extras, |radius| {
        (radius <= thresholds.extra_within).then_some(DistanceNote::TooClose)
    })?;
    let missing = entries(ctx, missing, |radius| {
        (radius >= thresholds.missing_beyond).then_some(DistanceNote::TooFar)
    })?;

    Ok(Some(Finding::Stack {
        expected,
        extras,
        missing,
    }))
}

fn entries(
    ctx: &JudgeContext<'_>,
    players: Vec<&Player>,
    note: impl Fn(f64) -> Option<DistanceNote>,
) -> Result<Vec<StackEntry>, MissingDataError> {
    players
        .into_iter()
        .map(|player| {
            let placement = Placement::locate(player, ctx.telemetry)?;
            let note = note(placement.radius());
            Ok(StackEntry { placement, note })
        })
        .collect()
}

/// Classifies a marked cast carried out by `primary`.
pub(super) fn mark(
    ctx: &JudgeContext<'_>,
    wrong: TargetSet,
    thresholds: &MarkThresholds,
    primary: &Player,
    secondaries: &[&Player],
) -> Result<Finding, MissingDataError> {
    let placement = Placement::locate(primary, ctx.telemetry)?;
    let radius = placement.radius();

    let (verdict, secondary) = if ctx.catalog.contains(wrong, primary.id) {
        (MarkVerdict::IncorrectCall, None)
    } else if radius < thresholds.primary_min_radius {
        let verdict = if radius > thresholds.group_radius {
            MarkVerdict::TooClose
        } else {
            MarkVerdict::DidNotLeaveGroup
        };
        (verdict, None)
    } else {
        let farthest = farthest(ctx, secondaries)?;
        let aligned = placement.coord.is_aligned(thresholds.alignment);
        let verdict = match farthest.as_ref().map(Placement::radius) {
            None => MarkVerdict::Ambiguous,
            Some(r) if aligned && r > thresholds.secondary_in_line => {
                MarkVerdict::SecondaryWrongDirection
            }
            Some(r) if aligned && r > thresholds.secondary_off_center => {
                MarkVerdict::SecondaryNotCentered
            }
            Some(_) if aligned => MarkVerdict::Ambiguous,
            Some(r) if r > thresholds.secondary_in_line => MarkVerdict::PrimaryWrongDirection,
            Some(_) => MarkVerdict::BothMisplaced,
        };
        (verdict, farthest)
    };

    tracing::debug!(%verdict, primary = %placement, "mark classified");
    Ok(Finding::Mark {
        verdict,
        primary: placement,
        secondary,
    })
}

/// Farthest secondary from center; the first listed wins ties.
fn farthest(
    ctx: &JudgeContext<'_>,
    secondaries: &[&Player],
) -> Result<Option<Placement>, MissingDataError> {
    secondaries
        .iter()
        .try_fold(None, |best: Option<Placement>, player| -> Result<_, MissingDataError> {
            let placement = Placement::locate(player, ctx.telemetry)?;
            Ok(match best {
                Some(best) if best.radius() >= placement.radius() => Some(best),
                _ => Some(placement),
            })
        })
}

/// Flags center-set members that drifted out and others that stayed in.
pub(super) fn ring(
    ctx: &JudgeContext<'_>,
    center: TargetSet,
    thresholds: &RingThresholds,
    observed: &[&Player],
) -> Result<Finding, MissingDataError> {
    let mut stacked_too_far = Vec::new();
    let mut spread_too_close = Vec::new();

    for player in observed {
        let placement = Placement::locate(player, ctx.telemetry)?;
        let radius = placement.radius();
        if ctx.catalog.contains(center, player.id) {
            if radius >= thresholds.stack_beyond {
                stacked_too_far.push(placement);
            }
        } else if radius <= thresholds.spread_within {
            spread_too_close.push(placement);
        }
    }

    Ok(Finding::Ring {
        stacked_too_far,
        spread_too_close,
        bearer: ctx
            .roster
            .by_status(CompositeStatus::IceBearer)
            .map(|player| player.role),
    })
}
