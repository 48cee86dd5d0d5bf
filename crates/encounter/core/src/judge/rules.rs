//! Declarative rule table: one entry per ability kind.
//!
//! Every literal threshold the judge compares against lives here. The judge
//! only knows the four families; which sets and numbers apply to which
//! ability is data.
use std::f64::consts::PI;

use crate::error::StateError;
use crate::roster::{Roster, StatusEffect};
use crate::targets::TargetSet;

use super::AbilityKind;

use TargetSet::{Stack1, Stack2, Stack3, Stack4};

/// Picks the target set a cast is compared against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SetSelector {
    Fixed(TargetSet),
    /// Indexed by occurrence ordinal; slot 0 is never used.
    ByOccurrence(&'static [Option<TargetSet>]),
    /// Occurrence schedule chosen by whether anyone holds the ice-tank status.
    ByIceTank {
        assigned: &'static [Option<TargetSet>],
        unassigned: &'static [Option<TargetSet>],
    },
}

impl SetSelector {
    /// # Errors
    ///
    /// Returns [`StateError::OccurrenceOutOfSchedule`] when the schedule has
    /// no set for `occurrence`.
    pub fn select(
        &self,
        ability: AbilityKind,
        occurrence: u32,
        roster: &Roster,
    ) -> Result<TargetSet, StateError> {
        let schedule = match *self {
            Self::Fixed(set) => return Ok(set),
            Self::ByOccurrence(schedule) => schedule,
            Self::ByIceTank {
                assigned,
                unassigned,
            } => {
                if roster.is_assigned(StatusEffect::IceTank) {
                    assigned
                } else {
                    unassigned
                }
            }
        };
        usize::try_from(occurrence)
            .ok()
            .and_then(|slot| schedule.get(slot).copied().flatten())
            .ok_or(StateError::OccurrenceOutOfSchedule {
                ability,
                occurrence,
                len: schedule.len(),
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackThresholds {
    /// Extra targets at or inside this radius stood too close to the stack.
    pub extra_within: f64,
    /// Missing targets at or beyond this radius stood too far from center.
    pub missing_beyond: f64,
    /// Expected-set size for which exactly one missing target is tolerated.
    pub tolerated_set_len: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkThresholds {
    /// Primary target inside this radius did not get far enough out.
    pub primary_min_radius: f64,
    /// Primary target at or inside this radius never left the group.
    pub group_radius: f64,
    /// Maximum bearing deviation (radians) for the primary to count as aligned.
    pub alignment: f64,
    /// Farthest secondary beyond this radius was in the line of fire.
    pub secondary_in_line: f64,
    /// Farthest secondary beyond this radius was not hugging the center.
    pub secondary_off_center: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingThresholds {
    /// Center-set members at or beyond this radius drifted out of the stack.
    pub stack_beyond: f64,
    /// Others at or inside this radius were not spread out.
    pub spread_within: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RuleFamily {
    /// Recorded for occurrence counting only.
    TelemetryOnly,
    /// Observed targets compared against an expected set.
    Stack {
        expected: SetSelector,
        thresholds: StackThresholds,
    },
    /// One marked player carries the attack out; the rest must avoid its line.
    Mark {
        wrong: SetSelector,
        thresholds: MarkThresholds,
    },
    /// Center-set members stack in the middle, everyone else spreads out.
    Ring {
        center: TargetSet,
        thresholds: RingThresholds,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AbilityRule {
    pub kind: AbilityKind,
    pub family: RuleFamily,
}

const STACK_SCHEDULE: &[Option<TargetSet>] =
    &[None, Some(Stack1), Some(Stack2), Some(Stack3), Some(Stack4)];

const JET_WITH_ICE_TANK: &[Option<TargetSet>] = &[
    None,
    Some(Stack1),
    Some(Stack1),
    Some(Stack2),
    Some(Stack2),
    Some(Stack3),
    Some(Stack3),
    Some(Stack3),
];

const JET_WITHOUT_ICE_TANK: &[Option<TargetSet>] = &[
    None,
    Some(Stack1),
    Some(Stack1),
    Some(Stack1),
    Some(Stack2),
    Some(Stack2),
    Some(Stack3),
    Some(Stack3),
];

const STACK_THRESHOLDS: StackThresholds = StackThresholds {
    extra_within: 8.0,
    missing_beyond: 3.0,
    tolerated_set_len: 6,
};

const MARK_ALIGNMENT: f64 = PI / 10.0;

/// Rules indexed by [`AbilityKind::index`].
pub const RULES: [AbilityRule; 7] = [
    AbilityRule {
        kind: AbilityKind::UnholyDarkness,
        family: RuleFamily::Stack {
            expected: SetSelector::ByOccurrence(STACK_SCHEDULE),
            thresholds: STACK_THRESHOLDS,
        },
    },
    AbilityRule {
        kind: AbilityKind::DarkWater,
        family: RuleFamily::Stack {
            expected: SetSelector::Fixed(Stack4),
            thresholds: STACK_THRESHOLDS,
        },
    },
    AbilityRule {
        kind: AbilityKind::DarkEruption,
        family: RuleFamily::Mark {
            wrong: SetSelector::Fixed(Stack2),
            thresholds: MarkThresholds {
                primary_min_radius: 12.0,
                group_radius: 6.0,
                alignment: MARK_ALIGNMENT,
                secondary_in_line: 9.5,
                secondary_off_center: 3.0,
            },
        },
    },
    AbilityRule {
        kind: AbilityKind::DarkFire,
        family: RuleFamily::Mark {
            wrong: SetSelector::ByIceTank {
                assigned: JET_WITH_ICE_TANK,
                unassigned: JET_WITHOUT_ICE_TANK,
            },
            thresholds: MarkThresholds {
                primary_min_radius: 8.0,
                group_radius: 6.0,
                alignment: MARK_ALIGNMENT,
                secondary_in_line: 9.5,
                secondary_off_center: 3.0,
            },
        },
    },
    AbilityRule {
        kind: AbilityKind::DarkBlizzard,
        family: RuleFamily::Ring {
            center: Stack2,
            thresholds: RingThresholds {
                stack_beyond: 2.0,
                spread_within: 12.0,
            },
        },
    },
    AbilityRule {
        kind: AbilityKind::InitialLaser,
        family: RuleFamily::TelemetryOnly,
    },
    AbilityRule {
        kind: AbilityKind::RotatingLaser,
        family: RuleFamily::TelemetryOnly,
    },
];

pub fn rule(kind: AbilityKind) -> &'static AbilityRule {
    &RULES[kind.index()]
}
