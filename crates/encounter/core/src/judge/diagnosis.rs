use std::fmt;

use crate::env::{MissingDataError, TelemetryOracle};
use crate::geometry::PolarCoord;
use crate::roster::{Player, Role, StatusEffect};
use crate::state::ActorId;
use crate::targets::TargetSet;

use super::AbilityKind;

/// Where one player stood when a cast resolved, in the frame of their own
/// compass position.
///
/// Built fresh for every cast and never cached across casts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub player: ActorId,
    pub name: String,
    pub role: Role,
    pub job: String,
    pub status: StatusEffect,
    pub coord: PolarCoord,
}

impl Placement {
    /// Reads the player's current position from telemetry.
    ///
    /// # Errors
    ///
    /// Returns [`MissingDataError::EntityNotFound`] when telemetry has no
    /// entry for the player.
    pub fn locate(
        player: &Player,
        telemetry: &dyn TelemetryOracle,
    ) -> Result<Self, MissingDataError> {
        let snapshot = telemetry.require(player.id)?;
        let coord = PolarCoord::from_world(snapshot.position.x, snapshot.position.y)
            .rotate_to(player.compass);
        Ok(Self {
            player: player.id,
            name: player.name.clone(),
            role: player.role,
            job: player.job.clone(),
            status: player.status,
            coord,
        })
    }

    pub fn radius(&self) -> f64 {
        self.coord.radius
    }
}

impl fmt::Display for Placement {
    /// `D1 Aya (SAM, short-high-dps) @ 6.5 m, -10°`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {}) @ {}",
            self.role, self.name, self.job, self.status, self.coord
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceNote {
    #[strum(to_string = "too close to center")]
    TooClose,
    #[strum(to_string = "too far from center")]
    TooFar,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackEntry {
    pub placement: Placement,
    pub note: Option<DistanceNote>,
}

impl fmt::Display for StackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.placement)?;
        if let Some(note) = self.note {
            write!(f, " [{note}]")?;
        }
        Ok(())
    }
}

/// Which branch of the point-and-mark/jet classifier fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarkVerdict {
    /// The marked player should never have been the primary target.
    #[strum(to_string = "incorrect call")]
    IncorrectCall,
    #[strum(to_string = "primary too close")]
    TooClose,
    #[strum(to_string = "primary did not leave the group")]
    DidNotLeaveGroup,
    #[strum(to_string = "secondary in the wrong direction")]
    SecondaryWrongDirection,
    #[strum(to_string = "secondary not close enough to center")]
    SecondaryNotCentered,
    #[strum(to_string = "ambiguous")]
    Ambiguous,
    #[strum(to_string = "primary in the wrong direction, hit a secondary")]
    PrimaryWrongDirection,
    #[strum(to_string = "primary in the wrong direction, secondary mis-positioned")]
    BothMisplaced,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Finding {
    Stack {
        expected: TargetSet,
        extras: Vec<StackEntry>,
        missing: Vec<StackEntry>,
    },
    Mark {
        verdict: MarkVerdict,
        primary: Placement,
        /// Farthest secondary target, when the branch looked at one.
        secondary: Option<Placement>,
    },
    Ring {
        stacked_too_far: Vec<Placement>,
        spread_too_close: Vec<Placement>,
        bearer: Option<Role>,
    },
}

/// Judge output for one cast that deviated from the expected pattern.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnosis {
    pub ability: AbilityKind,
    pub occurrence: u32,
    pub finding: Finding,
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}: {}", self.ability, self.occurrence, self.finding)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stack {
                expected,
                extras,
                missing,
            } => {
                write!(f, "expected {expected}")?;
                write_group(f, "; hit extra: ", extras)?;
                write_group(f, "; missed: ", missing)
            }
            Self::Mark {
                verdict,
                primary,
                secondary,
            } => {
                write!(f, "{verdict}; primary {primary}")?;
                if let Some(secondary) = secondary {
                    write!(f, "; farthest secondary {secondary}")?;
                }
                Ok(())
            }
            Self::Ring {
                stacked_too_far,
                spread_too_close,
                bearer,
            } => {
                f.write_str("ring hit")?;
                write_group(f, "; should have stacked: ", stacked_too_far)?;
                write_group(f, "; should have spread: ", spread_too_close)?;
                if let Some(bearer) = bearer {
                    write!(f, "; ice bearer {bearer}")?;
                }
                Ok(())
            }
        }
    }
}

fn write_group<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    items: &[T],
) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    f.write_str(label)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Compass;
    use crate::testing::{self, FixedTelemetry};

    #[test]
    fn locates_player_in_own_frame() {
        let roster = testing::standard_roster();
        let mut telemetry = FixedTelemetry::party();
        let d1 = roster.by_role(Role::D1);
        telemetry.place(d1.id, d1.compass, 10.0, 0.2);

        let placement = Placement::locate(d1, &telemetry).unwrap();
        assert!((placement.radius() - 10.0).abs() < 1e-9);
        assert!((placement.coord.angle - 0.2).abs() < 1e-9);
        assert_eq!(placement.role, Role::D1);
    }

    #[test]
    fn missing_telemetry_is_reported() {
        let roster = testing::standard_roster();
        let mut telemetry = FixedTelemetry::party();
        let h1 = roster.by_role(Role::H1);
        telemetry.remove(h1.id);
        assert_eq!(
            Placement::locate(h1, &telemetry),
            Err(MissingDataError::EntityNotFound(h1.id))
        );
    }

    #[test]
    fn renders_stack_finding() {
        let roster = testing::standard_roster();
        let mut telemetry = FixedTelemetry::party();
        let d1 = roster.by_role(Role::D1);
        telemetry.place(d1.id, Compass::wrapping(1), 3.0, 0.0);
        let diagnosis = Diagnosis {
            ability: AbilityKind::UnholyDarkness,
            occurrence: 1,
            finding: Finding::Stack {
                expected: TargetSet::Stack1,
                extras: vec![StackEntry {
                    placement: Placement::locate(d1, &telemetry).unwrap(),
                    note: Some(DistanceNote::TooClose),
                }],
                missing: Vec::new(),
            },
        };
        assert_eq!(
            diagnosis.to_string(),
            "Unholy Darkness #1: expected Stack1; hit extra: \
             D1 Player 5 (SAM, short-high-dps) @ 3.0 m, +0° [too close to center]"
        );
    }
}
