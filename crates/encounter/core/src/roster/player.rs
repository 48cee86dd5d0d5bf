use crate::config::EncounterConfig;
use crate::error::StateError;
use crate::geometry::Vec2;
use crate::state::{ActorId, Compass};

use super::{Role, StatusEffect};

/// One party member with the position their status effect assigns them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: ActorId,
    pub name: String,
    pub job: String,
    pub status: StatusEffect,
    pub role: Role,
    pub compass: Compass,
    /// Marker standing at the same compass position.
    pub marker: ActorId,
}

/// How long a marker takes before it fires, keyed by relative offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SpeedCategory {
    Short,
    Mid,
    Long,
}

impl SpeedCategory {
    pub const fn from_offset(relative_offset: u8) -> Self {
        match relative_offset % 8 {
            0 | 3 | 5 => Self::Short,
            1 | 4 | 7 => Self::Mid,
            _ => Self::Long,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RotationDirection {
    Clockwise,
    Counterclockwise,
}

/// Arena marker linked to the player sharing its compass position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    pub id: ActorId,
    pub compass: Compass,
    pub speed: SpeedCategory,
    pub player: ActorId,
    rotation: Option<RotationDirection>,
}

impl Marker {
    pub fn new(id: ActorId, compass: Compass, speed: SpeedCategory, player: ActorId) -> Self {
        Self {
            id,
            compass,
            speed,
            player,
            rotation: None,
        }
    }

    /// Recorded rotation direction.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::RotationUnset`] if nothing was recorded yet.
    pub fn rotation(&self) -> Result<RotationDirection, StateError> {
        self.rotation.ok_or(StateError::RotationUnset {
            marker: self.id,
            compass: self.compass,
        })
    }

    pub fn set_rotation(&mut self, direction: RotationDirection) {
        self.rotation = Some(direction);
    }

    pub fn has_rotation(&self) -> bool {
        self.rotation.is_some()
    }

    /// Marker position relative to the arena center.
    pub fn relative_position(&self) -> Vec2 {
        let theta = (f64::from(self.compass.get()) - 4.0) * std::f64::consts::FRAC_PI_4;
        Vec2::new(
            EncounterConfig::MARKER_RING_RADIUS * theta.sin(),
            EncounterConfig::MARKER_RING_RADIUS * theta.cos(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker_at(compass: u8) -> Marker {
        let compass = Compass::new(compass).unwrap();
        Marker::new(ActorId(0x4000), compass, SpeedCategory::Short, ActorId(1))
    }

    #[test]
    fn speed_follows_relative_offset_table() {
        let speeds: Vec<_> = (0..8).map(SpeedCategory::from_offset).collect();
        use SpeedCategory::*;
        assert_eq!(speeds, [Short, Mid, Long, Short, Mid, Short, Long, Mid]);
    }

    #[test]
    fn reading_unset_rotation_is_a_state_error() {
        let mut marker = marker_at(3);
        assert!(matches!(
            marker.rotation(),
            Err(StateError::RotationUnset { compass, .. }) if compass.get() == 3
        ));

        marker.set_rotation(RotationDirection::Clockwise);
        assert_eq!(marker.rotation(), Ok(RotationDirection::Clockwise));
    }

    #[test]
    fn marker_sits_on_the_ring_opposite_its_bearing() {
        let north = marker_at(0).relative_position();
        assert!(north.x.abs() < 1e-9);
        assert!((north.y + EncounterConfig::MARKER_RING_RADIUS).abs() < 1e-9);

        let south = marker_at(4).relative_position();
        assert!((south.y - EncounterConfig::MARKER_RING_RADIUS).abs() < 1e-9);
    }

    #[test]
    fn parses_rotation_direction() {
        assert_eq!(
            "Clockwise".parse::<RotationDirection>(),
            Ok(RotationDirection::Clockwise)
        );
        assert_eq!(
            "counterclockwise".parse::<RotationDirection>(),
            Ok(RotationDirection::Counterclockwise)
        );
    }
}
