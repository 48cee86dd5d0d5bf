use crate::geometry::Vec2;
use crate::state::ActorId;

use super::MissingDataError;

/// Live view of one entity as reported by the game client.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitySnapshot {
    pub id: ActorId,
    pub name: String,
    /// Short job label, e.g. `WAR`.
    pub job: String,
    /// Absolute world position.
    pub position: Vec2,
}

/// Oracle resolving entity ids to their current telemetry.
pub trait TelemetryOracle {
    fn entity(&self, id: ActorId) -> Option<EntitySnapshot>;

    /// Like [`entity`](Self::entity), but a miss is a [`MissingDataError`].
    fn require(&self, id: ActorId) -> Result<EntitySnapshot, MissingDataError> {
        self.entity(id).ok_or(MissingDataError::EntityNotFound(id))
    }
}

impl<T: TelemetryOracle + ?Sized> TelemetryOracle for &T {
    fn entity(&self, id: ActorId) -> Option<EntitySnapshot> {
        (**self).entity(id)
    }
}
