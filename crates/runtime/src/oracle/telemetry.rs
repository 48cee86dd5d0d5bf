use std::collections::HashMap;

use encounter_content::Scenario;
use encounter_core::{ActorId, EntitySnapshot, ParseActorIdError, TelemetryOracle, Vec2};

/// Telemetry backed by a map of the last known entity snapshots.
#[derive(Clone, Debug, Default)]
pub struct InMemoryTelemetry {
    entities: HashMap<ActorId, EntitySnapshot>,
}

impl InMemoryTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Fails on the first scenario entity whose id does not parse.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, ParseActorIdError> {
        let mut telemetry = Self::new();
        for snapshot in scenario.snapshots()? {
            telemetry.insert(snapshot);
        }
        Ok(telemetry)
    }

    pub fn insert(&mut self, snapshot: EntitySnapshot) {
        self.entities.insert(snapshot.id, snapshot);
    }

    /// Moves a known entity. Returns `false` if the id is unknown.
    pub fn move_entity(&mut self, id: ActorId, position: Vec2) -> bool {
        match self.entities.get_mut(&id) {
            Some(entity) => {
                entity.position = position;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl TelemetryOracle for InMemoryTelemetry {
    fn entity(&self, id: ActorId) -> Option<EntitySnapshot> {
        self.entities.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(id: u32) -> EntitySnapshot {
        EntitySnapshot {
            id: ActorId(id),
            name: format!("Entity {id:X}"),
            job: "WHM".into(),
            position: Vec2::new(100.0, 100.0),
        }
    }

    #[test]
    fn moves_known_entities_only() {
        let mut telemetry = InMemoryTelemetry::new();
        telemetry.insert(snapshot(0x10));

        assert!(telemetry.move_entity(ActorId(0x10), Vec2::new(90.0, 110.0)));
        assert!(!telemetry.move_entity(ActorId(0x11), Vec2::new(0.0, 0.0)));
        assert_eq!(
            telemetry.entity(ActorId(0x10)).map(|e| e.position),
            Some(Vec2::new(90.0, 110.0))
        );
        assert!(telemetry.require(ActorId(0x11)).is_err());
    }
}
