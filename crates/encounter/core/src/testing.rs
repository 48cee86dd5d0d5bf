//! Shared fixtures for unit tests.
use std::collections::{BTreeMap, HashMap};

use crate::env::{EntitySnapshot, TelemetryOracle};
use crate::geometry::Vec2;
use crate::roster::{Roster, RosterInput, RosterResolver};
use crate::state::{ActorId, Compass};

pub const PARTY_IDS: [ActorId; 8] = [
    ActorId(0x1001),
    ActorId(0x1002),
    ActorId(0x1003),
    ActorId(0x1004),
    ActorId(0x1005),
    ActorId(0x1006),
    ActorId(0x1007),
    ActorId(0x1008),
];

const JOBS: [&str; 8] = ["WAR", "PLD", "WHM", "SCH", "SAM", "DRG", "BRD", "BLM"];

/// MT ice-tank, ST mid-tank, H1 long-high, H2 long-low,
/// D1 short-high, D2 short-low, D3 mid-dps, D4 long-dps.
pub const ICE_TANK_STATUSES: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Same as [`ICE_TANK_STATUSES`] with MT short-tank and D4 ice-dps.
pub const ICE_DPS_STATUSES: [u8; 8] = [0, 2, 3, 4, 5, 6, 7, 9];

pub fn marker_id(compass: Compass) -> ActorId {
    ActorId(0x4000 + u32::from(compass.get()))
}

pub fn input(statuses: [u8; 8], rotation: i64) -> RosterInput {
    RosterInput {
        rotation,
        party: PARTY_IDS.to_vec(),
        statuses: statuses.to_vec(),
        markers: Compass::all().map(|c| (c, marker_id(c))).collect::<BTreeMap<_, _>>(),
    }
}

pub fn standard_input() -> RosterInput {
    input(ICE_TANK_STATUSES, 0)
}

pub fn standard_roster() -> Roster {
    RosterResolver::resolve(&standard_input(), &FixedTelemetry::party()).unwrap()
}

/// Telemetry backed by a plain map; positions are set per test.
#[derive(Clone, Debug, Default)]
pub struct FixedTelemetry {
    entities: HashMap<ActorId, EntitySnapshot>,
}

impl FixedTelemetry {
    /// Whole party standing on the arena center.
    pub fn party() -> Self {
        let entities = PARTY_IDS
            .iter()
            .zip(JOBS)
            .enumerate()
            .map(|(slot, (&id, job))| {
                let snapshot = EntitySnapshot {
                    id,
                    name: format!("Player {}", slot + 1),
                    job: job.to_string(),
                    position: Vec2::new(100.0, 100.0),
                };
                (id, snapshot)
            })
            .collect();
        Self { entities }
    }

    pub fn remove(&mut self, id: ActorId) {
        self.entities.remove(&id);
    }

    pub fn place_world(&mut self, id: ActorId, x: f64, y: f64) {
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.position = Vec2::new(x, y);
        }
    }

    /// Places a player `radius` from the center, `deviation` radians off the
    /// bearing of `compass`.
    pub fn place(&mut self, id: ActorId, compass: Compass, radius: f64, deviation: f64) {
        let bearing = compass.bearing() + deviation;
        self.place_world(
            id,
            100.0 + radius * bearing.sin(),
            100.0 + radius * bearing.cos(),
        );
    }
}

impl TelemetryOracle for FixedTelemetry {
    fn entity(&self, id: ActorId) -> Option<EntitySnapshot> {
        self.entities.get(&id).cloned()
    }
}
