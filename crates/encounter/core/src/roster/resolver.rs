use std::collections::{BTreeMap, HashSet};

use arrayvec::ArrayVec;
use strum::{EnumCount, IntoEnumIterator};

use crate::config::EncounterConfig;
use crate::env::TelemetryOracle;
use crate::state::{ActorId, Compass};

use super::{
    CompositeStatus, ConfigurationError, Marker, Player, Role, SpeedCategory, StatusEffect,
    StatusRef,
};

const PARTY: usize = EncounterConfig::PARTY_SIZE;

/// Raw assignment data as recorded by upstream log processing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterInput {
    /// Compass steps between absolute north and the rotation's north.
    pub rotation: i64,
    /// Player ids in party order (MT, ST, H1, H2, D1..D4).
    pub party: Vec<ActorId>,
    /// Status codes parallel to `party`.
    pub statuses: Vec<u8>,
    /// Marker id standing at each compass position.
    pub markers: BTreeMap<Compass, ActorId>,
}

/// Resolved party for one encounter attempt.
///
/// Players are stored by role; markers by compass position. Every compass
/// position holds exactly one player and one marker.
#[derive(Clone, Debug)]
pub struct Roster {
    rotation: Compass,
    players: ArrayVec<Player, PARTY>,
    markers: ArrayVec<Marker, PARTY>,
    by_compass: [usize; PARTY],
    by_status: [Option<usize>; StatusEffect::COUNT],
    composites: [Option<usize>; CompositeStatus::COUNT],
}

/// Builds a [`Roster`] from [`RosterInput`].
pub struct RosterResolver;

impl RosterResolver {
    /// Resolves compass positions, markers and composite statuses.
    ///
    /// Display name and job of each player are fetched from `telemetry` once.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] when the input does not describe
    /// eight distinct players on eight distinct compass positions, each with
    /// a recorded marker.
    pub fn resolve(
        input: &RosterInput,
        telemetry: &dyn TelemetryOracle,
    ) -> Result<Roster, ConfigurationError> {
        check_len("party", input.party.len())?;
        check_len("statuses", input.statuses.len())?;
        let rotation = u8::try_from(input.rotation)
            .ok()
            .and_then(Compass::new)
            .ok_or(ConfigurationError::RotationOutOfRange(input.rotation))?;
        check_markers(&input.markers)?;

        let mut players = ArrayVec::<Player, PARTY>::new();
        let mut markers: [Option<Marker>; PARTY] = Default::default();
        let mut by_compass: [Option<usize>; PARTY] = [None; PARTY];
        let mut by_status = [None; StatusEffect::COUNT];
        let mut seen = HashSet::with_capacity(PARTY);

        let slots = input.party.iter().zip(&input.statuses);
        for ((&id, &code), role) in slots.zip(Role::iter()) {
            let slot = role.index();
            if !seen.insert(id) {
                return Err(ConfigurationError::DuplicatePlayer(id));
            }
            let status = StatusEffect::from_code(code)
                .ok_or(ConfigurationError::UnknownStatus { slot, code })?;
            let relative = status.relative_offset();
            let compass = rotation.offset(relative);

            if let Some(other) = by_compass[compass.index()] {
                let first: &Player = &players[other];
                return Err(ConfigurationError::DuplicateCompass {
                    compass,
                    first: first.id,
                    second: id,
                });
            }
            let marker_id = *input
                .markers
                .get(&compass)
                .ok_or(ConfigurationError::MissingMarker(compass))?;
            let identity = telemetry
                .require(id)
                .map_err(ConfigurationError::Identity)?;
            tracing::debug!(
                player = %id,
                %role,
                %status,
                %compass,
                marker = %marker_id,
                "resolved party slot"
            );

            markers[compass.index()] = Some(Marker::new(
                marker_id,
                compass,
                SpeedCategory::from_offset(relative),
                id,
            ));
            by_compass[compass.index()] = Some(slot);
            by_status[status.index()] = Some(slot);
            players.push(Player {
                id,
                name: identity.name,
                job: identity.job,
                status,
                role,
                compass,
                marker: marker_id,
            });
        }

        let mut composites = [None; CompositeStatus::COUNT];
        for composite in CompositeStatus::iter() {
            composites[composite.index()] = composite
                .preference()
                .iter()
                .find_map(|status| by_status[status.index()]);
        }

        // Eight distinct slots on eight compass positions fill every entry.
        let by_compass = by_compass.map(|slot| slot.unwrap_or_default());
        let markers = markers.into_iter().flatten().collect();

        Ok(Roster {
            rotation,
            players,
            markers,
            by_compass,
            by_status,
            composites,
        })
    }
}

fn check_len(field: &'static str, len: usize) -> Result<(), ConfigurationError> {
    if len == PARTY {
        Ok(())
    } else {
        Err(ConfigurationError::WrongPartySize {
            field,
            len,
            expected: PARTY,
        })
    }
}

fn check_markers(markers: &BTreeMap<Compass, ActorId>) -> Result<(), ConfigurationError> {
    let mut seen = HashSet::with_capacity(markers.len());
    for &id in markers.values() {
        if !seen.insert(id) {
            return Err(ConfigurationError::DuplicateMarker(id));
        }
    }
    Ok(())
}

impl Roster {
    pub fn rotation(&self) -> Compass {
        self.rotation
    }

    /// Players ordered by role.
    pub fn party(&self) -> &[Player] {
        &self.players
    }

    /// Players ordered by compass position.
    pub fn players_by_compass(&self) -> impl Iterator<Item = &Player> + '_ {
        self.by_compass.iter().map(|&slot| &self.players[slot])
    }

    /// Markers ordered by compass position.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn player(&self, id: ActorId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    pub fn by_role(&self, role: Role) -> &Player {
        &self.players[role.index()]
    }

    pub fn marker(&self, id: ActorId) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.id == id)
    }

    pub fn marker_mut(&mut self, id: ActorId) -> Option<&mut Marker> {
        self.markers.iter_mut().find(|marker| marker.id == id)
    }

    /// The player holding a concrete status, or the winner of a composite.
    pub fn by_status(&self, status: impl Into<StatusRef>) -> Option<&Player> {
        let slot = match status.into() {
            StatusRef::Concrete(status) => self.by_status[status.index()],
            StatusRef::Composite(composite) => self.composites[composite.index()],
        };
        slot.map(|slot| &self.players[slot])
    }

    pub fn is_assigned(&self, status: StatusEffect) -> bool {
        self.by_status[status.index()].is_some()
    }
}
