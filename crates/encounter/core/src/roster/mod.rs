//! Party model resolved once per encounter attempt.
//!
//! [`RosterResolver`] turns the raw assignment data (party order, status codes,
//! rotation offset, marker placement) into an immutable [`Roster`] holding the
//! eight players and their linked markers.
mod error;
mod player;
mod resolver;
mod role;
mod status;

pub use error::ConfigurationError;
pub use player::{Marker, Player, RotationDirection, SpeedCategory};
pub use resolver::{Roster, RosterInput, RosterResolver};
pub use role::Role;
pub use status::{CompositeStatus, StatusEffect, StatusRef};
