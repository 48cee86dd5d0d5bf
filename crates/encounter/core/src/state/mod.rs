//! Identity and position primitives shared by every layer.
mod common;

pub use common::{ActorId, Compass, ParseActorIdError};
