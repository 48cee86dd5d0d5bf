//! Data-driven encounter scenarios.
//!
//! A scenario is what upstream log processing would have recorded for one
//! attempt: the encounter variables the init step reads, and the entities
//! telemetry reports. Scenarios feed the runtime's in-memory oracles and never
//! appear in session state.

pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::{EntitySpec, Literal, Scenario, VariableSpec};

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, ScenarioLoader};
