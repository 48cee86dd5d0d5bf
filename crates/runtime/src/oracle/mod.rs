//! In-memory implementations of the `encounter-core` oracle traits.
//!
//! Both stores are filled from a scenario file; telemetry can additionally be
//! updated while events replay. Live game-client integrations implement the
//! same traits elsewhere.
mod telemetry;
mod variables;

pub use telemetry::InMemoryTelemetry;
pub use variables::InMemoryVariables;
