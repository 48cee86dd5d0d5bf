//! Traits describing the data the analyzer reads but does not own.
//!
//! Telemetry answers "where is this entity right now", variables answer
//! "what did upstream log processing record for this attempt". Both are
//! queried synchronously; a miss on telemetry only aborts the current cast.
mod error;
mod telemetry;
mod variables;

pub use error::MissingDataError;
pub use telemetry::{EntitySnapshot, TelemetryOracle};
pub use variables::VariableOracle;
