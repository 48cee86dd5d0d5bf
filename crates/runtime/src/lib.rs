//! Event replay around the encounter core.
//!
//! This crate decodes upstream records, owns the oracle implementations and
//! drives one [`Session`](encounter_core::Session) per attempt. Consumers
//! embed [`Runtime`] and feed it records in arrival order.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the driver
//! - [`api`] exposes the error surface downstream clients handle
//! - [`events`] decodes record blocks into typed events
//! - [`oracle`] provides in-memory telemetry and variable stores
//! - [`sink`] receives surfaced diagnoses
pub mod api;
pub mod config;
pub mod events;
pub mod oracle;
pub mod runtime;
pub mod sink;

pub use api::{Result, RuntimeError};
pub use config::{RuntimeConfig, VariableKeys};
pub use events::{Command, Event, EventRecord, RecordError, parse_stream};
pub use oracle::{InMemoryTelemetry, InMemoryVariables};
pub use runtime::{IngestOutcome, Runtime};
pub use sink::{DiagnosticSink, VecSink, WriterSink};
