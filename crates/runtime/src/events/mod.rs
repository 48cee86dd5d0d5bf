//! Inbound event records and their decoded form.
mod record;

pub use record::{Command, Event, EventRecord, RecordError, parse_stream};
