//! Event-driven driver around [`Session`].
//!
//! The runtime owns the oracles and the output sink, decodes inbound records,
//! and keeps at most one session alive. An init record discards the current
//! session before building the next, so a failed init leaves none.
use std::collections::BTreeMap;
use std::str::FromStr;

use encounter_core::{
    ActorId, CastEvent, CastOutcome, Compass, ConfigurationError, EncounterError, JudgeError,
    MissingDataError, RosterInput, RotationDirection, Session, TelemetryOracle, VariableOracle,
};

use crate::api::{Result, RuntimeError};
use crate::config::RuntimeConfig;
use crate::events::{Command, Event, EventRecord, RecordError};
use crate::oracle::InMemoryTelemetry;
use crate::sink::DiagnosticSink;

/// What [`Runtime::ingest`] did with one record.
#[derive(Clone, Debug, PartialEq)]
pub enum IngestOutcome {
    /// A new session replaced the previous one.
    Started,
    Cast(CastOutcome),
    /// The cast referenced data that could not be resolved; nothing was reported.
    Aborted(MissingDataError),
    /// A marker rotation was recorded.
    Recorded,
    /// An entity moved in the telemetry store.
    Moved,
    /// The record did not decode and was skipped.
    Rejected(RecordError),
    /// The record needs no action from the runtime.
    Ignored,
}

pub struct Runtime<T, V, S> {
    config: RuntimeConfig,
    telemetry: T,
    variables: V,
    sink: S,
    session: Option<Session>,
}

impl<T, V, S> Runtime<T, V, S>
where
    T: TelemetryOracle,
    V: VariableOracle,
    S: DiagnosticSink,
{
    pub fn new(config: RuntimeConfig, telemetry: T, variables: V, sink: S) -> Self {
        Self {
            config,
            telemetry,
            variables,
            sink,
            session: None,
        }
    }

    /// Decodes and handles one record.
    ///
    /// # Errors
    ///
    /// See [`handle`](Self::handle). Undecodable records fail with
    /// [`RuntimeError::Record`]; [`replay`](Runtime::replay) skips them instead.
    pub fn ingest(&mut self, record: &EventRecord) -> Result<IngestOutcome> {
        let event = record.to_event()?;
        self.handle(event)
    }

    /// # Errors
    ///
    /// - [`RuntimeError::Configuration`] when init variables do not describe a party
    /// - [`RuntimeError::State`] for judge or marker inconsistencies
    /// - [`RuntimeError::NoSession`] for a cast or record before any init
    /// - [`RuntimeError::Sink`] when a surfaced diagnosis cannot be written
    pub fn handle(&mut self, event: Event) -> Result<IngestOutcome> {
        match event {
            Event::Init => self.init(),
            Event::Cast(cast) => self.cast(&cast),
            Event::Record { marker, direction } => self.record(marker, direction),
            Event::Position { id, .. } => {
                tracing::debug!(entity = %id, "position update left to the telemetry owner");
                Ok(IngestOutcome::Ignored)
            }
        }
    }

    fn init(&mut self) -> Result<IngestOutcome> {
        self.session = None;
        let input = self.roster_input()?;
        let session = Session::start(&input, &self.telemetry, &self.config.encounter)?;
        self.session = Some(session);
        Ok(IngestOutcome::Started)
    }

    fn cast(&mut self, cast: &CastEvent) -> Result<IngestOutcome> {
        let session = self
            .session
            .as_mut()
            .ok_or(RuntimeError::NoSession(Command::Cast))?;

        let outcome = match session.judge(cast, &self.telemetry) {
            Ok(outcome) => outcome,
            Err(JudgeError::MissingData(err)) => {
                tracing::warn!(
                    ability = format_args!("{:#06X}", cast.ability),
                    code = err.error_code(),
                    "cast aborted: {err}"
                );
                return Ok(IngestOutcome::Aborted(err));
            }
            Err(JudgeError::State(err)) => return Err(err.into()),
        };

        if let CastOutcome::Reported {
            diagnosis,
            surfaced: true,
        } = &outcome
        {
            let line = diagnosis.to_string();
            tracing::info!(ability = %diagnosis.ability, occurrence = diagnosis.occurrence, "{line}");
            self.sink.emit(&line).map_err(RuntimeError::Sink)?;
        }
        Ok(IngestOutcome::Cast(outcome))
    }

    fn record(&mut self, marker: ActorId, direction: RotationDirection) -> Result<IngestOutcome> {
        let session = self
            .session
            .as_mut()
            .ok_or(RuntimeError::NoSession(Command::Record))?;
        session.record_rotation(marker, direction)?;
        Ok(IngestOutcome::Recorded)
    }

    fn roster_input(&self) -> std::result::Result<RosterInput, ConfigurationError> {
        let keys = &self.config.variables;

        let rotation = self
            .variables
            .scalar(&keys.rotation)
            .ok_or_else(|| ConfigurationError::MissingVariable(keys.rotation.clone()))?;
        let rotation = parse_value(&keys.rotation, &rotation)?;

        let party = self
            .variables
            .list(&keys.party)
            .ok_or_else(|| ConfigurationError::MissingVariable(keys.party.clone()))?
            .iter()
            .map(|id| parse_value::<ActorId>(&keys.party, id))
            .collect::<std::result::Result<_, _>>()?;

        let statuses = self
            .variables
            .list(&keys.statuses)
            .ok_or_else(|| ConfigurationError::MissingVariable(keys.statuses.clone()))?
            .iter()
            .map(|code| parse_value::<u8>(&keys.statuses, code))
            .collect::<std::result::Result<_, _>>()?;

        let entries = self
            .variables
            .map(&keys.markers)
            .ok_or_else(|| ConfigurationError::MissingVariable(keys.markers.clone()))?;
        let mut markers = BTreeMap::new();
        for (id, compass) in entries {
            let id = parse_value::<ActorId>(&keys.markers, &id)?;
            let compass = parse_value::<u8>(&keys.markers, &compass)
                .ok()
                .and_then(Compass::new)
                .ok_or_else(|| malformed(&keys.markers, &compass))?;
            if markers.insert(compass, id).is_some() {
                return Err(ConfigurationError::DuplicateMarkerCompass(compass));
            }
        }

        Ok(RosterInput {
            rotation,
            party,
            statuses,
            markers,
        })
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn telemetry(&self) -> &T {
        &self.telemetry
    }

    pub fn telemetry_mut(&mut self) -> &mut T {
        &mut self.telemetry
    }

    pub fn variables_mut(&mut self) -> &mut V {
        &mut self.variables
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<V, S> Runtime<InMemoryTelemetry, V, S>
where
    V: VariableOracle,
    S: DiagnosticSink,
{
    /// Replays one record against the in-memory telemetry store.
    ///
    /// Unlike [`ingest`](Self::ingest), position records move the entity,
    /// and records that fail to decode are logged and skipped.
    ///
    /// # Errors
    ///
    /// See [`handle`](Self::handle).
    pub fn replay(&mut self, record: &EventRecord) -> Result<IngestOutcome> {
        let event = match record.to_event() {
            Ok(event) => event,
            Err(err) if err.severity().is_recoverable() => {
                tracing::warn!(code = err.error_code(), "record skipped: {err}");
                return Ok(IngestOutcome::Rejected(err));
            }
            Err(err) => return Err(err.into()),
        };

        match event {
            Event::Position { id, position } => {
                if self.telemetry.move_entity(id, position) {
                    Ok(IngestOutcome::Moved)
                } else {
                    tracing::warn!(entity = %id, "position update for unknown entity");
                    Ok(IngestOutcome::Ignored)
                }
            }
            event => self.handle(event),
        }
    }
}

fn parse_value<F: FromStr>(key: &str, value: &str) -> std::result::Result<F, ConfigurationError> {
    value.trim().parse().map_err(|_| malformed(key, value))
}

fn malformed(key: &str, value: &str) -> ConfigurationError {
    ConfigurationError::MalformedVariable {
        key: key.to_string(),
        value: value.to_string(),
    }
}
