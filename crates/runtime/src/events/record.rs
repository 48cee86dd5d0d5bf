//! `key=value` event records.
//!
//! One record is a block of lines; each line holds one `key=value` pair.
//! Keys are trimmed and lower-cased, values trimmed. Lines without `=` are
//! ignored. In a stream, records are separated by blank lines.
use std::collections::BTreeMap;

use encounter_core::{ActorId, CastEvent, EncounterError, ErrorSeverity, RotationDirection, Vec2};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("record has no '{0}' field")]
    MissingField(&'static str),

    #[error("field '{field}' has malformed value '{value}'")]
    MalformedField { field: &'static str, value: String },

    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}

impl EncounterError for RecordError {
    /// A record that does not decode loses only itself.
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "RECORD_MISSING_FIELD",
            Self::MalformedField { .. } => "RECORD_MALFORMED_FIELD",
            Self::UnknownCommand(_) => "RECORD_UNKNOWN_COMMAND",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Command {
    /// Start a new encounter attempt from the recorded variables.
    Init,
    /// Judge one boss cast.
    #[strum(to_string = "cast", serialize = "parse")]
    Cast,
    /// Record a marker's rotation direction.
    Record,
    /// Move an entity in the telemetry store.
    Position,
}

/// One decoded event.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Init,
    Cast(CastEvent),
    Record {
        marker: ActorId,
        direction: RotationDirection,
    },
    Position {
        id: ActorId,
        position: Vec2,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventRecord {
    fields: BTreeMap<String, String>,
}

impl EventRecord {
    pub fn parse(text: &str) -> Self {
        let fields = text
            .lines()
            .filter_map(|line| line.split_once('='))
            .map(|(key, value)| (key.trim().to_lowercase(), value.trim().to_string()))
            .collect();
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn require(&self, field: &'static str) -> Result<&str, RecordError> {
        self.get(field).ok_or(RecordError::MissingField(field))
    }

    pub fn command(&self) -> Result<Command, RecordError> {
        let value = self.require("command")?;
        value
            .parse()
            .map_err(|_| RecordError::UnknownCommand(value.to_string()))
    }

    /// Decodes the record into an [`Event`].
    ///
    /// # Errors
    ///
    /// Returns a [`RecordError`] when the command is unknown, a required field
    /// is missing, or a field does not parse.
    pub fn to_event(&self) -> Result<Event, RecordError> {
        Ok(match self.command()? {
            Command::Init => Event::Init,
            Command::Cast => Event::Cast(self.cast()?),
            Command::Record => Event::Record {
                marker: parse_id("marker", self.require("marker")?)?,
                direction: {
                    let value = self.require("rotation")?;
                    value.parse().map_err(|_| malformed("rotation", value))?
                },
            },
            Command::Position => Event::Position {
                id: parse_id("id", self.require("id")?)?,
                position: Vec2::new(self.coordinate("x")?, self.coordinate("y")?),
            },
        })
    }

    fn cast(&self) -> Result<CastEvent, RecordError> {
        let ability = self.require("ability")?;
        let ability = u32::from_str_radix(strip_hex_prefix(ability), 16)
            .map_err(|_| malformed("ability", ability))?;
        let count = self.require("count")?;
        let count = count.parse().map_err(|_| malformed("count", count))?;
        let target = match self.get("target") {
            Some(value) if !value.is_empty() => Some(parse_id("target", value)?),
            _ => None,
        };
        let others = self
            .get("others")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| parse_id("others", id))
            .collect::<Result<_, _>>()?;
        Ok(CastEvent {
            ability,
            count,
            target,
            others,
        })
    }

    fn coordinate(&self, field: &'static str) -> Result<f64, RecordError> {
        let value = self.require(field)?;
        value.parse().map_err(|_| malformed(field, value))
    }
}

/// Splits a stream into records at blank lines.
pub fn parse_stream(text: &str) -> Vec<EventRecord> {
    let mut records = Vec::new();
    let mut block = String::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            push_block(&mut records, &mut block);
        } else {
            block.push_str(line);
            block.push('\n');
        }
    }
    push_block(&mut records, &mut block);
    records
}

fn push_block(records: &mut Vec<EventRecord>, block: &mut String) {
    let record = EventRecord::parse(block);
    if !record.is_empty() {
        records.push(record);
    }
    block.clear();
}

fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

fn parse_id(field: &'static str, value: &str) -> Result<ActorId, RecordError> {
    value.parse().map_err(|_| malformed(field, value))
}

fn malformed(field: &'static str, value: &str) -> RecordError {
    RecordError::MalformedField {
        field,
        value: value.to_string(),
    }
}
