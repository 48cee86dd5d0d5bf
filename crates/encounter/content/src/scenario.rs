//! Recorded encounter data: variables set by upstream log processing and the
//! entities telemetry reports.
use std::collections::BTreeMap;
use std::fmt;

use encounter_core::{ActorId, EntitySnapshot, ParseActorIdError, Vec2};

/// A scalar variable value; scenario files may write numbers unquoted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Literal {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Encounter-scoped variables keyed by name.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VariableSpec {
    pub scalars: BTreeMap<String, Literal>,
    pub lists: BTreeMap<String, Vec<Literal>>,
    pub maps: BTreeMap<String, BTreeMap<String, Literal>>,
}

/// One entity as telemetry would report it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitySpec {
    /// Hexadecimal actor id.
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub job: String,
    pub x: f64,
    pub y: f64,
}

impl EntitySpec {
    /// # Errors
    ///
    /// Returns [`ParseActorIdError`] when `id` is not a hexadecimal id.
    pub fn to_snapshot(&self) -> Result<EntitySnapshot, ParseActorIdError> {
        Ok(EntitySnapshot {
            id: self.id.parse::<ActorId>()?,
            name: self.name.clone(),
            job: self.job.clone(),
            position: Vec2::new(self.x, self.y),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Scenario {
    pub variables: VariableSpec,
    pub entities: Vec<EntitySpec>,
}

impl Scenario {
    /// # Errors
    ///
    /// Fails on the first entity whose id does not parse.
    pub fn snapshots(&self) -> Result<Vec<EntitySnapshot>, ParseActorIdError> {
        self.entities.iter().map(EntitySpec::to_snapshot).collect()
    }
}
