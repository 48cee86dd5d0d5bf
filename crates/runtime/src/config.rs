//! Runtime configuration structures and loaders.

use std::env;

use encounter_core::EncounterConfig;

/// Names of the encounter variables the init step reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableKeys {
    /// Scalar: compass steps between absolute north and the rotation's north.
    pub rotation: String,
    /// List: eight player ids in party order.
    pub party: String,
    /// List: eight status codes parallel to `party`.
    pub statuses: String,
    /// Map: marker id to compass position.
    pub markers: String,
}

impl Default for VariableKeys {
    fn default() -> Self {
        Self {
            rotation: "rotation".into(),
            party: "party".into(),
            statuses: "statuses".into(),
            markers: "markers".into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuntimeConfig {
    pub encounter: EncounterConfig,
    pub variables: VariableKeys,
}

impl RuntimeConfig {
    pub fn new(encounter: EncounterConfig, variables: VariableKeys) -> Self {
        Self {
            encounter,
            variables,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `POLICE_ABILITY_CAP` - Diagnoses shown per ability kind (default: 3)
    /// - `POLICE_TOTAL_CAP` - Diagnoses shown per attempt (default: 5)
    /// - `POLICE_VAR_ROTATION` - Rotation variable name (default: `rotation`)
    /// - `POLICE_VAR_PARTY` - Party list variable name (default: `party`)
    /// - `POLICE_VAR_STATUSES` - Status list variable name (default: `statuses`)
    /// - `POLICE_VAR_MARKERS` - Marker map variable name (default: `markers`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(cap) = read("POLICE_ABILITY_CAP").and_then(|v| v.trim().parse().ok()) {
            config.encounter.ability_cap = cap;
        }
        if let Some(cap) = read("POLICE_TOTAL_CAP").and_then(|v| v.trim().parse().ok()) {
            config.encounter.total_cap = cap;
        }

        let keys = &mut config.variables;
        for (var, slot) in [
            ("POLICE_VAR_ROTATION", &mut keys.rotation),
            ("POLICE_VAR_PARTY", &mut keys.party),
            ("POLICE_VAR_STATUSES", &mut keys.statuses),
            ("POLICE_VAR_MARKERS", &mut keys.markers),
        ] {
            if let Some(name) = read(var) {
                *slot = name.trim().to_string();
            }
        }

        config
    }
}
