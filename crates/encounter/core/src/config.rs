/// Encounter constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterConfig {
    /// Diagnoses surfaced per ability kind within one attempt.
    pub ability_cap: u32,
    /// Diagnoses surfaced across all ability kinds within one attempt.
    pub total_cap: u32,
}

impl EncounterConfig {
    // ===== compile-time constants =====
    pub const PARTY_SIZE: usize = 8;
    /// Arena center in world coordinates.
    pub const CENTER: (f64, f64) = (100.0, 100.0);
    /// Distance of each marker from the arena center.
    pub const MARKER_RING_RADIUS: f64 = 9.5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ABILITY_CAP: u32 = 3;
    pub const DEFAULT_TOTAL_CAP: u32 = 5;

    pub fn new() -> Self {
        Self {
            ability_cap: Self::DEFAULT_ABILITY_CAP,
            total_cap: Self::DEFAULT_TOTAL_CAP,
        }
    }

    pub fn with_caps(ability_cap: u32, total_cap: u32) -> Self {
        Self {
            ability_cap,
            total_cap,
        }
    }
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self::new()
    }
}
