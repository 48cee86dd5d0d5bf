use strum::IntoEnumIterator;

/// Boss abilities the analyzer listens for, keyed by their game action id.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityKind {
    #[strum(to_string = "Unholy Darkness")]
    UnholyDarkness,
    #[strum(to_string = "Dark Water")]
    DarkWater,
    #[strum(to_string = "Dark Eruption")]
    DarkEruption,
    #[strum(to_string = "Dark Fire")]
    DarkFire,
    #[strum(to_string = "Dark Blizzard")]
    DarkBlizzard,
    #[strum(to_string = "Initial Laser")]
    InitialLaser,
    #[strum(to_string = "Rotating Laser")]
    RotatingLaser,
}

impl AbilityKind {
    pub const fn id(self) -> u32 {
        match self {
            Self::UnholyDarkness => 0x9D55,
            Self::DarkWater => 0x9D4F,
            Self::DarkEruption => 0x9D52,
            Self::DarkFire => 0x9D54,
            Self::DarkBlizzard => 0x9D57,
            Self::InitialLaser => 0x9D2B,
            Self::RotatingLaser => 0x9D64,
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::iter().find(|kind| kind.id() == id)
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Per-kind cast ordinals for the current attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OccurrenceCounter {
    counts: [u32; <AbilityKind as strum::EnumCount>::COUNT],
}

impl OccurrenceCounter {
    /// Counts one more cast and returns its 1-based ordinal.
    pub fn bump(&mut self, kind: AbilityKind) -> u32 {
        let count = &mut self.counts[kind.index()];
        *count += 1;
        *count
    }

    pub fn get(&self, kind: AbilityKind) -> u32 {
        self.counts[kind.index()]
    }
}
