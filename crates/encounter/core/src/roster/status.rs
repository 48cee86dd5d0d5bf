//! Status effect catalog and its static lookup tables.

/// Concrete status effect applied to one player.
///
/// The discriminant is the code upstream log processing records (0–9).
/// Names read as `<timer>-<role group>`: tank/healer effects end in `tank`,
/// damage-dealer effects in `dps`.
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
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case")]
#[repr(u8)]
pub enum StatusEffect {
    ShortTank = 0,
    IceTank = 1,
    MidTank = 2,
    LongHighTank = 3,
    LongLowTank = 4,
    ShortHighDps = 5,
    ShortLowDps = 6,
    MidDps = 7,
    LongDps = 8,
    IceDps = 9,
}

impl StatusEffect {
    /// Returns `None` for codes outside the concrete catalog.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::from_repr(code)
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Compass steps from the rotation's north to where this player stands.
    pub const fn relative_offset(self) -> u8 {
        use StatusEffect::*;
        match self {
            ShortTank | IceTank => 4,
            MidTank => 2,
            LongHighTank => 3,
            LongLowTank => 5,
            ShortHighDps => 1,
            ShortLowDps => 7,
            MidDps => 6,
            LongDps | IceDps => 0,
        }
    }
}

/// Fallback category resolved to the first assigned concrete candidate.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case")]
pub enum CompositeStatus {
    ShortOrIceTank,
    LongOrIceDps,
    /// Holder of the ring attack's ice marker.
    IceBearer,
}

impl CompositeStatus {
    /// Candidates in priority order.
    pub const fn preference(self) -> &'static [StatusEffect] {
        match self {
            Self::ShortOrIceTank => &[StatusEffect::ShortTank, StatusEffect::IceTank],
            Self::LongOrIceDps => &[StatusEffect::LongDps, StatusEffect::IceDps],
            Self::IceBearer => &[StatusEffect::IceDps, StatusEffect::IceTank],
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Entry in a target-set table: either a concrete effect or a composite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusRef {
    Concrete(StatusEffect),
    Composite(CompositeStatus),
}

impl From<StatusEffect> for StatusRef {
    fn from(status: StatusEffect) -> Self {
        Self::Concrete(status)
    }
}

impl From<CompositeStatus> for StatusRef {
    fn from(composite: CompositeStatus) -> Self {
        Self::Composite(composite)
    }
}
