/// Canonical party slot. Party order index `i` is role `i`.
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
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Role {
    MT = 0,
    ST = 1,
    H1 = 2,
    H2 = 3,
    D1 = 4,
    D2 = 5,
    D3 = 6,
    D4 = 7,
}

impl Role {
    pub const fn index(self) -> usize {
        self as usize
    }
}
