use std::fmt;
use std::str::FromStr;

/// Game entity id for players and markers alike.
///
/// Log lines carry ids as eight hexadecimal digits; `Display` renders them the
/// same way so diagnostics can be matched back to the raw log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a hexadecimal actor id")]
pub struct ParseActorIdError(pub String);

impl FromStr for ActorId {
    type Err = ParseActorIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        u32::from_str_radix(digits, 16)
            .map(ActorId)
            .map_err(|_| ParseActorIdError(s.to_string()))
    }
}

/// One of eight positions around the arena center, 45° apart.
///
/// Arithmetic is modulo 8. Bearings are measured from the map's +y axis, so
/// compass 0 faces +y and each step turns by π/4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Compass(u8);

impl Compass {
    pub const COUNT: usize = 8;

    /// Returns `None` when `value` is outside 0..8.
    pub const fn new(value: u8) -> Option<Self> {
        if (value as usize) < Self::COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Builds a compass from any integer, wrapping modulo 8.
    pub const fn wrapping(value: i64) -> Self {
        Self(value.rem_euclid(Self::COUNT as i64) as u8)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Turns by `steps` positions.
    pub const fn offset(self, steps: u8) -> Self {
        Self::wrapping(self.0 as i64 + steps as i64)
    }

    /// Bearing of this position in radians.
    pub fn bearing(self) -> f64 {
        f64::from(self.0) * std::f64::consts::FRAC_PI_4
    }

    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_ids_with_or_without_prefix() {
        assert_eq!("10A3B4C5".parse::<ActorId>(), Ok(ActorId(0x10A3_B4C5)));
        assert_eq!("0x9D55".parse::<ActorId>(), Ok(ActorId(0x9D55)));
        assert!("player".parse::<ActorId>().is_err());
    }

    #[test]
    fn displays_ids_as_eight_hex_digits() {
        assert_eq!(ActorId(0xABC).to_string(), "00000ABC");
    }

    #[test]
    fn compass_wraps_modulo_eight() {
        assert_eq!(Compass::wrapping(9), Compass(1));
        assert_eq!(Compass::wrapping(-1), Compass(7));
        assert_eq!(Compass(6).offset(3), Compass(1));
        assert_eq!(Compass::new(8), None);
    }
}
