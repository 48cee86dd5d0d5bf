//! Polar coordinates around the arena center.
//!
//! Every geometric judgement works on a player's position expressed relative
//! to [`EncounterConfig::CENTER`] and rotated into the frame of a compass
//! position, so that angle 0 means "on the line that compass position is
//! supposed to hold".
use std::f64::consts::{FRAC_PI_4, PI, TAU};
use std::fmt;

use crate::config::EncounterConfig;
use crate::state::Compass;

/// Planar vector in world units (yalms).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset of a world position from the arena center.
    pub fn from_world(x: f64, y: f64) -> Self {
        let (cx, cy) = EncounterConfig::CENTER;
        Self::new(x - cx, y - cy)
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Wraps an angle into [-π, π).
pub fn wrap_angle(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Radius and bearing relative to a rotated reference frame.
///
/// The angle is always kept wrapped into [-π, π), so its magnitude is the
/// deviation from the frame's facing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolarCoord {
    pub radius: f64,
    pub angle: f64,
}

impl PolarCoord {
    pub fn new(radius: f64, angle: f64) -> Self {
        Self {
            radius,
            angle: wrap_angle(angle),
        }
    }

    /// Converts a center-relative offset, measuring the bearing from +y.
    pub fn from_offset(offset: Vec2) -> Self {
        Self::new(offset.length(), offset.x.atan2(offset.y))
    }

    /// Converts an absolute world position.
    pub fn from_world(x: f64, y: f64) -> Self {
        Self::from_offset(Vec2::from_world(x, y))
    }

    /// Rotates the frame by `steps` compass positions.
    ///
    /// `rotated(-n)` undoes `rotated(n)`.
    #[must_use]
    pub fn rotated(self, steps: i32) -> Self {
        Self::new(self.radius, self.angle - f64::from(steps) * FRAC_PI_4)
    }

    /// Expresses this coordinate in the frame of `compass`.
    #[must_use]
    pub fn rotate_to(self, compass: Compass) -> Self {
        self.rotated(i32::from(compass.get()))
    }

    /// Angle in degrees within [-180, 180).
    pub fn degrees(&self) -> f64 {
        self.angle.to_degrees()
    }

    /// True when the bearing deviates from the frame facing by less than `tolerance` radians.
    pub fn is_aligned(&self, tolerance: f64) -> bool {
        self.angle.abs() < tolerance
    }
}

impl fmt::Display for PolarCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rounded first so that -0.3° prints as +0°.
        let degrees = self.degrees().round();
        let sign = if degrees < 0.0 { '-' } else { '+' };
        write!(f, "{:.1} m, {}{:.0}°", self.radius, sign, degrees.abs())
    }
}
