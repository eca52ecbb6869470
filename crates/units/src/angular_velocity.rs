use serde::{Deserialize, Serialize};

/// Angular velocity in radians per simulation tick.
///
/// The simulation is tick-driven rather than wall-clock driven, so every
/// rotation rate is expressed per tick.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AngularVelocity(f64);

impl AngularVelocity {
    pub const fn zero() -> Self {
        Self(0.0)
    }

    pub const fn from_rad_per_tick(value: f64) -> Self {
        Self(value)
    }

    pub const fn to_rad_per_tick(&self) -> f64 {
        self.0
    }

    /// Total angle swept after `ticks` ticks.
    pub fn angle_after(&self, ticks: u64) -> f64 {
        self.0 * ticks as f64
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}
