use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Scene units per AU-equivalent.
pub const AU_TO_SCENE: f64 = 1.496e8;
/// Scene units per light-year-equivalent.
pub const LIGHT_YEAR_TO_SCENE: f64 = 9.461e12;

/// Bodies are drawn this many times smaller than their equivalent length,
/// otherwise a star would swallow its own planets.
pub const DISPLAY_RADIUS_DIVISOR: f64 = 1e6;

/// A distance in the visualization's scene space.
///
/// The base unit is the raw scene unit. AU and light years are
/// visualization-scaled stand-ins, not physical distances.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(2.0);
/// let radius = Length::from_light_years(1.0).to_display_radius();
///
/// assert_eq!(orbit.to_scene_units(), 2.992e8);
/// assert!(radius < Length::from_light_years(1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: scene units

impl Length {
    /// Creates a zero length value
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from raw scene units.
    pub const fn from_scene_units(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from AU-equivalents.
    pub const fn from_au(value: f64) -> Self {
        Self(value * AU_TO_SCENE)
    }

    /// Creates a new `Length` from light-year-equivalents.
    pub const fn from_light_years(value: f64) -> Self {
        Self(value * LIGHT_YEAR_TO_SCENE)
    }

    /// Returns the length in raw scene units.
    pub const fn to_scene_units(&self) -> f64 {
        self.0
    }

    /// Converts the length to AU-equivalents.
    pub fn to_au(&self) -> f64 {
        self.0 / AU_TO_SCENE
    }

    /// Converts the length to light-year-equivalents.
    pub fn to_light_years(&self) -> f64 {
        self.0 / LIGHT_YEAR_TO_SCENE
    }

    /// Shrinks an equivalent length down to the radius a sphere is drawn with.
    pub fn to_display_radius(&self) -> Length {
        Length(self.0 / DISPLAY_RADIUS_DIVISOR)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Finite and not negative. Zero is allowed.
    pub fn is_valid_extent(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// Returns the minimum of two lengths.
    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 { self } else { other }
    }

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 { self } else { other }
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Neg for Length {
    type Output = Length;

    fn neg(self) -> Length {
        Length(-self.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}
