use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Solar radius in centimeters (nominal IAU value)
pub const SOLAR_RADIUS_CM: f64 = 6.957e10;

/// Astronomical unit in centimeters
pub const AU_TO_CM: f64 = 1.495978707e13;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with centimeters as the base
/// unit. Binary separations are configured in solar radii and converted at
/// the boundary; all orbital formulas work in centimeters.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let separation = Length::from_solar_radii(100.0);
/// let cm = separation.to_cm();
///
/// let wide = Length::from_au(1.0);
/// assert!(wide.to_solar_radii() > 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: centimeters

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in centimeters.
    pub fn from_cm(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in solar radii.
    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_CM)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value * AU_TO_CM)
    }

    /// Returns the length in centimeters.
    pub fn to_cm(&self) -> f64 {
        self.0
    }

    /// Converts the length to solar radii.
    pub fn to_solar_radii(&self) -> f64 {
        self.0 / SOLAR_RADIUS_CM
    }

    /// Converts the length to astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0 / AU_TO_CM
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

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        Length(self * rhs.0)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}
