use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Kilometers to centimeters
pub const KM_TO_CM: f64 = 1.0e5;

/// A physical velocity quantity using f64 precision.
///
/// The `Velocity` struct represents velocities with cm/s as the base unit.
/// Kick strengths are configured in km/s, the customary unit for natal kick
/// distributions, and converted at the boundary.
///
/// # Examples
///
/// ```rust
/// use units::Velocity;
///
/// let sigma = Velocity::from_km_per_sec(265.0);
/// assert_eq!(sigma.to_cm_per_sec(), 2.65e7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: cm/s

impl Velocity {
    /// Creates a zero velocity value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Velocity` from a value in cm/s.
    pub fn from_cm_per_sec(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Velocity` from a value in km/s.
    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value * KM_TO_CM)
    }

    /// Returns the velocity in cm/s.
    pub fn to_cm_per_sec(&self) -> f64 {
        self.0
    }

    /// Converts the velocity to km/s.
    pub fn to_km_per_sec(&self) -> f64 {
        self.0 / KM_TO_CM
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}
