use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Newtonian gravitational constant in CGS units (cm³ g⁻¹ s⁻²)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-8;

/// Heliocentric gravitational parameter GM☉ in CGS units (cm³ s⁻²)
///
/// GM☉ is known to far better precision than G and M☉ separately, so the
/// solar mass is derived from it rather than quoted independently.
pub const GM_SUN: f64 = 1.3271244e26;

/// Mass of the Sun in grams, derived from GM☉ / G
pub const SOLAR_MASS_G: f64 = GM_SUN / GRAVITATIONAL_CONSTANT;

/// A physical mass quantity using f64 precision.
///
/// The `Mass` struct represents mass values with grams as the base unit,
/// the natural choice for the CGS orbital-mechanics formulas in this
/// workspace. Inputs from configuration files arrive in solar masses and
/// are converted at the boundary.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let primary = Mass::from_solar_masses(10.0);
/// assert!(primary.to_grams() > 1.9e34);
///
/// let same = Mass::from_grams(primary.to_grams());
/// assert_eq!(same, primary);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: grams

impl Mass {
    /// Creates a zero mass value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Mass` from a value in grams.
    pub fn from_grams(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value * SOLAR_MASS_G)
    }

    /// Returns the mass in grams.
    pub fn to_grams(&self) -> f64 {
        self.0
    }

    /// Converts the mass to solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0 / SOLAR_MASS_G
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        Mass(self * rhs.0)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}
