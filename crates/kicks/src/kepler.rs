//! Kepler's third law in CGS units
//!
//! Bidirectional conversion between orbital period and binary separation.
//! The two functions are mutual inverses up to floating-point precision.

use std::f64::consts::PI;

use units::GRAVITATIONAL_CONSTANT;

use crate::error::KickError;

fn check_positive(parameter: &'static str, value: f64) -> Result<(), KickError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(KickError::Domain { parameter, value });
    }
    Ok(())
}

/// Orbital period in seconds for a binary with separation `a` (cm) and
/// component masses `m1`, `m2` (g).
///
/// `P = 2π sqrt(a³ / (G (m1 + m2)))`
///
/// Non-positive or non-finite input is a domain error rather than a silent
/// NaN, so a bad value fails at the call site instead of three stages later.
pub fn period_from_separation(a: f64, m1: f64, m2: f64) -> Result<f64, KickError> {
    check_positive("separation", a)?;
    check_positive("m1", m1)?;
    check_positive("m2", m2)?;

    Ok(2.0 * PI * (a.powi(3) / (GRAVITATIONAL_CONSTANT * (m1 + m2))).sqrt())
}

/// Binary separation in cm for a binary with orbital period `p` (s) and
/// component masses `m1`, `m2` (g).
///
/// `a = (G (m1 + m2) (P / 2π)²)^(1/3)`
pub fn separation_from_period(p: f64, m1: f64, m2: f64) -> Result<f64, KickError> {
    check_positive("period", p)?;
    check_positive("m1", m1)?;
    check_positive("m2", m2)?;

    Ok((GRAVITATIONAL_CONSTANT * (m1 + m2) * (p / (2.0 * PI)).powi(2)).powf(1.0 / 3.0))
}
