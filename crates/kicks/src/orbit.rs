//! Post-kick orbit solver
//!
//! Impulsive-kick orbital mechanics following Kalogera (1996): given the
//! pre-kick binary and one sampled kick, compute the post-kick semi-major
//! axis and eccentricity, or classify the binary as disrupted.
//!
//! # References
//! - Kalogera (1996) - "Orbital Characteristics of Binary Systems after
//!   Asymmetric Supernova Explosions", ApJ 471, 352

use units::GRAVITATIONAL_CONSTANT;

use crate::error::KickError;
use crate::kepler;
use crate::sampling::KickSample;

/// Pre-kick binary configuration, all values in CGS.
///
/// `m1` and `m2` are the pre-collapse component masses; `m_co` is the mass
/// of the compact object that replaces the primary at core collapse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryConfig {
    pub m1: f64,
    pub m2: f64,
    pub separation: f64,
    pub m_co: f64,
}

impl BinaryConfig {
    /// Build a binary configuration, rejecting non-positive or non-finite
    /// masses and separations with the offending parameter named.
    pub fn new(m1: f64, m2: f64, separation: f64, m_co: f64) -> Result<Self, KickError> {
        for (parameter, value) in [
            ("m1", m1),
            ("m2", m2),
            ("separation", separation),
            ("compact_object_mass", m_co),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(KickError::config(
                    parameter,
                    format!("must be positive and finite, got {value}"),
                ));
            }
        }
        Ok(Self {
            m1,
            m2,
            separation,
            m_co,
        })
    }

    /// Relative orbital speed of the components just before the kick,
    /// assuming a circular pre-kick orbit: `sqrt(G (m1 + m2) / a)`.
    pub fn pre_kick_orbital_speed(&self) -> f64 {
        (GRAVITATIONAL_CONSTANT * (self.m1 + self.m2) / self.separation).sqrt()
    }
}

/// Outcome of one kick applied to the binary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitOutcome {
    /// The kick unbound the system.
    Disrupted,
    /// The system survived; post-kick orbital elements in CGS.
    Bound {
        separation: f64,
        eccentricity: f64,
        period: f64,
    },
}

impl OrbitOutcome {
    pub fn is_bound(&self) -> bool {
        matches!(self, OrbitOutcome::Bound { .. })
    }
}

/// Apply one kick to the binary and classify the result.
///
/// Only two kick components enter the post-kick semi-major-axis and
/// eccentricity formulas: the component along the pre-kick orbital motion
/// (`w cos θ`) and the component perpendicular to the orbital plane
/// (`w sin φ sin θ`). The in-plane radial component drops out of the reduced
/// form of the Kalogera (1996) equations and is never computed.
///
/// The bound-case period deliberately uses the pre-kick component masses
/// (m1, m2) in the Kepler relation even though the compact object replaces
/// m1 as the gravitating mass in the orbit equations. This mirrors the
/// convention of the study this module reproduces; a physics reviewer should
/// sign off before changing it.
///
/// Disruption is a classification, not an error: a non-finite or
/// non-positive post-kick semi-major axis, a negative eccentricity radicand,
/// and an eccentricity outside [0, 1] all return
/// [`OrbitOutcome::Disrupted`].
pub fn post_kick_orbit(binary: &BinaryConfig, kick: &KickSample) -> OrbitOutcome {
    let g = GRAVITATIONAL_CONSTANT;
    let v_pre = binary.pre_kick_orbital_speed();
    let a0 = binary.separation;
    let gm_post = g * (binary.m_co + binary.m2);

    let w_y = kick.w * kick.theta.cos();
    let w_z = kick.w * kick.phi.sin() * kick.theta.sin();

    // Kalogera (1996) eqs. (3)-(5), reduced two-component form
    let a_post =
        gm_post / (2.0 * gm_post / a0 - kick.w.powi(2) - v_pre.powi(2) - 2.0 * w_y * v_pre);
    if !a_post.is_finite() || a_post <= 0.0 {
        return OrbitOutcome::Disrupted;
    }

    let radicand = 1.0
        - (w_z.powi(2) + w_y.powi(2) + v_pre.powi(2) + 2.0 * w_y * v_pre) * a0.powi(2)
            / (gm_post * a_post);
    // A kick landing exactly on the circular boundary (e.g. w = 0 with no
    // mass loss) can round the radicand a few ulp below zero; that is a
    // degenerate e = 0 orbit, not a disruption.
    let radicand = if radicand < 0.0 && radicand > -1.0e-12 {
        0.0
    } else {
        radicand
    };
    if radicand < 0.0 {
        return OrbitOutcome::Disrupted;
    }

    let e_post = radicand.sqrt();
    if !e_post.is_finite() || e_post > 1.0 {
        return OrbitOutcome::Disrupted;
    }

    match kepler::period_from_separation(a_post, binary.m1, binary.m2) {
        Ok(period) => OrbitOutcome::Bound {
            separation: a_post,
            eccentricity: e_post,
            period,
        },
        // a_post and the masses are already known positive, so this arm is
        // never taken; a disrupted classification is still safer than a panic.
        Err(_) => OrbitOutcome::Disrupted,
    }
}
