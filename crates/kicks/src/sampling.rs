//! Natal kick sampling
//!
//! Draws kick strengths and directions from the configured distributions.
//! All sampling goes through an explicitly passed, seeded `ChaChaRng` so a
//! fixed seed reproduces the exact same kick population.

use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;

/// Kick strength distribution
///
/// Strengths are in cm/s by the time the distribution is built; the
/// configuration layer converts from km/s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrengthDistribution {
    /// Maxwell–Boltzmann speed distribution with scale parameter sigma.
    ///
    /// Sampled as `sigma * sqrt(X)` where X is chi-squared with 3 degrees
    /// of freedom (the sum of three squared standard normals).
    Maxwell { sigma: f64 },
    /// Uniform over the closed interval [min, max].
    Uniform { min: f64, max: f64 },
}

/// Kick direction distribution
///
/// Angular bounds are fractions of π: the default phi range [0, 2] covers
/// the full azimuth and the default theta range [0, 1] covers the full
/// polar angle. The configuration layer rejects fractions outside those
/// ranges before anything is sampled; the theta draw relies on the cosine
/// being monotonic over its range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DirectionDistribution {
    Uniform {
        min_phi: f64,
        max_phi: f64,
        min_theta: f64,
        max_theta: f64,
    },
}

/// One sampled kick: speed magnitude plus polar and azimuthal angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KickSample {
    pub w: f64,
    pub theta: f64,
    pub phi: f64,
}

/// The full sampled kick population as three index-correlated sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct KickSamples {
    pub w: Vec<f64>,
    pub theta: Vec<f64>,
    pub phi: Vec<f64>,
}

impl KickSamples {
    pub fn len(&self) -> usize {
        self.w.len()
    }

    pub fn is_empty(&self) -> bool {
        self.w.is_empty()
    }

    /// The kick triple at sample index `k`.
    pub fn get(&self, k: usize) -> KickSample {
        KickSample {
            w: self.w[k],
            theta: self.theta[k],
            phi: self.phi[k],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = KickSample> + '_ {
        (0..self.len()).map(|k| self.get(k))
    }
}

/// Sample from a Gaussian (normal) distribution using Box-Muller transform
///
/// # Arguments
/// * `rng` - Random number generator
/// * `mean` - Mean of the distribution
/// * `std_dev` - Standard deviation
pub fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Sample a speed from a Maxwell–Boltzmann distribution with scale `sigma`
///
/// Uses the chi-squared construction: the squared speed is the sum of three
/// squared standard-normal components, so `w = sigma * sqrt(z1² + z2² + z3²)`.
pub fn sample_maxwell(rng: &mut ChaChaRng, sigma: f64) -> f64 {
    let z1 = sample_gaussian(rng, 0.0, 1.0);
    let z2 = sample_gaussian(rng, 0.0, 1.0);
    let z3 = sample_gaussian(rng, 0.0, 1.0);
    sigma * (z1 * z1 + z2 * z2 + z3 * z3).sqrt()
}

/// Sample `n` kicks from the given strength and direction distributions.
///
/// Produces three sequences of length `n` in sampling order: strengths first,
/// then azimuthal angles, then polar angles. The polar angle is drawn by
/// sampling the cosine uniformly (isotropic over the sphere), not by sampling
/// the angle itself uniformly; a uniform angle would over-weight the poles.
///
/// # Arguments
/// * `rng` - Seeded random number generator
/// * `strength` - Kick speed distribution
/// * `direction` - Kick direction distribution
/// * `n` - Number of kicks to draw
pub fn sample_kicks(
    rng: &mut ChaChaRng,
    strength: &StrengthDistribution,
    direction: &DirectionDistribution,
    n: usize,
) -> KickSamples {
    let mut w = Vec::with_capacity(n);
    match *strength {
        StrengthDistribution::Maxwell { sigma } => {
            for _ in 0..n {
                w.push(sample_maxwell(rng, sigma));
            }
        }
        StrengthDistribution::Uniform { min, max } => {
            for _ in 0..n {
                w.push(rng.random_range(min..=max));
            }
        }
    }

    let DirectionDistribution::Uniform {
        min_phi,
        max_phi,
        min_theta,
        max_theta,
    } = *direction;

    let mut phi = Vec::with_capacity(n);
    for _ in 0..n {
        phi.push(rng.random_range(min_phi * PI..=max_phi * PI));
    }

    // theta = acos(2u - 1) with u uniform gives the isotropic solid-angle
    // distribution over [0, π]. Restricting theta to a sub-range means
    // restricting u to the matching cosine interval; u = (1 + cos theta) / 2,
    // and cos is decreasing, so the upper theta bound gives the lower u bound.
    let u_lo = (1.0 + (max_theta * PI).cos()) / 2.0;
    let u_hi = (1.0 + (min_theta * PI).cos()) / 2.0;
    let mut theta = Vec::with_capacity(n);
    for _ in 0..n {
        let u: f64 = rng.random_range(u_lo..=u_hi);
        theta.push((2.0 * u - 1.0).acos());
    }

    KickSamples { w, theta, phi }
}
