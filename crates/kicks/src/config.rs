//! Run configuration
//!
//! Deserializes the YAML run file, validates every parameter before any
//! sampling happens, and converts the astronomical input units (M☉, R☉,
//! km/s) into the CGS values the rest of the pipeline consumes.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use units::{Length, Mass, Velocity};

use crate::error::KickError;
use crate::grid::GridSpec;
use crate::orbit::BinaryConfig;
use crate::sampling::{DirectionDistribution, StrengthDistribution};

fn default_max_phi() -> f64 {
    2.0
}

fn default_max_theta() -> f64 {
    1.0
}

fn default_seed() -> u64 {
    42
}

fn default_quantile_min() -> f64 {
    0.01
}

fn default_quantile_max() -> f64 {
    0.99
}

fn default_bin_edges() -> usize {
    50
}

fn default_min_prob() -> f64 {
    1.0e-4
}

/// The full run configuration as read from the YAML file.
///
/// Masses are in solar masses, the separation in solar radii, and kick
/// speeds in km/s; phi and theta bounds are fractions of π.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    pub m1: f64,
    pub m2: f64,
    pub separation: f64,
    pub compact_object_mass: f64,

    pub kick_distribution: String,
    #[serde(default)]
    pub kick_sigma: f64,
    #[serde(default)]
    pub min_kick_value: f64,
    #[serde(default)]
    pub max_kick_value: f64,

    pub kick_direction: String,
    #[serde(default)]
    pub min_phi: f64,
    #[serde(default = "default_max_phi")]
    pub max_phi: f64,
    #[serde(default)]
    pub min_theta: f64,
    #[serde(default = "default_max_theta")]
    pub max_theta: f64,

    pub number_of_cases: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default = "default_quantile_min")]
    pub p_quantile_min: f64,
    #[serde(default = "default_quantile_max")]
    pub p_quantile_max: f64,
    #[serde(default = "default_quantile_min")]
    pub e_quantile_min: f64,
    #[serde(default = "default_quantile_max")]
    pub e_quantile_max: f64,
    #[serde(default = "default_bin_edges")]
    pub p_num: usize,
    #[serde(default = "default_bin_edges")]
    pub e_num: usize,
    #[serde(default = "default_min_prob")]
    pub min_prob: f64,
}

impl RunConfig {
    /// Load a run configuration from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, KickError> {
        let file = File::open(path)?;
        Ok(serde_yaml::from_reader(file)?)
    }

    /// Check every parameter before the run starts. Fails with the name of
    /// the first offending parameter; nothing is sampled when this errors.
    pub fn validate(&self) -> Result<(), KickError> {
        self.binary()?;
        self.strength_distribution()?;
        self.direction_distribution()?;

        if self.number_of_cases == 0 {
            return Err(KickError::config("number_of_cases", "must be at least 1"));
        }

        for (parameter, value) in [
            ("p_quantile_min", self.p_quantile_min),
            ("p_quantile_max", self.p_quantile_max),
            ("e_quantile_min", self.e_quantile_min),
            ("e_quantile_max", self.e_quantile_max),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(KickError::config(
                    parameter,
                    format!("quantile must lie in [0, 1], got {value}"),
                ));
            }
        }
        if self.p_quantile_min >= self.p_quantile_max {
            return Err(KickError::config(
                "p_quantile_min",
                "must be below p_quantile_max",
            ));
        }
        if self.e_quantile_min >= self.e_quantile_max {
            return Err(KickError::config(
                "e_quantile_min",
                "must be below e_quantile_max",
            ));
        }
        if self.p_num < 2 {
            return Err(KickError::config("p_num", "need at least 2 bin edges"));
        }
        if self.e_num < 2 {
            return Err(KickError::config("e_num", "need at least 2 bin edges"));
        }
        if !self.min_prob.is_finite() || self.min_prob < 0.0 {
            return Err(KickError::config(
                "min_prob",
                format!("must be non-negative, got {}", self.min_prob),
            ));
        }

        Ok(())
    }

    /// The pre-kick binary in CGS units.
    pub fn binary(&self) -> Result<BinaryConfig, KickError> {
        BinaryConfig::new(
            Mass::from_solar_masses(self.m1).to_grams(),
            Mass::from_solar_masses(self.m2).to_grams(),
            Length::from_solar_radii(self.separation).to_cm(),
            Mass::from_solar_masses(self.compact_object_mass).to_grams(),
        )
    }

    /// The kick strength distribution with parameters converted to cm/s.
    ///
    /// An unrecognized distribution name is a fatal configuration error.
    pub fn strength_distribution(&self) -> Result<StrengthDistribution, KickError> {
        match self.kick_distribution.as_str() {
            "Maxwell" => {
                if !self.kick_sigma.is_finite() || self.kick_sigma <= 0.0 {
                    return Err(KickError::config(
                        "kick_sigma",
                        format!("must be positive and finite, got {}", self.kick_sigma),
                    ));
                }
                Ok(StrengthDistribution::Maxwell {
                    sigma: Velocity::from_km_per_sec(self.kick_sigma).to_cm_per_sec(),
                })
            }
            "Uniform" => {
                if !self.min_kick_value.is_finite() || !self.max_kick_value.is_finite() {
                    return Err(KickError::config(
                        "min_kick_value",
                        "kick bounds must be finite",
                    ));
                }
                if self.min_kick_value > self.max_kick_value {
                    return Err(KickError::config(
                        "min_kick_value",
                        format!(
                            "must not exceed max_kick_value ({} > {})",
                            self.min_kick_value, self.max_kick_value
                        ),
                    ));
                }
                Ok(StrengthDistribution::Uniform {
                    min: Velocity::from_km_per_sec(self.min_kick_value).to_cm_per_sec(),
                    max: Velocity::from_km_per_sec(self.max_kick_value).to_cm_per_sec(),
                })
            }
            other => Err(KickError::config(
                "kick_distribution",
                format!("unknown distribution `{other}`"),
            )),
        }
    }

    /// The kick direction distribution, bounds still as fractions of π.
    ///
    /// Theta fractions outside [0, 1] are rejected here: the sampler maps
    /// theta bounds through a cosine, which is only monotonic over that
    /// range, so a wider bound would invert the sampled interval.
    pub fn direction_distribution(&self) -> Result<DirectionDistribution, KickError> {
        match self.kick_direction.as_str() {
            "Uniform" => {
                for (parameter, value) in [("min_phi", self.min_phi), ("max_phi", self.max_phi)] {
                    if !(0.0..=2.0).contains(&value) {
                        return Err(KickError::config(
                            parameter,
                            format!("azimuth fraction must lie in [0, 2], got {value}"),
                        ));
                    }
                }
                for (parameter, value) in
                    [("min_theta", self.min_theta), ("max_theta", self.max_theta)]
                {
                    if !(0.0..=1.0).contains(&value) {
                        return Err(KickError::config(
                            parameter,
                            format!("polar fraction must lie in [0, 1], got {value}"),
                        ));
                    }
                }
                if self.min_phi > self.max_phi {
                    return Err(KickError::config("min_phi", "must not exceed max_phi"));
                }
                if self.min_theta > self.max_theta {
                    return Err(KickError::config("min_theta", "must not exceed max_theta"));
                }
                Ok(DirectionDistribution::Uniform {
                    min_phi: self.min_phi,
                    max_phi: self.max_phi,
                    min_theta: self.min_theta,
                    max_theta: self.max_theta,
                })
            }
            other => Err(KickError::config(
                "kick_direction",
                format!("unknown distribution `{other}`"),
            )),
        }
    }

    /// The grid construction parameters.
    pub fn grid_spec(&self) -> GridSpec {
        GridSpec {
            p_quantile_min: self.p_quantile_min,
            p_quantile_max: self.p_quantile_max,
            e_quantile_min: self.e_quantile_min,
            e_quantile_max: self.e_quantile_max,
            p_num: self.p_num,
            e_num: self.e_num,
            min_prob: self.min_prob,
        }
    }
}
