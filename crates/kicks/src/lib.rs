//! Natal kick population synthesis for compact-object binaries.
//!
//! Samples asymmetric natal kicks from configurable distributions, applies
//! the Kalogera (1996) impulsive-kick orbit equations to each, classifies
//! the outcomes as bound or disrupted, and aggregates the bound population
//! into a quantile-bounded (period, eccentricity) probability grid.

pub mod config;
pub mod error;
pub mod grid;
pub mod kepler;
pub mod orbit;
pub mod population;
pub mod sampling;

#[cfg(test)]
mod grid_test;
#[cfg(test)]
mod kepler_test;

pub use config::RunConfig;
pub use error::KickError;
pub use grid::{build_grid, GridCell, GridSpec};
pub use orbit::{post_kick_orbit, BinaryConfig, OrbitOutcome};
pub use population::{evolve_population, BoundOrbit, Population, PopulationSummary};
pub use sampling::{
    sample_kicks, DirectionDistribution, KickSample, KickSamples, StrengthDistribution,
};
