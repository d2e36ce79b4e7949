use thiserror::Error;

/// Errors raised by the kick study pipeline.
///
/// Numerical failures inside the orbit solver (unbound orbits, negative
/// eccentricity radicands) are not errors; they classify as
/// [`OrbitOutcome::Disrupted`](crate::orbit::OrbitOutcome) and never surface
/// here. Everything in this enum aborts the stage that produced it.
#[derive(Debug, Error)]
pub enum KickError {
    /// A configuration value failed validation. Carries the offending
    /// parameter name so the run can be fixed without digging through logs.
    #[error("invalid configuration parameter `{parameter}`: {reason}")]
    Config {
        parameter: &'static str,
        reason: String,
    },

    /// A Kepler relation was called outside its domain.
    #[error("kepler relation out of domain: `{parameter}` must be positive and finite, got {value}")]
    Domain { parameter: &'static str, value: f64 },

    /// Grid construction preconditions failed. The population results remain
    /// valid when this is returned; only the grid is unavailable.
    #[error("probability grid construction failed: {0}")]
    Grid(String),

    #[error("failed to read configuration file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration file")]
    Yaml(#[from] serde_yaml::Error),
}

impl KickError {
    pub(crate) fn config(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::Config {
            parameter,
            reason: reason.into(),
        }
    }
}
