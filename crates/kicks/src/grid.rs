//! Probability grid builder
//!
//! Discretizes the bound population's (period, eccentricity) pairs into a 2D
//! probability mass grid bounded by sample quantiles rather than extrema, so
//! a handful of extreme survivors cannot stretch the grid into empty space.

use crate::error::KickError;
use crate::kepler;
use crate::orbit::BinaryConfig;
use crate::population::BoundOrbit;

/// Grid construction parameters.
///
/// Quantiles are fractions in [0, 1]; `p_num` and `e_num` count bin *edges*,
/// so the grid has `(p_num - 1) * (e_num - 1)` cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub p_quantile_min: f64,
    pub p_quantile_max: f64,
    pub e_quantile_min: f64,
    pub e_quantile_max: f64,
    pub p_num: usize,
    pub e_num: usize,
    pub min_prob: f64,
}

/// One grid cell above the probability threshold. Period in seconds,
/// separation in cm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub period: f64,
    pub separation: f64,
    pub eccentricity: f64,
    pub probability: f64,
}

/// Linear-interpolation quantile over an ascending-sorted sample.
pub(crate) fn quantile(sorted: &[f64], q: f64) -> f64 {
    let h = q * (sorted.len() - 1) as f64;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

/// `num` evenly spaced values from `xi` to `xf` inclusive.
pub(crate) fn linspace(xi: f64, xf: f64, num: usize) -> Vec<f64> {
    let step = (xf - xi) / (num - 1) as f64;
    let mut x: Vec<f64> = (0..num).map(|k| xi + k as f64 * step).collect();
    // pin the endpoint against accumulated rounding
    x[num - 1] = xf;
    x
}

/// `num` log-spaced values from `base^xi` to `base^xf` inclusive.
pub(crate) fn logspace(xi: f64, xf: f64, num: usize, base: f64) -> Vec<f64> {
    linspace(xi, xf, num)
        .into_iter()
        .map(|p| base.powf(p))
        .collect()
}

/// Index of the half-open interval `[edges[i], edges[i+1])` containing `x`,
/// or `None` when `x` falls outside the grid. A value exactly on the final
/// right edge is outside by this convention and gets dropped; that boundary
/// behavior is inherited from the study this reproduces and is kept as is.
pub(crate) fn bin_index(edges: &[f64], x: f64) -> Option<usize> {
    if x < edges[0] || x >= edges[edges.len() - 1] {
        return None;
    }
    // edges are sorted and short; a linear scan is fine here
    (0..edges.len() - 1).find(|&i| x >= edges[i] && x < edges[i + 1])
}

/// Build the (period, eccentricity) probability grid for the bound
/// population.
///
/// Period bin edges are log-spaced between the configured period quantiles
/// and eccentricity edges are linearly spaced between the eccentricity
/// quantiles. Each bound record inside the quantile box adds
/// `1 / bound.len()` of mass to its cell; cells at or below `min_prob` are
/// discarded. Period centers are geometric means of adjacent edges,
/// eccentricity centers arithmetic means, and each cell's separation is the
/// Kepler conversion of its period center using the pre-kick component
/// masses.
///
/// # Errors
/// Fewer than two bound records, fewer than two bin edges on either axis,
/// quantile fractions outside [0, 1], or a degenerate quantile range all
/// fail grid construction. The bound population itself is unaffected by such
/// a failure.
pub fn build_grid(
    bound: &[BoundOrbit],
    binary: &BinaryConfig,
    spec: &GridSpec,
) -> Result<Vec<GridCell>, KickError> {
    if bound.len() < 2 {
        return Err(KickError::Grid(format!(
            "need at least 2 bound orbits to place quantile bounds, got {}",
            bound.len()
        )));
    }
    if spec.p_num < 2 || spec.e_num < 2 {
        return Err(KickError::Grid(format!(
            "need at least 2 bin edges per axis, got p_num={} e_num={}",
            spec.p_num, spec.e_num
        )));
    }
    for (name, q) in [
        ("p_quantile_min", spec.p_quantile_min),
        ("p_quantile_max", spec.p_quantile_max),
        ("e_quantile_min", spec.e_quantile_min),
        ("e_quantile_max", spec.e_quantile_max),
    ] {
        if !(0.0..=1.0).contains(&q) {
            return Err(KickError::Grid(format!(
                "{name} must lie in [0, 1], got {q}"
            )));
        }
    }

    let mut periods: Vec<f64> = bound.iter().map(|b| b.period).collect();
    let mut eccentricities: Vec<f64> = bound.iter().map(|b| b.eccentricity).collect();
    periods.sort_by(|a, b| a.total_cmp(b));
    eccentricities.sort_by(|a, b| a.total_cmp(b));

    let p_min = quantile(&periods, spec.p_quantile_min);
    let p_max = quantile(&periods, spec.p_quantile_max);
    let e_min = quantile(&eccentricities, spec.e_quantile_min);
    let e_max = quantile(&eccentricities, spec.e_quantile_max);

    if p_min >= p_max {
        return Err(KickError::Grid(format!(
            "degenerate period range: quantiles give [{p_min}, {p_max}]"
        )));
    }
    if e_min >= e_max {
        return Err(KickError::Grid(format!(
            "degenerate eccentricity range: quantiles give [{e_min}, {e_max}]"
        )));
    }

    let p_edges = logspace(p_min.log10(), p_max.log10(), spec.p_num, 10.0);
    let e_edges = linspace(e_min, e_max, spec.e_num);

    // accumulate probability mass per cell, eccentricity rows by period columns
    let mass_per_record = 1.0 / bound.len() as f64;
    let mut mass = vec![vec![0.0_f64; spec.p_num - 1]; spec.e_num - 1];
    for record in bound {
        let (Some(i), Some(j)) = (
            bin_index(&e_edges, record.eccentricity),
            bin_index(&p_edges, record.period),
        ) else {
            continue;
        };
        mass[i][j] += mass_per_record;
    }

    let mut cells = Vec::new();
    for (i, row) in mass.iter().enumerate() {
        let e_center = (e_edges[i] + e_edges[i + 1]) / 2.0;
        for (j, &probability) in row.iter().enumerate() {
            if probability <= spec.min_prob {
                continue;
            }
            let p_center = (p_edges[j] * p_edges[j + 1]).sqrt();
            let separation = kepler::separation_from_period(p_center, binary.m1, binary.m2)?;
            cells.push(GridCell {
                period: p_center,
                separation,
                eccentricity: e_center,
                probability,
            });
        }
    }

    Ok(cells)
}
