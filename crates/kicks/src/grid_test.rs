use approx::assert_relative_eq;
use units::{Length, Mass};

use crate::error::KickError;
use crate::grid::{bin_index, build_grid, linspace, logspace, quantile, GridSpec};
use crate::kepler;
use crate::orbit::BinaryConfig;
use crate::population::BoundOrbit;

fn binary() -> BinaryConfig {
    BinaryConfig::new(
        Mass::from_solar_masses(10.0).to_grams(),
        Mass::from_solar_masses(8.0).to_grams(),
        Length::from_solar_radii(100.0).to_cm(),
        Mass::from_solar_masses(1.4).to_grams(),
    )
    .unwrap()
}

fn bound_record(index: usize, period: f64, eccentricity: f64) -> BoundOrbit {
    BoundOrbit {
        index,
        w: 0.0,
        theta: 0.0,
        phi: 0.0,
        separation: 1.0e12,
        eccentricity,
        period,
    }
}

/// A spread of bound orbits covering two decades in period.
fn sample_population() -> Vec<BoundOrbit> {
    (0..100)
        .map(|k| {
            let period = 1.0e5 * 10.0_f64.powf(2.0 * k as f64 / 99.0);
            let eccentricity = k as f64 / 99.0 * 0.9;
            bound_record(k, period, eccentricity)
        })
        .collect()
}

fn full_range_spec() -> GridSpec {
    GridSpec {
        p_quantile_min: 0.0,
        p_quantile_max: 1.0,
        e_quantile_min: 0.0,
        e_quantile_max: 1.0,
        p_num: 11,
        e_num: 11,
        min_prob: 0.0,
    }
}

#[test]
fn quantile_interpolates_linearly() {
    let sorted = [1.0, 2.0, 3.0, 4.0];
    assert_relative_eq!(quantile(&sorted, 0.0), 1.0);
    assert_relative_eq!(quantile(&sorted, 1.0), 4.0);
    assert_relative_eq!(quantile(&sorted, 0.5), 2.5);
    assert_relative_eq!(quantile(&sorted, 1.0 / 3.0), 2.0);
}

#[test]
fn linspace_hits_both_endpoints() {
    let x = linspace(0.0, 1.0, 5);
    assert_eq!(x.len(), 5);
    assert_eq!(x[0], 0.0);
    assert_eq!(x[4], 1.0);
    assert_relative_eq!(x[1], 0.25);
    assert_relative_eq!(x[3], 0.75);
}

#[test]
fn logspace_is_geometric() {
    let x = logspace(0.0, 2.0, 3, 10.0);
    assert_relative_eq!(x[0], 1.0);
    assert_relative_eq!(x[1], 10.0);
    assert_relative_eq!(x[2], 100.0);
}

#[test]
fn bin_index_uses_half_open_intervals() {
    let edges = [0.0, 1.0, 2.0];
    assert_eq!(bin_index(&edges, 0.0), Some(0));
    assert_eq!(bin_index(&edges, 0.999), Some(0));
    assert_eq!(bin_index(&edges, 1.0), Some(1));
    // a value exactly on the final right edge falls outside the grid
    assert_eq!(bin_index(&edges, 2.0), None);
    assert_eq!(bin_index(&edges, -0.1), None);
}

#[test]
fn masses_sum_to_in_box_fraction_when_threshold_is_zero() {
    let bound = sample_population();
    let cells = build_grid(&bound, &binary(), &full_range_spec()).unwrap();

    // With full-range quantiles and min_prob = 0, every record lands in the
    // grid except those on the outermost edges: the maximum-eccentricity
    // record sits exactly on the final right edge and is dropped, and the
    // extreme-period records can round either side of the log-spaced edges.
    let total: f64 = cells.iter().map(|c| c.probability).sum();
    assert!(total <= 0.99 + 1e-12);
    assert!(total >= 0.98 - 1e-12);
}

#[test]
fn threshold_discards_light_cells() {
    let bound = sample_population();
    let mut spec = full_range_spec();
    spec.min_prob = 0.5;

    // no single cell can hold more than half the mass of this spread
    let cells = build_grid(&bound, &binary(), &spec).unwrap();
    assert!(cells.is_empty());
}

#[test]
fn cell_centers_and_separations_are_consistent() {
    let bound = sample_population();
    let binary = binary();
    let cells = build_grid(&bound, &binary, &full_range_spec()).unwrap();
    assert!(!cells.is_empty());

    for cell in &cells {
        assert!((1.0e5..=1.0e7).contains(&cell.period));
        assert!((0.0..=0.9).contains(&cell.eccentricity));
        // separation center is the Kepler image of the period center
        let expected = kepler::separation_from_period(cell.period, binary.m1, binary.m2).unwrap();
        assert_relative_eq!(cell.separation, expected);
    }
}

#[test]
fn quantile_bounds_trim_the_tails() {
    let bound = sample_population();
    let spec = GridSpec {
        p_quantile_min: 0.1,
        p_quantile_max: 0.9,
        e_quantile_min: 0.1,
        e_quantile_max: 0.9,
        p_num: 11,
        e_num: 11,
        min_prob: 0.0,
    };
    let cells = build_grid(&bound, &binary(), &spec).unwrap();

    // the quantile box excludes the outer tails, so mass is lost
    let total: f64 = cells.iter().map(|c| c.probability).sum();
    assert!(total < 1.0);
    assert!(total > 0.5);
}

#[test]
fn too_few_bound_records_fail() {
    let bound = vec![bound_record(0, 1.0e6, 0.5)];
    let err = build_grid(&bound, &binary(), &full_range_spec()).unwrap_err();
    assert!(matches!(err, KickError::Grid(_)));
}

#[test]
fn degenerate_quantile_range_fails() {
    // identical periods: p_min == p_max no matter the quantiles
    let bound = vec![
        bound_record(0, 1.0e6, 0.1),
        bound_record(1, 1.0e6, 0.2),
        bound_record(2, 1.0e6, 0.3),
    ];
    let err = build_grid(&bound, &binary(), &full_range_spec()).unwrap_err();
    assert!(matches!(err, KickError::Grid(_)));
}

#[test]
fn out_of_range_quantiles_fail() {
    // a GridSpec built by hand can carry fractions RunConfig would reject;
    // they must fail cleanly instead of indexing past the sorted sample
    let bound = sample_population();

    let mut spec = full_range_spec();
    spec.p_quantile_max = 1.5;
    let err = build_grid(&bound, &binary(), &spec).unwrap_err();
    assert!(matches!(err, KickError::Grid(_)));

    let mut spec = full_range_spec();
    spec.e_quantile_min = -0.2;
    let err = build_grid(&bound, &binary(), &spec).unwrap_err();
    assert!(matches!(err, KickError::Grid(_)));
}

#[test]
fn too_few_bin_edges_fail() {
    let bound = sample_population();
    let mut spec = full_range_spec();
    spec.p_num = 1;
    let err = build_grid(&bound, &binary(), &spec).unwrap_err();
    assert!(matches!(err, KickError::Grid(_)));
}
