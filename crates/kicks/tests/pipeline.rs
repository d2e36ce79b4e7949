// End-to-end runs of the sample -> solve -> grid pipeline, including the
// degenerate kick distributions used as analytic checkpoints.

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use kicks::{
    build_grid, evolve_population, sample_kicks, BinaryConfig, DirectionDistribution, GridSpec,
    RunConfig, StrengthDistribution,
};
use units::{Length, Mass};

fn isotropic() -> DirectionDistribution {
    DirectionDistribution::Uniform {
        min_phi: 0.0,
        max_phi: 2.0,
        min_theta: 0.0,
        max_theta: 1.0,
    }
}

/// The study's reference binary: a 10 + 8 M☉ pair at 100 R☉ where the
/// primary collapses to a 1.4 M☉ compact object.
fn reference_binary() -> BinaryConfig {
    BinaryConfig::new(
        Mass::from_solar_masses(10.0).to_grams(),
        Mass::from_solar_masses(8.0).to_grams(),
        Length::from_solar_radii(100.0).to_cm(),
        Mass::from_solar_masses(1.4).to_grams(),
    )
    .unwrap()
}

#[test]
fn zero_kick_population_all_survives() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let samples = sample_kicks(
        &mut rng,
        &StrengthDistribution::Uniform { min: 0.0, max: 0.0 },
        &isotropic(),
        5,
    );
    let population = evolve_population(&reference_binary(), samples);

    assert_eq!(population.bound.len(), 5);
    assert_eq!(population.disrupted, 0);
}

#[test]
fn zero_kick_without_mass_loss_preserves_the_orbit() {
    // With the compact object keeping the full primary mass, a zero kick
    // must leave every case on the original circular orbit.
    let binary = BinaryConfig::new(
        Mass::from_solar_masses(10.0).to_grams(),
        Mass::from_solar_masses(8.0).to_grams(),
        Length::from_solar_radii(100.0).to_cm(),
        Mass::from_solar_masses(10.0).to_grams(),
    )
    .unwrap();

    let mut rng = ChaChaRng::seed_from_u64(42);
    let samples = sample_kicks(
        &mut rng,
        &StrengthDistribution::Uniform { min: 0.0, max: 0.0 },
        &isotropic(),
        5,
    );
    let population = evolve_population(&binary, samples);

    assert_eq!(population.bound.len(), 5);
    for record in &population.bound {
        assert_relative_eq!(record.separation, binary.separation, max_relative = 1e-10);
        assert_relative_eq!(record.eccentricity, 0.0, epsilon = 1e-6);
    }
}

#[test]
fn enormous_fixed_kick_disrupts_everything() {
    // 10^4 km/s vastly exceeds the ~185 km/s orbital speed of the
    // reference binary
    let mut rng = ChaChaRng::seed_from_u64(42);
    let samples = sample_kicks(
        &mut rng,
        &StrengthDistribution::Uniform {
            min: 1.0e9,
            max: 1.0e9,
        },
        &isotropic(),
        200,
    );
    let population = evolve_population(&reference_binary(), samples);

    assert_eq!(population.bound.len(), 0);
    assert_eq!(population.disrupted, 200);
}

#[test]
fn maxwell_runs_reproduce_bit_identical_strengths() {
    let strength = StrengthDistribution::Maxwell { sigma: 2.65e7 };

    let mut rng = ChaChaRng::seed_from_u64(1986);
    let first = sample_kicks(&mut rng, &strength, &isotropic(), 1000);

    let mut rng = ChaChaRng::seed_from_u64(1986);
    let second = sample_kicks(&mut rng, &strength, &isotropic(), 1000);

    for (a, b) in first.w.iter().zip(second.w.iter()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn full_pipeline_produces_a_plausible_grid() {
    let binary = reference_binary();
    let sigma = 0.5 * binary.pre_kick_orbital_speed();

    let mut rng = ChaChaRng::seed_from_u64(42);
    let samples = sample_kicks(
        &mut rng,
        &StrengthDistribution::Maxwell { sigma },
        &isotropic(),
        5000,
    );
    let population = evolve_population(&binary, samples);
    let summary = population.summary();
    assert!(summary.bound > 100, "expected a sizable bound population");

    let spec = GridSpec {
        p_quantile_min: 0.01,
        p_quantile_max: 0.99,
        e_quantile_min: 0.01,
        e_quantile_max: 0.99,
        p_num: 30,
        e_num: 30,
        min_prob: 0.0,
    };
    let cells = build_grid(&population.bound, &binary, &spec).unwrap();
    assert!(!cells.is_empty());

    let total: f64 = cells.iter().map(|c| c.probability).sum();
    assert!(total > 0.9, "quantile box should hold most of the mass");
    assert!(total <= 1.0 + 1e-12);

    for cell in &cells {
        assert!(cell.probability > 0.0);
        assert!(cell.period > 0.0);
        assert!(cell.separation > 0.0);
        assert!((0.0..=1.0).contains(&cell.eccentricity));
    }
}

#[test]
fn grid_failure_leaves_population_usable() {
    let binary = reference_binary();

    // a single bound survivor: population results are fine, grid is not
    let mut rng = ChaChaRng::seed_from_u64(42);
    let samples = sample_kicks(
        &mut rng,
        &StrengthDistribution::Uniform { min: 0.0, max: 0.0 },
        &isotropic(),
        1,
    );
    let population = evolve_population(&binary, samples);
    assert_eq!(population.summary().bound, 1);

    let spec = GridSpec {
        p_quantile_min: 0.01,
        p_quantile_max: 0.99,
        e_quantile_min: 0.01,
        e_quantile_max: 0.99,
        p_num: 10,
        e_num: 10,
        min_prob: 0.0,
    };
    assert!(build_grid(&population.bound, &binary, &spec).is_err());
    // the population summary is still valid after the grid failure
    assert_eq!(population.summary().total, 1);
}

#[test]
fn config_driven_run_matches_manual_pipeline() {
    let yaml = "
m1: 10.0
m2: 8.0
separation: 100.0
compact_object_mass: 1.4
kick_distribution: Maxwell
kick_sigma: 100.0
kick_direction: Uniform
number_of_cases: 500
seed: 7
";
    let config: RunConfig = serde_yaml::from_str(yaml).unwrap();
    config.validate().unwrap();

    let binary = config.binary().unwrap();
    let strength = config.strength_distribution().unwrap();
    let direction = config.direction_distribution().unwrap();

    let mut rng = ChaChaRng::seed_from_u64(config.seed);
    let samples = sample_kicks(&mut rng, &strength, &direction, config.number_of_cases);
    let population = evolve_population(&binary, samples);

    let summary = population.summary();
    assert_eq!(summary.total, 500);
    assert_eq!(summary.bound + summary.disrupted, 500);

    // σ = 100 km/s kicks against a ~185 km/s orbit with heavy mass loss:
    // survival is possible but far from guaranteed
    assert!(summary.bound > 50, "bound count {} too low", summary.bound);
    assert!(
        summary.disrupted > 50,
        "disrupted count {} too low",
        summary.disrupted
    );
}
