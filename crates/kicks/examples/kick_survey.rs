//! Quick survey of natal kick outcomes for a massive binary
//!
//! Samples Maxwell-distributed kicks, evolves the post-kick orbits and
//! prints the survival statistics plus the densest probability grid cells.
//!
//! Run with: cargo run --package kicks --example kick_survey

use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use kicks::{
    build_grid, evolve_population, sample_kicks, BinaryConfig, DirectionDistribution, GridSpec,
    StrengthDistribution,
};
use units::{Length, Mass, Time, Velocity};

fn main() {
    println!("Natal Kick Survey: 10 + 8 Msun binary, NS remnant\n");
    println!("{}", "=".repeat(60));

    let binary = BinaryConfig::new(
        Mass::from_solar_masses(10.0).to_grams(),
        Mass::from_solar_masses(8.0).to_grams(),
        Length::from_solar_radii(100.0).to_cm(),
        Mass::from_solar_masses(1.4).to_grams(),
    )
    .expect("valid binary");

    let v_orb = Velocity::from_cm_per_sec(binary.pre_kick_orbital_speed());
    println!("Pre-kick orbital speed: {:.1} km/s", v_orb.to_km_per_sec());

    let strength = StrengthDistribution::Maxwell {
        sigma: Velocity::from_km_per_sec(265.0).to_cm_per_sec(),
    };
    let direction = DirectionDistribution::Uniform {
        min_phi: 0.0,
        max_phi: 2.0,
        min_theta: 0.0,
        max_theta: 1.0,
    };

    let mut rng = ChaChaRng::seed_from_u64(42);
    let samples = sample_kicks(&mut rng, &strength, &direction, 20_000);
    let population = evolve_population(&binary, samples);

    let summary = population.summary();
    println!("\nOutcomes for {} kicks:", summary.total);
    println!(
        "  Bound:     {:>6} ({:.1}%)",
        summary.bound,
        summary.bound_percent()
    );
    println!(
        "  Disrupted: {:>6} ({:.1}%)",
        summary.disrupted,
        summary.disrupted_percent()
    );

    let spec = GridSpec {
        p_quantile_min: 0.01,
        p_quantile_max: 0.99,
        e_quantile_min: 0.01,
        e_quantile_max: 0.99,
        p_num: 30,
        e_num: 30,
        min_prob: 1.0e-3,
    };
    let mut cells = build_grid(&population.bound, &binary, &spec).expect("grid");
    cells.sort_by(|a, b| b.probability.total_cmp(&a.probability));

    println!("\nDensest grid cells:");
    println!("{:>12} {:>12} {:>8}", "P [days]", "e", "prob");
    for cell in cells.iter().take(10) {
        println!(
            "{:>12.3} {:>12.3} {:>8.4}",
            Time::from_seconds(cell.period).to_days(),
            cell.eccentricity,
            cell.probability
        );
    }
}
