//! Natal kick population study runner
//!
//! Loads a YAML run configuration, samples the kick population, evolves the
//! post-kick orbits and writes the kick, orbit and probability-grid files.

mod output;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use kicks::{build_grid, evolve_population, sample_kicks, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "kick-generator", version, about = "Post-kick orbit population synthesis for compact-object binaries")]
struct Cli {
    /// Path to the YAML run configuration
    config: PathBuf,

    /// Directory where the output files are written
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = RunConfig::from_path(&cli.config)
        .with_context(|| format!("loading run configuration from {}", cli.config.display()))?;
    config.validate().context("validating run configuration")?;

    let binary = config.binary()?;
    let strength = config.strength_distribution()?;
    let direction = config.direction_distribution()?;

    info!(
        "sampling {} natal kicks (seed {})",
        config.number_of_cases, config.seed
    );
    let mut rng = ChaChaRng::seed_from_u64(config.seed);
    let samples = sample_kicks(&mut rng, &strength, &direction, config.number_of_cases);

    info!("solving post-kick orbits");
    let population = evolve_population(&binary, samples);
    let summary = population.summary();
    info!(
        "outcomes: {} bound ({:.2}%), {} disrupted ({:.2}%)",
        summary.bound,
        summary.bound_percent(),
        summary.disrupted,
        summary.disrupted_percent()
    );

    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("creating output directory {}", cli.output_dir.display()))?;

    let kicks_path = cli.output_dir.join("kicks.data");
    output::write_kicks(&kicks_path, &population.samples)
        .with_context(|| format!("writing {}", kicks_path.display()))?;
    info!("wrote kick records to {}", kicks_path.display());

    let orbits_path = cli.output_dir.join("orbits.data");
    output::write_orbits(&orbits_path, &population.bound)
        .with_context(|| format!("writing {}", orbits_path.display()))?;
    info!("wrote bound orbit records to {}", orbits_path.display());

    info!("building probability grid");
    // the kick and orbit files above stay valid even if the grid fails,
    // so they are written before this stage can abort the run
    let cells = build_grid(&population.bound, &binary, &config.grid_spec())?;
    let grid_path = cli.output_dir.join("grid.data");
    output::write_grid(&grid_path, &cells)
        .with_context(|| format!("writing {}", grid_path.display()))?;
    info!(
        "wrote {} grid cells above probability {} to {}",
        cells.len(),
        config.min_prob,
        grid_path.display()
    );

    info!("run complete");
    Ok(())
}
