//! Delimited output files
//!
//! Writes the three record streams of a run as whitespace-delimited text
//! with a single header row, the layout numpy's `loadtxt(..., skiprows=1)`
//! expects. Values are converted back to astronomical units for the files:
//! kick speeds in km/s, periods in days, separations in solar radii.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use kicks::{BoundOrbit, GridCell, KickSamples};
use units::{Length, Time, Velocity};

const COLUMN: usize = 20;

/// Write one kick record per sample: index, strength, polar and azimuthal
/// angles.
pub fn write_kicks(path: &Path, samples: &KickSamples) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(
        out,
        "{:>COLUMN$}{:>COLUMN$}{:>COLUMN$}{:>COLUMN$}",
        "id", "w", "theta", "phi"
    )?;
    for k in 0..samples.len() {
        let kick = samples.get(k);
        writeln!(
            out,
            "{:>COLUMN$}{:>COLUMN$.5}{:>COLUMN$.5}{:>COLUMN$.5}",
            k,
            Velocity::from_cm_per_sec(kick.w).to_km_per_sec(),
            kick.theta,
            kick.phi,
        )?;
    }
    out.flush()
}

/// Write one orbit record per bound case, tagged with the originating kick
/// index.
pub fn write_orbits(path: &Path, bound: &[BoundOrbit]) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(
        out,
        "{:>COLUMN$}{:>COLUMN$}{:>COLUMN$}{:>COLUMN$}{:>COLUMN$}{:>COLUMN$}{:>COLUMN$}",
        "id", "w", "theta", "phi", "period", "separation", "eccentricity"
    )?;
    for record in bound {
        writeln!(
            out,
            "{:>COLUMN$}{:>COLUMN$.5}{:>COLUMN$.5}{:>COLUMN$.5}{:>COLUMN$.5}{:>COLUMN$.5}{:>COLUMN$.5}",
            record.index,
            Velocity::from_cm_per_sec(record.w).to_km_per_sec(),
            record.theta,
            record.phi,
            Time::from_seconds(record.period).to_days(),
            Length::from_cm(record.separation).to_solar_radii(),
            record.eccentricity,
        )?;
    }
    out.flush()
}

/// Write one record per emitted probability grid cell.
pub fn write_grid(path: &Path, cells: &[GridCell]) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(
        out,
        "{:>COLUMN$}{:>COLUMN$}{:>COLUMN$}{:>COLUMN$}{:>COLUMN$}",
        "id", "period", "separation", "eccentricity", "probability"
    )?;
    for (k, cell) in cells.iter().enumerate() {
        writeln!(
            out,
            "{:>COLUMN$}{:>COLUMN$.5}{:>COLUMN$.5}{:>COLUMN$.5}{:>COLUMN$.5e}",
            k,
            Time::from_seconds(cell.period).to_days(),
            Length::from_cm(cell.separation).to_solar_radii(),
            cell.eccentricity,
            cell.probability,
        )?;
    }
    out.flush()
}
