use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{ensure, Context};
use log::{debug, info};
use rand::{
    distributions::{Distribution, Uniform},
    rngs::StdRng,
    Rng, SeedableRng,
};

use crate::config::validate_label;

use super::{render_matrix, render_vector, DatasetKind};

/// Writes uniformly distributed random integers into text files below `output_dir`.
pub struct DatasetGenerator {
    output_dir: PathBuf,
    rng: StdRng,
}

impl DatasetGenerator {
    /// Creates a generator seeded from the operating system, so every run differs.
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        DatasetGenerator {
            output_dir: output_dir.as_ref().to_path_buf(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a generator that produces the same files for the same seed.
    pub fn with_seed(output_dir: impl AsRef<Path>, seed: u64) -> Self {
        DatasetGenerator {
            output_dir: output_dir.as_ref().to_path_buf(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns a uniformly distributed integer in `[low, high]`.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    pub fn random_in_range(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..=high)
    }

    /// Writes `dimension` random integers, one per line, to `<output_dir>/vec_<label>.txt`.
    ///
    /// # Arguments
    ///
    /// * `label` - Name of the vector, e.g. `U`.
    /// * `dimension` - Number of values. Zero writes an empty file.
    /// * `low` / `high` - Inclusive bounds of every value.
    ///
    /// # Returns
    ///
    /// The path of the written file.
    pub fn generate_vector(
        &mut self,
        label: &str,
        dimension: usize,
        low: i64,
        high: i64,
    ) -> anyhow::Result<PathBuf> {
        check_bounds(label, low, high)?;
        let uniform_dist = Uniform::new_inclusive(low, high);
        let values: Vec<i64> = (0..dimension)
            .map(|_| uniform_dist.sample(&mut self.rng))
            .collect();

        self.write(DatasetKind::Vector, label, render_vector(&values))
    }

    /// Writes a `dimension` x `dimension` matrix of random integers to
    /// `<output_dir>/mat_<label>.txt`, one space separated row per line.
    pub fn generate_matrix(
        &mut self,
        label: &str,
        dimension: usize,
        low: i64,
        high: i64,
    ) -> anyhow::Result<PathBuf> {
        check_bounds(label, low, high)?;
        let uniform_dist = Uniform::new_inclusive(low, high);
        let rows: Vec<Vec<i64>> = (0..dimension)
            .map(|_| {
                (0..dimension)
                    .map(|_| uniform_dist.sample(&mut self.rng))
                    .collect()
            })
            .collect();

        self.write(DatasetKind::Matrix, label, render_matrix(&rows))
    }

    pub fn generate(
        &mut self,
        kind: DatasetKind,
        label: &str,
        dimension: usize,
        low: i64,
        high: i64,
    ) -> anyhow::Result<PathBuf> {
        match kind {
            DatasetKind::Vector => self.generate_vector(label, dimension, low, high),
            DatasetKind::Matrix => self.generate_matrix(label, dimension, low, high),
        }
    }

    // The whole blob goes out in a single write that truncates any previous file.
    fn write(&self, kind: DatasetKind, label: &str, data: String) -> anyhow::Result<PathBuf> {
        let path = kind.output_path(&self.output_dir, label);
        debug!("Writing {} bytes to {}", data.len(), path.display());
        fs::write(&path, data)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Generated {}", path.display());
        Ok(path)
    }
}

fn check_bounds(label: &str, low: i64, high: i64) -> anyhow::Result<()> {
    validate_label(label)?;
    ensure!(
        low <= high,
        "invalid range [{}, {}]: low must not exceed high",
        low,
        high
    );
    Ok(())
}
