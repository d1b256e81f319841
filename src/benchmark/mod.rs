use std::{path::PathBuf, time::Duration};

use log::info;

use crate::{
    config::{GeneratorConfig, Mode},
    data::generator::DatasetGenerator,
    measure_time,
};

pub mod logger;
pub mod macros;

/// Outcome of one generation run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub mode: Mode,
    pub dimension: usize,
    pub low: i64,
    pub high: i64,
    pub files: Vec<PathBuf>,
    /// Time spent generating and writing both files.
    pub elapsed: Duration,
}

impl RunReport {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Generates the two artifacts of the configured mode and measures how long generating and
/// writing took.
///
/// The configuration is validated before any file is touched. Filesystem errors abort the
/// run; a file written before the failure is left in place.
pub fn run(config: &GeneratorConfig) -> anyhow::Result<RunReport> {
    config.validate()?;
    let mode = config.mode;

    let mut generator = match config.seed {
        Some(seed) => DatasetGenerator::with_seed(&config.output_dir, seed),
        None => DatasetGenerator::new(&config.output_dir),
    };

    info!(
        "Generating {} pair ({}, {}) with dimension {} in {}",
        mode,
        config.labels.0,
        config.labels.1,
        config.dimension,
        config.output_dir.display()
    );

    let kind = mode.kind();
    let (files, elapsed) = measure_time!({
        [&config.labels.0, &config.labels.1]
            .into_iter()
            .map(|label| {
                generator.generate(kind, label, config.dimension, config.low, config.high)
            })
            .collect::<anyhow::Result<Vec<PathBuf>>>()
    });
    let files = files?;

    info!("...finished in {:?}", elapsed);

    Ok(RunReport {
        mode,
        dimension: config.dimension,
        low: config.low,
        high: config.high,
        files,
        elapsed,
    })
}
