use std::{
    fmt::{self, Display},
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{bail, ensure};
use serde::Serialize;

use crate::data::DatasetKind;

/// Directory the analysis program reads its input files from.
pub const DEFAULT_OUTPUT_DIR: &str = "../data";
pub const DEFAULT_RANGE: (i64, i64) = (-100, 100);

/// Which pair of artifacts a run produces.
#[derive(Debug, PartialEq, Eq, Serialize, Copy, Clone, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Vector,
    Matrix,
}

impl Mode {
    pub fn kind(&self) -> DatasetKind {
        match self {
            Mode::Vector => DatasetKind::Vector,
            Mode::Matrix => DatasetKind::Matrix,
        }
    }

    /// Labels used when the caller does not name the two artifacts.
    pub fn default_labels(&self) -> (&'static str, &'static str) {
        match self {
            Mode::Vector => ("U", "V"),
            Mode::Matrix => ("A", "B"),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Vector => write!(f, "vector"),
            Mode::Matrix => write!(f, "matrix"),
        }
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vector" => Ok(Mode::Vector),
            "matrix" => Ok(Mode::Matrix),
            _ => bail!("unsupported mode '{}', expected one of: vector, matrix", s),
        }
    }
}

/// Parameters of a single generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub mode: Mode,
    pub output_dir: PathBuf,
    pub dimension: usize,
    pub low: i64,
    pub high: i64,
    pub labels: (String, String),
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Creates a configuration with the default value range and the mode's default labels.
    ///
    /// # Arguments
    ///
    /// * `mode` - Decides the kind of files written and their default labels.
    /// * `output_dir` - Directory the files are written into. It has to exist already.
    /// * `dimension` - Vector length or matrix side length.
    pub fn new(mode: Mode, output_dir: impl AsRef<Path>, dimension: usize) -> Self {
        let (first, second) = mode.default_labels();
        GeneratorConfig {
            mode,
            output_dir: output_dir.as_ref().to_path_buf(),
            dimension,
            low: DEFAULT_RANGE.0,
            high: DEFAULT_RANGE.1,
            labels: (first.to_string(), second.to_string()),
            seed: None,
        }
    }

    pub fn with_range(mut self, low: i64, high: i64) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    pub fn with_labels(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.labels = (first.into(), second.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks everything that can be checked before touching the filesystem.
    ///
    /// A dimension of zero is valid here and yields empty files.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.low <= self.high,
            "invalid range [{}, {}]: low must not exceed high",
            self.low,
            self.high
        );
        for label in [&self.labels.0, &self.labels.1] {
            validate_label(label)?;
        }
        ensure!(
            self.labels.0 != self.labels.1,
            "labels must differ, both are '{}'",
            self.labels.0
        );
        Ok(())
    }
}

pub(crate) fn validate_label(label: &str) -> anyhow::Result<()> {
    ensure!(!label.is_empty(), "label must not be empty");
    ensure!(
        !label.contains(['/', '\\']) && label != "." && label != "..",
        "label '{}' must not contain path separators",
        label
    );
    Ok(())
}
