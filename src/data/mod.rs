use std::path::{Path, PathBuf};

pub mod generator;

/// The two shapes of data that can be written for the analysis program.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum DatasetKind {
    Vector,
    Matrix,
}

impl DatasetKind {
    /// File name prefix the reading side uses to tell vectors and matrices apart.
    pub fn prefix(&self) -> &'static str {
        match self {
            DatasetKind::Vector => "vec",
            DatasetKind::Matrix => "mat",
        }
    }

    pub fn file_name(&self, label: &str) -> String {
        format!("{}_{}.txt", self.prefix(), label)
    }

    pub fn output_path(&self, dir: &Path, label: &str) -> PathBuf {
        dir.join(self.file_name(label))
    }
}

/// Renders the values one per line, every line terminated by `\n`.
pub fn render_vector(values: &[i64]) -> String {
    values.iter().map(|value| format!("{}\n", value)).collect()
}

/// Renders each row as space separated values terminated by `\n`.
pub fn render_matrix(rows: &[Vec<i64>]) -> String {
    rows.iter()
        .map(|row| {
            let line = row
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            format!("{}\n", line)
        })
        .collect()
}
