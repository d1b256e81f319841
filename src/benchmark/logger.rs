use std::{fs::File, path::Path};

use chrono::Local;
use csv::Writer;
use serde::Serialize;

use crate::config::Mode;

use super::RunReport;

/// A single run flattened so it can be serialized to CSV.
#[derive(Serialize)]
struct RunRecord {
    pub timestamp: String,
    pub mode: Mode,
    pub dimension: usize,
    pub low: i64,
    pub high: i64,
    pub files: String,
    pub elapsed_ms: f64,
}

pub struct RunLogger {
    records: Vec<(String, RunReport)>,
}

impl RunLogger {
    pub fn new() -> Self {
        RunLogger {
            records: Vec::new(),
        }
    }

    /// Stores the report together with the current local time.
    pub fn add_record(&mut self, report: &RunReport) {
        self.records.push((Local::now().to_rfc3339(), report.clone()));
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn write_to_csv(&self, file_path: impl AsRef<Path>) -> Result<(), csv::Error> {
        let file = File::create(file_path)?;
        let mut writer = Writer::from_writer(file);

        for (timestamp, report) in &self.records {
            writer.serialize(&RunRecord {
                timestamp: timestamp.clone(),
                mode: report.mode,
                dimension: report.dimension,
                low: report.low,
                high: report.high,
                files: report
                    .files
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>()
                    .join(";"),
                elapsed_ms: report.elapsed_ms(),
            })?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl Default for RunLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf, time::Duration};

    use super::*;

    #[test]
    fn test_write_to_csv() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("runs.csv");

        let mut logger = RunLogger::new();
        assert!(logger.is_empty());
        logger.add_record(&RunReport {
            mode: Mode::Matrix,
            dimension: 3,
            low: -100,
            high: 100,
            files: vec![PathBuf::from("mat_A.txt"), PathBuf::from("mat_B.txt")],
            elapsed: Duration::from_millis(2),
        });
        assert_eq!(logger.len(), 1);
        logger.write_to_csv(&csv_path).unwrap();

        let content = fs::read_to_string(&csv_path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "timestamp,mode,dimension,low,high,files,elapsed_ms"
        );
        let row = lines.next().unwrap();
        assert!(row.contains(",matrix,3,-100,100,mat_A.txt;mat_B.txt,2"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let logger = RunLogger::new();
        assert!(logger
            .write_to_csv(dir.path().join("missing").join("runs.csv"))
            .is_err());
    }
}
