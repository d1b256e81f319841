//! Generates random integer vectors and matrices as plain text fixtures for a separate
//! analysis program.
//!
//! A vector file holds one integer per line, a matrix file holds one row per line with the
//! values separated by single spaces.

pub mod benchmark;
pub mod config;
pub mod data;

pub use benchmark::{logger::RunLogger, run, RunReport};
pub use config::{GeneratorConfig, Mode};
pub use data::{generator::DatasetGenerator, DatasetKind};
