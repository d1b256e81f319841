use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fixture_gen::{
    config::{DEFAULT_OUTPUT_DIR, DEFAULT_RANGE},
    run, GeneratorConfig, Mode, RunLogger,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Kind of data to generate
    #[arg(long, short, value_enum, ignore_case = true)]
    mode: Mode,

    /// Vector length or matrix side length
    #[arg(long, short, value_parser = clap::value_parser!(u64).range(1..))]
    dimension: u64,

    #[arg(long, short, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    #[arg(long, default_value_t = DEFAULT_RANGE.0, allow_hyphen_values = true)]
    low: i64,

    #[arg(long, default_value_t = DEFAULT_RANGE.1, allow_hyphen_values = true)]
    high: i64,

    /// Names of the two generated files, e.g. `U,V`
    #[arg(long, value_parser = parse_labels)]
    labels: Option<(String, String)>,

    /// Makes the output reproducible
    #[arg(long)]
    seed: Option<u64>,

    /// Writes a CSV with the timing of this run
    #[arg(long)]
    report: Option<PathBuf>,
}

fn parse_labels(s: &str) -> Result<(String, String), String> {
    let labels: Vec<&str> = s.split(',').collect();
    match labels.as_slice() {
        [first, second] if !first.is_empty() && !second.is_empty() => {
            Ok((first.to_string(), second.to_string()))
        }
        _ => Err(format!("expected two comma separated labels, got '{}'", s)),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let dimension = usize::try_from(args.dimension).context("dimension is too large")?;
    let mut config = GeneratorConfig::new(args.mode, &args.output_dir, dimension)
        .with_range(args.low, args.high);
    if let Some((first, second)) = args.labels {
        config = config.with_labels(first, second);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let report = run(&config)?;
    println!("Time taken: {} [ms]", report.elapsed_ms());

    if let Some(report_path) = args.report {
        let mut logger = RunLogger::new();
        logger.add_record(&report);
        logger
            .write_to_csv(&report_path)
            .with_context(|| format!("failed to write report {}", report_path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let args = Args::try_parse_from(["fixture-gen", "--mode", "vector", "--dimension", "5"])
            .unwrap();
        assert_eq!(args.mode, Mode::Vector);
        assert_eq!(args.dimension, 5);
        assert_eq!(args.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!((args.low, args.high), DEFAULT_RANGE);
        assert!(args.labels.is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        let result = Args::try_parse_from(["fixture-gen", "--mode", "foo", "--dimension", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_bad_dimension() {
        for dimension in ["0", "-3", "abc"] {
            let result =
                Args::try_parse_from(["fixture-gen", "--mode", "matrix", "--dimension", dimension]);
            assert!(result.is_err(), "dimension {} should be rejected", dimension);
        }
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(parse_labels("U,V"), Ok(("U".to_string(), "V".to_string())));
        assert!(parse_labels("U").is_err());
        assert!(parse_labels("U,").is_err());
        assert!(parse_labels("U,V,W").is_err());
    }

    #[test]
    fn test_parse_full_args() {
        let args = Args::try_parse_from([
            "fixture-gen",
            "-m",
            "MATRIX",
            "-d",
            "3",
            "--low",
            "-5",
            "--high",
            "5",
            "--labels",
            "X,Y",
            "--seed",
            "9",
        ])
        .unwrap();
        assert_eq!(args.mode, Mode::Matrix);
        assert_eq!((args.low, args.high), (-5, 5));
        assert_eq!(args.labels, Some(("X".to_string(), "Y".to_string())));
        assert_eq!(args.seed, Some(9));
    }
}
