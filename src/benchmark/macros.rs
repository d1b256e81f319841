/// Evaluates the expression and returns it together with the wall-clock time it took.
#[macro_export]
macro_rules! measure_time {
    ($func:expr) => {{
        let start = std::time::Instant::now();
        let result = $func;
        let duration = start.elapsed();
        (result, duration)
    }};
}

#[cfg(test)]
mod tests {
    use std::fs;

    fn write_and_time(path: &std::path::Path) -> anyhow::Result<std::time::Duration> {
        let (written, duration) = measure_time!(fs::write(path, "1\n2\n"));
        written?;
        Ok(duration)
    }

    #[test]
    fn test_measure_time_ok_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vec_U.txt");
        write_and_time(&path).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "1\n2\n");
    }

    #[test]
    fn test_measure_time_propagates_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("vec_U.txt");
        assert!(write_and_time(&path).is_err());
    }

    #[test]
    fn test_measure_time_collects_results() {
        let (values, _) = measure_time!(["3", "-7"]
            .into_iter()
            .map(str::parse::<i64>)
            .collect::<Result<Vec<_>, _>>());
        assert_eq!(values.unwrap(), vec![3, -7]);
    }
}
