// src/io/params.rs

use crate::error::{SimError, SimResult};
use crate::simulation::config::{SimulationConfig, PARAM_FIELDS};
use std::fs;
use std::path::Path;

/// Reads a parameter file from disk. See [`parse_params`] for the format.
pub fn load_params(path: &Path) -> SimResult<SimulationConfig> {
    let text = fs::read_to_string(path)?;
    let config = parse_params(&text)?;
    log::info!("loaded parameters from {}", path.display());
    Ok(config)
}

/// Parses the six run parameters, one labelled value per line:
///
/// ```text
/// Minimum tolerance time: 60
/// Maximum tolerance time: 300
/// Minimum service time (seconds): 30
/// Maximum service time (seconds): 120
/// Customer arrival rate: 90
/// Total simulation time: 28800
/// ```
///
/// The last token on each line is the value; everything before it is label
/// and may contain anything, digits included. Blank lines are skipped. Values
/// are taken in order: tolerance bounds, service bounds, arrival rate, run
/// length. Lines after the sixth are ignored.
pub fn parse_params(text: &str) -> SimResult<SimulationConfig> {
    let mut values = [0i64; 6];
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    for (slot, field) in values.iter_mut().zip(PARAM_FIELDS) {
        let line = lines
            .next()
            .ok_or_else(|| SimError::Config(format!("missing value for {}", field)))?;
        *slot = parse_value(line, field)?;
    }

    Ok(SimulationConfig::from_values(values))
}

fn parse_value(line: &str, field: &str) -> SimResult<i64> {
    // Non-blank, so there is at least one token
    let token = line.split_whitespace().last().unwrap_or_default();
    token
        .parse::<i64>()
        .map_err(|e| SimError::Config(format!("{}: bad value '{}': {}", field, token, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
Minimum tolerance time: 60
Maximum tolerance time: 300
Minimum service time (seconds): 30
Maximum service time (seconds): 120
Customer arrival rate: 90
Total simulation time: 28800
";

    #[test]
    fn parses_labelled_values_in_order() {
        let config = parse_params(SAMPLE).unwrap();
        assert_eq!(config.values(), [60, 300, 30, 120, 90, 28_800]);
    }

    #[test]
    fn bare_values_one_per_line() {
        let config = parse_params("1\n2\n\n3\n4\n5\n6\n").unwrap();
        assert_eq!(config.values(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn digits_inside_a_label_are_not_values() {
        let text = SAMPLE.replace("Customer arrival rate: 90", "Customer arrival rate per 60 seconds: 4");
        let config = parse_params(&text).unwrap();
        assert_eq!(config.arrival_rate, 4);
        assert_eq!(config.total_ticks, 28_800);
    }

    #[test]
    fn fractional_value_names_the_field() {
        let text = SAMPLE.replace("Customer arrival rate: 90", "Customer arrival rate: 4.5");
        match parse_params(&text).unwrap_err() {
            SimError::Config(msg) => assert!(msg.contains("arrival_rate"), "{}", msg),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn word_or_suffixed_value_is_config_error() {
        for bad in ["ten", "60s"] {
            let text = SAMPLE.replace("Minimum tolerance time: 60", &format!("Minimum tolerance time: {}", bad));
            assert!(matches!(parse_params(&text), Err(SimError::Config(_))), "{}", bad);
        }
    }

    #[test]
    fn values_on_a_single_line_are_rejected() {
        let err = parse_params("a 3 b 9 c 5 d 8 e 4 f 100").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn negative_values_parse_and_are_left_to_validation() {
        let config = parse_params("a -1\nb 2\nc 3\nd 4\ne 5\nf 6").unwrap();
        assert_eq!(config.min_tolerance, -1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_value_names_the_field() {
        let err = parse_params("Minimum tolerance time: 1\nMaximum tolerance time: 2").unwrap_err();
        match err {
            SimError::Config(msg) => assert!(msg.contains("min_service"), "{}", msg),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn overflowing_value_is_config_error() {
        let err = parse_params("x 99999999999999999999999\n1\n1\n1\n1\n1").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn empty_input_is_config_error() {
        assert!(matches!(parse_params(""), Err(SimError::Config(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = load_params(file.path()).unwrap();
        assert_eq!(config.arrival_rate, 90);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_params(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }
}
