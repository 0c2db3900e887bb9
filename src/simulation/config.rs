// src/simulation/config.rs

use crate::error::{SimError, SimResult};

/// The six bounds that drive one run, in parameter-file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub min_tolerance: i64,
    pub max_tolerance: i64,
    pub min_service: i64,
    pub max_service: i64,
    /// Denominator of the per-tick arrival chance (`1 / arrival_rate`).
    pub arrival_rate: i64,
    pub total_ticks: i64,
}

/// Labels written in front of each value by [`SimulationConfig::to_param_text`].
pub const PARAM_LABELS: [&str; 6] = [
    "Minimum tolerance time:",
    "Maximum tolerance time:",
    "Minimum service time (seconds):",
    "Maximum service time (seconds):",
    "Customer arrival rate:",
    "Total simulation time:",
];

/// Field names, same order as [`PARAM_LABELS`].
pub const PARAM_FIELDS: [&str; 6] = [
    "min_tolerance",
    "max_tolerance",
    "min_service",
    "max_service",
    "arrival_rate",
    "total_ticks",
];

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            min_tolerance: 60,
            max_tolerance: 300,
            min_service: 30,
            max_service: 120,
            arrival_rate: 90,
            total_ticks: 28_800, // eight hours of seconds
        }
    }
}

impl SimulationConfig {
    /// Builds a config from the six values in file order.
    pub fn from_values(values: [i64; 6]) -> Self {
        let [min_tolerance, max_tolerance, min_service, max_service, arrival_rate, total_ticks] =
            values;
        Self {
            min_tolerance,
            max_tolerance,
            min_service,
            max_service,
            arrival_rate,
            total_ticks,
        }
    }

    pub fn values(&self) -> [i64; 6] {
        [
            self.min_tolerance,
            self.max_tolerance,
            self.min_service,
            self.max_service,
            self.arrival_rate,
            self.total_ticks,
        ]
    }

    /// Rejects bounds that would make sampling undefined or wedge the line.
    ///
    /// A service time below one never reaches exactly zero, so that customer
    /// would hold the counter forever. A tolerance of zero is fine: the
    /// customer is served normally and never counts as exceeded.
    pub fn validate(&self) -> SimResult<()> {
        check_range("tolerance", 0, self.min_tolerance, self.max_tolerance)?;
        check_range("service", 1, self.min_service, self.max_service)?;

        if self.arrival_rate < 1 {
            return Err(SimError::Range {
                field: "arrival_rate",
                reason: format!("must be at least 1, got {}", self.arrival_rate),
            });
        }
        if self.total_ticks < 0 {
            return Err(SimError::Range {
                field: "total_ticks",
                reason: format!("must not be negative, got {}", self.total_ticks),
            });
        }
        Ok(())
    }

    /// "min - max" echo of the tolerance bounds.
    pub fn tolerance_range(&self) -> String {
        format!("{} - {}", self.min_tolerance, self.max_tolerance)
    }

    /// "min - max" echo of the service-time bounds.
    pub fn service_range(&self) -> String {
        format!("{} - {}", self.min_service, self.max_service)
    }

    /// Renders the config in the parameter-file format, one labelled value per line.
    pub fn to_param_text(&self) -> String {
        let mut out = String::new();
        for (label, value) in PARAM_LABELS.iter().zip(self.values()) {
            out.push_str(label);
            out.push(' ');
            out.push_str(&value.to_string());
            out.push('\n');
        }
        out
    }
}

fn check_range(field: &'static str, floor: i64, min: i64, max: i64) -> SimResult<()> {
    if min < floor {
        return Err(SimError::Range {
            field,
            reason: format!("minimum must be at least {}, got {}", floor, min),
        });
    }
    if min > max {
        return Err(SimError::Range {
            field,
            reason: format!("minimum {} exceeds maximum {}", min, max),
        });
    }
    Ok(())
}
