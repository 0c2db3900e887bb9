// src/simulation/stats.rs

use crate::simulation::config::SimulationConfig;

/// Running counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    pub customers_served: u64,
    pub ticks_with_empty_queue: u64,
    pub customers_exceeded_tolerance: u64,
    /// Always equal to the live queue length.
    pub customers_still_waiting: u64,
}

/// Final, read-only view of a run. These are the only values a
/// presentation layer should consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationReport {
    pub tolerance_range: String,
    pub service_range: String,
    pub customers_in_line: u64,
    pub customers_served: u64,
    pub empty_line_minutes: u64,
    /// `None` when nobody was served and the average is undefined.
    pub average_wait_minutes: Option<i64>,
    pub customers_exceeded_tolerance: u64,
}

impl SimulationStats {
    /// Run length divided by customers served, in ticks.
    pub fn average_wait_ticks(&self, total_ticks: i64) -> Option<i64> {
        if self.customers_served == 0 {
            return None;
        }
        Some(total_ticks / self.customers_served as i64)
    }
}

impl SimulationReport {
    pub fn new(config: &SimulationConfig, stats: &SimulationStats) -> Self {
        let average_wait_ticks = stats.average_wait_ticks(config.total_ticks);

        Self {
            tolerance_range: config.tolerance_range(),
            service_range: config.service_range(),
            customers_in_line: stats.customers_still_waiting,
            customers_served: stats.customers_served,
            empty_line_minutes: stats.ticks_with_empty_queue / 60,
            average_wait_minutes: average_wait_ticks.map(|t| t / 60),
            customers_exceeded_tolerance: stats.customers_exceeded_tolerance,
        }
    }
}
