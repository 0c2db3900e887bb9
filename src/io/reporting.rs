// src/io/reporting.rs

use crate::error::SimResult;
use crate::simulation::config::SimulationConfig;
use crate::simulation::engine::TickRecord;
use crate::simulation::stats::SimulationReport;
use std::path::Path;

/// Parameter banner printed before a run.
pub fn render_parameters(config: &SimulationConfig) -> String {
    format!(
        "Parameters follow:\n\n\
         Tolerance range: {}\n\
         Service Time range: {}\n\
         Average number of seconds between new arrivals: {}\n",
        config.tolerance_range(),
        config.service_range(),
        config.arrival_rate
    )
}

/// End-of-run summary.
pub fn render_report(report: &SimulationReport) -> String {
    let average_wait = match report.average_wait_minutes {
        Some(minutes) => minutes.to_string(),
        None => "N/A".to_string(),
    };

    format!(
        "Simulation complete\n\n\
         Number of customers remaining in line: {}\n\
         Number of customers helped: {}\n\
         Total amount of time with an empty line (minutes): {}\n\
         Average customer wait time (minutes): {}\n\
         Number of customers not returning: {}\n",
        report.customers_in_line,
        report.customers_served,
        report.empty_line_minutes,
        average_wait,
        report.customers_exceeded_tolerance
    )
}

/// Dumps tick records to `path` as CSV, header row first. An existing file
/// is overwritten.
pub fn write_history_csv(path: &Path, data: &[TickRecord]) -> SimResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for record in data {
        wtr.serialize(record)?;
    }

    wtr.flush()?;

    log::info!("exported {} rows to '{}'", data.len(), path.display());
    Ok(())
}
