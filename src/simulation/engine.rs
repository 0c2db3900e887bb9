// src/simulation/engine.rs

use crate::error::SimResult;
use crate::model::customer::Customer;
use crate::model::queues::WaitingQueue;
use crate::simulation::config::SimulationConfig;
use crate::simulation::stats::{SimulationReport, SimulationStats};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};
use serde::Serialize;

/// Ticks between progress lines in the debug log.
const PROGRESS_INTERVAL: i64 = 60;

// One row per tick, so a run can be written to CSV later
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickRecord {
    pub tick: i64,
    pub arrived: bool,
    pub queue_length: u64,
    pub served_total: u64,
    pub exceeded_total: u64,
    pub empty_ticks_total: u64,
}

/// Single-server waiting line advanced one tick at a time.
pub struct QueueSimulation<R: Rng> {
    config: SimulationConfig,

    // The line and its counters
    line: WaitingQueue,
    stats: SimulationStats,

    // Sampling
    rng: R,
    tolerance_dist: Uniform<i64>,
    service_dist: Uniform<i64>,

    current_tick: i64,
    // Only collected when asked for
    history: Option<Vec<TickRecord>>,
}

impl QueueSimulation<StdRng> {
    /// Reproducible run: the same config and seed always give the same result.
    pub fn seeded(config: SimulationConfig, seed: u64) -> SimResult<Self> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QueueSimulation<R> {
    /// Validates the bounds and takes ownership of the random source.
    pub fn new(config: SimulationConfig, rng: R) -> SimResult<Self> {
        config.validate()?;

        Ok(Self {
            config,
            line: WaitingQueue::new(),
            stats: SimulationStats::default(),
            rng,
            tolerance_dist: Uniform::new_inclusive(config.min_tolerance, config.max_tolerance),
            service_dist: Uniform::new_inclusive(config.min_service, config.max_service),
            current_tick: 0,
            history: None,
        })
    }

    /// Keeps one [`TickRecord`] per tick for later export.
    pub fn with_history(mut self) -> Self {
        let capacity = self.config.total_ticks.min(1 << 16) as usize;
        self.history = Some(Vec::with_capacity(capacity));
        self
    }

    pub fn run(&mut self) {
        log::info!(
            "running {} ticks (tolerance {}, service {}, arrival 1/{})",
            self.config.total_ticks,
            self.config.tolerance_range(),
            self.config.service_range(),
            self.config.arrival_rate
        );

        while !self.is_finished() {
            self.step();
        }

        log::info!(
            "finished at tick {}: {} served, {} still waiting",
            self.current_tick,
            self.stats.customers_served,
            self.stats.customers_still_waiting
        );
    }

    /// Advances exactly one tick. Does nothing once the run is over.
    ///
    /// Arrival sampling comes first, so a customer who walks up to an empty
    /// line is served in the same tick and that tick does not count as idle.
    pub fn step(&mut self) {
        if self.is_finished() {
            return;
        }
        let tick = self.current_tick;

        // PHASE 1: arrival
        let arrival = self.sample_arrival(tick);
        if let Some(customer) = arrival {
            log::debug!(
                "tick {}: arrival (tolerance {}, service {})",
                tick,
                customer.remaining_tolerance,
                customer.remaining_service
            );
            self.line.enqueue(customer);
            self.stats.customers_still_waiting += 1;
        }

        // PHASE 2: serve the front, or record an idle tick
        if self.line.is_empty() {
            self.stats.ticks_with_empty_queue += 1;
        } else {
            serve_front(&mut self.line, &mut self.stats, tick);
        }

        debug_assert_eq!(self.stats.customers_still_waiting, self.line.len() as u64);

        // PHASE 3: record and advance
        if let Some(history) = self.history.as_mut() {
            history.push(TickRecord {
                tick,
                arrived: arrival.is_some(),
                queue_length: self.stats.customers_still_waiting,
                served_total: self.stats.customers_served,
                exceeded_total: self.stats.customers_exceeded_tolerance,
                empty_ticks_total: self.stats.ticks_with_empty_queue,
            });
        }
        if tick > 0 && tick % PROGRESS_INTERVAL == 0 {
            log::debug!(
                "tick {}: line {}, served {}, idle ticks {}",
                tick,
                self.stats.customers_still_waiting,
                self.stats.customers_served,
                self.stats.ticks_with_empty_queue
            );
        }
        self.current_tick += 1;
    }

    /// Arrival chance is `1 / arrival_rate` per tick, independent across ticks.
    fn sample_arrival(&mut self, tick: i64) -> Option<Customer> {
        if self.rng.gen_range(0..self.config.arrival_rate) != 0 {
            return None;
        }
        let tolerance = self.tolerance_dist.sample(&mut self.rng);
        let service_time = self.service_dist.sample(&mut self.rng);
        Some(Customer::new(tick, tolerance, service_time))
    }

    /// Snapshot of the run so far. Calling it twice gives the same report.
    pub fn report(&self) -> SimulationReport {
        SimulationReport::new(&self.config, &self.stats)
    }

    pub fn is_finished(&self) -> bool {
        self.current_tick >= self.config.total_ticks
    }

    #[cfg(test)]
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    #[cfg(test)]
    pub fn queue(&self) -> &WaitingQueue {
        &self.line
    }

    #[cfg(test)]
    pub fn current_tick(&self) -> i64 {
        self.current_tick
    }

    /// Recorded ticks; empty unless built [`with_history`](Self::with_history).
    pub fn history(&self) -> &[TickRecord] {
        self.history.as_deref().unwrap_or(&[])
    }
}

/// One tick of work on the customer at the counter.
fn serve_front(line: &mut WaitingQueue, stats: &mut SimulationStats, tick: i64) {
    let Some(front) = line.peek_front() else {
        return;
    };
    let outcome = front.serve_tick();

    if outcome.tolerance_exceeded {
        log::debug!("tick {}: front customer ran out of patience", tick);
        stats.customers_exceeded_tolerance += 1;
    }
    if outcome.served {
        stats.customers_served += 1;
        stats.customers_still_waiting -= 1;
        if let Some(done) = line.dequeue_front() {
            log::debug!(
                "tick {}: served customer who arrived at tick {}",
                tick,
                done.arrival_tick()
            );
        }
    }
}
