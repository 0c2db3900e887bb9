// src/model/customer.rs

/// One customer standing in line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Customer {
    // Identity
    arrival_tick: i64,

    // Countdown state, only touched while this customer is at the front
    pub remaining_tolerance: i64,
    pub remaining_service: i64,
}

/// What happened to the front customer during one tick of service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceOutcome {
    pub tolerance_exceeded: bool,
    pub served: bool,
}

impl Customer {
    pub fn new(arrival_tick: i64, tolerance: i64, service_time: i64) -> Self {
        Self {
            arrival_tick,
            remaining_tolerance: tolerance,
            remaining_service: service_time,
        }
    }

    pub fn arrival_tick(&self) -> i64 {
        self.arrival_tick
    }

    /// Spends one tick at the counter.
    ///
    /// Both countdowns drop by one, then each is compared against exactly
    /// zero. Tolerance keeps counting below zero while service continues, so
    /// the "exceeded" event fires once, on the tick it lands on zero. The two
    /// events are independent and can both fire on the same tick.
    pub fn serve_tick(&mut self) -> ServiceOutcome {
        self.remaining_service -= 1;
        self.remaining_tolerance -= 1;

        ServiceOutcome {
            tolerance_exceeded: self.remaining_tolerance == 0,
            served: self.remaining_service == 0,
        }
    }
}
