//! Wall-clock asteroid spawn timer
//!
//! Frame rate independent: callers feed elapsed milliseconds and get back how
//! many whole periods have completed since the last call.

/// Most spawns one `advance` call reports; the backlog beyond it is dropped
pub const MAX_SPAWNS_PER_ADVANCE: u32 = 8;

#[derive(Debug, Clone)]
pub struct SpawnTimer {
    period_ms: u32,
    elapsed_ms: f64,
}

impl SpawnTimer {
    /// `period_ms` must be non-zero ([`crate::Settings::validate`] enforces this)
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            elapsed_ms: 0.0,
        }
    }

    /// Accumulate `dt_ms` and return the number of periods that fired.
    ///
    /// At most [`MAX_SPAWNS_PER_ADVANCE`] are reported per call, so a long stall
    /// (suspended tab, debugger) does not flood the field on resume.
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.elapsed_ms += dt_ms;
        }
        let period = self.period_ms as f64;
        let periods = (self.elapsed_ms / period).floor();
        self.elapsed_ms %= period;

        if periods > MAX_SPAWNS_PER_ADVANCE as f64 {
            log::debug!(
                "Spawn timer dropped {} missed periods",
                periods - MAX_SPAWNS_PER_ADVANCE as f64
            );
            MAX_SPAWNS_PER_ADVANCE
        } else {
            periods as u32
        }
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0.0;
    }
}
