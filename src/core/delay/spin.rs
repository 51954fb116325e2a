// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Cycle-counter busy-wait
//!
//! For targets other than the 8051 core. Instead of counting instruction
//! cycles by construction, the delay reads a free-running counter and spins
//! until a deadline, so it is calibrated by the counter's frequency alone.

use super::{Cycles, Delay};
use std::time::Instant;

/// Free-running cycle counter
pub trait CycleCounter {
    /// Current count; wraps
    fn cycles(&self) -> Cycles;

    /// Count rate in Hz
    fn frequency(&self) -> u64;

    /// Convert microseconds to counts, rounding up
    fn us_to_cycles(&self, us: u64) -> Cycles {
        (us * self.frequency()).div_ceil(1_000_000)
    }
}

/// Host monotonic clock as a 1 GHz counter
#[derive(Debug, Clone, Copy)]
pub struct HostClock {
    origin: Instant,
}

impl HostClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for HostClock {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleCounter for HostClock {
    fn cycles(&self) -> Cycles {
        self.origin.elapsed().as_nanos() as Cycles
    }

    fn frequency(&self) -> u64 {
        1_000_000_000
    }
}

/// Deadline busy-wait on a [`CycleCounter`]
#[derive(Debug, Clone)]
pub struct SpinDelay<C: CycleCounter> {
    counter: C,
}

impl SpinDelay<HostClock> {
    /// Spin on the host clock
    pub fn host() -> Self {
        Self::new(HostClock::new())
    }
}

impl<C: CycleCounter> SpinDelay<C> {
    pub fn new(counter: C) -> Self {
        log::trace!("SpinDelay at {} Hz", counter.frequency());
        Self { counter }
    }

    pub fn counter(&self) -> &C {
        &self.counter
    }

    /// Spin until `span` counts have passed
    ///
    /// Wrapping subtraction keeps the comparison correct across a counter
    /// wrap.
    pub fn spin(&self, span: Cycles) {
        let start = self.counter.cycles();
        while self.counter.cycles().wrapping_sub(start) < span {
            std::hint::spin_loop();
        }
    }
}

impl<C: CycleCounter> Delay for SpinDelay<C> {
    fn delay_us(&mut self, us: u8) {
        if us == 0 {
            return;
        }
        self.spin(self.counter.us_to_cycles(u64::from(us)));
    }
}
