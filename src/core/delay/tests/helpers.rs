// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Helper functions for delay tests

use super::*;
use std::cell::Cell;

/// Cycles of one balanced `delay_us(n)` call for n >= 1 at default timing
pub fn balanced_cycles(n: u8) -> Cycles {
    32 * Cycles::from(n) - 7
}

/// Model one call of the given layout at `base`
pub fn call(base: u16, layout: Layout, count: u8) -> CallTiming {
    TimingModel::default().call(&assemble(base, layout), count)
}

/// Delay that records every `delay_us` argument
#[derive(Default)]
pub struct RecordingDelay {
    pub calls: Vec<u8>,
}

impl Delay for RecordingDelay {
    fn delay_us(&mut self, us: u8) {
        self.calls.push(us);
    }
}

/// Counter that advances by `step` on every read
pub struct SteppingCounter {
    pub now: Cell<Cycles>,
    pub step: Cycles,
    pub reads: Cell<u64>,
    pub frequency: u64,
}

impl SteppingCounter {
    pub fn new(start: Cycles, step: Cycles, frequency: u64) -> Self {
        Self {
            now: Cell::new(start),
            step,
            reads: Cell::new(0),
            frequency,
        }
    }
}

impl CycleCounter for SteppingCounter {
    fn cycles(&self) -> Cycles {
        let now = self.now.get();
        self.now.set(now.wrapping_add(self.step));
        self.reads.set(self.reads.get() + 1);
        now
    }

    fn frequency(&self) -> u64 {
        self.frequency
    }
}
