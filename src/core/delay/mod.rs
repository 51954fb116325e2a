// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Busy-Wait Delays
//!
//! Microsecond and millisecond delays that need no timer peripheral.
//!
//! # The Parity Problem
//!
//! On the CC254x core a taken jump, call or return to an odd code address
//! costs one cycle more than the same transfer to an even address. A delay
//! loop with a single backward jump therefore runs at two different speeds
//! depending on where the linker happens to place it.
//!
//! The 8051 routine modelled in [`model`] takes two jumps per iteration
//! whose targets sit an odd distance apart. For any link address exactly
//! one of them is odd, so every iteration pays exactly one penalty cycle.
//! The entry jump is arranged the same way against the call into the
//! routine.
//!
//! ```text
//!         ljmp  check
//! loopStart:
//!         nop x 9
//!         ljmp  loopJump
//!         nop                  ; never executed, shifts loopJump parity
//! loopJump:
//!         nop x 9
//! check:
//!         mov   a, dpl
//!         jz    loopEnd        ; delay_us(0) returns here
//!         djnz  dpl, loopStart
//! loopEnd:
//!         ret
//! ```
//!
//! At 32 MHz one iteration is 32 cycles, one microsecond.
//!
//! # Implementations
//!
//! | Type                      | Target                  | Time source          |
//! |---------------------------|-------------------------|----------------------|
//! | [`model::ModeledDelay`]   | 8051 core (simulated)   | instruction timing   |
//! | [`spin::SpinDelay`]       | any host                | a [`spin::CycleCounter`] |
//!
//! The parity trick belongs to the 8051 core. Other targets do not port it:
//! they recalibrate against their own cycle counter.
//!
//! # Example
//!
//! ```
//! use cc254x::core::delay::{Delay, model::ModeledDelay};
//!
//! let mut delay = ModeledDelay::new(0x0421);
//! delay.delay_ms(2);
//!
//! // 2 ms, a little under because the loop overhead is not counted
//! let us = delay.elapsed_us();
//! assert!(us > 1990.0 && us < 2000.0);
//! ```

pub mod model;
pub mod spin;

#[cfg(test)]
mod tests;

/// Relative cycle count
pub type Cycles = u64;

/// One millisecond as consecutive `delay_us` calls
///
/// The last call is one microsecond short to absorb the call and loop
/// overhead of the four calls.
pub const DELAY_MS_SPLIT: [u8; 4] = [250, 250, 250, 249];

/// Busy-wait delay
///
/// Not cancellable. Interrupt handlers that run during a delay extend it;
/// nothing shortens it.
pub trait Delay {
    /// Wait `us` microseconds; 0 returns immediately
    fn delay_us(&mut self, us: u8);

    /// Wait `ms` milliseconds as `ms` repetitions of [`DELAY_MS_SPLIT`]
    fn delay_ms(&mut self, ms: u16) {
        for _ in 0..ms {
            for us in DELAY_MS_SPLIT {
                self.delay_us(us);
            }
        }
    }
}

impl<D: Delay + ?Sized> Delay for &mut D {
    fn delay_us(&mut self, us: u8) {
        (**self).delay_us(us)
    }

    fn delay_ms(&mut self, ms: u16) {
        (**self).delay_ms(ms)
    }
}

/// Busy-wait on the host clock
pub fn delay_us(us: u8) {
    spin::SpinDelay::host().delay_us(us);
}

/// Busy-wait on the host clock
pub fn delay_ms(ms: u16) {
    spin::SpinDelay::host().delay_ms(ms);
}
