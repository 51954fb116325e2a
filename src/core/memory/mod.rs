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

//! Memory-mapped I/O space for the CC254x
//!
//! Every register access in this crate goes through the [`IoBus`] trait. The
//! typed register accessors in [`crate::core::sfr`] hold nothing but a fixed
//! address; the bus decides what backs that address.
//!
//! # Address Spaces
//!
//! | Space   | Address Range | Contents                                   |
//! |---------|---------------|--------------------------------------------|
//! | SFR     | 0x80-0xFF     | Special function registers (direct access) |
//! | XDATA   | 0x0000-0xFFFF | SRAM, XREG peripherals, SFR mirror, flash  |
//!
//! Registers whose address is a multiple of 8 inside the SFR range are also
//! bit-addressable: `SETB`/`CLR` change one bit without touching the others.
//!
//! # Backends
//!
//! - [`SimBus`]: simulated backing store used by tests and host tooling
//! - [`VolatileBus`]: volatile accesses into caller-provided memory windows
//!
//! # Example
//!
//! ```
//! use cc254x::core::memory::{IoBus, SimBus, Space};
//!
//! let bus = SimBus::new();
//! bus.write(Space::Sfr, 0xFE, 0x01);
//! assert_eq!(bus.read(Space::Sfr, 0xFE), 0x01);
//!
//! // SFRs are mirrored into XDATA at 0x7080-0x70FF
//! assert_eq!(bus.read(Space::Xdata, 0x70FE), 0x01);
//! ```

pub mod region;
mod sim;
mod volatile;

#[cfg(test)]
mod tests;

pub use region::{identify_region, XdataRegion};
pub use sim::{Access, AccessKind, SimBus};
pub use volatile::VolatileBus;

use serde::Serialize;
use std::fmt;

/// First SFR address
pub const SFR_START: u8 = 0x80;

/// Last SFR address
pub const SFR_END: u8 = 0xFF;

/// Number of SFR slots
pub const SFR_COUNT: usize = 128;

/// XDATA base of the SFR mirror window (`0x7000 + sfr` for sfr in 0x80-0xFF)
pub const XDATA_SFR_BASE: u16 = 0x7000;

/// Size of the XDATA space
pub const XDATA_SIZE: usize = 0x1_0000;

/// Address space a register lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    /// Direct SFR space (0x80-0xFF)
    Sfr,
    /// External data space (16-bit)
    Xdata,
}

impl Space {
    /// Lowercase name used in logs and tool output
    pub const fn name(self) -> &'static str {
        match self {
            Space::Sfr => "sfr",
            Space::Xdata => "xdata",
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check whether an SFR address is bit-addressable
///
/// Only registers at a multiple of 8 inside 0x80-0xFF support bit access.
pub const fn is_bit_addressable(addr: u8) -> bool {
    addr >= SFR_START && addr % 8 == 0
}

/// Process-wide memory-mapped I/O space
///
/// Accessors take `&self`: register values are ambient state that main-line
/// code and interrupt handlers both touch, and there is exactly one core.
/// Implementations use interior mutability and need not be `Sync`.
///
/// Nothing here is atomic across calls. A read-modify-write on a register an
/// interrupt handler also writes must be wrapped in interrupt masking by the
/// caller.
pub trait IoBus {
    /// Read one byte
    fn read(&self, space: Space, addr: u16) -> u8;

    /// Write one byte
    fn write(&self, space: Space, addr: u16, value: u8);

    /// Read one bit of a bit-addressable SFR
    ///
    /// `index` is taken modulo 8, like the bit field of a bit address.
    fn read_bit(&self, addr: u8, index: u8) -> bool {
        (self.read(Space::Sfr, addr as u16) >> (index & 7)) & 1 != 0
    }

    /// Write one bit of a bit-addressable SFR
    ///
    /// Hardware performs this as a single `SETB`/`CLR`. The default falls back
    /// to read-modify-write; backends that can do better override it.
    /// `index` is taken modulo 8.
    fn write_bit(&self, addr: u8, index: u8, value: bool) {
        let current = self.read(Space::Sfr, addr as u16);
        let mask = 1u8 << (index & 7);
        let next = if value { current | mask } else { current & !mask };
        self.write(Space::Sfr, addr as u16, next);
    }
}

impl<B: IoBus + ?Sized> IoBus for &B {
    fn read(&self, space: Space, addr: u16) -> u8 {
        (**self).read(space, addr)
    }

    fn write(&self, space: Space, addr: u16, value: u8) {
        (**self).write(space, addr, value)
    }

    fn read_bit(&self, addr: u8, index: u8) -> bool {
        (**self).read_bit(addr, index)
    }

    fn write_bit(&self, addr: u8, index: u8, value: bool) {
        (**self).write_bit(addr, index, value)
    }
}
