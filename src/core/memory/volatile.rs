// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Volatile pointer backend
//!
//! For hosts that reach the register file through a plain memory window
//! (a debugger mapping, a shared-memory co-simulation, a port of this layer
//! to a core whose peripherals are memory-mapped). Every access is a single
//! volatile load or store; nothing is cached.

use super::{IoBus, Space, SFR_COUNT, SFR_START, XDATA_SIZE};
use core::ptr::{read_volatile, write_volatile};

/// I/O space backed by raw memory windows
pub struct VolatileBus {
    /// Window holding SFRs 0x80-0xFF (128 bytes, index 0 = 0x80)
    sfr_base: *mut u8,

    /// Window holding the 64KB XDATA space
    xdata_base: *mut u8,
}

impl VolatileBus {
    /// Create a bus over two memory windows
    ///
    /// # Safety
    ///
    /// `sfr_base` must be valid for volatile reads and writes of 128 bytes and
    /// `xdata_base` of 65536 bytes, for as long as the bus is used. Nothing
    /// else may hold a Rust reference into either window meanwhile.
    pub unsafe fn new(sfr_base: *mut u8, xdata_base: *mut u8) -> Self {
        log::debug!(
            "VolatileBus over sfr={:p} xdata={:p}",
            sfr_base,
            xdata_base
        );
        Self {
            sfr_base,
            xdata_base,
        }
    }

    fn locate(&self, space: Space, addr: u16) -> Option<*mut u8> {
        match space {
            Space::Sfr => {
                let offset = addr.checked_sub(SFR_START as u16)? as usize;
                (offset < SFR_COUNT).then(|| {
                    // SAFETY: offset < 128, inside the window promised by `new`
                    unsafe { self.sfr_base.add(offset) }
                })
            }
            Space::Xdata => {
                let offset = addr as usize;
                (offset < XDATA_SIZE).then(|| {
                    // SAFETY: offset < 65536, inside the window promised by `new`
                    unsafe { self.xdata_base.add(offset) }
                })
            }
        }
    }
}

impl IoBus for VolatileBus {
    #[inline]
    fn read(&self, space: Space, addr: u16) -> u8 {
        match self.locate(space, addr) {
            // SAFETY: pointer lies inside a window validated at construction
            Some(ptr) => unsafe { read_volatile(ptr) },
            None => {
                log::warn!("{} read outside window at 0x{:04X}", space, addr);
                0
            }
        }
    }

    #[inline]
    fn write(&self, space: Space, addr: u16, value: u8) {
        match self.locate(space, addr) {
            // SAFETY: pointer lies inside a window validated at construction
            Some(ptr) => unsafe { write_volatile(ptr, value) },
            None => log::warn!("{} write outside window at 0x{:04X}", space, addr),
        }
    }
}
