// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Simulated I/O space
//!
//! `SimBus` stands in for the chip in unit tests and host tools. SFRs and
//! XDATA are plain storage cells: a written value reads back unchanged, with
//! no peripheral side effects. The SFR mirror window in XDATA aliases the
//! same cells as direct SFR access, as on hardware.

use super::region::{identify_region, XdataRegion};
use super::{IoBus, Space, SFR_COUNT, SFR_START, XDATA_SFR_BASE, XDATA_SIZE};
use std::cell::{Cell, RefCell};

/// Kind of a recorded bus access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    Read,
    Write,
}

/// One recorded bus access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    pub kind: AccessKind,
    pub space: Space,
    pub addr: u16,
    pub value: u8,
}

/// Simulated backing store for the CC254x I/O space
///
/// Not `Sync`: the chip has a single core and this type models it.
pub struct SimBus {
    /// SFR cells for 0x80-0xFF
    sfr: [Cell<u8>; SFR_COUNT],

    /// Full 64KB XDATA space
    ///
    /// The SFR mirror window is never stored here; it routes to `sfr`.
    xdata: Box<[Cell<u8>]>,

    /// Access log, recorded only when enabled
    trace: RefCell<Option<Vec<Access>>>,
}

impl SimBus {
    /// Erased flash reads back as 0xFF
    const ERASED: u8 = 0xFF;

    /// Create a simulated bus with all registers and SRAM cleared
    ///
    /// # Example
    ///
    /// ```
    /// use cc254x::core::memory::{IoBus, SimBus, Space};
    ///
    /// let bus = SimBus::new();
    /// assert_eq!(bus.read(Space::Sfr, 0x80), 0);
    /// assert_eq!(bus.read(Space::Xdata, 0x8000), 0xFF);
    /// ```
    pub fn new() -> Self {
        let bus = Self {
            sfr: std::array::from_fn(|_| Cell::new(0)),
            xdata: (0..XDATA_SIZE).map(|_| Cell::new(0)).collect(),
            trace: RefCell::new(None),
        };
        bus.reset();
        bus
    }

    /// Reset all cells to power-on contents
    ///
    /// Registers and SRAM read as zero; the flash windows read as erased.
    pub fn reset(&self) {
        for cell in self.sfr.iter() {
            cell.set(0);
        }
        for (addr, cell) in self.xdata.iter().enumerate() {
            let value = match identify_region(addr as u16) {
                XdataRegion::InfoPage | XdataRegion::FlashBank => Self::ERASED,
                _ => 0,
            };
            cell.set(value);
        }
        log::debug!("SimBus reset");
    }

    /// Start recording every access
    pub fn enable_trace(&self) {
        *self.trace.borrow_mut() = Some(Vec::new());
    }

    /// Take the recorded accesses, leaving recording enabled
    pub fn take_trace(&self) -> Vec<Access> {
        self.trace
            .borrow_mut()
            .as_mut()
            .map(std::mem::take)
            .unwrap_or_default()
    }

    fn record(&self, kind: AccessKind, space: Space, addr: u16, value: u8) {
        if let Some(log) = self.trace.borrow_mut().as_mut() {
            log.push(Access {
                kind,
                space,
                addr,
                value,
            });
        }
    }

    fn sfr_cell(&self, addr: u16) -> Option<&Cell<u8>> {
        if addr < SFR_START as u16 || addr > 0xFF {
            return None;
        }
        self.sfr.get((addr - SFR_START as u16) as usize)
    }

    fn read_xdata(&self, addr: u16) -> u8 {
        match identify_region(addr) {
            XdataRegion::SfrMirror => self
                .sfr_cell(addr - XDATA_SFR_BASE)
                .map(Cell::get)
                .unwrap_or(0),
            XdataRegion::Unmapped => {
                log::warn!("XDATA read from unmapped address 0x{:04X}", addr);
                0
            }
            _ => self.xdata[addr as usize].get(),
        }
    }

    fn write_xdata(&self, addr: u16, value: u8) {
        match identify_region(addr) {
            XdataRegion::SfrMirror => {
                if let Some(cell) = self.sfr_cell(addr - XDATA_SFR_BASE) {
                    cell.set(value);
                }
            }
            XdataRegion::InfoPage | XdataRegion::FlashBank => {
                log::warn!(
                    "XDATA write to flash at 0x{:04X} = 0x{:02X} ignored",
                    addr,
                    value
                );
            }
            XdataRegion::Unmapped => {
                log::warn!(
                    "XDATA write to unmapped address 0x{:04X} = 0x{:02X} ignored",
                    addr,
                    value
                );
            }
            _ => self.xdata[addr as usize].set(value),
        }
    }
}

impl Default for SimBus {
    fn default() -> Self {
        Self::new()
    }
}

impl IoBus for SimBus {
    fn read(&self, space: Space, addr: u16) -> u8 {
        let value = match space {
            Space::Sfr => match self.sfr_cell(addr) {
                Some(cell) => cell.get(),
                None => {
                    log::warn!("SFR read outside 0x80-0xFF at 0x{:02X}", addr);
                    0
                }
            },
            Space::Xdata => self.read_xdata(addr),
        };
        log::trace!("{} read 0x{:04X} -> 0x{:02X}", space, addr, value);
        self.record(AccessKind::Read, space, addr, value);
        value
    }

    fn write(&self, space: Space, addr: u16, value: u8) {
        log::trace!("{} write 0x{:04X} = 0x{:02X}", space, addr, value);
        self.record(AccessKind::Write, space, addr, value);
        match space {
            Space::Sfr => match self.sfr_cell(addr) {
                Some(cell) => cell.set(value),
                None => log::warn!("SFR write outside 0x80-0xFF at 0x{:02X}", addr),
            },
            Space::Xdata => self.write_xdata(addr, value),
        }
    }

    fn write_bit(&self, addr: u8, index: u8, value: bool) {
        // Single cell update, the simulated SETB/CLR
        let Some(cell) = self.sfr_cell(addr as u16) else {
            log::warn!("Bit write outside 0x80-0xFF at 0x{:02X}", addr);
            return;
        };
        let mask = 1u8 << (index & 7);
        let next = if value {
            cell.get() | mask
        } else {
            cell.get() & !mask
        };
        log::trace!("sfr bit 0x{:02X}.{} = {}", addr, index, value as u8);
        self.record(AccessKind::Write, Space::Sfr, addr as u16, next);
        cell.set(next);
    }
}
