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

//! CC254x Register Map
//!
//! Every special function register as a named constant at its datasheet
//! address, with bit aliases for the bit-addressable ones.
//!
//! ## Register Kinds
//!
//! - [`Sfr`]: 8-bit register in direct SFR space (0x80-0xFF)
//! - [`SfrBit`]: one bit of a bit-addressable SFR (address divisible by 8)
//! - [`XReg`]: 8-bit register in XDATA (USB, flash controller); never bit-addressable
//! - [`Reg16`]: two 8-bit registers forming one 16-bit value
//!
//! The accessors hold only an address. All storage lives behind an
//! [`IoBus`], so the same constants drive real hardware windows and the
//! simulated bus in tests.
//!
//! ## Build-Time Checks
//!
//! The tables are built by declarative macros that evaluate in const context:
//!
//! - a duplicate address in a table fails compilation
//! - a bit index above 7 fails compilation
//! - a bit alias on a register that is not bit-addressable fails compilation
//!
//! ```compile_fail
//! use cc254x::core::sfr::Sfr;
//!
//! // 0x81 is not a multiple of 8
//! const BAD: Sfr = Sfr::bit_addressable("BAD", 0x81);
//! ```
//!
//! ```compile_fail
//! use cc254x::core::sfr::map::P0;
//!
//! const BAD: cc254x::core::sfr::SfrBit = P0.bit("P0_8", 8);
//! ```
//!
//! ## Example
//!
//! ```
//! use cc254x::core::memory::SimBus;
//! use cc254x::core::sfr::map::{P1, P1_0, P1DIR};
//!
//! let bus = SimBus::new();
//!
//! P1DIR.set_bits(&bus, 0x01);
//! P1_0.set(&bus);
//!
//! assert_eq!(P1.read(&bus), 0x01);
//! assert!(P1_0.read(&bus));
//! ```
//!
//! ## References
//!
//! - SWRU191: CC253x/CC254x User's Guide, Table 2-1 (SFR Overview)

#[macro_use]
mod macros;

pub mod map;
pub mod pairs;
pub mod xreg;

#[cfg(test)]
mod tests;

use crate::core::error::{HalError, Result};
use crate::core::memory::{IoBus, Space, SFR_START, XDATA_SFR_BASE};
use serde::Serialize;

/// Register width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Width {
    /// 8-bit register
    Byte,
    /// 16-bit register pair
    Word,
}

impl Width {
    /// Width in bits
    pub const fn bits(self) -> u8 {
        match self {
            Width::Byte => 8,
            Width::Word => 16,
        }
    }
}

/// Static description of one memory-mapped register
///
/// This is the row type of the register tables. For 16-bit pairs `address`
/// is the low byte and `high_address` the high byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegisterInfo {
    pub name: &'static str,
    pub space: Space,
    pub address: u16,
    pub width: Width,
    pub bit_addressable: bool,
    /// Bit names indexed by bit position (`bits[0]` is bit 0)
    pub bits: Option<[&'static str; 8]>,
    pub high_address: Option<u16>,
}

/// 8-bit special function register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sfr {
    name: &'static str,
    address: u8,
    bit_addressable: bool,
}

impl Sfr {
    /// Declare a byte-only SFR
    pub const fn new(name: &'static str, address: u8) -> Self {
        assert!(address >= SFR_START, "SFR address below 0x80");
        Self {
            name,
            address,
            bit_addressable: false,
        }
    }

    /// Declare a bit-addressable SFR
    ///
    /// Panics (at compile time when used in a `const`) unless the address is
    /// a multiple of 8.
    pub const fn bit_addressable(name: &'static str, address: u8) -> Self {
        assert!(address >= SFR_START, "SFR address below 0x80");
        assert!(
            address % 8 == 0,
            "bit-addressable SFR address must be a multiple of 8"
        );
        Self {
            name,
            address,
            bit_addressable: true,
        }
    }

    /// Declare a named bit of this register
    pub const fn bit(self, name: &'static str, index: u8) -> SfrBit {
        assert!(self.bit_addressable, "register is not bit-addressable");
        assert!(index < 8, "bit index out of range 0-7");
        SfrBit {
            name,
            register: self,
            index,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn address(&self) -> u8 {
        self.address
    }

    pub const fn is_bit_addressable(&self) -> bool {
        self.bit_addressable
    }

    /// Address of this SFR in the XDATA mirror window
    ///
    /// ```
    /// use cc254x::core::sfr::map::DMAARM;
    ///
    /// assert_eq!(DMAARM.xdata_address(), 0x70D6);
    /// ```
    pub const fn xdata_address(&self) -> u16 {
        XDATA_SFR_BASE + self.address as u16
    }

    /// Table row for a byte-only register
    pub const fn info(&self) -> RegisterInfo {
        RegisterInfo {
            name: self.name,
            space: Space::Sfr,
            address: self.address as u16,
            width: Width::Byte,
            bit_addressable: self.bit_addressable,
            bits: None,
            high_address: None,
        }
    }

    /// Table row for a bit-addressable register
    pub const fn info_with_bits(&self, bits: [&'static str; 8]) -> RegisterInfo {
        let mut info = self.info();
        info.bits = Some(bits);
        info
    }

    #[inline]
    pub fn read<B: IoBus + ?Sized>(&self, bus: &B) -> u8 {
        bus.read(Space::Sfr, self.address as u16)
    }

    #[inline]
    pub fn write<B: IoBus + ?Sized>(&self, bus: &B, value: u8) {
        bus.write(Space::Sfr, self.address as u16, value)
    }

    /// Read-modify-write
    ///
    /// Not atomic: mask interrupts first if a handler writes this register.
    pub fn modify<B: IoBus + ?Sized>(&self, bus: &B, f: impl FnOnce(u8) -> u8) {
        let value = self.read(bus);
        self.write(bus, f(value));
    }

    /// OR `mask` into the register (read-modify-write)
    pub fn set_bits<B: IoBus + ?Sized>(&self, bus: &B, mask: u8) {
        self.modify(bus, |v| v | mask);
    }

    /// Clear `mask` from the register (read-modify-write)
    pub fn clear_bits<B: IoBus + ?Sized>(&self, bus: &B, mask: u8) {
        self.modify(bus, |v| v & !mask);
    }
}

/// Named bit of a bit-addressable SFR
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SfrBit {
    name: &'static str,
    register: Sfr,
    index: u8,
}

impl SfrBit {
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn register(&self) -> Sfr {
        self.register
    }

    pub const fn index(&self) -> u8 {
        self.index
    }

    pub const fn mask(&self) -> u8 {
        1 << self.index
    }

    /// 8051 bit address (`SETB bit`) of this bit
    ///
    /// For SFRs the bit address is the register address plus the bit index.
    pub const fn bit_address(&self) -> u8 {
        self.register.address + self.index
    }

    #[inline]
    pub fn read<B: IoBus + ?Sized>(&self, bus: &B) -> bool {
        bus.read_bit(self.register.address, self.index)
    }

    #[inline]
    pub fn write<B: IoBus + ?Sized>(&self, bus: &B, value: bool) {
        bus.write_bit(self.register.address, self.index, value)
    }

    #[inline]
    pub fn set<B: IoBus + ?Sized>(&self, bus: &B) {
        self.write(bus, true)
    }

    #[inline]
    pub fn clear<B: IoBus + ?Sized>(&self, bus: &B) {
        self.write(bus, false)
    }
}

/// 8-bit register in XDATA space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XReg {
    name: &'static str,
    address: u16,
}

impl XReg {
    pub const fn new(name: &'static str, address: u16) -> Self {
        Self { name, address }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn address(&self) -> u16 {
        self.address
    }

    pub const fn info(&self) -> RegisterInfo {
        RegisterInfo {
            name: self.name,
            space: Space::Xdata,
            address: self.address,
            width: Width::Byte,
            bit_addressable: false,
            bits: None,
            high_address: None,
        }
    }

    #[inline]
    pub fn read<B: IoBus + ?Sized>(&self, bus: &B) -> u8 {
        bus.read(Space::Xdata, self.address)
    }

    #[inline]
    pub fn write<B: IoBus + ?Sized>(&self, bus: &B, value: u8) {
        bus.write(Space::Xdata, self.address, value)
    }

    /// Read-modify-write; not atomic
    pub fn modify<B: IoBus + ?Sized>(&self, bus: &B, f: impl FnOnce(u8) -> u8) {
        let value = self.read(bus);
        self.write(bus, f(value));
    }
}

/// 16-bit register formed from two 8-bit registers
///
/// Each pair stores its own high and low byte address; no byte-order
/// convention is assumed across pairs. Both halves are accessed low byte
/// first, which latches the high byte on the timer and ADC pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reg16 {
    name: &'static str,
    space: Space,
    high: u16,
    low: u16,
}

impl Reg16 {
    /// Pair two SFRs
    pub const fn sfr(name: &'static str, high: Sfr, low: Sfr) -> Self {
        assert!(high.address != low.address, "register pair halves overlap");
        Self {
            name,
            space: Space::Sfr,
            high: high.address as u16,
            low: low.address as u16,
        }
    }

    /// Pair two XDATA registers
    pub const fn xreg(name: &'static str, high: XReg, low: XReg) -> Self {
        assert!(high.address != low.address, "register pair halves overlap");
        Self {
            name,
            space: Space::Xdata,
            high: high.address,
            low: low.address,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn space(&self) -> Space {
        self.space
    }

    pub const fn high_address(&self) -> u16 {
        self.high
    }

    pub const fn low_address(&self) -> u16 {
        self.low
    }

    pub const fn info(&self) -> RegisterInfo {
        RegisterInfo {
            name: self.name,
            space: self.space,
            address: self.low,
            width: Width::Word,
            bit_addressable: false,
            bits: None,
            high_address: Some(self.high),
        }
    }

    pub fn read<B: IoBus + ?Sized>(&self, bus: &B) -> u16 {
        let low = bus.read(self.space, self.low);
        let high = bus.read(self.space, self.high);
        u16::from_le_bytes([low, high])
    }

    pub fn write<B: IoBus + ?Sized>(&self, bus: &B, value: u16) {
        let [low, high] = value.to_le_bytes();
        bus.write(self.space, self.low, low);
        bus.write(self.space, self.high, high);
    }
}

/// Fail compilation if two rows of a table share a space and address
///
/// Called from a `const _: () = ...` item so the loop runs in the compiler.
pub(crate) const fn assert_unique_addresses(table: &[RegisterInfo]) {
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            let same_space = table[i].space as u8 == table[j].space as u8;
            if same_space && table[i].address == table[j].address {
                panic!("duplicate register address in register table");
            }
            j += 1;
        }
        i += 1;
    }
}

/// Every table row: SFRs, XDATA registers, then 16-bit pairs
pub fn registers() -> impl Iterator<Item = &'static RegisterInfo> {
    map::SFR_TABLE
        .iter()
        .chain(xreg::XREG_TABLE.iter())
        .chain(pairs::PAIR_TABLE.iter())
}

/// Look up a register by name (case-insensitive)
///
/// Names of 8-bit registers and 16-bit pairs never collide, so the first
/// match is the only one.
///
/// ```
/// use cc254x::core::sfr;
///
/// let info = sfr::lookup("dmaarm").unwrap();
/// assert_eq!(info.address, 0xD6);
/// assert!(sfr::lookup("NOPE").is_err());
/// ```
pub fn lookup(name: &str) -> Result<&'static RegisterInfo> {
    registers()
        .find(|info| info.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| HalError::UnknownRegister(name.to_string()))
}

/// Look up the 8-bit register mapped at an address
pub fn lookup_address(space: Space, address: u16) -> Result<&'static RegisterInfo> {
    let table = match space {
        Space::Sfr => map::SFR_TABLE,
        Space::Xdata => xreg::XREG_TABLE,
    };
    table
        .iter()
        .find(|info| info.address == address)
        .ok_or(HalError::UnmappedAddress {
            space: space.name(),
            address,
        })
}

/// XDATA address of an SFR through the mirror window
///
/// Usable as a DMA source or destination.
pub const fn xdata_sfr_address(sfr: Sfr) -> u16 {
    sfr.xdata_address()
}
