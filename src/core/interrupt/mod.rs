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

//! CC254x Interrupt Vectors
//!
//! The 8051 core has 18 fixed interrupt sources. Each one jumps to a fixed
//! slot in code memory, and each slot must hold exactly one handler.
//!
//! ## Interrupt Sources
//!
//! ```text
//! Id | Vector  | Slot   | Flag         | Enable      | Description
//! ---|---------|--------|--------------|-------------|-----------------------------
//! 0  | RFTXRX  | 0x0003 | TCON.1       | IEN0.0      | RF TX done / RX ready
//! 1  | ADC     | 0x000B | TCON.5       | IEN0.1      | ADC end of conversion
//! 2  | URX0    | 0x0013 | TCON.3       | IEN0.2      | USART 0 RX complete
//! 3  | URX1    | 0x001B | TCON.7       | IEN0.3      | USART 1 RX complete
//! 4  | ENC     | 0x0023 | S0CON.1:0    | IEN0.4      | AES encryption/decryption
//! 5  | ST      | 0x002B | IRCON.7      | IEN0.5      | Sleep timer compare
//! 6  | P2INT   | 0x0033 | IRCON2.0     | IEN2.1      | Port 2 inputs / USB
//! 7  | UTX0    | 0x003B | IRCON2.1     | IEN2.2      | USART 0 TX complete
//! 8  | DMA     | 0x0043 | IRCON.0      | IEN1.0      | DMA transfer complete
//! 9  | T1      | 0x004B | IRCON.1      | IEN1.1      | Timer 1
//! 10 | T2      | 0x0053 | IRCON.2      | IEN1.2      | Timer 2
//! 11 | T3      | 0x005B | IRCON.3      | IEN1.3      | Timer 3
//! 12 | T4      | 0x0063 | IRCON.4      | IEN1.4      | Timer 4
//! 13 | P0INT   | 0x006B | IRCON.5      | IEN1.5      | Port 0 inputs
//! 14 | UTX1    | 0x0073 | IRCON2.2     | IEN2.3      | USART 1 TX complete
//! 15 | P1INT   | 0x007B | IRCON2.3     | IEN2.4      | Port 1 inputs
//! 16 | RF      | 0x0083 | S1CON.1:0    | IEN2.0      | RF general
//! 17 | WDT     | 0x008B | IRCON2.4     | IEN2.5      | Watchdog overflow (timer mode)
//! ```
//!
//! The USB controller shares vector 6 with port 2.
//!
//! ## Register Banks
//!
//! A handler bound to bank 0 saves and restores every working register it
//! uses. A handler bound to bank 1-3 switches PSW to its own bank instead and
//! leaves that bank's registers modified. Main-line code must never use a
//! bank claimed by a handler.
//!
//! ## References
//!
//! - SWRU191: CC253x/CC254x User's Guide, Section 2.5 (Interrupts)

mod table;

#[cfg(test)]
mod tests;

pub use table::{
    noop, Handler, IsrBinding, VectorTable, VectorTableBuilder, VECTOR_IMAGE_LEN,
};

use crate::core::error::{HalError, Result};
use crate::core::memory::IoBus;
use crate::core::sfr::map::{self, ien2, s0con, s1con};
use crate::core::sfr::{Sfr, SfrBit};
use serde::Serialize;
use std::fmt;

/// Number of interrupt vectors
pub const VECTOR_COUNT: usize = 18;

/// Code address of the vector 0 slot
pub const FIRST_SLOT: u16 = 0x0003;

/// Distance between consecutive vector slots
pub const SLOT_STRIDE: u16 = 8;

/// Interrupt source, numbered as in the vector table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum InterruptVector {
    RfTxRx = 0,
    Adc = 1,
    Urx0 = 2,
    Urx1 = 3,
    Enc = 4,
    St = 5,
    P2Int = 6,
    Utx0 = 7,
    Dma = 8,
    T1 = 9,
    T2 = 10,
    T3 = 11,
    T4 = 12,
    P0Int = 13,
    Utx1 = 14,
    P1Int = 15,
    Rf = 16,
    Wdt = 17,
}

impl InterruptVector {
    /// USB shares the port 2 vector
    pub const USB: InterruptVector = InterruptVector::P2Int;

    /// Every vector in id order
    pub const ALL: [InterruptVector; VECTOR_COUNT] = [
        InterruptVector::RfTxRx,
        InterruptVector::Adc,
        InterruptVector::Urx0,
        InterruptVector::Urx1,
        InterruptVector::Enc,
        InterruptVector::St,
        InterruptVector::P2Int,
        InterruptVector::Utx0,
        InterruptVector::Dma,
        InterruptVector::T1,
        InterruptVector::T2,
        InterruptVector::T3,
        InterruptVector::T4,
        InterruptVector::P0Int,
        InterruptVector::Utx1,
        InterruptVector::P1Int,
        InterruptVector::Rf,
        InterruptVector::Wdt,
    ];

    /// Vector for an id in 0-17
    ///
    /// ```
    /// use cc254x::core::interrupt::InterruptVector;
    ///
    /// assert_eq!(InterruptVector::from_id(8).unwrap(), InterruptVector::Dma);
    /// assert!(InterruptVector::from_id(18).is_err());
    /// ```
    pub fn from_id(id: u8) -> Result<Self> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or(HalError::InvalidVector(id))
    }

    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Datasheet name
    pub const fn name(self) -> &'static str {
        match self {
            InterruptVector::RfTxRx => "RFTXRX",
            InterruptVector::Adc => "ADC",
            InterruptVector::Urx0 => "URX0",
            InterruptVector::Urx1 => "URX1",
            InterruptVector::Enc => "ENC",
            InterruptVector::St => "ST",
            InterruptVector::P2Int => "P2INT",
            InterruptVector::Utx0 => "UTX0",
            InterruptVector::Dma => "DMA",
            InterruptVector::T1 => "T1",
            InterruptVector::T2 => "T2",
            InterruptVector::T3 => "T3",
            InterruptVector::T4 => "T4",
            InterruptVector::P0Int => "P0INT",
            InterruptVector::Utx1 => "UTX1",
            InterruptVector::P1Int => "P1INT",
            InterruptVector::Rf => "RF",
            InterruptVector::Wdt => "WDT",
        }
    }

    /// Vector for a datasheet name (case-insensitive); `USB` is accepted
    pub fn from_name(name: &str) -> Result<Self> {
        if name.eq_ignore_ascii_case("USB") {
            return Ok(Self::USB);
        }
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| HalError::Parse(format!("unknown interrupt vector: {}", name)))
    }

    /// Code address the CPU jumps to for this vector
    pub const fn slot_address(self) -> u16 {
        FIRST_SLOT + SLOT_STRIDE * self as u16
    }

    /// Interrupt flag raised by the source
    pub const fn flag(self) -> FlagLocation {
        match self {
            InterruptVector::RfTxRx => FlagLocation::bit(map::RFTXRXIF),
            InterruptVector::Adc => FlagLocation::bit(map::ADCIF),
            InterruptVector::Urx0 => FlagLocation::bit(map::URX0IF),
            InterruptVector::Urx1 => FlagLocation::bit(map::URX1IF),
            InterruptVector::Enc => FlagLocation::new(map::S0CON, s0con::ENCIF),
            InterruptVector::St => FlagLocation::bit(map::STIF),
            InterruptVector::P2Int => FlagLocation::bit(map::P2IF),
            InterruptVector::Utx0 => FlagLocation::bit(map::UTX0IF),
            InterruptVector::Dma => FlagLocation::bit(map::DMAIF),
            InterruptVector::T1 => FlagLocation::bit(map::T1IF),
            InterruptVector::T2 => FlagLocation::bit(map::T2IF),
            InterruptVector::T3 => FlagLocation::bit(map::T3IF),
            InterruptVector::T4 => FlagLocation::bit(map::T4IF),
            InterruptVector::P0Int => FlagLocation::bit(map::P0IF),
            InterruptVector::Utx1 => FlagLocation::bit(map::UTX1IF),
            InterruptVector::P1Int => FlagLocation::bit(map::P1IF),
            InterruptVector::Rf => FlagLocation::new(map::S1CON, s1con::RFIF),
            InterruptVector::Wdt => FlagLocation::bit(map::WDTIF),
        }
    }

    /// Per-source interrupt enable
    pub const fn enable(self) -> FlagLocation {
        match self {
            InterruptVector::RfTxRx => FlagLocation::bit(map::RFTXRXIE),
            InterruptVector::Adc => FlagLocation::bit(map::ADCIE),
            InterruptVector::Urx0 => FlagLocation::bit(map::URX0IE),
            InterruptVector::Urx1 => FlagLocation::bit(map::URX1IE),
            InterruptVector::Enc => FlagLocation::bit(map::ENCIE),
            InterruptVector::St => FlagLocation::bit(map::STIE),
            InterruptVector::P2Int => FlagLocation::new(map::IEN2, ien2::P2IE),
            InterruptVector::Utx0 => FlagLocation::new(map::IEN2, ien2::UTX0IE),
            InterruptVector::Dma => FlagLocation::bit(map::DMAIE),
            InterruptVector::T1 => FlagLocation::bit(map::T1IE),
            InterruptVector::T2 => FlagLocation::bit(map::T2IE),
            InterruptVector::T3 => FlagLocation::bit(map::T3IE),
            InterruptVector::T4 => FlagLocation::bit(map::T4IE),
            InterruptVector::P0Int => FlagLocation::bit(map::P0IE),
            InterruptVector::Utx1 => FlagLocation::new(map::IEN2, ien2::UTX1IE),
            InterruptVector::P1Int => FlagLocation::new(map::IEN2, ien2::P1IE),
            InterruptVector::Rf => FlagLocation::new(map::IEN2, ien2::RFIE),
            InterruptVector::Wdt => FlagLocation::new(map::IEN2, ien2::WDTIE),
        }
    }

    /// TCON flags are cleared by hardware when the CPU vectors to the handler
    pub const fn cleared_on_entry(self) -> bool {
        matches!(
            self,
            InterruptVector::RfTxRx
                | InterruptVector::Adc
                | InterruptVector::Urx0
                | InterruptVector::Urx1
        )
    }
}

impl fmt::Display for InterruptVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Register bank used by a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum RegisterBank {
    B0 = 0,
    B1 = 1,
    B2 = 2,
    B3 = 3,
}

impl RegisterBank {
    /// Bank for an index known at compile time; panics above 3
    pub const fn new(index: u8) -> Self {
        match index {
            0 => RegisterBank::B0,
            1 => RegisterBank::B1,
            2 => RegisterBank::B2,
            3 => RegisterBank::B3,
            _ => panic!("register bank out of range 0-3"),
        }
    }

    pub fn from_index(index: u8) -> Result<Self> {
        match index {
            0..=3 => Ok(Self::new(index)),
            _ => Err(HalError::InvalidBank(index)),
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// PSW RS1:RS0 bits selecting this bank
    pub const fn psw_bits(self) -> u8 {
        (self as u8) << 3
    }

    /// Bank 0 handlers save and restore the registers they use
    pub const fn restores_registers(self) -> bool {
        matches!(self, RegisterBank::B0)
    }
}

/// Mask of the bank select bits in PSW
pub const PSW_BANK_MASK: u8 = 0x18;

/// Location of an interrupt flag or enable bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagLocation {
    register: Sfr,
    mask: u8,
}

impl FlagLocation {
    pub const fn new(register: Sfr, mask: u8) -> Self {
        Self { register, mask }
    }

    pub const fn bit(bit: SfrBit) -> Self {
        Self::new(bit.register(), bit.mask())
    }

    pub const fn register(&self) -> Sfr {
        self.register
    }

    pub const fn mask(&self) -> u8 {
        self.mask
    }

    pub fn is_set<B: IoBus + ?Sized>(&self, bus: &B) -> bool {
        self.register.read(bus) & self.mask != 0
    }

    pub fn set<B: IoBus + ?Sized>(&self, bus: &B) {
        self.write(bus, true)
    }

    pub fn clear<B: IoBus + ?Sized>(&self, bus: &B) {
        self.write(bus, false)
    }

    /// Single-bit write for one bit of a bit-addressable register,
    /// read-modify-write of the whole mask otherwise
    pub fn write<B: IoBus + ?Sized>(&self, bus: &B, value: bool) {
        if self.register.is_bit_addressable() && self.mask.count_ones() == 1 {
            bus.write_bit(
                self.register.address(),
                self.mask.trailing_zeros() as u8,
                value,
            );
        } else if value {
            self.register.set_bits(bus, self.mask);
        } else {
            self.register.clear_bits(bus, self.mask);
        }
    }
}

/// Raise a source's interrupt flag, as its peripheral would
pub fn raise<B: IoBus + ?Sized>(bus: &B, vector: InterruptVector) {
    log::trace!("IRQ raised: {}", vector);
    vector.flag().set(bus);
}

/// Enable a source and, when `global` is set, the EA master enable
pub fn enable<B: IoBus + ?Sized>(bus: &B, vector: InterruptVector, global: bool) {
    vector.enable().set(bus);
    if global {
        map::EA.set(bus);
    }
    log::debug!("IRQ enabled: {} (EA={})", vector, map::EA.read(bus) as u8);
}

/// Disable a source
pub fn disable<B: IoBus + ?Sized>(bus: &B, vector: InterruptVector) {
    vector.enable().clear(bus);
    log::debug!("IRQ disabled: {}", vector);
}
