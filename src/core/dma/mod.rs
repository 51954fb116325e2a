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

//! DMA Controller Access
//!
//! The CC254x DMA controller has five channels. It takes each channel's
//! configuration from an 8-byte [`DmaChannelConfig`] record in XDATA.
//!
//! # Channels
//!
//! | Channel | Configuration address                     |
//! |---------|-------------------------------------------|
//! | 0       | DMA0CFGH:DMA0CFGL                         |
//! | 1-4     | DMA1CFGH:DMA1CFGL + 8 * (channel - 1)     |
//!
//! Channels 1-4 read four consecutive records from one base address.
//!
//! # Control Registers
//!
//! - **DMAARM** (0xD6): arm channels; bit 7 aborts the channels written with it
//! - **DMAREQ** (0xD7): manual start request
//! - **DMAIRQ** (0xD1): per-channel completion flags, cleared by writing 0
//!
//! # Example
//!
//! ```
//! use cc254x::core::dma::{Dma, DmaChannelConfig, DmaChannels};
//! use cc254x::core::memory::SimBus;
//!
//! let bus = SimBus::new();
//! let dma = Dma::new(&bus);
//!
//! let mut config = DmaChannelConfig::new(0x0000, 0x0100);
//! config.set_length(16).unwrap();
//!
//! dma.write_config(0x1F00, &config);
//! dma.point_channel0(0x1F00);
//! dma.arm(DmaChannels::CH0);
//!
//! assert_eq!(dma.read_config(0x1F00), config);
//! assert!(dma.armed().contains(DmaChannels::CH0));
//! ```
//!
//! # References
//!
//! - SWRU191: CC253x/CC254x User's Guide, Chapter 8 (DMA Controller)

mod record;

#[cfg(test)]
mod tests;

pub use record::{
    DmaChannelConfig, DmaTrigger, Increment, Priority, TransferMode, VariableLength, WordSize,
    MAX_LENGTH, RECORD_LEN,
};

use crate::core::error::DmaError;
use crate::core::memory::{IoBus, Space};
use crate::core::sfr::map::{DMAARM, DMAIRQ, DMAREQ};
use crate::core::sfr::pairs::{DMA0CFG, DMA1CFG};
use bitflags::bitflags;

/// Number of DMA channels
pub const CHANNEL_COUNT: u8 = 5;

/// DMAARM bit that aborts the channels written together with it
pub const DMAARM_ABORT: u8 = 0x80;

bitflags! {
    /// DMA channel mask as used by DMAARM, DMAREQ and DMAIRQ
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DmaChannels: u8 {
        const CH0 = 1 << 0;
        const CH1 = 1 << 1;
        const CH2 = 1 << 2;
        const CH3 = 1 << 3;
        const CH4 = 1 << 4;
    }
}

impl DmaChannels {
    /// Mask for a single channel
    pub fn channel(channel: u8) -> Result<Self, DmaError> {
        if channel >= CHANNEL_COUNT {
            return Err(DmaError::InvalidChannel(channel));
        }
        Ok(Self::from_bits_truncate(1 << channel))
    }
}

/// DMA controller registers and records behind an I/O space
pub struct Dma<'a, B: IoBus + ?Sized> {
    bus: &'a B,
}

impl<'a, B: IoBus + ?Sized> Dma<'a, B> {
    pub fn new(bus: &'a B) -> Self {
        Self { bus }
    }

    /// Store a configuration record at `address` in XDATA
    pub fn write_config(&self, address: u16, config: &DmaChannelConfig) {
        for (offset, byte) in config.to_bytes().into_iter().enumerate() {
            self.bus
                .write(Space::Xdata, address.wrapping_add(offset as u16), byte);
        }
        log::debug!(
            "DMA config at 0x{:04X}: 0x{:04X} -> 0x{:04X}, len {}",
            address,
            config.src,
            config.dest,
            config.length()
        );
    }

    /// Load the configuration record stored at `address`
    pub fn read_config(&self, address: u16) -> DmaChannelConfig {
        let mut bytes = [0u8; RECORD_LEN];
        for (offset, byte) in bytes.iter_mut().enumerate() {
            *byte = self
                .bus
                .read(Space::Xdata, address.wrapping_add(offset as u16));
        }
        DmaChannelConfig::from_bytes(bytes)
    }

    /// Point channel 0 at a record
    pub fn point_channel0(&self, address: u16) {
        DMA0CFG.write(self.bus, address);
    }

    /// Point channels 1-4 at four consecutive records
    pub fn point_channels1to4(&self, address: u16) {
        DMA1CFG.write(self.bus, address);
    }

    /// XDATA address the controller reads `channel`'s record from
    pub fn config_address(&self, channel: u8) -> Result<u16, DmaError> {
        match channel {
            0 => Ok(DMA0CFG.read(self.bus)),
            1..=4 => {
                let base = DMA1CFG.read(self.bus);
                Ok(base.wrapping_add(RECORD_LEN as u16 * u16::from(channel - 1)))
            }
            _ => Err(DmaError::InvalidChannel(channel)),
        }
    }

    /// Record `channel` currently points at
    pub fn channel_config(&self, channel: u8) -> Result<DmaChannelConfig, DmaError> {
        Ok(self.read_config(self.config_address(channel)?))
    }

    /// Arm channels, leaving the others as they are
    pub fn arm(&self, channels: DmaChannels) {
        DMAARM.set_bits(self.bus, channels.bits());
        log::trace!("DMA arm {:?}", channels);
    }

    /// Abort channels
    pub fn abort(&self, channels: DmaChannels) {
        DMAARM.write(self.bus, DMAARM_ABORT | channels.bits());
        log::debug!("DMA abort {:?}", channels);
    }

    pub fn armed(&self) -> DmaChannels {
        DmaChannels::from_bits_truncate(DMAARM.read(self.bus))
    }

    /// Manually start transfers on armed channels
    pub fn trigger(&self, channels: DmaChannels) {
        DMAREQ.write(self.bus, channels.bits());
        log::trace!("DMA request {:?}", channels);
    }

    /// Channels with a completion flag set
    pub fn irq_pending(&self) -> DmaChannels {
        DmaChannels::from_bits_truncate(DMAIRQ.read(self.bus))
    }

    /// Clear completion flags
    pub fn clear_irq(&self, channels: DmaChannels) {
        DMAIRQ.clear_bits(self.bus, channels.bits());
    }
}
