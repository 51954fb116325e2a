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

//! Test fixtures for common test scenarios

use cc254x::core::dma::{DmaChannelConfig, DmaChannels, DmaTrigger, Increment, TransferMode};
use cc254x::core::interrupt::{
    self, InterruptVector, RegisterBank, VectorTable, VectorTableBuilder,
};
use cc254x::core::memory::{IoBus, SimBus};
use cc254x::core::sfr::map::{B, DMAIF, DMAIRQ, EA, SP, U0DBUF};
use cc254x::core::sfr::xdata_sfr_address;

/// XDATA address of the UART 0 transmit record
#[allow(dead_code)]
pub const TX_RECORD: u16 = 0x1F00;

/// SRAM buffer the UART transmit DMA reads from
#[allow(dead_code)]
pub const TX_BUFFER: u16 = 0x0200;

/// Counts DMA completions in SP and acknowledges channel 0
fn on_dma(bus: &dyn IoBus) {
    SP.modify(bus, |n| n.wrapping_add(1));
    DMAIRQ.clear_bits(bus, DmaChannels::CH0.bits());
    DMAIF.clear(bus);
}

/// Copies the received byte into B
fn on_urx0(bus: &dyn IoBus) {
    B.write(bus, U0DBUF.read(bus));
}

/// Vector table of a small UART firmware
#[allow(dead_code)]
pub const FIRMWARE: VectorTable = VectorTableBuilder::new()
    .bind(InterruptVector::Dma, RegisterBank::B1, on_dma)
    .bind(InterruptVector::Urx0, RegisterBank::B0, on_urx0)
    .bind_remaining(interrupt::noop)
    .build();

/// Create a simulated bus with interrupts globally enabled
#[allow(dead_code)]
pub fn create_test_bus() -> SimBus {
    let bus = SimBus::new();
    EA.set(&bus);
    bus
}

/// UART 0 transmit: SRAM buffer to U0DBUF through the SFR mirror
#[allow(dead_code)]
pub fn uart_tx_config(length: u16) -> DmaChannelConfig {
    let mut config = DmaChannelConfig::new(TX_BUFFER, xdata_sfr_address(U0DBUF));
    config.set_length(length).unwrap();
    config.set_trigger(DmaTrigger::UTX0);
    config.mode = TransferMode::Single;
    config.src_inc = Increment::One;
    config.irq_mask = true;
    config
}
