// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Helper functions for DMA tests

use super::*;

/// UART 0 transmit: SRAM buffer to U0DBUF, one byte per UTX0 trigger
pub fn uart_tx_config() -> DmaChannelConfig {
    let mut config = DmaChannelConfig::new(0x0200, 0x70C1);
    config.set_length(32).unwrap();
    config.set_trigger(DmaTrigger::UTX0);
    config.mode = TransferMode::Single;
    config.src_inc = Increment::One;
    config.dest_inc = Increment::None;
    config.irq_mask = true;
    config.priority = Priority::High;
    config
}
