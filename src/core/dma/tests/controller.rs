// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Controller register tests

use super::helpers::uart_tx_config;
use super::*;
use crate::core::memory::SimBus;
use crate::core::sfr::map::{DMA0CFGH, DMA0CFGL, DMAARM, DMAIRQ, DMAREQ};

#[test]
fn test_write_config_lands_in_xdata() {
    let bus = SimBus::new();
    let dma = Dma::new(&bus);

    dma.write_config(0x0F00, &uart_tx_config());

    let stored: Vec<u8> = (0..8).map(|i| bus.read(Space::Xdata, 0x0F00 + i)).collect();
    assert_eq!(stored, uart_tx_config().to_bytes());
    assert_eq!(dma.read_config(0x0F00), uart_tx_config());
}

#[test]
fn test_point_channel0() {
    let bus = SimBus::new();
    let dma = Dma::new(&bus);

    dma.point_channel0(0x1F40);

    assert_eq!(DMA0CFGH.read(&bus), 0x1F);
    assert_eq!(DMA0CFGL.read(&bus), 0x40);
    assert_eq!(dma.config_address(0).unwrap(), 0x1F40);
}

#[test]
fn test_channels_1_to_4_are_consecutive() {
    let bus = SimBus::new();
    let dma = Dma::new(&bus);

    dma.point_channels1to4(0x1000);

    assert_eq!(dma.config_address(1).unwrap(), 0x1000);
    assert_eq!(dma.config_address(2).unwrap(), 0x1008);
    assert_eq!(dma.config_address(4).unwrap(), 0x1018);
    assert_eq!(dma.config_address(5), Err(DmaError::InvalidChannel(5)));
}

#[test]
fn test_channel_config_follows_pointer() {
    let bus = SimBus::new();
    let dma = Dma::new(&bus);
    let config = uart_tx_config();

    dma.write_config(0x1010, &config);
    dma.point_channels1to4(0x1000);

    assert_eq!(dma.channel_config(3).unwrap(), config);
}

#[test]
fn test_arm_keeps_other_channels() {
    let bus = SimBus::new();
    let dma = Dma::new(&bus);

    dma.arm(DmaChannels::CH1);
    dma.arm(DmaChannels::CH3);

    assert_eq!(DMAARM.read(&bus), 0x0A);
    assert_eq!(dma.armed(), DmaChannels::CH1 | DmaChannels::CH3);
}

#[test]
fn test_abort_writes_abort_bit() {
    let bus = SimBus::new();
    let dma = Dma::new(&bus);

    dma.abort(DmaChannels::CH0 | DmaChannels::CH2);
    assert_eq!(DMAARM.read(&bus), 0x85);
}

#[test]
fn test_manual_trigger() {
    let bus = SimBus::new();
    let dma = Dma::new(&bus);

    dma.trigger(DmaChannels::CH4);
    assert_eq!(DMAREQ.read(&bus), 0x10);
}

#[test]
fn test_irq_flags() {
    let bus = SimBus::new();
    let dma = Dma::new(&bus);

    DMAIRQ.write(&bus, 0x13);
    assert_eq!(
        dma.irq_pending(),
        DmaChannels::CH0 | DmaChannels::CH1 | DmaChannels::CH4
    );

    dma.clear_irq(DmaChannels::CH1);
    assert_eq!(dma.irq_pending(), DmaChannels::CH0 | DmaChannels::CH4);
}

#[test]
fn test_config_through_sfr_mirror() {
    let bus = SimBus::new();
    let dma = Dma::new(&bus);

    // A record can target an SFR through its XDATA mirror address
    let config = DmaChannelConfig::new(0x0000, crate::core::sfr::xdata_sfr_address(DMAREQ));
    dma.write_config(0x0000, &config);

    assert_eq!(dma.read_config(0x0000).dest, 0x70D7);
}
