// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Record byte layout tests

use super::helpers::uart_tx_config;
use super::*;

#[test]
fn test_record_is_eight_bytes() {
    assert_eq!(RECORD_LEN, 8);
    assert_eq!(DmaChannelConfig::default().to_bytes(), [0; 8]);
}

#[test]
fn test_address_bytes_high_first() {
    let config = DmaChannelConfig::new(0x1234, 0xABCD);
    let bytes = config.to_bytes();

    assert_eq!(bytes[0], 0x12);
    assert_eq!(bytes[1], 0x34);
    assert_eq!(bytes[2], 0xAB);
    assert_eq!(bytes[3], 0xCD);
}

#[test]
fn test_length_and_vlen_share_byte() {
    let mut config = DmaChannelConfig::default();
    config.set_length(0x1ABC).unwrap();
    config.vlen = VariableLength::FirstPlusThree;

    let bytes = config.to_bytes();
    assert_eq!(bytes[4], (4 << 5) | 0x1A);
    assert_eq!(bytes[5], 0xBC);
}

#[test]
fn test_dc6_layout() {
    let mut config = DmaChannelConfig::default();
    config.word_size = WordSize::Word;
    config.mode = TransferMode::RepeatedBlock;
    config.set_trigger(DmaTrigger::DBG_BW);

    assert_eq!(config.to_bytes()[6], 0x80 | (3 << 5) | 31);
}

#[test]
fn test_dc7_layout() {
    let mut config = DmaChannelConfig::default();
    config.src_inc = Increment::MinusOne;
    config.dest_inc = Increment::Two;
    config.irq_mask = true;
    config.m8 = true;
    config.priority = Priority::Assured;

    assert_eq!(config.to_bytes()[7], (3 << 6) | (2 << 4) | 0x08 | 0x04 | 0x01);
}

#[test]
fn test_uart_record_bytes() {
    let bytes = uart_tx_config().to_bytes();

    assert_eq!(bytes, [0x02, 0x00, 0x70, 0xC1, 0x00, 0x20, 0x0F, 0x4A]);
}

#[test]
fn test_decode_known_record() {
    let config =
        DmaChannelConfig::from_bytes([0x02, 0x00, 0x70, 0xC1, 0x00, 0x20, 0x0F, 0x4A]);

    assert_eq!(config, uart_tx_config());
}

#[test]
fn test_from_slice_length_checked() {
    let bytes = uart_tx_config().to_bytes();

    assert_eq!(DmaChannelConfig::from_slice(&bytes), Ok(uart_tx_config()));
    assert_eq!(
        DmaChannelConfig::from_slice(&bytes[..7]),
        Err(DmaError::InvalidRecordLength(7))
    );
    assert_eq!(
        DmaChannelConfig::from_slice(&[0; 9]),
        Err(DmaError::InvalidRecordLength(9))
    );
}
