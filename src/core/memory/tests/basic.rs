// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Basic SFR storage tests

use super::helpers::{create_test_bus, ByteOnlyBus};
use super::*;

#[test]
fn test_sfr_write_read_back() {
    let bus = create_test_bus();

    for addr in 0x80u16..=0xFF {
        bus.write(Space::Sfr, addr, addr as u8 ^ 0x5A);
    }
    for addr in 0x80u16..=0xFF {
        assert_eq!(bus.read(Space::Sfr, addr), addr as u8 ^ 0x5A);
    }
}

#[test]
fn test_sfr_below_range_is_not_stored() {
    let bus = create_test_bus();

    // 0x00-0x7F is internal RAM, not SFR space
    bus.write(Space::Sfr, 0x7F, 0xAA);
    assert_eq!(bus.read(Space::Sfr, 0x7F), 0);
}

#[test]
fn test_bit_write_preserves_other_bits() {
    let bus = create_test_bus();

    bus.write(Space::Sfr, 0x90, 0b1010_0101);
    bus.write_bit(0x90, 1, true);
    assert_eq!(bus.read(Space::Sfr, 0x90), 0b1010_0111);

    bus.write_bit(0x90, 7, false);
    assert_eq!(bus.read(Space::Sfr, 0x90), 0b0010_0111);
}

#[test]
fn test_bit_read() {
    let bus = create_test_bus();

    bus.write(Space::Sfr, 0xA8, 0x80);
    assert!(bus.read_bit(0xA8, 7));
    assert!(!bus.read_bit(0xA8, 0));
}

#[test]
fn test_bit_addressable_addresses() {
    assert!(is_bit_addressable(0x80));
    assert!(is_bit_addressable(0xF8));
    assert!(!is_bit_addressable(0x81));
    assert!(!is_bit_addressable(0x40));
}

#[test]
fn test_reset_clears_sfrs() {
    let bus = create_test_bus();

    bus.write(Space::Sfr, 0xC6, 0x80);
    bus.reset();
    assert_eq!(bus.read(Space::Sfr, 0xC6), 0);
}

#[test]
fn test_bit_index_wraps_the_same_on_every_bus() {
    let plain = ByteOnlyBus(create_test_bus());
    let sim = create_test_bus();

    plain.write_bit(0x80, 8, true);
    sim.write_bit(0x80, 8, true);
    assert_eq!(plain.read(Space::Sfr, 0x80), 0x01);
    assert_eq!(sim.read(Space::Sfr, 0x80), 0x01);

    plain.write_bit(0x80, 15, true);
    assert_eq!(plain.read(Space::Sfr, 0x80), 0x81);
    assert!(plain.read_bit(0x80, 15));
    assert!(sim.read_bit(0x80, 8));
}
