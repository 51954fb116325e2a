// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Vector numbering and register bank tests

use super::super::*;

#[test]
fn test_vector_ids_match_table() {
    let expected = [
        "RFTXRX", "ADC", "URX0", "URX1", "ENC", "ST", "P2INT", "UTX0", "DMA", "T1", "T2", "T3",
        "T4", "P0INT", "UTX1", "P1INT", "RF", "WDT",
    ];

    assert_eq!(InterruptVector::ALL.len(), VECTOR_COUNT);
    for (id, name) in expected.iter().enumerate() {
        let vector = InterruptVector::from_id(id as u8).unwrap();
        assert_eq!(vector.id() as usize, id);
        assert_eq!(vector.name(), *name);
        assert_eq!(vector.to_string(), *name);
    }
}

#[test]
fn test_invalid_vector_id() {
    assert!(matches!(
        InterruptVector::from_id(18),
        Err(HalError::InvalidVector(18))
    ));
    assert!(InterruptVector::from_id(0xFF).is_err());
}

#[test]
fn test_usb_aliases_port2() {
    assert_eq!(InterruptVector::USB, InterruptVector::P2Int);
    assert_eq!(InterruptVector::USB.id(), 6);
    assert_eq!(
        InterruptVector::from_name("usb").unwrap(),
        InterruptVector::P2Int
    );
}

#[test]
fn test_from_name() {
    assert_eq!(
        InterruptVector::from_name("rftxrx").unwrap(),
        InterruptVector::RfTxRx
    );
    assert_eq!(InterruptVector::from_name("WDT").unwrap(), InterruptVector::Wdt);
    assert!(InterruptVector::from_name("NMI").is_err());
}

#[test]
fn test_slot_addresses() {
    assert_eq!(InterruptVector::RfTxRx.slot_address(), 0x0003);
    assert_eq!(InterruptVector::Adc.slot_address(), 0x000B);
    assert_eq!(InterruptVector::Dma.slot_address(), 0x0043);
    assert_eq!(InterruptVector::Wdt.slot_address(), 0x008B);
}

#[test]
fn test_flag_and_enable_locations() {
    let dma = InterruptVector::Dma;
    assert_eq!(dma.flag().register(), map::IRCON);
    assert_eq!(dma.flag().mask(), 0x01);
    assert_eq!(dma.enable().register(), map::IEN1);
    assert_eq!(dma.enable().mask(), 0x01);

    let rf = InterruptVector::Rf;
    assert_eq!(rf.flag().register(), map::S1CON);
    assert_eq!(rf.flag().mask(), s1con::RFIF_0 | s1con::RFIF_1);
    assert_eq!(InterruptVector::Enc.flag().mask(), 0x03);
    assert_eq!(rf.enable().register(), map::IEN2);
    assert_eq!(rf.enable().mask(), ien2::RFIE);

    let usb = InterruptVector::USB;
    assert_eq!(usb.flag(), FlagLocation::bit(map::USBIF));
    assert_eq!(usb.enable().mask(), ien2::USBIE);
}

#[test]
fn test_flag_location_write() {
    let bus = crate::core::memory::SimBus::new();

    // Bit-addressable register
    InterruptVector::T3.flag().set(&bus);
    assert_eq!(map::IRCON.read(&bus), 0x08);

    // Byte-only register
    InterruptVector::Wdt.enable().set(&bus);
    InterruptVector::P1Int.enable().set(&bus);
    assert_eq!(map::IEN2.read(&bus), 0x30);

    InterruptVector::Wdt.enable().clear(&bus);
    assert_eq!(map::IEN2.read(&bus), 0x10);
    assert!(InterruptVector::P1Int.enable().is_set(&bus));
}

#[test]
fn test_paired_flags_written_together() {
    let bus = crate::core::memory::SimBus::new();

    raise(&bus, InterruptVector::Rf);
    raise(&bus, InterruptVector::Enc);
    assert_eq!(map::S1CON.read(&bus), 0x03);
    assert_eq!(map::S0CON.read(&bus) & 0x03, 0x03);

    InterruptVector::Rf.flag().clear(&bus);
    InterruptVector::Enc.flag().clear(&bus);
    assert_eq!(map::S1CON.read(&bus), 0x00);
    assert_eq!(map::S0CON.read(&bus), 0x00);

    // Either bit alone still reads as pending
    map::ENCIF_1.set(&bus);
    assert!(InterruptVector::Enc.flag().is_set(&bus));
}

#[test]
fn test_register_banks() {
    assert_eq!(RegisterBank::from_index(2).unwrap(), RegisterBank::B2);
    assert!(matches!(
        RegisterBank::from_index(4),
        Err(HalError::InvalidBank(4))
    ));

    assert_eq!(RegisterBank::B0.psw_bits(), 0x00);
    assert_eq!(RegisterBank::B1.psw_bits(), 0x08);
    assert_eq!(RegisterBank::B3.psw_bits(), 0x18);

    assert!(RegisterBank::B0.restores_registers());
    assert!(!RegisterBank::B1.restores_registers());
}
