// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! XDATA storage, SFR mirror and tracing tests

use super::helpers::{create_test_bus, create_traced_bus};
use super::*;

#[test]
fn test_sram_write_read_back() {
    let bus = create_test_bus();

    bus.write(Space::Xdata, 0x0000, 0x12);
    bus.write(Space::Xdata, 0x1FFF, 0x34);

    assert_eq!(bus.read(Space::Xdata, 0x0000), 0x12);
    assert_eq!(bus.read(Space::Xdata, 0x1FFF), 0x34);
}

#[test]
fn test_xreg_write_read_back() {
    let bus = create_test_bus();

    bus.write(Space::Xdata, 0x6200, 0x7F);
    assert_eq!(bus.read(Space::Xdata, 0x6200), 0x7F);
}

#[test]
fn test_sfr_mirror_aliases_direct_access() {
    let bus = create_test_bus();

    // Write through the mirror, read directly
    bus.write(Space::Xdata, XDATA_SFR_BASE + 0xD6, 0x1F);
    assert_eq!(bus.read(Space::Sfr, 0xD6), 0x1F);

    // Write directly, read through the mirror
    bus.write(Space::Sfr, 0xFE, 0x04);
    assert_eq!(bus.read(Space::Xdata, 0x70FE), 0x04);
}

#[test]
fn test_flash_window_is_read_only() {
    let bus = create_test_bus();

    assert_eq!(bus.read(Space::Xdata, 0x8000), 0xFF);
    bus.write(Space::Xdata, 0x8000, 0x00);
    assert_eq!(bus.read(Space::Xdata, 0x8000), 0xFF);
}

#[test]
fn test_unmapped_xdata_reads_zero() {
    let bus = create_test_bus();

    bus.write(Space::Xdata, 0x4000, 0x55);
    assert_eq!(bus.read(Space::Xdata, 0x4000), 0);
}

#[test]
fn test_trace_records_in_program_order() {
    let bus = create_traced_bus();

    bus.write(Space::Sfr, 0xD4, 0x00);
    bus.write(Space::Sfr, 0xD5, 0x10);
    let _ = bus.read(Space::Sfr, 0xD4);

    let trace = bus.take_trace();
    assert_eq!(trace.len(), 3);
    assert_eq!(trace[0].addr, 0xD4);
    assert_eq!(trace[0].kind, AccessKind::Write);
    assert_eq!(trace[1].addr, 0xD5);
    assert_eq!(trace[2].kind, AccessKind::Read);

    // Taking the trace empties it
    assert!(bus.take_trace().is_empty());
}

#[test]
fn test_trace_disabled_by_default() {
    let bus = create_test_bus();

    bus.write(Space::Sfr, 0x80, 1);
    assert!(bus.take_trace().is_empty());
}

#[test]
fn test_bus_through_reference() {
    let bus = create_test_bus();
    let by_ref: &dyn IoBus = &bus;

    by_ref.write(Space::Sfr, 0x81, 0x07);
    assert_eq!(bus.read(Space::Sfr, 0x81), 0x07);
}
