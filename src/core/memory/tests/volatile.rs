// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Raw-window backend tests

use super::*;

#[test]
fn test_volatile_bus_reads_and_writes_window() {
    let mut sfr = vec![0u8; SFR_COUNT];
    let mut xdata = vec![0u8; XDATA_SIZE];

    {
        // SAFETY: both buffers outlive the bus and are sized as required
        let bus = unsafe { VolatileBus::new(sfr.as_mut_ptr(), xdata.as_mut_ptr()) };

        bus.write(Space::Sfr, 0x80, 0xA5);
        bus.write(Space::Xdata, 0x1234, 0x5A);
        bus.write_bit(0x80, 1, true);

        assert_eq!(bus.read(Space::Sfr, 0x80), 0xA7);
        assert_eq!(bus.read(Space::Xdata, 0x1234), 0x5A);
    }

    assert_eq!(sfr[0], 0xA7);
    assert_eq!(xdata[0x1234], 0x5A);
}

#[test]
fn test_volatile_bus_ignores_out_of_window_sfr() {
    let mut sfr = vec![0u8; SFR_COUNT];
    let mut xdata = vec![0u8; XDATA_SIZE];

    // SAFETY: both buffers outlive the bus and are sized as required
    let bus = unsafe { VolatileBus::new(sfr.as_mut_ptr(), xdata.as_mut_ptr()) };

    bus.write(Space::Sfr, 0x10, 0xFF);
    assert_eq!(bus.read(Space::Sfr, 0x10), 0);
}
