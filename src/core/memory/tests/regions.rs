// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! XDATA region identification tests

use super::*;

#[test]
fn test_region_boundaries() {
    assert_eq!(identify_region(0x0000), XdataRegion::Sram);
    assert_eq!(identify_region(0x1FFF), XdataRegion::Sram);
    assert_eq!(identify_region(0x2000), XdataRegion::Unmapped);

    assert_eq!(identify_region(0x5FFF), XdataRegion::Unmapped);
    assert_eq!(identify_region(0x6000), XdataRegion::Xreg);
    assert_eq!(identify_region(0x63FF), XdataRegion::Xreg);

    assert_eq!(identify_region(0x707F), XdataRegion::Unmapped);
    assert_eq!(identify_region(0x7080), XdataRegion::SfrMirror);
    assert_eq!(identify_region(0x70FF), XdataRegion::SfrMirror);

    assert_eq!(identify_region(0x7800), XdataRegion::InfoPage);
    assert_eq!(identify_region(0x7FFF), XdataRegion::InfoPage);
    assert_eq!(identify_region(0x8000), XdataRegion::FlashBank);
    assert_eq!(identify_region(0xFFFF), XdataRegion::FlashBank);
}

#[test]
fn test_sfr_mirror_covers_every_sfr() {
    for sfr in SFR_START..=SFR_END {
        let mirror = XDATA_SFR_BASE + sfr as u16;
        assert_eq!(identify_region(mirror), XdataRegion::SfrMirror);
    }
}
