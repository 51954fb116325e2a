// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! XDATA region identification
//!
//! The CC254x external data space overlays SRAM, the XREG peripheral block,
//! a mirror of the SFRs and a window into flash.

use serde::Serialize;

/// XDATA region identification
///
/// Used to identify which region an XDATA address belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum XdataRegion {
    /// On-chip SRAM (8KB)
    Sram,
    /// XREG peripheral registers (USB, flash controller)
    Xreg,
    /// SFR mirror (0x7080-0x70FF)
    SfrMirror,
    /// Flash information page
    InfoPage,
    /// Mapped flash bank (read-only through XDATA)
    FlashBank,
    /// Unmapped region
    Unmapped,
}

/// SRAM XDATA range
pub const SRAM_START: u16 = 0x0000;
pub const SRAM_END: u16 = 0x1FFF;

/// XREG XDATA range
pub const XREG_START: u16 = 0x6000;
pub const XREG_END: u16 = 0x63FF;

/// SFR mirror XDATA range
pub const SFR_MIRROR_START: u16 = 0x7080;
pub const SFR_MIRROR_END: u16 = 0x70FF;

/// Information page XDATA range
pub const INFO_PAGE_START: u16 = 0x7800;
pub const INFO_PAGE_END: u16 = 0x7FFF;

/// Flash bank window XDATA range
pub const FLASH_BANK_START: u16 = 0x8000;
pub const FLASH_BANK_END: u16 = 0xFFFF;

/// Identify the XDATA region for an address
///
/// # Example
///
/// ```
/// use cc254x::core::memory::{identify_region, XdataRegion};
///
/// assert_eq!(identify_region(0x0000), XdataRegion::Sram);
/// assert_eq!(identify_region(0x6200), XdataRegion::Xreg);
/// assert_eq!(identify_region(0x70D6), XdataRegion::SfrMirror);
/// assert_eq!(identify_region(0x8000), XdataRegion::FlashBank);
/// assert_eq!(identify_region(0x4000), XdataRegion::Unmapped);
/// ```
pub const fn identify_region(addr: u16) -> XdataRegion {
    match addr {
        SRAM_START..=SRAM_END => XdataRegion::Sram,
        XREG_START..=XREG_END => XdataRegion::Xreg,
        SFR_MIRROR_START..=SFR_MIRROR_END => XdataRegion::SfrMirror,
        INFO_PAGE_START..=INFO_PAGE_END => XdataRegion::InfoPage,
        FLASH_BANK_START..=FLASH_BANK_END => XdataRegion::FlashBank,
        _ => XdataRegion::Unmapped,
    }
}
