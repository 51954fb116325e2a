// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! 16-bit register pairs
//!
//! Every pair names its high and low byte explicitly. In the direct SFR
//! space each pair happens to place the low byte at the lower address, but
//! nothing relies on that.

use super::map::*;
use super::xreg::*;
use super::{RegisterInfo, Reg16};

/// DMA channel 0 configuration address
pub const DMA0CFG: Reg16 = Reg16::sfr("DMA0CFG", DMA0CFGH, DMA0CFGL);

/// DMA channels 1-4 configuration address
pub const DMA1CFG: Reg16 = Reg16::sfr("DMA1CFG", DMA1CFGH, DMA1CFGL);

/// ADC conversion result
pub const ADC: Reg16 = Reg16::sfr("ADC", ADCH, ADCL);

/// Random number generator data
pub const RND: Reg16 = Reg16::sfr("RND", RNDH, RNDL);

/// Timer 1 channel 0 capture/compare value
pub const T1CC0: Reg16 = Reg16::sfr("T1CC0", T1CC0H, T1CC0L);

/// Timer 1 channel 1 capture/compare value
pub const T1CC1: Reg16 = Reg16::sfr("T1CC1", T1CC1H, T1CC1L);

/// Timer 1 channel 2 capture/compare value
pub const T1CC2: Reg16 = Reg16::sfr("T1CC2", T1CC2H, T1CC2L);

/// Timer 1 counter
pub const T1CNT: Reg16 = Reg16::sfr("T1CNT", T1CNTH, T1CNTL);

/// Flash controller address (word address)
pub const FADDR: Reg16 = Reg16::xreg("FADDR", FADDRH, FADDRL);

/// USB frame number
pub const USBFRM: Reg16 = Reg16::xreg("USBFRM", USBFRMH, USBFRML);

/// USB OUT FIFO byte count
pub const USBCNT: Reg16 = Reg16::xreg("USBCNT", USBCNTH, USBCNTL);

/// Every pair; rows are keyed by the low byte address
pub const PAIR_TABLE: &[RegisterInfo] = &[
    DMA0CFG.info(),
    DMA1CFG.info(),
    ADC.info(),
    RND.info(),
    T1CC0.info(),
    T1CC1.info(),
    T1CC2.info(),
    T1CNT.info(),
    FADDR.info(),
    USBFRM.info(),
    USBCNT.info(),
];

const _: () = super::assert_unique_addresses(PAIR_TABLE);
