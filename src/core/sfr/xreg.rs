// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Registers in XDATA space
//!
//! USB controller registers (SWRU191 Section 21.12) and the flash
//! controller. These are ordinary bytes reached with `MOVX`; none of them
//! is bit-addressable.

use super::{RegisterInfo, XReg};

xreg_map! {
    // Common USB registers
    /// Function address
    0x6200 => USBADDR;
    /// Power/control
    0x6201 => USBPOW;
    /// IN endpoints and EP0 interrupt flags
    0x6202 => USBIIF;
    /// OUT endpoints interrupt flags
    0x6204 => USBOIF;
    /// Common USB interrupt flags
    0x6206 => USBCIF;
    /// IN endpoints and EP0 interrupt enable mask
    0x6207 => USBIIE;
    /// OUT endpoints interrupt enable mask
    0x6209 => USBOIE;
    /// Common USB interrupt enable mask
    0x620B => USBCIE;
    /// Current frame number low
    0x620C => USBFRML;
    /// Current frame number high
    0x620D => USBFRMH;
    /// Current endpoint index
    0x620E => USBINDEX;
    /// USB control
    0x620F => USBCTRL;

    // Indexed endpoint registers, selected by USBINDEX
    /// Max packet size for IN endpoint
    0x6210 => USBMAXI;
    /// EP0 control and status / IN endpoint control and status low
    0x6211 => USBCSIL;
    /// IN endpoint control and status high
    0x6212 => USBCSIH;
    /// Max packet size for OUT endpoint
    0x6213 => USBMAXO;
    /// OUT endpoint control and status low
    0x6214 => USBCSOL;
    /// OUT endpoint control and status high
    0x6215 => USBCSOH;
    /// Number of received bytes in EP0 FIFO / OUT FIFO low
    0x6216 => USBCNTL;
    /// Number of received bytes in OUT FIFO high
    0x6217 => USBCNTH;

    // Endpoint FIFOs
    0x6220 => USBF0;
    0x6222 => USBF1;
    0x6224 => USBF2;
    0x6226 => USBF3;
    0x6228 => USBF4;
    0x622A => USBF5;

    // Flash controller
    /// Flash control
    0x6270 => FCTL;
    /// Flash address low
    0x6271 => FADDRL;
    /// Flash address high
    0x6272 => FADDRH;
    /// Flash write data
    0x6273 => FWDATA;
}

/// EP0 control and status; same register as [`USBCSIL`] when USBINDEX is 0
pub const USBCS0: XReg = USBCSIL;

/// EP0 byte count; same register as [`USBCNTL`] when USBINDEX is 0
pub const USBCNT0: XReg = USBCNTL;
