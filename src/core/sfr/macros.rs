// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Declarative register table builders
//!
//! Each table row is written once; the macros expand it into the register
//! constant, its bit constants, and a [`RegisterInfo`](super::RegisterInfo)
//! row, then check the table for duplicate addresses at compile time.

/// Build the SFR table
///
/// ```text
/// 0x80 => P0 [P0_7, P0_6, P0_5, P0_4, P0_3, P0_2, P0_1, P0_0];
/// 0x81 => SP;
/// ```
///
/// Bit lists name all eight bits, most significant first.
macro_rules! sfr_map {
    (@reg $(#[$meta:meta])* $addr:literal, $name:ident) => {
        $(#[$meta])*
        pub const $name: Sfr = Sfr::new(stringify!($name), $addr);
    };
    (@reg $(#[$meta:meta])* $addr:literal, $name:ident
        [$b7:ident, $b6:ident, $b5:ident, $b4:ident, $b3:ident, $b2:ident, $b1:ident, $b0:ident]) => {
        $(#[$meta])*
        pub const $name: Sfr = Sfr::bit_addressable(stringify!($name), $addr);
        pub const $b7: SfrBit = $name.bit(stringify!($b7), 7);
        pub const $b6: SfrBit = $name.bit(stringify!($b6), 6);
        pub const $b5: SfrBit = $name.bit(stringify!($b5), 5);
        pub const $b4: SfrBit = $name.bit(stringify!($b4), 4);
        pub const $b3: SfrBit = $name.bit(stringify!($b3), 3);
        pub const $b2: SfrBit = $name.bit(stringify!($b2), 2);
        pub const $b1: SfrBit = $name.bit(stringify!($b1), 1);
        pub const $b0: SfrBit = $name.bit(stringify!($b0), 0);
    };
    (@info $name:ident) => {
        $name.info()
    };
    (@info $name:ident
        [$b7:ident, $b6:ident, $b5:ident, $b4:ident, $b3:ident, $b2:ident, $b1:ident, $b0:ident]) => {
        $name.info_with_bits([
            stringify!($b0),
            stringify!($b1),
            stringify!($b2),
            stringify!($b3),
            stringify!($b4),
            stringify!($b5),
            stringify!($b6),
            stringify!($b7),
        ])
    };
    (
        $(
            $(#[$meta:meta])*
            $addr:literal => $name:ident $([$($bit:ident),+])?;
        )*
    ) => {
        $(
            sfr_map!(@reg $(#[$meta])* $addr, $name $([$($bit),+])?);
        )*

        /// Every SFR, in address order
        pub const SFR_TABLE: &[RegisterInfo] = &[
            $( sfr_map!(@info $name $([$($bit),+])?) ),*
        ];

        const _: () = super::assert_unique_addresses(SFR_TABLE);
    };
}

/// Build the XDATA register table
///
/// ```text
/// 0x6200 => USBADDR;
/// ```
macro_rules! xreg_map {
    (
        $(
            $(#[$meta:meta])*
            $addr:literal => $name:ident;
        )*
    ) => {
        $(
            $(#[$meta])*
            pub const $name: XReg = XReg::new(stringify!($name), $addr);
        )*

        /// Every XDATA register, in address order
        pub const XREG_TABLE: &[RegisterInfo] = &[ $( $name.info() ),* ];

        const _: () = super::assert_unique_addresses(XREG_TABLE);
    };
}
