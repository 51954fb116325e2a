// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Custom assertions for register-level testing

use cc254x::core::memory::{IoBus, Space};
use cc254x::core::sfr::Sfr;

/// Assert an SFR holds the expected value
#[allow(dead_code)]
pub fn assert_sfr<B: IoBus + ?Sized>(bus: &B, sfr: Sfr, expected: u8) {
    let actual = sfr.read(bus);
    assert_eq!(
        actual,
        expected,
        "{} mismatch: expected 0x{:02X}, got 0x{:02X}",
        sfr.name(),
        expected,
        actual
    );
}

/// Assert XDATA contains the expected bytes starting at an address
#[allow(dead_code)]
pub fn assert_xdata<B: IoBus + ?Sized>(bus: &B, addr: u16, expected: &[u8]) {
    for (offset, &byte) in expected.iter().enumerate() {
        let at = addr.wrapping_add(offset as u16);
        let actual = bus.read(Space::Xdata, at);
        assert_eq!(
            actual, byte,
            "XDATA at 0x{:04X} mismatch: expected 0x{:02X}, got 0x{:02X}",
            at, byte, actual
        );
    }
}
