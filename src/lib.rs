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

//! Hardware access layer for the TI CC254x 8051 SoC
//!
//! The crate names every special function register at its fixed address,
//! binds handlers to the 18 interrupt vectors, and provides microsecond and
//! millisecond busy-wait delays whose timing does not depend on where the
//! linker places them. It also describes the DMA controller's 8-byte channel
//! configuration record.
//!
//! # Example
//!
//! ```
//! use cc254x::core::memory::SimBus;
//! use cc254x::core::sfr::map::{IEN0, EA, P1};
//!
//! let bus = SimBus::new();
//! P1.write(&bus, 0x5A);
//! EA.set(&bus);
//!
//! assert_eq!(P1.read(&bus), 0x5A);
//! assert_eq!(IEN0.read(&bus), 0x80);
//! ```

pub mod core;
