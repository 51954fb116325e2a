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

//! Hardware access components
//!
//! This module contains all components, leaves first:
//! - I/O space (simulated and volatile backends)
//! - Register map (SFRs, XDATA registers, 16-bit pairs)
//! - Interrupt vectors and the vector table
//! - Cycle-accurate delays
//! - DMA channel configuration
//! - Host-side configuration

pub mod config;
pub mod delay;
pub mod dma;
pub mod error;
pub mod interrupt;
pub mod memory;
pub mod sfr;

// Re-export commonly used types
pub use config::HalConfig;
pub use delay::Delay;
pub use dma::{Dma, DmaChannelConfig};
pub use error::{DmaError, HalError, Result};
pub use interrupt::{InterruptVector, RegisterBank, VectorTable, VectorTableBuilder};
pub use memory::{IoBus, SimBus, Space};
