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

/// Hardware access layer error types
use thiserror::Error;

use crate::core::interrupt::InterruptVector;

/// Result type for fallible host-side operations
pub type Result<T> = std::result::Result<T, HalError>;

/// Main error type for the hardware access layer
///
/// The register and delay surface itself has no run-time error channel;
/// these errors come from the host-side builders, decoders and loaders.
#[derive(Error, Debug)]
pub enum HalError {
    #[error("Unknown register: {0}")]
    UnknownRegister(String),

    #[error("No register mapped at {space} address 0x{address:04X}")]
    UnmappedAddress { space: &'static str, address: u16 },

    #[error("Invalid interrupt vector id: {0} (valid range: 0-17)")]
    InvalidVector(u8),

    #[error("Invalid register bank: {0} (valid range: 0-3)")]
    InvalidBank(u8),

    #[error("Interrupt vector {0} is already bound")]
    VectorAlreadyBound(InterruptVector),

    #[error("Interrupt vectors without a handler: {0:?}")]
    MissingHandlers(Vec<InterruptVector>),

    #[error("DMA error: {0}")]
    Dma(#[from] DmaError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// DMA-specific error types
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DmaError {
    #[error("Transfer length {0} exceeds 13 bits (max 8191)")]
    LengthOutOfRange(u16),

    #[error("Trigger source {0} exceeds 5 bits (max 31)")]
    TriggerOutOfRange(u8),

    #[error("Invalid DMA channel: {0} (valid range: 0-4)")]
    InvalidChannel(u8),

    #[error("DMA record must be exactly 8 bytes, got {0}")]
    InvalidRecordLength(usize),
}
