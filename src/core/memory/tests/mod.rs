// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! I/O Space Tests
//!
//! - `basic`: SFR storage and bit access on the simulated bus
//! - `bus`: XDATA storage, the SFR mirror and access tracing
//! - `regions`: XDATA region identification
//! - `volatile`: the raw-window backend
//! - `helpers`: Common test utilities

use super::*;

mod basic;
mod bus;
mod helpers;
mod regions;
mod volatile;
