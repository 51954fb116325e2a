// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Register Map Tests
//!
//! - `basic`: byte register access through the bus
//! - `bits`: bit aliases and single-bit writes
//! - `register_pairs`: 16-bit register pairs
//! - `table`: table contents, lookup and aliases
//! - `properties`: property tests over the whole SFR range

use super::*;
use crate::core::memory::SimBus;
