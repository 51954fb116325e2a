// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Delay Tests
//!
//! - `routine`: routine layout and per-instruction accounting
//! - `parity`: cycle counts against link address parity
//! - `split`: millisecond decomposition
//! - `spinning`: cycle-counter busy-wait
//! - `helpers`: Common test utilities

use super::model::*;
use super::spin::*;
use super::*;

mod helpers;
