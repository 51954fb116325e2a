// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Interrupt Vector Tests
//!
//! - `basic`: vector ids, names, slots and register banks
//! - `binding`: const and run-time table construction
//! - `dispatch`: simulated interrupt service
//! - `image`: vector area code image

mod basic;
mod dispatch;
mod image;
