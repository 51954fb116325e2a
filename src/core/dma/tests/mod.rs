// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Unit tests for DMA access organized by category

use super::*;

mod controller;
mod encoding;
mod helpers;
mod properties;
