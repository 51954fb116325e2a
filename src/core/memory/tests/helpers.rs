// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Helper functions for I/O space tests

use super::*;

/// Creates a new SimBus instance for testing
pub fn create_test_bus() -> SimBus {
    SimBus::new()
}

/// Creates a SimBus with access tracing enabled
pub fn create_traced_bus() -> SimBus {
    let bus = SimBus::new();
    bus.enable_trace();
    bus
}

/// Bus that only provides byte access, so bit access uses the trait defaults
pub struct ByteOnlyBus(pub SimBus);

impl IoBus for ByteOnlyBus {
    fn read(&self, space: Space, addr: u16) -> u8 {
        self.0.read(space, addr)
    }

    fn write(&self, space: Space, addr: u16, value: u8) {
        self.0.write(space, addr, value);
    }
}
