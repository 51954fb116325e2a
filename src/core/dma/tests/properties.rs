// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Property tests for the record encoding

use super::*;
use crate::core::memory::SimBus;
use proptest::prelude::*;

fn any_config() -> impl Strategy<Value = DmaChannelConfig> {
    any::<[u8; RECORD_LEN]>().prop_map(DmaChannelConfig::from_bytes)
}

proptest! {
    #[test]
    fn prop_bytes_round_trip(bytes in any::<[u8; RECORD_LEN]>()) {
        let config = DmaChannelConfig::from_bytes(bytes);
        prop_assert_eq!(config.to_bytes(), bytes);
    }

    #[test]
    fn prop_length_within_13_bits(config in any_config()) {
        prop_assert!(config.length() <= MAX_LENGTH);
        prop_assert!(config.trigger().value() <= DmaTrigger::MAX);
    }

    #[test]
    fn prop_xdata_round_trip(config in any_config(), address in 0x0000u16..0x1FF8) {
        let bus = SimBus::new();
        let dma = Dma::new(&bus);

        dma.write_config(address, &config);
        prop_assert_eq!(dma.read_config(address), config);
    }
}
