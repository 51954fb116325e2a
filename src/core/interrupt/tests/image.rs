// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Vector area code image tests

use super::super::*;

fn table() -> VectorTable {
    VectorTableBuilder::new().bind_remaining(noop).build()
}

#[test]
fn test_image_length() {
    assert_eq!(VECTOR_IMAGE_LEN, 0x0093);
}

#[test]
fn test_reset_slot() {
    let image = table().image(0x1234, |_| 0);
    assert_eq!(&image[0..3], &[0x02, 0x12, 0x34]);
}

#[test]
fn test_every_slot_jumps_to_its_handler() {
    let image = table().image(0x0000, |v| 0x4000 | v.id() as u16);

    for vector in InterruptVector::ALL {
        let slot = vector.slot_address() as usize;
        assert_eq!(image[slot], 0x02, "{} opcode", vector);
        assert_eq!(image[slot + 1], 0x40, "{} high", vector);
        assert_eq!(image[slot + 2], vector.id(), "{} low", vector);
        assert!(
            image[slot + 3..slot + 8].iter().all(|&b| b == 0),
            "{} padding",
            vector
        );
    }
}
