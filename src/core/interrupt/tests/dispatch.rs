// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Simulated interrupt service tests

use super::super::*;
use crate::core::memory::SimBus;

/// Records the active PSW in B and acknowledges the timer 1 flag
fn on_timer1(bus: &dyn IoBus) {
    map::B.write(bus, map::PSW.read(bus));
    map::T1IF.clear(bus);
}

/// Counts invocations in SP and acknowledges the DMA flag
fn on_dma(bus: &dyn IoBus) {
    map::SP.modify(bus, |n| n + 1);
    map::DMAIF.clear(bus);
}

/// Never acknowledges its flag
fn stuck(bus: &dyn IoBus) {
    map::SP.modify(bus, |n| n.wrapping_add(1));
}

const TABLE: VectorTable = VectorTableBuilder::new()
    .bind(InterruptVector::T1, RegisterBank::B2, on_timer1)
    .bind(InterruptVector::Dma, RegisterBank::B0, on_dma)
    .bind(InterruptVector::T4, RegisterBank::B0, stuck)
    .bind_remaining(noop)
    .build();

#[test]
fn test_nothing_taken_without_ea() {
    let bus = SimBus::new();

    enable(&bus, InterruptVector::Dma, false);
    raise(&bus, InterruptVector::Dma);

    assert_eq!(TABLE.pending(&bus), None);
    assert_eq!(TABLE.service(&bus), None);
    assert_eq!(map::SP.read(&bus), 0);
}

#[test]
fn test_nothing_taken_when_source_disabled() {
    let bus = SimBus::new();

    map::EA.set(&bus);
    raise(&bus, InterruptVector::Dma);

    assert_eq!(TABLE.service(&bus), None);
}

#[test]
fn test_service_runs_bound_handler() {
    let bus = SimBus::new();

    enable(&bus, InterruptVector::Dma, true);
    raise(&bus, InterruptVector::Dma);

    assert_eq!(TABLE.service(&bus), Some(InterruptVector::Dma));
    assert_eq!(map::SP.read(&bus), 1);
    assert!(!map::DMAIF.read(&bus));
    assert_eq!(TABLE.service(&bus), None);
}

#[test]
fn test_handler_runs_in_bound_bank() {
    let bus = SimBus::new();
    map::PSW.write(&bus, 0x81);

    enable(&bus, InterruptVector::T1, true);
    raise(&bus, InterruptVector::T1);
    TABLE.service(&bus);

    // Bank 2 selected during the handler, other PSW bits untouched
    assert_eq!(map::B.read(&bus), 0x81 | 0x10);
    // Restored on return
    assert_eq!(map::PSW.read(&bus), 0x81);
}

#[test]
fn test_lowest_id_wins() {
    let bus = SimBus::new();

    enable(&bus, InterruptVector::T1, true);
    enable(&bus, InterruptVector::Dma, true);
    raise(&bus, InterruptVector::T1);
    raise(&bus, InterruptVector::Dma);

    assert_eq!(TABLE.service(&bus), Some(InterruptVector::Dma));
    assert_eq!(TABLE.service(&bus), Some(InterruptVector::T1));
    assert_eq!(TABLE.service(&bus), None);
}

#[test]
fn test_tcon_flags_cleared_on_entry() {
    let bus = SimBus::new();

    enable(&bus, InterruptVector::Urx0, true);
    raise(&bus, InterruptVector::Urx0);
    assert!(map::URX0IF.read(&bus));

    assert_eq!(TABLE.service(&bus), Some(InterruptVector::Urx0));
    assert!(!map::URX0IF.read(&bus));
}

#[test]
fn test_service_all_is_bounded() {
    let bus = SimBus::new();

    enable(&bus, InterruptVector::T4, true);
    raise(&bus, InterruptVector::T4);

    assert_eq!(TABLE.service_all(&bus, 5), 5);
    assert_eq!(map::SP.read(&bus), 5);
}

#[test]
fn test_service_all_stuck_source_left_pending() {
    let bus = SimBus::new();

    enable(&bus, InterruptVector::T4, true);
    raise(&bus, InterruptVector::T4);

    let taken = TABLE.service_all(&bus, 3);
    assert_eq!(TABLE.left_pending(&bus, taken, 3), Some(InterruptVector::T4));
}

#[test]
fn test_service_all_drained_exactly_at_limit() {
    let bus = SimBus::new();

    enable(&bus, InterruptVector::T1, true);
    enable(&bus, InterruptVector::Dma, true);
    raise(&bus, InterruptVector::T1);
    raise(&bus, InterruptVector::Dma);

    let taken = TABLE.service_all(&bus, 2);
    assert_eq!(taken, 2);
    assert_eq!(TABLE.left_pending(&bus, taken, 2), None);
}

#[test]
fn test_disable_masks_source() {
    let bus = SimBus::new();

    enable(&bus, InterruptVector::Dma, true);
    disable(&bus, InterruptVector::Dma);
    raise(&bus, InterruptVector::Dma);

    assert_eq!(TABLE.pending(&bus), None);
}
