// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Vector table construction and dispatch
//!
//! A [`VectorTable`] only exists once every vector has exactly one handler.
//! The const builder turns a rebinding or a missing vector into a
//! compilation error:
//!
//! ```
//! use cc254x::core::interrupt::{noop, InterruptVector as V, RegisterBank, VectorTable, VectorTableBuilder};
//! use cc254x::core::memory::IoBus;
//!
//! fn on_timer1(_bus: &dyn IoBus) {}
//!
//! const TABLE: VectorTable = VectorTableBuilder::new()
//!     .bind(V::T1, RegisterBank::B1, on_timer1)
//!     .bind_remaining(noop)
//!     .build();
//!
//! assert_eq!(TABLE.binding(V::T1).bank(), RegisterBank::B1);
//! ```
//!
//! ```compile_fail
//! use cc254x::core::interrupt::{noop, InterruptVector as V, RegisterBank, VectorTable, VectorTableBuilder};
//!
//! // Two handlers on one vector
//! const TABLE: VectorTable = VectorTableBuilder::new()
//!     .bind(V::Dma, RegisterBank::B0, noop)
//!     .bind(V::Dma, RegisterBank::B0, noop)
//!     .bind_remaining(noop)
//!     .build();
//! # fn main() { let _ = &TABLE; }
//! ```
//!
//! ```compile_fail
//! use cc254x::core::interrupt::{noop, InterruptVector as V, RegisterBank, VectorTable, VectorTableBuilder};
//!
//! // Seventeen vectors left unbound
//! const TABLE: VectorTable = VectorTableBuilder::new()
//!     .bind(V::Dma, RegisterBank::B0, noop)
//!     .build();
//! # fn main() { let _ = &TABLE; }
//! ```

use super::{InterruptVector, RegisterBank, PSW_BANK_MASK, VECTOR_COUNT};
use crate::core::error::{HalError, Result};
use crate::core::memory::IoBus;
use crate::core::sfr::map::{EA, PSW};

/// Interrupt handler
///
/// Receives the I/O space; all shared state is register state.
pub type Handler = fn(&dyn IoBus);

/// Handler for vectors the firmware does not use
pub fn noop(_bus: &dyn IoBus) {}

/// `LJMP addr16` opcode
const LJMP: u8 = 0x02;

/// Size of the vector table code image: reset slot plus 18 vector slots
pub const VECTOR_IMAGE_LEN: usize = 3 + VECTOR_COUNT * 8;

/// One vector's handler and register bank
#[derive(Clone, Copy)]
pub struct IsrBinding {
    vector: InterruptVector,
    bank: RegisterBank,
    handler: Handler,
}

impl IsrBinding {
    pub const fn vector(&self) -> InterruptVector {
        self.vector
    }

    pub const fn bank(&self) -> RegisterBank {
        self.bank
    }

    pub const fn handler(&self) -> Handler {
        self.handler
    }

    /// Bank whose registers this handler leaves modified, if any
    ///
    /// Main-line code using the same bank sees its registers change under it.
    pub const fn clobbered_bank(&self) -> Option<RegisterBank> {
        if self.bank.restores_registers() {
            None
        } else {
            Some(self.bank)
        }
    }
}

impl std::fmt::Debug for IsrBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IsrBinding")
            .field("vector", &self.vector)
            .field("bank", &self.bank)
            .field("handler", &(self.handler as *const ()))
            .finish()
    }
}

/// Collects one binding per vector
#[derive(Clone, Copy)]
pub struct VectorTableBuilder {
    slots: [Option<IsrBinding>; VECTOR_COUNT],
}

impl VectorTableBuilder {
    pub const fn new() -> Self {
        Self {
            slots: [None; VECTOR_COUNT],
        }
    }

    /// Bind a handler; a second binding of the same vector panics
    ///
    /// In a `const` item the panic is a compilation error.
    pub const fn bind(
        mut self,
        vector: InterruptVector,
        bank: RegisterBank,
        handler: Handler,
    ) -> Self {
        let index = vector as usize;
        if self.slots[index].is_some() {
            panic!("interrupt vector bound twice");
        }
        self.slots[index] = Some(IsrBinding {
            vector,
            bank,
            handler,
        });
        self
    }

    /// Bind `handler` in bank 0 to every vector still unbound
    ///
    /// Firmware must name a handler even for sources it never enables.
    pub const fn bind_remaining(mut self, handler: Handler) -> Self {
        let mut index = 0;
        while index < VECTOR_COUNT {
            if self.slots[index].is_none() {
                self.slots[index] = Some(IsrBinding {
                    vector: InterruptVector::ALL[index],
                    bank: RegisterBank::B0,
                    handler,
                });
            }
            index += 1;
        }
        self
    }

    /// Finish the table; panics if any vector is unbound
    pub const fn build(self) -> VectorTable {
        let mut bindings = [IsrBinding {
            vector: InterruptVector::RfTxRx,
            bank: RegisterBank::B0,
            handler: noop,
        }; VECTOR_COUNT];

        let mut index = 0;
        while index < VECTOR_COUNT {
            match self.slots[index] {
                Some(binding) => bindings[index] = binding,
                None => panic!("interrupt vector has no handler"),
            }
            index += 1;
        }
        VectorTable { bindings }
    }

    /// Run-time [`bind`](Self::bind) for tooling
    pub fn try_bind(
        &mut self,
        vector: InterruptVector,
        bank: RegisterBank,
        handler: Handler,
    ) -> Result<()> {
        let slot = &mut self.slots[vector as usize];
        if slot.is_some() {
            return Err(HalError::VectorAlreadyBound(vector));
        }
        *slot = Some(IsrBinding {
            vector,
            bank,
            handler,
        });
        log::debug!("Bound {} to bank {}", vector, bank.index());
        Ok(())
    }

    /// Run-time [`build`](Self::build); reports every unbound vector
    pub fn try_build(self) -> Result<VectorTable> {
        let missing: Vec<InterruptVector> = InterruptVector::ALL
            .into_iter()
            .filter(|v| self.slots[*v as usize].is_none())
            .collect();

        if !missing.is_empty() {
            return Err(HalError::MissingHandlers(missing));
        }
        log::debug!("Vector table complete ({} vectors)", VECTOR_COUNT);
        Ok(self.build())
    }
}

impl Default for VectorTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete interrupt vector table
#[derive(Debug, Clone, Copy)]
pub struct VectorTable {
    bindings: [IsrBinding; VECTOR_COUNT],
}

impl VectorTable {
    pub const fn binding(&self, vector: InterruptVector) -> &IsrBinding {
        &self.bindings[vector as usize]
    }

    /// Bindings in vector id order
    pub fn iter(&self) -> impl Iterator<Item = &IsrBinding> {
        self.bindings.iter()
    }

    /// Highest-priority vector that would be taken now
    ///
    /// Nothing is taken while EA is clear. Among pending, enabled sources the
    /// lowest vector id wins.
    pub fn pending<B: IoBus + ?Sized>(&self, bus: &B) -> Option<InterruptVector> {
        if !EA.read(bus) {
            return None;
        }
        InterruptVector::ALL
            .into_iter()
            .find(|v| v.enable().is_set(bus) && v.flag().is_set(bus))
    }

    /// Service one pending interrupt, returning the vector taken
    ///
    /// Mirrors the handler entry and exit the compiler emits: PSW is saved,
    /// the bound bank is selected for the duration of the handler, and PSW
    /// is restored on return. Flags the hardware clears on entry are cleared
    /// before the handler runs; all others are the handler's to clear.
    pub fn service(&self, bus: &dyn IoBus) -> Option<InterruptVector> {
        let vector = self.pending(bus)?;
        let binding = self.binding(vector);

        if vector.cleared_on_entry() {
            vector.flag().clear(bus);
        }

        let saved_psw = PSW.read(bus);
        PSW.write(bus, (saved_psw & !PSW_BANK_MASK) | binding.bank.psw_bits());
        log::trace!(
            "IRQ {} -> 0x{:04X} (bank {})",
            vector,
            vector.slot_address(),
            binding.bank.index()
        );

        (binding.handler)(bus);

        PSW.write(bus, saved_psw);
        Some(vector)
    }

    /// Service interrupts until none is pending; returns how many ran
    ///
    /// `limit` bounds the loop for handlers that never clear their flag.
    pub fn service_all(&self, bus: &dyn IoBus, limit: usize) -> usize {
        let mut taken = 0;
        while taken < limit && self.service(bus).is_some() {
            taken += 1;
        }
        if let Some(vector) = self.left_pending(bus, taken, limit) {
            log::warn!(
                "Interrupt service limit {} reached with {} still pending",
                limit,
                vector
            );
        }
        taken
    }

    /// Vector still waiting once `service_all` stopped at `limit`
    pub(crate) fn left_pending(
        &self,
        bus: &dyn IoBus,
        taken: usize,
        limit: usize,
    ) -> Option<InterruptVector> {
        if taken < limit {
            return None;
        }
        self.pending(bus)
    }

    /// Code image of the vector area
    ///
    /// Address 0x0000 jumps to `reset`; each vector slot holds an `LJMP` to
    /// the address `address_of` reports for its handler. Slot padding is
    /// zero.
    ///
    /// ```
    /// use cc254x::core::interrupt::{noop, InterruptVector, VectorTableBuilder};
    ///
    /// let table = VectorTableBuilder::new().bind_remaining(noop).build();
    /// let image = table.image(0x0100, |v| 0x0200 + v.id() as u16 * 0x10);
    ///
    /// assert_eq!(&image[0..3], &[0x02, 0x01, 0x00]);
    /// let dma = InterruptVector::Dma.slot_address() as usize;
    /// assert_eq!(&image[dma..dma + 3], &[0x02, 0x02, 0x80]);
    /// ```
    pub fn image(
        &self,
        reset: u16,
        address_of: impl Fn(InterruptVector) -> u16,
    ) -> [u8; VECTOR_IMAGE_LEN] {
        let mut image = [0u8; VECTOR_IMAGE_LEN];
        write_ljmp(&mut image[0..3], reset);

        for binding in self.iter() {
            let slot = binding.vector.slot_address() as usize;
            write_ljmp(&mut image[slot..slot + 3], address_of(binding.vector));
        }
        image
    }
}

fn write_ljmp(slot: &mut [u8], target: u16) {
    let [high, low] = target.to_be_bytes();
    slot.copy_from_slice(&[LJMP, high, low]);
}
