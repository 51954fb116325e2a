// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! 8051 instruction timing model of the delay routine
//!
//! [`assemble`] lays the routine out at a link address, the same way the
//! linker would, and [`TimingModel`] walks it instruction by instruction,
//! charging each one from a [`CycleTable`] plus the odd-target penalty for
//! every taken transfer. This makes the parity property checkable on the
//! host for any link address.

use super::{Cycles, Delay};
use serde::{Deserialize, Serialize};

/// NOPs in each of the two loop halves
pub const FILLER_NOPS: usize = 9;

/// NOPs jumped over between the halves
pub const SKIPPED_NOPS: usize = 1;

/// NOPs in the loop body of the single-jump layout
pub const SINGLE_JUMP_NOPS: usize = 28;

/// Default system clock: 32 MHz crystal, no division
pub const DEFAULT_CLOCK_HZ: u32 = 32_000_000;

/// Cycle cost of each instruction the routine uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleTable {
    pub nop: u32,
    pub ljmp: u32,
    pub lcall: u32,
    /// `MOV A, direct`
    pub mov_a_direct: u32,
    /// `MOV direct, #imm`, the caller loading the argument into DPL
    pub mov_direct_imm: u32,
    pub jz: u32,
    /// `DJNZ direct, rel`
    pub djnz: u32,
    pub ret: u32,
    /// Extra cycles for a taken transfer to an odd address
    pub odd_target_penalty: u32,
}

impl Default for CycleTable {
    fn default() -> Self {
        Self {
            nop: 1,
            ljmp: 4,
            lcall: 4,
            mov_a_direct: 2,
            mov_direct_imm: 3,
            jz: 3,
            djnz: 4,
            ret: 4,
            odd_target_penalty: 1,
        }
    }
}

impl CycleTable {
    /// Largest cost accepted for any one entry
    pub const MAX_ENTRY: u32 = 255;

    /// First entry above [`MAX_ENTRY`](Self::MAX_ENTRY), by name
    pub fn oversized_entry(&self) -> Option<(&'static str, u32)> {
        [
            ("nop", self.nop),
            ("ljmp", self.ljmp),
            ("lcall", self.lcall),
            ("mov_a_direct", self.mov_a_direct),
            ("mov_direct_imm", self.mov_direct_imm),
            ("jz", self.jz),
            ("djnz", self.djnz),
            ("ret", self.ret),
            ("odd_target_penalty", self.odd_target_penalty),
        ]
        .into_iter()
        .find(|(_, cycles)| *cycles > Self::MAX_ENTRY)
    }
}

/// Jump targets inside the routine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    LoopStart,
    LoopJump,
    Check,
    LoopEnd,
}

/// Instructions the routine is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instr {
    Nop,
    Ljmp(Label),
    /// `MOV A, DPL`
    MovADpl,
    Jz(Label),
    /// `DJNZ DPL, rel`
    DjnzDpl(Label),
    Ret,
}

impl Instr {
    /// Encoded size in bytes
    pub const fn size(self) -> u16 {
        match self {
            Instr::Nop | Instr::Ret => 1,
            Instr::MovADpl | Instr::Jz(_) => 2,
            Instr::Ljmp(_) | Instr::DjnzDpl(_) => 3,
        }
    }

    fn target(self) -> Option<Label> {
        match self {
            Instr::Ljmp(label) | Instr::Jz(label) | Instr::DjnzDpl(label) => Some(label),
            _ => None,
        }
    }
}

/// Routine layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Two jumps per iteration with targets of opposite parity
    #[default]
    ParityBalanced,
    /// One backward jump per iteration; speed depends on link address
    SingleJump,
}

enum Line {
    Label(Label),
    Op(Instr),
}

fn source(layout: Layout) -> Vec<Line> {
    let nops = |n: usize| (0..n).map(|_| Line::Op(Instr::Nop));
    let mut lines = Vec::new();

    match layout {
        Layout::ParityBalanced => {
            lines.push(Line::Op(Instr::Ljmp(Label::Check)));
            lines.push(Line::Label(Label::LoopStart));
            lines.extend(nops(FILLER_NOPS));
            lines.push(Line::Op(Instr::Ljmp(Label::LoopJump)));
            lines.extend(nops(SKIPPED_NOPS));
            lines.push(Line::Label(Label::LoopJump));
            lines.extend(nops(FILLER_NOPS));
            lines.push(Line::Label(Label::Check));
            lines.push(Line::Op(Instr::MovADpl));
            lines.push(Line::Op(Instr::Jz(Label::LoopEnd)));
            lines.push(Line::Op(Instr::DjnzDpl(Label::LoopStart)));
        }
        Layout::SingleJump => {
            lines.push(Line::Label(Label::Check));
            lines.push(Line::Op(Instr::MovADpl));
            lines.push(Line::Op(Instr::Jz(Label::LoopEnd)));
            lines.push(Line::Label(Label::LoopStart));
            lines.extend(nops(SINGLE_JUMP_NOPS));
            lines.push(Line::Op(Instr::DjnzDpl(Label::LoopStart)));
        }
    }

    lines.push(Line::Label(Label::LoopEnd));
    lines.push(Line::Op(Instr::Ret));
    lines
}

/// One placed instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    pub address: u16,
    pub instr: Instr,
    /// Index of the jump target in the routine, for transfers
    target: Option<usize>,
}

/// The delay routine placed at a link address
#[derive(Debug, Clone)]
pub struct Routine {
    base: u16,
    layout: Layout,
    code: Vec<Placed>,
    labels: Vec<(Label, u16)>,
}

impl Routine {
    pub fn base(&self) -> u16 {
        self.base
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn code(&self) -> &[Placed] {
        &self.code
    }

    /// Code size in bytes
    pub fn len(&self) -> u16 {
        self.code.iter().map(|p| p.instr.size()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Address of a label, if the layout has it
    pub fn address_of(&self, label: Label) -> Option<u16> {
        self.labels
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, addr)| *addr)
    }
}

/// Place the routine at `base`
///
/// Addresses wrap at 64KB like the program counter.
///
/// ```
/// use cc254x::core::delay::model::{assemble, Label, Layout};
///
/// let even = assemble(0x1000, Layout::ParityBalanced);
/// let odd = assemble(0x1001, Layout::ParityBalanced);
///
/// for routine in [even, odd] {
///     let start = routine.address_of(Label::LoopStart).unwrap();
///     let jump = routine.address_of(Label::LoopJump).unwrap();
///     assert_eq!((start ^ jump) & 1, 1);
/// }
/// ```
pub fn assemble(base: u16, layout: Layout) -> Routine {
    let lines = source(layout);

    // First pass: addresses and label positions
    let mut labels = Vec::new();
    let mut label_index = Vec::new();
    let mut placed = Vec::new();
    let mut address = base;
    for line in &lines {
        match line {
            Line::Label(label) => {
                labels.push((*label, address));
                label_index.push((*label, placed.len()));
            }
            Line::Op(instr) => {
                placed.push((address, *instr));
                address = address.wrapping_add(instr.size());
            }
        }
    }

    // Second pass: resolve jump targets to instruction indices
    let code = placed
        .into_iter()
        .map(|(address, instr)| Placed {
            address,
            instr,
            target: instr.target().and_then(|label| {
                label_index
                    .iter()
                    .find(|(l, _)| *l == label)
                    .map(|(_, index)| *index)
            }),
        })
        .collect();

    log::trace!("Assembled {:?} delay routine at 0x{:04X}", layout, base);
    Routine {
        base,
        layout,
        code,
        labels,
    }
}

/// Outcome of one modelled call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CallTiming {
    /// Cycles from the caller loading DPL to the return
    pub cycles: Cycles,
    /// Taken backward jumps (`DJNZ`)
    pub iterations: u32,
    /// Penalty cycles paid for odd targets
    pub penalties: u32,
}

impl CallTiming {
    fn charge(&mut self, cycles: u32, penalty: u32) {
        self.cycles += Cycles::from(cycles) + Cycles::from(penalty);
        if penalty != 0 {
            self.penalties += 1;
        }
    }
}

/// Cycle-counting interpreter for the delay routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimingModel {
    table: CycleTable,
}

impl TimingModel {
    pub fn new(table: CycleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CycleTable {
        &self.table
    }

    fn penalty(&self, target: u16) -> u32 {
        if target & 1 == 1 {
            self.table.odd_target_penalty
        } else {
            0
        }
    }

    fn transfer_penalty(&self, target: Option<(usize, u16)>) -> u32 {
        target.map_or(0, |(_, address)| self.penalty(address))
    }

    /// Model `delay_us(count)`: `MOV DPL, #count` then `LCALL` into the routine
    pub fn call(&self, routine: &Routine, count: u8) -> CallTiming {
        let t = &self.table;
        let mut timing = CallTiming::default();

        timing.charge(t.mov_direct_imm, 0);
        timing.charge(t.lcall, self.penalty(routine.base));

        let mut a = 0u8;
        let mut dpl = count;
        let mut pc = 0usize;

        while let Some(op) = routine.code.get(pc) {
            // Resolved target of a transfer, when it is taken
            let taken_to = |taken: bool| -> Option<(usize, u16)> {
                let index = op.target.filter(|_| taken)?;
                routine.code.get(index).map(|p| (index, p.address))
            };

            let next = match op.instr {
                Instr::Nop => {
                    timing.charge(t.nop, 0);
                    None
                }
                Instr::MovADpl => {
                    timing.charge(t.mov_a_direct, 0);
                    a = dpl;
                    None
                }
                Instr::Ljmp(_) => {
                    let target = taken_to(true);
                    timing.charge(t.ljmp, self.transfer_penalty(target));
                    target
                }
                Instr::Jz(_) => {
                    let target = taken_to(a == 0);
                    timing.charge(t.jz, self.transfer_penalty(target));
                    target
                }
                Instr::DjnzDpl(_) => {
                    dpl = dpl.wrapping_sub(1);
                    let target = taken_to(dpl != 0);
                    timing.charge(t.djnz, self.transfer_penalty(target));
                    if target.is_some() {
                        timing.iterations += 1;
                    }
                    target
                }
                Instr::Ret => {
                    // Return target belongs to the caller
                    timing.charge(t.ret, 0);
                    break;
                }
            };

            pc = next.map_or(pc + 1, |(index, _)| index);
        }

        timing
    }
}

/// [`Delay`] that runs the routine through the timing model
///
/// Time advances only in the model; nothing waits.
#[derive(Debug, Clone)]
pub struct ModeledDelay {
    model: TimingModel,
    routine: Routine,
    clock_hz: u32,
    elapsed: Cycles,
    calls: u64,
}

impl ModeledDelay {
    /// Balanced routine at `base`, default timing, 32 MHz
    pub fn new(base: u16) -> Self {
        Self::with_model(
            assemble(base, Layout::ParityBalanced),
            TimingModel::default(),
            DEFAULT_CLOCK_HZ,
        )
    }

    pub fn with_model(routine: Routine, model: TimingModel, clock_hz: u32) -> Self {
        Self {
            model,
            routine,
            clock_hz,
            elapsed: 0,
            calls: 0,
        }
    }

    pub fn routine(&self) -> &Routine {
        &self.routine
    }

    pub fn elapsed_cycles(&self) -> Cycles {
        self.elapsed
    }

    /// Number of `delay_us` calls made
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Elapsed time at the configured clock
    pub fn elapsed_us(&self) -> f64 {
        self.elapsed as f64 * 1_000_000.0 / f64::from(self.clock_hz)
    }

    pub fn reset(&mut self) {
        self.elapsed = 0;
        self.calls = 0;
    }
}

impl Delay for ModeledDelay {
    fn delay_us(&mut self, us: u8) {
        let timing = self.model.call(&self.routine, us);
        self.elapsed += timing.cycles;
        self.calls += 1;
    }
}
