//! Instruction-decode and opcode-handler contracts.
//!
//! The full opcode semantics table and its decoder are external collaborators
//! (spec.md §1): this module specifies only the shapes `RF`/`EX` observe —
//! [`Opcode`], the [`Decoder`] that produces one from a raw instruction word,
//! and the [`HandlerTable`] `EX` dispatches into.

mod opcode;

pub use opcode::{Opcode, OpcodeFlags};

use crate::core::Cpu;

/// Maps a raw 32-bit instruction word to an [`Opcode`] descriptor.
#[cfg_attr(test, mockall::automock)]
pub trait Decoder {
    /// Decodes `iw`.
    fn decode(&self, iw: u32) -> Opcode;
}

/// The opcode handler table `EX` dispatches into.
///
/// A handler mutates the register file, the `ExDc` latch (`request`, `dest`,
/// `result`), and — for branch/jump opcodes — the `IcRf` program counter and
/// the `RfEx` `iw_mask` (to squash the delay slot), given the two
/// already-forwarded source-register values.
#[cfg_attr(test, mockall::automock)]
pub trait HandlerTable {
    /// Dispatches to the handler for `opcode.id`.
    fn dispatch(&self, opcode: &Opcode, cpu: &mut Cpu, rs_value: u64, rt_value: u64);
}

/// A placeholder `EX` swaps into `Cpu::handlers` for the duration of a real
/// dispatch call.
///
/// `HandlerTable::dispatch` takes `&mut Cpu`, and `Cpu` itself owns the
/// handler table — calling through `cpu.handlers` while also passing `&mut
/// cpu` would alias the same field. `ex_stage` works around this by moving
/// the real table out of `Cpu` into a local, leaving this no-op behind for
/// the call's duration, then moving the real table back. It is never itself
/// dispatched into.
#[derive(Debug, Default)]
pub(crate) struct NullHandlerTable;

impl HandlerTable for NullHandlerTable {
    fn dispatch(&self, _opcode: &Opcode, _cpu: &mut Cpu, _rs_value: u64, _rt_value: u64) {}
}
