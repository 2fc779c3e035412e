//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the four buffers that connect the five stages of the
//! pipeline (spec.md §3):
//! 1. **`IcRf`** — IC to RF: the fetched PC and the segment it was fetched
//!    through.
//! 2. **`RfEx`** — RF/IC combined to EX: the raw instruction word, its
//!    finalize mask, and the decoded opcode.
//! 3. **`ExDc`** — EX to DC: the bus request EX wants issued, the
//!    destination register, and the ALU/branch result.
//! 4. **`DcWb`** — DC to WB: the destination register and the value to commit.

use crate::bus::BusRequest;
use crate::common::fault::Fault;
use crate::common::addr::Segment;
use crate::isa::Opcode;

/// State every latch carries regardless of stage-specific payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Common {
    /// Program counter of the instruction occupying this latch.
    pub pc: u64,
    /// Fault recorded against this instruction, if any.
    ///
    /// A non-[`Fault::None`] value here means downstream stages for this
    /// instruction are squashed (spec.md §3 invariants, §7 propagation).
    pub fault: Fault,
}

/// IC → RF latch.
#[derive(Clone, Copy, Debug, Default)]
pub struct IcRf {
    /// Common stage-crossing state. `common.pc` is the PC this instruction
    /// was fetched at.
    pub common: Common,
    /// Segment this PC was fetched through.
    pub segment: Segment,
}

/// RF/IC combined → EX latch.
#[derive(Clone, Copy, Debug, Default)]
pub struct RfEx {
    /// Common stage-crossing state.
    pub common: Common,
    /// Raw instruction word, pre-mask.
    pub iw: u32,
    /// Mask applied to `iw` before decode. All-ones except immediately after
    /// a branch kill, when it is zeroed to force the delay-slot decode to a
    /// NOP-equivalent word (spec.md §3, §4.1).
    pub iw_mask: u32,
    /// Decoded opcode, finalized by `IC` from the masked `iw`.
    pub opcode: Opcode,
}

/// EX → DC latch.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExDc {
    /// Common stage-crossing state.
    pub common: Common,
    /// Bus request EX wants DC to issue, if any.
    pub request: BusRequest,
    /// Destination register index.
    pub dest: usize,
    /// Computed result (ALU output, or — after a read completes — a mask
    /// used by `ex_fixdc` to select which high bits survive extension).
    pub result: u64,
    /// Segment the request's address was last resolved against.
    pub segment: Segment,
}

/// DC → WB latch.
#[derive(Clone, Copy, Debug, Default)]
pub struct DcWb {
    /// Common stage-crossing state.
    pub common: Common,
    /// Destination register index.
    pub dest: usize,
    /// Value to commit to `regs[dest]` in `WB`.
    pub result: u64,
}

/// The full set of four pipeline latches.
#[derive(Clone, Copy, Debug, Default)]
pub struct Latches {
    /// IC → RF.
    pub icrf: IcRf,
    /// RF/IC → EX.
    pub rfex: RfEx,
    /// EX → DC.
    pub exdc: ExDc,
    /// DC → WB.
    pub dcwb: DcWb,
}

impl RfEx {
    /// `iw_mask` in the all-ones state: no squash pending.
    pub const MASK_CLEAR: u32 = !0;
    /// `iw_mask` in the squash state: forces the next finalize to a NOP.
    pub const MASK_SQUASH: u32 = 0;
}
