//! CPU state: registers, pipeline control state, and the external
//! collaborators the pipeline drives.
//!
//! The pipeline lives on `Cpu` itself (unlike the teacher, which splits
//! `Cpu`/`Simulator`): this crate has no separate simulator-level concern
//! (ELF loading, device ticking) to justify the split, since those are
//! explicitly out of scope (spec.md §1).

use crate::bus::Bus;
use crate::common::{Cp0Status, RegisterFile};
use crate::config::Config;
use crate::core::pipeline::latches::Latches;
use crate::core::pipeline::signals::SkipStages;
use crate::isa::{Decoder, HandlerTable};
use crate::segment::SegmentMap;

/// CPU architectural and pipeline-control state.
///
/// Owns every piece of long-lived mutable state (spec.md §9, "Global mutable
/// state"): the register file, the four pipeline latches, the pipeline
/// control counters, and the external collaborators behind trait objects.
/// There is no process-wide singleton anywhere in this crate — callers own a
/// `Cpu` and drive it by calling [`crate::core::pipeline::engine::cycle`].
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Program counter. `IC` copies this into `IcRf::pc` each cycle and then
    /// advances it.
    pub pc: u64,
    /// CP0 status snapshot handed opaquely to the segment map.
    pub cp0_status: Cp0Status,

    /// The four pipeline latches.
    pub latches: Latches,

    /// Non-negative tick counter; while positive, `cycle` just decrements it.
    pub cycles_to_stall: u32,
    /// True while a recently-raised fault may still be propagating.
    pub fault_present: bool,
    /// Which replay entry point the next tick should use.
    pub skip_stages: SkipStages,
    /// Ticks since the last observed fault; crosses `config.exception_history_threshold`
    /// to clear `fault_present`.
    pub exception_history: u32,
    /// Set by [`crate::core::pipeline::fault::rst`] or an external caller to
    /// request a cold reset on the next tick that isn't stalling.
    pub reset_pending: bool,

    /// Pipeline-engine configuration.
    pub config: Config,
    /// Enables `eprintln!` stage tracing.
    pub trace: bool,

    /// The memory bus.
    pub bus: Box<dyn Bus>,
    /// The segment map / address translator.
    pub segments: Box<dyn SegmentMap>,
    /// The instruction decoder.
    pub decoder: Box<dyn Decoder>,
    /// The opcode handler table.
    pub handlers: Box<dyn HandlerTable>,
}

impl Cpu {
    /// Builds a `Cpu` from its external collaborators, with all architectural
    /// and pipeline-control state zeroed. Callers should follow this with
    /// [`crate::core::pipeline::engine::pipeline_init`] before the first tick.
    pub fn new(
        bus: Box<dyn Bus>,
        segments: Box<dyn SegmentMap>,
        decoder: Box<dyn Decoder>,
        handlers: Box<dyn HandlerTable>,
        config: Config,
    ) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: 0,
            cp0_status: Cp0Status::default(),
            latches: Latches::default(),
            cycles_to_stall: 0,
            fault_present: false,
            skip_stages: SkipStages::Fast,
            exception_history: 0,
            reset_pending: false,
            config,
            trace: false,
            bus,
            segments,
            decoder,
            handlers,
        }
    }

    /// Requests a cold reset on the next non-stalling tick (spec.md §4.7,
    /// scenario 6). The stall-then-reset ordering in `cycle` is deliberate
    /// (spec.md §9, open question): a stalling CPU ignores a pending reset
    /// until the stall clears.
    pub fn assert_cold_reset(&mut self) {
        self.reset_pending = true;
    }
}
