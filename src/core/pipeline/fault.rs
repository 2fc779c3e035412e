//! Fault-raising helpers (spec.md §6 "Fault API", §7).
//!
//! Each function here is called by exactly one stage, at the point that
//! stage's own preconditions fail. Every helper records its [`Fault`] on the
//! latch the *raising* stage produces (its own output latch) — this is what
//! lets the squash rule in `stages::squash_if_faulted` work uniformly one
//! stage later: the next stage down the line sees a non-`NONE` fault on its
//! *input* latch and copies it forward without running its body.
//!
//! `skip_stages` selects which *suffix* of `WB, DC, EX, RF, IC` the next tick
//! runs (spec.md §4.7/§4.8). A replay entry point of `FromX` means the next
//! tick runs `X` and everything after it in that list — stages earlier than
//! `X` do not run at all that tick. `LDI`, raised by `EX`, targets `FromRf`
//! rather than `FromEx` deliberately: `RF` and `IC` are the only two stages
//! that had not yet run this tick when `EX` aborted (they come after `EX` in
//! the reverse-order sequence), so they are exactly the suffix left to
//! finish. The stalled instruction itself — still sitting in `RfEx`, its
//! `iw`/`opcode` untouched since only `RF` touches `.common` — gets its `EX`
//! retry on the *following* tick, once `skip_stages` has reset to `Fast`.

use crate::core::cpu::Cpu;
use crate::core::pipeline::signals::SkipStages;
use crate::common::fault::Fault;

/// `IC`'s segment lookup missed (spec.md §4.1 step 3).
pub fn iade(cpu: &mut Cpu) {
    cpu.latches.icrf.common.fault = Fault::Iade;
    cpu.fault_present = true;
    cpu.skip_stages = SkipStages::FromIc;
}

/// `DC`'s segment lookup missed (spec.md §4.4 step 3).
pub fn dade(cpu: &mut Cpu) {
    cpu.latches.dcwb.common.fault = Fault::Dade;
    cpu.fault_present = true;
    cpu.skip_stages = SkipStages::FromDc;
}

/// `RF` observed an uncached segment (spec.md §4.2).
pub fn unc(cpu: &mut Cpu) {
    cpu.latches.rfex.common.fault = Fault::Unc;
    cpu.fault_present = true;
    cpu.skip_stages = SkipStages::FromRf;
}

/// `EX` found a source register still in flight through `DcWb` (spec.md §4.3
/// step 4). Replay resumes at `RF`, not `EX` — see the module doc for why.
pub fn ldi(cpu: &mut Cpu) {
    cpu.latches.exdc.common.fault = Fault::Ldi;
    cpu.fault_present = true;
    cpu.skip_stages = SkipStages::FromRf;
}

/// `DC` deferred a read for the approximate memory-latency model (spec.md
/// §4.4 step 4). Replay applies the load fix-up before resuming at `EX`.
pub fn dcb(cpu: &mut Cpu) {
    cpu.latches.dcwb.common.fault = Fault::Dcb;
    cpu.fault_present = true;
    cpu.skip_stages = SkipStages::FromExFixup;
}

/// Cold reset (spec.md §4.7 step 2, scenario 6). Unlike the other five
/// helpers, this one does not leave a fault for a later stage to squash
/// against — the driver calls this in place of running any stage at all this
/// tick, then returns immediately.
pub fn rst(cpu: &mut Cpu) {
    cpu.latches = Default::default();
    cpu.latches.icrf.common.fault = Fault::Rst;
    crate::core::pipeline::engine::install_identity_segments(cpu);
    cpu.pc = 0;
    cpu.reset_pending = false;
    cpu.fault_present = false;
    cpu.exception_history = 0;
    cpu.cycles_to_stall = 0;
    cpu.skip_stages = SkipStages::Fast;
}
