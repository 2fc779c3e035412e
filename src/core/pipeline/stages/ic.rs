//! `IC` — Instruction Cache Fetch (spec.md §4.1).

use crate::common::fault::Fault;
use crate::core::cpu::Cpu;
use crate::core::pipeline::fault;
use crate::core::pipeline::latches::RfEx;
use crate::core::pipeline::signals::StageOutcome;

/// Runs `IC` for the current tick.
///
/// `IC` is the only stage with no upstream latch to squash against — it is
/// the entry point of the reverse-order sequence, always attempted. A
/// persistent `IADE` simply keeps re-raising on each `FromIc` replay tick
/// until something external (an exception handler retargeting `pc`, or a
/// segment-map update) makes the lookup succeed.
pub fn ic_stage(cpu: &mut Cpu) -> StageOutcome {
    let pc_now = cpu.pc;
    cpu.latches.icrf.common.pc = pc_now;

    // Finalize the previous tick's RFEX decode before this tick's fetch
    // overwrites `rfex.iw`. `iw_mask` is all-ones except right after a
    // branch squashes its delay slot (spec.md §3, §4.1 rationale).
    let masked_iw = cpu.latches.rfex.iw & cpu.latches.rfex.iw_mask;
    cpu.latches.rfex.opcode = cpu.decoder.decode(masked_iw);
    cpu.latches.rfex.iw_mask = RfEx::MASK_CLEAR;

    let mut segment = cpu.latches.icrf.segment;
    if segment.misses(pc_now) {
        match cpu.segments.lookup(pc_now, cpu.cp0_status) {
            Some(found) => {
                segment = found;
                cpu.latches.icrf.segment = found;
            }
            None => {
                fault::iade(cpu);
                return StageOutcome::Abort;
            }
        }
    }

    // Supplements the distilled fetch contract: `rfex.iw` has to come from
    // somewhere, and the bus is the only collaborator that can supply it
    // (spec.md §2 component 2). Fetched here, one tick ahead of the finalize
    // step above that consumes it, mirroring a classic IF/ID latch.
    cpu.latches.rfex.iw = cpu.bus.read_word(segment.to_bus(pc_now).val(), 4) as u32;

    cpu.latches.icrf.common.fault = Fault::None;
    cpu.pc = pc_now.wrapping_add(4);
    StageOutcome::Continue
}
