//! `WB` — Writeback (spec.md §4.5).

use crate::core::cpu::Cpu;
use crate::core::pipeline::signals::StageOutcome;

/// Runs `WB` for the current tick. This is the only stage with no upstream
/// stage to propagate a fault *from* — it's terminal, so the fault check
/// here is the squash rule's base case rather than a forward-propagation.
pub fn wb_stage(cpu: &mut Cpu) -> StageOutcome {
    if cpu.latches.dcwb.common.fault.is_fault() {
        return StageOutcome::Continue;
    }

    cpu.regs.write(cpu.latches.dcwb.dest, cpu.latches.dcwb.result);
    StageOutcome::Continue
}
