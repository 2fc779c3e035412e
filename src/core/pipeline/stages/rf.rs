//! `RF` — Register Fetch / Decode Completion (spec.md §4.2).

use crate::core::cpu::Cpu;
use crate::core::pipeline::fault;
use crate::core::pipeline::signals::StageOutcome;

/// Runs `RF` for the current tick.
///
/// Register reads themselves happen in `EX`, after forwarding — an
/// intentional structural choice (spec.md §4.2) that keeps `RF` a pure
/// latch-advance-plus-cache-policy-check stage.
pub fn rf_stage(cpu: &mut Cpu) -> StageOutcome {
    cpu.latches.rfex.common = cpu.latches.icrf.common;

    if cpu.latches.icrf.common.fault.is_fault() {
        return StageOutcome::Continue;
    }

    if !cpu.latches.icrf.segment.cached {
        fault::unc(cpu);
        return StageOutcome::Abort;
    }

    StageOutcome::Continue
}
