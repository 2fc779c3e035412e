//! `DC` — Data Cache (spec.md §4.4).

use crate::bus::BusOp;
use crate::core::cpu::Cpu;
use crate::core::pipeline::fault;
use crate::core::pipeline::signals::StageOutcome;

/// Runs `DC` for the current tick.
///
/// The `dcwb.common`/`result`/`dest` copy at the top happens unconditionally,
/// before the request is even inspected (spec.md §4.4 step 1) — a plain ALU
/// result with no pending bus request rides straight through to `dcwb`
/// unexamined.
pub fn dc_stage(cpu: &mut Cpu) -> StageOutcome {
    if cpu.latches.exdc.common.fault.is_fault() {
        cpu.latches.dcwb.common = cpu.latches.exdc.common;
        return StageOutcome::Continue;
    }

    cpu.latches.dcwb.common = cpu.latches.exdc.common;
    cpu.latches.dcwb.result = cpu.latches.exdc.result;
    cpu.latches.dcwb.dest = cpu.latches.exdc.dest;

    let request = cpu.latches.exdc.request;
    if request.kind == BusOp::None {
        return StageOutcome::Continue;
    }

    let mut segment = cpu.latches.exdc.segment;
    if segment.misses(request.address) {
        match cpu.segments.lookup(request.address, cpu.cp0_status) {
            Some(found) => {
                segment = found;
                cpu.latches.exdc.segment = found;
            }
            None => {
                fault::dade(cpu);
                return StageOutcome::Abort;
            }
        }
    }
    let bus_address = segment.to_bus(request.address);

    if request.kind == BusOp::Read {
        // The read's data doesn't land this tick — the approximate latency
        // model always defers it one replay (spec.md §4.4 step 4, §9 open
        // questions). `ex_fixdc` picks the result up on the `FromExFixup`
        // replay.
        fault::dcb(cpu);
        return StageOutcome::Abort;
    }

    cpu.bus
        .write_word(bus_address.val(), request.word, request.size, request.dqm);
    StageOutcome::Continue
}
