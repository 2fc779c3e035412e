//! `EX` — Execute (spec.md §4.3).

use crate::bus::{BusOp, BusRequest};
use crate::core::cpu::Cpu;
use crate::core::pipeline::fault;
use crate::core::pipeline::hazards;
use crate::core::pipeline::signals::StageOutcome;
use crate::isa::NullHandlerTable;

const RS_SHIFT: u32 = 21;
const RT_SHIFT: u32 = 16;
const REG_MASK: u32 = 0x1F;

/// Runs `EX` for the current tick.
///
/// Ordering matters here: interlock detection (step 4) happens *before*
/// forwarding (step 5) and is checked unconditionally against any
/// `DcWb.dest` match — it does not try to distinguish "this would forward
/// correctly anyway" from "this is a load whose data isn't back yet" (spec.md
/// §4.3 step 4, literally).
pub fn ex_stage(cpu: &mut Cpu) -> StageOutcome {
    if cpu.latches.rfex.common.fault.is_fault() {
        cpu.latches.exdc.common = cpu.latches.rfex.common;
        cpu.latches.exdc.request = BusRequest::NONE;
        cpu.latches.exdc.dest = 0;
        return StageOutcome::Continue;
    }

    cpu.latches.exdc.common = cpu.latches.rfex.common;

    let mut flags = cpu.latches.rfex.opcode.flags;
    if cpu.latches.exdc.request.kind == BusOp::None {
        flags.needs_rs = false;
        flags.needs_rt = false;
    }

    let iw = cpu.latches.rfex.iw;
    let rs = ((iw >> RS_SHIFT) & REG_MASK) as usize;
    let rt = ((iw >> RT_SHIFT) & REG_MASK) as usize;

    if hazards::needs_interlock(&cpu.latches.dcwb, flags.needs_rs, rs, flags.needs_rt, rt) {
        fault::ldi(cpu);
        return StageOutcome::Abort;
    }

    let (rs_value, rt_value) = hazards::forward_operands(&mut cpu.regs, &cpu.latches.dcwb, rs, rt);

    cpu.latches.exdc.request = BusRequest::NONE;
    cpu.latches.exdc.dest = 0;

    let opcode = cpu.latches.rfex.opcode;
    // Swap the real handler table out for the call: `dispatch` takes `&mut
    // Cpu`, and `cpu.handlers` can't be borrowed across that call without
    // aliasing itself (see `NullHandlerTable`).
    let handlers = std::mem::replace(&mut cpu.handlers, Box::new(NullHandlerTable));
    handlers.dispatch(&opcode, cpu, rs_value, rt_value);
    cpu.handlers = handlers;

    StageOutcome::Continue
}
