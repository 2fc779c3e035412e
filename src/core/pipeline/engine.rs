//! The tick engine: `pipeline_init` and `cycle` (spec.md §4.7–§4.8, §6).

use crate::common::addr::Segment;
use crate::core::cpu::Cpu;
use crate::core::pipeline::fault;
use crate::core::pipeline::latches::{Latches, RfEx};
use crate::core::pipeline::signals::{SkipStages, StageOutcome};
use crate::core::pipeline::stages::{dc_stage, ex_fixdc, ex_stage, ic_stage, rf_stage, wb_stage};

/// The reverse pipeline order, indexed 0 (`WB`) through 4 (`IC`).
const STAGES: [fn(&mut Cpu) -> StageOutcome; 5] =
    [wb_stage, dc_stage, ex_stage, rf_stage, ic_stage];

/// Zeroes all latches and installs the default segment in `IcRf` and `ExDc`
/// (spec.md §6). Call once before the first [`cycle`].
pub fn pipeline_init(cpu: &mut Cpu) {
    cpu.latches = Latches::default();
    // `Default` gives `iw_mask = 0`, the squash state — a fresh decode must
    // not be spuriously squashed.
    cpu.latches.rfex.iw_mask = RfEx::MASK_CLEAR;
    install_identity_segments(cpu);

    cpu.fault_present = false;
    cpu.exception_history = 0;
    cpu.cycles_to_stall = 0;
    cpu.skip_stages = SkipStages::Fast;
    cpu.reset_pending = false;
}

pub(crate) fn install_identity_segments(cpu: &mut Cpu) {
    cpu.latches.icrf.segment = Segment::IDENTITY;
    cpu.latches.exdc.segment = Segment::IDENTITY;
}

/// Runs one tick (spec.md §4.7).
pub fn cycle(cpu: &mut Cpu) {
    if cpu.cycles_to_stall > 0 {
        cpu.cycles_to_stall -= 1;
        return;
    }

    if cpu.reset_pending {
        fault::rst(cpu);
        return;
    }

    // Only the `Fast` entry point's suffix (`WB..IC`) includes `WB` — sample
    // whether this tick will run it, and `DcWb`'s fault state going in,
    // before any stage has a chance to overwrite the latch (spec.md §9 open
    // question: `exception_history` only ticks on the variant that includes
    // `WB`).
    let will_run_wb = cpu.skip_stages == SkipStages::Fast;
    let wb_latch_fault_free = !cpu.latches.dcwb.common.fault.is_fault();

    if cpu.trace {
        eprintln!("[tick] pc={:#018x} skip_stages={:?}", cpu.pc, cpu.skip_stages);
    }

    let completed = match cpu.skip_stages {
        SkipStages::Fast => run_suffix(cpu, 0),
        SkipStages::FromDc => run_suffix(cpu, 1),
        SkipStages::FromEx => run_suffix(cpu, 2),
        SkipStages::FromRf => run_suffix(cpu, 3),
        SkipStages::FromIc => run_suffix(cpu, 4),
        SkipStages::FromExFixup => {
            ex_fixdc(cpu);
            run_suffix(cpu, 2)
        }
    };

    if completed {
        cpu.skip_stages = SkipStages::Fast;
    }

    if will_run_wb {
        if wb_latch_fault_free {
            cpu.exception_history += 1;
            if cpu.exception_history >= cpu.config.exception_history_threshold {
                cpu.fault_present = false;
            }
        } else {
            cpu.exception_history = 0;
        }
    }
}

/// Runs `STAGES[start..]`, stopping at the first `Abort`. Returns whether
/// every stage in the suffix completed.
fn run_suffix(cpu: &mut Cpu, start: usize) -> bool {
    for stage in &STAGES[start..] {
        if stage(cpu) == StageOutcome::Abort {
            return false;
        }
    }
    true
}
