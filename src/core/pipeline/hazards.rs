//! Load-use interlock detection and WB→EX forwarding.
//!
//! This module implements the two pieces of data-hazard handling `EX`
//! performs each cycle (spec.md §4.3):
//! 1. **Interlock detection:** a load whose destination hasn't reached `WB`
//!    yet but is needed this cycle forces an `LDI` stall.
//! 2. **Forwarding:** the value `WB` is about to commit this same cycle is
//!    bypassed directly into the read, without waiting a cycle for the
//!    register file to observe it.

use crate::common::RegisterFile;
use crate::core::pipeline::latches::DcWb;

/// Whether `EX` must raise `LDI` this cycle.
///
/// A hazard exists when the instruction needs a source register that exactly
/// matches the destination still sitting in `DcWb` — i.e. the value hasn't
/// been committed to the register file yet and forwarding alone (which reads
/// `DcWb` same-cycle) cannot undo the one-cycle-too-late timing of a load
/// whose data isn't back from the bus at all.
///
/// Note this function is the *detection* half only; `ex_stage` decides
/// whether the match is load-use (the original spec does not distinguish —
/// any match against `DcWb.dest` with the register actually needed stalls,
/// matching spec.md §4.3 step 4 literally).
pub fn needs_interlock(dcwb: &DcWb, needs_rs: bool, rs: usize, needs_rt: bool, rt: usize) -> bool {
    if dcwb.dest == 0 {
        return false;
    }
    (needs_rs && rs == dcwb.dest) || (needs_rt && rt == dcwb.dest)
}

/// Forwards `rs`/`rt` from the about-to-commit `WB` value, via the
/// branchless temporary-swap idiom (spec.md §4.3 step 5, §9 "Branchless
/// forwarding via temporary swap"):
///
/// 1. Save `regs[dcwb.dest]`.
/// 2. Overwrite it with `dcwb.result`.
/// 3. Read `rs` and `rt` (R0 always reads zero regardless).
/// 4. Restore the saved value.
///
/// This produces WB→EX forwarding with no data-dependent branch in the hot
/// path — a naive `if dest == rs { .. }` works too but mispredicts on
/// unpredictable dependency chains (spec.md §9). Preserve the swap.
pub fn forward_operands(regs: &mut RegisterFile, dcwb: &DcWb, rs: usize, rt: usize) -> (u64, u64) {
    let saved = regs.read(dcwb.dest);
    regs.write(dcwb.dest, dcwb.result);

    let rs_val = regs.read(rs);
    let rt_val = regs.read(rt);

    regs.write(dcwb.dest, saved);

    (rs_val, rt_val)
}
