//! Stage outcomes and the replay-entry-point state machine.

/// What a stage function reports back to the cycle driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageOutcome {
    /// The stage completed normally; the driver proceeds to the next stage.
    Continue,
    /// The stage raised a fault and squashed the remainder of this cycle.
    Abort,
}

/// The replay entry point `skip_stages` selects (spec.md §3, §4.8).
///
/// Re-expressed from the source's six-entry function-pointer table as a
/// tagged enum dispatched by `match` — same O(1) selection, no indirect call
/// (spec.md §9, "Function-pointer LUT for replay").
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkipStages {
    /// State 0: the fast path. `WB, DC, EX, RF, IC` run in full.
    #[default]
    Fast,
    /// State 1: resume from `DC` (WB already ran/will run first, as always).
    FromDc,
    /// State 2: resume from `EX`.
    FromEx,
    /// State 3: resume from `RF`. Entry point after an `LDI` interlock.
    FromRf,
    /// State 4: resume from `IC`.
    FromIc,
    /// State 5: resume from `EX`, first applying the load-result fix-up
    /// (`ex_fixdc`) to the just-completed read.
    FromExFixup,
}
