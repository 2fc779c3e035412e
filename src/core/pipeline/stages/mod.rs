//! The five stage functions plus the load-result fix-up (spec.md §4.1–§4.6).
//!
//! Each stage function takes `&mut Cpu` and returns a [`StageOutcome`].
//! Every stage but `IC` first checks whether its *upstream* latch already
//! carries a fault (spec.md §7): if so, it copies `common` forward and
//! returns `Continue` without running its own body — this is the squash rule
//! that keeps a replay variant's earlier, skipped stages from being missed:
//! the stage immediately downstream of wherever the abort happened
//! propagates the marker one hop at a time on each subsequent tick.

mod dc;
mod ex;
mod fixdc;
mod ic;
mod rf;
mod wb;

pub use dc::dc_stage;
pub use ex::ex_stage;
pub use fixdc::ex_fixdc;
pub use ic::ic_stage;
pub use rf::rf_stage;
pub use wb::wb_stage;
