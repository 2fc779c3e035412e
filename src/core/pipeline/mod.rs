//! The five-stage pipeline: latches, hazard handling, faults, and the tick
//! engine that drives the stage functions.

pub mod engine;
pub mod fault;
pub mod hazards;
pub mod latches;
pub mod signals;
pub mod stages;

pub use engine::{cycle, pipeline_init};
pub use signals::{SkipStages, StageOutcome};
