//! Cycle-accurate execution core for the VR4300's five-stage in-order
//! pipeline (IC, RF, EX, DC, WB).
//!
//! This crate models the pipeline engine only: stage functions, their
//! latches, load-use interlock detection, WB→EX forwarding, and the
//! fault-replay scheduler that resumes a partially-executed tick. The opcode
//! semantics table, the memory bus, the segment map / CP0, and the floating
//! point unit are external collaborators — see [`bus`], [`segment`], and
//! [`isa`] for the contracts this crate calls through rather than
//! implements.
//!
//! Drive a [`core::Cpu`] by calling [`core::pipeline::pipeline_init`] once,
//! then [`core::pipeline::cycle`] once per processor-clock tick.

pub mod bus;
pub mod common;
pub mod config;
pub mod core;
pub mod isa;
pub mod segment;

pub use bus::Bus;
pub use common::Fault;
pub use config::Config;
pub use core::Cpu;
pub use core::pipeline::{cycle, pipeline_init};
pub use isa::{Decoder, HandlerTable};
pub use segment::SegmentMap;
