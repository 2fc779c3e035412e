//! Common types shared across the pipeline core.
//!
//! 1. **Addresses & segments:** [`addr`] — virtual/bus address newtypes and
//!    the [`addr::Segment`] translation-window descriptor.
//! 2. **Registers:** [`reg`] — the hardwired-zero general-purpose register file.
//! 3. **Faults:** [`fault`] — the closed fault taxonomy the pipeline can raise.

pub mod addr;
pub mod fault;
pub mod reg;

pub use addr::{BusAddr, Cp0Status, Segment, VirtAddr};
pub use fault::Fault;
pub use reg::RegisterFile;
