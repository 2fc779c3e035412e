//! Fault taxonomy for the pipeline core.
//!
//! This module defines the small, closed set of faults the pipeline itself can
//! raise. It provides:
//! 1. **Taxonomy:** The six fault kinds named in the pipeline's design —
//!    address errors, the uncached-segment indicator, the load interlock, the
//!    data-cache-busy placeholder, and cold reset.
//! 2. **Reporting:** A hand-written `Display` and `std::error::Error` impl,
//!    matching how the teacher crate reports its own trap taxonomy rather than
//!    deriving with a macro crate.

use std::fmt;

/// A fault raised by a pipeline stage.
///
/// Faults are local to the latch that recorded them (see [`crate::core::pipeline::latches::Common`]);
/// a fault never unwinds out of the pipeline as a Rust error, it is data that
/// downstream stages inspect and squash against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Fault {
    /// No fault. The default state of every latch.
    #[default]
    None,
    /// Instruction Address Error — IC's segment lookup missed.
    Iade,
    /// Data Address Error — DC's segment lookup missed.
    Dade,
    /// Uncached-segment indicator observed at RF.
    Unc,
    /// Load Delay Interlock — EX found its source register still in flight.
    Ldi,
    /// Data Cache Busy — DC deferred a read for the approximate memory-latency model.
    Dcb,
    /// Cold reset signal.
    Rst,
}

impl Fault {
    /// `true` for every variant except [`Fault::None`].
    #[inline]
    pub fn is_fault(self) -> bool {
        self != Fault::None
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::None => write!(f, "none"),
            Fault::Iade => write!(f, "IADE (instruction address error)"),
            Fault::Dade => write!(f, "DADE (data address error)"),
            Fault::Unc => write!(f, "UNC (uncached segment)"),
            Fault::Ldi => write!(f, "LDI (load delay interlock)"),
            Fault::Dcb => write!(f, "DCB (data cache busy)"),
            Fault::Rst => write!(f, "RST (cold reset)"),
        }
    }
}

impl std::error::Error for Fault {}
