//! General-Purpose Register File.
//!
//! This module implements the integer register file for the pipeline core. It
//! performs the following:
//! 1. **Storage:** Maintains 32 general-purpose 64-bit registers.
//! 2. **Invariant Enforcement:** Ensures register `R0` is hardwired to zero,
//!    at both read and write time — the pipeline's forwarding swap (spec.md
//!    §4.3) relies on `R0` being a true no-op, not just a read-time mask.
//! 3. **Debugging:** Provides a dump utility for inspecting register state.

/// General-purpose register file. `R0` always reads as zero; writes to it are
/// discarded immediately rather than merely masked at read time.
#[derive(Debug)]
pub struct RegisterFile {
    regs: [u64; 32],
}

impl RegisterFile {
    /// Creates a register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self { regs: [0; 32] }
    }

    /// Reads a general-purpose register. `R0` always returns 0.
    #[inline]
    pub fn read(&self, idx: usize) -> u64 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a general-purpose register. Writes to `R0` are discarded.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u64) {
        if idx != 0 {
            self.regs[idx] = val;
        }
        self.regs[0] = 0;
    }

    /// Dumps all registers to stdout, two per line, for debugging.
    pub fn dump(&self) {
        for i in (0..32).step_by(2) {
            println!(
                "r{:<2}={:#018x} r{:<2}={:#018x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
