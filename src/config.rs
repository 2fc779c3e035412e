//! Configuration for the pipeline core.
//!
//! This module defines the handful of parameters the pipeline engine treats
//! as tunable rather than architecturally fixed. It is structured the way the
//! teacher crate's configuration layer is: a `defaults` submodule of baseline
//! constants plus a `#[derive(Deserialize)]` struct, so a future host CLI or
//! embedding application can supply JSON/TOML configuration without this
//! crate needing to know about either format. No such host exists in this
//! crate (the CLI is an explicit external collaborator, spec.md §1) — only
//! the shape is carried.

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Number of consecutive fault-free `WB` evaluations needed to clear
    /// `fault_present` (spec.md §3, §4.7).
    pub const EXCEPTION_HISTORY_THRESHOLD: u32 = 4;

    /// Default word size, in bytes, for bus requests that don't specify one
    /// explicitly (used only by test harnesses constructing `BusRequest`s).
    pub const DEFAULT_BUS_WORD_SIZE: u8 = 4;
}

/// Pipeline-engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Consecutive fault-free `WB` evaluations required to clear `fault_present`.
    pub exception_history_threshold: u32,
    /// Default bus request word size, in bytes.
    pub default_bus_word_size: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exception_history_threshold: defaults::EXCEPTION_HISTORY_THRESHOLD,
            default_bus_word_size: defaults::DEFAULT_BUS_WORD_SIZE,
        }
    }
}
