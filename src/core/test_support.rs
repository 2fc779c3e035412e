//! Shared test fixtures for the pipeline modules.
//!
//! Built on the same `mockall`-generated mocks the integration tests use
//! (`bus::MockBus`, `segment::MockSegmentMap`, `isa::MockDecoder`,
//! `isa::MockHandlerTable`), so a unit test anywhere under `core::pipeline`
//! can build a throwaway [`Cpu`] without hand-rolling stub collaborators.

use crate::bus::MockBus;
use crate::config::Config;
use crate::core::cpu::Cpu;
use crate::isa::{MockDecoder, MockHandlerTable};
use crate::segment::MockSegmentMap;

/// A `Cpu` wired to unconfigured mocks. Fine for tests that never reach the
/// collaborators (fault-helper unit tests, latch/hazard logic) — any
/// unconfigured mock call panics loudly, which is the point.
pub fn mock_cpu() -> Cpu {
    Cpu::new(
        Box::new(MockBus::new()),
        Box::new(MockSegmentMap::new()),
        Box::new(MockDecoder::new()),
        Box::new(MockHandlerTable::new()),
        Config::default(),
    )
}
