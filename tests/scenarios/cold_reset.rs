//! Cold reset preempts every pipeline stage for the tick it's asserted on —
//! none of the external collaborators are touched at all.

use crate::common::harness::TestContext;
use crate::common::mocks::{MockTestBus, MockTestDecoder, MockTestHandlerTable, MockTestSegmentMap};
use pretty_assertions::assert_eq;
use vr4300_core::core::pipeline::SkipStages;
use vr4300_core::{Config, Cpu, Fault};

#[test]
fn reset_zeroes_pc_and_latches_without_calling_any_collaborator() {
    let cpu = Cpu::new(
        Box::new(MockTestBus::new()),
        Box::new(MockTestSegmentMap::new()),
        Box::new(MockTestDecoder::new()),
        Box::new(MockTestHandlerTable::new()),
        Config::default(),
    );

    let mut ctx = TestContext::new(cpu);
    ctx.cpu.pc = 0xFFFF_FFFF_8000_1000;
    ctx.cpu.exception_history = 3;
    ctx.cpu.fault_present = true;
    ctx.cpu.assert_cold_reset();

    ctx.step(1);

    assert_eq!(ctx.cpu.pc, 0);
    assert!(!ctx.cpu.fault_present);
    assert_eq!(ctx.cpu.exception_history, 0);
    assert_eq!(ctx.cpu.skip_stages, SkipStages::Fast);
    assert_eq!(ctx.cpu.latches.icrf.common.fault, Fault::Rst);
}

#[test]
fn a_stalling_tick_ignores_a_pending_reset() {
    let cpu = Cpu::new(
        Box::new(MockTestBus::new()),
        Box::new(MockTestSegmentMap::new()),
        Box::new(MockTestDecoder::new()),
        Box::new(MockTestHandlerTable::new()),
        Config::default(),
    );

    let mut ctx = TestContext::new(cpu);
    ctx.cpu.pc = 0x4000;
    ctx.cpu.cycles_to_stall = 1;
    ctx.cpu.assert_cold_reset();

    ctx.step(1);

    assert_eq!(ctx.cpu.cycles_to_stall, 0, "the stall counter still ticks down");
    assert_eq!(ctx.cpu.pc, 0x4000, "reset did not run yet");

    ctx.step(1);

    assert_eq!(ctx.cpu.pc, 0, "reset runs once the stall has cleared");
}
