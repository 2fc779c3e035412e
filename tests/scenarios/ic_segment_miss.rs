//! A persistent `IC` segment miss: `IADE` recorded, `pc` frozen, and every
//! following tick replays just `IC` (`SkipStages::FromIc`) until something
//! external changes the segment map or `pc` — neither of which happens here,
//! so the fault never clears on its own.

use crate::common::harness::TestContext;
use crate::common::mocks::{MockTestBus, MockTestDecoder, MockTestHandlerTable, MockTestSegmentMap};
use pretty_assertions::assert_eq;
use vr4300_core::common::addr::Segment;
use vr4300_core::core::pipeline::SkipStages;
use vr4300_core::isa::Opcode;
use vr4300_core::{Config, Cpu, Fault};

#[test]
fn persistent_miss_halts_pc_and_keeps_replaying_ic() {
    let mut decoder = MockTestDecoder::new();
    decoder.expect_decode().returning(|_| Opcode::NOP);

    let mut segments = MockTestSegmentMap::new();
    segments.expect_lookup().returning(|_, _| None);

    // EX and WB still run every tick before `IC` aborts — the reverse-order
    // sequence only stops once the aborting stage itself is reached.
    let mut handlers = MockTestHandlerTable::new();
    handlers.expect_dispatch().returning(|_, _, _, _| {});

    let cpu = Cpu::new(
        Box::new(MockTestBus::new()),
        Box::new(segments),
        Box::new(decoder),
        Box::new(handlers),
        Config::default(),
    );

    let mut ctx = TestContext::new(cpu);
    // Install a segment that doesn't cover `pc` (`pipeline_init`'s default
    // `Segment::IDENTITY` covers every address, so a real miss requires a
    // narrower segment already installed in `IcRf`).
    ctx.cpu.latches.icrf.segment = Segment {
        start: 0,
        length: 0,
        offset: 0,
        cached: true,
    };
    ctx.cpu.pc = 0x8000;

    ctx.step(1);

    assert_eq!(ctx.cpu.latches.icrf.common.fault, Fault::Iade);
    assert_eq!(ctx.cpu.pc, 0x8000, "a miss must not advance pc");
    assert_eq!(ctx.cpu.skip_stages, SkipStages::FromIc);

    ctx.step(2);

    assert_eq!(ctx.cpu.pc, 0x8000, "the stalled fetch never advances pc");
    assert_eq!(ctx.cpu.latches.icrf.common.fault, Fault::Iade);
}
