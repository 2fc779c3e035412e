//! A load followed immediately by an instruction that needs the loaded
//! register: `EX` must raise `LDI` against the destination `DC` just wrote
//! into `DcWb` for the still-in-flight read, and the deferred value must
//! still land correctly once `ex_fixdc` replays — driven entirely through
//! `cycle`, not a direct `ex_stage` call (spec.md §8 scenario 2).

use crate::common::harness::TestContext;
use crate::common::mocks::{MockTestBus, MockTestDecoder, MockTestHandlerTable, MockTestSegmentMap};
use pretty_assertions::assert_eq;
use vr4300_core::bus::{BusOp, BusRequest};
use vr4300_core::core::pipeline::SkipStages;
use vr4300_core::isa::{Opcode, OpcodeFlags};
use vr4300_core::{Config, Cpu, Fault};

const LOAD_DATA_ADDR: u64 = 0x2000;
// Every fetched word shares this rs field: `ex_stage` reads `rs`/`rt` out of
// whatever word currently sits in `rfex.iw`, which can be one fetch ahead of
// the opcode it's paired with, so the filler words fetched after the real
// instructions need to carry the same register index as the ones that matter.
const RS_R5: u32 = 5 << 21;
const LOAD_IW: u32 = 0x1000_0000 | RS_R5;
const DEPENDENT_IW: u32 = 0x2000_0000 | RS_R5;

const LOAD: Opcode = Opcode {
    id: 1,
    flags: OpcodeFlags {
        needs_rs: false,
        needs_rt: false,
    },
};
const DEPENDENT: Opcode = Opcode {
    id: 2,
    flags: OpcodeFlags {
        needs_rs: true,
        needs_rt: false,
    },
};

#[test]
fn dependent_instruction_stalls_until_the_deferred_load_lands() {
    let mut decoder = MockTestDecoder::new();
    decoder.expect_decode().returning(|iw| match iw {
        LOAD_IW => LOAD,
        DEPENDENT_IW => DEPENDENT,
        _ => Opcode::NOP,
    });

    let mut bus = MockTestBus::new();
    bus.expect_read_word().returning(|address, _| match address {
        0 => u64::from(LOAD_IW),
        4 => u64::from(DEPENDENT_IW),
        // A negative 32-bit word, so the fix-up's sign-extension is
        // actually exercised rather than happening to pass through zero.
        LOAD_DATA_ADDR => 0xDEAD_BEEF,
        _ => u64::from(RS_R5),
    });

    let mut handlers = MockTestHandlerTable::new();
    handlers.expect_dispatch().returning(|opcode, cpu, _, _| {
        if opcode.id == LOAD.id {
            let word = cpu.bus.read_word(LOAD_DATA_ADDR, 4);
            cpu.latches.exdc.request = BusRequest {
                kind: BusOp::Read,
                address: LOAD_DATA_ADDR,
                word,
                size: 4,
                dqm: 0xF,
            };
            cpu.latches.exdc.dest = 5;
            cpu.latches.exdc.result = !0u64; // sign-extend on fix-up.
        }
    });

    let cpu = Cpu::new(
        Box::new(bus),
        Box::new(MockTestSegmentMap::new()),
        Box::new(decoder),
        Box::new(handlers),
        Config::default(),
    );

    let mut ctx = TestContext::new(cpu);

    // Ticks 1-2: IC fetches and finalizes the load. Tick 3: EX dispatches
    // the load, issuing the deferred read. Tick 4: DC drains it into
    // `DcWb` and defers via `DCB` — `EX`/`RF`/`IC` do not run this tick.
    ctx.step(4);

    assert_eq!(ctx.cpu.latches.dcwb.common.fault, Fault::Dcb);
    assert_eq!(ctx.cpu.latches.dcwb.dest, 5);
    assert_eq!(ctx.cpu.skip_stages, SkipStages::FromExFixup);
    assert_eq!(ctx.reg(5), 0, "the loaded value has not landed yet");

    // Tick 5: `ex_fixdc` applies the fix-up and commits `regs[5]` directly,
    // then `EX` retries — and finds the dependent instruction's `rs` still
    // matching `DcWb.dest`, which DC never got a chance to clear since WB/DC
    // didn't run this tick either. `LDI` fires again, off the very latch the
    // fix-up just committed through.
    ctx.step(1);

    assert_eq!(ctx.reg(5), 0xFFFF_FFFF_DEAD_BEEF, "sign-extended on landing");
    assert_eq!(ctx.cpu.latches.exdc.common.fault, Fault::Ldi);
    assert_eq!(ctx.cpu.skip_stages, SkipStages::FromRf);
}
