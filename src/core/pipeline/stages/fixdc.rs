//! Load-result fix-up, `ex_fixdc` (spec.md §4.6).
//!
//! Runs once, at the start of the `FromExFixup` replay, before `EX` is
//! retried. The handler that originally issued the read decided whether
//! sign-extension applies purely by what it left in `exdc.result` — here
//! that value is read back as a "keep" mask, not a data value.

use crate::core::cpu::Cpu;

/// Computes the memory-to-register alignment for a completed read: `word`'s
/// low `size` bytes, both zero- and sign-extended, combined through `mask`
/// (the handler's "keep" mask, spec.md §4.6).
///
/// Pulled out as a pure function, independent of `Cpu`, so the round-trip
/// property below can exercise it directly over arbitrary inputs.
fn align_load(word: u64, mask: u64, size: u8) -> u64 {
    // `datashift` pushes the low `size` bytes of `word` to the top of a
    // 64-bit register, then the same shift back down extends them — logical
    // for zero-extension, arithmetic for sign-extension. `maskshift` (spec.md
    // §4.6) is `64 - datashift`; it names the complementary width and isn't
    // needed as a separate operation here.
    let datashift = (8 - u32::from(size)) * 8;

    let data = (word << datashift) >> datashift;
    let sdata = (((word << datashift) as i64) >> datashift) as u64;

    (sdata & mask) | data
}

/// Performs the memory-to-register alignment the handlers can't express
/// directly, then commits the corrected value — this replay step folds in
/// what would otherwise be `WB`'s job for this one latch, since the
/// `FromExFixup` replay path (spec.md §4.6 "fall through to continue EX, RF,
/// IC") has no separate `WB` entry.
pub fn ex_fixdc(cpu: &mut Cpu) {
    let request = cpu.latches.exdc.request;
    let mask = cpu.latches.exdc.result;

    let result = align_load(request.word, mask, request.size);

    cpu.latches.dcwb.result = result;
    cpu.regs.write(cpu.latches.dcwb.dest, result);
}
