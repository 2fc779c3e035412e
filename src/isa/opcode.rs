//! Opcode descriptor and its control-signal flags.

/// Per-opcode flags `EX` consults before reading source operands.
///
/// Mirrors the teacher's plain-bool-struct `ControlSignals` rather than a
/// bitflags type: there are only two flags and they are read independently,
/// never combined as a mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpcodeFlags {
    /// Whether the instruction consumes `rs`.
    pub needs_rs: bool,
    /// Whether the instruction consumes `rt`.
    pub needs_rt: bool,
}

/// A decoded opcode descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Opcode {
    /// Index into the handler table.
    pub id: u16,
    /// Operand-need flags.
    pub flags: OpcodeFlags,
}

impl Opcode {
    /// The NOP-equivalent opcode IC finalizes a squashed delay slot into
    /// (spec.md §4.1): needs neither source register.
    pub const NOP: Opcode = Opcode {
        id: 0,
        flags: OpcodeFlags {
            needs_rs: false,
            needs_rt: false,
        },
    };
}
