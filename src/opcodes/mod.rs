//! The opcode decoder: a mapping from opcode byte to a handler function,
//! plus the addressing-mode machinery every handler is built on.
//!
//! Each handler performs operand fetch (via [`Operand`], assembled once in
//! [`crate::cpu::Cpu::fetch_operand`]), the ALU/transfer operation, flag
//! updates, and leaves `pc` pointing at the next opcode to fetch - taken
//! unconditionally for non-branch instructions, or past the displacement
//! byte for branches not taken.

use crate::cpu::Cpu;

pub mod arithmetic;
pub mod control;
pub mod flags;
pub mod incdec;
pub mod load_store;
pub mod logical;
pub mod shift;
pub mod stack;
pub mod transfer;

/// The source for the comments on the modes is coming from:
/// http://www.emulator101.com/6502-addressing-modes.html
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// The data and/or destination is mandatory for the instruction, e.g.
    /// CLC is implied: it always clears the carry flag.
    Implied,
    /// The operand is the accumulator itself, e.g. `ASL A`.
    Accumulator,
    /// The data is the byte immediately following the opcode.
    Immediate,
    /// Addresses only the first 256 bytes of memory; one byte shorter and
    /// one cycle faster than absolute.
    ZeroPage,
    /// The full 16-bit address follows the opcode, low byte first.
    Absolute,
    /// Used only by `JMP`: the 16-bit address following the opcode is a
    /// pointer to the real target address.
    Indirect,
    /// Used only by branches: a signed displacement relative to the byte
    /// immediately after the displacement itself.
    Relative,
}

impl AddressingMode {
    /// The exact tag string the tracer prints for this mode.
    pub fn tag(self) -> &'static str {
        match self {
            AddressingMode::Implied => "impl",
            AddressingMode::Accumulator => "   A",
            AddressingMode::Immediate => "   #",
            AddressingMode::ZeroPage => " zpg",
            AddressingMode::Absolute => " abs",
            AddressingMode::Indirect => " ind",
            AddressingMode::Relative => " rel",
        }
    }
}

/// Everything a handler needs to perform its operation, assembled by
/// [`crate::cpu::Cpu::fetch_operand`] before the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct Operand {
    /// The address of the opcode byte itself - the one piece of context
    /// `BRK` and `JSR` need to compute their pushed return address, since by
    /// the time the handler runs `pc` already points past the operand.
    pub opcode_pc: u16,
    /// The effective address the operand lives at, if any: `None` for
    /// implied/accumulator/immediate operands.
    pub address: Option<u16>,
    /// The operand's value: the accumulator for `Accumulator` mode, the
    /// literal byte for `Immediate`, or `mem[address]` for `ZeroPage` and
    /// `Absolute`. Unused (and left as `0`) for modes that don't carry one.
    pub value: u8,
    /// The raw bytes read from memory for this operand, in the order they
    /// were fetched, for the tracer to print as `LL HH` or `--`.
    pub bytes: (Option<u8>, Option<u8>),
}

impl Operand {
    pub fn implied(opcode_pc: u16) -> Operand {
        Operand {
            opcode_pc,
            address: None,
            value: 0,
            bytes: (None, None),
        }
    }
}

pub type HandlerFn = fn(&mut Cpu, &Operand);

/// One decoded opcode: the mnemonic and addressing-mode tag the tracer
/// prints, and the handler that performs the operation.
#[derive(Clone, Copy)]
pub struct OpcodeDef {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    pub handler: HandlerFn,
}

const fn def(mnemonic: &'static str, mode: AddressingMode, handler: HandlerFn) -> OpcodeDef {
    OpcodeDef {
        mnemonic,
        mode,
        handler,
    }
}

/// Decodes an opcode byte into its mnemonic, addressing mode, and handler.
/// Returns `None` for any byte not in the documented instruction set -
/// illegal/undocumented opcodes are an explicit non-goal.
pub fn decode(opcode: u8) -> Option<OpcodeDef> {
    use AddressingMode::{Absolute, Accumulator, Immediate, Implied, Indirect, Relative, ZeroPage};

    Some(match opcode {
        // Loads / stores
        0xA9 => def("LDA", Immediate, load_store::lda),
        0xA5 => def("LDA", ZeroPage, load_store::lda),
        0xAD => def("LDA", Absolute, load_store::lda),
        0xA2 => def("LDX", Immediate, load_store::ldx),
        0xA6 => def("LDX", ZeroPage, load_store::ldx),
        0xAE => def("LDX", Absolute, load_store::ldx),
        0xA0 => def("LDY", Immediate, load_store::ldy),
        0xA4 => def("LDY", ZeroPage, load_store::ldy),
        0xAC => def("LDY", Absolute, load_store::ldy),
        0x85 => def("STA", ZeroPage, load_store::sta),
        0x8D => def("STA", Absolute, load_store::sta),
        0x86 => def("STX", ZeroPage, load_store::stx),
        0x8E => def("STX", Absolute, load_store::stx),
        0x84 => def("STY", ZeroPage, load_store::sty),
        0x8C => def("STY", Absolute, load_store::sty),

        // Transfers
        0xAA => def("TAX", Implied, transfer::tax),
        0xA8 => def("TAY", Implied, transfer::tay),
        0xBA => def("TSX", Implied, transfer::tsx),
        0x8A => def("TXA", Implied, transfer::txa),
        0x9A => def("TXS", Implied, transfer::txs),
        0x98 => def("TYA", Implied, transfer::tya),

        // Stack
        0x48 => def("PHA", Implied, stack::pha),
        0x08 => def("PHP", Implied, stack::php),
        0x68 => def("PLA", Implied, stack::pla),
        0x28 => def("PLP", Implied, stack::plp),

        // Logical
        0x29 => def("AND", Immediate, logical::and),
        0x25 => def("AND", ZeroPage, logical::and),
        0x2D => def("AND", Absolute, logical::and),
        0x09 => def("ORA", Immediate, logical::ora),
        0x05 => def("ORA", ZeroPage, logical::ora),
        0x0D => def("ORA", Absolute, logical::ora),
        0x49 => def("EOR", Immediate, logical::eor),
        0x45 => def("EOR", ZeroPage, logical::eor),
        0x4D => def("EOR", Absolute, logical::eor),
        0x24 => def("BIT", ZeroPage, logical::bit),
        0x2C => def("BIT", Absolute, logical::bit),

        // Arithmetic
        0x69 => def("ADC", Immediate, arithmetic::adc),
        0x65 => def("ADC", ZeroPage, arithmetic::adc),
        0x6D => def("ADC", Absolute, arithmetic::adc),
        0xE9 => def("SBC", Immediate, arithmetic::sbc),
        0xE5 => def("SBC", ZeroPage, arithmetic::sbc),
        0xED => def("SBC", Absolute, arithmetic::sbc),
        0xC9 => def("CMP", Immediate, arithmetic::cmp),
        0xC5 => def("CMP", ZeroPage, arithmetic::cmp),
        0xCD => def("CMP", Absolute, arithmetic::cmp),
        0xE0 => def("CPX", Immediate, arithmetic::cpx),
        0xE4 => def("CPX", ZeroPage, arithmetic::cpx),
        0xEC => def("CPX", Absolute, arithmetic::cpx),
        0xC0 => def("CPY", Immediate, arithmetic::cpy),
        0xC4 => def("CPY", ZeroPage, arithmetic::cpy),
        0xCC => def("CPY", Absolute, arithmetic::cpy),

        // Increment / decrement
        0xE6 => def("INC", ZeroPage, incdec::inc),
        0xEE => def("INC", Absolute, incdec::inc),
        0xC6 => def("DEC", ZeroPage, incdec::dec),
        0xCE => def("DEC", Absolute, incdec::dec),
        0xE8 => def("INX", Implied, incdec::inx),
        0xC8 => def("INY", Implied, incdec::iny),
        0xCA => def("DEX", Implied, incdec::dex),
        0x88 => def("DEY", Implied, incdec::dey),

        // Shifts / rotates
        0x0A => def("ASL", Accumulator, shift::asl),
        0x06 => def("ASL", ZeroPage, shift::asl),
        0x0E => def("ASL", Absolute, shift::asl),
        0x4A => def("LSR", Accumulator, shift::lsr),
        0x46 => def("LSR", ZeroPage, shift::lsr),
        0x4E => def("LSR", Absolute, shift::lsr),
        0x2A => def("ROL", Accumulator, shift::rol),
        0x26 => def("ROL", ZeroPage, shift::rol),
        0x2E => def("ROL", Absolute, shift::rol),
        0x6A => def("ROR", Accumulator, shift::ror),
        0x66 => def("ROR", ZeroPage, shift::ror),
        0x6E => def("ROR", Absolute, shift::ror),

        // Control flow
        0x4C => def("JMP", Absolute, control::jmp),
        0x6C => def("JMP", Indirect, control::jmp),
        0x20 => def("JSR", Absolute, control::jsr),
        0x60 => def("RTS", Implied, control::rts),
        0x00 => def("BRK", Implied, control::brk),
        0x10 => def("BPL", Relative, control::bpl),
        0x30 => def("BMI", Relative, control::bmi),
        0x50 => def("BVC", Relative, control::bvc),
        0x70 => def("BVS", Relative, control::bvs),
        0x90 => def("BCC", Relative, control::bcc),
        0xB0 => def("BCS", Relative, control::bcs),
        0xD0 => def("BNE", Relative, control::bne),
        0xF0 => def("BEQ", Relative, control::beq),

        // Flag ops
        0x18 => def("CLC", Implied, flags::clc),
        0x38 => def("SEC", Implied, flags::sec),
        0x58 => def("CLI", Implied, flags::cli),
        0x78 => def("SEI", Implied, flags::sei),
        0xB8 => def("CLV", Implied, flags::clv),
        0xD8 => def("CLD", Implied, flags::cld),
        0xF8 => def("SED", Implied, flags::sed),

        // Other
        0xEA => def("NOP", Implied, flags::nop),

        _ => return None,
    })
}

/// Opcode byte that terminates a `run`.
pub const BRK_OPCODE: u8 = 0x00;
