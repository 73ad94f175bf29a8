//! The register file: PC, AC, X, Y, SP, SR and the flag/stack helpers that
//! every instruction handler is built on top of.
//!
//! http://www.6502.org/
//! https://en.wikipedia.org/wiki/MOS_Technology_6502

use bitflags::bitflags;

bitflags! {
    /// "P" - Status register.
    ///
    ///   7  bit  0
    /// ---- ----
    /// NV-BDIZC
    /// |||| ||||
    /// |||| |||+- Carry
    /// |||| ||+-- Zero
    /// |||| |+--- Interrupt Disable
    /// |||| +---- Decimal
    /// |||+------ Break
    /// ||+------- Unused, always reads as 1
    /// |+-------- Overflow
    /// +--------- Negative
    pub struct StatusFlags: u8 {
        const CARRY             = 0b0000_0001;
        const ZERO              = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL           = 0b0000_1000;
        const BREAK             = 0b0001_0000;
        const UNUSED            = 0b0010_0000;
        const OVERFLOW          = 0b0100_0000;
        const NEGATIVE          = 0b1000_0000;
    }
}

/// The status register on reset: only the unused bit is set.
pub const RESET_STATUS: StatusFlags = StatusFlags::UNUSED;

/// The register file plus the flat 64 KiB address space it operates over is
/// split across two types; this one holds the six CPU registers.
///
/// "A" register - The accumulator. Typical results of operations are stored
/// here. In combination with the status register, supports carrying,
/// overflow detection, and so on.
///
/// "X" / "Y" registers are used for several addressing modes, as loop
/// counters with INC/DEC and branch instructions, and have more limited
/// addressing modes than the accumulator when loading and storing.
///
/// "PC" - Program counter. Always points at the next opcode to fetch.
///
/// "S" - Stack pointer. The 6502 has hardware support for a stack
/// implemented using a 256-byte array whose location is hardcoded at page
/// 0x01 (0x0100-0x01FF). It is a descending stack: it grows downward.
/// https://wiki.nesdev.com/w/index.php/Stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
    pub pc: u16,
    pub ac: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    sr: StatusFlags,
}

impl Registers {
    pub fn new() -> Registers {
        Registers {
            pc: 0x0000,
            ac: 0,
            x: 0,
            y: 0,
            sp: 0xFF,
            sr: RESET_STATUS,
        }
    }

    /// The unused bit always reads as 1, regardless of what was last written.
    pub fn sr(&self) -> u8 {
        (self.sr | StatusFlags::UNUSED).bits()
    }

    /// Setting the status register directly from a raw byte (PLP, reset).
    /// The unused bit is forced high, matching how it always reads.
    pub fn set_sr(&mut self, value: u8) {
        self.sr = StatusFlags::from_bits_truncate(value) | StatusFlags::UNUSED;
    }

    pub fn flag(&self, flag: StatusFlags) -> bool {
        self.sr.contains(flag)
    }

    pub fn set_flag(&mut self, flag: StatusFlags, value: bool) {
        self.sr.set(flag, value);
        self.sr.insert(StatusFlags::UNUSED);
    }

    pub fn carry(&self) -> bool {
        self.flag(StatusFlags::CARRY)
    }

    pub fn zero(&self) -> bool {
        self.flag(StatusFlags::ZERO)
    }

    pub fn interrupt_disable(&self) -> bool {
        self.flag(StatusFlags::INTERRUPT_DISABLE)
    }

    pub fn decimal(&self) -> bool {
        self.flag(StatusFlags::DECIMAL)
    }

    pub fn break_flag(&self) -> bool {
        self.flag(StatusFlags::BREAK)
    }

    pub fn overflow(&self) -> bool {
        self.flag(StatusFlags::OVERFLOW)
    }

    pub fn negative(&self) -> bool {
        self.flag(StatusFlags::NEGATIVE)
    }

    /// Carry as a 0/1 byte, for feeding straight back into an add.
    pub fn carry_bit(&self) -> u8 {
        self.flag(StatusFlags::CARRY) as u8
    }

    /// These two flags are always set together after a register write.
    pub fn update_zn(&mut self, value: u8) {
        self.set_flag(StatusFlags::ZERO, value == 0);
        self.set_flag(StatusFlags::NEGATIVE, value & 0x80 != 0);
    }

    /// ADC/SBC operate on 9 bits internally; the 9th bit becomes the carry.
    pub fn update_carry_on_add(&mut self, sum: u16) {
        self.set_flag(StatusFlags::CARRY, sum > 0xFF);
    }

    /// Overflow indicates a carry from bit 6 into bit 7 that flips the sign
    /// of the result relative to two same-signed operands.
    /// e.g. 0b0111_1111 + 0b0000_0001 = 0b1000_0000
    ///        positive  +   positive  =    negative
    pub fn update_overflow_on_add(&mut self, a: u8, operand: u8, result: u8) {
        let overflowed = (a ^ result) & (operand ^ result) & 0x80 != 0;
        self.set_flag(StatusFlags::OVERFLOW, overflowed);
    }

    pub fn write_ac(&mut self, value: u8) {
        self.ac = value;
        self.update_zn(value);
    }

    pub fn write_x(&mut self, value: u8) {
        self.x = value;
        self.update_zn(value);
    }

    pub fn write_y(&mut self, value: u8) {
        self.y = value;
        self.update_zn(value);
    }
}

impl Default for Registers {
    fn default() -> Registers {
        Registers::new()
    }
}

/// Interprets a byte as a signed 8-bit value in [-128, 127]. Used for
/// relative-addressing branch displacements.
pub fn sign_extend8(byte: u8) -> i16 {
    byte as i8 as i16
}
