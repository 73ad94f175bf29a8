//! The CPU core: register file, address space, fetch/decode/execute, and
//! the push/pull and operand-fetch primitives every handler is built on.

use crate::error::CpuError;
use crate::memory::{Memory, STACK_PAGE};
use crate::opcodes::{self, AddressingMode, Operand, BRK_OPCODE};
use crate::registers::{sign_extend8, Registers};
use crate::trace::{format_trace_line, StepTrace, TRACE_HEADER};

pub struct Cpu {
    pub registers: Registers,
    pub memory: Memory,
}

impl Cpu {
    pub fn new() -> Cpu {
        Cpu {
            registers: Registers::new(),
            memory: Memory::new(),
        }
    }

    pub fn push_u8(&mut self, value: u8) {
        let address = STACK_PAGE + self.registers.sp as u16;
        self.memory.write(address, value);
        self.registers.sp = self.registers.sp.wrapping_sub(1);
    }

    pub fn pop_u8(&mut self) -> u8 {
        self.registers.sp = self.registers.sp.wrapping_add(1);
        let address = STACK_PAGE + self.registers.sp as u16;
        self.memory.read(address)
    }

    /// Pushed high byte first, so the low byte ends up on top - the pair
    /// reads back in the right order through `pop_u16`.
    pub fn push_u16(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push_u8(high);
        self.push_u8(low);
    }

    pub fn pop_u16(&mut self) -> u16 {
        let low = self.pop_u8();
        let high = self.pop_u8();
        u16::from_le_bytes([low, high])
    }

    /// Assembles the operand for `mode`, advancing `pc` past whatever bytes
    /// it reads. `opcode_pc` is filled in by the caller once the whole
    /// operand has been fetched.
    fn fetch_operand(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implied => Operand::implied(0),
            AddressingMode::Accumulator => Operand {
                opcode_pc: 0,
                address: None,
                value: self.registers.ac,
                bytes: (None, None),
            },
            AddressingMode::Immediate => {
                let value = self.memory.read(self.registers.pc);
                self.registers.pc = self.registers.pc.wrapping_add(1);
                Operand {
                    opcode_pc: 0,
                    address: None,
                    value,
                    bytes: (Some(value), None),
                }
            }
            AddressingMode::ZeroPage => {
                let low = self.memory.read(self.registers.pc);
                self.registers.pc = self.registers.pc.wrapping_add(1);
                let address = low as u16;
                Operand {
                    opcode_pc: 0,
                    address: Some(address),
                    value: self.memory.read(address),
                    bytes: (Some(low), None),
                }
            }
            AddressingMode::Absolute => {
                let low = self.memory.read(self.registers.pc);
                let high = self.memory.read(self.registers.pc.wrapping_add(1));
                self.registers.pc = self.registers.pc.wrapping_add(2);
                let address = u16::from_le_bytes([low, high]);
                Operand {
                    opcode_pc: 0,
                    address: Some(address),
                    value: self.memory.read(address),
                    bytes: (Some(low), Some(high)),
                }
            }
            AddressingMode::Indirect => {
                let low = self.memory.read(self.registers.pc);
                let high = self.memory.read(self.registers.pc.wrapping_add(1));
                self.registers.pc = self.registers.pc.wrapping_add(2);
                let pointer = u16::from_le_bytes([low, high]);
                let address = self.memory.read_u16(pointer);
                Operand {
                    opcode_pc: 0,
                    address: Some(address),
                    value: 0,
                    bytes: (Some(low), Some(high)),
                }
            }
            AddressingMode::Relative => {
                let displacement_byte = self.memory.read(self.registers.pc);
                self.registers.pc = self.registers.pc.wrapping_add(1);
                let displacement = sign_extend8(displacement_byte);
                let target = (self.registers.pc as i32 + displacement as i32) as u16;
                Operand {
                    opcode_pc: 0,
                    address: Some(target),
                    value: 0,
                    bytes: (Some(displacement_byte), None),
                }
            }
        }
    }

    /// Fetches, decodes, and executes the instruction at `pc`, returning the
    /// trace fields the caller needs to render one line of output.
    pub fn step(&mut self) -> Result<StepTrace, CpuError> {
        let opcode_pc = self.registers.pc;
        let opcode = self.memory.read(opcode_pc);
        let def = opcodes::decode(opcode).ok_or(CpuError::InvalidOpcode { opcode, pc: opcode_pc })?;

        self.registers.pc = opcode_pc.wrapping_add(1);
        let mut operand = self.fetch_operand(def.mode);
        operand.opcode_pc = opcode_pc;

        log::trace!(
            "{:#06X}: {:#04X} {} ({:?})",
            opcode_pc,
            opcode,
            def.mnemonic,
            def.mode
        );

        (def.handler)(self, &operand);

        Ok(StepTrace {
            pc: opcode_pc,
            opcode,
            mnemonic: def.mnemonic,
            mode: def.mode,
            bytes: operand.bytes,
            ac: self.registers.ac,
            x: self.registers.x,
            y: self.registers.y,
            sp: self.registers.sp,
            sr: self.registers.sr(),
        })
    }

    /// Runs starting from `start_address` until a `BRK` is executed,
    /// returning the full trace (header plus one line per instruction).
    pub fn run(&mut self, start_address: u16) -> Result<String, CpuError> {
        self.registers.pc = start_address;
        let mut trace = String::from(TRACE_HEADER);
        loop {
            let step = self.step()?;
            let is_brk = step.opcode == BRK_OPCODE;
            trace.push_str(&format_trace_line(&step));
            if is_brk {
                log::warn!("BRK encountered at {:#06X}, halting", step.pc);
                break;
            }
        }
        Ok(trace)
    }
}

impl Default for Cpu {
    fn default() -> Cpu {
        Cpu::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stack_push_pop_u8_round_trips() {
        let mut cpu = Cpu::new();
        cpu.push_u8(0x42);
        assert_eq!(cpu.registers.sp, 0xFE);
        assert_eq!(cpu.pop_u8(), 0x42);
        assert_eq!(cpu.registers.sp, 0xFF);
    }

    #[test]
    fn stack_push_pop_u16_round_trips() {
        let mut cpu = Cpu::new();
        cpu.push_u16(0xBEEF);
        assert_eq!(cpu.registers.sp, 0xFD);
        assert_eq!(cpu.pop_u16(), 0xBEEF);
        assert_eq!(cpu.registers.sp, 0xFF);
    }

    #[test]
    fn stack_pointer_wraps_within_page_one() {
        let mut cpu = Cpu::new();
        cpu.registers.sp = 0x00;
        cpu.push_u8(0x7A);
        assert_eq!(cpu.registers.sp, 0xFF);
        assert_eq!(cpu.memory.read(0x0100), 0x7A);
    }

    #[test]
    fn step_decodes_lda_immediate_and_advances_pc() {
        let mut cpu = Cpu::new();
        cpu.memory.write_bytes(0x0300, &[0xA9, 0x42]);
        cpu.registers.pc = 0x0300;
        let step = cpu.step().unwrap();
        assert_eq!(step.mnemonic, "LDA");
        assert_eq!(cpu.registers.ac, 0x42);
        assert_eq!(cpu.registers.pc, 0x0302);
    }

    #[test]
    fn step_returns_invalid_opcode_error() {
        let mut cpu = Cpu::new();
        cpu.memory.write(0x0300, 0x02);
        cpu.registers.pc = 0x0300;
        let error = cpu.step().unwrap_err();
        assert_eq!(error, CpuError::InvalidOpcode { opcode: 0x02, pc: 0x0300 });
    }

    #[test]
    fn run_halts_on_brk() {
        let mut cpu = Cpu::new();
        cpu.memory.write_bytes(0x0300, &[0xA9, 0x01, 0x00]);
        let trace = cpu.run(0x0300).unwrap();
        assert!(trace.contains("LDA"));
        assert!(trace.contains("BRK"));
    }
}
