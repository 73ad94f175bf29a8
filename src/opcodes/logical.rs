//! AND/ORA/EOR/BIT.

use crate::cpu::Cpu;
use crate::opcodes::Operand;
use crate::registers::StatusFlags;

pub fn and(cpu: &mut Cpu, operand: &Operand) {
    let value = cpu.registers.ac & operand.value;
    cpu.registers.write_ac(value);
}

pub fn ora(cpu: &mut Cpu, operand: &Operand) {
    let value = cpu.registers.ac | operand.value;
    cpu.registers.write_ac(value);
}

pub fn eor(cpu: &mut Cpu, operand: &Operand) {
    let value = cpu.registers.ac ^ operand.value;
    cpu.registers.write_ac(value);
}

/// BIT sets zero from `AC & operand`, but negative and overflow are copied
/// straight from bits 7 and 6 of the operand itself, independent of the AND.
pub fn bit(cpu: &mut Cpu, operand: &Operand) {
    let result = cpu.registers.ac & operand.value;
    cpu.registers.set_flag(StatusFlags::ZERO, result == 0);
    cpu.registers.set_flag(StatusFlags::NEGATIVE, operand.value & 0x80 != 0);
    cpu.registers.set_flag(StatusFlags::OVERFLOW, operand.value & 0x40 != 0);
}
