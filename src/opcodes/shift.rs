//! ASL/LSR/ROL/ROR. All four work on either the accumulator or a memory
//! operand, so the read/write side is factored out of the four ALU ops.

use crate::cpu::Cpu;
use crate::opcodes::Operand;
use crate::registers::StatusFlags;

fn read_source(cpu: &Cpu, operand: &Operand) -> u8 {
    match operand.address {
        Some(address) => cpu.memory.read(address),
        None => cpu.registers.ac,
    }
}

fn write_result(cpu: &mut Cpu, operand: &Operand, value: u8) {
    match operand.address {
        Some(address) => cpu.memory.write(address, value),
        None => cpu.registers.ac = value,
    }
    cpu.registers.update_zn(value);
}

pub fn asl(cpu: &mut Cpu, operand: &Operand) {
    let value = read_source(cpu, operand);
    cpu.registers.set_flag(StatusFlags::CARRY, value & 0x80 != 0);
    write_result(cpu, operand, value << 1);
}

pub fn lsr(cpu: &mut Cpu, operand: &Operand) {
    let value = read_source(cpu, operand);
    cpu.registers.set_flag(StatusFlags::CARRY, value & 0x01 != 0);
    write_result(cpu, operand, value >> 1);
}

pub fn rol(cpu: &mut Cpu, operand: &Operand) {
    let value = read_source(cpu, operand);
    let carry_in = cpu.registers.carry_bit();
    cpu.registers.set_flag(StatusFlags::CARRY, value & 0x80 != 0);
    write_result(cpu, operand, (value << 1) | carry_in);
}

pub fn ror(cpu: &mut Cpu, operand: &Operand) {
    let value = read_source(cpu, operand);
    let carry_in = cpu.registers.carry_bit();
    cpu.registers.set_flag(StatusFlags::CARRY, value & 0x01 != 0);
    write_result(cpu, operand, (value >> 1) | (carry_in << 7));
}
