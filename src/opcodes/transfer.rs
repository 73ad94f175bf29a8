//! Register-to-register transfers. Every one updates zero/negative except
//! `TXS`, which only ever moves data into the stack pointer.

use crate::cpu::Cpu;
use crate::opcodes::Operand;

pub fn tax(cpu: &mut Cpu, _operand: &Operand) {
    let value = cpu.registers.ac;
    cpu.registers.write_x(value);
}

pub fn tay(cpu: &mut Cpu, _operand: &Operand) {
    let value = cpu.registers.ac;
    cpu.registers.write_y(value);
}

pub fn tsx(cpu: &mut Cpu, _operand: &Operand) {
    let value = cpu.registers.sp;
    cpu.registers.write_x(value);
}

pub fn txa(cpu: &mut Cpu, _operand: &Operand) {
    let value = cpu.registers.x;
    cpu.registers.write_ac(value);
}

pub fn txs(cpu: &mut Cpu, _operand: &Operand) {
    cpu.registers.sp = cpu.registers.x;
}

pub fn tya(cpu: &mut Cpu, _operand: &Operand) {
    let value = cpu.registers.y;
    cpu.registers.write_ac(value);
}
