//! ADC/SBC/CMP/CPX/CPY.

use crate::cpu::Cpu;
use crate::opcodes::Operand;
use crate::registers::StatusFlags;

/// ADC and SBC are the same 9-bit addition: SBC feeds in the bitwise
/// complement of its operand, turning "subtract with borrow" into "add with
/// carry" on the ones'-complement of the right-hand side.
fn add_impl(cpu: &mut Cpu, operand_value: u8) {
    let a = cpu.registers.ac;
    let carry_in = cpu.registers.carry_bit() as u16;
    let sum = a as u16 + operand_value as u16 + carry_in;
    let result = sum as u8;

    cpu.registers.update_carry_on_add(sum);
    cpu.registers.update_overflow_on_add(a, operand_value, result);
    cpu.registers.write_ac(result);
}

pub fn adc(cpu: &mut Cpu, operand: &Operand) {
    add_impl(cpu, operand.value);
}

pub fn sbc(cpu: &mut Cpu, operand: &Operand) {
    add_impl(cpu, !operand.value);
}

/// CMP/CPX/CPY all do `register - operand` and throw the result away except
/// for the flags: carry means no borrow was needed, i.e. register >= operand.
fn compare(cpu: &mut Cpu, register_value: u8, operand_value: u8) {
    let result = register_value.wrapping_sub(operand_value);
    cpu.registers.set_flag(StatusFlags::CARRY, register_value >= operand_value);
    cpu.registers.update_zn(result);
}

pub fn cmp(cpu: &mut Cpu, operand: &Operand) {
    let value = cpu.registers.ac;
    compare(cpu, value, operand.value);
}

pub fn cpx(cpu: &mut Cpu, operand: &Operand) {
    let value = cpu.registers.x;
    compare(cpu, value, operand.value);
}

pub fn cpy(cpu: &mut Cpu, operand: &Operand) {
    let value = cpu.registers.y;
    compare(cpu, value, operand.value);
}
