//! PHA/PHP/PLA/PLP, built on the page-1 push/pull primitives on [`Cpu`].

use crate::cpu::Cpu;
use crate::opcodes::Operand;
use crate::registers::StatusFlags;

pub fn pha(cpu: &mut Cpu, _operand: &Operand) {
    let value = cpu.registers.ac;
    cpu.push_u8(value);
}

pub fn php(cpu: &mut Cpu, _operand: &Operand) {
    // The byte PHP pushes always has the break bit set, unlike the live
    // status register, which only sets it while actually handling a BRK.
    let value = cpu.registers.sr() | StatusFlags::BREAK.bits();
    cpu.push_u8(value);
}

pub fn pla(cpu: &mut Cpu, _operand: &Operand) {
    let value = cpu.pop_u8();
    cpu.registers.write_ac(value);
}

pub fn plp(cpu: &mut Cpu, _operand: &Operand) {
    let value = cpu.pop_u8();
    cpu.registers.set_sr(value);
}
