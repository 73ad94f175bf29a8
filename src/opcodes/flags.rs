//! The flag-clear/flag-set instructions, plus NOP.

use crate::cpu::Cpu;
use crate::opcodes::Operand;
use crate::registers::StatusFlags;

pub fn clc(cpu: &mut Cpu, _operand: &Operand) {
    cpu.registers.set_flag(StatusFlags::CARRY, false);
}

pub fn sec(cpu: &mut Cpu, _operand: &Operand) {
    cpu.registers.set_flag(StatusFlags::CARRY, true);
}

pub fn cli(cpu: &mut Cpu, _operand: &Operand) {
    cpu.registers.set_flag(StatusFlags::INTERRUPT_DISABLE, false);
}

pub fn sei(cpu: &mut Cpu, _operand: &Operand) {
    cpu.registers.set_flag(StatusFlags::INTERRUPT_DISABLE, true);
}

pub fn clv(cpu: &mut Cpu, _operand: &Operand) {
    cpu.registers.set_flag(StatusFlags::OVERFLOW, false);
}

pub fn cld(cpu: &mut Cpu, _operand: &Operand) {
    cpu.registers.set_flag(StatusFlags::DECIMAL, false);
}

pub fn sed(cpu: &mut Cpu, _operand: &Operand) {
    cpu.registers.set_flag(StatusFlags::DECIMAL, true);
}

pub fn nop(_cpu: &mut Cpu, _operand: &Operand) {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cpu::Cpu;

    #[test]
    fn clc_clears_carry() {
        let mut cpu = Cpu::new();
        cpu.registers.set_flag(StatusFlags::CARRY, true);
        clc(&mut cpu, &Operand::implied(0));
        assert!(!cpu.registers.carry());
    }

    #[test]
    fn sec_sets_carry() {
        let mut cpu = Cpu::new();
        sec(&mut cpu, &Operand::implied(0));
        assert!(cpu.registers.carry());
    }

    #[test]
    fn cli_clears_interrupt_disable() {
        let mut cpu = Cpu::new();
        cpu.registers.set_flag(StatusFlags::INTERRUPT_DISABLE, true);
        cli(&mut cpu, &Operand::implied(0));
        assert!(!cpu.registers.interrupt_disable());
    }

    #[test]
    fn sei_sets_interrupt_disable() {
        let mut cpu = Cpu::new();
        sei(&mut cpu, &Operand::implied(0));
        assert!(cpu.registers.interrupt_disable());
    }

    #[test]
    fn clv_clears_overflow() {
        let mut cpu = Cpu::new();
        cpu.registers.set_flag(StatusFlags::OVERFLOW, true);
        clv(&mut cpu, &Operand::implied(0));
        assert!(!cpu.registers.overflow());
    }

    #[test]
    fn cld_clears_decimal() {
        let mut cpu = Cpu::new();
        cpu.registers.set_flag(StatusFlags::DECIMAL, true);
        cld(&mut cpu, &Operand::implied(0));
        assert!(!cpu.registers.decimal());
    }

    #[test]
    fn sed_sets_decimal() {
        let mut cpu = Cpu::new();
        sed(&mut cpu, &Operand::implied(0));
        assert!(cpu.registers.decimal());
    }

    #[test]
    fn nop_leaves_every_register_untouched() {
        let mut cpu = Cpu::new();
        let before = cpu.registers.clone();
        nop(&mut cpu, &Operand::implied(0));
        assert_eq!(cpu.registers, before);
    }
}
