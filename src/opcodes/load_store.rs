//! LDA/LDX/LDY/STA/STX/STY.

use crate::cpu::Cpu;
use crate::opcodes::Operand;

pub fn lda(cpu: &mut Cpu, operand: &Operand) {
    cpu.registers.write_ac(operand.value);
}

pub fn ldx(cpu: &mut Cpu, operand: &Operand) {
    cpu.registers.write_x(operand.value);
}

pub fn ldy(cpu: &mut Cpu, operand: &Operand) {
    cpu.registers.write_y(operand.value);
}

pub fn sta(cpu: &mut Cpu, operand: &Operand) {
    let address = operand.address.expect("STA always decodes to a memory operand");
    cpu.memory.write(address, cpu.registers.ac);
}

pub fn stx(cpu: &mut Cpu, operand: &Operand) {
    let address = operand.address.expect("STX always decodes to a memory operand");
    cpu.memory.write(address, cpu.registers.x);
}

pub fn sty(cpu: &mut Cpu, operand: &Operand) {
    let address = operand.address.expect("STY always decodes to a memory operand");
    cpu.memory.write(address, cpu.registers.y);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cpu::Cpu;

    fn operand_with_value(value: u8) -> Operand {
        Operand { opcode_pc: 0, address: None, value, bytes: (None, None) }
    }

    fn memory_operand(address: u16) -> Operand {
        Operand { opcode_pc: 0, address: Some(address), value: 0, bytes: (None, None) }
    }

    #[test]
    fn lda_loads_and_updates_flags() {
        let mut cpu = Cpu::new();
        lda(&mut cpu, &operand_with_value(0x00));
        assert_eq!(cpu.registers.ac, 0x00);
        assert!(cpu.registers.zero());
    }

    #[test]
    fn ldx_loads_the_x_register() {
        let mut cpu = Cpu::new();
        ldx(&mut cpu, &operand_with_value(0x80));
        assert_eq!(cpu.registers.x, 0x80);
        assert!(cpu.registers.negative());
    }

    #[test]
    fn ldy_loads_the_y_register() {
        let mut cpu = Cpu::new();
        ldy(&mut cpu, &operand_with_value(0x05));
        assert_eq!(cpu.registers.y, 0x05);
    }

    #[test]
    fn sta_writes_the_accumulator_to_memory() {
        let mut cpu = Cpu::new();
        cpu.registers.ac = 0x42;
        sta(&mut cpu, &memory_operand(0x0010));
        assert_eq!(cpu.memory.read(0x0010), 0x42);
    }

    #[test]
    fn stx_writes_the_x_register_to_memory() {
        let mut cpu = Cpu::new();
        cpu.registers.x = 0x11;
        stx(&mut cpu, &memory_operand(0x0011));
        assert_eq!(cpu.memory.read(0x0011), 0x11);
    }

    #[test]
    fn sty_writes_the_y_register_to_memory() {
        let mut cpu = Cpu::new();
        cpu.registers.y = 0x22;
        sty(&mut cpu, &memory_operand(0x0012));
        assert_eq!(cpu.memory.read(0x0012), 0x22);
    }
}
