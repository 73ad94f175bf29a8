//! JMP/JSR/RTS/BRK and the eight conditional branches.

use crate::cpu::Cpu;
use crate::opcodes::Operand;
use crate::registers::StatusFlags;

pub fn jmp(cpu: &mut Cpu, operand: &Operand) {
    cpu.registers.pc = operand.address.expect("JMP always resolves a target address");
}

pub fn jsr(cpu: &mut Cpu, operand: &Operand) {
    // JSR pushes the address of its own last operand byte, not the address
    // of the following instruction; RTS adds the 1 back on return.
    let return_address = operand.opcode_pc.wrapping_add(2);
    cpu.push_u16(return_address);
    cpu.registers.pc = operand.address.expect("JSR always resolves a target address");
}

pub fn rts(cpu: &mut Cpu, _operand: &Operand) {
    let return_address = cpu.pop_u16();
    cpu.registers.pc = return_address.wrapping_add(1);
}

/// BRK is conventionally a two-byte instruction - the byte following it is a
/// break mark that the handler never reads - so the return address pushed
/// skips over it, same offset as JSR.
pub fn brk(cpu: &mut Cpu, operand: &Operand) {
    let return_address = operand.opcode_pc.wrapping_add(2);
    cpu.push_u16(return_address);
    // The break bit is set on the live register too, not just the pushed
    // copy: the post-step trace line must show it, unlike an IRQ/NMI entry.
    cpu.registers.set_flag(StatusFlags::BREAK, true);
    let status = cpu.registers.sr();
    cpu.push_u8(status);
    cpu.registers.set_flag(StatusFlags::INTERRUPT_DISABLE, true);
}

fn branch(cpu: &mut Cpu, operand: &Operand, condition: bool) {
    if condition {
        cpu.registers.pc = operand.address.expect("branch always resolves a target address");
    }
}

pub fn bpl(cpu: &mut Cpu, operand: &Operand) {
    let condition = !cpu.registers.negative();
    branch(cpu, operand, condition);
}

pub fn bmi(cpu: &mut Cpu, operand: &Operand) {
    let condition = cpu.registers.negative();
    branch(cpu, operand, condition);
}

pub fn bvc(cpu: &mut Cpu, operand: &Operand) {
    let condition = !cpu.registers.overflow();
    branch(cpu, operand, condition);
}

pub fn bvs(cpu: &mut Cpu, operand: &Operand) {
    let condition = cpu.registers.overflow();
    branch(cpu, operand, condition);
}

pub fn bcc(cpu: &mut Cpu, operand: &Operand) {
    let condition = !cpu.registers.carry();
    branch(cpu, operand, condition);
}

pub fn bcs(cpu: &mut Cpu, operand: &Operand) {
    let condition = cpu.registers.carry();
    branch(cpu, operand, condition);
}

pub fn bne(cpu: &mut Cpu, operand: &Operand) {
    let condition = !cpu.registers.zero();
    branch(cpu, operand, condition);
}

pub fn beq(cpu: &mut Cpu, operand: &Operand) {
    let condition = cpu.registers.zero();
    branch(cpu, operand, condition);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cpu::Cpu;

    #[test]
    fn jmp_sets_pc_to_the_resolved_address() {
        let mut cpu = Cpu::new();
        let operand = Operand { opcode_pc: 0, address: Some(0x0400), value: 0, bytes: (None, None) };
        jmp(&mut cpu, &operand);
        assert_eq!(cpu.registers.pc, 0x0400);
    }

    #[test]
    fn jmp_indirect_follows_the_pointer_stored_in_memory() {
        let mut cpu = Cpu::new();
        cpu.memory.write_bytes(0x0300, &[0x6C, 0x20, 0x03]);
        cpu.memory.write_bytes(0x0320, &[0x00, 0x04]);
        cpu.registers.pc = 0x0300;
        cpu.step().unwrap();
        assert_eq!(cpu.registers.pc, 0x0400);
    }

    #[test]
    fn jsr_pushes_the_return_address_and_jumps() {
        let mut cpu = Cpu::new();
        cpu.memory.write_bytes(0x0300, &[0x20, 0x00, 0x04]);
        cpu.registers.pc = 0x0300;
        cpu.step().unwrap();
        assert_eq!(cpu.registers.pc, 0x0400);
        assert_eq!(cpu.pop_u16(), 0x0302);
    }

    #[test]
    fn rts_returns_to_the_instruction_after_the_call() {
        let mut cpu = Cpu::new();
        cpu.push_u16(0x0302);
        rts(&mut cpu, &Operand::implied(0));
        assert_eq!(cpu.registers.pc, 0x0303);
    }

    #[test]
    fn conditional_branch_not_taken_leaves_pc_at_the_fall_through_target() {
        let mut cpu = Cpu::new();
        cpu.registers.set_flag(StatusFlags::ZERO, true);
        cpu.memory.write_bytes(0x0300, &[0xD0, 0x05]); // BNE, not taken since Z is set
        cpu.registers.pc = 0x0300;
        cpu.step().unwrap();
        assert_eq!(cpu.registers.pc, 0x0302);
    }

    #[test]
    fn conditional_branch_taken_jumps_to_the_displaced_target() {
        let mut cpu = Cpu::new();
        cpu.registers.set_flag(StatusFlags::ZERO, true);
        cpu.memory.write_bytes(0x0300, &[0xF0, 0x05]); // BEQ, taken since Z is set
        cpu.registers.pc = 0x0300;
        cpu.step().unwrap();
        assert_eq!(cpu.registers.pc, 0x0307);
    }
}
