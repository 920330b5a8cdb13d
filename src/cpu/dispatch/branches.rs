/*!
branches.rs - Conditional branch family handler

Opcodes: BPL 10, BMI 30, BVC 50, BVS 70, BCC 90, BCS B0, BNE D0, BEQ F0.

The displacement is relative to the address following the branch
instruction (PC has already moved past the operand when this runs).
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::branch;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, ZERO};
use crate::cpu::table::Instruction;

pub(super) fn handle<C: CpuRegs>(instruction: Instruction, operand: Operand, cpu: &mut C) -> bool {
    let take = match instruction {
        Instruction::Bpl => !cpu.is_flag_set(NEGATIVE),
        Instruction::Bmi => cpu.is_flag_set(NEGATIVE),
        Instruction::Bvc => !cpu.is_flag_set(OVERFLOW),
        Instruction::Bvs => cpu.is_flag_set(OVERFLOW),
        Instruction::Bcc => !cpu.is_flag_set(CARRY),
        Instruction::Bcs => cpu.is_flag_set(CARRY),
        Instruction::Bne => !cpu.is_flag_set(ZERO),
        Instruction::Beq => cpu.is_flag_set(ZERO),
        _ => return false,
    };
    debug_assert!(
        matches!(operand, Operand::Relative(_)),
        "{instruction:?} decoded with operand {operand:?}"
    );
    if let Operand::Relative(offset) = operand {
        branch(cpu, offset, take);
    }
    true
}
