/*!
compare.rs - CMP / CPX / CPY family handler

C <- reg >= M, Z <- reg == M, N <- bit 7 of (reg - M). Registers unchanged.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::compare;
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Instruction;
use crate::memory::MemoryMap;

use super::operand_value;

pub(super) fn handle<C: CpuRegs>(
    instruction: Instruction,
    operand: Operand,
    cpu: &mut C,
    mem: &mut MemoryMap,
) -> bool {
    let reg = match instruction {
        Instruction::Cmp => cpu.a(),
        Instruction::Cpx => cpu.x(),
        Instruction::Cpy => cpu.y(),
        _ => return false,
    };
    let v = operand_value(operand, cpu, mem);
    compare(cpu, reg, v);
    true
}
