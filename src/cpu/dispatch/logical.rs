/*!
logical.rs - AND / ORA / EOR / BIT family handler

AND/ORA/EOR combine the operand into A and set Z/N from the result.
BIT leaves A alone: Z from A & M, N from bit 7 of M, V from bit 6 of M.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::{and, bit, eor, ora};
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
    let op: fn(&mut C, u8) = match instruction {
        Instruction::And => and,
        Instruction::Ora => ora,
        Instruction::Eor => eor,
        Instruction::Bit => bit,
        _ => return false,
    };
    let v = operand_value(operand, cpu, mem);
    op(cpu, v);
    true
}
