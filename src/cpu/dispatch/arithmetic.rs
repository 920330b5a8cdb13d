/*!
arithmetic.rs - ADC / SBC family handler

Binary arithmetic only; the D flag is stored but never consulted.
Whether V is derived is decided by the instance's `OverflowMode`.
*/

use crate::config::OverflowMode;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{adc, sbc};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Instruction;
use crate::memory::MemoryMap;

use super::operand_value;

pub(super) fn handle<C: CpuRegs>(
    instruction: Instruction,
    operand: Operand,
    cpu: &mut C,
    mem: &mut MemoryMap,
    overflow: OverflowMode,
) -> bool {
    match instruction {
        Instruction::Adc => {
            let v = operand_value(operand, cpu, mem);
            adc(cpu, v, overflow);
        }
        Instruction::Sbc => {
            let v = operand_value(operand, cpu, mem);
            sbc(cpu, v, overflow);
        }
        _ => return false,
    }
    true
}
