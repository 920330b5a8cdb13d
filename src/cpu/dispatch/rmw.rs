/*!
rmw.rs - Shift / rotate / INC / DEC family handler

Opcodes:
  ASL: 0A (A), 06, 16, 0E, 1E
  LSR: 4A (A), 46, 56, 4E, 5E
  ROL: 2A (A), 26, 36, 2E, 3E
  ROR: 6A (A), 66, 76, 6E, 7E
  INC: E6, F6, EE, FE
  DEC: C6, D6, CE, DE

Accumulator forms operate on A; every other form reads the effective address,
applies the pure transform and writes the result back. Shifts and rotates
set C from the bit shifted out; INC/DEC leave C alone. All set Z/N.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::{ShiftFn, asl, dec, inc, lsr, rmw_accumulator, rmw_memory, rol, ror};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Instruction;
use crate::memory::MemoryMap;

pub(super) fn handle<C: CpuRegs>(
    instruction: Instruction,
    operand: Operand,
    cpu: &mut C,
    mem: &mut MemoryMap,
) -> bool {
    let op: ShiftFn = match instruction {
        Instruction::Asl => asl,
        Instruction::Lsr => lsr,
        Instruction::Rol => rol,
        Instruction::Ror => ror,
        Instruction::Inc => inc,
        Instruction::Dec => dec,
        _ => return false,
    };
    debug_assert!(
        matches!(operand, Operand::Accumulator | Operand::Address(_)),
        "{instruction:?} decoded with operand {operand:?}"
    );
    match operand {
        Operand::Accumulator => rmw_accumulator(cpu, op),
        Operand::Address(addr) => {
            rmw_memory(cpu, mem, addr, op);
        }
        _ => {}
    }
    true
}
