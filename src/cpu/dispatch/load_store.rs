/*!
load_store.rs - Load / Store family handler (part of the dispatch chain)

Overview
========
Loads set Z/N from the loaded value:
```text
    LDA: A9, A5, B5, AD, BD, B9, A1, B1
    LDX: A2, A6, B6, AE, BE
    LDY: A0, A4, B4, AC, BC
```

Stores change no flags:
```text
    STA: 85, 95, 8D, 9D, 99, 81, 91
    STX: 86, 96, 8E
    STY: 84, 94, 8C
```

STY zero page,X (0x94) indexes with X like every other zp,X form.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::{lda, ldx, ldy};
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::Instruction;
use crate::memory::MemoryMap;

use super::operand_value;

/// Execute a load/store instruction. Returns false for any other family.
pub(super) fn handle<C: CpuRegs>(
    instruction: Instruction,
    operand: Operand,
    cpu: &mut C,
    mem: &mut MemoryMap,
) -> bool {
    match instruction {
        Instruction::Lda => {
            let v = operand_value(operand, cpu, mem);
            lda(cpu, v);
        }
        Instruction::Ldx => {
            let v = operand_value(operand, cpu, mem);
            ldx(cpu, v);
        }
        Instruction::Ldy => {
            let v = operand_value(operand, cpu, mem);
            ldy(cpu, v);
        }
        Instruction::Sta => store(operand, cpu.a(), mem),
        Instruction::Stx => store(operand, cpu.x(), mem),
        Instruction::Sty => store(operand, cpu.y(), mem),
        _ => return false,
    }
    true
}

#[inline]
fn store(operand: Operand, value: u8, mem: &mut MemoryMap) {
    debug_assert!(
        matches!(operand, Operand::Address(_)),
        "store decoded with operand {operand:?}"
    );
    if let Operand::Address(addr) = operand {
        mem.write(addr, value);
    }
}
