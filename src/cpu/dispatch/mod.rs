/*!
dispatch - Orchestrator for a single 6502 instruction step

Overview
========
1. Refuse to run when the ready flag is clear (`CpuError::Halted`).
2. Peek the opcode at PC and decode it through the opcode table. An
   undocumented byte faults with `InvalidOpcode`; PC and registers are
   left exactly as they were, only the ready flag is cleared.
3. Advance PC past the opcode and resolve the operand (which consumes the
   operand bytes).
4. Hand the decoded instruction to the family handler chain. Each handler
   returns `true` when it recognized and executed the instruction.

Architecture
============
Family handlers live in sibling modules and share one contract:

```text
    handle(instruction, operand, cpu, mem, ..) -> bool
```

They never fetch, never advance PC for the opcode, and never look at the
ready flag except BRK (halt mode), which clears it.
*/

pub(crate) mod arithmetic;
pub(crate) mod branches;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod load_store;
pub(crate) mod logical;
pub(crate) mod misc;
pub(crate) mod rmw;

use log::{trace, warn};

use crate::config::CpuConfig;
use crate::cpu::addressing::{Operand, resolve};
use crate::cpu::core::StepOutcome;
use crate::cpu::regs::CpuRegs;
use crate::cpu::table::decode;
use crate::error::{CpuError, Result};
use crate::memory::MemoryMap;

/// Execute one instruction.
pub(crate) fn step<C: CpuRegs>(
    cpu: &mut C,
    mem: &mut MemoryMap,
    config: &CpuConfig,
) -> Result<StepOutcome> {
    if !cpu.ready() {
        return Err(CpuError::Halted);
    }

    let pc = cpu.pc();
    let byte = mem.read(pc as u32);
    let Some(opcode) = decode(byte) else {
        warn!("invalid opcode ${byte:02X} at ${pc:04X}");
        cpu.set_ready(false);
        return Err(CpuError::InvalidOpcode { opcode: byte, pc });
    };

    trace!(
        "{pc:04X}  {byte:02X}  {:<4} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
        opcode.instruction.mnemonic(),
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.status(),
        cpu.sp(),
    );

    cpu.advance_pc_one();
    let operand = resolve(opcode.mode, cpu, mem);
    let instruction = opcode.instruction;

    let handled = load_store::handle(instruction, operand, cpu, mem)
        || logical::handle(instruction, operand, cpu, mem)
        || arithmetic::handle(instruction, operand, cpu, mem, config.overflow)
        || compare::handle(instruction, operand, cpu, mem)
        || rmw::handle(instruction, operand, cpu, mem)
        || branches::handle(instruction, operand, cpu)
        || control_flow::handle(instruction, operand, cpu, mem, config.brk)
        || misc::handle(instruction, cpu, mem);

    if !handled {
        // Every table entry has a handler; reaching here means the table and
        // the families disagree.
        cpu.set_pc(pc);
        cpu.set_ready(false);
        return Err(CpuError::InvalidOpcode { opcode: byte, pc });
    }

    Ok(if cpu.ready() {
        StepOutcome::Continue
    } else {
        StepOutcome::Halted
    })
}

/// Value an instruction reads: the immediate byte, the byte at the effective
/// address, or A for accumulator forms.
#[inline]
pub(crate) fn operand_value<C: CpuRegs>(operand: Operand, cpu: &C, mem: &mut MemoryMap) -> u8 {
    match operand {
        Operand::Immediate(v) => v,
        Operand::Address(addr) => mem.read(addr),
        Operand::Accumulator => cpu.a(),
        Operand::None | Operand::Relative(_) => 0,
    }
}
