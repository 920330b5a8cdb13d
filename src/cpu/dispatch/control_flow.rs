/*!
control_flow.rs - Control-flow / system family handler

Overview
========
```text
JMP abs        (0x4C)
JMP (ind)      (0x6C)  pointer bytes read at ptr and ptr+1, no page-wrap quirk
JSR abs        (0x20)
RTS            (0x60)
RTI            (0x40)
BRK            (0x00)
```

Behavior Details
================
- JSR pushes (PC - 1), high byte then low, where PC already points past the
  operand; RTS pulls it back and adds 1.
- RTI pulls P as-is, then PC. No +1.
- BRK depends on `BreakMode`:

```text
Halt       clear the ready flag; PC stays just past the opcode.
Interrupt  push PC + 1 (skipping the padding byte), push P with B and
           bit 5 set, set I, load PC from the IRQ vector at $FFFA.
```
*/

use log::debug;

use crate::config::BreakMode;
use crate::cpu::addressing::Operand;
use crate::cpu::execute::{php, plp, pop_word, push_word};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::IRQ_DISABLE;
use crate::cpu::table::Instruction;
use crate::memory::{IRQ_VECTOR, MemoryMap};

pub(super) fn handle<C: CpuRegs>(
    instruction: Instruction,
    operand: Operand,
    cpu: &mut C,
    mem: &mut MemoryMap,
    brk: BreakMode,
) -> bool {
    debug_assert!(
        !matches!(instruction, Instruction::Jmp | Instruction::Jsr)
            || matches!(operand, Operand::Address(_)),
        "{instruction:?} decoded with operand {operand:?}"
    );
    match instruction {
        Instruction::Jmp => {
            if let Operand::Address(target) = operand {
                cpu.set_pc(target as u16);
            }
        }
        Instruction::Jsr => {
            if let Operand::Address(target) = operand {
                let ret = cpu.pc().wrapping_sub(1);
                push_word(cpu, mem, ret);
                cpu.set_pc(target as u16);
            }
        }
        Instruction::Rts => {
            let ret = pop_word(cpu, mem);
            cpu.set_pc(ret.wrapping_add(1));
        }
        Instruction::Rti => {
            plp(cpu, mem);
            let pc = pop_word(cpu, mem);
            cpu.set_pc(pc);
        }
        Instruction::Brk => brk_op(cpu, mem, brk),
        _ => return false,
    }
    true
}

fn brk_op<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap, mode: BreakMode) {
    match mode {
        BreakMode::Halt => {
            debug!("BRK at ${:04X}: halting", cpu.pc().wrapping_sub(1));
            cpu.set_ready(false);
        }
        BreakMode::Interrupt => {
            let ret = cpu.pc().wrapping_add(1);
            push_word(cpu, mem, ret);
            php(cpu, mem);
            cpu.assign_flag(IRQ_DISABLE, true);
            let vector = mem.read_word(IRQ_VECTOR as u32);
            cpu.set_pc(vector);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{BreakMode, CpuConfig};
    use crate::cpu::addressing::Operand;
    use crate::cpu::core::StepOutcome;
    use crate::cpu::state::{BREAK, CARRY, CpuState, IRQ_DISABLE, UNUSED};
    use crate::cpu::table::Instruction;
    use crate::memory::MemoryMap;
    use crate::random::FixedSource;
    use crate::test_utils::{setup, setup_with_config};

    #[test]
    fn jmp_absolute() {
        let mut cpu = setup(&[0x4C, 0x34, 0x92]);
        cpu.step().unwrap();
        assert_eq!(cpu.pc(), 0x9234);
    }

    #[test]
    fn jmp_indirect_reads_across_page_boundary() {
        // JMP ($02FF): low byte at $02FF, high byte at $0300
        let mut cpu = setup(&[0x6C, 0xFF, 0x02]);
        cpu.write(0x02FF, 0x78);
        cpu.write(0x0300, 0x56);
        cpu.write(0x0200, 0x12);
        cpu.step().unwrap();
        assert_eq!(cpu.pc(), 0x5678);
    }

    #[test]
    fn jsr_pushes_return_minus_one_and_rts_returns() {
        // $8000 JSR $8004; $8003 BRK; $8004 RTS
        let mut cpu = setup(&[0x20, 0x04, 0x80, 0x00, 0x60]);
        let sp = cpu.sp();
        cpu.step().unwrap();
        assert_eq!(cpu.pc(), 0x8004);
        assert_eq!(cpu.sp(), sp.wrapping_sub(2));
        assert_eq!(cpu.read(0x0100 | sp as u32), 0x80);
        assert_eq!(cpu.read(0x0100 | sp.wrapping_sub(1) as u32), 0x02);
        cpu.step().unwrap();
        assert_eq!(cpu.pc(), 0x8003);
        assert_eq!(cpu.sp(), sp);
    }

    #[test]
    fn rti_restores_status_and_pc_without_increment() {
        // PHA-free setup: push $12 $34 and P=$01 by hand, then RTI.
        let mut cpu = setup(&[0x40]);
        cpu.set_sp(0xFC);
        cpu.write(0x01FD, 0x01);
        cpu.write(0x01FE, 0x34);
        cpu.write(0x01FF, 0x12);
        cpu.step().unwrap();
        assert_eq!(cpu.pc(), 0x1234);
        assert_eq!(cpu.status(), 0x01);
        assert!(cpu.is_flag_set(CARRY));
        assert_eq!(cpu.sp(), 0xFF);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "decoded with operand")]
    fn jsr_rejects_non_address_operand() {
        let mut cpu = CpuState::new();
        let mut mem = MemoryMap::new(FixedSource(0));
        super::handle(Instruction::Jsr, Operand::None, &mut cpu, &mut mem, BreakMode::Halt);
    }

    #[test]
    fn brk_halts_by_default() {
        let mut cpu = setup(&[0x00]);
        assert_eq!(cpu.step().unwrap(), StepOutcome::Halted);
        assert!(!cpu.is_ready());
        assert_eq!(cpu.pc(), 0x8001);
    }

    #[test]
    fn brk_interrupt_mode_vectors_through_irq() {
        let cfg = CpuConfig::new().with_break(BreakMode::Interrupt);
        let mut cpu = setup_with_config(&[0x00, 0xEA], cfg);
        cpu.memory_mut().rom_mut()[0x7FFA] = 0x00;
        cpu.memory_mut().rom_mut()[0x7FFB] = 0xA0;
        cpu.set_status(0x00);
        cpu.set_sp(0xFF);
        assert_eq!(cpu.step().unwrap(), StepOutcome::Continue);
        assert!(cpu.is_ready());
        assert_eq!(cpu.pc(), 0xA000);
        assert!(cpu.is_flag_set(IRQ_DISABLE));
        assert_eq!(cpu.read(0x01FF), 0x80);
        assert_eq!(cpu.read(0x01FE), 0x02);
        assert_eq!(cpu.read(0x01FD), BREAK | UNUSED);
        assert_eq!(cpu.sp(), 0xFC);
    }
}
