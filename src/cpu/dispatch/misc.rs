/*!
misc.rs - Transfers / Stack / Flags / Register inc-dec family handler

Transfers (Z/N from the moved value, except TXS):
  TAX (0xAA), TAY (0xA8), TXA (0x8A), TYA (0x98), TSX (0xBA), TXS (0x9A)

Stack:
  PHA (0x48), PLA (0x68), PHP (0x08), PLP (0x28)

Register increment / decrement:
  INX (0xE8), INY (0xC8), DEX (0xCA), DEY (0x88)

Flag operations:
  CLC (0x18), SEC (0x38), CLI (0x58), SEI (0x78),
  CLD (0xD8), SED (0xF8), CLV (0xB8)

NOP (0xEA) is handled here as well.
*/

use crate::cpu::execute::{dex, dey, inx, iny, pha, php, pla, plp, tax, tay, tsx, txa, txs, tya};
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, DECIMAL, IRQ_DISABLE, OVERFLOW};
use crate::cpu::table::Instruction;
use crate::memory::MemoryMap;

pub(super) fn handle<C: CpuRegs>(
    instruction: Instruction,
    cpu: &mut C,
    mem: &mut MemoryMap,
) -> bool {
    match instruction {
        // -------- Transfers --------
        Instruction::Tax => tax(cpu),
        Instruction::Tay => tay(cpu),
        Instruction::Txa => txa(cpu),
        Instruction::Tya => tya(cpu),
        Instruction::Tsx => tsx(cpu),
        Instruction::Txs => txs(cpu),

        // -------- Stack --------
        Instruction::Pha => pha(cpu, mem),
        Instruction::Pla => pla(cpu, mem),
        Instruction::Php => php(cpu, mem),
        Instruction::Plp => plp(cpu, mem),

        // -------- Inc / Dec --------
        Instruction::Inx => inx(cpu),
        Instruction::Iny => iny(cpu),
        Instruction::Dex => dex(cpu),
        Instruction::Dey => dey(cpu),

        // -------- Flags --------
        Instruction::Clc => cpu.assign_flag(CARRY, false),
        Instruction::Sec => cpu.assign_flag(CARRY, true),
        Instruction::Cli => cpu.assign_flag(IRQ_DISABLE, false),
        Instruction::Sei => cpu.assign_flag(IRQ_DISABLE, true),
        Instruction::Cld => cpu.assign_flag(DECIMAL, false),
        Instruction::Sed => cpu.assign_flag(DECIMAL, true),
        Instruction::Clv => cpu.assign_flag(OVERFLOW, false),

        Instruction::Nop => {}
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::{CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, ZERO};
    use crate::test_utils::setup;
    use pretty_assertions::assert_eq;

    #[test]
    fn pha_pla_round_trip_sets_flags() {
        // LDA #$80; PHA; LDA #$00; PLA
        let mut cpu = setup(&[0xA9, 0x80, 0x48, 0xA9, 0x00, 0x68]);
        let sp = cpu.sp();
        cpu.step().unwrap();
        cpu.step().unwrap();
        assert_eq!(cpu.sp(), sp.wrapping_sub(1));
        cpu.step().unwrap();
        assert!(cpu.is_flag_set(ZERO));
        cpu.step().unwrap();
        assert_eq!(cpu.a(), 0x80);
        assert!(cpu.is_flag_set(NEGATIVE));
        assert_eq!(cpu.sp(), sp);
    }

    #[test]
    fn php_plp_round_trip_keeps_pushed_bits() {
        // SEC; PHP; CLC; PLP
        let mut cpu = setup(&[0x38, 0x08, 0x18, 0x28]);
        cpu.set_status(0x00);
        for _ in 0..4 {
            cpu.step().unwrap();
        }
        assert!(cpu.is_flag_set(CARRY));
        assert_eq!(cpu.status(), 0x31);
    }

    #[test]
    fn flag_set_clear_pairs() {
        // SEC SED SEI CLC CLD CLI
        let mut cpu = setup(&[0x38, 0xF8, 0x78, 0x18, 0xD8, 0x58]);
        cpu.set_status(0x00);
        for _ in 0..3 {
            cpu.step().unwrap();
        }
        assert_eq!(cpu.status(), CARRY | DECIMAL | IRQ_DISABLE);
        for _ in 0..3 {
            cpu.step().unwrap();
        }
        assert_eq!(cpu.status(), 0x00);
    }

    #[test]
    fn clv_clears_overflow() {
        let mut cpu = setup(&[0xB8]);
        cpu.set_status(OVERFLOW);
        cpu.step().unwrap();
        assert!(!cpu.is_flag_set(OVERFLOW));
    }

    #[test]
    fn tsx_txs() {
        // LDX #$40; TXS; LDX #$00; TSX
        let mut cpu = setup(&[0xA2, 0x40, 0x9A, 0xA2, 0x00, 0xBA]);
        for _ in 0..4 {
            cpu.step().unwrap();
        }
        assert_eq!(cpu.sp(), 0x40);
        assert_eq!(cpu.x(), 0x40);
        assert!(!cpu.is_flag_set(ZERO));
    }

    #[test]
    fn register_inc_dec_wrap() {
        // LDX #$FF; INX; LDY #$00; DEY
        let mut cpu = setup(&[0xA2, 0xFF, 0xE8, 0xA0, 0x00, 0x88]);
        cpu.step().unwrap();
        cpu.step().unwrap();
        assert_eq!(cpu.x(), 0x00);
        assert!(cpu.is_flag_set(ZERO));
        cpu.step().unwrap();
        cpu.step().unwrap();
        assert_eq!(cpu.y(), 0xFF);
        assert!(cpu.is_flag_set(NEGATIVE));
    }

    #[test]
    fn nop_only_moves_pc() {
        let mut cpu = setup(&[0xEA]);
        let before = cpu.state();
        cpu.step().unwrap();
        let after = cpu.state();
        assert_eq!(after, CpuState { pc: before.pc.wrapping_add(1), ..before });
    }
}
