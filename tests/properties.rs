//! Property tests for flag, stack and decoding invariants.

mod common;

use cart6502::cpu::table::{OPCODE_TABLE, decode};
use cart6502::cpu::{CARRY, CpuState, NEGATIVE, ZERO};
use cart6502::{Cpu, CpuError, FixedSource};
use common::boot;
use proptest::prelude::*;

proptest! {
    #[test]
    fn lda_immediate_sets_zero_and_negative(v in any::<u8>()) {
        let mut cpu = boot(&[0xA9, v]);
        cpu.step().unwrap();
        prop_assert_eq!(cpu.a(), v);
        prop_assert_eq!(cpu.is_flag_set(ZERO), v == 0);
        prop_assert_eq!(cpu.is_flag_set(NEGATIVE), v & 0x80 != 0);
    }

    #[test]
    fn adc_carry_matches_unmasked_sum(a in any::<u8>(), m in any::<u8>(), carry in any::<bool>()) {
        let set_carry = if carry { 0x38 } else { 0x18 };
        let mut cpu = boot(&[set_carry, 0xA9, a, 0x69, m]);
        for _ in 0..3 {
            cpu.step().unwrap();
        }
        let sum = a as u16 + m as u16 + carry as u16;
        prop_assert_eq!(cpu.a(), sum as u8);
        prop_assert_eq!(cpu.is_flag_set(CARRY), sum > 0xFF);
        prop_assert_eq!(cpu.is_flag_set(ZERO), sum as u8 == 0);
    }

    #[test]
    fn sbc_carry_means_no_borrow(a in any::<u8>(), m in any::<u8>(), carry in any::<bool>()) {
        let set_carry = if carry { 0x38 } else { 0x18 };
        let mut cpu = boot(&[set_carry, 0xA9, a, 0xE9, m]);
        for _ in 0..3 {
            cpu.step().unwrap();
        }
        let diff = a as i16 - m as i16 - (!carry) as i16;
        prop_assert_eq!(cpu.a(), diff as u8);
        prop_assert_eq!(cpu.is_flag_set(CARRY), diff >= 0);
    }

    #[test]
    fn cmp_flags(a in any::<u8>(), m in any::<u8>()) {
        let mut cpu = boot(&[0xA9, a, 0xC9, m]);
        cpu.step().unwrap();
        cpu.step().unwrap();
        prop_assert_eq!(cpu.is_flag_set(CARRY), a >= m);
        prop_assert_eq!(cpu.is_flag_set(ZERO), a == m);
        prop_assert_eq!(cpu.is_flag_set(NEGATIVE), a.wrapping_sub(m) & 0x80 != 0);
        prop_assert_eq!(cpu.a(), a);
    }

    #[test]
    fn pushes_then_pops_restore_stack_pointer(start_sp in any::<u8>(), n in 1usize..=64) {
        // n x PHA, then n x PLA, then BRK
        let mut program = vec![0x48; n];
        program.extend(std::iter::repeat_n(0x68, n));
        program.push(0x00);
        let mut cpu = boot(&program);
        cpu.set_sp(start_sp);
        for _ in 0..n {
            cpu.step().unwrap();
        }
        prop_assert_eq!(cpu.sp(), start_sp.wrapping_sub(n as u8));
        for _ in 0..n {
            cpu.step().unwrap();
        }
        prop_assert_eq!(cpu.sp(), start_sp);
    }

    #[test]
    fn branch_displacement_is_signed(offset in any::<u8>()) {
        // SEC; BCS offset
        let mut cpu = boot(&[0x38, 0xB0, offset]);
        cpu.step().unwrap();
        cpu.step().unwrap();
        let expected = 0x8003u16.wrapping_add(offset as i8 as i16 as u16);
        prop_assert_eq!(cpu.pc(), expected);
    }

    #[test]
    fn undefined_bytes_always_fault(byte in any::<u8>()) {
        prop_assume!(decode(byte).is_none());
        let mut cpu = boot(&[byte]);
        let before = cpu.state();
        prop_assert_eq!(cpu.step(), Err(CpuError::InvalidOpcode { opcode: byte, pc: 0x8000 }));
        prop_assert_eq!(cpu.pc(), before.pc);
        prop_assert_eq!(cpu.a(), before.a);
        prop_assert!(cpu.is_halted());
    }

    #[test]
    fn ram_reads_back_what_was_written(addr in 0u32..0x2000, value in any::<u8>()) {
        let mut cpu = Cpu::new(FixedSource(0));
        cpu.write(addr, value);
        prop_assert_eq!(cpu.read(addr), value);
        prop_assert_eq!(cpu.read(addr + 0x1_0000), value);
    }
}

#[test]
fn stack_round_trips_thirty_two_distinct_values() {
    // LDX #$10; TXS; 32 x (INX; TXA; PHA); 32 x PLA; BRK
    let mut program = vec![0xA2, 0x10, 0x9A];
    for _ in 0..32 {
        program.extend([0xE8, 0x8A, 0x48]);
    }
    program.extend(std::iter::repeat_n(0x68, 32));
    program.push(0x00);
    let mut cpu = boot(&program);
    cpu.step().unwrap();
    cpu.step().unwrap();
    let before = cpu.state();

    for _ in 0..32 * 3 {
        cpu.step().unwrap();
    }
    assert_eq!(cpu.sp(), 0xF0);
    for (i, value) in (0x11..=0x30u8).enumerate() {
        let sp = 0x10u8.wrapping_sub(i as u8);
        assert_eq!(cpu.read(0x0100 | sp as u32), value);
    }

    for expected in (0x11..=0x30u8).rev() {
        cpu.step().unwrap();
        assert_eq!(cpu.a(), expected);
    }

    let after = cpu.state();
    let expected = CpuState {
        a: 0x11,
        x: 0x30,
        pc: after.pc,
        ..before
    };
    pretty_assertions::assert_eq!(after, expected);
    assert_eq!(cpu.run(), Ok(1));
}

#[test]
fn table_has_exactly_the_documented_opcodes() {
    assert_eq!(OPCODE_TABLE.iter().filter(|e| e.is_some()).count(), 151);
}
