/*!
execute.rs - 6502 instruction semantic helpers (ALU, flags, stack, RMW).

Purpose
=======
Side-effect logic shared by every dispatch family. Helpers are generic over
`CpuRegs`; the ones that touch memory take `&mut MemoryMap` explicitly.

Shift / rotate primitives (`asl`, `lsr`, `rol`, `ror`) are pure: they take
the incoming carry as a parameter and return `(result, carry_out)`, so they
never reach into shared flag state and can be tested in isolation.
`inc` / `dec` share the same `ShiftFn` shape (carry passed through) so the
read-modify-write path treats all six uniformly.
*/

use crate::config::OverflowMode;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::{CARRY, NEGATIVE, OVERFLOW, STACK_PAGE, ZERO};
use crate::memory::MemoryMap;

/// Pure byte transform: `(value, carry_in) -> (result, carry_out)`.
pub type ShiftFn = fn(u8, bool) -> (u8, bool);

// ---------------------------------------------------------------------------
// Pure shift / rotate primitives
// ---------------------------------------------------------------------------

#[inline]
pub fn asl(value: u8, _carry_in: bool) -> (u8, bool) {
    (value << 1, value & 0x80 != 0)
}

#[inline]
pub fn lsr(value: u8, _carry_in: bool) -> (u8, bool) {
    (value >> 1, value & 0x01 != 0)
}

#[inline]
pub fn rol(value: u8, carry_in: bool) -> (u8, bool) {
    ((value << 1) | carry_in as u8, value & 0x80 != 0)
}

#[inline]
pub fn ror(value: u8, carry_in: bool) -> (u8, bool) {
    ((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0)
}

#[inline]
pub fn inc(value: u8, carry_in: bool) -> (u8, bool) {
    (value.wrapping_add(1), carry_in)
}

#[inline]
pub fn dec(value: u8, carry_in: bool) -> (u8, bool) {
    (value.wrapping_sub(1), carry_in)
}

// ---------------------------------------------------------------------------
// Stack helpers
// ---------------------------------------------------------------------------
//
// Stack lives on page 1, SP post-decrement on push, pre-increment on pull:
//   Push: write at 0x0100 | SP, then SP = SP - 1
//   Pull: SP = SP + 1, then read at 0x0100 | SP

#[inline]
pub(crate) fn push<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap, v: u8) {
    let sp = cpu.sp();
    mem.write((STACK_PAGE | sp as u16) as u32, v);
    cpu.set_sp(sp.wrapping_sub(1));
}

#[inline]
pub(crate) fn pop<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap) -> u8 {
    let sp = cpu.sp().wrapping_add(1);
    cpu.set_sp(sp);
    mem.read((STACK_PAGE | sp as u16) as u32)
}

/// Push high byte, then low byte.
#[inline]
pub(crate) fn push_word<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap, v: u16) {
    push(cpu, mem, (v >> 8) as u8);
    push(cpu, mem, (v & 0xFF) as u8);
}

/// Pull low byte, then high byte.
#[inline]
pub(crate) fn pop_word<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap) -> u16 {
    let lo = pop(cpu, mem) as u16;
    let hi = pop(cpu, mem) as u16;
    (hi << 8) | lo
}

#[inline]
pub(crate) fn php<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap) {
    let p = cpu.compose_status_for_push();
    push(cpu, mem, p);
}

/// P is replaced by the pulled byte as-is.
#[inline]
pub(crate) fn plp<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap) {
    let v = pop(cpu, mem);
    cpu.set_status(v);
}

#[inline]
pub(crate) fn pha<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap) {
    let a = cpu.a();
    push(cpu, mem, a);
}

#[inline]
pub(crate) fn pla<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap) {
    let val = pop(cpu, mem);
    cpu.set_a(val);
    cpu.update_negative_and_zero(val);
}

// ---------------------------------------------------------------------------
// Loads / Transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_a(v);
    cpu.update_negative_and_zero(v);
}

#[inline]
pub(crate) fn ldx<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_x(v);
    cpu.update_negative_and_zero(v);
}

#[inline]
pub(crate) fn ldy<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.set_y(v);
    cpu.update_negative_and_zero(v);
}

#[inline]
pub(crate) fn tax<C: CpuRegs>(cpu: &mut C) {
    ldx(cpu, cpu.a());
}

#[inline]
pub(crate) fn tay<C: CpuRegs>(cpu: &mut C) {
    ldy(cpu, cpu.a());
}

#[inline]
pub(crate) fn txa<C: CpuRegs>(cpu: &mut C) {
    lda(cpu, cpu.x());
}

#[inline]
pub(crate) fn tya<C: CpuRegs>(cpu: &mut C) {
    lda(cpu, cpu.y());
}

#[inline]
pub(crate) fn tsx<C: CpuRegs>(cpu: &mut C) {
    ldx(cpu, cpu.sp());
}

/// TXS does not touch flags.
#[inline]
pub(crate) fn txs<C: CpuRegs>(cpu: &mut C) {
    cpu.set_sp(cpu.x());
}

// ---------------------------------------------------------------------------
// Logical / Bit
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and<C: CpuRegs>(cpu: &mut C, v: u8) {
    lda(cpu, cpu.a() & v);
}

#[inline]
pub(crate) fn ora<C: CpuRegs>(cpu: &mut C, v: u8) {
    lda(cpu, cpu.a() | v);
}

#[inline]
pub(crate) fn eor<C: CpuRegs>(cpu: &mut C, v: u8) {
    lda(cpu, cpu.a() ^ v);
}

#[inline]
pub(crate) fn bit<C: CpuRegs>(cpu: &mut C, v: u8) {
    cpu.assign_flag(ZERO, (cpu.a() & v) == 0);
    cpu.assign_flag(NEGATIVE, (v & 0x80) != 0);
    cpu.assign_flag(OVERFLOW, (v & 0x40) != 0);
}

// ---------------------------------------------------------------------------
// Increment / Decrement (register)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx<C: CpuRegs>(cpu: &mut C) {
    ldx(cpu, cpu.x().wrapping_add(1));
}

#[inline]
pub(crate) fn iny<C: CpuRegs>(cpu: &mut C) {
    ldy(cpu, cpu.y().wrapping_add(1));
}

#[inline]
pub(crate) fn dex<C: CpuRegs>(cpu: &mut C) {
    ldx(cpu, cpu.x().wrapping_sub(1));
}

#[inline]
pub(crate) fn dey<C: CpuRegs>(cpu: &mut C) {
    ldy(cpu, cpu.y().wrapping_sub(1));
}

// ---------------------------------------------------------------------------
// ADC / SBC
// ---------------------------------------------------------------------------

/// A <- A + v + C. Carry from the unmasked sum, N/Z from the final A.
pub(crate) fn adc<C: CpuRegs>(cpu: &mut C, v: u8, overflow: OverflowMode) {
    let a = cpu.a();
    let carry_in = cpu.is_flag_set(CARRY) as u16;
    let sum = a as u16 + v as u16 + carry_in;
    let result = sum as u8;

    cpu.update_carry(sum > 0xFF);
    if overflow == OverflowMode::Derive {
        // Operands share a sign that the result does not.
        cpu.update_overflow((!(a ^ v) & (a ^ result) & 0x80) != 0);
    }
    lda(cpu, result);
}

/// A <- A - v - (1 - C). Carry set when no borrow occurred (difference >= 0).
pub(crate) fn sbc<C: CpuRegs>(cpu: &mut C, v: u8, overflow: OverflowMode) {
    let a = cpu.a();
    let borrow_in = (!cpu.is_flag_set(CARRY)) as i16;
    let diff = a as i16 - v as i16 - borrow_in;
    let result = diff as u8;

    cpu.update_carry(diff >= 0);
    if overflow == OverflowMode::Derive {
        // Operands differ in sign and the result took the subtrahend's sign.
        cpu.update_overflow(((a ^ v) & (a ^ result) & 0x80) != 0);
    }
    lda(cpu, result);
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

/// C <- reg >= v; Z <- reg == v; N <- bit 7 of (reg - v).
#[inline]
pub(crate) fn compare<C: CpuRegs>(cpu: &mut C, reg: u8, v: u8) {
    cpu.update_carry(reg >= v);
    cpu.assign_flag(ZERO, reg == v);
    cpu.update_negative(reg.wrapping_sub(v));
}

// ---------------------------------------------------------------------------
// Read-Modify-Write
// ---------------------------------------------------------------------------

/// Apply `op` to A; Carry from the shifted-out bit, N/Z from the result.
pub(crate) fn rmw_accumulator<C: CpuRegs>(cpu: &mut C, op: ShiftFn) {
    let carry_in = cpu.is_flag_set(CARRY);
    let (result, carry_out) = op(cpu.a(), carry_in);
    cpu.update_carry(carry_out);
    lda(cpu, result);
}

/// Read `addr`, apply `op`, write the result back. Returns the new value.
pub(crate) fn rmw_memory<C: CpuRegs>(
    cpu: &mut C,
    mem: &mut MemoryMap,
    addr: u32,
    op: ShiftFn,
) -> u8 {
    let carry_in = cpu.is_flag_set(CARRY);
    let old = mem.read(addr);
    let (result, carry_out) = op(old, carry_in);
    mem.write(addr, result);
    cpu.update_carry(carry_out);
    cpu.update_negative_and_zero(result);
    result
}

// ---------------------------------------------------------------------------
// Branch helpers
// ---------------------------------------------------------------------------

/// Add the displacement to PC when `take` holds. PC already points past the
/// displacement byte.
#[inline]
pub(crate) fn branch<C: CpuRegs>(cpu: &mut C, offset: i8, take: bool) {
    if take {
        let new_pc = cpu.pc().wrapping_add(offset as i16 as u16);
        cpu.set_pc(new_pc);
    }
}
