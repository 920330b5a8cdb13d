/*!
addressing.rs - 6502 addressing modes and operand resolution.

Overview
========
`resolve(mode, cpu, mem)` consumes the instruction-stream bytes a mode needs
(advancing PC) and returns an `Operand`:

| mode            | operand                                                   |
|-----------------|-----------------------------------------------------------|
| Implied         | `Operand::None`                                           |
| Accumulator     | `Operand::Accumulator`                                    |
| Immediate       | `Operand::Immediate(next byte)`                           |
| Relative        | `Operand::Relative(next byte as i8)`                      |
| ZeroPage        | next byte                                                 |
| ZeroPageX / Y   | (next byte + X / Y) & 0xFF                                |
| Absolute        | next little-endian word                                   |
| AbsoluteX / Y   | word + X / Y, NOT masked (may exceed $FFFF)               |
| Indirect        | word stored at the absolute pointer                       |
| IndexedIndirect | word stored at zero-page pointer (next byte + X) & 0xFF   |
| IndirectIndexed | word stored at zero-page pointer (next byte), then + Y    |

Effective addresses are `u32` so the unmasked sums of the indexed modes
survive until the memory map masks them at access time. Zero-page pointer
reads take their high byte from `(ptr + 1) & 0xFF`, as on the real chip:
a pointer at $FF takes its high byte from $0000, not $0100. Simplified cores
that read `ptr + 1` unwrapped differ from this crate here.

Caller Assumptions
==================
- PC points at the first operand byte (opcode already consumed).
- Operand bytes are only ever consumed through `fetch_byte` / `fetch_word`.
*/

use crate::cpu::regs::CpuRegs;
use crate::memory::MemoryMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndexedIndirect,
    IndirectIndexed,
    Relative,
}

impl AddressingMode {
    /// Number of instruction-stream bytes following the opcode.
    pub const fn operand_len(self) -> u16 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndexedIndirect
            | AddressingMode::IndirectIndexed
            | AddressingMode::Relative => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Resolved operand for one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    None,
    Accumulator,
    Immediate(u8),
    /// Effective address, masked only when memory is accessed.
    Address(u32),
    /// Signed branch displacement.
    Relative(i8),
}

/// Fetch next byte from the instruction stream, incrementing PC.
pub(crate) fn fetch_byte<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap) -> u8 {
    let v = mem.read(cpu.pc() as u32);
    cpu.advance_pc_one();
    v
}

/// Fetch next little-endian word (low, then high), incrementing PC twice.
pub(crate) fn fetch_word<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap) -> u16 {
    let lo = fetch_byte(cpu, mem) as u16;
    let hi = fetch_byte(cpu, mem) as u16;
    (hi << 8) | lo
}

/// Resolve the operand for `mode`.
pub(crate) fn resolve<C: CpuRegs>(mode: AddressingMode, cpu: &mut C, mem: &mut MemoryMap) -> Operand {
    match mode {
        AddressingMode::Implied => Operand::None,
        AddressingMode::Accumulator => Operand::Accumulator,
        AddressingMode::Immediate => Operand::Immediate(fetch_byte(cpu, mem)),
        AddressingMode::Relative => Operand::Relative(fetch_byte(cpu, mem) as i8),
        AddressingMode::ZeroPage => Operand::Address(addr_zp(cpu, mem)),
        AddressingMode::ZeroPageX => Operand::Address(addr_zp_x(cpu, mem)),
        AddressingMode::ZeroPageY => Operand::Address(addr_zp_y(cpu, mem)),
        AddressingMode::Absolute => Operand::Address(addr_abs(cpu, mem)),
        AddressingMode::AbsoluteX => Operand::Address(addr_abs_x(cpu, mem)),
        AddressingMode::AbsoluteY => Operand::Address(addr_abs_y(cpu, mem)),
        AddressingMode::Indirect => Operand::Address(addr_ind(cpu, mem)),
        AddressingMode::IndexedIndirect => Operand::Address(addr_ind_x(cpu, mem)),
        AddressingMode::IndirectIndexed => Operand::Address(addr_ind_y(cpu, mem)),
    }
}

// -------------------------
// Basic addressing helpers
// -------------------------

#[inline]
pub(crate) fn addr_zp<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap) -> u32 {
    fetch_byte(cpu, mem) as u32
}

#[inline]
pub(crate) fn addr_zp_x<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap) -> u32 {
    fetch_byte(cpu, mem).wrapping_add(cpu.x()) as u32
}

#[inline]
pub(crate) fn addr_zp_y<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap) -> u32 {
    fetch_byte(cpu, mem).wrapping_add(cpu.y()) as u32
}

#[inline]
pub(crate) fn addr_abs<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap) -> u32 {
    fetch_word(cpu, mem) as u32
}

#[inline]
pub(crate) fn addr_abs_x<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap) -> u32 {
    fetch_word(cpu, mem) as u32 + cpu.x() as u32
}

#[inline]
pub(crate) fn addr_abs_y<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap) -> u32 {
    fetch_word(cpu, mem) as u32 + cpu.y() as u32
}

#[inline]
pub(crate) fn addr_ind<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap) -> u32 {
    let ptr = fetch_word(cpu, mem) as u32;
    mem.read_word(ptr) as u32
}

#[inline]
pub(crate) fn addr_ind_x<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap) -> u32 {
    let zp = fetch_byte(cpu, mem).wrapping_add(cpu.x());
    read_word_zp(mem, zp) as u32
}

#[inline]
pub(crate) fn addr_ind_y<C: CpuRegs>(cpu: &mut C, mem: &mut MemoryMap) -> u32 {
    let zp = fetch_byte(cpu, mem);
    read_word_zp(mem, zp) as u32 + cpu.y() as u32
}

// -------------------------
// Low-level word helpers
// -------------------------

/// Read a 16-bit little endian pointer from zero page, wrapping the high
/// byte read within page 0.
#[inline]
pub(crate) fn read_word_zp(mem: &mut MemoryMap, base: u8) -> u16 {
    let lo = mem.read(base as u32) as u16;
    let hi = mem.read(base.wrapping_add(1) as u32) as u16;
    (hi << 8) | lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::CpuState;
    use crate::random::FixedSource;

    /// Memory with `operands` placed at $8000 and PC pointing there.
    fn setup(operands: &[u8]) -> (CpuState, MemoryMap) {
        let mut mem = MemoryMap::new(FixedSource(0));
        mem.rom_mut()[..operands.len()].copy_from_slice(operands);
        let mut cpu = CpuState::new();
        cpu.pc = 0x8000;
        (cpu, mem)
    }

    #[test]
    fn immediate_returns_byte_itself() {
        let (mut cpu, mut mem) = setup(&[0x42]);
        assert_eq!(
            resolve(AddressingMode::Immediate, &mut cpu, &mut mem),
            Operand::Immediate(0x42)
        );
        assert_eq!(cpu.pc, 0x8001);
    }

    #[test]
    fn zero_page_x_wraps_within_page_zero() {
        let (mut cpu, mut mem) = setup(&[0xF0]);
        cpu.x = 0x20;
        assert_eq!(
            resolve(AddressingMode::ZeroPageX, &mut cpu, &mut mem),
            Operand::Address(0x0010)
        );
    }

    #[test]
    fn zero_page_y_wraps_within_page_zero() {
        let (mut cpu, mut mem) = setup(&[0xFF]);
        cpu.y = 0x01;
        assert_eq!(
            resolve(AddressingMode::ZeroPageY, &mut cpu, &mut mem),
            Operand::Address(0x0000)
        );
    }

    #[test]
    fn absolute_is_little_endian() {
        let (mut cpu, mut mem) = setup(&[0x34, 0x12]);
        assert_eq!(
            resolve(AddressingMode::Absolute, &mut cpu, &mut mem),
            Operand::Address(0x1234)
        );
        assert_eq!(cpu.pc, 0x8002);
    }

    #[test]
    fn absolute_x_is_not_masked_by_resolver() {
        let (mut cpu, mut mem) = setup(&[0xFF, 0xFF]);
        cpu.x = 1;
        let op = resolve(AddressingMode::AbsoluteX, &mut cpu, &mut mem);
        assert_eq!(op, Operand::Address(0x1_0000));
        // the access itself wraps to $0000
        mem.write(0x0000, 0x99);
        if let Operand::Address(addr) = op {
            assert_eq!(mem.read(addr), 0x99);
        }
    }

    #[test]
    fn absolute_y_adds_y() {
        let (mut cpu, mut mem) = setup(&[0x00, 0x02]);
        cpu.y = 0x10;
        assert_eq!(
            resolve(AddressingMode::AbsoluteY, &mut cpu, &mut mem),
            Operand::Address(0x0210)
        );
    }

    #[test]
    fn indirect_reads_pointer_target() {
        let (mut cpu, mut mem) = setup(&[0x00, 0x03]);
        mem.write(0x0300, 0xCD);
        mem.write(0x0301, 0xAB);
        assert_eq!(
            resolve(AddressingMode::Indirect, &mut cpu, &mut mem),
            Operand::Address(0xABCD)
        );
    }

    #[test]
    fn indexed_indirect_wraps_pointer_in_zero_page() {
        let (mut cpu, mut mem) = setup(&[0xFE]);
        cpu.x = 0x01;
        mem.write(0x00FF, 0x00);
        mem.write(0x0000, 0x60);
        assert_eq!(
            resolve(AddressingMode::IndexedIndirect, &mut cpu, &mut mem),
            Operand::Address(0x6000)
        );
    }

    #[test]
    fn indirect_indexed_adds_y_after_pointer_read() {
        let (mut cpu, mut mem) = setup(&[0x10]);
        cpu.y = 0x02;
        mem.write(0x0010, 0xFF);
        mem.write(0x0011, 0xFF);
        assert_eq!(
            resolve(AddressingMode::IndirectIndexed, &mut cpu, &mut mem),
            Operand::Address(0x1_0001)
        );
    }

    #[test]
    fn indirect_indexed_pointer_at_ff_wraps_within_page_zero() {
        let (mut cpu, mut mem) = setup(&[0xFF]);
        cpu.y = 0x00;
        mem.write(0x00FF, 0x34);
        mem.write(0x0000, 0x12);
        mem.write(0x0100, 0x99);
        assert_eq!(
            resolve(AddressingMode::IndirectIndexed, &mut cpu, &mut mem),
            Operand::Address(0x1234)
        );
        assert_eq!(read_word_zp(&mut mem, 0xFF), 0x1234);
    }

    #[test]
    fn relative_is_signed() {
        let (mut cpu, mut mem) = setup(&[0xFE]);
        assert_eq!(
            resolve(AddressingMode::Relative, &mut cpu, &mut mem),
            Operand::Relative(-2)
        );
    }

    #[test]
    fn implied_and_accumulator_consume_nothing() {
        let (mut cpu, mut mem) = setup(&[0xAA]);
        assert_eq!(resolve(AddressingMode::Implied, &mut cpu, &mut mem), Operand::None);
        assert_eq!(
            resolve(AddressingMode::Accumulator, &mut cpu, &mut mem),
            Operand::Accumulator
        );
        assert_eq!(cpu.pc, 0x8000);
    }

    #[test]
    fn operand_lengths() {
        assert_eq!(AddressingMode::Implied.operand_len(), 0);
        assert_eq!(AddressingMode::Relative.operand_len(), 1);
        assert_eq!(AddressingMode::IndirectIndexed.operand_len(), 1);
        assert_eq!(AddressingMode::Indirect.operand_len(), 2);
    }
}
