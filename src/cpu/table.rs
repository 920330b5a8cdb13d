/*!
table.rs - Opcode decode table for the documented 6502 instruction set.

Purpose
=======
Maps the full 256-value opcode space to `Option<Opcode>`, where an `Opcode`
is the pair {instruction, addressing mode}. Undefined bytes (the
undocumented / illegal opcodes) decode to `None` and are reported by the
dispatcher as `CpuError::InvalidOpcode`.

Design
------
- `ENTRIES` lists the 151 documented opcodes once, grouped by instruction.
- `OPCODE_TABLE` is built from `ENTRIES` during const evaluation. A byte
  listed twice aborts compilation, so two instructions can never share an
  opcode.
- Tests check totality against the canonical count and that every
  {instruction, mode} pair owns exactly one byte.
*/

use crate::cpu::addressing::AddressingMode::{self, *};

/// Documented 6502 instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Instruction {
    /// Assembler mnemonic, upper case.
    pub const fn mnemonic(self) -> &'static str {
        use Instruction::*;
        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
        }
    }
}

/// One decoded opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opcode {
    pub instruction: Instruction,
    pub mode: AddressingMode,
}

impl Opcode {
    /// Instruction length in bytes, opcode included.
    pub const fn len(self) -> u16 {
        1 + self.mode.operand_len()
    }
}

/// Number of documented opcodes.
pub const DOCUMENTED_OPCODES: usize = 151;

const ENTRIES: [(u8, Instruction, AddressingMode); DOCUMENTED_OPCODES] = {
    use Instruction::*;
    [
        // Loads
        (0xA9, Lda, Immediate),
        (0xA5, Lda, ZeroPage),
        (0xB5, Lda, ZeroPageX),
        (0xAD, Lda, Absolute),
        (0xBD, Lda, AbsoluteX),
        (0xB9, Lda, AbsoluteY),
        (0xA1, Lda, IndexedIndirect),
        (0xB1, Lda, IndirectIndexed),
        (0xA2, Ldx, Immediate),
        (0xA6, Ldx, ZeroPage),
        (0xB6, Ldx, ZeroPageY),
        (0xAE, Ldx, Absolute),
        (0xBE, Ldx, AbsoluteY),
        (0xA0, Ldy, Immediate),
        (0xA4, Ldy, ZeroPage),
        (0xB4, Ldy, ZeroPageX),
        (0xAC, Ldy, Absolute),
        (0xBC, Ldy, AbsoluteX),
        // Stores
        (0x85, Sta, ZeroPage),
        (0x95, Sta, ZeroPageX),
        (0x8D, Sta, Absolute),
        (0x9D, Sta, AbsoluteX),
        (0x99, Sta, AbsoluteY),
        (0x81, Sta, IndexedIndirect),
        (0x91, Sta, IndirectIndexed),
        (0x86, Stx, ZeroPage),
        (0x96, Stx, ZeroPageY),
        (0x8E, Stx, Absolute),
        (0x84, Sty, ZeroPage),
        (0x94, Sty, ZeroPageX),
        (0x8C, Sty, Absolute),
        // Transfers
        (0xAA, Tax, Implied),
        (0xA8, Tay, Implied),
        (0x8A, Txa, Implied),
        (0x98, Tya, Implied),
        (0xBA, Tsx, Implied),
        (0x9A, Txs, Implied),
        // Stack
        (0x48, Pha, Implied),
        (0x08, Php, Implied),
        (0x68, Pla, Implied),
        (0x28, Plp, Implied),
        // Logical
        (0x29, And, Immediate),
        (0x25, And, ZeroPage),
        (0x35, And, ZeroPageX),
        (0x2D, And, Absolute),
        (0x3D, And, AbsoluteX),
        (0x39, And, AbsoluteY),
        (0x21, And, IndexedIndirect),
        (0x31, And, IndirectIndexed),
        (0x09, Ora, Immediate),
        (0x05, Ora, ZeroPage),
        (0x15, Ora, ZeroPageX),
        (0x0D, Ora, Absolute),
        (0x1D, Ora, AbsoluteX),
        (0x19, Ora, AbsoluteY),
        (0x01, Ora, IndexedIndirect),
        (0x11, Ora, IndirectIndexed),
        (0x49, Eor, Immediate),
        (0x45, Eor, ZeroPage),
        (0x55, Eor, ZeroPageX),
        (0x4D, Eor, Absolute),
        (0x5D, Eor, AbsoluteX),
        (0x59, Eor, AbsoluteY),
        (0x41, Eor, IndexedIndirect),
        (0x51, Eor, IndirectIndexed),
        (0x24, Bit, ZeroPage),
        (0x2C, Bit, Absolute),
        // Arithmetic
        (0x69, Adc, Immediate),
        (0x65, Adc, ZeroPage),
        (0x75, Adc, ZeroPageX),
        (0x6D, Adc, Absolute),
        (0x7D, Adc, AbsoluteX),
        (0x79, Adc, AbsoluteY),
        (0x61, Adc, IndexedIndirect),
        (0x71, Adc, IndirectIndexed),
        (0xE9, Sbc, Immediate),
        (0xE5, Sbc, ZeroPage),
        (0xF5, Sbc, ZeroPageX),
        (0xED, Sbc, Absolute),
        (0xFD, Sbc, AbsoluteX),
        (0xF9, Sbc, AbsoluteY),
        (0xE1, Sbc, IndexedIndirect),
        (0xF1, Sbc, IndirectIndexed),
        // Compare
        (0xC9, Cmp, Immediate),
        (0xC5, Cmp, ZeroPage),
        (0xD5, Cmp, ZeroPageX),
        (0xCD, Cmp, Absolute),
        (0xDD, Cmp, AbsoluteX),
        (0xD9, Cmp, AbsoluteY),
        (0xC1, Cmp, IndexedIndirect),
        (0xD1, Cmp, IndirectIndexed),
        (0xE0, Cpx, Immediate),
        (0xE4, Cpx, ZeroPage),
        (0xEC, Cpx, Absolute),
        (0xC0, Cpy, Immediate),
        (0xC4, Cpy, ZeroPage),
        (0xCC, Cpy, Absolute),
        // Increment / decrement
        (0xE6, Inc, ZeroPage),
        (0xF6, Inc, ZeroPageX),
        (0xEE, Inc, Absolute),
        (0xFE, Inc, AbsoluteX),
        (0xC6, Dec, ZeroPage),
        (0xD6, Dec, ZeroPageX),
        (0xCE, Dec, Absolute),
        (0xDE, Dec, AbsoluteX),
        (0xE8, Inx, Implied),
        (0xC8, Iny, Implied),
        (0xCA, Dex, Implied),
        (0x88, Dey, Implied),
        // Shifts / rotates
        (0x0A, Asl, Accumulator),
        (0x06, Asl, ZeroPage),
        (0x16, Asl, ZeroPageX),
        (0x0E, Asl, Absolute),
        (0x1E, Asl, AbsoluteX),
        (0x4A, Lsr, Accumulator),
        (0x46, Lsr, ZeroPage),
        (0x56, Lsr, ZeroPageX),
        (0x4E, Lsr, Absolute),
        (0x5E, Lsr, AbsoluteX),
        (0x2A, Rol, Accumulator),
        (0x26, Rol, ZeroPage),
        (0x36, Rol, ZeroPageX),
        (0x2E, Rol, Absolute),
        (0x3E, Rol, AbsoluteX),
        (0x6A, Ror, Accumulator),
        (0x66, Ror, ZeroPage),
        (0x76, Ror, ZeroPageX),
        (0x6E, Ror, Absolute),
        (0x7E, Ror, AbsoluteX),
        // Branches
        (0x10, Bpl, Relative),
        (0x30, Bmi, Relative),
        (0x50, Bvc, Relative),
        (0x70, Bvs, Relative),
        (0x90, Bcc, Relative),
        (0xB0, Bcs, Relative),
        (0xD0, Bne, Relative),
        (0xF0, Beq, Relative),
        // Control flow
        (0x4C, Jmp, Absolute),
        (0x6C, Jmp, Indirect),
        (0x20, Jsr, Absolute),
        (0x60, Rts, Implied),
        (0x40, Rti, Implied),
        (0x00, Brk, Implied),
        // Flags
        (0x18, Clc, Implied),
        (0x38, Sec, Implied),
        (0x58, Cli, Implied),
        (0x78, Sei, Implied),
        (0xD8, Cld, Implied),
        (0xF8, Sed, Implied),
        (0xB8, Clv, Implied),
        // Misc
        (0xEA, Nop, Implied),
    ]
};

/// Decode table indexed by opcode byte.
pub static OPCODE_TABLE: [Option<Opcode>; 256] = {
    let mut t: [Option<Opcode>; 256] = [None; 256];
    let mut i = 0;
    while i < ENTRIES.len() {
        let (byte, instruction, mode) = ENTRIES[i];
        if t[byte as usize].is_some() {
            panic!("opcode byte assigned twice in ENTRIES");
        }
        t[byte as usize] = Some(Opcode { instruction, mode });
        i += 1;
    }
    t
};

/// Look up an opcode byte.
#[inline]
pub fn decode(byte: u8) -> Option<Opcode> {
    OPCODE_TABLE[byte as usize]
}
