/*!
regs.rs - CpuRegs trait: the register + flag interface used by instruction
semantics and dispatch.

The trait does NOT include memory access, stack push/pop, or instruction
fetch. Those stay explicit at call sites through `&mut MemoryMap`, which
keeps borrows short and lets the helpers in `execute` / `addressing` be
generic over any register file (`CpuState` is the only implementor in the
crate; tests can provide their own).

All flag logic lives here as default methods, so implementors only supply
the primitive accessors. `get_flag` / `set_flag` address one bit by index;
`update_negative` and `update_negative_and_zero` are the N/Z derivation
used by every load, transfer, increment and shift.
*/

use crate::cpu::state::{BREAK, CARRY, CpuState, NEGATIVE_BIT, OVERFLOW, UNUSED, ZERO_BIT};

pub trait CpuRegs {
    // ---------------------------------------------------------------------
    // Read accessors
    // ---------------------------------------------------------------------
    fn a(&self) -> u8;
    fn x(&self) -> u8;
    fn y(&self) -> u8;
    fn sp(&self) -> u8;
    fn pc(&self) -> u16;
    fn status(&self) -> u8;
    fn ready(&self) -> bool;

    // ---------------------------------------------------------------------
    // Mutators
    // ---------------------------------------------------------------------
    fn set_a(&mut self, v: u8);
    fn set_x(&mut self, v: u8);
    fn set_y(&mut self, v: u8);
    fn set_sp(&mut self, v: u8);
    fn set_pc(&mut self, v: u16);
    fn set_status(&mut self, v: u8);
    fn set_ready(&mut self, r: bool);

    // ---------------------------------------------------------------------
    // Program Counter helpers
    // ---------------------------------------------------------------------

    /// Advance PC by `delta` (wrapping at 16 bits).
    #[inline]
    fn advance_pc(&mut self, delta: u16) {
        let pc = self.pc().wrapping_add(delta);
        self.set_pc(pc);
    }

    #[inline]
    fn advance_pc_one(&mut self) {
        self.advance_pc(1);
    }

    // ---------------------------------------------------------------------
    // Flag operations
    // ---------------------------------------------------------------------

    /// Single status bit as 0 or 1.
    #[inline]
    fn get_flag(&self, bit: u8) -> u8 {
        (self.status() >> (bit & 7)) & 1
    }

    /// Clear the target bit, then OR in `value & 1`. Other bits are untouched.
    #[inline]
    fn set_flag(&mut self, bit: u8, value: u8) {
        let bit = bit & 7;
        let p = (self.status() & !(1 << bit)) | ((value & 1) << bit);
        self.set_status(p);
    }

    #[inline]
    fn is_flag_set(&self, mask: u8) -> bool {
        (self.status() & mask) != 0
    }

    /// Set or clear every bit in `mask`.
    #[inline]
    fn assign_flag(&mut self, mask: u8, value: bool) {
        let p = if value {
            self.status() | mask
        } else {
            self.status() & !mask
        };
        self.set_status(p);
    }

    /// N from bit 7 of `value`.
    #[inline]
    fn update_negative(&mut self, value: u8) {
        self.set_flag(NEGATIVE_BIT, value >> 7);
    }

    /// N from bit 7 of `value`, Z when `value == 0`.
    #[inline]
    fn update_negative_and_zero(&mut self, value: u8) {
        self.update_negative(value);
        self.set_flag(ZERO_BIT, (value == 0) as u8);
    }

    #[inline]
    fn update_carry(&mut self, carry: bool) {
        self.assign_flag(CARRY, carry);
    }

    #[inline]
    fn update_overflow(&mut self, overflow: bool) {
        self.assign_flag(OVERFLOW, overflow);
    }

    /// Status byte as written by an explicit push: B and bit 5 forced on.
    #[inline]
    fn compose_status_for_push(&self) -> u8 {
        self.status() | BREAK | UNUSED
    }
}

impl CpuRegs for CpuState {
    #[inline]
    fn a(&self) -> u8 {
        self.a
    }
    #[inline]
    fn x(&self) -> u8 {
        self.x
    }
    #[inline]
    fn y(&self) -> u8 {
        self.y
    }
    #[inline]
    fn sp(&self) -> u8 {
        self.sp
    }
    #[inline]
    fn pc(&self) -> u16 {
        self.pc
    }
    #[inline]
    fn status(&self) -> u8 {
        self.status
    }
    #[inline]
    fn ready(&self) -> bool {
        self.ready
    }

    #[inline]
    fn set_a(&mut self, v: u8) {
        self.a = v;
    }
    #[inline]
    fn set_x(&mut self, v: u8) {
        self.x = v;
    }
    #[inline]
    fn set_y(&mut self, v: u8) {
        self.y = v;
    }
    #[inline]
    fn set_sp(&mut self, v: u8) {
        self.sp = v;
    }
    #[inline]
    fn set_pc(&mut self, v: u16) {
        self.pc = v;
    }
    #[inline]
    fn set_status(&mut self, v: u8) {
        self.status = v;
    }
    #[inline]
    fn set_ready(&mut self, r: bool) {
        self.ready = r;
    }
}
