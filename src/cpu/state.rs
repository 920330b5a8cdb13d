/*!
state.rs - 6502 architectural state (registers + status flags + ready flag).

Overview
========
`CpuState` owns every architecturally visible register and the run-loop
ready flag. It excludes memory, decode, and dispatch; those live in the
`memory`, `table`, and `dispatch` modules.

All register fields are native-width integers (`u8` / `u16`), so every
mutation is already reduced modulo 256 / 65536. Arithmetic on them must use
the `wrapping_*` operations.

6502 Status Register Bit Layout
===============================
```text
Bit: 7 6 5 4 3 2 1 0
     N V 1 B D I Z C
Where:
  N = NEGATIVE
  V = OVERFLOW
  1 = UNUSED (forced to 1 when P is pushed)
  B = BREAK  (forced to 1 when P is pushed; no behavior of its own)
  D = DECIMAL (stored only; ADC/SBC are binary)
  I = IRQ_DISABLE
  Z = ZERO
  C = CARRY
```

Flags can be addressed either by mask (`CARRY`, `ZERO`, ...) or by bit
index (`CARRY_BIT`, ...). The flag operations themselves live on the
`CpuRegs` trait (`get_flag` / `set_flag` by index, `is_flag_set` /
`assign_flag` by mask).
*/

/// Bit positions within P.
pub const CARRY_BIT: u8 = 0;
pub const ZERO_BIT: u8 = 1;
pub const IRQ_DISABLE_BIT: u8 = 2;
pub const DECIMAL_BIT: u8 = 3;
pub const BREAK_BIT: u8 = 4;
pub const UNUSED_BIT: u8 = 5;
pub const OVERFLOW_BIT: u8 = 6;
pub const NEGATIVE_BIT: u8 = 7;

/// Processor status flag bit masks.
pub const CARRY: u8 = 1 << CARRY_BIT;
pub const ZERO: u8 = 1 << ZERO_BIT;
pub const IRQ_DISABLE: u8 = 1 << IRQ_DISABLE_BIT;
pub const DECIMAL: u8 = 1 << DECIMAL_BIT;
pub const BREAK: u8 = 1 << BREAK_BIT;
pub const UNUSED: u8 = 1 << UNUSED_BIT;
pub const OVERFLOW: u8 = 1 << OVERFLOW_BIT;
pub const NEGATIVE: u8 = 1 << NEGATIVE_BIT;

/// Base of the hardware stack page; the effective stack address is `STACK_PAGE | S`.
pub const STACK_PAGE: u16 = 0x0100;

/// Register file plus ready flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
    /// Run-loop flag: set by reset, cleared by BRK (halt mode) or a fault.
    pub ready: bool,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            pc: 0x0000,
            status: IRQ_DISABLE | UNUSED,
            ready: false,
        }
    }
}

impl CpuState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}
