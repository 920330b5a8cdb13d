//! Runtime configuration for the CPU core.
//!
//! The defaults reproduce the simplified machine: BRK stops the run loop and
//! ADC/SBC leave the overflow flag alone. Both behaviors can be switched to
//! their full 6502 counterparts per CPU instance.

/// How ADC / SBC treat the overflow (V) flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowMode {
    /// V is never touched by ADC / SBC.
    #[default]
    Ignore,
    /// V is derived from the signed result (sign change rule).
    Derive,
}

/// What the BRK opcode (0x00) does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BreakMode {
    /// Clear the ready flag and end the run loop.
    #[default]
    Halt,
    /// Push PC+1 and P (B and bit 5 set), set I, jump through the IRQ vector.
    Interrupt,
}

/// Per-instance CPU configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuConfig {
    pub overflow: OverflowMode,
    pub brk: BreakMode,
}

impl CpuConfig {
    /// Configuration with all defaults (halt on BRK, no overflow derivation).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overflow(mut self, overflow: OverflowMode) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn with_break(mut self, brk: BreakMode) -> Self {
        self.brk = brk;
        self
    }
}
