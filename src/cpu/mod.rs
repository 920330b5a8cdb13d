/*!
cpu - Public façade for the 6502 CPU core.

Layout:

```text
    state.rs        - Register file, status flag constants, ready flag.
    regs.rs         - `CpuRegs` trait used by the generic helpers.
    addressing.rs   - Addressing mode enum & operand resolution helpers.
    table.rs        - Canonical documented-opcode table (const-built).
    execute.rs      - Instruction semantic helpers (ALU, stack, RMW, branch).
    dispatch/       - Single-step orchestrator + per-family handlers.
    core/           - `Cpu` façade: lifecycle, run loops, accessors.
```

Usage:
```rust
use cart6502::{Cpu, FixedSource};

let mut cpu = Cpu::new(FixedSource(0));
// LDA #$2A ; BRK, with the reset vector pointing at $8000
let mut rom = vec![0u8; 0x8000];
rom[..3].copy_from_slice(&[0xA9, 0x2A, 0x00]);
rom[0x7FFD] = 0x80;
cpu.memory_mut().load_rom(&rom).unwrap();
cpu.reset();
cpu.run().unwrap();
assert_eq!(cpu.a(), 0x2A);
```
*/

pub mod addressing;
pub mod core;
pub mod dispatch;
pub mod execute;
pub mod regs;
pub mod state;
pub mod table;

pub use crate::cpu::core::{Cpu, StepOutcome};
pub use crate::cpu::regs::CpuRegs;
pub use crate::cpu::state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, UNUSED, ZERO,
};
pub use crate::cpu::table::{Instruction, Opcode, decode};
