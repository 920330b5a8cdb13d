#![doc = r#"
cart6502 library crate.

Instruction-level 6502 interpreter running against a fixed cartridge-console
memory map. The crate is meant to sit inside a larger hardware simulation:
the host supplies ROM contents and a random byte source, drives the CPU with
`step` / `run`, and inspects the resulting machine state.

Modules:
- config: runtime knobs (overflow derivation, BRK behavior)
- cpu: 6502 core (facade + state + addressing + opcode table + dispatch)
- error: crate error type (`CpuError`) and `Result` alias
- memory: RAM / save-RAM / mirrored ROM address decoding
- random: injected random byte capability used at power-on and by open-bus reads

In tests, shared ROM builders are available under `crate::test_utils`.
"#]

pub mod config;
pub mod cpu;
pub mod error;
pub mod memory;
pub mod random;

// Re-export commonly used types at the crate root for convenience.
pub use config::{BreakMode, CpuConfig, OverflowMode};
pub use cpu::core::{Cpu, StepOutcome};
pub use error::{CpuError, Result};
pub use memory::{MemoryMap, Region};
pub use random::{FixedSource, FnSource, RandomSource, SequenceSource};

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
