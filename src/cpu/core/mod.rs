/*!
core::Cpu - 6502 CPU façade owning registers, memory map and configuration.

Design
======
- `Cpu` owns a `CpuState` (register file + ready flag), the `MemoryMap`
  (RAM / save RAM / ROM / random source) and its `CpuConfig`.
- Execution is delegated to the generic dispatcher, which works on any
  `CpuRegs` implementor; the façade only adds lifecycle and run loops.

Lifecycle
=========
```text
    power_on()  randomize RAM, PC, A, X, Y, S, P, then reset()
    reset()     PC <- word at $FFFC, ready <- true (does not run)
    step()      execute one instruction
    run()       step until halted
    run_for(n)  step until halted, at most n instructions
```

`reset_and_run` / `power_on_and_run` combine the two halves for hosts that
want "reset, then run until halted" in a single call.

Faults
======
An undocumented opcode stops the CPU (ready cleared) and surfaces as
`CpuError::InvalidOpcode`. Nothing else is fatal; writes to ROM or
unmapped space are silently dropped by the memory map.
*/

use log::debug;

use crate::config::CpuConfig;
use crate::cpu::regs::CpuRegs;
use crate::cpu::state::CpuState;
use crate::error::{CpuError, Result};
use crate::memory::{MemoryMap, RESET_VECTOR};
use crate::random::RandomSource;

/// Result of a successful `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The CPU is still ready for the next instruction.
    Continue,
    /// The instruction cleared the ready flag (BRK in halt mode).
    Halted,
}

#[derive(Debug)]
pub struct Cpu {
    state: CpuState,
    memory: MemoryMap,
    config: CpuConfig,
}

impl Cpu {
    /// CPU with default configuration and zeroed memory. Not ready until
    /// `reset` or `power_on`.
    pub fn new(random: impl RandomSource + 'static) -> Self {
        Self::with_config(random, CpuConfig::default())
    }

    pub fn with_config(random: impl RandomSource + 'static, config: CpuConfig) -> Self {
        Self {
            state: CpuState::new(),
            memory: MemoryMap::new(random),
            config,
        }
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    // ---------------------------------------------------------------------
    // Lifecycle
    // ---------------------------------------------------------------------

    /// Fill RAM, then PC (high byte first), A, X, Y, S and P with random
    /// bytes, then `reset`.
    pub fn power_on(&mut self) {
        let m = &mut self.memory;
        m.randomize_ram();
        let hi = m.random_byte() as u16;
        let lo = m.random_byte() as u16;
        self.state.pc = (hi << 8) | lo;
        self.state.a = m.random_byte();
        self.state.x = m.random_byte();
        self.state.y = m.random_byte();
        self.state.sp = m.random_byte();
        self.state.status = m.random_byte();
        debug!(
            "power on: A={:02X} X={:02X} Y={:02X} SP={:02X} P={:02X}",
            self.state.a, self.state.x, self.state.y, self.state.sp, self.state.status
        );
        self.reset();
    }

    /// Load PC from the reset vector and mark the CPU ready. Other registers
    /// keep whatever they held.
    pub fn reset(&mut self) {
        self.state.pc = self.memory.read_word(RESET_VECTOR as u32);
        self.state.ready = true;
        debug!("reset: PC=${:04X}", self.state.pc);
    }

    /// Execute exactly one instruction.
    pub fn step(&mut self) -> Result<StepOutcome> {
        crate::cpu::dispatch::step(&mut self.state, &mut self.memory, &self.config)
    }

    /// Run until halted. Returns the number of instructions executed,
    /// including the one that halted.
    ///
    /// There is no internal budget; a program that never executes BRK keeps
    /// this looping. Use `run_for` to bound it.
    pub fn run(&mut self) -> Result<usize> {
        let mut executed = 0usize;
        loop {
            let outcome = self.step()?;
            executed += 1;
            if outcome == StepOutcome::Halted {
                return Ok(executed);
            }
        }
    }

    /// Run until halted or until `limit` instructions have executed.
    pub fn run_for(&mut self, limit: usize) -> Result<usize> {
        for executed in 1..=limit {
            if self.step()? == StepOutcome::Halted {
                return Ok(executed);
            }
        }
        Err(CpuError::StepLimitExceeded { limit })
    }

    pub fn reset_and_run(&mut self) -> Result<usize> {
        self.reset();
        self.run()
    }

    pub fn power_on_and_run(&mut self) -> Result<usize> {
        self.power_on();
        self.run()
    }

    // ---------------------------------------------------------------------
    // State / memory access
    // ---------------------------------------------------------------------

    /// Copy of the full register file.
    pub fn state(&self) -> CpuState {
        self.state
    }

    pub fn memory(&self) -> &MemoryMap {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut MemoryMap {
        &mut self.memory
    }

    /// CPU-visible read (the placeholder register consumes a random byte).
    pub fn read(&mut self, addr: u32) -> u8 {
        self.memory.read(addr)
    }

    /// CPU-visible write (ROM / unmapped writes are dropped).
    pub fn write(&mut self, addr: u32, value: u8) {
        self.memory.write(addr, value);
    }

    pub fn is_ready(&self) -> bool {
        self.state.ready
    }

    pub fn is_halted(&self) -> bool {
        !self.state.ready
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.state.ready = ready;
    }

    // ---------------------------------------------------------------------
    // Register accessors (read)
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    pub fn status(&self) -> u8 {
        self.state.status
    }

    // ---------------------------------------------------------------------
    // Register mutators (write)
    // ---------------------------------------------------------------------
    pub fn set_a(&mut self, v: u8) {
        self.state.a = v;
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.x = v;
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.y = v;
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.sp = v;
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.pc = v;
    }
    pub fn set_status(&mut self, v: u8) {
        self.state.status = v;
    }

    // ---------------------------------------------------------------------
    // Flag helpers
    // ---------------------------------------------------------------------

    // Thin wrappers over the `CpuRegs` flag operations on the register file.

    /// Set or clear every bit in `mask`.
    pub fn assign_flag(&mut self, mask: u8, on: bool) {
        self.state.assign_flag(mask, on);
    }

    pub fn is_flag_set(&self, mask: u8) -> bool {
        self.state.is_flag_set(mask)
    }

    /// Single flag by bit index, as 0 or 1.
    pub fn get_flag(&self, bit: u8) -> u8 {
        self.state.get_flag(bit)
    }

    /// Single flag by bit index from the low bit of `value`.
    pub fn set_flag(&mut self, bit: u8, value: u8) {
        self.state.set_flag(bit, value);
    }

    pub fn update_negative_and_zero(&mut self, v: u8) {
        self.state.update_negative_and_zero(v);
    }
}
