//! Helpers shared by the integration tests.

#![allow(dead_code)]

use cart6502::{Cpu, CpuConfig, FixedSource};

/// 32 KiB ROM with `program` at $8000 and the reset vector pointing at it.
pub fn rom_with_program(program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[..program.len()].copy_from_slice(program);
    rom[0x7FFC] = 0x00;
    rom[0x7FFD] = 0x80;
    rom
}

/// Reset, ready CPU with `program` at $8000.
pub fn boot(program: &[u8]) -> Cpu {
    boot_with_config(program, CpuConfig::default())
}

pub fn boot_with_config(program: &[u8], config: CpuConfig) -> Cpu {
    let mut cpu = Cpu::with_config(FixedSource(0), config);
    cpu.memory_mut()
        .load_rom(&rom_with_program(program))
        .expect("program fits in ROM");
    cpu.set_sp(0xFF);
    cpu.reset();
    cpu
}
