//! Shared test utilities for building ROM images and ready-to-step CPUs.
//!
//! ROM layout used here (32 KiB, index 0 = $8000):
//! - program bytes at offset 0x0000 ($8000)
//! - reset vector at offset 0x7FFC..=0x7FFD ($FFFC/$FFFD) -> $8000

#![allow(dead_code)]

use crate::config::CpuConfig;
use crate::cpu::core::Cpu;
use crate::memory::ROM_SIZE;
use crate::random::FixedSource;

/// Program start address used by every builder here.
pub const PROGRAM_START: u16 = 0x8000;

/// Build a full 32 KiB ROM with `program` at $8000 and the reset vector
/// pointing at it.
pub fn build_rom(program: &[u8]) -> Vec<u8> {
    build_rom_with_reset(program, PROGRAM_START)
}

/// Build a full 32 KiB ROM with `program` at $8000 and an arbitrary reset
/// vector.
pub fn build_rom_with_reset(program: &[u8], reset: u16) -> Vec<u8> {
    assert!(program.len() <= ROM_SIZE - 6, "program overlaps the vectors");
    let mut rom = vec![0u8; ROM_SIZE];
    rom[..program.len()].copy_from_slice(program);
    rom[0x7FFC] = (reset & 0xFF) as u8;
    rom[0x7FFD] = (reset >> 8) as u8;
    rom
}

/// CPU with `program` loaded at $8000, reset and ready, stack pointer at $FF.
pub fn setup(program: &[u8]) -> Cpu {
    setup_with_config(program, CpuConfig::default())
}

pub fn setup_with_config(program: &[u8], config: CpuConfig) -> Cpu {
    let mut cpu = Cpu::with_config(FixedSource(0), config);
    cpu.memory_mut()
        .load_rom(&build_rom(program))
        .expect("test ROM fits");
    cpu.set_sp(0xFF);
    cpu.reset();
    cpu
}
