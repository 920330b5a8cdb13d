//! cart6502 demo runner
//!
//! Loads a raw ROM image (or a built-in demo program), powers the CPU on with
//! a seeded random source, runs it for a bounded number of instructions and
//! prints the final machine state.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use cart6502::{Cpu, CpuConfig, FnSource, OverflowMode};

/// Run a 6502 program against the cartridge memory map
#[derive(Parser, Debug)]
#[command(name = "cart6502")]
#[command(version)]
#[command(about = "Instruction-level 6502 interpreter over a fixed cartridge memory map")]
struct Cli {
    /// Raw ROM image (up to 32 KiB, mirrored into $8000-$FFFF). Uses a
    /// built-in demo program when omitted.
    rom: Option<PathBuf>,

    /// Seed for the power-on random source
    #[arg(short, long, default_value_t = 0x6502)]
    seed: u64,

    /// Stop after this many instructions if the program has not halted
    #[arg(short, long, default_value_t = 1_000_000)]
    max_steps: usize,

    /// Derive the V flag on ADC / SBC
    #[arg(long)]
    overflow: bool,
}

fn build_demo_rom() -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];

    // Program at $8000 (offset 0x0000)
    let program: &[u8] = &[
        0xA2, 0x00, // LDX #$00
        0x18, // CLC
        0xA9, 0x10, // LDA #$10
        0x69, 0x05, // ADC #$05 => A = 0x15
        0x8D, 0x00, 0x02, // STA $0200
        0xE8, // INX
        0xD0, 0xFD, // BNE -3 -> loop until X wraps to 0
        0x00, // BRK
    ];
    rom[..program.len()].copy_from_slice(program);

    // Reset vector $FFFC/$FFFD -> $8000
    rom[0x7FFC] = 0x00;
    rom[0x7FFD] = 0x80;
    rom
}

/// xorshift64 stream, one byte per call.
fn seeded_source(seed: u64) -> FnSource<impl FnMut() -> u8> {
    let mut state = seed.max(1);
    FnSource(move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 24) as u8
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let rom = match &cli.rom {
        Some(path) => match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("Error: cannot read {}: {e}", path.display());
                return ExitCode::from(2);
            }
        },
        None => build_demo_rom(),
    };

    let mut config = CpuConfig::new();
    if cli.overflow {
        config = config.with_overflow(OverflowMode::Derive);
    }

    let mut cpu = Cpu::with_config(seeded_source(cli.seed), config);
    if let Err(e) = cpu.memory_mut().load_rom(&rom) {
        eprintln!("Error: {e}");
        return ExitCode::from(2);
    }

    cpu.power_on();
    let result = cpu.run_for(cli.max_steps);

    // Inspect state
    let m0200 = cpu.read(0x0200);
    println!("A: 0x{:02X}", cpu.a());
    println!("X: 0x{:02X}", cpu.x());
    println!("Y: 0x{:02X}", cpu.y());
    println!("SP: 0x{:02X}", cpu.sp());
    println!("PC: 0x{:04X}", cpu.pc());
    println!("P (flags): 0b{:08b}", cpu.status());
    println!("mem[0x0200]: 0x{m0200:02X}");

    match result {
        Ok(steps) => {
            println!("halted after {steps} instructions");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
