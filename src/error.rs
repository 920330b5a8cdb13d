//! Error types for the 6502 core.
//!
//! Only conditions a host can act on are represented here. Writes to ROM,
//! the placeholder register or unmapped space are defined no-ops and never
//! surface as errors; out-of-range addresses cannot occur because every
//! access is masked to 16 bits before it is decoded.

use thiserror::Error;

/// Errors reported by the CPU core to its host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpuError {
    /// The byte at `pc` has no entry in the documented opcode table.
    ///
    /// The CPU is halted and no register (PC included) is modified.
    #[error("invalid opcode ${opcode:02X} at ${pc:04X}")]
    InvalidOpcode { opcode: u8, pc: u16 },

    /// `step` was called while the ready flag is clear.
    #[error("cpu is halted")]
    Halted,

    /// A bounded run used up its instruction budget before the CPU halted.
    #[error("cpu still running after {limit} instructions")]
    StepLimitExceeded { limit: usize },

    /// ROM image does not fit the 32 KiB ROM window.
    #[error("rom image is {len} bytes, at most 32768 fit")]
    RomTooLarge { len: usize },

    /// Save-RAM image must be exactly 8 KiB.
    #[error("save ram image is {len} bytes, expected 8192")]
    SaveRamSizeMismatch { len: usize },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CpuError>;
