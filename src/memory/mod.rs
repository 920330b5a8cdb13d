#![doc = r#"
Memory module: the CPU-visible address space.

Address map (16-bit, every access masked with `& 0xFFFF` first):
- $0000-$1FFF: 8 KiB RAM (read/write)
- $2000:       placeholder hardware register, reads a fresh random byte
- $2001-$5FFF: unmapped, reads 0, writes ignored
- $6000-$7FFF: 8 KiB battery-backed save RAM (read/write)
- $8000-$FFFF: 32 KiB ROM, mirrored via `& 0x7FFF` (read-only)

Vectors inside ROM:
- $FFFA/$FFFB: IRQ (used only by `BreakMode::Interrupt`)
- $FFFC/$FFFD: reset
- $FFFE/$FFFF: NMI (unused)

Writes to ROM, the placeholder register, or unmapped space are silently
discarded. That is the modeled hardware behavior, not an error.
"#]

pub mod bank;

use log::trace;

use crate::error::{CpuError, Result};
use crate::random::RandomSource;
pub use bank::Bank;

/// Every address is reduced with this mask before decoding.
pub const ADDRESS_MASK: u32 = 0xFFFF;

pub const RAM_SIZE: usize = 0x2000;
pub const SAVE_RAM_SIZE: usize = 0x2000;
pub const ROM_SIZE: usize = 0x8000;

pub const PLACEHOLDER_REGISTER: u16 = 0x2000;
pub const IRQ_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const NMI_VECTOR: u16 = 0xFFFE;

pub type Ram = Bank<RAM_SIZE>;
pub type SaveRam = Bank<SAVE_RAM_SIZE>;
pub type Rom = Bank<ROM_SIZE>;

/// Backing region an address decodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Ram,
    Placeholder,
    Unmapped,
    SaveRam,
    Rom,
}

impl Region {
    /// Decode an (unmasked) address.
    pub fn decode(addr: u32) -> Self {
        match (addr & ADDRESS_MASK) as u16 {
            0x0000..=0x1FFF => Region::Ram,
            0x2000 => Region::Placeholder,
            0x2001..=0x5FFF => Region::Unmapped,
            0x6000..=0x7FFF => Region::SaveRam,
            0x8000..=0xFFFF => Region::Rom,
        }
    }
}

/// RAM, save RAM and ROM storage plus the open-bus random source.
pub struct MemoryMap {
    ram: Ram,
    save_ram: SaveRam,
    rom: Rom,
    random: Box<dyn RandomSource>,
}

impl std::fmt::Debug for MemoryMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryMap")
            .field("ram", &self.ram)
            .field("save_ram", &self.save_ram)
            .field("rom", &self.rom)
            .finish_non_exhaustive()
    }
}

impl MemoryMap {
    /// Create a zero-filled memory map reading open bus from `random`.
    pub fn new(random: impl RandomSource + 'static) -> Self {
        Self {
            ram: Ram::new(),
            save_ram: SaveRam::new(),
            rom: Rom::new(),
            random: Box::new(random),
        }
    }

    /// CPU-visible read.
    pub fn read(&mut self, addr: u32) -> u8 {
        let addr = addr & ADDRESS_MASK;
        match Region::decode(addr) {
            Region::Ram => self.ram.read(addr),
            Region::Rom => self.rom.read(addr),
            Region::SaveRam => self.save_ram.read(addr),
            Region::Placeholder => self.random.next_byte(),
            Region::Unmapped => 0,
        }
    }

    /// CPU-visible write. Only RAM and save RAM accept data.
    pub fn write(&mut self, addr: u32, value: u8) {
        let addr = addr & ADDRESS_MASK;
        match Region::decode(addr) {
            Region::Ram => self.ram.write(addr, value),
            Region::SaveRam => self.save_ram.write(addr, value),
            region => trace!("discarded write ${value:02X} -> ${addr:04X} ({region:?})"),
        }
    }

    /// Little-endian word read; each byte address is masked on its own, so
    /// a read at $FFFF takes its high byte from $0000.
    pub fn read_word(&mut self, addr: u32) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Pull one byte from the injected random source.
    #[inline]
    pub fn random_byte(&mut self) -> u8 {
        self.random.next_byte()
    }

    /// Fill all of RAM with random bytes (power-on garbage).
    pub fn randomize_ram(&mut self) {
        for b in self.ram.as_mut_slice() {
            *b = self.random.next_byte();
        }
    }

    /// Which region an address decodes to.
    #[inline]
    pub fn region(&self, addr: u32) -> Region {
        Region::decode(addr)
    }

    // ---------------------------------------------------------------------
    // Host access to backing storage
    // ---------------------------------------------------------------------

    /// Copy a ROM image into the ROM window. Images shorter than 32 KiB are
    /// repeated to fill it (a 16 KiB image shows up at $8000 and $C000).
    pub fn load_rom(&mut self, image: &[u8]) -> Result<()> {
        if image.len() > ROM_SIZE {
            return Err(CpuError::RomTooLarge { len: image.len() });
        }
        let rom = self.rom.as_mut_slice();
        if image.is_empty() {
            rom.fill(0);
            return Ok(());
        }
        for (i, b) in rom.iter_mut().enumerate() {
            *b = image[i % image.len()];
        }
        Ok(())
    }

    /// Direct ROM storage; index 0 is $8000.
    #[inline]
    pub fn rom_mut(&mut self) -> &mut [u8] {
        self.rom.as_mut_slice()
    }

    #[inline]
    pub fn rom(&self) -> &[u8] {
        self.rom.as_slice()
    }

    #[inline]
    pub fn ram(&self) -> &[u8] {
        self.ram.as_slice()
    }

    #[inline]
    pub fn ram_mut(&mut self) -> &mut [u8] {
        self.ram.as_mut_slice()
    }

    /// Battery-backed save RAM contents, for persisting by the host.
    #[inline]
    pub fn save_ram(&self) -> &[u8] {
        self.save_ram.as_slice()
    }

    /// Restore a previously persisted save RAM image (must be 8 KiB).
    pub fn load_save_ram(&mut self, image: &[u8]) -> Result<()> {
        if image.len() != SAVE_RAM_SIZE {
            return Err(CpuError::SaveRamSizeMismatch { len: image.len() });
        }
        self.save_ram.as_mut_slice().copy_from_slice(image);
        Ok(())
    }
}
