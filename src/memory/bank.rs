/*!
Bank module: fixed-size, power-of-two byte storage with masked indexing.

Every backing region of the memory map (RAM, save RAM, ROM) is a `Bank`.
Callers pass CPU-visible addresses; the bank masks them down to its own size,
so a bank smaller than its address window is mirrored across that window
automatically (this is how the 32 KiB ROM covers $8000-$FFFF via `& 0x7FFF`).
*/

/// Byte storage of `SIZE` bytes. `SIZE` must be a power of two.
#[derive(Clone)]
pub struct Bank<const SIZE: usize> {
    data: Box<[u8]>,
}

impl<const SIZE: usize> Default for Bank<SIZE> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> std::fmt::Debug for Bank<SIZE> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bank").field("size", &SIZE).finish()
    }
}

impl<const SIZE: usize> Bank<SIZE> {
    const MASK: usize = {
        assert!(SIZE.is_power_of_two());
        SIZE - 1
    };

    /// Create a zero-filled bank.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: vec![0; SIZE].into_boxed_slice(),
        }
    }

    /// Read a byte, mirroring `addr` into the bank.
    #[inline]
    pub fn read(&self, addr: u32) -> u8 {
        self.data[Self::index(addr)]
    }

    /// Write a byte, mirroring `addr` into the bank.
    #[inline]
    pub fn write(&mut self, addr: u32, value: u8) {
        self.data[Self::index(addr)] = value;
    }

    /// Clear contents to 0.
    #[inline]
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Physical index for an address.
    #[inline]
    pub fn index(addr: u32) -> usize {
        (addr as usize) & Self::MASK
    }
}
