//! Random byte capability.
//!
//! The core never generates randomness itself. Power-on state and reads of
//! the placeholder hardware register at $2000 pull bytes from a host-supplied
//! `RandomSource`. The implementations here are deterministic and exist for
//! hosts that want reproducible runs and for tests.

/// Source of "undefined" bytes (power-on garbage, open bus).
pub trait RandomSource {
    fn next_byte(&mut self) -> u8;
}

/// Always returns the same byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSource(pub u8);

impl RandomSource for FixedSource {
    #[inline]
    fn next_byte(&mut self) -> u8 {
        self.0
    }
}

/// Cycles through a fixed list of bytes. An empty list yields zeros.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    bytes: Vec<u8>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for SequenceSource {
    fn next_byte(&mut self) -> u8 {
        if self.bytes.is_empty() {
            return 0;
        }
        let b = self.bytes[self.cursor];
        self.cursor = (self.cursor + 1) % self.bytes.len();
        b
    }
}

/// Adapter for host generators written as closures.
///
/// ```
/// use cart6502::{FnSource, RandomSource};
///
/// let mut n = 0u8;
/// let mut src = FnSource(move || {
///     n = n.wrapping_add(3);
///     n
/// });
/// assert_eq!(src.next_byte(), 3);
/// assert_eq!(src.next_byte(), 6);
/// ```
pub struct FnSource<F>(pub F);

impl<F: FnMut() -> u8> RandomSource for FnSource<F> {
    #[inline]
    fn next_byte(&mut self) -> u8 {
        (self.0)()
    }
}
