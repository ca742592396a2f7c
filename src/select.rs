//! Random selection of quotes

use std::time::{SystemTime, UNIX_EPOCH};

/// Chooses an index into a collection
pub trait Selector {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Seeded xorshift64 generator
///
/// Not cryptographic. The same seed always yields the same sequence.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        // xorshift gets stuck at zero
        Self { state: seed.max(1) }
    }

    /// Seed from the system clock
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(nanos ^ 0x9E37_79B9_7F4A_7C15)
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl Selector for SeededRng {
    fn pick(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }
}
