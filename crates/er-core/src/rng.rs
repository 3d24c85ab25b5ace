//! Injectable RNG for detour synthesis and traffic simulation.
//!
//! The route algorithms never reach for a thread-local or global generator;
//! they take `&mut R where R: rand::Rng`.  `DetourRng` is the concrete source
//! used by sessions:
//!
//! - `DetourRng::new(seed)` gives byte-for-byte reproducible detours, which
//!   is what tests and recorded demos want.
//! - `DetourRng::from_entropy()` gives the visual variety of a live session.
//!
//! Everything else (`gen_range`, `gen_bool`, ...) comes from `rand::Rng`
//! through the `RngCore` impl below.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// Session-level RNG.  Not shared between threads; give each its own.
pub struct DetourRng(SmallRng);

impl DetourRng {
    pub fn new(seed: u64) -> Self {
        DetourRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy.  Not reproducible.
    pub fn from_entropy() -> Self {
        DetourRng(SmallRng::from_entropy())
    }
}

impl RngCore for DetourRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}
