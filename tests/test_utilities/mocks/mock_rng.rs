use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Seeded RNG that refuses to produce bytes after a fixed number of draws
pub struct ExhaustibleRng {
    inner: StdRng,
    remaining: usize,
}

impl ExhaustibleRng {
    pub fn new(draws: usize) -> Self {
        Self {
            inner: StdRng::seed_from_u64(1),
            remaining: draws,
        }
    }
}

impl RngCore for ExhaustibleRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        if self.remaining == 0 {
            return Err(rand::Error::new("entropy source exhausted"));
        }
        self.remaining -= 1;
        self.inner.try_fill_bytes(dest)
    }
}
