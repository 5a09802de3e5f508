//! Deterministic generator seeded from a password digest.
//!
//! Output is SHA-512 in counter mode: block `i` is `SHA-512(seed || i)` with
//! `i` encoded as a big-endian `u64`. The stream depends only on the seed and
//! the position reached, so the way draws are split never changes the bytes.

use rand_core::{RngCore, impls};
use sha2::{Digest, Sha512};
use zeroize::Zeroizing;

use super::{BLOCK_LEN, COUNTER_LEN, SEED_LEN};

pub struct SeededRandom {
    seed: Zeroizing<[u8; SEED_LEN]>,
    counter: u64,
    block: Zeroizing<[u8; BLOCK_LEN]>,
    // next unread byte in `block`; BLOCK_LEN means exhausted
    pos: usize,
}

impl SeededRandom {
    pub fn new(seed: &[u8; SEED_LEN]) -> Self {
        Self {
            seed: Zeroizing::new(*seed),
            counter: 0,
            block: Zeroizing::new([0u8; BLOCK_LEN]),
            pos: BLOCK_LEN,
        }
    }

    /// Draws the next `n` bytes, advancing the generator.
    pub fn next_bytes(&mut self, n: usize) -> Zeroizing<Vec<u8>> {
        let mut out = Zeroizing::new(vec![0u8; n]);
        self.fill(&mut out);
        out
    }

    /// Total number of bytes handed out so far.
    pub fn position(&self) -> u64 {
        (self.counter * BLOCK_LEN as u64).saturating_sub((BLOCK_LEN - self.pos) as u64)
    }

    fn refill(&mut self) {
        let mut hasher = Sha512::new();
        hasher.update(&self.seed[..]);
        let counter: [u8; COUNTER_LEN] = self.counter.to_be_bytes();
        hasher.update(counter);
        self.block.copy_from_slice(&hasher.finalize());
        self.counter += 1;
        self.pos = 0;
    }

    fn fill(&mut self, dest: &mut [u8]) {
        let mut written = 0;
        while written < dest.len() {
            if self.pos == BLOCK_LEN {
                self.refill();
            }
            let take = (BLOCK_LEN - self.pos).min(dest.len() - written);
            dest[written..written + take].copy_from_slice(&self.block[self.pos..self.pos + take]);
            self.pos += take;
            written += take;
        }
    }
}

impl RngCore for SeededRandom {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.fill(dst);
    }
}
