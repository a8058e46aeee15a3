//! Random sources for carving and braiding.
//!
//! Generation only ever asks for a float in `[0, 1)`, so any source with that
//! capability can drive it. Seeded sources are reproducible across runs.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

pub trait RandomSource {
    /// Next uniformly distributed value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Uniform index in `0..len`. `len` must be non-zero.
pub fn pick_index<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0);
    let index = (rng.next_f64() * len as f64) as usize;
    index.min(len - 1)
}

const F64_UNIT: f64 = 1.0 / (1_u64 << 53) as f64;

/// ChaCha8 stream keyed from a 64-bit seed.
pub struct ChaChaSource {
    rng: ChaCha8Rng,
}

impl ChaChaSource {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::from_seed(expand_seed(seed)) }
    }

    /// Non-reproducible source for requests that carry no seed.
    pub fn from_entropy() -> Self {
        Self::from_seed(runtime_seed())
    }
}

impl RandomSource for ChaChaSource {
    fn next_f64(&mut self) -> f64 {
        (self.rng.next_u64() >> 11) as f64 * F64_UNIT
    }
}

fn expand_seed(seed: u64) -> [u8; 32] {
    let mut key = [0_u8; 32];
    for (stream, chunk) in key.chunks_exact_mut(8).enumerate() {
        chunk.copy_from_slice(&mix_seed_stream(seed, stream as u64).to_le_bytes());
    }
    key
}

fn mix_seed_stream(seed: u64, stream: u64) -> u64 {
    let mut mixed = seed ^ stream.wrapping_mul(0xD6E8_FD9A_5B89_7A4D);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    mixed ^ (mixed >> 33)
}

static RUNTIME_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

fn runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = RUNTIME_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed_stream(entropy, counter)
}
