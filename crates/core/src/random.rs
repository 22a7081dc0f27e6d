//! Injected random-number capability and its seeded ChaCha implementation.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

/// Uniform draws consumed by map generation. All draws come from one sequential stream.
pub trait RandomSource {
    /// Uniform float in `[min, max)`.
    fn uniform_float(&mut self, min: f32, max: f32) -> f32;
    /// Uniform integer in `[min, max]`, both bounds inclusive.
    fn uniform_int(&mut self, min: i32, max: i32) -> i32;
    fn reseed(&mut self, seed: u64);
    /// Reseed from runtime entropy.
    fn randomize(&mut self);
}

pub struct ChaChaSource {
    seed: u64,
    rng: ChaCha8Rng,
}

impl ChaChaSource {
    pub fn new(seed: u64) -> Self {
        Self { seed, rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn from_runtime_seed() -> Self {
        Self::new(generate_runtime_seed())
    }

    /// Seed of the current stream; capture it before a run to reproduce that run.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for ChaChaSource {
    fn uniform_float(&mut self, min: f32, max: f32) -> f32 {
        let unit = (self.rng.next_u32() >> 8) as f32 / (1_u32 << 24) as f32;
        min + unit * (max - min)
    }

    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let range_size = (i64::from(max) - i64::from(min) + 1) as u64;
        (i64::from(min) + (self.rng.next_u64() % range_size) as i64) as i32
    }

    fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    fn randomize(&mut self) {
        self.reseed(generate_runtime_seed());
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
