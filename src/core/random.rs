//! Process-wide random source for identifier generation.
//!
//! By default every call draws from the calling thread's generator. Setting
//! `MCP_RANDOM_SEED` switches to a single seeded generator shared behind a
//! mutex, which makes generated output reproducible across runs.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Default)]
pub enum RandomSource {
    /// Thread-local generator, seeded from the OS.
    #[default]
    Thread,
    /// A seeded generator shared by all callers.
    Seeded(Arc<Mutex<StdRng>>),
}

impl RandomSource {
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Arc::new(Mutex::new(StdRng::seed_from_u64(seed))))
    }

    /// Build from an optional seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Self::Thread, Self::seeded)
    }

    pub fn is_seeded(&self) -> bool {
        matches!(self, Self::Seeded(_))
    }

    /// Run `f` with exclusive access to the generator.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match self {
            Self::Thread => f(&mut rand::thread_rng()),
            Self::Seeded(rng) => {
                // A panic inside `f` cannot leave the generator in an invalid state.
                let mut guard = rng.lock().unwrap_or_else(PoisonError::into_inner);
                f(&mut *guard)
            }
        }
    }
}
