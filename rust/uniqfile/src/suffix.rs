//! Random suffix generation for candidate file names.

use std::{
    sync::{
        Arc, Mutex, MutexGuard, OnceLock, PoisonError,
        atomic::{AtomicU64, Ordering},
    },
    time::{SystemTime, UNIX_EPOCH},
};

/// Length of every suffix returned by [`SuffixSource::next_suffix`]: a `.`
/// separator followed by 16 hex digits.
pub const SUFFIX_LEN: usize = 17;

/// A shared, lock-protected pseudo-random generator of file name suffixes.
///
/// Suffixes are not cryptographically secure. Uniqueness of the created files
/// is enforced by the exclusive create, the suffix only keeps the collision
/// rate low. When a caller keeps running into existing names (for instance
/// because two sources were seeded identically), it calls [`reseed`] to move
/// the generator onto a fresh sequence.
///
/// [`reseed`]: SuffixSource::reseed
#[derive(Debug)]
pub struct SuffixSource {
    rng: Mutex<fastrand::Rng>,
    reseeds: AtomicU64,
}

impl SuffixSource {
    /// Creates a source seeded from the wall clock.
    pub fn new() -> SuffixSource {
        SuffixSource::with_seed(time_seed())
    }

    /// Creates a source producing a deterministic sequence.
    pub fn with_seed(seed: u64) -> SuffixSource {
        SuffixSource {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
            reseeds: AtomicU64::new(0),
        }
    }

    /// Returns the process-wide source, creating it on first use.
    pub fn global() -> Arc<SuffixSource> {
        static GLOBAL: OnceLock<Arc<SuffixSource>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(SuffixSource::new())).clone()
    }

    /// Produces the next suffix, e.g. `.3f9a0c17d2b84e65`.
    pub fn next_suffix(&self) -> String {
        let value = self.lock().u64(..);
        format!(".{value:016x}")
    }

    /// Replaces the generator with one seeded from the wall clock.
    pub fn reseed(&self) {
        self.reseed_with(time_seed());
    }

    /// Replaces the generator with one seeded from `seed`.
    pub fn reseed_with(&self, seed: u64) {
        *self.lock() = fastrand::Rng::with_seed(seed);
        self.reseeds.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of times the generator has been replaced since construction.
    ///
    /// **Note**: intended for diagnostics; the value may be outdated in a
    /// concurrent environment.
    pub fn reseed_count(&self) -> u64 {
        self.reseeds.load(Ordering::Relaxed)
    }

    fn lock(&self) -> MutexGuard<'_, fastrand::Rng> {
        // A panic cannot leave the generator half-updated, so a poisoned
        // lock still guards a usable state.
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SuffixSource {
    fn default() -> Self {
        SuffixSource::new()
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
