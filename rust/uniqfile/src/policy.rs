//! Retry configuration for the unique file creator.

use uniqfile_common::{Result, verify_arg};

/// Number of creation attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// Number of collisions tolerated before the suffix source is reseeded.
pub const DEFAULT_RESEED_AFTER: u32 = 10;

/// Controls how [`TempFileCreator`](crate::TempFileCreator) reacts to name
/// collisions.
///
/// With the defaults, once more than `reseed_after` collisions have been
/// observed within a single call, every further collision reseeds the suffix
/// source. Setting `reset_after_reseed` restarts the count after each reseed
/// instead, so that a reseed happens once per `reseed_after + 1` collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    reseed_after: u32,
    reset_after_reseed: bool,
}

impl RetryPolicy {
    pub fn new() -> RetryPolicy {
        RetryPolicy {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            reseed_after: DEFAULT_RESEED_AFTER,
            reset_after_reseed: false,
        }
    }

    /// Sets the total number of creation attempts per call.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the collision count that must be exceeded before reseeding.
    pub fn reseed_after(mut self, reseed_after: u32) -> Self {
        self.reseed_after = reseed_after;
        self
    }

    /// Restarts the collision count after every reseed.
    pub fn reset_after_reseed(mut self, reset: bool) -> Self {
        self.reset_after_reseed = reset;
        self
    }

    pub fn attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn reseed_threshold(&self) -> u32 {
        self.reseed_after
    }

    pub fn resets_after_reseed(&self) -> bool {
        self.reset_after_reseed
    }

    /// Checks that the policy allows at least one attempt.
    pub fn validate(&self) -> Result<()> {
        verify_arg!(max_attempts, self.max_attempts > 0);
        Ok(())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::new()
    }
}
