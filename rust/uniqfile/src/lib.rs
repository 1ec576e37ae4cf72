//! Exclusive creation of uniquely named files.
//!
//! Every call picks a candidate name `prefix.<16 hex digits>suffix` in the
//! target directory and creates it with an atomic "create only if absent"
//! call, so concurrent callers (threads or processes) can never end up with
//! the same file. A taken name is retried with a new random component, up to
//! a bounded number of attempts; repeated collisions reseed the random source.
//!
//! ```no_run
//! let file = uniqfile::create_with_suffix("", "report", ".csv")?;
//! println!("{}", file.path().display());
//! std::fs::remove_file(file.path())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The created files are never removed by this crate.

use std::{ffi::OsStr, path::Path};

pub mod creator;
pub mod fs;
pub mod policy;
pub mod suffix;

pub use creator::{TempFile, TempFileCreator, TempFileCreatorBuilder};
pub use fs::{ExclusiveCreate, OsExclusiveCreate};
pub use policy::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RESEED_AFTER, RetryPolicy};
pub use suffix::{SUFFIX_LEN, SuffixSource};
pub use uniqfile_common::{Error, ErrorKind, Result};

/// Permissions of files created without an explicit mode (owner read/write).
pub const DEFAULT_PERMISSIONS: u32 = 0o600;

/// Creates `dir/prefix.<random>` with `0o600` permissions.
///
/// An empty `dir` stands for [`std::env::temp_dir`].
pub fn create(dir: impl AsRef<Path>, prefix: impl AsRef<OsStr>) -> Result<TempFile> {
    TempFileCreator::new().create(dir, prefix)
}

/// Creates `dir/prefix.<random>suffix` with `0o600` permissions.
pub fn create_with_suffix(
    dir: impl AsRef<Path>,
    prefix: impl AsRef<OsStr>,
    suffix: impl AsRef<OsStr>,
) -> Result<TempFile> {
    TempFileCreator::new().create_with_suffix(dir, prefix, suffix)
}

/// Creates `dir/prefix.<random>` with the given permissions.
pub fn create_with_mode(
    dir: impl AsRef<Path>,
    prefix: impl AsRef<OsStr>,
    permissions: u32,
) -> Result<TempFile> {
    TempFileCreator::new().create_with_mode(dir, prefix, permissions)
}

/// Creates `dir/prefix.<random>suffix` with the given permissions.
pub fn create_full(
    dir: impl AsRef<Path>,
    prefix: impl AsRef<OsStr>,
    suffix: impl AsRef<OsStr>,
    permissions: u32,
) -> Result<TempFile> {
    TempFileCreator::new().create_full(dir, prefix, suffix, permissions)
}
