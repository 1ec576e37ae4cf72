//! Exclusive file creation on the local file system.

use std::{fs::File, io, path::Path};

#[cfg_attr(any(unix, target_os = "redox", target_os = "wasi"), path = "unix.rs")]
#[cfg_attr(windows, path = "windows.rs")]
mod platform;

pub use platform::*;

/// An atomic "create only if absent" primitive.
///
/// Implementations must report a pre-existing file at `path` with
/// [`io::ErrorKind::AlreadyExists`], so that the caller can tell a name
/// collision apart from every other failure.
pub trait ExclusiveCreate {
    /// Creates a new file at `path` with read and write access, applying
    /// `permissions` as part of the creation itself.
    fn create_exclusive(&self, path: &Path, permissions: u32) -> io::Result<File>;
}

/// The operating system's exclusive-create primitive.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsExclusiveCreate;

impl ExclusiveCreate for OsExclusiveCreate {
    fn create_exclusive(&self, path: &Path, permissions: u32) -> io::Result<File> {
        create_exclusive(path, permissions)
    }
}

/// Returns `true` if the error means that the path is already taken.
pub fn is_collision(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::AlreadyExists
}
