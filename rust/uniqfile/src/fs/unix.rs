//! Unix-specific exclusive file creation.
//!
//! Relies on `O_CREAT | O_EXCL` (through `OpenOptions::create_new`), which
//! fails with `EEXIST` when the path is taken, and passes the permission bits
//! to `open(2)` so the file never exists with a wider mode. The process umask
//! still applies to the requested bits.

use std::{fs::OpenOptions, path::Path};

/// Creates a new file with read and write access and the given permission bits.
///
/// # Arguments
///
/// * `file_path` - Path where the new file should be created
/// * `permissions` - Mode bits (e.g. `0o600`) handed to the creating `open` call
///
/// # Errors
///
/// Returns an error if:
/// - The file already exists (`ErrorKind::AlreadyExists`)
/// - The parent directory doesn't exist
/// - Insufficient permissions to create the file
/// - The file system is full or read-only
pub fn create_exclusive(file_path: &Path, permissions: u32) -> std::io::Result<std::fs::File> {
    let mut options = OpenOptions::new();
    options.create_new(true).read(true).write(true);

    #[cfg(not(target_os = "wasi"))]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(permissions);
    }
    #[cfg(target_os = "wasi")]
    let _ = permissions;

    options.open(file_path)
}
