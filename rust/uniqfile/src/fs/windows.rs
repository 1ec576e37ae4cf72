//! Windows-specific exclusive file creation.
//!
//! `OpenOptions::create_new` maps to `CREATE_NEW`, which fails with
//! `ERROR_FILE_EXISTS` when the path is taken. Windows has no mode bits; the
//! only part of `permissions` honored is the owner write bit, whose absence
//! creates the file with `FILE_ATTRIBUTE_READONLY`.

use std::{fs::OpenOptions, path::Path};

/// Creates a new file with read and write access.
///
/// # Arguments
///
/// * `file_path` - Path where the new file should be created
/// * `permissions` - Unix-style mode bits; only `0o200` is inspected
///
/// # Errors
///
/// Returns an error if:
/// - The file already exists (`ErrorKind::AlreadyExists`)
/// - The parent directory doesn't exist
/// - Insufficient permissions to create the file
pub fn create_exclusive(file_path: &Path, permissions: u32) -> std::io::Result<std::fs::File> {
    use std::os::windows::fs::OpenOptionsExt;
    use windows_sys::Win32::Storage::FileSystem::{
        FILE_ATTRIBUTE_NORMAL, FILE_ATTRIBUTE_READONLY,
    };

    let attributes = if permissions & 0o200 == 0 {
        FILE_ATTRIBUTE_READONLY
    } else {
        FILE_ATTRIBUTE_NORMAL
    };
    OpenOptions::new()
        .create_new(true)
        .read(true)
        .write(true)
        .attributes(attributes)
        .open(file_path)
}
