//! The collision-retrying unique file creator.

use std::{
    borrow::Cow,
    ffi::{OsStr, OsString},
    fs::File,
    io::{self, Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use uniqfile_common::{Error, Result};

use crate::{
    DEFAULT_PERMISSIONS,
    fs::{self, ExclusiveCreate, OsExclusiveCreate},
    policy::RetryPolicy,
    suffix::SuffixSource,
};

/// Creates files under names of the form `prefix.<16 hex digits>suffix`,
/// retrying with a new random component whenever the name is already taken.
///
/// The creator does not own the files it creates: each successful call hands
/// an open [`TempFile`] to the caller, who is responsible for closing and
/// removing it.
#[derive(Debug, Clone)]
pub struct TempFileCreator<C = OsExclusiveCreate> {
    source: Arc<SuffixSource>,
    primitive: C,
    policy: RetryPolicy,
}

impl TempFileCreator {
    /// A creator backed by the process-wide suffix source, the OS exclusive
    /// create and the default retry policy.
    pub fn new() -> TempFileCreator {
        TempFileCreator {
            source: SuffixSource::global(),
            primitive: OsExclusiveCreate,
            policy: RetryPolicy::default(),
        }
    }

    pub fn builder() -> TempFileCreatorBuilder {
        TempFileCreatorBuilder {
            source: None,
            primitive: OsExclusiveCreate,
            policy: RetryPolicy::default(),
        }
    }
}

impl Default for TempFileCreator {
    fn default() -> Self {
        TempFileCreator::new()
    }
}

impl<C: ExclusiveCreate> TempFileCreator<C> {
    pub fn suffix_source(&self) -> &Arc<SuffixSource> {
        &self.source
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Creates a file named `prefix.<random>` with `0o600` permissions.
    pub fn create(&self, dir: impl AsRef<Path>, prefix: impl AsRef<OsStr>) -> Result<TempFile> {
        self.create_full(dir, prefix, "", DEFAULT_PERMISSIONS)
    }

    /// Creates a file named `prefix.<random>suffix` with `0o600` permissions.
    pub fn create_with_suffix(
        &self,
        dir: impl AsRef<Path>,
        prefix: impl AsRef<OsStr>,
        suffix: impl AsRef<OsStr>,
    ) -> Result<TempFile> {
        self.create_full(dir, prefix, suffix, DEFAULT_PERMISSIONS)
    }

    /// Creates a file named `prefix.<random>` with the given permissions.
    pub fn create_with_mode(
        &self,
        dir: impl AsRef<Path>,
        prefix: impl AsRef<OsStr>,
        permissions: u32,
    ) -> Result<TempFile> {
        self.create_full(dir, prefix, "", permissions)
    }

    /// Creates a file named `prefix.<random>suffix` in `dir`.
    ///
    /// # Arguments
    ///
    /// * `dir` - Target directory; an empty path stands for
    ///   [`std::env::temp_dir`]. The directory must exist.
    /// * `prefix`, `suffix` - Placed verbatim around the random component.
    ///   They are not validated, so a path separator inside them leads to a
    ///   nested path.
    /// * `permissions` - Mode bits applied by the creating call itself.
    ///
    /// # Errors
    ///
    /// * [`ErrorKind::AttemptsExhausted`] if every attempt allowed by the
    ///   policy hit an existing file.
    /// * [`ErrorKind::Io`] with the candidate path as context for any other
    ///   failure, returned as soon as it occurs.
    ///
    /// [`ErrorKind::AttemptsExhausted`]: uniqfile_common::ErrorKind::AttemptsExhausted
    /// [`ErrorKind::Io`]: uniqfile_common::ErrorKind::Io
    pub fn create_full(
        &self,
        dir: impl AsRef<Path>,
        prefix: impl AsRef<OsStr>,
        suffix: impl AsRef<OsStr>,
        permissions: u32,
    ) -> Result<TempFile> {
        let dir = resolve_dir(dir.as_ref());
        let (prefix, suffix) = (prefix.as_ref(), suffix.as_ref());

        let mut collisions = 0u32;
        for _ in 0..self.policy.attempts() {
            let name = candidate_name(prefix, &self.source.next_suffix(), suffix);
            let path = dir.join(name);
            match self.primitive.create_exclusive(&path, permissions) {
                Ok(file) => return Ok(TempFile { file, path }),
                Err(e) if fs::is_collision(&e) => {
                    collisions += 1;
                    log::trace!("{} already exists ({collisions} collisions)", path.display());
                    if collisions > self.policy.reseed_threshold() {
                        log::debug!("reseeding suffix source after {collisions} collisions");
                        self.source.reseed();
                        if self.policy.resets_after_reseed() {
                            collisions = 0;
                        }
                    }
                }
                Err(e) => return Err(Error::io(path.display().to_string(), e)),
            }
        }

        log::debug!(
            "no unique name in {} after {} attempts",
            dir.display(),
            self.policy.attempts()
        );
        Err(Error::attempts_exhausted(self.policy.attempts()))
    }
}

pub struct TempFileCreatorBuilder<C = OsExclusiveCreate> {
    source: Option<Arc<SuffixSource>>,
    primitive: C,
    policy: RetryPolicy,
}

impl<C: ExclusiveCreate> TempFileCreatorBuilder<C> {
    /// Uses `source` instead of the process-wide suffix source.
    pub fn suffix_source(mut self, source: Arc<SuffixSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the exclusive-create primitive.
    pub fn primitive<P: ExclusiveCreate>(self, primitive: P) -> TempFileCreatorBuilder<P> {
        TempFileCreatorBuilder {
            source: self.source,
            primitive,
            policy: self.policy,
        }
    }

    /// Validates the policy and creates the creator.
    pub fn build(self) -> Result<TempFileCreator<C>> {
        self.policy.validate()?;
        Ok(TempFileCreator {
            source: self.source.unwrap_or_else(SuffixSource::global),
            primitive: self.primitive,
            policy: self.policy,
        })
    }
}

/// A newly created file, together with the path it was created at.
///
/// Dropping a `TempFile` closes the file but leaves it on disk.
#[derive(Debug)]
pub struct TempFile {
    file: File,
    path: PathBuf,
}

impl TempFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn as_file(&self) -> &File {
        &self.file
    }

    pub fn as_file_mut(&mut self) -> &mut File {
        &mut self.file
    }

    pub fn into_file(self) -> File {
        self.file
    }

    pub fn into_parts(self) -> (File, PathBuf) {
        (self.file, self.path)
    }
}

impl AsRef<Path> for TempFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl Read for TempFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for TempFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Seek for TempFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }
}

fn resolve_dir(dir: &Path) -> Cow<'_, Path> {
    if dir.as_os_str().is_empty() {
        Cow::Owned(std::env::temp_dir())
    } else {
        Cow::Borrowed(dir)
    }
}

fn candidate_name(prefix: &OsStr, random: &str, suffix: &OsStr) -> OsString {
    let mut name = OsString::with_capacity(prefix.len() + random.len() + suffix.len());
    name.push(prefix);
    name.push(random);
    name.push(suffix);
    name
}

#[cfg(test)]
mod tests {
    use std::{ffi::OsStr, path::Path};

    use super::{candidate_name, resolve_dir};

    #[test]
    fn test_candidate_name() {
        let name = candidate_name(OsStr::new("log"), ".00ff", OsStr::new(".txt"));
        assert_eq!(name, "log.00ff.txt");
        let name = candidate_name(OsStr::new(""), ".00ff", OsStr::new(""));
        assert_eq!(name, ".00ff");
    }

    #[test]
    fn test_resolve_dir() {
        assert_eq!(resolve_dir(Path::new("")), std::env::temp_dir());
        assert_eq!(resolve_dir(Path::new(".")), Path::new("."));
        assert_eq!(resolve_dir(Path::new("/var/spool")), Path::new("/var/spool"));
    }
}
