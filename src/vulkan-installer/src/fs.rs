//! SAFETY: `TrustedDir` and `TrustedFile` instances can only be created by this crate, and are
//! never created from paths constructed using data received over the network. Subpaths are
//! always checked with `RelativePath` before they are joined onto a trusted directory.
use anyhow::{bail, Context, Result};
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tempfile::TempDir;

/// Wraps a directory path that is known to be sanitary.
#[derive(Debug)]
pub enum TrustedDir {
    /// An already sanitized directory path
    Sanitized(PathBuf),
    /// A temporary directory, removed when dropped
    Temp(TempDir),
}

impl TrustedDir {
    /// Creates a new, uniquely named directory under the OS temp root.
    pub fn tempdir() -> Result<Self> {
        let temp = tempfile::Builder::new()
            .prefix("vulkan-sdk-")
            .tempdir()
            .context("Failed to create temporary directory")?;
        Ok(Self::Temp(temp))
    }

    /// Returns the absolute path to the directory. The path is checked to make sure it exists and
    /// is a directory.
    pub fn as_path(&self) -> Result<PathBuf> {
        let path = match self {
            Self::Sanitized(path) => path.to_owned(),
            Self::Temp(temp_dir) => temp_dir.path().to_path_buf(),
        };
        if !path.exists() {
            bail!(io::Error::new(
                io::ErrorKind::NotFound,
                format!("path does not exist: {:?}", path),
            ));
        }
        if !path.is_dir() {
            bail!(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("path is not a directory: {:?}", path),
            ));
        }
        Ok(path)
    }

    /// Creates a sanitized path for a file that may not yet exist.
    pub fn join_file<R>(&self, subpath: R) -> Result<TrustedFile>
    where
        R: TryInto<RelativePath, Error = anyhow::Error>,
    {
        let subpath = subpath.try_into()?;
        Ok(TrustedFile(self.as_path()?.join(subpath.into_path())))
    }

    /// Recursively removes the directory and everything in it.
    pub fn remove(self) -> Result<()> {
        match self {
            Self::Temp(temp) => {
                let path = temp.path().to_path_buf();
                temp.close()
                    .with_context(|| format!("Failed to remove {:?}", path))
            }
            Self::Sanitized(path) => fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to remove {:?}", path)),
        }
    }

    /// Detaches a temporary directory from its drop guard so it stays on disk.
    pub fn preserve(self) -> TrustedDir {
        match self {
            Self::Temp(temp) => Self::Sanitized(temp.keep()),
            sanitized => sanitized,
        }
    }
}

impl Display for TrustedDir {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sanitized(path) => path.display().fmt(f),
            Self::Temp(temp) => temp.path().display().fmt(f),
        }
    }
}

/// A file path beneath a `TrustedDir`.
#[derive(Clone, Debug)]
pub struct TrustedFile(PathBuf);

impl TrustedFile {
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    #[cfg(test)]
    pub fn exists(&self) -> bool {
        self.0.exists()
    }

    /// SAFETY: we only write to sanitized paths
    pub async fn write_async(&self, contents: &[u8]) -> Result<()> {
        tokio::fs::write(&self.0, contents)
            .await
            .with_context(|| format!("Failed to write {}", self))
    }
}

impl Display for TrustedFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

/// A sanitized relative path that can be used to traverse into a `TrustedDir`.
#[derive(Clone, Debug)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    pub fn into_path(self) -> PathBuf {
        self.0
    }
}

impl TryFrom<&str> for RelativePath {
    type Error = anyhow::Error;

    fn try_from(path: &str) -> Result<Self, Self::Error> {
        let path = PathBuf::from(path);
        check_sanitary_relative_path(&path)?;
        Ok(Self(path))
    }
}

fn check_sanitary_relative_path(path: &Path) -> io::Result<()> {
    if path.is_absolute() {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "absolute paths not allowed",
        ));
    }

    if path.as_os_str().is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty path"));
    }

    for c in path.components() {
        match c {
            Component::Normal(_) => {}
            // reject ., .., prefix (Windows), or root components
            Component::CurDir
            | Component::ParentDir
            | Component::Prefix(_)
            | Component::RootDir => {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "invalid component",
                ))
            }
        }
    }

    Ok(())
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn test_trusted_dir_tempdir() -> Result<()> {
        let temp_dir = TrustedDir::tempdir()?;
        assert!(temp_dir.as_path()?.exists());
        assert!(temp_dir.as_path()?.is_dir());
        Ok(())
    }

    #[test]
    fn test_tempdir_removed_on_drop() -> Result<()> {
        let temp_dir = TrustedDir::tempdir()?;
        let path = temp_dir.as_path()?;
        drop(temp_dir);
        assert!(!path.exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_deletes_contents() -> Result<()> {
        let temp_dir = TrustedDir::tempdir()?;
        let path = temp_dir.as_path()?;
        let file = temp_dir.join_file("payload.bin")?;
        file.write_async(b"payload").await?;
        assert!(file.exists());

        temp_dir.remove()?;
        assert!(!path.exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_preserve_keeps_directory() -> Result<()> {
        let temp_dir = TrustedDir::tempdir()?;
        let file = temp_dir.join_file("payload.bin")?;
        file.write_async(b"payload").await?;

        let preserved = temp_dir.preserve();
        let path = preserved.as_path()?;
        assert!(path.join("payload.bin").exists());

        preserved.remove()?;
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_relative_path() {
        assert!(RelativePath::try_from("/absolute/path").is_err());
        assert!(RelativePath::try_from("../escape.exe").is_err());
        assert!(RelativePath::try_from("./installer.exe").is_err());
        assert!(RelativePath::try_from("").is_err());
        assert!(RelativePath::try_from("relative/path").is_ok());
    }
}
