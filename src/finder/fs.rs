//! Filesystem access for the traversal engine and the size filters.
//!
//! The engine only needs to classify a path, list a directory one level deep
//! and read a file size, so any storage implementing [`FileSystem`] can be
//! searched.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::errors::{FindError, FindResult};

/// Capabilities the finder needs from a filesystem
pub trait FileSystem {
    /// Check if the path exists and is a directory (symlinks are followed)
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if the path itself is a symbolic link
    fn is_symlink(&self, path: &Path) -> bool;

    /// List the immediate children of a directory
    fn list_children(&self, dir: &Path) -> FindResult<Vec<PathBuf>>;

    /// Get the size of a file in bytes
    fn size_of(&self, path: &Path) -> FindResult<u64>;
}

/// The operating system's filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }

    fn is_symlink(&self, path: &Path) -> bool {
        path.symlink_metadata()
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false)
    }

    fn list_children(&self, dir: &Path) -> FindResult<Vec<PathBuf>> {
        let walker = WalkDir::new(dir).min_depth(1).max_depth(1);
        let mut children = Vec::new();

        for entry in walker {
            match entry {
                Ok(entry) => children.push(entry.into_path()),
                // The directory itself could not be opened
                Err(err) if err.path() == Some(dir) => return Err(err.into()),
                Err(err) => debug!("Skipping entry in {}: {}", dir.display(), err),
            }
        }

        Ok(children)
    }

    fn size_of(&self, path: &Path) -> FindResult<u64> {
        fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| FindError::filesystem(e, path))
    }
}
