use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    /// A directory (the root or any descendant) could not be listed.
    #[error("couldn't enter {}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The output file could not be removed, created or written.
    #[error("couldn't write {}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ManifestError {
    pub fn directory_read(path: &Path, source: io::Error) -> Self {
        ManifestError::DirectoryRead {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn file_write(path: &Path, source: io::Error) -> Self {
        ManifestError::FileWrite {
            path: path.to_path_buf(),
            source,
        }
    }
}
