use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::ManifestError;

/// Collects every non-directory entry under `root`.
///
/// Each directory contributes its files (sorted by name) followed by the
/// results of its subdirectories, depth-first, when `recursive` is set.
/// Any directory that can't be listed aborts the whole walk.
pub fn traverse(root: &Path, recursive: bool) -> Result<Vec<PathBuf>, ManifestError> {
    let mut files = Vec::new();
    // Pending directories, top of the stack is visited next.
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let listing = list_dir(&dir)?;
        debug!(
            dir = %dir.display(),
            files = listing.files.len(),
            subdirs = listing.subdirs.len(),
            "listed directory"
        );

        files.extend(listing.files);
        if recursive {
            pending.extend(listing.subdirs.into_iter().rev());
        }
    }

    Ok(files)
}

struct DirListing {
    files: Vec<PathBuf>,
    subdirs: Vec<PathBuf>,
}

fn list_dir(dir: &Path) -> Result<DirListing, ManifestError> {
    let mut entries = fs::read_dir(dir)
        .and_then(|entries| {
            entries
                .map(|entry| {
                    let entry = entry?;
                    let is_dir = entry.file_type()?.is_dir();
                    Ok((entry.file_name(), is_dir))
                })
                .collect::<io::Result<Vec<_>>>()
        })
        .map_err(|source| ManifestError::directory_read(dir, source))?;
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut listing = DirListing {
        files: Vec::new(),
        subdirs: Vec::new(),
    };
    for (name, is_dir) in entries {
        let path = clean_path(&dir.join(name));
        if is_dir {
            listing.subdirs.push(path);
        } else {
            listing.files.push(path);
        }
    }
    Ok(listing)
}

/// Lexically normalizes a path: drops `.` segments and redundant separators,
/// folds `..` into a preceding normal segment. An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut kept: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match kept.last() {
                Some(Component::Normal(_)) => {
                    kept.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => kept.push(component),
            },
            other => kept.push(other),
        }
    }

    if kept.is_empty() {
        PathBuf::from(".")
    } else {
        kept.into_iter().collect()
    }
}
