use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use bytes::{BufMut, Bytes, BytesMut};
use tracing::info;

use crate::error::ManifestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The destination existed and was replaced.
    Replaced,
    /// The destination didn't exist.
    Created,
}

/// One path per line, no trailing newline.
pub fn render_list(files: &[PathBuf]) -> Bytes {
    let mut buf = BytesMut::new();
    for (idx, file) in files.iter().enumerate() {
        if idx > 0 {
            buf.put_u8(b'\n');
        }
        buf.put_slice(file.to_string_lossy().as_bytes());
    }
    buf.freeze()
}

/// Writes the manifest to `destination`, deleting any previous file first.
///
/// `report` learns whether the destination is being replaced or created
/// before anything on disk is touched, so it runs even if the write fails.
pub fn write_list<F>(
    destination: &Path,
    files: &[PathBuf],
    report: F,
) -> Result<WriteOutcome, ManifestError>
where
    F: FnOnce(WriteOutcome),
{
    let write_err = |source| ManifestError::file_write(destination, source);

    // symlink_metadata so a dangling link counts as existing too
    let outcome = if fs::symlink_metadata(destination).is_ok() {
        WriteOutcome::Replaced
    } else {
        WriteOutcome::Created
    };
    report(outcome);

    if outcome == WriteOutcome::Replaced {
        fs::remove_file(destination).map_err(write_err)?;
    }

    let payload = render_list(files);
    let mut file = File::create(destination).map_err(write_err)?;
    file.write_all(&payload).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    info!(
        destination = %destination.display(),
        lines = files.len(),
        bytes = payload.len(),
        ?outcome,
        "wrote file list"
    );
    Ok(outcome)
}
