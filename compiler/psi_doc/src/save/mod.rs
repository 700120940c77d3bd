//! Writing documents to disk.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use crate::Element;

/// Failure to persist a document.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to write document to `{}`: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to replace `{}`: {source}", .path.display())]
    Replace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write `document` as XML to `path`.
///
/// The text goes to a uniquely named temporary file in the same directory,
/// which is then renamed over `path`, so `path` either holds the complete
/// document or is untouched. No other file in the directory is touched.
/// An existing `path` keeps its permissions.
pub fn save(path: &Path, document: &Element) -> Result<(), SaveError> {
    debug!(path = %path.display(), nodes = document.node_count(), "saving document");

    let write_error = |source| SaveError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Dropping the temp file on an error path deletes it.
    let tmp = NamedTempFile::new_in(parent_dir(path)).map_err(write_error)?;
    if let Ok(existing) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(write_error)?;
    }
    write_file(tmp.as_file(), document).map_err(write_error)?;

    tmp.persist(path).map_err(|err| SaveError::Replace {
        path: path.to_path_buf(),
        source: err.error,
    })?;
    Ok(())
}

fn write_file(file: &File, document: &Element) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    writer.write_all(document.to_xml().as_bytes())?;
    writer.into_inner().map_err(io::IntoInnerError::into_error)?.sync_all()
}

/// Directory the temp file is created in; a bare file name means the
/// current directory.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
