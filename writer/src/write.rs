//! Create-or-truncate file write.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::WriterError;

/// Write `content` to `path`, replacing whatever was there.
///
/// The file is created if absent and truncated otherwise. Content is written
/// verbatim with no trailing newline. On unix the raw argument bytes are
/// written, whatever their encoding. The handle is closed on every return
/// path; no fsync is issued.
pub fn write_to_file(path: &Path, content: &OsStr) -> Result<(), WriterError> {
    let mut file = File::create(path).map_err(|source| WriterError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(&content_bytes(content))
        .map_err(|source| WriterError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(())
}

#[cfg(unix)]
fn content_bytes(content: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(content.as_bytes())
}

#[cfg(not(unix))]
fn content_bytes(content: &OsStr) -> Cow<'_, [u8]> {
    match content.to_string_lossy() {
        Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
        Cow::Owned(text) => Cow::Owned(text.into_bytes()),
    }
}
