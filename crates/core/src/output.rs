use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Write the archive payload to `path`, creating missing parent directories.
///
/// Returns an error if a directory already sits at the target; an existing
/// file is overwritten.
pub fn write_archive<P: AsRef<Path>>(path: P, payload: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Err(io::Error::new(
            ErrorKind::AlreadyExists,
            "output path exists and is a directory",
        ));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, payload)
}
