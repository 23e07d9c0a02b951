//! All-or-nothing file replacement.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Replaces `path` with `contents` via a temp file in the same directory.
///
/// On error the previous file, if any, is left untouched.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};
	let mut file = NamedTempFile::new_in(dir)?;
	file.write_all(contents.as_bytes())?;
	file.as_file().sync_all()?;
	file.persist(path).map_err(|err| err.error)?;
	Ok(())
}
