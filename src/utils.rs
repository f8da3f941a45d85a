//! Small filesystem and text helpers shared by the checks

use std::fs;
use std::io;
use std::path::Path;

/// Read a file as text, replacing invalid UTF-8 instead of failing
///
/// Content checks are plain substring searches, so a stray byte in a config
/// file should not hide every other match.
pub fn read_text(path: &Path) -> io::Result<String> {
  let bytes = fs::read(path)?;
  Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Return the needles that do not occur literally (case-sensitive) in `content`
///
/// Order follows `needles`.
pub fn missing_literals<'a, S: AsRef<str>>(content: &str, needles: &'a [S]) -> Vec<&'a str> {
  needles
    .iter()
    .map(|n| n.as_ref())
    .filter(|n| !content.contains(n))
    .collect()
}

/// Check whether the "other" permission class can read the file
///
/// Always false on platforms without Unix permission bits.
#[cfg(unix)]
pub fn is_world_readable(path: &Path) -> io::Result<bool> {
  use std::os::unix::fs::PermissionsExt;

  let mode = fs::metadata(path)?.permissions().mode();
  Ok(mode & 0o004 != 0)
}

#[cfg(not(unix))]
pub fn is_world_readable(_path: &Path) -> io::Result<bool> {
  Ok(false)
}
