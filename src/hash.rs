//! Cache-busting tokens for the shared stylesheet and script.

use std::fs;
use std::io;
use std::path::Path;

use sha2::Digest;
use sha2::Sha256;

/// Hex digits kept from the digest.
const TOKEN_LEN: usize = 10;

/// A short content hash of `bytes`.
pub fn revision(bytes: &[u8]) -> String {
  let mut hasher = Sha256::new();
  hasher.update(bytes);
  let mut token = hex::encode(hasher.finalize());
  token.truncate(TOKEN_LEN);
  token
}

/// A short content hash of the file at `path`.
pub fn hash_file(path: &Path) -> io::Result<String> {
  Ok(revision(&fs::read(path)?))
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_revision() {
    // sha256("") = e3b0c44298fc1c149afbf4c8996fb924...
    check!(revision(b"") == "e3b0c44298");
    check!(revision(b"body { color: red }").len() == TOKEN_LEN);
    check!(revision(b"a") != revision(b"b"));
  }

  #[test]
  fn test_hash_file() -> io::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("style.css");
    fs::write(&path, b"")?;
    check!(hash_file(&path)? == "e3b0c44298");
    check!(hash_file(&dir.path().join("missing.css")).is_err());
    Ok(())
  }
}
