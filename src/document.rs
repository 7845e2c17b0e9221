use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PatchError, Result};

/// Full text of a file held in memory between read and write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub content: String,
}

impl Document {
    /// Read the whole file as UTF-8
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading file: {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| PatchError::io_error(e, path))?;

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Replace the in-memory text
    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Truncate the file and write the current text back to it.
    /// The write is not atomic.
    pub fn write(&self) -> Result<()> {
        debug!(
            "Writing {} bytes to file: {}",
            self.content.len(),
            self.path.display()
        );
        fs::write(&self.path, self.content.as_bytes())
            .map_err(|e| PatchError::io_error(e, &self.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::tempdir;

    #[test]
    fn test_read_and_write_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.ts");
        fs::write(&path, "const a = 1;\n").unwrap();

        let mut doc = Document::read(&path).unwrap();
        assert_eq!(doc.content, "const a = 1;\n");

        doc.set_content("const a = 2;".to_string());
        doc.write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "const a = 2;");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = Document::read(dir.path().join("missing.ts")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.ts");
        fs::write(&path, b"\xff\xfe\x00").unwrap();

        let err = Document::read(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
        assert_eq!(fs::read(&path).unwrap(), b"\xff\xfe\x00");
    }
}
